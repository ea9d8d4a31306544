//! Server-specific constants
//!
//! Method identifiers of the RPC surface and call metadata keys.

// ============================================================================
// METHOD IDENTIFIERS
// ============================================================================

/// Create an account
pub const METHOD_REGISTER: &str = "/voice.AuthService/Register";

/// Exchange credentials for a session token
pub const METHOD_LOGIN: &str = "/voice.AuthService/Login";

/// List all channels
pub const METHOD_LIST_CHANNELS: &str = "/voice.ChannelService/ListChannels";

/// Obtain a media server grant for a channel
pub const METHOD_JOIN_CHANNEL: &str = "/voice.ChannelService/JoinChannel";

/// Create a channel
pub const METHOD_CREATE_CHANNEL: &str = "/voice.ChannelService/CreateChannel";

/// Grant or revoke admin
pub const METHOD_SET_ADMIN_STATUS: &str = "/voice.AdminService/SetAdminStatus";

/// List all accounts
pub const METHOD_LIST_USERS: &str = "/voice.AdminService/ListUsers";

/// Methods callable without a session token
///
/// Closed list, matched exactly.
pub const PUBLIC_METHODS: &[&str] = &[METHOD_REGISTER, METHOD_LOGIN];

// ============================================================================
// CALL METADATA
// ============================================================================

/// Metadata key carrying the bearer credential
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// Prefix stripped from the credential before decoding
pub const BEARER_PREFIX: &str = "Bearer ";
