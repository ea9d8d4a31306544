//! Error handling types

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Mystia backend
///
/// The set of variants is closed: every failure a call can produce lands in
/// one of them, and [`Error::status`] maps each one onto the boundary status
/// set without looking at message text.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or missing input fields; never reaches storage
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Missing, invalid or expired credential
    ///
    /// The message is always generic and never says which part was wrong.
    #[error("Authentication error: {message}")]
    Authentication {
        /// Generic description shown to the caller
        message: String,
    },

    /// Valid credential, but the caller may not perform the operation
    #[error("Permission denied: {message}")]
    PermissionDenied {
        /// Description of the denied operation
        message: String,
    },

    /// Referenced entity is absent
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Uniqueness violation on create
    #[error("Already exists: {message}")]
    AlreadyExists {
        /// Description of the conflicting entity
        message: String,
    },

    /// Storage, hashing or signing failure not attributable to caller input
    #[error("Internal error: {message}")]
    Internal {
        /// Description shown to the caller
        message: String,
        /// Optional source error, kept for server-side logging
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error, raised at startup
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an authentication error
    pub fn authentication<S: Into<String>>(message: S) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied<S: Into<String>>(message: S) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an already exists error
    pub fn already_exists<S: Into<String>>(message: S) -> Self {
        Self::AlreadyExists {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error with source
    pub fn internal_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Boundary status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidArgument { .. } => StatusCode::InvalidArgument,
            Self::Authentication { .. } => StatusCode::Unauthenticated,
            Self::PermissionDenied { .. } => StatusCode::PermissionDenied,
            Self::NotFound { .. } => StatusCode::NotFound,
            Self::AlreadyExists { .. } => StatusCode::AlreadyExists,
            Self::Internal { .. } | Self::Configuration { .. } => StatusCode::Internal,
        }
    }

    /// Message that may be shown to the caller
    ///
    /// Excludes the source chain, which can carry storage or library details.
    pub fn public_message(&self) -> &str {
        match self {
            Self::InvalidArgument { message }
            | Self::Authentication { message }
            | Self::PermissionDenied { message }
            | Self::AlreadyExists { message }
            | Self::Internal { message, .. }
            | Self::Configuration { message, .. } => message,
            Self::NotFound { resource } => resource,
        }
    }
}

/// Status signals understood by the transport collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    /// Malformed or missing input
    InvalidArgument,
    /// Missing or invalid credential
    Unauthenticated,
    /// Insufficient role or protected target
    PermissionDenied,
    /// Referenced entity is absent
    NotFound,
    /// Uniqueness violation
    AlreadyExists,
    /// Failure not attributable to the caller
    Internal,
}

impl StatusCode {
    /// Canonical upper-case name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::NotFound => "NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
