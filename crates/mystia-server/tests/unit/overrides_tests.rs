//! Tests for command-line overrides of loaded configuration

use figment::Jail;
use mystia_server::ServerOverrides;
use mystia_server::init::load_config;

const SECRET: &str = "overrides-test-secret-0123456789abcdef";

#[test]
fn test_no_overrides_keeps_loaded_values() {
    Jail::expect_with(|jail| {
        jail.set_env("MYSTIA__AUTH__JWT__SECRET", SECRET);

        let config = load_config(None, ServerOverrides::default()).unwrap();
        assert_eq!(config.server.port, 50051);
        assert_eq!(config.media.url, "http://127.0.0.1:7880");
        Ok(())
    });
}

#[test]
fn test_port_flags_override_environment() {
    Jail::expect_with(|jail| {
        jail.set_env("JWT_SECRET", SECRET);
        jail.set_env("PORT", "6000");

        let overrides = ServerOverrides {
            port: Some(6500),
            media_port: Some(7881),
        };
        let config = load_config(None, overrides).unwrap();
        assert_eq!(config.server.port, 6500);
        assert_eq!(config.media.url, "http://127.0.0.1:7881");
        Ok(())
    });
}

#[test]
fn test_zero_port_override_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("JWT_SECRET", SECRET);

        let overrides = ServerOverrides {
            port: Some(0),
            media_port: None,
        };
        assert!(load_config(None, overrides).is_err());
        Ok(())
    });
}

#[test]
fn test_port_flag_replaces_invalid_loaded_port() {
    Jail::expect_with(|jail| {
        jail.set_env("JWT_SECRET", SECRET);
        jail.set_env("PORT", "0");

        assert!(load_config(None, ServerOverrides::default()).is_err());

        let overrides = ServerOverrides {
            port: Some(8080),
            media_port: None,
        };
        let config = load_config(None, overrides).unwrap();
        assert_eq!(config.server.port, 8080);
        Ok(())
    });
}
