//! Command-line and environment configuration.
use clap::Parser;
use scenarist_core::UnlockCode;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

/// Shortest accepted session signing key, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Values that show up in sample env files and must never reach production.
const PLACEHOLDER_SECRETS: &[&str] = &[
    "changeme",
    "change-me",
    "secret",
    "dev-secret",
    "dev-secret-change-me",
    "replace-me-with-a-long-random-string",
];

#[derive(Debug, Clone, Parser)]
#[command(name = "scenarist-server", version)]
#[command(about = "Serve Scenarist practice scenarios, the pack store and premium packs")]
pub struct Args {
    /// Shared code that unlocks premium packs
    #[arg(long, env = "UNLOCK_CODE", hide_env_values = true)]
    pub unlock_code: Option<String>,

    /// Key used to sign session cookies (at least 32 bytes)
    #[arg(long, env = "SESSION_SECRET", hide_env_values = true)]
    pub session_secret: Option<String>,

    /// Directory holding the JSON content files
    #[arg(long, env = "SCENARIST_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Address to bind
    #[arg(long, env = "SCENARIST_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "SCENARIST_PORT", default_value_t = 9000)]
    pub port: u16,

    /// Mark the session cookie `Secure` (serve over HTTPS)
    #[arg(long, env = "SCENARIST_SECURE_COOKIES")]
    pub secure_cookies: bool,

    /// Purchase link used for premium packs without their own
    #[arg(long, env = "SCENARIST_STORE_URL")]
    pub store_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("UNLOCK_CODE is not set")]
    MissingUnlockCode,
    #[error("UNLOCK_CODE must not be blank or padded with whitespace")]
    InvalidUnlockCode,
    #[error("SESSION_SECRET is not set")]
    MissingSessionSecret,
    #[error("SESSION_SECRET must be at least {MIN_SECRET_LEN} bytes (got {0})")]
    ShortSessionSecret(usize),
    #[error("SESSION_SECRET is a placeholder value")]
    PlaceholderSessionSecret,
}

/// Validated server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub unlock_code: UnlockCode,
    pub session_secret: Vec<u8>,
    pub data_dir: PathBuf,
    pub addr: SocketAddr,
    pub secure_cookies: bool,
    pub store_url: Option<String>,
}

impl ServerConfig {
    /// Validate parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a secret is missing or unusable.
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let raw_code = args.unlock_code.ok_or(ConfigError::MissingUnlockCode)?;
        if raw_code.trim().is_empty() {
            return Err(ConfigError::MissingUnlockCode);
        }
        let unlock_code = UnlockCode::parse(&raw_code).ok_or(ConfigError::InvalidUnlockCode)?;

        let secret = args
            .session_secret
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingSessionSecret)?;
        if PLACEHOLDER_SECRETS
            .iter()
            .any(|placeholder| secret.eq_ignore_ascii_case(placeholder))
        {
            return Err(ConfigError::PlaceholderSessionSecret);
        }
        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::ShortSessionSecret(secret.len()));
        }

        Ok(Self {
            unlock_code,
            session_secret: secret.into_bytes(),
            data_dir: args.data_dir,
            addr: SocketAddr::new(args.bind, args.port),
            secure_cookies: args.secure_cookies,
            store_url: args.store_url.filter(|url| !url.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["scenarist-server"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_apply() {
        let config = ServerConfig::from_args(args(&[
            "--unlock-code",
            "open-sesame",
            "--session-secret",
            SECRET,
        ]))
        .unwrap();
        assert_eq!(config.addr.to_string(), "0.0.0.0:9000");
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert!(!config.secure_cookies);
        assert!(config.store_url.is_none());
        assert_eq!(config.unlock_code, UnlockCode::parse("open-sesame").unwrap());
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let config = ServerConfig::from_args(args(&[
            "--unlock-code",
            "open-sesame",
            "--session-secret",
            SECRET,
            "--bind",
            "127.0.0.1",
            "--port",
            "8080",
            "--secure-cookies",
            "--store-url",
            "https://shop.example.com",
        ]))
        .unwrap();
        assert_eq!(config.addr.to_string(), "127.0.0.1:8080");
        assert!(config.secure_cookies);
        assert_eq!(config.store_url.as_deref(), Some("https://shop.example.com"));
    }

    #[test]
    fn unlock_code_is_required() {
        let base = Args {
            unlock_code: None,
            session_secret: Some(SECRET.to_string()),
            data_dir: PathBuf::from("data"),
            bind: IpAddr::from([127, 0, 0, 1]),
            port: 9000,
            secure_cookies: false,
            store_url: None,
        };
        assert_eq!(
            ServerConfig::from_args(base.clone()).unwrap_err(),
            ConfigError::MissingUnlockCode
        );
        let blank = Args {
            unlock_code: Some("   ".to_string()),
            ..base.clone()
        };
        assert_eq!(
            ServerConfig::from_args(blank).unwrap_err(),
            ConfigError::MissingUnlockCode
        );
        let padded = Args {
            unlock_code: Some(" code ".to_string()),
            ..base
        };
        assert_eq!(
            ServerConfig::from_args(padded).unwrap_err(),
            ConfigError::InvalidUnlockCode
        );
    }

    #[test]
    fn weak_secrets_are_rejected() {
        let base = Args {
            unlock_code: Some("open-sesame".to_string()),
            session_secret: None,
            data_dir: PathBuf::from("data"),
            bind: IpAddr::from([127, 0, 0, 1]),
            port: 9000,
            secure_cookies: false,
            store_url: None,
        };
        assert_eq!(
            ServerConfig::from_args(base.clone()).unwrap_err(),
            ConfigError::MissingSessionSecret
        );
        let short = Args {
            session_secret: Some("too-short".to_string()),
            ..base.clone()
        };
        assert_eq!(
            ServerConfig::from_args(short).unwrap_err(),
            ConfigError::ShortSessionSecret(9)
        );
        let placeholder = Args {
            session_secret: Some("Replace-Me-With-A-Long-Random-String".to_string()),
            ..base
        };
        assert_eq!(
            ServerConfig::from_args(placeholder).unwrap_err(),
            ConfigError::PlaceholderSessionSecret
        );
    }
}
