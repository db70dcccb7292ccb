//! Scenarist Server
//!
//! HTTP boundary for the Scenarist site: configuration, the filesystem
//! content loader, the signed session cookie and the axum router.
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod loader;
pub mod server;
pub mod session_codec;

pub use config::{Args, ConfigError, ServerConfig};
pub use error::AppError;
pub use loader::{FsContentLoader, LoaderError};
pub use server::{AppContext, AppState, create_router};
pub use session_codec::{CodecError, SESSION_COOKIE, SessionCodec};
