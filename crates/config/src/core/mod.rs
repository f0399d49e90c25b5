//! Core configuration types

pub mod config;
pub mod error;
pub mod result;
pub mod source;

pub use config::GatewayConfig;
pub use error::ConfigError;
pub use result::ConfigResult;
pub use source::ConfigFormat;
