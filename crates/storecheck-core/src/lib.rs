use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod money;
pub mod quote;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use money::Money;
pub use quote::{CartQuote, CheckoutQuote, Selection};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid monetary amount \"{input}\"")]
    InvalidAmount { input: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
