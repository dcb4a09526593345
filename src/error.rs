use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", vars.join(", "))]
    MissingEnv { vars: Vec<&'static str> },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Outbound chat delivery errors.
#[derive(Error, Debug, Clone)]
pub enum DeliveryError {
    /// The chat platform rejected or failed the request.
    #[error("chat platform request failed: {0}")]
    Platform(String),

    /// The target channel could not be resolved or accessed.
    #[error("channel {channel} unavailable: {reason}")]
    ChannelUnavailable { channel: String, reason: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("startup error: {0}")]
    Startup(String),
}

pub type Result<T> = std::result::Result<T, Error>;
