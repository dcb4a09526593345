//! Configuration loading and validation.

pub mod logging;
pub mod server;
pub mod settings;
pub mod telegram;

pub use logging::LoggingConfig;
pub use server::{ServerConfig, DEFAULT_PORT};
pub use settings::Config;
pub use telegram::TelegramSettings;
