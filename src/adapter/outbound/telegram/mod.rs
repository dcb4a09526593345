//! Telegram chat channel and `/start` command handling.
//!
//! Requires the `telegram` feature to be enabled.

pub mod channel;
pub mod command;
pub mod format;
pub mod worker;

pub use channel::TelegramChannel;
pub use worker::spawn_command_worker;
