//! Outbound adapters (driven side).

#[cfg(feature = "telegram")]
pub mod telegram;
