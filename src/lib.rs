//! Mintwatch - relay Helius NFT mint webhooks to a Telegram chat.
//!
//! Helius delivers transaction webhooks in three shapes: enhanced
//! transactions tagged `NFT_MINT` / `COMPRESSED_NFT_MINT`, enhanced
//! `TOKEN_MINT` records, and raw transactions. Each record is normalized
//! into a [`domain::MintEvent`] and posted to the configured chat.
//!
//! # Architecture
//!
//! - [`domain`] - Mint events and platform-neutral chat messages
//! - [`port`] - The [`port::ChatChannel`] trait
//! - [`application`] - Normalization, rendering, notification and dispatch
//! - [`adapter`] - axum HTTP server, clap CLI and the Telegram channel
//! - [`infrastructure`] - Configuration, logging and runtime wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Deliver through the Telegram Bot API
//! - `testkit` - Test doubles and payload fixtures
//!
//! # Example
//!
//! ```
//! use mintwatch::application::{normalize, Normalized};
//! use serde_json::json;
//!
//! let record = json!({
//!     "type": "TOKEN_MINT",
//!     "signature": "5abc",
//!     "tokenTransfers": [{ "mint": "Mint111", "tokenAmount": 1 }],
//! });
//! assert!(matches!(normalize(&record), Normalized::Mint(_)));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
