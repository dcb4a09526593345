//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`records`] - Webhook record fixtures for each payload shape.
//! - [`channel`] - [`ChatChannel`](crate::port::ChatChannel) doubles that
//!   record or reject messages.
//! - [`events`] - A builder for [`MintEvent`](crate::domain::MintEvent) values.

pub mod channel;
pub mod events;
pub mod records;
