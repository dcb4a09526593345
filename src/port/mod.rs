//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the seams where adapters plug external systems into the
//! application layer.
//!
//! ```text
//!   ┌──────────────┐      ┌──────────────────┐      ┌──────────────┐
//!   │ HTTP / CLI   │ ───▶ │   Application    │ ───▶ │ ChatChannel  │
//!   │  (inbound)   │      │ normalize/notify │      │  (Telegram)  │
//!   └──────────────┘      └──────────────────┘      └──────────────┘
//! ```

pub mod outbound;

pub use outbound::chat::{ChatChannel, LogChannel};
