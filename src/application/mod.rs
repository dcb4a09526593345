//! Application services (use cases).
//!
//! These services hold the mint-relay logic and reach the outside world only
//! through ports.

pub mod dispatch;
pub mod normalize;
pub mod notifier;
pub mod render;
pub mod status;

pub use dispatch::{DispatchSummary, WebhookBody, WebhookDispatcher};
pub use normalize::{normalize, Normalized, SkipReason};
pub use notifier::Notifier;
pub use status::ServiceStatus;
