//! Platform-agnostic domain types.

mod message;
mod mint;

pub use message::{Accent, ChatMessage, FieldValue, MessageField, MessageLink};
pub use mint::{MintEvent, MintKind, UNKNOWN, UNKNOWN_NFT};
