//! Canonical NFT mint record.
//!
//! A [`MintEvent`] is produced by the normalizer from a webhook record that
//! was classified as an NFT mint. Fields are crate-visible so that only the
//! normalizer (and the crate's test utilities) can build one; everything
//! else reads through accessors.

use std::fmt;

use serde::Serialize;

/// Fallback for unresolvable addresses.
pub const UNKNOWN: &str = "Unknown";

/// Fallback display name when no metadata name is available.
pub const UNKNOWN_NFT: &str = "Unknown NFT";

/// How the minted asset is stored on chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MintKind {
    /// Regular token-account backed NFT.
    Standard,
    /// State-compressed NFT (cNFT).
    Compressed,
}

impl MintKind {
    /// Whether the asset is a compressed NFT.
    #[must_use]
    pub const fn is_compressed(self) -> bool {
        matches!(self, Self::Compressed)
    }
}

impl fmt::Display for MintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Compressed => write!(f, "compressed"),
        }
    }
}

/// A single observed NFT mint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MintEvent {
    pub(crate) signature: Option<String>,
    pub(crate) timestamp_seconds: Option<i64>,
    pub(crate) mint_kind: MintKind,
    pub(crate) mint_address: String,
    pub(crate) name: String,
    pub(crate) symbol: String,
    pub(crate) image_url: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) creator_address: String,
    pub(crate) fee_payer: Option<String>,
}

impl MintEvent {
    /// Transaction signature, if the record carried one.
    #[must_use]
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Block or event time in unix seconds.
    #[must_use]
    pub const fn timestamp_seconds(&self) -> Option<i64> {
        self.timestamp_seconds
    }

    #[must_use]
    pub const fn mint_kind(&self) -> MintKind {
        self.mint_kind
    }

    /// Mint (token) address, or [`UNKNOWN`].
    #[must_use]
    pub fn mint_address(&self) -> &str {
        &self.mint_address
    }

    /// Display name, or [`UNKNOWN_NFT`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Collection symbol; may be empty.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Creator account, or [`UNKNOWN`].
    #[must_use]
    pub fn creator_address(&self) -> &str {
        &self.creator_address
    }

    /// Account that paid the transaction fee.
    #[must_use]
    pub fn fee_payer(&self) -> Option<&str> {
        self.fee_payer.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_compressed_kind_reports_compressed() {
        assert!(MintKind::Compressed.is_compressed());
        assert!(!MintKind::Standard.is_compressed());
    }

    #[test]
    fn mint_kind_serializes_snake_case() {
        let json = serde_json::to_string(&MintKind::Compressed).unwrap();
        assert_eq!(json, r#""compressed""#);
    }
}
