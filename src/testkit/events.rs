//! Builder for mint events used by renderer and dispatch tests.

use crate::domain::{MintEvent, MintKind, UNKNOWN, UNKNOWN_NFT};

/// Fluent builder over [`MintEvent`] with realistic defaults.
#[derive(Debug, Clone)]
pub struct MintEventBuilder {
    event: MintEvent,
}

impl Default for MintEventBuilder {
    fn default() -> Self {
        Self {
            event: MintEvent {
                signature: Some(
                    "5VERYLONGSIGNATUREabcdefghijklmnopqrstuvwxyz0123456789".to_string(),
                ),
                timestamp_seconds: Some(1_700_000_000),
                mint_kind: MintKind::Standard,
                mint_address: "MintAddr11111111111111111111111111111111111".to_string(),
                name: "Mad Lad #42".to_string(),
                symbol: "MAD".to_string(),
                image_url: Some("https://arweave.net/madlad42.png".to_string()),
                description: None,
                creator_address: "Creator11111111111111111111111111111111111".to_string(),
                fee_payer: None,
            },
        }
    }
}

impl MintEventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every optional field absent and every fallback in place.
    pub fn minimal() -> Self {
        Self {
            event: MintEvent {
                signature: None,
                timestamp_seconds: None,
                mint_kind: MintKind::Standard,
                mint_address: UNKNOWN.to_string(),
                name: UNKNOWN_NFT.to_string(),
                symbol: String::new(),
                image_url: None,
                description: None,
                creator_address: UNKNOWN.to_string(),
                fee_payer: None,
            },
        }
    }

    pub fn signature(mut self, signature: Option<&str>) -> Self {
        self.event.signature = signature.map(str::to_owned);
        self
    }

    pub fn timestamp(mut self, seconds: Option<i64>) -> Self {
        self.event.timestamp_seconds = seconds;
        self
    }

    pub fn kind(mut self, kind: MintKind) -> Self {
        self.event.mint_kind = kind;
        self
    }

    pub fn mint_address(mut self, address: &str) -> Self {
        self.event.mint_address = address.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.event.name = name.to_string();
        self
    }

    pub fn symbol(mut self, symbol: &str) -> Self {
        self.event.symbol = symbol.to_string();
        self
    }

    pub fn image(mut self, url: Option<&str>) -> Self {
        self.event.image_url = url.map(str::to_owned);
        self
    }

    pub fn creator(mut self, address: &str) -> Self {
        self.event.creator_address = address.to_string();
        self
    }

    pub fn fee_payer(mut self, address: Option<&str>) -> Self {
        self.event.fee_payer = address.map(str::to_owned);
        self
    }

    pub fn build(self) -> MintEvent {
        self.event
    }
}
