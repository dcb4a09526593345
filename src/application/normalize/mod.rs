//! Webhook record normalization.
//!
//! Turns one raw provider record into a [`MintEvent`] or explains why the
//! record is not an NFT mint. Classification is ordered and the first
//! matching shape wins:
//!
//! 1. enhanced NFT mint (`NFT_MINT` / `COMPRESSED_NFT_MINT`)
//! 2. generic `TOKEN_MINT` that moved exactly one token
//! 3. raw RPC transaction with a fresh single-supply balance
//!
//! The normalizer never fails. Fields of the wrong JSON type read as absent;
//! a record that cannot be decoded at all becomes
//! [`Normalized::NotApplicable`] with [`SkipReason::Malformed`].

mod record;

use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::{MintEvent, MintKind, UNKNOWN, UNKNOWN_NFT};

use record::{RawRecord, COMPRESSED_NFT_MINT, NFT_MINT, TOKEN_MINT};

/// Outcome of normalizing one record.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// The record is an NFT mint.
    Mint(MintEvent),
    /// The record is skipped.
    NotApplicable(SkipReason),
}

impl Normalized {
    /// The mint event, if any.
    #[must_use]
    pub fn into_mint(self) -> Option<MintEvent> {
        match self {
            Self::Mint(event) => Some(event),
            Self::NotApplicable(_) => None,
        }
    }

    #[must_use]
    pub const fn is_mint(&self) -> bool {
        matches!(self, Self::Mint(_))
    }
}

/// Why a record was not turned into a mint event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// `TOKEN_MINT` where no transfer moved exactly one token.
    FungibleSupply,
    /// Raw transaction without a single-supply post balance.
    NoSingleSupplyBalance,
    /// None of the known shapes matched.
    UnrecognizedShape,
    /// The record could not be read.
    Malformed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FungibleSupply => write!(f, "token mint with supply > 1"),
            Self::NoSingleSupplyBalance => write!(f, "no single-supply token balance"),
            Self::UnrecognizedShape => write!(f, "unknown transaction format or not an NFT mint"),
            Self::Malformed(reason) => write!(f, "malformed record: {reason}"),
        }
    }
}

/// Which known payload family a record belongs to.
enum RecordShape<'a> {
    Enhanced(MintKind),
    TokenMint,
    RawTransaction(&'a Value),
    Unrecognized,
}

impl<'a> RecordShape<'a> {
    fn of(raw: &'a RawRecord) -> Self {
        match raw.kind.as_deref() {
            Some(NFT_MINT) => Self::Enhanced(MintKind::Standard),
            Some(COMPRESSED_NFT_MINT) => Self::Enhanced(MintKind::Compressed),
            Some(TOKEN_MINT) => Self::TokenMint,
            _ => raw
                .embedded_transaction()
                .map_or(Self::Unrecognized, Self::RawTransaction),
        }
    }
}

/// Normalize one raw webhook record.
pub fn normalize(record: &Value) -> Normalized {
    let outcome = if record.is_object() {
        match RawRecord::deserialize(record) {
            Ok(raw) => classify(&raw),
            Err(e) => Normalized::NotApplicable(SkipReason::Malformed(e.to_string())),
        }
    } else {
        Normalized::NotApplicable(SkipReason::UnrecognizedShape)
    };

    match &outcome {
        Normalized::Mint(event) => debug!(
            signature = event.signature().unwrap_or("-"),
            mint = %event.mint_address(),
            kind = %event.mint_kind(),
            "Record normalized"
        ),
        Normalized::NotApplicable(reason) => info!(
            signature = record.get("signature").and_then(|v| v.as_str()).unwrap_or("-"),
            reason = %reason,
            "Record skipped"
        ),
    }

    outcome
}

fn classify(raw: &RawRecord) -> Normalized {
    match RecordShape::of(raw) {
        RecordShape::Enhanced(kind) => Normalized::Mint(enhanced_mint(raw, kind)),
        RecordShape::TokenMint => token_mint(raw),
        RecordShape::RawTransaction(transaction) => raw_transaction_mint(raw, transaction),
        RecordShape::Unrecognized => Normalized::NotApplicable(SkipReason::UnrecognizedShape),
    }
}

fn enhanced_mint(raw: &RawRecord, kind: MintKind) -> MintEvent {
    let nft = raw.nft();

    MintEvent {
        signature: raw.signature.clone(),
        timestamp_seconds: record::unix_seconds(raw.timestamp.as_ref()),
        mint_kind: kind,
        mint_address: or_fallback(raw.first_transfer_mint(), UNKNOWN),
        name: or_fallback(nft.and_then(|n| n.name.as_deref()), UNKNOWN_NFT),
        symbol: nft.and_then(|n| n.symbol.clone()).unwrap_or_default(),
        image_url: nft.and_then(|n| n.image()).map(str::to_owned),
        description: nft.and_then(|n| n.description.clone()),
        creator_address: or_fallback(raw.first_account(), UNKNOWN),
        fee_payer: raw.fee_payer.clone(),
    }
}

fn token_mint(raw: &RawRecord) -> Normalized {
    if !raw.transfers().iter().any(|t| t.is_single_token()) {
        return Normalized::NotApplicable(SkipReason::FungibleSupply);
    }

    let first_mint = raw.first_transfer_mint();

    Normalized::Mint(MintEvent {
        signature: raw.signature.clone(),
        timestamp_seconds: record::unix_seconds(raw.timestamp.as_ref()),
        mint_kind: MintKind::Standard,
        mint_address: or_fallback(first_mint, UNKNOWN),
        name: or_fallback(first_mint, UNKNOWN_NFT),
        symbol: String::new(),
        image_url: None,
        description: None,
        creator_address: or_fallback(raw.first_account(), UNKNOWN),
        fee_payer: raw.fee_payer.clone(),
    })
}

fn raw_transaction_mint(raw: &RawRecord, transaction: &Value) -> Normalized {
    let Some(balance) = raw
        .post_token_balances()
        .iter()
        .find(|b| b.is_single_supply())
    else {
        return Normalized::NotApplicable(SkipReason::NoSingleSupplyBalance);
    };

    let mint = balance.mint.as_deref();

    Normalized::Mint(MintEvent {
        signature: raw
            .signature
            .clone()
            .or_else(|| record::first_signature(transaction)),
        // Raw RPC records carry `blockTime`, not `timestamp`.
        timestamp_seconds: record::unix_seconds(raw.block_time.as_ref()),
        mint_kind: MintKind::Standard,
        mint_address: or_fallback(mint, UNKNOWN),
        name: or_fallback(mint, UNKNOWN_NFT),
        symbol: String::new(),
        image_url: None,
        description: None,
        creator_address: UNKNOWN.to_string(),
        fee_payer: record::first_account_key(transaction),
    })
}

/// Owned value, or `fallback` when absent or empty.
fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    value
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
