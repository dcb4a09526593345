//! Lenient views over Helius webhook records.
//!
//! Every field is optional and unknown fields are ignored. A field of the
//! wrong JSON type reads as absent, so one odd field never hides the rest of
//! the record from the branch that matches it. The provider
//! sends two broad families of records: "enhanced" transactions carrying a
//! `type` tag, and raw RPC transactions carrying a nested `transaction`.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Number, Value};

pub(super) const NFT_MINT: &str = "NFT_MINT";
pub(super) const COMPRESSED_NFT_MINT: &str = "COMPRESSED_NFT_MINT";
pub(super) const TOKEN_MINT: &str = "TOKEN_MINT";

/// Top-level webhook record.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(super) struct RawRecord {
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub signature: Option<String>,
    /// Enhanced-format event time.
    #[serde(deserialize_with = "lenient")]
    pub timestamp: Option<Number>,
    /// Raw-format block time.
    #[serde(deserialize_with = "lenient")]
    pub block_time: Option<Number>,
    #[serde(deserialize_with = "lenient")]
    pub fee_payer: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub events: Option<RecordEvents>,
    #[serde(deserialize_with = "lenient")]
    pub token_transfers: Option<Vec<TokenTransfer>>,
    #[serde(deserialize_with = "lenient")]
    pub account_data: Option<Vec<AccountData>>,
    /// Embedded raw transaction; only its presence and a couple of paths
    /// inside it matter, so it stays untyped.
    pub transaction: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub meta: Option<TransactionMeta>,
}

impl RawRecord {
    /// Transfers, or an empty slice when the field is absent.
    pub fn transfers(&self) -> &[TokenTransfer] {
        self.token_transfers.as_deref().unwrap_or_default()
    }

    /// Mint of the first transfer, if any.
    pub fn first_transfer_mint(&self) -> Option<&str> {
        self.transfers().first().and_then(|t| t.mint.as_deref())
    }

    /// Account of the first `accountData` entry, if any.
    pub fn first_account(&self) -> Option<&str> {
        self.account_data
            .as_deref()
            .and_then(|data| data.first())
            .and_then(|entry| entry.account.as_deref())
    }

    /// NFT metadata attached by the enhanced parser.
    pub fn nft(&self) -> Option<&NftEvent> {
        self.events.as_ref().and_then(|e| e.nft.as_ref())
    }

    /// Post-transaction token balances, or an empty slice.
    pub fn post_token_balances(&self) -> &[TokenBalance] {
        self.meta
            .as_ref()
            .and_then(|m| m.post_token_balances.as_deref())
            .unwrap_or_default()
    }

    /// The embedded transaction, when present and not null.
    pub fn embedded_transaction(&self) -> Option<&Value> {
        self.transaction.as_ref().filter(|tx| !tx.is_null())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct RecordEvents {
    #[serde(deserialize_with = "lenient")]
    pub nft: Option<NftEvent>,
}

/// NFT metadata from the enhanced parser.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(super) struct NftEvent {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub symbol: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub image_url: Option<String>,
    /// Older payloads use `image` instead of `imageUrl`.
    #[serde(deserialize_with = "lenient")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
}

impl NftEvent {
    /// Image under either key, preferring `imageUrl`. Empty strings count as absent.
    pub fn image(&self) -> Option<&str> {
        non_empty(self.image_url.as_deref()).or_else(|| non_empty(self.image.as_deref()))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(super) struct TokenTransfer {
    #[serde(deserialize_with = "lenient")]
    pub mint: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub token_amount: Option<TokenAmount>,
}

impl TokenTransfer {
    /// Whether this transfer moved exactly one token.
    pub fn is_single_token(&self) -> bool {
        self.token_amount.as_ref().is_some_and(TokenAmount::is_one)
    }
}

/// Token amount as sent by the provider: sometimes a number, sometimes a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum TokenAmount {
    Number(f64),
    Text(String),
}

impl TokenAmount {
    /// Exactly `1` as a number, or exactly the string `"1"`.
    ///
    /// Strings such as `"1.0"` or `" 1"` do not qualify.
    pub fn is_one(&self) -> bool {
        match self {
            Self::Number(n) => *n == 1.0,
            Self::Text(s) => s == "1",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct AccountData {
    #[serde(deserialize_with = "lenient")]
    pub account: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(super) struct TransactionMeta {
    #[serde(deserialize_with = "lenient")]
    pub post_token_balances: Option<Vec<TokenBalance>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(super) struct TokenBalance {
    #[serde(deserialize_with = "lenient")]
    pub mint: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub ui_token_amount: Option<UiTokenAmount>,
}

impl TokenBalance {
    /// `uiAmount == 1` with `decimals == 0`: a freshly minted single-supply token.
    pub fn is_single_supply(&self) -> bool {
        self.ui_token_amount
            .as_ref()
            .is_some_and(|amount| amount.ui_amount == Some(1.0) && amount.decimals == Some(0))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(super) struct UiTokenAmount {
    #[serde(deserialize_with = "lenient")]
    pub ui_amount: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub decimals: Option<u64>,
}

/// First account key of the embedded transaction message.
///
/// Accepts both the plain (`"accountKeys": ["..."]`) and the `jsonParsed`
/// (`"accountKeys": [{"pubkey": "..."}]`) encodings.
pub(super) fn first_account_key(transaction: &Value) -> Option<String> {
    let key = transaction.pointer("/message/accountKeys/0")?;
    key.as_str()
        .or_else(|| key.get("pubkey").and_then(Value::as_str))
        .map(str::to_owned)
}

/// First signature of the embedded transaction.
pub(super) fn first_signature(transaction: &Value) -> Option<String> {
    transaction
        .pointer("/signatures/0")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Unix seconds from a JSON number; fractional seconds are truncated.
pub(super) fn unix_seconds(value: Option<&Number>) -> Option<i64> {
    let value = value?;
    value
        .as_i64()
        .or_else(|| value.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
}

/// Decode a field, treating a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
