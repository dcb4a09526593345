//! Webhook record fixtures.
//!
//! Shapes follow what Helius actually sends: enhanced transactions with a
//! `type` tag, and raw RPC transactions with `meta` and `transaction`.

use serde_json::{json, Value};

/// Enhanced `NFT_MINT` record with full metadata.
pub fn enhanced_nft_mint(signature: &str, mint: &str) -> Value {
    json!({
        "type": "NFT_MINT",
        "signature": signature,
        "timestamp": 1_700_000_000,
        "feePayer": "FeePayer1111111111111111111111111111111111",
        "events": {
            "nft": {
                "name": "Mad Lad #42",
                "symbol": "MAD",
                "imageUrl": "https://arweave.net/madlad42.png",
                "description": "A mad lad"
            }
        },
        "tokenTransfers": [
            { "mint": mint, "tokenAmount": 1 }
        ],
        "accountData": [
            { "account": "Creator11111111111111111111111111111111111" }
        ]
    })
}

/// Enhanced `COMPRESSED_NFT_MINT` record.
pub fn compressed_nft_mint(signature: &str, mint: &str) -> Value {
    let mut record = enhanced_nft_mint(signature, mint);
    record["type"] = json!("COMPRESSED_NFT_MINT");
    record
}

/// `TOKEN_MINT` record with the given transfer amounts, all for `mint`.
pub fn token_mint(signature: &str, mint: &str, amounts: &[Value]) -> Value {
    let transfers: Vec<Value> = amounts
        .iter()
        .map(|amount| json!({ "mint": mint, "tokenAmount": amount }))
        .collect();
    json!({
        "type": "TOKEN_MINT",
        "signature": signature,
        "timestamp": 1_700_000_100,
        "feePayer": "FeePayer1111111111111111111111111111111111",
        "tokenTransfers": transfers,
        "accountData": []
    })
}

/// Raw RPC transaction whose post balances contain `balances`.
///
/// Each balance is `(mint, ui_amount, decimals)`.
pub fn raw_transaction(signature: &str, balances: &[(&str, f64, u64)]) -> Value {
    let post: Vec<Value> = balances
        .iter()
        .map(|(mint, ui_amount, decimals)| {
            json!({
                "accountIndex": 1,
                "mint": mint,
                "uiTokenAmount": {
                    "uiAmount": ui_amount,
                    "decimals": decimals,
                    "amount": ui_amount.to_string()
                }
            })
        })
        .collect();
    json!({
        "signature": signature,
        "blockTime": 1_700_000_200,
        "slot": 250_000_000,
        "meta": {
            "err": null,
            "postTokenBalances": post
        },
        "transaction": {
            "signatures": [signature],
            "message": {
                "accountKeys": [
                    "Payer111111111111111111111111111111111111111",
                    "Mint1111111111111111111111111111111111111111"
                ]
            }
        }
    })
}

/// A record that matches no known shape.
pub fn unrelated_transfer(signature: &str) -> Value {
    json!({
        "type": "TRANSFER",
        "signature": signature,
        "timestamp": 1_700_000_300,
        "nativeTransfers": [
            { "fromUserAccount": "a", "toUserAccount": "b", "amount": 5000 }
        ]
    })
}
