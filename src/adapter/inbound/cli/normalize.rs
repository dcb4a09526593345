//! Handler for the `normalize` command.
//!
//! Runs saved webhook payloads through the normalizer offline, which is
//! handy when a provider changes its payload shape.

use std::fs;

use serde_json::Value;

use crate::adapter::inbound::cli::command::NormalizeArgs;
use crate::adapter::inbound::cli::output;
use crate::application::{normalize, Normalized, WebhookBody};
use crate::error::Result;

/// Normalize every record of a payload file and print the outcome.
pub fn execute(args: &NormalizeArgs) -> Result<()> {
    let content = fs::read_to_string(&args.file)?;
    let body: Value = serde_json::from_str(&content)?;
    let records = WebhookBody::from(body).into_records();

    output::section("Records");
    let mut mints = 0;
    for (index, record) in records.iter().enumerate() {
        match normalize(record) {
            Normalized::Mint(event) => {
                mints += 1;
                output::mint(index, &event);
            }
            Normalized::NotApplicable(reason) => output::skipped(index, &reason.to_string()),
        }
    }

    output::section("Summary");
    output::field("Records", records.len());
    output::field("Mints", mints);

    Ok(())
}
