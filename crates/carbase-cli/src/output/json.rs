//! JSON output for records and search hits.
//!
//! Both serialize as flat objects keyed `number`, `brand`, `model`, `year`,
//! `capacity`, `fuel`, `type`, `registration`.

use carbase_core::{Hit, VehicleRecord};

/// Number every record from 1 so a full listing has the same shape as
/// search hits.
pub fn numbered(records: &[VehicleRecord]) -> Vec<Hit<'_>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| Hit {
            ordinal: index + 1,
            record,
        })
        .collect()
}

/// Render hits as a pretty JSON array.
pub fn to_json(hits: &[Hit<'_>]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(hits)?)
}
