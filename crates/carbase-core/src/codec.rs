//! Text codec for the data file.
//!
//! Records are stored one field per line, seven lines per record, in
//! [`Field::ALL`] order, with no newline after the final field. Decoding is
//! token based: any whitespace separates fields, so trailing blank lines are
//! harmless.

use std::fmt;

use crate::record::{Field, VehicleRecord, FIELD_COUNT};

/// Why decoding stopped before the end of the input.
///
/// This is a stop condition, not an error: every record decoded before the
/// interruption is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseInterrupted {
    /// A numeric field did not hold an integer.
    Malformed {
        record: usize,
        field: Field,
        token: String,
    },
    /// The input ended partway through a record.
    Incomplete { record: usize, tokens: usize },
}

impl fmt::Display for ParseInterrupted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseInterrupted::Malformed {
                record,
                field,
                token,
            } => write!(
                f,
                "record {}: {} is not an integer ({:?})",
                record, field, token
            ),
            ParseInterrupted::Incomplete { record, tokens } => write!(
                f,
                "record {}: only {} of {} fields present",
                record, tokens, FIELD_COUNT
            ),
        }
    }
}

/// Decode records from whitespace-delimited text.
pub fn decode(input: &str) -> (Vec<VehicleRecord>, Option<ParseInterrupted>) {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let mut records = Vec::with_capacity(tokens.len() / FIELD_COUNT);

    for (index, group) in tokens.chunks(FIELD_COUNT).enumerate() {
        let record_number = index + 1;
        if group.len() < FIELD_COUNT {
            return (
                records,
                Some(ParseInterrupted::Incomplete {
                    record: record_number,
                    tokens: group.len(),
                }),
            );
        }
        match decode_group(group, record_number) {
            Ok(record) => records.push(record),
            Err(stop) => return (records, Some(stop)),
        }
    }

    (records, None)
}

fn decode_group(group: &[&str], record: usize) -> Result<VehicleRecord, ParseInterrupted> {
    let number = |field: Field, token: &str| {
        token
            .parse::<i32>()
            .map_err(|_| ParseInterrupted::Malformed {
                record,
                field,
                token: token.to_string(),
            })
    };

    Ok(VehicleRecord {
        brand: group[0].to_string(),
        model: group[1].to_string(),
        year: number(Field::Year, group[2])?,
        capacity: number(Field::Capacity, group[3])?,
        fuel: group[4].to_string(),
        vehicle_type: group[5].to_string(),
        registration: group[6].to_string(),
    })
}

/// Encode records in data-file layout.
pub fn encode(records: &[VehicleRecord]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "{}\n{}\n{}\n{}\n{}\n{}\n{}",
                r.brand, r.model, r.year, r.capacity, r.fuel, r.vehicle_type, r.registration
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
