//! Text and table output formatting for records.

use carbase_core::VehicleRecord;

use crate::ui::format::{format_capacity, truncate};
use crate::ui::{table, Column, UiContext};

const MAX_CELL: usize = 24;

pub const RECORD_COLUMNS: [Column; 8] = [
    Column::numeric("#"),
    Column::new("Brand"),
    Column::new("Model"),
    Column::numeric("Year"),
    Column::numeric("Capacity"),
    Column::new("Fuel"),
    Column::new("Type"),
    Column::new("Registration"),
];

/// One table row for a record.
pub fn record_row(ordinal: usize, record: &VehicleRecord, pretty: bool) -> Vec<String> {
    let cell = |value: &str| {
        if pretty {
            truncate(value, MAX_CELL)
        } else {
            value.to_string()
        }
    };
    vec![
        ordinal.to_string(),
        cell(&record.brand),
        cell(&record.model),
        record.year.to_string(),
        if pretty {
            format_capacity(record.capacity)
        } else {
            record.capacity.to_string()
        },
        cell(&record.fuel),
        cell(&record.vehicle_type),
        cell(&record.registration),
    ]
}

/// Detailed block used by the interactive menu.
pub fn record_block(ordinal: usize, record: &VehicleRecord) -> String {
    format!(
        "Car number: {}\nBrand: {}\nModel: {}\nYear: {}\nEngine capacity: {}\nFuel: {}\nVehicle type: {}\nRegistration number: {}",
        ordinal,
        record.brand,
        record.model,
        record.year,
        format_capacity(record.capacity),
        record.fuel,
        record.vehicle_type,
        record.registration
    )
}

/// Print numbered records as a table (or plain lines) with an empty-state
/// message.
pub fn print_record_list<'a, I>(ctx: &UiContext, rows: I, empty_message: &str)
where
    I: IntoIterator<Item = (usize, &'a VehicleRecord)>,
{
    let pretty = ctx.mode.is_pretty();
    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .map(|(ordinal, record)| record_row(ordinal, record, pretty))
        .collect();

    if rows.is_empty() {
        println!("{}", empty_message);
        return;
    }
    println!("{}", table(ctx, &RECORD_COLUMNS, &rows));
}
