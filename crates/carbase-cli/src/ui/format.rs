//! String formatting utilities for UI rendering.

use chrono::{DateTime, Local};

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Engine capacity with its unit, as shown in listings.
pub fn format_capacity(capacity: i32) -> String {
    format!("{} cm^3", capacity)
}

/// Timestamp shown in save receipts.
pub fn format_timestamp(dt: &DateTime<Local>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// "1 car" / "3 cars"
pub fn cars(count: usize) -> String {
    if count == 1 {
        "1 car".to_string()
    } else {
        format!("{} cars", count)
    }
}
