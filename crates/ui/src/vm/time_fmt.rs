use chrono::{DateTime, Utc};

#[must_use]
pub fn format_last_activity(value: Option<DateTime<Utc>>) -> Option<String> {
    value.map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
}
