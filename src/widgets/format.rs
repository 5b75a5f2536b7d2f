use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDateTime, NaiveTime, Timelike};
use thiserror::Error;

/// Formats `value` with a strftime `pattern`, or returns `placeholder` when the
/// value is missing or the pattern cannot render it.
pub fn format_or_placeholder(value: Option<NaiveDateTime>, pattern: &str, placeholder: &str) -> String {
    let Some(value) = value else {
        return placeholder.to_string();
    };
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return placeholder.to_string();
    }
    let mut out = String::new();
    match write!(out, "{}", value.format_with_items(StrftimeItems::new(pattern))) {
        Ok(()) => out,
        Err(_) => placeholder.to_string(),
    }
}

// ── Time text ─────────────────────────────────────────────────────────────────

pub const MIDNIGHT_TEXT: &str = "00:00";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeTextError {
    #[error("expected HH:MM, got {0:?}")]
    Malformed(String),
    #[error("hour {0} is out of range (0-23)")]
    HourOutOfRange(u32),
    #[error("minute {0} is out of range (0-59)")]
    MinuteOutOfRange(u32),
}

/// Parses 24-hour `HH:MM` text. Single-digit fields are accepted.
pub fn parse_time_text(text: &str) -> Result<NaiveTime, TimeTextError> {
    let malformed = || TimeTextError::Malformed(text.to_string());
    let (h, m) = text.trim().split_once(':').ok_or_else(malformed)?;
    let field = |s: &str| -> Result<u32, TimeTextError> {
        if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        s.parse().map_err(|_| malformed())
    };
    let hour = field(h)?;
    let minute = field(m)?;
    if hour > 23 {
        return Err(TimeTextError::HourOutOfRange(hour));
    }
    if minute > 59 {
        return Err(TimeTextError::MinuteOutOfRange(minute));
    }
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(malformed)
}

/// Zero-padded `HH:MM` for a time of day.
pub fn time_text(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
