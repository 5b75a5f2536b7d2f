use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Caller-supplied bounds and exclusions shared by every date widget.
///
/// Bounds are inclusive and compared by calendar day. The same predicate
/// drives both the calendar grid and the pickers' pick handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateConstraints {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
    #[serde(default)]
    pub excluded: Vec<NaiveDate>,
}

impl DateConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min(mut self, min: NaiveDate) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: NaiveDate) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_excluded(mut self, excluded: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.excluded.extend(excluded);
        self
    }

    pub fn is_disabled(&self, day: NaiveDate) -> bool {
        if self.min.is_some_and(|min| day < min) {
            return true;
        }
        if self.max.is_some_and(|max| day > max) {
            return true;
        }
        self.excluded.contains(&day)
    }

    pub fn is_enabled(&self, day: NaiveDate) -> bool {
        !self.is_disabled(day)
    }
}
