//! Headless selection widgets.
//!
//! Every widget is a controlled component: the caller owns the selection and
//! passes it back into `handle`, and the widget answers with an [`Outcome`]
//! describing whether its change callback would fire. Only transient
//! interaction state (overlay, search text, highlight, pending time text)
//! lives inside the widget.

pub mod calendar;
pub mod combobox;
pub mod constraints;
pub mod date_picker;
pub mod date_range;
pub mod date_time;
pub mod format;
pub mod multi_combobox;
pub mod options;
pub mod overlay;

pub use calendar::{CalendarView, DateRange};
pub use combobox::{Combobox, ComboboxEvent};
pub use constraints::DateConstraints;
pub use date_picker::{DatePicker, DatePickerEvent};
pub use date_range::{DateRangeEvent, DateRangePicker};
pub use date_time::{DateTimeEvent, DateTimePicker};
pub use format::{format_or_placeholder, parse_time_text, TimeTextError};
pub use multi_combobox::{MultiCombobox, MultiComboboxEvent};
pub use options::{filter_options, SearchList, SelectOption};
pub use overlay::{Overlay, Popover};

/// Result of feeding one interaction event to a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// No change was requested.
    Unchanged,
    /// The change callback fires with this value.
    Changed(T),
}

impl<T> Outcome<T> {
    pub fn is_changed(&self) -> bool {
        matches!(self, Outcome::Changed(_))
    }

    pub fn changed(self) -> Option<T> {
        match self {
            Outcome::Changed(v) => Some(v),
            Outcome::Unchanged => None,
        }
    }

    /// Writes a changed value into the caller-owned slot.
    pub fn apply_to(self, slot: &mut T) -> bool {
        match self {
            Outcome::Changed(v) => {
                *slot = v;
                true
            }
            Outcome::Unchanged => false,
        }
    }
}
