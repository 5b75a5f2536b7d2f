use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use super::calendar::{select_single, CalendarView};
use super::constraints::DateConstraints;
use super::format::format_or_placeholder;
use super::overlay::{Overlay, Popover};
use super::Outcome;

pub const DEFAULT_DATE_PLACEHOLDER: &str = "Pick a date";
pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatePickerEvent {
    SetOpen(bool),
    Toggle,
    /// A day chosen on the calendar surface.
    Pick(NaiveDate),
    /// Picks the day under the calendar cursor.
    PickCursor,
    MoveCursor(i64),
    NextMonth,
    PrevMonth,
    Clear,
}

/// Single-date picker.
#[derive(Debug, Clone)]
pub struct DatePicker<O: Overlay = Popover> {
    pub placeholder: String,
    pub format: String,
    pub clearable: bool,
    pub disabled: bool,
    pub constraints: DateConstraints,
    overlay: O,
    view: CalendarView,
}

impl DatePicker<Popover> {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_overlay(today, Popover::new())
    }
}

impl<O: Overlay> DatePicker<O> {
    pub fn with_overlay(today: NaiveDate, overlay: O) -> Self {
        Self {
            placeholder: DEFAULT_DATE_PLACEHOLDER.to_string(),
            format: DEFAULT_DATE_FORMAT.to_string(),
            clearable: true,
            disabled: false,
            constraints: DateConstraints::default(),
            overlay,
            view: CalendarView::new(today, 1),
        }
    }

    #[must_use]
    pub fn with_constraints(mut self, constraints: DateConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    #[must_use]
    pub fn with_clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn view(&self) -> &CalendarView {
        &self.view
    }

    pub fn is_day_disabled(&self, day: NaiveDate) -> bool {
        self.constraints.is_disabled(day)
    }

    /// Whether the clear affordance is shown on the trigger.
    pub fn can_clear(&self, current: Option<NaiveDate>) -> bool {
        self.clearable && current.is_some()
    }

    pub fn display_text(&self, current: Option<NaiveDate>) -> String {
        format_or_placeholder(
            current.map(|d| d.and_time(NaiveTime::MIN)),
            &self.format,
            &self.placeholder,
        )
    }

    pub fn handle(&mut self, current: Option<NaiveDate>, event: DatePickerEvent) -> Outcome<Option<NaiveDate>> {
        match event {
            DatePickerEvent::SetOpen(open) => {
                self.set_open(open, current);
                Outcome::Unchanged
            }
            DatePickerEvent::Toggle => {
                let open = !self.overlay.is_open();
                self.set_open(open, current);
                Outcome::Unchanged
            }
            DatePickerEvent::Pick(day) => self.pick(current, day),
            DatePickerEvent::PickCursor => {
                let day = self.view.cursor();
                self.pick(current, day)
            }
            DatePickerEvent::MoveCursor(days) => {
                self.view.move_cursor(days);
                Outcome::Unchanged
            }
            DatePickerEvent::NextMonth => {
                self.view.next_month();
                Outcome::Unchanged
            }
            DatePickerEvent::PrevMonth => {
                self.view.prev_month();
                Outcome::Unchanged
            }
            DatePickerEvent::Clear => {
                if self.can_clear(current) {
                    Outcome::Changed(None)
                } else {
                    Outcome::Unchanged
                }
            }
        }
    }

    fn set_open(&mut self, open: bool, current: Option<NaiveDate>) {
        if open && self.disabled {
            return;
        }
        if open && !self.overlay.is_open() {
            if let Some(day) = current {
                self.view.focus(day);
            }
        }
        self.overlay.set_open(open);
    }

    fn pick(&mut self, current: Option<NaiveDate>, day: NaiveDate) -> Outcome<Option<NaiveDate>> {
        if self.constraints.is_disabled(day) {
            debug!(%day, "ignoring pick of disabled day");
            return Outcome::Unchanged;
        }
        let next = select_single(day, current);
        self.overlay.close();
        Outcome::Changed(next)
    }
}
