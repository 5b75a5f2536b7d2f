use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use super::calendar::{add_to_range, CalendarView, DateRange};
use super::constraints::DateConstraints;
use super::format::format_or_placeholder;
use super::overlay::{Overlay, Popover};
use super::Outcome;

pub const DEFAULT_RANGE_PLACEHOLDER: &str = "Pick a date range";
pub const DEFAULT_RANGE_FORMAT: &str = "%b %d, %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRangeEvent {
    SetOpen(bool),
    Toggle,
    Pick(NaiveDate),
    PickCursor,
    MoveCursor(i64),
    NextMonth,
    PrevMonth,
    Clear,
}

/// Two-endpoint range picker. The overlay closes once both ends are set.
#[derive(Debug, Clone)]
pub struct DateRangePicker<O: Overlay = Popover> {
    pub placeholder: String,
    pub format: String,
    pub clearable: bool,
    pub disabled: bool,
    pub constraints: DateConstraints,
    overlay: O,
    view: CalendarView,
}

impl DateRangePicker<Popover> {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_overlay(today, Popover::new())
    }
}

impl<O: Overlay> DateRangePicker<O> {
    pub fn with_overlay(today: NaiveDate, overlay: O) -> Self {
        Self {
            placeholder: DEFAULT_RANGE_PLACEHOLDER.to_string(),
            format: DEFAULT_RANGE_FORMAT.to_string(),
            clearable: true,
            disabled: false,
            constraints: DateConstraints::default(),
            overlay,
            view: CalendarView::new(today, 2),
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

    pub fn can_clear(&self, current: Option<DateRange>) -> bool {
        self.clearable && current.is_some()
    }

    pub fn display_text(&self, current: Option<DateRange>) -> String {
        let Some(range) = current else {
            return self.placeholder.clone();
        };
        let fmt = |d: NaiveDate| {
            format_or_placeholder(Some(d.and_time(NaiveTime::MIN)), &self.format, &self.placeholder)
        };
        match range.to {
            Some(to) => format!("{} - {}", fmt(range.from), fmt(to)),
            None => fmt(range.from),
        }
    }

    pub fn handle(&mut self, current: Option<DateRange>, event: DateRangeEvent) -> Outcome<Option<DateRange>> {
        match event {
            DateRangeEvent::SetOpen(open) => {
                self.set_open(open, current);
                Outcome::Unchanged
            }
            DateRangeEvent::Toggle => {
                let open = !self.overlay.is_open();
                self.set_open(open, current);
                Outcome::Unchanged
            }
            DateRangeEvent::Pick(day) => self.pick(current, day),
            DateRangeEvent::PickCursor => {
                let day = self.view.cursor();
                self.pick(current, day)
            }
            DateRangeEvent::MoveCursor(days) => {
                self.view.move_cursor(days);
                Outcome::Unchanged
            }
            DateRangeEvent::NextMonth => {
                self.view.next_month();
                Outcome::Unchanged
            }
            DateRangeEvent::PrevMonth => {
                self.view.prev_month();
                Outcome::Unchanged
            }
            DateRangeEvent::Clear => {
                if self.can_clear(current) {
                    Outcome::Changed(None)
                } else {
                    Outcome::Unchanged
                }
            }
        }
    }

    fn set_open(&mut self, open: bool, current: Option<DateRange>) {
        if open && self.disabled {
            return;
        }
        if open && !self.overlay.is_open() {
            if let Some(range) = current {
                self.view.focus(range.from);
            }
        }
        self.overlay.set_open(open);
    }

    fn pick(&mut self, current: Option<DateRange>, day: NaiveDate) -> Outcome<Option<DateRange>> {
        if self.constraints.is_disabled(day) {
            debug!(%day, "ignoring pick of disabled day");
            return Outcome::Unchanged;
        }
        let next = add_to_range(day, current);
        if next.is_some_and(|r| r.is_complete()) {
            self.overlay.close();
        }
        Outcome::Changed(next)
    }
}
