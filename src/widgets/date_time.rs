use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use super::calendar::{select_single, CalendarView};
use super::constraints::DateConstraints;
use super::format::{format_or_placeholder, parse_time_text, time_text, MIDNIGHT_TEXT};
use super::overlay::{Overlay, Popover};
use super::Outcome;

pub const DEFAULT_DATE_TIME_PLACEHOLDER: &str = "Pick a date and time";
pub const DEFAULT_DATE_TIME_FORMAT: &str = "%B %-d, %Y %-I:%M %p";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeEvent {
    SetOpen(bool),
    Toggle,
    Pick(NaiveDate),
    PickCursor,
    MoveCursor(i64),
    NextMonth,
    PrevMonth,
    /// New contents of the `HH:MM` time field.
    EditTime(String),
    Clear,
}

/// Date picker with an independent 24-hour time-of-day field.
///
/// The widget keeps the time text it is showing and the last time that parsed
/// cleanly. Picks merge that time into the chosen day; a malformed time field
/// never replaces the last good merge.
#[derive(Debug, Clone)]
pub struct DateTimePicker<O: Overlay = Popover> {
    pub placeholder: String,
    pub format: String,
    pub clearable: bool,
    pub disabled: bool,
    pub show_time: bool,
    pub constraints: DateConstraints,
    overlay: O,
    view: CalendarView,
    time_text: String,
    time: NaiveTime,
    synced: Option<NaiveDateTime>,
}

impl DateTimePicker<Popover> {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_overlay(today, Popover::new())
    }
}

impl<O: Overlay> DateTimePicker<O> {
    pub fn with_overlay(today: NaiveDate, overlay: O) -> Self {
        Self {
            placeholder: DEFAULT_DATE_TIME_PLACEHOLDER.to_string(),
            format: DEFAULT_DATE_TIME_FORMAT.to_string(),
            clearable: true,
            disabled: false,
            show_time: true,
            constraints: DateConstraints::default(),
            overlay,
            view: CalendarView::new(today, 1),
            time_text: MIDNIGHT_TEXT.to_string(),
            time: NaiveTime::MIN,
            synced: None,
        }
    }

    /// Seeds the time field from an initial value.
    #[must_use]
    pub fn with_value(mut self, value: Option<NaiveDateTime>) -> Self {
        self.sync(value);
        self
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
    pub fn with_show_time(mut self, show_time: bool) -> Self {
        self.show_time = show_time;
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

    pub fn time_text(&self) -> &str {
        &self.time_text
    }

    pub fn is_day_disabled(&self, day: NaiveDate) -> bool {
        self.constraints.is_disabled(day)
    }

    pub fn can_clear(&self, current: Option<NaiveDateTime>) -> bool {
        self.clearable && current.is_some()
    }

    pub fn display_text(&self, current: Option<NaiveDateTime>) -> String {
        format_or_placeholder(current, &self.format, &self.placeholder)
    }

    /// Follows a caller-side change of the value: a newly set value reseeds the time field.
    pub fn sync(&mut self, current: Option<NaiveDateTime>) {
        if current == self.synced {
            return;
        }
        self.synced = current;
        if let Some(value) = current {
            self.time = value.time();
            // Text that already reads as this time (e.g. "9:05" mid-edit) is left alone.
            if parse_time_text(&self.time_text).ok() != Some(self.time) {
                self.time_text = time_text(self.time);
            }
        }
    }

    pub fn handle(
        &mut self,
        current: Option<NaiveDateTime>,
        event: DateTimeEvent,
    ) -> Outcome<Option<NaiveDateTime>> {
        self.sync(current);
        match event {
            DateTimeEvent::SetOpen(open) => {
                self.set_open(open, current);
                Outcome::Unchanged
            }
            DateTimeEvent::Toggle => {
                let open = !self.overlay.is_open();
                self.set_open(open, current);
                Outcome::Unchanged
            }
            DateTimeEvent::Pick(day) => self.pick(current, day),
            DateTimeEvent::PickCursor => {
                let day = self.view.cursor();
                self.pick(current, day)
            }
            DateTimeEvent::MoveCursor(days) => {
                self.view.move_cursor(days);
                Outcome::Unchanged
            }
            DateTimeEvent::NextMonth => {
                self.view.next_month();
                Outcome::Unchanged
            }
            DateTimeEvent::PrevMonth => {
                self.view.prev_month();
                Outcome::Unchanged
            }
            DateTimeEvent::EditTime(text) => self.edit_time(current, text),
            DateTimeEvent::Clear => {
                if !self.can_clear(current) {
                    return Outcome::Unchanged;
                }
                self.time_text = MIDNIGHT_TEXT.to_string();
                self.time = NaiveTime::MIN;
                Outcome::Changed(None)
            }
        }
    }

    fn set_open(&mut self, open: bool, current: Option<NaiveDateTime>) {
        if open && self.disabled {
            return;
        }
        if open && !self.overlay.is_open() {
            if let Some(value) = current {
                self.view.focus(value.date());
            }
        }
        self.overlay.set_open(open);
    }

    fn pick(&mut self, current: Option<NaiveDateTime>, day: NaiveDate) -> Outcome<Option<NaiveDateTime>> {
        if self.constraints.is_disabled(day) {
            debug!(%day, "ignoring pick of disabled day");
            return Outcome::Unchanged;
        }
        let Some(day) = select_single(day, current.map(|v| v.date())) else {
            return Outcome::Changed(None);
        };
        if !self.show_time {
            self.overlay.close();
            return Outcome::Changed(Some(day.and_time(NaiveTime::MIN)));
        }
        Outcome::Changed(Some(day.and_time(self.time)))
    }

    fn edit_time(&mut self, current: Option<NaiveDateTime>, text: String) -> Outcome<Option<NaiveDateTime>> {
        let parsed = parse_time_text(&text);
        self.time_text = text;
        match parsed {
            Ok(time) => {
                self.time = time;
                match current {
                    Some(value) => Outcome::Changed(Some(value.date().and_time(time))),
                    None => Outcome::Unchanged,
                }
            }
            Err(err) => {
                debug!(%err, "keeping last valid time");
                Outcome::Unchanged
            }
        }
    }
}
