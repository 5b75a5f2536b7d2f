//! Calendar surface: month grid, navigation, keyboard cursor and the
//! single/range selection rules the date pickers interpret.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Date range with a required start. `None` at the use site means "no selection".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn starting(from: NaiveDate) -> Self {
        Self { from, to: None }
    }

    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to: Some(to) }
    }

    pub fn is_complete(&self) -> bool {
        self.to.is_some()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        match self.to {
            Some(to) => self.from <= day && day <= to,
            None => self.from == day,
        }
    }
}

/// Single mode: picking the selected day deselects it.
pub fn select_single(day: NaiveDate, selected: Option<NaiveDate>) -> Option<NaiveDate> {
    if selected == Some(day) {
        None
    } else {
        Some(day)
    }
}

/// Range mode: folds a picked day into the current range.
pub fn add_to_range(day: NaiveDate, range: Option<DateRange>) -> Option<DateRange> {
    let Some(DateRange { from, to }) = range else {
        return Some(DateRange::starting(day));
    };
    match to {
        None if day < from => Some(DateRange::between(day, from)),
        None => Some(DateRange::between(from, day)),
        Some(to) if day == to => {
            if day == from {
                None
            } else {
                Some(DateRange::starting(to))
            }
        }
        Some(_) if day == from => None,
        Some(to) if day < from => Some(DateRange::between(day, to)),
        Some(_) => Some(DateRange::between(from, day)),
    }
}

// ── Month grid ────────────────────────────────────────────────────────────────

pub const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub fn first_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

/// Weeks of the month containing `month`, Sunday first. Cells outside the month are `None`.
pub fn month_weeks(month: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let first = first_of_month(month);
    let lead = first.weekday().num_days_from_sunday() as usize;
    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = lead;
    let mut day = Some(first);
    while let Some(d) = day.filter(|d| d.month() == first.month()) {
        week[slot] = Some(d);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
        day = d.succ_opt();
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

/// Visible months plus the keyboard cursor of one calendar surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    month: NaiveDate,
    cursor: NaiveDate,
    months_shown: u32,
}

impl CalendarView {
    pub fn new(focus: NaiveDate, months_shown: u32) -> Self {
        Self {
            month: first_of_month(focus),
            cursor: focus,
            months_shown: months_shown.max(1),
        }
    }

    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn months_shown(&self) -> u32 {
        self.months_shown
    }

    /// First day of each visible month.
    pub fn visible_months(&self) -> Vec<NaiveDate> {
        (0..self.months_shown)
            .filter_map(|i| self.month.checked_add_months(Months::new(i)))
            .collect()
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    /// Re-anchors the view on `focus`.
    pub fn focus(&mut self, focus: NaiveDate) {
        self.cursor = focus;
        self.month = first_of_month(focus);
    }

    pub fn next_month(&mut self) {
        self.shift_months(1);
    }

    pub fn prev_month(&mut self) {
        self.shift_months(-1);
    }

    fn shift_months(&mut self, delta: i32) {
        let step = Months::new(delta.unsigned_abs());
        let (month, cursor) = if delta >= 0 {
            (self.month.checked_add_months(step), self.cursor.checked_add_months(step))
        } else {
            (self.month.checked_sub_months(step), self.cursor.checked_sub_months(step))
        };
        if let (Some(month), Some(cursor)) = (month, cursor) {
            self.month = month;
            self.cursor = cursor;
        }
    }

    /// Moves the cursor by whole days, scrolling so it stays visible.
    pub fn move_cursor(&mut self, days: i64) {
        let step = Days::new(days.unsigned_abs());
        let next = if days >= 0 {
            self.cursor.checked_add_days(step)
        } else {
            self.cursor.checked_sub_days(step)
        };
        let Some(next) = next else {
            return;
        };
        self.cursor = next;
        let visible = self.visible_months();
        let last = visible.last().copied().unwrap_or(self.month);
        if next < self.month {
            self.month = first_of_month(next);
        } else if first_of_month(next) > last {
            let span = self.months_shown.saturating_sub(1);
            self.month = first_of_month(next)
                .checked_sub_months(Months::new(span))
                .unwrap_or(first_of_month(next));
        }
    }
}

pub fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}
