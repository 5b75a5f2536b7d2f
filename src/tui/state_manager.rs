// State management module
// Owns the App and plays the "caller" role for every widget: events go in,
// changed values are written back into the App's selection slots.

use tracing::debug;

use crate::tui::state::{App, Field, Screen};
use crate::widgets::{
    ComboboxEvent, DateRangeEvent, DateTimeEvent, DatePickerEvent, MultiComboboxEvent,
};

pub struct StateManager {
    app: App,
}

impl StateManager {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    // Screen navigation methods
    pub fn navigate_to_menu(&mut self) {
        self.close_overlays();
        self.app.screen = Screen::Menu;
    }

    pub fn navigate_to_selectors(&mut self) {
        self.app.screen = Screen::Selectors;
        self.app.focus = Field::Single;
    }

    pub fn navigate_to_dates(&mut self) {
        self.app.screen = Screen::Dates;
        self.app.focus = Field::Date;
    }

    pub fn navigate_to_about(&mut self) {
        self.app.screen = Screen::About;
    }

    // Field focus management
    pub fn cycle_focus(&mut self, forward: bool) {
        let fields = self.app.screen_fields();
        let i = fields.iter().position(|f| *f == self.app.focus).unwrap_or(0);
        let next = if forward {
            (i + 1) % fields.len()
        } else {
            (i + fields.len() - 1) % fields.len()
        };
        self.app.focus = fields[next];
        self.app.time_focused = false;
    }

    pub fn close_overlays(&mut self) {
        self.single(ComboboxEvent::SetOpen(false));
        self.multi(MultiComboboxEvent::SetOpen(false));
        self.date(DatePickerEvent::SetOpen(false));
        self.range(DateRangeEvent::SetOpen(false));
        self.date_time(DateTimeEvent::SetOpen(false));
        self.app.time_focused = false;
    }

    // Widget dispatch: the caller side of each controlled component
    pub fn single(&mut self, event: ComboboxEvent) -> bool {
        let app = &mut self.app;
        let outcome = app.combobox.handle(app.selected_fruit.as_deref(), event);
        let changed = outcome.apply_to(&mut app.selected_fruit);
        if changed {
            debug!(value = ?app.selected_fruit, "single selection changed");
        }
        if app.combobox.search().is_empty() {
            app.search_input.clear();
        }
        changed
    }

    pub fn multi(&mut self, event: MultiComboboxEvent) -> bool {
        let app = &mut self.app;
        let outcome = app.multi_combobox.handle(&app.selected_fruits, event);
        let changed = outcome.apply_to(&mut app.selected_fruits);
        if changed {
            debug!(values = ?app.selected_fruits, "multi selection changed");
        }
        if app.multi_combobox.search().is_empty() {
            app.search_input.clear();
        }
        changed
    }

    pub fn date(&mut self, event: DatePickerEvent) -> bool {
        let app = &mut self.app;
        let outcome = app.date_picker.handle(app.selected_date, event);
        outcome.apply_to(&mut app.selected_date)
    }

    pub fn range(&mut self, event: DateRangeEvent) -> bool {
        let app = &mut self.app;
        let outcome = app.range_picker.handle(app.date_range, event);
        outcome.apply_to(&mut app.date_range)
    }

    pub fn date_time(&mut self, event: DateTimeEvent) -> bool {
        let app = &mut self.app;
        let outcome = app.date_time_picker.handle(app.selected_date_time, event);
        let changed = outcome.apply_to(&mut app.selected_date_time);
        if changed {
            app.date_time_picker.sync(app.selected_date_time);
        }
        if app.time_input.value != app.date_time_picker.time_text() {
            let text = app.date_time_picker.time_text().to_string();
            app.time_input.set(&text);
        }
        changed
    }
}
