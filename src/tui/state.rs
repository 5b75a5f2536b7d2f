use chrono::{NaiveDate, NaiveDateTime};
use ratatui::widgets::ListState;
use std::time::Instant;

use crate::config::DemoConfig;
use crate::tui::input::TextInput;
use crate::widgets::{
    Combobox, DatePicker, DateRange, DateRangePicker, DateTimePicker, MultiCombobox, SelectOption,
};

// ── Screens ───────────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
pub enum Screen {
    Menu,
    Selectors,
    Dates,
    About,
}

// ── Field focus ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    Single,
    Multi,
    Date,
    Range,
    DateTime,
}

impl Field {
    pub fn label(&self) -> &str {
        match self {
            Field::Single   => "Single Selection Combobox",
            Field::Multi    => "Multi Selection Combobox",
            Field::Date     => "Single Date Picker",
            Field::Range    => "Date Range Picker",
            Field::DateTime => "Date Time Picker",
        }
    }
}

pub const SELECTOR_FIELDS: &[Field] = &[Field::Single, Field::Multi];
pub const DATE_FIELDS: &[Field] = &[Field::Date, Field::Range, Field::DateTime];

pub const MENU_ITEMS: &[&str] = &["Selectors", "Date Pickers", "About", "Quit"];

pub fn fruit_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("apple", "Apple"),
        SelectOption::new("banana", "Banana"),
        SelectOption::new("orange", "Orange"),
        SelectOption::new("grape", "Grape"),
        SelectOption::new("mango", "Mango"),
        SelectOption::new("strawberry", "Strawberry"),
    ]
}

// ── App state ─────────────────────────────────────────────────────────────────

pub struct App {
    pub screen: Screen,
    pub menu_state: ListState,
    pub focus: Field,
    pub config: DemoConfig,

    // caller-owned selection values
    pub selected_fruit: Option<String>,
    pub selected_fruits: Vec<String>,
    pub selected_date: Option<NaiveDate>,
    pub date_range: Option<DateRange>,
    pub selected_date_time: Option<NaiveDateTime>,

    // widgets (transient state only)
    pub combobox: Combobox,
    pub multi_combobox: MultiCombobox,
    pub date_picker: DatePicker,
    pub range_picker: DateRangePicker,
    pub date_time_picker: DateTimePicker,

    /// Text field mirrored into the focused selector's search.
    pub search_input: TextInput,
    /// Text field mirrored into the date-time picker's time text.
    pub time_input: TextInput,
    /// True while keys go to the time field instead of the calendar.
    pub time_focused: bool,
    pub status: String,
    pub status_at: Option<Instant>,
}

impl App {
    pub fn new(config: DemoConfig, today: NaiveDate) -> Self {
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));
        let constraints = config.constraints();

        let combobox = Combobox::new(fruit_options())
            .with_placeholder("Select a fruit...")
            .with_searchable(config.searchable);
        let multi_combobox = MultiCombobox::new(fruit_options())
            .with_placeholder("Select fruits...")
            .with_searchable(config.searchable)
            .with_max_selected(config.max_selected);
        let date_picker = DatePicker::new(today)
            .with_constraints(constraints.clone())
            .with_format(config.date_format.clone())
            .with_clearable(config.clearable);
        let range_picker = DateRangePicker::new(today)
            .with_constraints(constraints.clone())
            .with_format(config.range_format.clone())
            .with_clearable(config.clearable);
        let date_time_picker = DateTimePicker::new(today)
            .with_constraints(constraints)
            .with_format(config.date_time_format.clone())
            .with_show_time(config.show_time)
            .with_clearable(config.clearable);
        let mut time_input = TextInput::new();
        time_input.set(date_time_picker.time_text());

        App {
            screen: Screen::Menu,
            menu_state,
            focus: Field::Single,
            config,
            selected_fruit: None,
            selected_fruits: Vec::new(),
            selected_date: None,
            date_range: None,
            selected_date_time: None,
            combobox,
            multi_combobox,
            date_picker,
            range_picker,
            date_time_picker,
            search_input: TextInput::new(),
            time_input,
            time_focused: false,
            status: String::new(),
            status_at: None,
        }
    }

    /// Whether the focused field currently shows its overlay.
    pub fn overlay_open(&self) -> bool {
        match self.focus {
            Field::Single => self.combobox.is_open(),
            Field::Multi => self.multi_combobox.is_open(),
            Field::Date => self.date_picker.is_open(),
            Field::Range => self.range_picker.is_open(),
            Field::DateTime => self.date_time_picker.is_open(),
        }
    }

    pub fn screen_fields(&self) -> &'static [Field] {
        match self.screen {
            Screen::Dates => DATE_FIELDS,
            _ => SELECTOR_FIELDS,
        }
    }

    /// "Selected: …" readout for a field, as shown under each widget.
    pub fn readout(&self, field: Field) -> String {
        match field {
            Field::Single => format!(
                "Selected: {}",
                self.selected_fruit.as_deref().unwrap_or("None")
            ),
            Field::Multi => {
                if self.selected_fruits.is_empty() {
                    "Selected: None".to_string()
                } else {
                    format!("Selected: {}", self.selected_fruits.join(", "))
                }
            }
            Field::Date => format!(
                "Selected: {}",
                self.selected_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_else(|| "None".to_string())
            ),
            Field::Range => {
                let from = self.date_range.map(|r| r.from.format("%Y-%m-%d").to_string());
                let to = self.date_range.and_then(|r| r.to).map(|d| d.format("%Y-%m-%d").to_string());
                format!(
                    "From: {} | To: {}",
                    from.as_deref().unwrap_or("None"),
                    to.as_deref().unwrap_or("None")
                )
            }
            Field::DateTime => format!(
                "Selected: {}",
                self.selected_date_time
                    .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "None".to_string())
            ),
        }
    }

    /// One line per field, used for clipboard copy.
    pub fn summary(&self) -> String {
        SELECTOR_FIELDS
            .iter()
            .chain(DATE_FIELDS)
            .map(|f| format!("{}: {}", f.label(), self.readout(*f)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.status_at = Some(Instant::now());
    }
}
