use tracing::debug;

use super::options::{find_option, SearchList, SelectOption};
use super::overlay::{Overlay, Popover};
use super::Outcome;

pub const DEFAULT_PLACEHOLDER: &str = "Select an option...";
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search options...";
pub const DEFAULT_EMPTY_TEXT: &str = "No options found.";

/// Interaction events understood by [`Combobox`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboboxEvent {
    /// Overlay open/close request from the trigger or an outside dismiss.
    SetOpen(bool),
    /// Trigger activation.
    Toggle,
    Search(String),
    MoveHighlight(isize),
    Select(String),
    SelectHighlighted,
}

/// Single-select searchable selector.
#[derive(Debug, Clone)]
pub struct Combobox<O: Overlay = Popover> {
    pub options: Vec<SelectOption>,
    pub placeholder: String,
    pub search_placeholder: String,
    pub empty_text: String,
    pub searchable: bool,
    pub disabled: bool,
    overlay: O,
    list: SearchList,
}

impl Combobox<Popover> {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self::with_overlay(options, Popover::new())
    }
}

impl<O: Overlay> Combobox<O> {
    pub fn with_overlay(options: Vec<SelectOption>, overlay: O) -> Self {
        Self {
            options,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            searchable: true,
            disabled: false,
            overlay,
            list: SearchList::new(),
        }
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn search(&self) -> &str {
        self.list.search()
    }

    pub fn highlight(&self) -> usize {
        self.list.highlight()
    }

    pub fn visible_options(&self) -> Vec<&SelectOption> {
        self.list.view(&self.options, self.searchable)
    }

    /// Label of the selected option, or the placeholder.
    pub fn display_text(&self, current: Option<&str>) -> &str {
        current
            .and_then(|v| find_option(&self.options, v))
            .map(|o| o.label.as_str())
            .unwrap_or(&self.placeholder)
    }

    pub fn handle(&mut self, current: Option<&str>, event: ComboboxEvent) -> Outcome<Option<String>> {
        match event {
            ComboboxEvent::SetOpen(open) => {
                self.set_open(open);
                Outcome::Unchanged
            }
            ComboboxEvent::Toggle => {
                let open = !self.overlay.is_open();
                self.set_open(open);
                Outcome::Unchanged
            }
            ComboboxEvent::Search(text) => {
                if self.searchable {
                    self.list.set_search(text);
                }
                Outcome::Unchanged
            }
            ComboboxEvent::MoveHighlight(delta) => {
                let len = self.visible_options().len();
                self.list.move_highlight(delta, len);
                Outcome::Unchanged
            }
            ComboboxEvent::Select(value) => self.select(current, &value),
            ComboboxEvent::SelectHighlighted => {
                match self.list.highlighted(&self.options, self.searchable) {
                    Some(option) => {
                        let value = option.value.clone();
                        self.select(current, &value)
                    }
                    None => Outcome::Unchanged,
                }
            }
        }
    }

    fn set_open(&mut self, open: bool) {
        if open && self.disabled {
            return;
        }
        self.overlay.set_open(open);
        if !open {
            self.list.reset();
        }
    }

    fn select(&mut self, current: Option<&str>, value: &str) -> Outcome<Option<String>> {
        match find_option(&self.options, value) {
            Some(option) if option.disabled => {
                debug!(value, "ignoring pick of disabled option");
                return Outcome::Unchanged;
            }
            None => {
                debug!(value, "ignoring pick of unknown option");
                return Outcome::Unchanged;
            }
            Some(_) => {}
        }
        let next = if current == Some(value) {
            None
        } else {
            Some(value.to_string())
        };
        self.set_open(false);
        Outcome::Changed(next)
    }
}
