use tracing::debug;

use super::combobox::{DEFAULT_EMPTY_TEXT, DEFAULT_SEARCH_PLACEHOLDER};
use super::options::{find_option, SearchList, SelectOption};
use super::overlay::{Overlay, Popover};
use super::Outcome;

pub const DEFAULT_MULTI_PLACEHOLDER: &str = "Select options...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiComboboxEvent {
    SetOpen(bool),
    Toggle,
    Search(String),
    MoveHighlight(isize),
    Select(String),
    SelectHighlighted,
}

/// Toggles `value` in `values`, keeping insertion order.
///
/// Removal always succeeds. Adding while `values` already holds `max` entries
/// returns the set unchanged. A cap of zero means no cap.
pub fn toggle_value(values: &[String], value: &str, max: Option<usize>) -> Vec<String> {
    if values.iter().any(|v| v == value) {
        return values.iter().filter(|v| *v != value).cloned().collect();
    }
    if max.is_some_and(|m| m > 0 && values.len() >= m) {
        return values.to_vec();
    }
    let mut next = values.to_vec();
    next.push(value.to_string());
    next
}

/// Multi-select searchable selector with an optional cap.
#[derive(Debug, Clone)]
pub struct MultiCombobox<O: Overlay = Popover> {
    pub options: Vec<SelectOption>,
    pub placeholder: String,
    pub search_placeholder: String,
    pub empty_text: String,
    pub searchable: bool,
    pub disabled: bool,
    pub max_selected: Option<usize>,
    overlay: O,
    list: SearchList,
}

impl MultiCombobox<Popover> {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self::with_overlay(options, Popover::new())
    }
}

impl<O: Overlay> MultiCombobox<O> {
    pub fn with_overlay(options: Vec<SelectOption>, overlay: O) -> Self {
        Self {
            options,
            placeholder: DEFAULT_MULTI_PLACEHOLDER.to_string(),
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            searchable: true,
            disabled: false,
            max_selected: None,
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
    pub fn with_max_selected(mut self, max: Option<usize>) -> Self {
        self.max_selected = max;
        self
    }

    #[must_use]
    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
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

    /// Whether a row should render as non-pickable given the current selection.
    pub fn is_row_disabled(&self, option: &SelectOption, current: &[String]) -> bool {
        if option.disabled {
            return true;
        }
        let selected = current.iter().any(|v| *v == option.value);
        !selected && self.max_selected.is_some_and(|m| m > 0 && current.len() >= m)
    }

    pub fn display_text(&self, current: &[String]) -> String {
        let selected: Vec<&SelectOption> = self
            .options
            .iter()
            .filter(|o| current.contains(&o.value))
            .collect();
        match selected.as_slice() {
            [] => self.placeholder.clone(),
            [only] => only.label.clone(),
            many => format!("{} options selected", many.len()),
        }
    }

    pub fn handle(&mut self, current: &[String], event: MultiComboboxEvent) -> Outcome<Vec<String>> {
        match event {
            MultiComboboxEvent::SetOpen(open) => {
                self.set_open(open);
                Outcome::Unchanged
            }
            MultiComboboxEvent::Toggle => {
                let open = !self.overlay.is_open();
                self.set_open(open);
                Outcome::Unchanged
            }
            MultiComboboxEvent::Search(text) => {
                if self.searchable {
                    self.list.set_search(text);
                }
                Outcome::Unchanged
            }
            MultiComboboxEvent::MoveHighlight(delta) => {
                let len = self.visible_options().len();
                self.list.move_highlight(delta, len);
                Outcome::Unchanged
            }
            MultiComboboxEvent::Select(value) => self.select(current, &value),
            MultiComboboxEvent::SelectHighlighted => {
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

    fn select(&mut self, current: &[String], value: &str) -> Outcome<Vec<String>> {
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
        let next = toggle_value(current, value, self.max_selected);
        self.list.reset();
        if next.as_slice() == current {
            debug!(value, max = ?self.max_selected, "selection cap reached");
            return Outcome::Unchanged;
        }
        Outcome::Changed(next)
    }
}
