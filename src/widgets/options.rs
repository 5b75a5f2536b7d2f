use serde::{Deserialize, Serialize};

/// Single entry offered by a selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Options whose label contains `search`, ignoring case, in their original order.
/// An empty search keeps everything.
pub fn filter_options<'a>(options: &'a [SelectOption], search: &str) -> Vec<&'a SelectOption> {
    if search.is_empty() {
        return options.iter().collect();
    }
    let needle = search.to_lowercase();
    options
        .iter()
        .filter(|o| o.label.to_lowercase().contains(&needle))
        .collect()
}

pub(crate) fn find_option<'a>(options: &'a [SelectOption], value: &str) -> Option<&'a SelectOption> {
    options.iter().find(|o| o.value == value)
}

// ── Searchable list ───────────────────────────────────────────────────────────

/// Search text plus keyboard highlight over the filtered view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchList {
    search: String,
    highlight: usize,
}

impl SearchList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replaces the search text; the highlight jumps back to the first row.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.highlight = 0;
    }

    pub fn reset(&mut self) {
        self.search.clear();
        self.highlight = 0;
    }

    pub fn highlight(&self) -> usize {
        self.highlight
    }

    /// Moves the highlight by `delta` rows, clamped to a view of `len` rows.
    pub fn move_highlight(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.highlight = 0;
            return;
        }
        let next = self.highlight as isize + delta;
        self.highlight = next.clamp(0, len as isize - 1) as usize;
    }

    /// The visible rows for `options`, honoring `searchable`.
    pub fn view<'a>(&self, options: &'a [SelectOption], searchable: bool) -> Vec<&'a SelectOption> {
        if searchable {
            filter_options(options, &self.search)
        } else {
            options.iter().collect()
        }
    }

    pub fn highlighted<'a>(&self, options: &'a [SelectOption], searchable: bool) -> Option<&'a SelectOption> {
        self.view(options, searchable).get(self.highlight).copied()
    }
}
