// Event handler module
// Translates key presses into widget events, delegating state changes to StateManager

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use crate::tui::input::handle_text_input_key;
use crate::tui::state::{Field, Screen, MENU_ITEMS};
use crate::tui::state_manager::StateManager;
use crate::widgets::{
    ComboboxEvent, DatePickerEvent, DateRangeEvent, DateTimeEvent, MultiComboboxEvent,
};

/// What the event loop should do after a key press.
#[derive(Debug, PartialEq)]
pub enum KeyResult {
    Continue,
    Quit,
}

pub fn handle_key(sm: &mut StateManager, key: KeyEvent) -> KeyResult {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyResult::Quit;
    }
    match sm.app().screen {
        Screen::Menu => return handle_menu_key(sm, key),
        Screen::About => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                sm.navigate_to_menu();
            }
        }
        Screen::Selectors | Screen::Dates => {
            if sm.app().overlay_open() {
                handle_overlay_key(sm, key);
            } else {
                handle_trigger_key(sm, key);
            }
        }
    }
    KeyResult::Continue
}

pub fn handle_menu_key(sm: &mut StateManager, key: KeyEvent) -> KeyResult {
    let app = sm.app_mut();
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return KeyResult::Quit,
        KeyCode::Up => {
            let i = app.menu_state.selected().unwrap_or(0);
            app.menu_state.select(Some(i.saturating_sub(1)));
        }
        KeyCode::Down => {
            let i = app.menu_state.selected().unwrap_or(0);
            app.menu_state.select(Some((i + 1).min(MENU_ITEMS.len() - 1)));
        }
        KeyCode::Enter => {
            let i = app.menu_state.selected().unwrap_or(0);
            match i {
                0 => sm.navigate_to_selectors(),
                1 => sm.navigate_to_dates(),
                2 => sm.navigate_to_about(),
                3 => return KeyResult::Quit,
                _ => {}
            }
        }
        _ => {}
    }
    KeyResult::Continue
}

/// Keys while the focused widget's overlay is closed: focus, open, clear, copy.
fn handle_trigger_key(sm: &mut StateManager, key: KeyEvent) {
    let focus = sm.app().focus;
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => sm.navigate_to_menu(),
        KeyCode::Tab | KeyCode::Down => sm.cycle_focus(true),
        KeyCode::BackTab | KeyCode::Up => sm.cycle_focus(false),
        KeyCode::Enter | KeyCode::Char(' ') => {
            match focus {
                Field::Single => { sm.single(ComboboxEvent::Toggle); }
                Field::Multi => { sm.multi(MultiComboboxEvent::Toggle); }
                Field::Date => { sm.date(DatePickerEvent::Toggle); }
                Field::Range => { sm.range(DateRangeEvent::Toggle); }
                Field::DateTime => { sm.date_time(DateTimeEvent::Toggle); }
            }
        }
        // Clear affordance: never touches the overlay
        KeyCode::Backspace | KeyCode::Delete => {
            let cleared = match focus {
                Field::Date => sm.date(DatePickerEvent::Clear),
                Field::Range => sm.range(DateRangeEvent::Clear),
                Field::DateTime => sm.date_time(DateTimeEvent::Clear),
                Field::Single | Field::Multi => false,
            };
            if cleared {
                sm.app_mut().set_status("✓ Cleared");
            }
        }
        KeyCode::Char('y') => copy_summary(sm),
        _ => {}
    }
}

fn handle_overlay_key(sm: &mut StateManager, key: KeyEvent) {
    match sm.app().focus {
        Field::Single => handle_single_overlay_key(sm, key),
        Field::Multi => handle_multi_overlay_key(sm, key),
        Field::Date => handle_date_overlay_key(sm, key),
        Field::Range => handle_range_overlay_key(sm, key),
        Field::DateTime => handle_date_time_overlay_key(sm, key),
    }
}

fn handle_single_overlay_key(sm: &mut StateManager, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Tab => { sm.single(ComboboxEvent::SetOpen(false)); }
        KeyCode::Up => { sm.single(ComboboxEvent::MoveHighlight(-1)); }
        KeyCode::Down => { sm.single(ComboboxEvent::MoveHighlight(1)); }
        KeyCode::Enter => { sm.single(ComboboxEvent::SelectHighlighted); }
        _ => {
            let app = sm.app_mut();
            if app.combobox.searchable && handle_text_input_key(&mut app.search_input, key) {
                let text = app.search_input.value.clone();
                sm.single(ComboboxEvent::Search(text));
            }
        }
    }
}

fn handle_multi_overlay_key(sm: &mut StateManager, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Tab => { sm.multi(MultiComboboxEvent::SetOpen(false)); }
        KeyCode::Up => { sm.multi(MultiComboboxEvent::MoveHighlight(-1)); }
        KeyCode::Down => { sm.multi(MultiComboboxEvent::MoveHighlight(1)); }
        KeyCode::Enter => { sm.multi(MultiComboboxEvent::SelectHighlighted); }
        _ => {
            let app = sm.app_mut();
            if app.multi_combobox.searchable && handle_text_input_key(&mut app.search_input, key) {
                let text = app.search_input.value.clone();
                sm.multi(MultiComboboxEvent::Search(text));
            }
        }
    }
}

/// Calendar navigation shared by every date overlay.
fn calendar_key(key: &KeyEvent) -> Option<CalendarKey> {
    Some(match key.code {
        KeyCode::Left => CalendarKey::Move(-1),
        KeyCode::Right => CalendarKey::Move(1),
        KeyCode::Up => CalendarKey::Move(-7),
        KeyCode::Down => CalendarKey::Move(7),
        KeyCode::PageUp => CalendarKey::PrevMonth,
        KeyCode::PageDown => CalendarKey::NextMonth,
        KeyCode::Enter | KeyCode::Char(' ') => CalendarKey::Pick,
        KeyCode::Esc => CalendarKey::Close,
        _ => return None,
    })
}

enum CalendarKey {
    Move(i64),
    PrevMonth,
    NextMonth,
    Pick,
    Close,
}

fn handle_date_overlay_key(sm: &mut StateManager, key: KeyEvent) {
    let Some(k) = calendar_key(&key) else { return };
    sm.date(match k {
        CalendarKey::Move(d) => DatePickerEvent::MoveCursor(d),
        CalendarKey::PrevMonth => DatePickerEvent::PrevMonth,
        CalendarKey::NextMonth => DatePickerEvent::NextMonth,
        CalendarKey::Pick => DatePickerEvent::PickCursor,
        CalendarKey::Close => DatePickerEvent::SetOpen(false),
    });
}

fn handle_range_overlay_key(sm: &mut StateManager, key: KeyEvent) {
    let Some(k) = calendar_key(&key) else { return };
    sm.range(match k {
        CalendarKey::Move(d) => DateRangeEvent::MoveCursor(d),
        CalendarKey::PrevMonth => DateRangeEvent::PrevMonth,
        CalendarKey::NextMonth => DateRangeEvent::NextMonth,
        CalendarKey::Pick => DateRangeEvent::PickCursor,
        CalendarKey::Close => DateRangeEvent::SetOpen(false),
    });
}

fn handle_date_time_overlay_key(sm: &mut StateManager, key: KeyEvent) {
    let show_time = sm.app().date_time_picker.show_time;
    if key.code == KeyCode::Tab && show_time {
        let app = sm.app_mut();
        app.time_focused = !app.time_focused;
        return;
    }
    if sm.app().time_focused {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                sm.app_mut().time_focused = false;
                sm.date_time(DateTimeEvent::SetOpen(false));
            }
            _ => {
                let app = sm.app_mut();
                if handle_text_input_key(&mut app.time_input, key) {
                    let text = app.time_input.value.clone();
                    sm.date_time(DateTimeEvent::EditTime(text));
                }
            }
        }
        return;
    }
    let Some(k) = calendar_key(&key) else { return };
    sm.date_time(match k {
        CalendarKey::Move(d) => DateTimeEvent::MoveCursor(d),
        CalendarKey::PrevMonth => DateTimeEvent::PrevMonth,
        CalendarKey::NextMonth => DateTimeEvent::NextMonth,
        CalendarKey::Pick => DateTimeEvent::PickCursor,
        CalendarKey::Close => DateTimeEvent::SetOpen(false),
    });
}

fn copy_summary(sm: &mut StateManager) {
    let summary = sm.app().summary();
    let result = arboard::Clipboard::new().and_then(|mut cb| cb.set_text(summary));
    let app = sm.app_mut();
    match result {
        Ok(()) => app.set_status("✓ Selection copied to clipboard"),
        Err(err) => {
            warn!(%err, "clipboard unavailable");
            app.set_status(format!("✘ Clipboard unavailable: {err}"));
        }
    }
}
