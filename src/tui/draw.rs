use chrono::{Datelike, NaiveDate};
use ratatui::{
    backend::TestBackend,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::tui::input::TextInput;
use crate::tui::state::{App, Field, Screen, MENU_ITEMS};
use crate::widgets::calendar::{is_weekend, month_weeks, CalendarView, WEEKDAY_HEADER};
use crate::widgets::SelectOption;

const BORDER: Color = Color::Rgb(50, 50, 80);
const BACKGROUND: Color = Color::Rgb(15, 15, 25);
const FIELD_HEIGHT: u16 = 4;

// ── Drawing ───────────────────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Background
    f.render_widget(Block::default().style(Style::default().bg(BACKGROUND)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    draw_header(f, chunks[0]);

    match app.screen {
        Screen::Menu => draw_menu(f, chunks[1], app),
        Screen::Selectors | Screen::Dates => draw_fields(f, chunks[1], app),
        Screen::About => draw_about(f, chunks[1]),
    }

    draw_footer(f, chunks[2], app);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let banner = vec![
        Line::from(vec![
            Span::styled("  ❀ ", Style::default().fg(Color::Green)),
            Span::styled("Spring AI Chat", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled("  v", Style::default().fg(Color::DarkGray)),
            Span::styled(env!("CARGO_PKG_VERSION"), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            "    Component gallery · selectors and date pickers",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let header = Paragraph::new(banner)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(BORDER)),
        )
        .alignment(Alignment::Left);
    f.render_widget(header, area);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    if !app.status.is_empty() {
        let status = Paragraph::new(app.status.as_str())
            .style(Style::default().fg(Color::Green).bg(BACKGROUND))
            .alignment(Alignment::Center);
        f.render_widget(status, area);
        return;
    }
    let hint = match (&app.screen, app.overlay_open(), app.focus) {
        (Screen::Menu, _, _) => " ↑↓ Navigate   Enter Select   q Quit ",
        (Screen::Selectors, true, _) => " Type to search   ↑↓ Highlight   Enter Pick   Esc Close ",
        (Screen::Dates, true, Field::DateTime) if app.time_focused => " Type HH:MM   Tab Calendar   Enter/Esc Close ",
        (Screen::Dates, true, Field::DateTime) => " ←→↑↓ Move   PgUp/PgDn Month   Enter Pick   Tab Time   Esc Close ",
        (Screen::Dates, true, _) => " ←→↑↓ Move   PgUp/PgDn Month   Enter Pick   Esc Close ",
        (Screen::Dates, false, _) => " Tab Next   Enter Open   Del Clear   y Copy   Esc Back ",
        (Screen::Selectors, false, _) => " Tab Next   Enter Open   y Copy   Esc Back ",
        _ => " q/Esc Back ",
    };
    let footer = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray).bg(BACKGROUND))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn titled_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(Style::default().fg(if focused { Color::Yellow } else { Color::Cyan }).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Yellow } else { BORDER }))
}

fn draw_menu(f: &mut Frame, area: Rect, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let items: Vec<ListItem> = MENU_ITEMS.iter().map(|label| ListItem::new(*label)).collect();

    let list = List::new(items)
        .block(titled_block(" Menu ", false))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    f.render_stateful_widget(list, outer[0], &mut app.menu_state);

    let welcome = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to Spring AI Chat",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Try the searchable selectors and the date pickers.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(titled_block(" Components ", false))
    .wrap(Wrap { trim: false });
    f.render_widget(welcome, outer[1]);
}

fn draw_about(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Spring AI Chat component gallery", Style::default().fg(Color::White).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("  Selectors: single and multi select with live search and an optional cap."),
        Line::from("  Date pickers: single date, date range (two months), date and time."),
        Line::from(""),
        Line::from(Span::styled(
            "  Widget settings are read from the config file; see `spring-widgets config`.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let p = Paragraph::new(lines)
        .block(titled_block(" About ", false))
        .wrap(Wrap { trim: false });
    f.render_widget(p, area);
}

// ── Fields ────────────────────────────────────────────────────────────────────

fn trigger_text(app: &App, field: Field) -> (String, bool, bool) {
    // (text, has_value, clearable)
    match field {
        Field::Single => (
            app.combobox.display_text(app.selected_fruit.as_deref()).to_string(),
            app.selected_fruit.is_some(),
            false,
        ),
        Field::Multi => (
            app.multi_combobox.display_text(&app.selected_fruits),
            !app.selected_fruits.is_empty(),
            false,
        ),
        Field::Date => (
            app.date_picker.display_text(app.selected_date),
            app.selected_date.is_some(),
            app.date_picker.can_clear(app.selected_date),
        ),
        Field::Range => (
            app.range_picker.display_text(app.date_range),
            app.date_range.is_some(),
            app.range_picker.can_clear(app.date_range),
        ),
        Field::DateTime => (
            app.date_time_picker.display_text(app.selected_date_time),
            app.selected_date_time.is_some(),
            app.date_time_picker.can_clear(app.selected_date_time),
        ),
    }
}

fn draw_fields(f: &mut Frame, area: Rect, app: &mut App) {
    let fields = app.screen_fields();
    let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)).collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut anchor = None;
    for (i, field) in fields.iter().enumerate() {
        let focused = *field == app.focus;
        let (text, has_value, clearable) = trigger_text(app, *field);
        let icon = match field {
            Field::Single | Field::Multi => "",
            _ => "📅 ",
        };
        let chevron = match field {
            Field::Single | Field::Multi => " ⇅",
            _ if clearable => " ✕",
            _ => "",
        };
        let trigger = Line::from(vec![
            Span::styled(format!(" {icon}"), Style::default().fg(Color::Cyan)),
            Span::styled(
                text,
                Style::default().fg(if has_value { Color::White } else { Color::DarkGray }),
            ),
            Span::styled(chevron, Style::default().fg(Color::DarkGray)),
        ]);
        let readout = Line::from(Span::styled(
            format!(" {}", app.readout(*field)),
            Style::default().fg(Color::DarkGray),
        ));
        let title = format!(" {} ", field.label());
        let p = Paragraph::new(vec![trigger, readout]).block(titled_block(&title, focused));
        f.render_widget(p, rows[i]);
        if focused {
            anchor = Some(rows[i]);
        }
    }

    if let Some(anchor) = anchor.filter(|_| app.overlay_open()) {
        draw_overlay(f, area, anchor, app);
    }
}

/// Places a popup of `width` x `height` just below `anchor`, flipping above when it would not fit.
fn popup_rect(bounds: Rect, anchor: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);
    let x = (anchor.x + 2).min(bounds.right().saturating_sub(width));
    let below = anchor.y + anchor.height - 1;
    let y = if below + height <= bounds.bottom() {
        below
    } else {
        anchor.y.saturating_sub(height).max(bounds.y)
    };
    Rect::new(x, y, width, height)
}

fn draw_overlay(f: &mut Frame, bounds: Rect, anchor: Rect, app: &App) {
    match app.focus {
        Field::Single => {
            let rows: Vec<(SelectOption, bool, bool)> = app
                .combobox
                .visible_options()
                .into_iter()
                .map(|o| {
                    let selected = app.selected_fruit.as_deref() == Some(o.value.as_str());
                    (o.clone(), selected, o.disabled)
                })
                .collect();
            let search = app.combobox.searchable.then_some((&app.search_input, app.combobox.search_placeholder.as_str()));
            draw_option_list(f, bounds, anchor, search, &rows, app.combobox.highlight(), &app.combobox.empty_text);
        }
        Field::Multi => {
            let rows: Vec<(SelectOption, bool, bool)> = app
                .multi_combobox
                .visible_options()
                .into_iter()
                .map(|o| {
                    let selected = app.selected_fruits.contains(&o.value);
                    let disabled = app.multi_combobox.is_row_disabled(o, &app.selected_fruits);
                    (o.clone(), selected, disabled)
                })
                .collect();
            let search = app
                .multi_combobox
                .searchable
                .then_some((&app.search_input, app.multi_combobox.search_placeholder.as_str()));
            draw_option_list(f, bounds, anchor, search, &rows, app.multi_combobox.highlight(), &app.multi_combobox.empty_text);
        }
        Field::Date => {
            let selected = |d: NaiveDate| app.selected_date == Some(d);
            let disabled = |d: NaiveDate| app.date_picker.is_day_disabled(d);
            draw_calendar(f, bounds, anchor, app.date_picker.view(), &disabled, &selected, None);
        }
        Field::Range => {
            let range = app.date_range;
            let selected = |d: NaiveDate| range.is_some_and(|r| r.contains(d));
            let disabled = |d: NaiveDate| app.range_picker.is_day_disabled(d);
            draw_calendar(f, bounds, anchor, app.range_picker.view(), &disabled, &selected, None);
        }
        Field::DateTime => {
            let value = app.selected_date_time.map(|v| v.date());
            let selected = |d: NaiveDate| value == Some(d);
            let time = app
                .date_time_picker
                .show_time
                .then_some((&app.time_input, app.time_focused));
            let disabled = |d: NaiveDate| app.date_time_picker.is_day_disabled(d);
            draw_calendar(f, bounds, anchor, app.date_time_picker.view(), &disabled, &selected, time);
        }
    }
}

fn input_spans<'a>(input: &'a TextInput, focused: bool) -> Vec<Span<'a>> {
    let (before, at, after) = input.split_at_cursor();
    let cursor_style = if focused {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };
    vec![
        Span::styled(before, Style::default().fg(Color::White)),
        Span::styled(at, cursor_style),
        Span::styled(after, Style::default().fg(Color::White)),
    ]
}

fn draw_option_list(
    f: &mut Frame,
    bounds: Rect,
    anchor: Rect,
    search: Option<(&TextInput, &str)>,
    rows: &[(SelectOption, bool, bool)],
    highlight: usize,
    empty_text: &str,
) {
    let search_rows = if search.is_some() { 2 } else { 0 };
    let height = rows.len().max(1) as u16 + search_rows + 2;
    let width = anchor.width.saturating_sub(4).max(24);
    let popup = popup_rect(bounds, anchor, width, height);
    f.render_widget(Clear, popup);

    let mut lines = Vec::new();
    if let Some((input, placeholder)) = search {
        let mut spans = vec![Span::styled(" 🔍 ", Style::default().fg(Color::DarkGray))];
        if input.value.is_empty() {
            spans.push(Span::styled(placeholder, Style::default().fg(Color::DarkGray)));
        } else {
            spans.extend(input_spans(input, true));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(Span::styled(
            "─".repeat(popup.width.saturating_sub(2) as usize),
            Style::default().fg(BORDER),
        )));
    }
    if rows.is_empty() {
        lines.push(Line::from(Span::styled(format!(" {empty_text}"), Style::default().fg(Color::DarkGray))));
    }
    for (i, (option, selected, disabled)) in rows.iter().enumerate() {
        let mark = if *selected { " ✓ " } else { "   " };
        let mut style = Style::default().fg(if *disabled { Color::DarkGray } else { Color::White });
        if i == highlight {
            style = style.bg(Color::Rgb(34, 49, 78)).add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(vec![
            Span::styled(mark, Style::default().fg(Color::Green)),
            Span::styled(option.label.clone(), style),
        ]));
    }

    let p = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Rgb(22, 28, 42))),
    );
    f.render_widget(p, popup);
}

fn month_lines<'a>(
    month: NaiveDate,
    cursor: NaiveDate,
    disabled: &dyn Fn(NaiveDate) -> bool,
    selected: &dyn Fn(NaiveDate) -> bool,
) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{:^20}", month.format("%B %Y").to_string()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(WEEKDAY_HEADER.join(" "), Style::default().fg(Color::DarkGray))),
    ];
    for week in month_weeks(month) {
        let mut spans = Vec::new();
        for (i, cell) in week.iter().enumerate() {
            let text = match cell {
                Some(d) => format!("{:>2}", d.day()),
                None => "  ".to_string(),
            };
            let mut style = Style::default().fg(Color::White);
            if let Some(d) = cell {
                if disabled(*d) {
                    style = Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT);
                } else if is_weekend(*d) {
                    style = style.fg(Color::Rgb(170, 180, 210));
                }
                if selected(*d) {
                    style = style.fg(Color::Black).bg(Color::Cyan);
                }
                if *d == cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
            }
            spans.push(Span::styled(text, style));
            if i < 6 {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn draw_calendar(
    f: &mut Frame,
    bounds: Rect,
    anchor: Rect,
    view: &CalendarView,
    disabled: &dyn Fn(NaiveDate) -> bool,
    selected: &dyn Fn(NaiveDate) -> bool,
    time: Option<(&TextInput, bool)>,
) {
    let months = view.visible_months();
    let width = months.len() as u16 * 23 + 2;
    let height = 8 + 2 + if time.is_some() { 2 } else { 0 };
    let popup = popup_rect(bounds, anchor, width, height);
    f.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Rgb(22, 28, 42)));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(inner);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(months.iter().map(|_| Constraint::Length(23)).collect::<Vec<_>>())
        .split(rows[0]);
    for (month, col) in months.iter().zip(cols.iter()) {
        let lines = month_lines(*month, view.cursor(), disabled, selected);
        f.render_widget(Paragraph::new(lines), *col);
    }

    if let Some((input, focused)) = time {
        let mut spans = vec![Span::styled(
            " Time: ",
            Style::default().fg(if focused { Color::Yellow } else { Color::DarkGray }),
        )];
        spans.extend(input_spans(input, focused));
        let p = Paragraph::new(vec![
            Line::from(Span::styled("─".repeat(inner.width as usize), Style::default().fg(BORDER))),
            Line::from(spans),
        ]);
        f.render_widget(p, rows[1]);
    }
}

/// Render the UI into an off-screen buffer (for tests / snapshots).
pub fn render_to_buffer(app: &mut App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("TestBackend terminal");
    terminal.draw(|f| draw(f, app)).expect("draw");
    terminal.backend().buffer().clone()
}
