use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use spring_widgets::widgets::{
    filter_options, parse_time_text, Combobox, ComboboxEvent, DateConstraints, DatePicker,
    DatePickerEvent, DateRange, DateRangeEvent, DateRangePicker, DateTimeEvent, DateTimePicker,
    MultiCombobox, MultiComboboxEvent, Outcome, SelectOption, TimeTextError,
};

// ── helpers ───────────────────────────────────────────────────────────────────

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn dt(y: i32, m: u32, day: u32, h: u32, min: u32) -> NaiveDateTime {
    d(y, m, day).and_hms_opt(h, min, 0).unwrap()
}

fn fruits() -> Vec<SelectOption> {
    vec![
        SelectOption::new("apple", "Apple"),
        SelectOption::new("banana", "Banana"),
        SelectOption::new("orange", "Orange"),
        SelectOption::new("grape", "Grape"),
        SelectOption::new("mango", "Mango").disabled(),
    ]
}

fn vals(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn today() -> NaiveDate {
    d(2024, 3, 1)
}

// ── filtering ─────────────────────────────────────────────────────────────────

#[test]
fn empty_search_keeps_every_option_in_order() {
    let options = fruits();
    let labels: Vec<&str> = filter_options(&options, "").iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, ["Apple", "Banana", "Orange", "Grape", "Mango"]);
}

#[test]
fn search_is_case_insensitive_substring_of_label() {
    let options = fruits();
    let labels: Vec<&str> = filter_options(&options, "AN").iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, ["Banana", "Orange", "Mango"]);
}

#[test]
fn search_matches_label_not_value() {
    let options = vec![SelectOption::new("x1", "Kiwi")];
    assert!(filter_options(&options, "x1").is_empty());
    assert_eq!(filter_options(&options, "kiw").len(), 1);
}

#[test]
fn filtered_view_is_subset_preserving_order() {
    let options = fruits();
    for search in ["a", "e", "ng", "zzz", "APPLE"] {
        let view = filter_options(&options, search);
        let mut last = None;
        for option in view {
            let pos = options.iter().position(|o| o == option).unwrap();
            assert!(last.map_or(true, |l| pos > l));
            last = Some(pos);
        }
    }
}

// ── single combobox ───────────────────────────────────────────────────────────

#[test]
fn single_select_then_reselect_clears() {
    let mut cb = Combobox::new(fruits());
    cb.handle(None, ComboboxEvent::SetOpen(true));
    let first = cb.handle(None, ComboboxEvent::Select("apple".into()));
    assert_eq!(first, Outcome::Changed(Some("apple".to_string())));
    assert!(!cb.is_open());

    cb.handle(Some("apple"), ComboboxEvent::SetOpen(true));
    let second = cb.handle(Some("apple"), ComboboxEvent::Select("apple".into()));
    assert_eq!(second, Outcome::Changed(None));
    assert!(!cb.is_open());
}

#[test]
fn single_select_other_value_replaces() {
    let mut cb = Combobox::new(fruits());
    let out = cb.handle(Some("apple"), ComboboxEvent::Select("banana".into()));
    assert_eq!(out.changed(), Some(Some("banana".to_string())));
}

#[test]
fn single_disabled_option_is_a_no_op() {
    let mut cb = Combobox::new(fruits());
    cb.handle(None, ComboboxEvent::SetOpen(true));
    let out = cb.handle(Some("apple"), ComboboxEvent::Select("mango".into()));
    assert_eq!(out, Outcome::Unchanged);
    assert!(cb.is_open());
}

#[test]
fn single_unknown_value_is_ignored() {
    let mut cb = Combobox::new(fruits());
    assert_eq!(cb.handle(None, ComboboxEvent::Select("durian".into())), Outcome::Unchanged);
}

#[test]
fn single_search_resets_on_close() {
    let mut cb = Combobox::new(fruits());
    cb.handle(None, ComboboxEvent::SetOpen(true));
    cb.handle(None, ComboboxEvent::Search("ban".into()));
    assert_eq!(cb.visible_options().len(), 1);
    cb.handle(None, ComboboxEvent::SetOpen(false));
    assert_eq!(cb.search(), "");
    cb.handle(None, ComboboxEvent::SetOpen(true));
    assert_eq!(cb.visible_options().len(), 5);
}

#[test]
fn single_search_ignored_when_not_searchable() {
    let mut cb = Combobox::new(fruits()).with_searchable(false);
    cb.handle(None, ComboboxEvent::Search("ban".into()));
    assert_eq!(cb.search(), "");
    assert_eq!(cb.visible_options().len(), 5);
}

#[test]
fn single_highlight_picks_from_filtered_view() {
    let mut cb = Combobox::new(fruits());
    cb.handle(None, ComboboxEvent::SetOpen(true));
    cb.handle(None, ComboboxEvent::Search("an".into()));
    cb.handle(None, ComboboxEvent::MoveHighlight(1));
    let out = cb.handle(None, ComboboxEvent::SelectHighlighted);
    assert_eq!(out, Outcome::Changed(Some("orange".to_string())));
}

#[test]
fn single_highlight_on_empty_view_is_unchanged() {
    let mut cb = Combobox::new(fruits());
    cb.handle(None, ComboboxEvent::Search("zzz".into()));
    assert_eq!(cb.handle(None, ComboboxEvent::SelectHighlighted), Outcome::Unchanged);
}

#[test]
fn single_display_text() {
    let cb = Combobox::new(fruits());
    assert_eq!(cb.display_text(None), "Select an option...");
    assert_eq!(cb.display_text(Some("grape")), "Grape");
    assert_eq!(cb.display_text(Some("durian")), "Select an option...");
}

#[test]
fn disabled_combobox_never_opens() {
    let mut cb = Combobox::new(fruits()).with_disabled(true);
    cb.handle(None, ComboboxEvent::Toggle);
    assert!(!cb.is_open());
}

// ── multi combobox ────────────────────────────────────────────────────────────

#[test]
fn multi_toggle_adds_and_removes() {
    let mut mc = MultiCombobox::new(fruits());
    let out = mc.handle(&[], MultiComboboxEvent::Select("apple".into()));
    assert_eq!(out, Outcome::Changed(vals(&["apple"])));
    let out = mc.handle(&vals(&["apple", "banana"]), MultiComboboxEvent::Select("apple".into()));
    assert_eq!(out, Outcome::Changed(vals(&["banana"])));
}

#[test]
fn multi_stays_open_after_pick() {
    let mut mc = MultiCombobox::new(fruits());
    mc.handle(&[], MultiComboboxEvent::SetOpen(true));
    mc.handle(&[], MultiComboboxEvent::Search("app".into()));
    mc.handle(&[], MultiComboboxEvent::Select("apple".into()));
    assert!(mc.is_open());
    assert_eq!(mc.search(), "");
}

#[test]
fn multi_cap_blocks_additions_but_not_removals() {
    let mut mc = MultiCombobox::new(fruits()).with_max_selected(Some(2));
    let full = vals(&["apple", "banana"]);

    let out = mc.handle(&full, MultiComboboxEvent::Select("orange".into()));
    assert_eq!(out, Outcome::Unchanged);

    let out = mc.handle(&full, MultiComboboxEvent::Select("banana".into()));
    assert_eq!(out, Outcome::Changed(vals(&["apple"])));
}

#[test]
fn multi_rows_disable_at_cap() {
    let mc = MultiCombobox::new(fruits()).with_max_selected(Some(2));
    let options = fruits();
    let full = vals(&["apple", "banana"]);
    assert!(!mc.is_row_disabled(&options[0], &full));
    assert!(mc.is_row_disabled(&options[2], &full));
    assert!(!mc.is_row_disabled(&options[2], &vals(&["apple"])));
    assert!(mc.is_row_disabled(&options[4], &[]));
}

#[test]
fn multi_length_never_exceeds_cap() {
    let mut mc = MultiCombobox::new(fruits()).with_max_selected(Some(3));
    let mut current: Vec<String> = Vec::new();
    for value in ["apple", "banana", "orange", "grape", "banana", "grape", "apple"] {
        mc.handle(&current, MultiComboboxEvent::Select(value.into()))
            .apply_to(&mut current);
        assert!(current.len() <= 3);
    }
    assert_eq!(current, vals(&["orange", "grape"]));
}

#[test]
fn multi_disabled_option_is_a_no_op() {
    let mut mc = MultiCombobox::new(fruits());
    assert_eq!(mc.handle(&[], MultiComboboxEvent::Select("mango".into())), Outcome::Unchanged);
}

#[test]
fn multi_display_text() {
    let mc = MultiCombobox::new(fruits());
    assert_eq!(mc.display_text(&[]), "Select options...");
    assert_eq!(mc.display_text(&vals(&["grape"])), "Grape");
    assert_eq!(mc.display_text(&vals(&["grape", "apple"])), "2 options selected");
}

// ── date constraints ──────────────────────────────────────────────────────────

#[test]
fn bounds_and_exclusions_disable_days() {
    let c = DateConstraints::new()
        .with_min(d(2024, 1, 10))
        .with_max(d(2024, 1, 20))
        .with_excluded([d(2024, 1, 15)]);
    assert!(c.is_disabled(d(2024, 1, 9)));
    assert!(c.is_enabled(d(2024, 1, 10)));
    assert!(c.is_disabled(d(2024, 1, 15)));
    assert!(c.is_enabled(d(2024, 1, 20)));
    assert!(c.is_disabled(d(2024, 1, 21)));
}

#[test]
fn picking_a_disabled_day_does_nothing() {
    let c = DateConstraints::new().with_min(d(2024, 1, 10)).with_max(d(2024, 1, 20)).with_excluded([d(2024, 1, 15)]);
    let mut dp = DatePicker::new(d(2024, 1, 12)).with_constraints(c);
    dp.handle(None, DatePickerEvent::SetOpen(true));
    assert_eq!(dp.handle(None, DatePickerEvent::Pick(d(2024, 1, 15))), Outcome::Unchanged);
    assert!(dp.is_open());
    assert_eq!(
        dp.handle(None, DatePickerEvent::Pick(d(2024, 1, 12))),
        Outcome::Changed(Some(d(2024, 1, 12)))
    );
    assert!(!dp.is_open());
}

// ── single date picker ────────────────────────────────────────────────────────

#[test]
fn date_picker_display_and_placeholder() {
    let dp = DatePicker::new(today());
    assert_eq!(dp.display_text(None), "Pick a date");
    assert_eq!(dp.display_text(Some(d(2024, 3, 5))), "March 5, 2024");
}

#[test]
fn date_picker_reopens_on_current_month() {
    let mut dp = DatePicker::new(today());
    dp.handle(Some(d(2024, 7, 20)), DatePickerEvent::Toggle);
    assert_eq!(dp.view().month(), d(2024, 7, 1));
    assert_eq!(dp.view().cursor(), d(2024, 7, 20));
}

#[test]
fn date_picker_keyboard_pick() {
    let mut dp = DatePicker::new(today());
    dp.handle(None, DatePickerEvent::SetOpen(true));
    dp.handle(None, DatePickerEvent::MoveCursor(7));
    assert_eq!(dp.handle(None, DatePickerEvent::PickCursor), Outcome::Changed(Some(d(2024, 3, 8))));
}

#[test]
fn date_picker_clear_leaves_overlay_alone() {
    let mut dp = DatePicker::new(today());
    assert_eq!(dp.handle(Some(today()), DatePickerEvent::Clear), Outcome::Changed(None));
    assert!(!dp.is_open());
    assert_eq!(dp.handle(None, DatePickerEvent::Clear), Outcome::Unchanged);
}

#[test]
fn date_picker_not_clearable() {
    let mut dp = DatePicker::new(today()).with_clearable(false);
    assert!(!dp.can_clear(Some(today())));
    assert_eq!(dp.handle(Some(today()), DatePickerEvent::Clear), Outcome::Unchanged);
}

// ── range picker ──────────────────────────────────────────────────────────────

#[test]
fn range_completes_and_closes() {
    let mut rp = DateRangePicker::new(today());
    rp.handle(None, DateRangeEvent::SetOpen(true));
    let mut range = None;

    rp.handle(range, DateRangeEvent::Pick(d(2024, 3, 1))).apply_to(&mut range);
    assert_eq!(range, Some(DateRange::starting(d(2024, 3, 1))));
    assert!(rp.is_open());

    rp.handle(range, DateRangeEvent::Pick(d(2024, 3, 5))).apply_to(&mut range);
    assert_eq!(range, Some(DateRange::between(d(2024, 3, 1), d(2024, 3, 5))));
    assert!(!rp.is_open());
}

#[test]
fn range_second_pick_before_start_reorders() {
    let mut rp = DateRangePicker::new(today());
    let out = rp.handle(Some(DateRange::starting(d(2024, 3, 10))), DateRangeEvent::Pick(d(2024, 3, 2)));
    assert_eq!(out, Outcome::Changed(Some(DateRange::between(d(2024, 3, 2), d(2024, 3, 10)))));
}

#[test]
fn range_from_never_after_to() {
    let mut rp = DateRangePicker::new(today());
    let mut range = None;
    for day in [12, 3, 20, 3, 7, 25, 1, 25] {
        rp.handle(range, DateRangeEvent::Pick(d(2024, 3, day))).apply_to(&mut range);
        if let Some(DateRange { from, to: Some(to) }) = range {
            assert!(from <= to);
        }
    }
}

#[test]
fn range_shows_two_months() {
    let rp = DateRangePicker::new(today());
    assert_eq!(rp.view().visible_months(), vec![d(2024, 3, 1), d(2024, 4, 1)]);
}

#[test]
fn range_display_text() {
    let rp = DateRangePicker::new(today());
    assert_eq!(rp.display_text(None), "Pick a date range");
    assert_eq!(rp.display_text(Some(DateRange::starting(d(2024, 3, 1)))), "Mar 01, 2024");
    assert_eq!(
        rp.display_text(Some(DateRange::between(d(2024, 3, 1), d(2024, 3, 5)))),
        "Mar 01, 2024 - Mar 05, 2024"
    );
}

#[test]
fn range_clear() {
    let mut rp = DateRangePicker::new(today());
    let range = Some(DateRange::between(d(2024, 3, 1), d(2024, 3, 5)));
    assert_eq!(rp.handle(range, DateRangeEvent::Clear), Outcome::Changed(None));
}

// ── date-time picker ──────────────────────────────────────────────────────────

#[test]
fn date_time_pick_keeps_time_then_edit_replaces_it() {
    let mut picker = DateTimePicker::new(today());
    let mut value = Some(dt(2024, 3, 10, 14, 30));

    picker.handle(value, DateTimeEvent::Pick(d(2024, 3, 12))).apply_to(&mut value);
    assert_eq!(value, Some(dt(2024, 3, 12, 14, 30)));

    picker.handle(value, DateTimeEvent::EditTime("09:05".into())).apply_to(&mut value);
    assert_eq!(value, Some(dt(2024, 3, 12, 9, 5)));
    assert_eq!(picker.time_text(), "09:05");
}

#[test]
fn date_time_time_text_merges_onto_picked_day() {
    let mut picker = DateTimePicker::new(d(2024, 6, 1));
    let mut value = None;
    picker.handle(value, DateTimeEvent::EditTime("14:30".into()));
    let out = picker.handle(value, DateTimeEvent::Pick(d(2024, 6, 1)));
    assert!(out.is_changed());
    out.apply_to(&mut value);
    assert_eq!(value, Some(dt(2024, 6, 1, 14, 30)));

    picker.handle(value, DateTimeEvent::EditTime("09:05".into())).apply_to(&mut value);
    assert_eq!(value, Some(dt(2024, 6, 1, 9, 5)));
}

#[test]
fn date_time_invalid_text_keeps_value() {
    let mut picker = DateTimePicker::new(today());
    let value = Some(dt(2024, 3, 12, 9, 5));
    assert_eq!(picker.handle(value, DateTimeEvent::EditTime("25:00".into())), Outcome::Unchanged);
    assert_eq!(picker.time_text(), "25:00");
    // a later pick still uses the last valid time
    let out = picker.handle(value, DateTimeEvent::Pick(d(2024, 3, 14)));
    assert_eq!(out, Outcome::Changed(Some(dt(2024, 3, 14, 9, 5))));
}

#[test]
fn date_time_edit_without_date_is_remembered() {
    let mut picker = DateTimePicker::new(today());
    assert_eq!(picker.handle(None, DateTimeEvent::EditTime("18:45".into())), Outcome::Unchanged);
    let out = picker.handle(None, DateTimeEvent::Pick(d(2024, 3, 2)));
    assert_eq!(out, Outcome::Changed(Some(dt(2024, 3, 2, 18, 45))));
}

#[test]
fn date_time_without_time_field_uses_midnight_and_closes() {
    let mut picker = DateTimePicker::new(today()).with_show_time(false);
    picker.handle(None, DateTimeEvent::SetOpen(true));
    let out = picker.handle(Some(dt(2024, 3, 1, 10, 0)), DateTimeEvent::Pick(d(2024, 3, 4)));
    assert_eq!(out, Outcome::Changed(Some(dt(2024, 3, 4, 0, 0))));
    assert!(!picker.is_open());
}

#[test]
fn date_time_with_time_field_stays_open() {
    let mut picker = DateTimePicker::new(today());
    picker.handle(None, DateTimeEvent::SetOpen(true));
    picker.handle(None, DateTimeEvent::Pick(d(2024, 3, 4)));
    assert!(picker.is_open());
}

#[test]
fn date_time_clear_resets_time_text() {
    let mut picker = DateTimePicker::new(today()).with_value(Some(dt(2024, 3, 12, 9, 5)));
    assert_eq!(picker.time_text(), "09:05");
    let out = picker.handle(Some(dt(2024, 3, 12, 9, 5)), DateTimeEvent::Clear);
    assert_eq!(out, Outcome::Changed(None));
    assert_eq!(picker.time_text(), "00:00");
}

#[test]
fn date_time_caller_value_reseeds_time_field() {
    let mut picker = DateTimePicker::new(today());
    picker.handle(Some(dt(2024, 5, 1, 7, 15)), DateTimeEvent::SetOpen(true));
    assert_eq!(picker.time_text(), "07:15");
    assert_eq!(picker.view().month(), d(2024, 5, 1));
}

#[test]
fn date_time_display_text() {
    let picker = DateTimePicker::new(today());
    assert_eq!(picker.display_text(None), "Pick a date and time");
    assert_eq!(picker.display_text(Some(dt(2024, 3, 12, 14, 30))), "March 12, 2024 2:30 PM");
}

// ── time text ─────────────────────────────────────────────────────────────────

#[test]
fn time_text_parsing() {
    assert_eq!(parse_time_text("09:05"), Ok(NaiveTime::from_hms_opt(9, 5, 0).unwrap()));
    assert_eq!(parse_time_text("9:5"), Ok(NaiveTime::from_hms_opt(9, 5, 0).unwrap()));
    assert_eq!(parse_time_text("24:00"), Err(TimeTextError::HourOutOfRange(24)));
    assert_eq!(parse_time_text("12:60"), Err(TimeTextError::MinuteOutOfRange(60)));
    assert!(matches!(parse_time_text("noon"), Err(TimeTextError::Malformed(_))));
}
