pub mod config;
pub mod logging;
pub mod tui;
pub mod widgets;

pub use config::{load_config, resolve_config, save_config, ConfigError, DemoConfig};
pub use tui::{render_to_buffer, App, Screen, StateManager};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::path::Path;
use tracing::debug;

use crate::widgets::{filter_options, DateConstraints};

/// Parses a `YYYY-MM-DD` command-line date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{text}', expected YYYY-MM-DD"))
}

pub fn info_text(config_path: Option<&Path>) -> String {
    let path = config_path
        .map(Path::to_path_buf)
        .or_else(config::default_config_path);
    let mut out = String::from("Spring AI Chat widgets\n");
    match path {
        Some(p) => {
            out.push_str(&format!("Config path: {}\n", p.display()));
            out.push_str(&format!("Config exists: {}\n", p.exists()));
        }
        None => out.push_str("Config path: (no config directory)\n"),
    }
    if let Some(dir) = config::data_dir() {
        out.push_str(&format!("Log file: {}\n", dir.join(logging::LOG_FILE).display()));
    }
    out.push_str(&format!("Version: {}\n", env!("CARGO_PKG_VERSION")));
    out
}

pub fn info(config_path: Option<&Path>) -> Result<()> {
    print!("{}", info_text(config_path));
    Ok(())
}

/// The demo option list after the same filtering the combobox applies.
pub fn options_text(search: Option<&str>) -> String {
    let options = tui::fruit_options();
    let visible = filter_options(&options, search.unwrap_or(""));
    if visible.is_empty() {
        return format!("{}\n", widgets::combobox::DEFAULT_EMPTY_TEXT);
    }
    visible
        .iter()
        .map(|o| format!("{:<12} {}\n", o.value, o.label))
        .collect()
}

pub fn options(search: Option<&str>) -> Result<()> {
    print!("{}", options_text(search));
    Ok(())
}

pub fn check_date_text(date: NaiveDate, constraints: &DateConstraints) -> String {
    let reason = if constraints.min.is_some_and(|min| date < min) {
        Some("before the minimum date")
    } else if constraints.max.is_some_and(|max| date > max) {
        Some("after the maximum date")
    } else if constraints.excluded.contains(&date) {
        Some("explicitly excluded")
    } else {
        None
    };
    match reason {
        Some(reason) => format!("{date}: disabled ({reason})"),
        None => format!("{date}: selectable"),
    }
}

/// Reports whether `date` could be picked under the given bounds.
pub fn check_date(date: &str, min: Option<&str>, max: Option<&str>, exclude: &[String]) -> Result<()> {
    let date = parse_date(date)?;
    let min = min.map(parse_date).transpose()?;
    let max = max.map(parse_date).transpose()?;
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            bail!("--min {min} is after --max {max}");
        }
    }
    let mut constraints = DateConstraints::new();
    if let Some(min) = min {
        constraints = constraints.with_min(min);
    }
    if let Some(max) = max {
        constraints = constraints.with_max(max);
    }
    let excluded = exclude.iter().map(|d| parse_date(d)).collect::<Result<Vec<_>>>()?;
    constraints = constraints.with_excluded(excluded);
    debug!(?constraints, %date, "checking date");
    println!("{}", check_date_text(date, &constraints));
    Ok(())
}

pub fn show_config(config: &DemoConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
