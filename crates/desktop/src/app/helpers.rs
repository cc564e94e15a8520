//! Helper utilities for detecting environment defaults and formatting clock text.

use std::process::Command;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use dark_light::Mode as ThemePreference;

pub(crate) fn detect_system_dark() -> bool {
    match dark_light::detect() {
        ThemePreference::Dark => true,
        ThemePreference::Light => false,
        ThemePreference::Default => true,
    }
}

pub(crate) fn format_clock(now: DateTime<Local>) -> String {
    now.format("%H:%M").to_string()
}

pub(crate) fn format_date(now: DateTime<Local>) -> String {
    now.format("%A, %B %-d").to_string()
}

/// Hand a URL or file path to the platform's default opener.
pub(crate) fn open_external(target: &str) -> Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else {
        Command::new("xdg-open")
    };

    command
        .arg(target)
        .spawn()
        .with_context(|| format!("Failed to open {target}"))?;
    Ok(())
}
