//! Output formatting for `statistella` commands.
//!
//! Supports two modes: human-readable tables (default) and JSON (--json).

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output mode for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Table
        }
    }
}

/// Render rows as a table, or a placeholder line when there are none.
pub fn render_table<T: Tabled>(items: &[T]) -> String {
    if items.is_empty() {
        "(no results)".to_string()
    } else {
        Table::new(items).to_string()
    }
}

/// Print a vec of Tabled + Serialize items in the chosen mode.
pub fn print_items<T: Tabled + Serialize>(items: &[T], mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Table => println!("{}", render_table(items)),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(items)?),
    }
    Ok(())
}

/// Print a single Serialize item as pretty JSON.
pub fn print_item<T: Serialize>(item: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(item)?);
    Ok(())
}

/// Print a titled table section.
pub fn print_section<T: Tabled>(title: &str, items: &[T]) {
    println!("\n\x1b[1m{title}\x1b[0m");
    println!("{}", render_table(items));
}

/// Print a warning message.
pub fn print_warn(msg: &str) {
    println!("\x1b[33m{msg}\x1b[0m");
}
