//! Output layer for the non-interactive `todo show` command.
//!
//! # Output mode resolution
//!
//! Precedence (highest wins):
//! 1. `--format` / hidden `--json` flag
//! 2. `CHECKLIST_FORMAT` env var → `"pretty"` | `"text"` | `"json"`
//! 3. Default: [`OutputMode::Pretty`] if stdout is a TTY; [`OutputMode::Text`] if piped.

use checklist_core::{Checklist, ErrorCode, ItemRef};
use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

/// Shared width for human pretty separators.
pub const PRETTY_RULE_WIDTH: usize = 40;

/// Write a horizontal separator used by pretty human output.
pub fn pretty_rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = PRETTY_RULE_WIDTH)
}

/// Write a section heading followed by a separator.
pub fn pretty_section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    pretty_rule(w)
}

/// The three output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Grouped sections with icons.
    Pretty,
    /// One tab-separated row per item, for pipes.
    Text,
    /// Machine-readable JSON.
    Json,
}

fn resolve_output_mode_inner(
    format_flag: Option<OutputMode>,
    json_flag: bool,
    format_env: Option<&str>,
    is_tty: bool,
) -> OutputMode {
    if let Some(mode) = format_flag {
        return mode;
    }

    if json_flag {
        return OutputMode::Json;
    }

    if let Some(val) = format_env {
        match val.to_lowercase().as_str() {
            "json" => return OutputMode::Json,
            "text" => return OutputMode::Text,
            "pretty" => return OutputMode::Pretty,
            _ => {} // unknown value: fall through to TTY detection
        }
    }

    if is_tty {
        OutputMode::Pretty
    } else {
        OutputMode::Text
    }
}

/// Resolve the output mode from CLI flags, environment, and TTY defaults.
#[must_use]
pub fn resolve_output_mode(format_flag: Option<OutputMode>, json_flag: bool) -> OutputMode {
    let env_val = std::env::var("CHECKLIST_FORMAT").ok();
    let is_tty = io::stdout().is_terminal();
    resolve_output_mode_inner(format_flag, json_flag, env_val.as_deref(), is_tty)
}

/// Serializable view of one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub index: usize,
    pub text: String,
    pub checked: bool,
    pub icon: String,
}

/// Serializable view of a whole list, split the way the panel shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistView {
    pub title: String,
    pub longest_line: usize,
    pub unchecked: Vec<ItemView>,
    pub checked: Vec<ItemView>,
}

impl ChecklistView {
    #[must_use]
    pub fn from_checklist(title: &str, list: &Checklist) -> Self {
        let view = |item: &ItemRef| ItemView {
            index: list.index_by_item(item).unwrap_or_default(),
            text: item.text().to_string(),
            checked: item.is_checked(),
            icon: item.icon().to_string(),
        };
        Self {
            title: title.to_string(),
            longest_line: list.longest_line(),
            unchecked: list.unchecked_items().iter().map(view).collect(),
            checked: list.checked_items().iter().map(view).collect(),
        }
    }

    fn rows(&self) -> impl Iterator<Item = &ItemView> {
        self.unchecked.iter().chain(&self.checked)
    }
}

/// Write `view` in the requested mode.
pub fn render_checklist(
    mode: OutputMode,
    view: &ChecklistView,
    w: &mut dyn Write,
) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *w, view)?;
            writeln!(w)?;
        }
        OutputMode::Text => {
            for row in view.rows() {
                writeln!(w, "{}\t{}\t{}", row.index, u8::from(row.checked), row.text)?;
            }
        }
        OutputMode::Pretty => {
            pretty_section(w, &view.title)?;
            if view.unchecked.is_empty() && view.checked.is_empty() {
                writeln!(w, "(empty)")?;
            }
            for row in view.rows() {
                writeln!(
                    w,
                    "[{}] {:<width$}",
                    row.icon,
                    row.text,
                    width = view.longest_line
                )?;
            }
        }
    }
    Ok(())
}

/// A structured error with optional hint and error code.
#[derive(Debug, Serialize)]
pub struct CliError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl CliError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: None,
            error_code: None,
        }
    }

    /// Attach the code and hint of `code`.
    #[must_use]
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.error_code = Some(code.code().to_string());
        self.hint = code.hint().map(str::to_string);
        self
    }
}

/// Render an error to stderr in the requested format.
pub fn render_error(mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    match mode {
        OutputMode::Json => {
            let wrapper = serde_json::json!({
                "error": error,
            });
            serde_json::to_writer_pretty(&mut out, &wrapper)?;
            writeln!(out)?;
        }
        OutputMode::Pretty | OutputMode::Text => {
            write_human_error(&mut out, error)?;
        }
    }
    Ok(())
}

/// `error[E####]: message` plus an optional `hint:` line.
fn write_human_error(w: &mut dyn Write, error: &CliError) -> io::Result<()> {
    match error.error_code.as_deref() {
        Some(code) => writeln!(w, "error[{code}]: {}", error.message)?,
        None => writeln!(w, "error: {}", error.message)?,
    }
    if let Some(ref hint) = error.hint {
        writeln!(w, "hint: {hint}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Checklist {
        let mut list = Checklist::new("x", " ");
        list.add(true, "done thing");
        list.add(false, "open");
        list
    }

    fn rendered(mode: OutputMode, view: &ChecklistView) -> String {
        let mut buf = Vec::new();
        render_checklist(mode, view, &mut buf).expect("render");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn flag_beats_env_and_tty() {
        let mode = resolve_output_mode_inner(Some(OutputMode::Text), true, Some("json"), true);
        assert_eq!(mode, OutputMode::Text);
    }

    #[test]
    fn json_flag_beats_env() {
        assert_eq!(
            resolve_output_mode_inner(None, true, Some("text"), true),
            OutputMode::Json
        );
    }

    #[test]
    fn env_is_case_insensitive() {
        assert_eq!(
            resolve_output_mode_inner(None, false, Some("JSON"), true),
            OutputMode::Json
        );
    }

    #[test]
    fn unknown_env_falls_back_to_tty_detection() {
        assert_eq!(
            resolve_output_mode_inner(None, false, Some("yaml"), true),
            OutputMode::Pretty
        );
        assert_eq!(
            resolve_output_mode_inner(None, false, None, false),
            OutputMode::Text
        );
    }

    #[test]
    fn view_splits_unchecked_then_checked() {
        let view = ChecklistView::from_checklist("todo", &sample());
        assert_eq!(view.longest_line, 10);
        assert_eq!(view.unchecked.len(), 1);
        assert_eq!(view.unchecked[0].text, "open");
        assert_eq!(view.unchecked[0].index, 0);
        assert_eq!(view.checked[0].text, "done thing");
        assert_eq!(view.checked[0].index, 1);
        assert_eq!(view.checked[0].icon, "x");
    }

    #[test]
    fn text_rows_are_tab_separated() {
        let view = ChecklistView::from_checklist("todo", &sample());
        assert_eq!(rendered(OutputMode::Text, &view), "0\t0\topen\n1\t1\tdone thing\n");
    }

    #[test]
    fn pretty_shows_icons_and_title() {
        let view = ChecklistView::from_checklist("groceries", &sample());
        let out = rendered(OutputMode::Pretty, &view);
        assert!(out.starts_with("groceries\n"));
        assert!(out.contains("[ ] open"));
        assert!(out.contains("[x] done thing"));
    }

    #[test]
    fn pretty_marks_empty_list() {
        let view = ChecklistView::from_checklist("todo", &Checklist::new("x", " "));
        assert!(rendered(OutputMode::Pretty, &view).contains("(empty)"));
    }

    #[test]
    fn json_is_parseable() {
        let view = ChecklistView::from_checklist("todo", &sample());
        let out = rendered(OutputMode::Json, &view);
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(value["title"], "todo");
        assert_eq!(value["checked"][0]["text"], "done thing");
        assert_eq!(value["unchecked"][0]["checked"], false);
    }

    #[test]
    fn cli_error_carries_code_and_hint() {
        let err = CliError::new("boom").with_code(ErrorCode::ConfigParseError);
        assert_eq!(err.error_code.as_deref(), Some("E1002"));
        assert!(err.hint.is_some());
    }

    #[test]
    fn human_error_shows_code_and_hint() {
        let err = CliError::new("config file not found: nope.toml")
            .with_code(ErrorCode::ConfigNotFound);
        let mut buf = Vec::new();
        write_human_error(&mut buf, &err).expect("write");
        let out = String::from_utf8(buf).expect("utf8");
        let mut lines = out.lines();
        assert_eq!(
            lines.next(),
            Some("error[E1001]: config file not found: nope.toml")
        );
        assert!(lines.next().is_some_and(|line| line.starts_with("hint: ")));
    }

    #[test]
    fn human_error_without_code() {
        let mut buf = Vec::new();
        write_human_error(&mut buf, &CliError::new("boom")).expect("write");
        assert_eq!(String::from_utf8(buf).expect("utf8"), "error: boom\n");
    }
}
