// modgate/src/ui/output.rs
//! Rendering of moderation decisions for the terminal.

use std::io::Write;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde::Serialize;

use modgate_core::{FieldModerationResult, ModerationResult, ProfileModerationResult, TextField};

use crate::ui::theme::{Theme, ThemeEntry};

/// Writes any serializable decision as pretty JSON followed by a newline.
pub fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize decision")?;
    writeln!(out, "{}", json)?;
    Ok(())
}

fn verdict(theme: &Theme, approved: bool) -> String {
    if approved {
        theme.strong(ThemeEntry::Approved, "APPROVED")
    } else {
        theme.strong(ThemeEntry::Rejected, "REJECTED")
    }
}

fn join_flags<T: ToString>(theme: &Theme, flags: &[T]) -> String {
    flags
        .iter()
        .map(|f| theme.paint(ThemeEntry::Flag, &f.to_string()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_decision<W: Write>(out: &mut W, result: &ModerationResult, theme: &Theme) -> Result<()> {
    writeln!(out, "{}", verdict(theme, result.approved))?;
    if let Some(reason) = &result.reason {
        writeln!(out, "{} {}", theme.paint(ThemeEntry::Label, "Reason:"), reason)?;
    }
    if !result.flags.is_empty() {
        writeln!(out, "{} {}", theme.paint(ThemeEntry::Label, "Flags:"), join_flags(theme, &result.flags))?;
    }
    writeln!(out, "{} {:.2}", theme.paint(ThemeEntry::Label, "Confidence:"), result.confidence)?;
    if !result.personal_info.is_empty() {
        writeln!(
            out,
            "{} {}",
            theme.paint(ThemeEntry::Label, "Personal info:"),
            join_flags(theme, &result.personal_info)
        )?;
    }
    if let Some(cleaned) = &result.cleaned_text {
        writeln!(out, "{} {}", theme.paint(ThemeEntry::Label, "Cleaned:"), theme.paint(ThemeEntry::Cleaned, cleaned))?;
    }
    Ok(())
}

pub fn print_profile<W: Write>(out: &mut W, result: &ProfileModerationResult, theme: &Theme) -> Result<()> {
    writeln!(out, "{}", verdict(theme, result.approved))?;
    for issue in &result.issues {
        writeln!(out, "  {} {}", theme.paint(ThemeEntry::Rejected, "-"), issue)?;
    }
    Ok(())
}

/// Prints the verdict and a per-field table. Fields after the rejected one
/// were never evaluated and are shown as skipped.
pub fn print_fields<W: Write>(
    out: &mut W,
    fields: &[TextField],
    result: &FieldModerationResult,
    theme: &Theme,
) -> Result<()> {
    writeln!(out, "{}", verdict(theme, result.approved))?;
    if let Some(issue) = result.issue() {
        writeln!(out, "{} {}", theme.paint(ThemeEntry::Label, "Issue:"), issue)?;
    }

    let rejected_at = result
        .field
        .as_deref()
        .and_then(|name| fields.iter().position(|f| f.name == name));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Field", "Status", "Value"]);
    if theme.uses_color() {
        table.enforce_styling();
    }
    for (idx, field) in fields.iter().enumerate() {
        let (status, entry) = match rejected_at {
            Some(at) if idx == at => ("rejected", ThemeEntry::Rejected),
            Some(at) if idx > at => ("skipped", ThemeEntry::Muted),
            _ => ("ok", ThemeEntry::Approved),
        };
        let row = [field.name.as_str(), status, field.value.as_str()].map(|text| {
            let cell = Cell::new(text);
            if theme.uses_color() {
                cell.fg(entry.to_table_color())
            } else {
                cell
            }
        });
        table.add_row(row);
    }
    writeln!(out, "{table}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use modgate_core::Flag;

    fn render<F: FnOnce(&mut Vec<u8>) -> Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_print_decision_rejected() {
        let result = ModerationResult {
            approved: false,
            reason: Some("Content contains inappropriate language".to_string()),
            flags: vec![Flag::Profanity],
            confidence: 0.9,
            ..ModerationResult::default()
        };
        let text = render(|buf| print_decision(buf, &result, &Theme::plain()));
        assert!(text.starts_with("REJECTED\n"));
        assert!(text.contains("Reason: Content contains inappropriate language"));
        assert!(text.contains("Flags: profanity"));
        assert!(text.contains("Confidence: 0.90"));
    }

    #[test]
    fn test_print_fields_marks_skipped() {
        let fields = vec![
            TextField::new("title", "fine"),
            TextField::new("body", "bad"),
            TextField::new("tags", "later"),
        ];
        let result = FieldModerationResult {
            approved: false,
            field: Some("body".to_string()),
            reason: Some("Contains inappropriate language".to_string()),
            flags: vec![Flag::Profanity],
        };
        let text = render(|buf| print_fields(buf, &fields, &result, &Theme::plain()));
        assert!(text.contains("Issue: body: Contains inappropriate language"));
        assert!(text.contains("rejected"));
        assert!(text.contains("skipped"));
        assert!(!text.contains("\u{1b}["));
    }

    #[test]
    fn test_print_fields_colors_rows_when_enabled() {
        let fields = vec![TextField::new("title", "bad"), TextField::new("body", "later")];
        let result = FieldModerationResult {
            approved: false,
            field: Some("title".to_string()),
            reason: Some("Contains inappropriate language".to_string()),
            flags: vec![Flag::Profanity],
        };
        let text = render(|buf| print_fields(buf, &fields, &result, &Theme::new(true)));
        assert!(text.contains("\u{1b}["));
        assert!(strip_ansi_escapes::strip_str(&text).contains("skipped"));
    }
}
