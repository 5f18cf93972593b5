// modgate/src/commands/fields.rs
//! `modgate fields`: moderate ordered fields, stopping at the first rejection.

use std::io::Write;

use anyhow::Result;
use log::info;

use modgate_core::{validate_text, ModerationEngine, TextField};

use crate::ui::output;
use crate::ui::theme::Theme;

pub fn run_fields<W: Write>(
    engine: &ModerationEngine,
    fields: &mut [TextField],
    auto_clean: bool,
    json: bool,
    max_len: usize,
    out: &mut W,
    theme: &Theme,
) -> Result<bool> {
    for field in fields.iter() {
        validate_text(&field.name, &field.value, max_len)?;
    }

    let result = engine.moderate_fields(fields, auto_clean);
    info!("Field check finished: approved={}, field={:?}", result.approved, result.field);

    if json {
        let report = serde_json::json!({
            "result": result,
            "fields": fields,
        });
        output::print_json(out, &report)?;
    } else {
        output::print_fields(out, fields, &result, theme)?;
    }
    Ok(result.approved)
}
