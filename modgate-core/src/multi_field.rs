// modgate-core/src/multi_field.rs
//! Moderation of an ordered set of text fields (e.g. a post's title and body).
//!
//! Unlike profile moderation this stops at the first rejected field; later
//! fields are never evaluated. With auto-clean, a cleaned field value replaces
//! the original before the next field is checked.

use serde::{Deserialize, Serialize};

use crate::engine::ModerationEngine;
use crate::moderation_result::{Flag, ModerationOptions};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextField {
    pub name: String,
    pub value: String,
}

impl TextField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldModerationResult {
    pub approved: bool,
    /// The first rejected field, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<Flag>,
}

impl FieldModerationResult {
    fn accepted() -> Self {
        Self { approved: true, field: None, reason: None, flags: Vec::new() }
    }

    /// `"<field>: <reason>"` for a rejection.
    pub fn issue(&self) -> Option<String> {
        let field = self.field.as_deref()?;
        Some(format!("{}: {}", field, self.reason.as_deref().unwrap_or("Content rejected")))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MultiFieldModerator<'a> {
    engine: &'a ModerationEngine,
}

impl<'a> MultiFieldModerator<'a> {
    pub fn new(engine: &'a ModerationEngine) -> Self {
        Self { engine }
    }

    pub fn moderate_fields(&self, fields: &mut [TextField], auto_clean: bool) -> FieldModerationResult {
        let options = ModerationOptions::default().with_auto_clean(auto_clean);

        for field in fields.iter_mut() {
            let result = self.engine.moderate_text(&field.value, &options);
            if !result.approved {
                return FieldModerationResult {
                    approved: false,
                    field: Some(field.name.clone()),
                    reason: result.reason,
                    flags: result.flags,
                };
            }
            if let Some(cleaned) = result.cleaned_text {
                field.value = cleaned;
            }
        }
        FieldModerationResult::accepted()
    }
}

impl ModerationEngine {
    /// Moderates `fields` in order, stopping at the first rejection; see [`MultiFieldModerator`].
    pub fn moderate_fields(&self, fields: &mut [TextField], auto_clean: bool) -> FieldModerationResult {
        MultiFieldModerator::new(self).moderate_fields(fields, auto_clean)
    }
}
