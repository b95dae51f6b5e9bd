//! Field descriptors for the line-item editor.
//!
//! A variant (rolls vs. chemicals) describes its columns as a static slice
//! of [`FieldDef`]s; the editor renders inputs, runs the Enter protocol and
//! copies values down strictly through these descriptors, so the two stock
//! pages share one engine.

use crate::shared::format::{format_qty, number_input_text};

/// A single field value, typed by column kind.
///
/// Numeric fields are optional on purpose: an unset number and zero are
/// different things. Zero is a legitimate value and participates in
/// copy-from-above; only `None` counts as empty.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(Option<f64>),
    Item(Option<i64>),
    Uom(Option<i64>),
}

impl FieldValue {
    /// Per-kind emptiness used by the ditto (copy-from-above) protocol.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(n) => n.is_none(),
            FieldValue::Item(id) | FieldValue::Uom(id) => id.is_none(),
        }
    }

    /// Text an edit input should show for this value.
    pub fn input_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => number_input_text(*n),
            FieldValue::Item(_) | FieldValue::Uom(_) => String::new(),
        }
    }

    /// Text a read-only cell should show for this value.
    pub fn display_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => format_qty(*n),
            FieldValue::Item(_) | FieldValue::Uom(_) => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    /// Item lookup with inline "type to create".
    ItemPicker,
    /// Unit-of-measure dropdown.
    UomPicker,
}

/// Column descriptor: label plus typed accessors into the draft.
///
/// `set` is a plain fn pointer so descriptors can live in statics. Picker
/// columns leave `set` a no-op: item/UOM selection must go through the
/// draft's `apply_item`/`apply_uom` so the denormalized display caches stay
/// consistent.
pub struct FieldDef<D> {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub get: fn(&D) -> FieldValue,
    pub set: fn(&mut D, FieldValue),
}

/// Parses raw `<input>` text into a value of the field's kind.
/// Unparseable numeric text is reported as `None` so the caller can keep
/// the previous draft value instead of destroying it mid-keystroke.
pub fn parse_input(kind: FieldKind, raw: &str) -> Option<FieldValue> {
    match kind {
        FieldKind::Text => Some(FieldValue::Text(raw.to_string())),
        FieldKind::Number => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Some(FieldValue::Number(None))
            } else {
                trimmed.parse::<f64>().ok().map(|v| FieldValue::Number(Some(v)))
            }
        }
        FieldKind::ItemPicker | FieldKind::UomPicker => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emptiness_per_kind() {
        assert!(FieldValue::Text("  ".into()).is_empty());
        assert!(!FieldValue::Text("R001".into()).is_empty());
        assert!(FieldValue::Number(None).is_empty());
        // Zero is a value, not an empty slot.
        assert!(!FieldValue::Number(Some(0.0)).is_empty());
        assert!(FieldValue::Item(None).is_empty());
        assert!(!FieldValue::Uom(Some(3)).is_empty());
    }

    #[test]
    fn test_parse_number_input() {
        assert_eq!(
            parse_input(FieldKind::Number, "40.5"),
            Some(FieldValue::Number(Some(40.5)))
        );
        assert_eq!(
            parse_input(FieldKind::Number, "  "),
            Some(FieldValue::Number(None))
        );
        // Partial input such as "40,5" must not clobber the draft.
        assert_eq!(parse_input(FieldKind::Number, "40,5"), None);
    }
}
