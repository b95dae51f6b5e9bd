//! Enter-key protocol for high-volume data entry.
//!
//! The operator keys a long run of similar rows with Enter alone: an empty
//! field first tries to copy the value from the row above (ditto), the
//! item picker resolves typed text to the first matching option or asks
//! for inline creation, and Enter past the last field saves the row.

use contracts::domain::a001_item::Item;

use super::fields::{FieldDef, FieldKind};
use super::model::{LineDraft, RowBook, RowKey};

/// What the widget must do after the state mutation is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum EnterNext {
    /// Move focus to the next field in the row's fixed order.
    Advance,
    /// Enter was pressed past the last field: save the row.
    Save,
    /// The picker text matched nothing: create an item with this name,
    /// then advance once creation resolves.
    CreateItem(String),
}

/// Case-insensitive first match over the local option cache.
pub fn first_item_match<'a>(items: &'a [Item], query: &str) -> Option<&'a Item> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return None;
    }
    items.iter().find(|i| {
        i.code.to_lowercase().contains(&q) || i.name.to_lowercase().contains(&q)
    })
}

/// Handles Enter on field `field_idx` of row `key`.
///
/// Mutates the book in place (ditto copy or picker selection) and returns
/// the follow-up action. `picker_query` is the current text of the item
/// picker input and is ignored for other field kinds.
pub fn handle_enter<D: LineDraft>(
    book: &mut RowBook<D>,
    fields: &[FieldDef<D>],
    key: RowKey,
    field_idx: usize,
    items: &[Item],
    picker_query: &str,
) -> EnterNext {
    let next = if field_idx + 1 >= fields.len() {
        EnterNext::Save
    } else {
        EnterNext::Advance
    };
    let Some(field) = fields.get(field_idx) else {
        return next;
    };
    let Some(row) = book.get(key) else {
        return next;
    };

    // Ditto: an empty field copies the value from the row directly above.
    // Per-field emptiness applies (zero is a value for numeric fields).
    // Typed picker text takes precedence: the operator is searching, not
    // asking for a copy.
    let query = picker_query.trim();
    let current = (field.get)(&row.draft);
    let wants_lookup = field.kind == FieldKind::ItemPicker && !query.is_empty();
    if current.is_empty() && !wants_lookup {
        if let Some(above) = book.row_above(key) {
            let above_val = (field.get)(&above.draft);
            if !above_val.is_empty() {
                let above_draft = above.draft.clone();
                book.update_draft(key, |d| match field.kind {
                    FieldKind::ItemPicker => d.copy_item_from(&above_draft),
                    FieldKind::UomPicker => d.copy_uom_from(&above_draft),
                    _ => (field.set)(d, above_val),
                });
                return next;
            }
        }
    }

    // Item picker: resolve typed text against the option cache, or ask
    // for inline creation when nothing matches.
    if wants_lookup {
        if let Some(item) = first_item_match(items, query) {
            let item = item.clone();
            book.update_draft(key, |d| d.apply_item(Some(&item)));
            return next;
        }
        return EnterNext::CreateItem(query.to_string());
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::line_editor::fields::FieldValue;
    use contracts::domain::a002_uom::Uom;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct TestDraft {
        id: Option<i64>,
        item_id: Option<i64>,
        item_code: String,
        item_name: String,
        roll_number: String,
        size: Option<f64>,
        uom_id: Option<i64>,
        uom_name: String,
    }

    impl LineDraft for TestDraft {
        fn id(&self) -> Option<i64> {
            self.id
        }
        fn item_id(&self) -> Option<i64> {
            self.item_id
        }
        fn item_code(&self) -> &str {
            &self.item_code
        }
        fn item_name(&self) -> &str {
            &self.item_name
        }
        fn uom_name(&self) -> &str {
            &self.uom_name
        }
        fn apply_item(&mut self, item: Option<&Item>) {
            match item {
                Some(i) => {
                    self.item_id = Some(i.id);
                    self.item_code = i.code.clone();
                    self.item_name = i.name.clone();
                }
                None => {
                    self.item_id = None;
                    self.item_code.clear();
                    self.item_name.clear();
                }
            }
        }
        fn copy_item_from(&mut self, other: &Self) {
            self.item_id = other.item_id;
            self.item_code = other.item_code.clone();
            self.item_name = other.item_name.clone();
        }
        fn apply_uom(&mut self, uom: Option<&Uom>) {
            match uom {
                Some(u) => {
                    self.uom_id = Some(u.id);
                    self.uom_name = u.name.clone();
                }
                None => {
                    self.uom_id = None;
                    self.uom_name.clear();
                }
            }
        }
        fn copy_uom_from(&mut self, other: &Self) {
            self.uom_id = other.uom_id;
            self.uom_name = other.uom_name.clone();
        }
    }

    static FIELDS: [FieldDef<TestDraft>; 4] = [
        FieldDef {
            key: "item",
            label: "Item",
            kind: FieldKind::ItemPicker,
            get: |d| FieldValue::Item(d.item_id),
            set: |_d, _v| {},
        },
        FieldDef {
            key: "roll_number",
            label: "Roll no",
            kind: FieldKind::Text,
            get: |d| FieldValue::Text(d.roll_number.clone()),
            set: |d, v| {
                if let FieldValue::Text(s) = v {
                    d.roll_number = s;
                }
            },
        },
        FieldDef {
            key: "size",
            label: "Size",
            kind: FieldKind::Number,
            get: |d| FieldValue::Number(d.size),
            set: |d, v| {
                if let FieldValue::Number(n) = v {
                    d.size = n;
                }
            },
        },
        FieldDef {
            key: "uom",
            label: "UOM",
            kind: FieldKind::UomPicker,
            get: |d| FieldValue::Uom(d.uom_id),
            set: |_d, _v| {},
        },
    ];

    fn film_a() -> Item {
        Item {
            id: 7,
            code: "FILM-A".into(),
            name: "Film A 40mm".into(),
            group: "rm film".into(),
            uom_id: Some(1),
        }
    }

    fn book_with_saved_row() -> (RowBook<TestDraft>, RowKey) {
        let mut book = RowBook::new();
        book.load(vec![TestDraft {
            id: Some(1),
            item_id: Some(7),
            item_code: "FILM-A".into(),
            item_name: "Film A 40mm".into(),
            roll_number: "R001".into(),
            size: Some(40.0),
            uom_id: Some(3),
            uom_name: "kgs".into(),
        }]);
        let tail = book.tail_key().unwrap();
        (book, tail)
    }

    #[test]
    fn test_ditto_copies_number_and_advances() {
        let (mut book, tail) = book_with_saved_row();
        let next = handle_enter(&mut book, &FIELDS, tail, 2, &[], "");
        assert_eq!(next, EnterNext::Advance);
        assert_eq!(book.get(tail).unwrap().draft.size, Some(40.0));
    }

    #[test]
    fn test_ditto_copies_zero() {
        let (mut book, tail) = book_with_saved_row();
        let above_key = book.rows()[0].key;
        book.update_draft(above_key, |d| d.size = Some(0.0));
        handle_enter(&mut book, &FIELDS, tail, 2, &[], "");
        assert_eq!(book.get(tail).unwrap().draft.size, Some(0.0));
    }

    #[test]
    fn test_ditto_skips_empty_string_above() {
        let (mut book, tail) = book_with_saved_row();
        let above_key = book.rows()[0].key;
        book.update_draft(above_key, |d| d.roll_number.clear());
        let next = handle_enter(&mut book, &FIELDS, tail, 1, &[], "");
        assert_eq!(next, EnterNext::Advance);
        assert_eq!(book.get(tail).unwrap().draft.roll_number, "");
    }

    #[test]
    fn test_ditto_does_not_overwrite_filled_field() {
        let (mut book, tail) = book_with_saved_row();
        book.update_draft(tail, |d| d.size = Some(55.0));
        handle_enter(&mut book, &FIELDS, tail, 2, &[], "");
        assert_eq!(book.get(tail).unwrap().draft.size, Some(55.0));
    }

    #[test]
    fn test_ditto_item_copies_display_caches() {
        let (mut book, tail) = book_with_saved_row();
        handle_enter(&mut book, &FIELDS, tail, 0, &[], "");
        let draft = &book.get(tail).unwrap().draft;
        assert_eq!(draft.item_id, Some(7));
        assert_eq!(draft.item_code, "FILM-A");
        assert_eq!(draft.item_name, "Film A 40mm");
    }

    #[test]
    fn test_ditto_uom_copies_name_cache() {
        let (mut book, tail) = book_with_saved_row();
        let next = handle_enter(&mut book, &FIELDS, tail, 3, &[], "");
        assert_eq!(next, EnterNext::Save);
        let draft = &book.get(tail).unwrap().draft;
        assert_eq!(draft.uom_id, Some(3));
        assert_eq!(draft.uom_name, "kgs");
    }

    #[test]
    fn test_no_row_above_just_advances() {
        let mut book = RowBook::<TestDraft>::new();
        let tail = book.tail_key().unwrap();
        let next = handle_enter(&mut book, &FIELDS, tail, 2, &[], "");
        assert_eq!(next, EnterNext::Advance);
        assert_eq!(book.get(tail).unwrap().draft.size, None);
    }

    #[test]
    fn test_picker_selects_first_match() {
        let mut book = RowBook::<TestDraft>::new();
        let tail = book.tail_key().unwrap();
        let items = [film_a()];
        let next = handle_enter(&mut book, &FIELDS, tail, 0, &items, "film");
        assert_eq!(next, EnterNext::Advance);
        let draft = &book.get(tail).unwrap().draft;
        assert_eq!(draft.item_id, Some(7));
        assert_eq!(draft.item_code, "FILM-A");
    }

    #[test]
    fn test_typed_picker_query_beats_ditto() {
        let (mut book, tail) = book_with_saved_row();
        let other = Item {
            id: 9,
            code: "INK-R".into(),
            name: "Ink Red".into(),
            group: "rm ink/adhesive/chemicals".into(),
            uom_id: Some(1),
        };
        let items = [film_a(), other];
        let next = handle_enter(&mut book, &FIELDS, tail, 0, &items, "ink");
        assert_eq!(next, EnterNext::Advance);
        // The search result wins over the row above.
        assert_eq!(book.get(tail).unwrap().draft.item_id, Some(9));
    }

    #[test]
    fn test_picker_without_match_requests_creation() {
        let mut book = RowBook::<TestDraft>::new();
        let tail = book.tail_key().unwrap();
        let next = handle_enter(&mut book, &FIELDS, tail, 0, &[film_a()], "Ink Red");
        assert_eq!(next, EnterNext::CreateItem("Ink Red".to_string()));
        assert_eq!(book.get(tail).unwrap().draft.item_id, None);
    }

    #[test]
    fn test_enter_past_last_field_saves() {
        let (mut book, tail) = book_with_saved_row();
        book.update_draft(tail, |d| d.uom_id = Some(3));
        let next = handle_enter(&mut book, &FIELDS, tail, 3, &[], "");
        assert_eq!(next, EnterNext::Save);
    }
}
