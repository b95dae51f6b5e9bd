//! Pure row-list state for the line-item editor.
//!
//! Holds the ordered list of inventory rows, each either saved (read-only)
//! or editing (inline form), and keeps the structural invariants:
//!
//! - exactly one unsaved editing row (the "new row" slot) sits at the tail;
//! - the selection set only ever contains ids of saved, non-editing rows;
//! - async completions are keyed by a stable [`RowKey`], never by index,
//!   so a save landing after the list was resized still hits its own row.
//!
//! Nothing in this module touches the DOM or the network; the Leptos
//! widget holds an `RwSignal<EditorState<D>>` and mutates it through these
//! methods, one whole-state update per user-visible transition.

use contracts::domain::a001_item::Item;
use contracts::domain::a002_uom::Uom;
use std::collections::BTreeSet;

/// Stable identity for a row within one editor instance. Survives list
/// insertions/removals, unlike a positional index.
pub type RowKey = u64;

/// Client-side draft of one inventory line.
///
/// Implementations keep the denormalized item/UOM display caches private
/// to `apply_*`/`copy_*_from`: the engine never writes `item_code`,
/// `item_name` or `uom_name` through a field setter.
pub trait LineDraft: Clone + Default + PartialEq + Send + Sync + 'static {
    /// Persisted id; `None` means the row exists only locally.
    fn id(&self) -> Option<i64>;
    fn item_id(&self) -> Option<i64>;
    /// Denormalized item code display cache.
    fn item_code(&self) -> &str;
    /// Denormalized item name display cache.
    fn item_name(&self) -> &str;
    /// Denormalized UOM name display cache; empty for variants without one.
    fn uom_name(&self) -> &str {
        ""
    }
    /// Sets the item reference and refreshes the code/name caches.
    fn apply_item(&mut self, item: Option<&Item>);
    /// Copies the item reference (with caches) from another draft.
    fn copy_item_from(&mut self, other: &Self);
    /// Sets the UOM reference and refreshes the name cache. No-op for
    /// variants without a UOM column.
    fn apply_uom(&mut self, _uom: Option<&Uom>) {}
    /// Copies the UOM reference (with cache) from another draft.
    fn copy_uom_from(&mut self, _other: &Self) {}
}

/// Local validation run before any save call. Failures stay on the row
/// (rendered next to its actions), never in the page banner.
pub fn validate_draft<D: LineDraft>(draft: &D) -> Result<(), String> {
    if draft.item_id().is_none() {
        return Err("Please select an item".to_string());
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorRow<D> {
    pub key: RowKey,
    pub draft: D,
    /// Last-saved values, kept while the row is being edited so cancel can
    /// revert without a refetch.
    pub pristine: Option<D>,
    pub editing: bool,
}

/// Ordered list of rows with stable keys and the trailing-slot invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct RowBook<D> {
    rows: Vec<EditorRow<D>>,
    next_key: RowKey,
}

impl<D: LineDraft> RowBook<D> {
    pub fn new() -> Self {
        let mut book = Self {
            rows: Vec::new(),
            next_key: 1,
        };
        book.ensure_tail_slot();
        book
    }

    /// Replaces the contents with saved records fetched from the backend.
    pub fn load(&mut self, records: Vec<D>) {
        self.rows = records
            .into_iter()
            .map(|draft| EditorRow {
                key: 0,
                draft,
                pristine: None,
                editing: false,
            })
            .collect();
        for row in &mut self.rows {
            row.key = self.next_key;
            self.next_key += 1;
        }
        self.ensure_tail_slot();
    }

    pub fn rows(&self) -> &[EditorRow<D>] {
        &self.rows
    }

    pub fn get(&self, key: RowKey) -> Option<&EditorRow<D>> {
        self.rows.iter().find(|r| r.key == key)
    }

    pub fn find_by_id(&self, id: i64) -> Option<&EditorRow<D>> {
        self.rows.iter().find(|r| r.draft.id() == Some(id))
    }

    /// The row directly above `key`, if any. Used by the ditto protocol.
    pub fn row_above(&self, key: RowKey) -> Option<&EditorRow<D>> {
        let idx = self.rows.iter().position(|r| r.key == key)?;
        if idx == 0 {
            None
        } else {
            self.rows.get(idx - 1)
        }
    }

    /// Key of the trailing new-row slot.
    pub fn tail_key(&self) -> Option<RowKey> {
        self.rows
            .last()
            .filter(|r| r.editing && r.draft.id().is_none())
            .map(|r| r.key)
    }

    pub fn update_draft(&mut self, key: RowKey, f: impl FnOnce(&mut D)) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.key == key) {
            f(&mut row.draft);
        }
    }

    pub fn begin_edit(&mut self, key: RowKey) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.key == key) {
            if !row.editing {
                row.pristine = Some(row.draft.clone());
                row.editing = true;
            }
        }
    }

    /// Cancels an edit. An unsaved row is removed; a saved row reverts to
    /// its pristine values without a network call.
    pub fn cancel_edit(&mut self, key: RowKey) {
        if let Some(idx) = self.rows.iter().position(|r| r.key == key) {
            if self.rows[idx].draft.id().is_none() {
                self.rows.remove(idx);
            } else {
                let row = &mut self.rows[idx];
                if let Some(pristine) = row.pristine.take() {
                    row.draft = pristine;
                }
                row.editing = false;
            }
        }
        self.ensure_tail_slot();
    }

    /// Adopts the backend's canonical record after a successful save and
    /// flips the row to display mode. Re-establishes the tail slot when
    /// the saved row was the slot itself.
    pub fn commit_saved(&mut self, key: RowKey, canonical: D) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.key == key) {
            row.draft = canonical;
            row.pristine = None;
            row.editing = false;
        }
        self.ensure_tail_slot();
    }

    pub fn remove(&mut self, key: RowKey) {
        self.rows.retain(|r| r.key != key);
        self.ensure_tail_slot();
    }

    /// Removes every row whose persisted id is in `ids`, in one pass.
    pub fn remove_saved_ids(&mut self, ids: &BTreeSet<i64>) {
        self.rows
            .retain(|r| r.draft.id().map_or(true, |id| !ids.contains(&id)));
        self.ensure_tail_slot();
    }

    /// Ids of all saved rows currently in display mode.
    pub fn saved_ids(&self) -> Vec<i64> {
        self.rows
            .iter()
            .filter(|r| !r.editing)
            .filter_map(|r| r.draft.id())
            .collect()
    }

    fn ensure_tail_slot(&mut self) {
        let has_slot = self
            .rows
            .last()
            .map_or(false, |r| r.editing && r.draft.id().is_none());
        if !has_slot {
            let key = self.next_key;
            self.next_key += 1;
            self.rows.push(EditorRow {
                key,
                draft: D::default(),
                pristine: None,
                editing: true,
            });
        }
    }
}

impl<D: LineDraft> Default for RowBook<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Row book plus the bulk-action selection set, with pruning rules.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState<D> {
    pub book: RowBook<D>,
    selection: BTreeSet<i64>,
}

impl<D: LineDraft> EditorState<D> {
    pub fn new() -> Self {
        Self {
            book: RowBook::new(),
            selection: BTreeSet::new(),
        }
    }

    pub fn load(&mut self, records: Vec<D>) {
        self.book.load(records);
        self.selection.clear();
    }

    pub fn selection(&self) -> &BTreeSet<i64> {
        &self.selection
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selection.contains(&id)
    }

    /// Toggles selection; only saved, non-editing rows are selectable.
    pub fn toggle_selected(&mut self, id: i64) {
        if self.selection.remove(&id) {
            return;
        }
        let selectable = self
            .book
            .find_by_id(id)
            .map_or(false, |r| !r.editing);
        if selectable {
            self.selection.insert(id);
        }
    }

    /// "Select all" toggle: empty ⇒ all displayed saved rows, else empty.
    /// Computed fresh each time; never sticky.
    pub fn toggle_select_all(&mut self) {
        if self.selection.is_empty() {
            self.selection = self.book.saved_ids().into_iter().collect();
        } else {
            self.selection.clear();
        }
    }

    pub fn all_selected(&self) -> bool {
        let saved = self.book.saved_ids();
        !saved.is_empty() && saved.iter().all(|id| self.selection.contains(id))
    }

    /// Entering edit mode removes the row from the selection set.
    pub fn begin_edit(&mut self, key: RowKey) {
        if let Some(id) = self.book.get(key).and_then(|r| r.draft.id()) {
            self.selection.remove(&id);
        }
        self.book.begin_edit(key);
    }

    pub fn cancel_edit(&mut self, key: RowKey) {
        self.book.cancel_edit(key);
    }

    pub fn update_draft(&mut self, key: RowKey, f: impl FnOnce(&mut D)) {
        self.book.update_draft(key, f);
    }

    pub fn commit_saved(&mut self, key: RowKey, canonical: D) {
        self.book.commit_saved(key, canonical);
    }

    /// Removes a row (local state only) and prunes its id from the
    /// selection set.
    pub fn remove_row(&mut self, key: RowKey) {
        if let Some(id) = self.book.get(key).and_then(|r| r.draft.id()) {
            self.selection.remove(&id);
        }
        self.book.remove(key);
    }

    /// Bulk removal after a batch delete: drops the given rows and their
    /// selection entries in one state update. Ids that failed server-side
    /// are not passed here, so they stay listed and selected.
    pub fn remove_saved_ids(&mut self, ids: &BTreeSet<i64>) {
        self.book.remove_saved_ids(ids);
        for id in ids {
            self.selection.remove(id);
        }
    }
}

impl<D: LineDraft> Default for EditorState<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct TestDraft {
        id: Option<i64>,
        item_id: Option<i64>,
        item_code: String,
        item_name: String,
        size: Option<f64>,
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
    }

    fn saved(id: i64, size: f64) -> TestDraft {
        TestDraft {
            id: Some(id),
            item_id: Some(7),
            item_code: "FILM-A".into(),
            item_name: "Film A".into(),
            size: Some(size),
        }
    }

    fn assert_tail_invariant(book: &RowBook<TestDraft>) {
        let slots: Vec<_> = book
            .rows()
            .iter()
            .filter(|r| r.editing && r.draft.id().is_none())
            .collect();
        assert_eq!(slots.len(), 1, "exactly one new-row slot expected");
        let last = book.rows().last().unwrap();
        assert!(last.editing && last.draft.id().is_none(), "slot must be last");
    }

    #[test]
    fn test_empty_book_has_tail_slot() {
        let book = RowBook::<TestDraft>::new();
        assert_eq!(book.rows().len(), 1);
        assert_tail_invariant(&book);
    }

    #[test]
    fn test_tail_slot_survives_save_cancel_delete() {
        let mut state = EditorState::<TestDraft>::new();
        state.load(vec![saved(1, 40.0)]);
        assert_tail_invariant(&state.book);

        // Fill and save the tail slot: a fresh slot must appear below.
        let tail = state.book.tail_key().unwrap();
        let mut unsaved = saved(2, 50.0);
        unsaved.id = None;
        state.update_draft(tail, |d| *d = unsaved);
        state.commit_saved(tail, saved(2, 50.0));
        assert_tail_invariant(&state.book);
        assert_eq!(state.book.rows().len(), 3);

        // Cancel on the new slot removes nothing visible; the slot stays.
        let tail = state.book.tail_key().unwrap();
        state.cancel_edit(tail);
        assert_tail_invariant(&state.book);

        // Deleting a saved row keeps the slot at the tail.
        let key = state.book.find_by_id(1).unwrap().key;
        state.remove_row(key);
        assert_tail_invariant(&state.book);
        assert_eq!(state.book.rows().len(), 2);
    }

    #[test]
    fn test_create_then_edit_is_update() {
        let mut state = EditorState::<TestDraft>::new();
        let tail = state.book.tail_key().unwrap();
        state.commit_saved(tail, saved(501, 40.0));

        // Re-edit the same row and save again: id preserved, no duplicate.
        let key = state.book.find_by_id(501).unwrap().key;
        state.begin_edit(key);
        state.update_draft(key, |d| d.size = Some(41.0));
        let canonical = TestDraft {
            size: Some(41.0),
            ..saved(501, 41.0)
        };
        state.commit_saved(key, canonical);

        let persisted: Vec<_> = state
            .book
            .rows()
            .iter()
            .filter_map(|r| r.draft.id())
            .collect();
        assert_eq!(persisted, vec![501]);
        assert_eq!(state.book.find_by_id(501).unwrap().draft.size, Some(41.0));
    }

    #[test]
    fn test_cancel_on_saved_row_reverts_to_pristine() {
        let mut state = EditorState::<TestDraft>::new();
        state.load(vec![saved(1, 40.0)]);
        let key = state.book.find_by_id(1).unwrap().key;
        state.begin_edit(key);
        state.update_draft(key, |d| d.size = Some(99.0));
        state.cancel_edit(key);

        let row = state.book.find_by_id(1).unwrap();
        assert!(!row.editing);
        assert_eq!(row.draft.size, Some(40.0));
    }

    #[test]
    fn test_selection_pruned_on_edit_and_remove() {
        let mut state = EditorState::<TestDraft>::new();
        state.load(vec![saved(1, 40.0), saved(2, 50.0)]);
        state.toggle_select_all();
        assert_eq!(state.selection().len(), 2);

        let key = state.book.find_by_id(1).unwrap().key;
        state.begin_edit(key);
        assert!(!state.is_selected(1));
        assert!(state.is_selected(2));

        let key2 = state.book.find_by_id(2).unwrap().key;
        state.remove_row(key2);
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_editing_row_is_not_selectable() {
        let mut state = EditorState::<TestDraft>::new();
        state.load(vec![saved(1, 40.0)]);
        let key = state.book.find_by_id(1).unwrap().key;
        state.begin_edit(key);
        state.toggle_selected(1);
        assert!(!state.is_selected(1));
    }

    #[test]
    fn test_bulk_remove_is_one_update_and_keeps_failures() {
        let mut state = EditorState::<TestDraft>::new();
        state.load(vec![saved(1, 40.0), saved(2, 50.0), saved(3, 60.0)]);
        state.toggle_select_all();

        // 1 and 3 succeeded server-side, 2 failed.
        let ok: BTreeSet<i64> = [1, 3].into_iter().collect();
        state.remove_saved_ids(&ok);

        assert!(state.book.find_by_id(1).is_none());
        assert!(state.book.find_by_id(3).is_none());
        assert!(state.book.find_by_id(2).is_some());
        assert!(state.is_selected(2));
        assert_eq!(state.selection().len(), 1);
        assert_tail_invariant(&state.book);
    }

    #[test]
    fn test_validation_requires_item() {
        let mut draft = TestDraft {
            size: Some(40.0),
            ..Default::default()
        };
        assert_eq!(
            validate_draft(&draft),
            Err("Please select an item".to_string())
        );
        draft.item_id = Some(7);
        assert_eq!(validate_draft(&draft), Ok(()));
    }

    #[test]
    fn test_completion_keyed_by_identity_not_index() {
        let mut state = EditorState::<TestDraft>::new();
        state.load(vec![saved(1, 40.0), saved(2, 50.0)]);
        let key2 = state.book.find_by_id(2).unwrap().key;
        state.begin_edit(key2);

        // The list is resized while row 2's save is in flight.
        let key1 = state.book.find_by_id(1).unwrap().key;
        state.remove_row(key1);

        // The deferred completion still lands on row 2.
        state.commit_saved(key2, saved(2, 55.0));
        assert_eq!(state.book.find_by_id(2).unwrap().draft.size, Some(55.0));
    }
}
