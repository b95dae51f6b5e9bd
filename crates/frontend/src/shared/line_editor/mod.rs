//! Generic inline row editor for stock-entry line items.
//!
//! One engine serves both stock variants (rolls and chemicals): a variant
//! contributes a [`LineItemSpec`] (its draft type, wire record, column
//! descriptors, endpoints and print-template key) and gets the full
//! spreadsheet-like behavior: trailing new-row slot, per-row save/delete,
//! Enter-driven navigation with copy-from-above, multi-selection with
//! bulk delete/print, and per-row print-job tracking.

pub mod api;
pub mod combo;
pub mod fields;
pub mod keynav;
pub mod model;
pub mod widget;

use contracts::domain::a003_stock_voucher::StockVoucher;
use serde::de::DeserializeOwned;
use serde_json::Value;

use fields::FieldDef;
use model::LineDraft;

/// Variant descriptor: everything that differs between the roll and
/// chemical stock pages.
pub trait LineItemSpec: 'static {
    /// Client-side draft edited in the row form.
    type Draft: LineDraft;
    /// Canonical persisted record as returned by the backend.
    type Record: DeserializeOwned + Into<Self::Draft> + Clone + Send + Sync + 'static;

    /// Entity key, used for page ids and input element ids.
    const ENTITY: &'static str;
    const TITLE: &'static str;
    /// Item group inline-created items are filed under.
    const ITEM_GROUP: &'static str;
    /// Form key of the default label print template.
    const TEMPLATE_KEY: &'static str;
    /// Whether the variant has a UOM column (loads the UOM cache).
    const HAS_UOM: bool = false;

    /// REST collection path, e.g. `/api/stock-roll-items`.
    fn collection_path() -> &'static str;

    /// Column descriptors in the row's fixed left-to-right order.
    /// The item picker is expected to come first.
    fn fields() -> &'static [FieldDef<Self::Draft>];

    /// JSON body for creating a row under `voucher_id`.
    fn create_body(voucher_id: i64, draft: &Self::Draft) -> Value;

    /// JSON body for updating a persisted row. Semantically empty fields
    /// are omitted per the field-specific null policy.
    fn update_body(draft: &Self::Draft) -> Value;

    /// Label data payload for a print job: the row's denormalized fields
    /// plus the parent voucher's fields.
    fn print_data(voucher: &StockVoucher, draft: &Self::Draft) -> Value;
}
