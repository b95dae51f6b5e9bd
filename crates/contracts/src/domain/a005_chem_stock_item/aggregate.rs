use serde::{Deserialize, Serialize};

/// Persisted chemical line item as returned by the backend.
///
/// `item_code` / `item_name` / `uom_name` are denormalized display caches
/// computed by the server from `item_id` / `uom_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockChemItem {
    pub id: i64,
    pub voucher_id: i64,
    pub item_id: i64,
    pub item_code: String,
    pub item_name: String,
    pub color: String,
    pub quantity: f64,
    pub uom_id: i64,
    pub uom_name: String,
}
