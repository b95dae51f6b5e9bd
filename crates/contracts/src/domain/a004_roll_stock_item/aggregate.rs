use serde::{Deserialize, Serialize};

/// Persisted roll line item as returned by the backend.
///
/// `item_code` / `item_name` are denormalized display caches computed by
/// the server from `item_id`; the client never edits them directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRollItem {
    pub id: i64,
    pub voucher_id: i64,
    pub item_id: i64,
    pub item_code: String,
    pub item_name: String,
    pub roll_number: String,
    pub size: f64,
    pub micron: f64,
    pub net_weight: f64,
    pub gross_weight: f64,
    #[serde(default)]
    pub barcode: Option<String>,
}
