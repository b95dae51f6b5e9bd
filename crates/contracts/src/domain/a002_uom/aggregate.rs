use serde::{Deserialize, Serialize};

/// Best-effort default unit of measure used to seed inline-created items.
pub const DEFAULT_UOM_NAME: &str = "kgs";

/// Unit of measure (id + name pair).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Uom {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewUom {
    pub name: String,
}
