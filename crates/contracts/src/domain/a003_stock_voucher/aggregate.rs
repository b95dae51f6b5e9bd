use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stock variant of a voucher: determines which line-item table it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockType {
    Roll,
    Chemical,
}

impl StockType {
    pub fn label(&self) -> &'static str {
        match self {
            StockType::Roll => "Roll stock",
            StockType::Chemical => "Chemical stock",
        }
    }
}

/// Parent stock-entry record that owns a set of inventory line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockVoucher {
    pub id: i64,
    pub voucher_no: String,
    pub vendor_name: String,
    pub invoice_no: String,
    /// ISO 8601 date (yyyy-mm-dd).
    pub invoice_date: String,
    pub stock_type: StockType,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_type_wire_tags() {
        assert_eq!(serde_json::to_string(&StockType::Roll).unwrap(), "\"roll\"");
        assert_eq!(
            serde_json::from_str::<StockType>("\"chemical\"").unwrap(),
            StockType::Chemical
        );
    }
}
