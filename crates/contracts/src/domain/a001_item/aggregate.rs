use serde::{Deserialize, Serialize};

/// Item group for roll stock (film raw material).
pub const ITEM_GROUP_ROLL_FILM: &str = "rm film";

/// Item group for chemical stock (inks, adhesives, solvents).
pub const ITEM_GROUP_CHEMICAL: &str = "rm ink/adhesive/chemicals";

/// Catalog item (raw material) referenced by stock line items.
///
/// `code` and `name` are the canonical display values; line items cache
/// them denormalized and must refresh the cache whenever `item_id` changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub group: String,
    #[serde(default)]
    pub uom_id: Option<i64>,
}

/// Create payload for inline item creation from the stock-entry picker.
#[derive(Debug, Clone, Serialize)]
pub struct NewItem {
    pub name: String,
    pub group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uom_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserializes_without_uom() {
        let item: Item = serde_json::from_str(
            r#"{"id":7,"code":"FILM-A","name":"Film A 40mm","group":"rm film"}"#,
        )
        .unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.uom_id, None);
    }

    #[test]
    fn test_new_item_omits_absent_uom() {
        let body = serde_json::to_value(NewItem {
            name: "Ink Red".into(),
            group: ITEM_GROUP_CHEMICAL.into(),
            uom_id: None,
        })
        .unwrap();
        assert!(body.get("uom_id").is_none());
    }
}
