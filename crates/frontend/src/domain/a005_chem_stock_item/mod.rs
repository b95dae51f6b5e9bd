//! Chemical stock line items: draft, column descriptors and editor wiring.

pub mod ui;

use contracts::domain::a001_item::{Item, ITEM_GROUP_CHEMICAL};
use contracts::domain::a002_uom::Uom;
use contracts::domain::a003_stock_voucher::StockVoucher;
use contracts::domain::a005_chem_stock_item::StockChemItem;
use serde_json::{json, Map, Value};

use crate::shared::line_editor::fields::{FieldDef, FieldKind, FieldValue};
use crate::shared::line_editor::model::LineDraft;
use crate::shared::line_editor::LineItemSpec;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChemDraft {
    pub id: Option<i64>,
    pub item_id: Option<i64>,
    pub item_code: String,
    pub item_name: String,
    pub color: String,
    pub quantity: Option<f64>,
    pub uom_id: Option<i64>,
    pub uom_name: String,
}

impl From<StockChemItem> for ChemDraft {
    fn from(record: StockChemItem) -> Self {
        Self {
            id: Some(record.id),
            item_id: Some(record.item_id),
            item_code: record.item_code,
            item_name: record.item_name,
            color: record.color,
            quantity: Some(record.quantity),
            uom_id: Some(record.uom_id),
            uom_name: record.uom_name,
        }
    }
}

impl LineDraft for ChemDraft {
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
            Some(item) => {
                self.item_id = Some(item.id);
                self.item_code = item.code.clone();
                self.item_name = item.name.clone();
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
            Some(uom) => {
                self.uom_id = Some(uom.id);
                self.uom_name = uom.name.clone();
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

static CHEM_FIELDS: [FieldDef<ChemDraft>; 4] = [
    FieldDef {
        key: "item",
        label: "Item",
        kind: FieldKind::ItemPicker,
        get: |d| FieldValue::Item(d.item_id),
        set: |_d, _v| {},
    },
    FieldDef {
        key: "color",
        label: "Color",
        kind: FieldKind::Text,
        get: |d| FieldValue::Text(d.color.clone()),
        set: |d, v| {
            if let FieldValue::Text(s) = v {
                d.color = s;
            }
        },
    },
    FieldDef {
        key: "quantity",
        label: "Qty",
        kind: FieldKind::Number,
        get: |d| FieldValue::Number(d.quantity),
        set: |d, v| {
            if let FieldValue::Number(n) = v {
                d.quantity = n;
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

fn body_fields(draft: &ChemDraft) -> Map<String, Value> {
    let mut body = Map::new();
    if let Some(item_id) = draft.item_id {
        body.insert("item_id".into(), json!(item_id));
    }
    if !draft.color.trim().is_empty() {
        body.insert("color".into(), json!(draft.color.trim()));
    }
    if let Some(quantity) = draft.quantity {
        body.insert("quantity".into(), json!(quantity));
    }
    if let Some(uom_id) = draft.uom_id {
        body.insert("uom_id".into(), json!(uom_id));
    }
    body
}

pub struct ChemItemSpec;

impl LineItemSpec for ChemItemSpec {
    type Draft = ChemDraft;
    type Record = StockChemItem;

    const ENTITY: &'static str = "a005_chem_stock_item";
    const TITLE: &'static str = "Chemical stock items";
    const ITEM_GROUP: &'static str = ITEM_GROUP_CHEMICAL;
    const TEMPLATE_KEY: &'static str = "stock_chem_stk";
    const HAS_UOM: bool = true;

    fn collection_path() -> &'static str {
        "/api/stock-chem-items"
    }

    fn fields() -> &'static [FieldDef<ChemDraft>] {
        &CHEM_FIELDS
    }

    fn create_body(voucher_id: i64, draft: &ChemDraft) -> Value {
        let mut body = body_fields(draft);
        body.insert("voucher_id".into(), json!(voucher_id));
        Value::Object(body)
    }

    fn update_body(draft: &ChemDraft) -> Value {
        Value::Object(body_fields(draft))
    }

    fn print_data(voucher: &StockVoucher, draft: &ChemDraft) -> Value {
        json!({
            "voucher_no": voucher.voucher_no,
            "vendor_name": voucher.vendor_name,
            "invoice_no": voucher.invoice_no,
            "invoice_date": voucher.invoice_date,
            "item_code": draft.item_code,
            "item_name": draft.item_name,
            "color": draft.color,
            "quantity": draft.quantity,
            "uom_name": draft.uom_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body_includes_uom_and_skips_blank_color() {
        let draft = ChemDraft {
            item_id: Some(21),
            quantity: Some(0.0),
            uom_id: Some(3),
            uom_name: "kgs".into(),
            ..Default::default()
        };
        let body = ChemItemSpec::create_body(5, &draft);
        let obj = body.as_object().unwrap();
        assert_eq!(obj["voucher_id"], json!(5));
        assert_eq!(obj["uom_id"], json!(3));
        assert_eq!(obj["quantity"], json!(0.0));
        assert!(!obj.contains_key("color"));
        // Display caches never go over the wire.
        assert!(!obj.contains_key("uom_name"));
        assert!(!obj.contains_key("item_name"));
    }

    #[test]
    fn test_uom_ditto_copies_cache() {
        let source = ChemDraft {
            uom_id: Some(3),
            uom_name: "kgs".into(),
            ..Default::default()
        };
        let mut target = ChemDraft::default();
        target.copy_uom_from(&source);
        assert_eq!(target.uom_id, Some(3));
        assert_eq!(target.uom_name, "kgs");
    }
}
