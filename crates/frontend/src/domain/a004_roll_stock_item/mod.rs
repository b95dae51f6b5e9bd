//! Roll stock line items: draft, column descriptors and editor wiring.

pub mod ui;

use contracts::domain::a001_item::{Item, ITEM_GROUP_ROLL_FILM};
use contracts::domain::a003_stock_voucher::StockVoucher;
use contracts::domain::a004_roll_stock_item::StockRollItem;
use serde_json::{json, Map, Value};

use crate::shared::line_editor::fields::{FieldDef, FieldKind, FieldValue};
use crate::shared::line_editor::model::LineDraft;
use crate::shared::line_editor::LineItemSpec;

/// Client-side draft of one roll line. Numeric fields are optional: an
/// untouched input and an explicit zero are different values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RollDraft {
    pub id: Option<i64>,
    pub item_id: Option<i64>,
    pub item_code: String,
    pub item_name: String,
    pub roll_number: String,
    pub size: Option<f64>,
    pub micron: Option<f64>,
    pub net_weight: Option<f64>,
    pub gross_weight: Option<f64>,
    pub barcode: String,
}

impl From<StockRollItem> for RollDraft {
    fn from(record: StockRollItem) -> Self {
        Self {
            id: Some(record.id),
            item_id: Some(record.item_id),
            item_code: record.item_code,
            item_name: record.item_name,
            roll_number: record.roll_number,
            size: Some(record.size),
            micron: Some(record.micron),
            net_weight: Some(record.net_weight),
            gross_weight: Some(record.gross_weight),
            barcode: record.barcode.unwrap_or_default(),
        }
    }
}

impl LineDraft for RollDraft {
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
}

static ROLL_FIELDS: [FieldDef<RollDraft>; 7] = [
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
        label: "Size (mm)",
        kind: FieldKind::Number,
        get: |d| FieldValue::Number(d.size),
        set: |d, v| {
            if let FieldValue::Number(n) = v {
                d.size = n;
            }
        },
    },
    FieldDef {
        key: "micron",
        label: "Micron",
        kind: FieldKind::Number,
        get: |d| FieldValue::Number(d.micron),
        set: |d, v| {
            if let FieldValue::Number(n) = v {
                d.micron = n;
            }
        },
    },
    FieldDef {
        key: "net_weight",
        label: "Net wt",
        kind: FieldKind::Number,
        get: |d| FieldValue::Number(d.net_weight),
        set: |d, v| {
            if let FieldValue::Number(n) = v {
                d.net_weight = n;
            }
        },
    },
    FieldDef {
        key: "gross_weight",
        label: "Gross wt",
        kind: FieldKind::Number,
        get: |d| FieldValue::Number(d.gross_weight),
        set: |d, v| {
            if let FieldValue::Number(n) = v {
                d.gross_weight = n;
            }
        },
    },
    FieldDef {
        key: "barcode",
        label: "Barcode",
        kind: FieldKind::Text,
        get: |d| FieldValue::Text(d.barcode.clone()),
        set: |d, v| {
            if let FieldValue::Text(s) = v {
                d.barcode = s;
            }
        },
    },
];

/// Serializes the draft's own columns; unset numbers and blank strings are
/// omitted so the backend applies its defaults instead of storing nulls.
fn body_fields(draft: &RollDraft) -> Map<String, Value> {
    let mut body = Map::new();
    if let Some(item_id) = draft.item_id {
        body.insert("item_id".into(), json!(item_id));
    }
    if !draft.roll_number.trim().is_empty() {
        body.insert("roll_number".into(), json!(draft.roll_number.trim()));
    }
    if let Some(size) = draft.size {
        body.insert("size".into(), json!(size));
    }
    if let Some(micron) = draft.micron {
        body.insert("micron".into(), json!(micron));
    }
    if let Some(net_weight) = draft.net_weight {
        body.insert("net_weight".into(), json!(net_weight));
    }
    if let Some(gross_weight) = draft.gross_weight {
        body.insert("gross_weight".into(), json!(gross_weight));
    }
    if !draft.barcode.trim().is_empty() {
        body.insert("barcode".into(), json!(draft.barcode.trim()));
    }
    body
}

pub struct RollItemSpec;

impl LineItemSpec for RollItemSpec {
    type Draft = RollDraft;
    type Record = StockRollItem;

    const ENTITY: &'static str = "a004_roll_stock_item";
    const TITLE: &'static str = "Roll stock items";
    const ITEM_GROUP: &'static str = ITEM_GROUP_ROLL_FILM;
    const TEMPLATE_KEY: &'static str = "stock_roll_stk";

    fn collection_path() -> &'static str {
        "/api/stock-roll-items"
    }

    fn fields() -> &'static [FieldDef<RollDraft>] {
        &ROLL_FIELDS
    }

    fn create_body(voucher_id: i64, draft: &RollDraft) -> Value {
        let mut body = body_fields(draft);
        body.insert("voucher_id".into(), json!(voucher_id));
        Value::Object(body)
    }

    fn update_body(draft: &RollDraft) -> Value {
        Value::Object(body_fields(draft))
    }

    fn print_data(voucher: &StockVoucher, draft: &RollDraft) -> Value {
        json!({
            "voucher_no": voucher.voucher_no,
            "vendor_name": voucher.vendor_name,
            "invoice_no": voucher.invoice_no,
            "invoice_date": voucher.invoice_date,
            "item_code": draft.item_code,
            "item_name": draft.item_name,
            "roll_number": draft.roll_number,
            "size": draft.size,
            "micron": draft.micron,
            "net_weight": draft.net_weight,
            "gross_weight": draft.gross_weight,
            "barcode": draft.barcode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RollDraft {
        RollDraft {
            id: None,
            item_id: Some(7),
            item_code: "FILM-A".into(),
            item_name: "Film A 40mm".into(),
            roll_number: "R001".into(),
            size: Some(40.0),
            micron: Some(0.0),
            net_weight: None,
            gross_weight: Some(52.4),
            barcode: "".into(),
        }
    }

    #[test]
    fn test_create_body_omits_unset_but_keeps_zero() {
        let body = RollItemSpec::create_body(12, &draft());
        let obj = body.as_object().unwrap();
        assert_eq!(obj["voucher_id"], json!(12));
        assert_eq!(obj["item_id"], json!(7));
        assert_eq!(obj["roll_number"], json!("R001"));
        // Zero is a value and goes over the wire.
        assert_eq!(obj["micron"], json!(0.0));
        // Unset number and blank barcode are omitted, not sent as null.
        assert!(!obj.contains_key("net_weight"));
        assert!(!obj.contains_key("barcode"));
    }

    #[test]
    fn test_update_body_has_no_voucher_id() {
        let body = RollItemSpec::update_body(&draft());
        let obj = body.as_object().unwrap();
        assert!(!obj.contains_key("voucher_id"));
        assert_eq!(obj["gross_weight"], json!(52.4));
    }

    #[test]
    fn test_record_maps_into_draft() {
        let record = StockRollItem {
            id: 3,
            voucher_id: 12,
            item_id: 7,
            item_code: "FILM-A".into(),
            item_name: "Film A 40mm".into(),
            roll_number: "R001".into(),
            size: 40.0,
            micron: 23.0,
            net_weight: 50.0,
            gross_weight: 52.4,
            barcode: None,
        };
        let draft = RollDraft::from(record);
        assert_eq!(draft.id, Some(3));
        assert_eq!(draft.size, Some(40.0));
        assert_eq!(draft.barcode, "");
    }

    #[test]
    fn test_print_data_combines_voucher_and_row() {
        use contracts::domain::a003_stock_voucher::StockType;
        let voucher = StockVoucher {
            id: 12,
            voucher_no: "RS-0042".into(),
            vendor_name: "Acme Films".into(),
            invoice_no: "INV-9".into(),
            invoice_date: "2024-03-15".into(),
            stock_type: StockType::Roll,
            created_at: chrono::Utc::now(),
        };
        let data = RollItemSpec::print_data(&voucher, &draft());
        assert_eq!(data["voucher_no"], json!("RS-0042"));
        assert_eq!(data["roll_number"], json!("R001"));
    }
}
