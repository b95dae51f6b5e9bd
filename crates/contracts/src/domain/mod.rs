pub mod a001_item;
pub mod a002_uom;
pub mod a003_stock_voucher;
pub mod a004_roll_stock_item;
pub mod a005_chem_stock_item;
