pub mod aggregate;

pub use aggregate::StockChemItem;
