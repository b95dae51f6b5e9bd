pub mod aggregate;

pub use aggregate::StockRollItem;
