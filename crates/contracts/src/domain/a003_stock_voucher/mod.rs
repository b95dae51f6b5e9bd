pub mod aggregate;

pub use aggregate::{StockType, StockVoucher};
