pub mod aggregate;

pub use aggregate::{NewUom, Uom, DEFAULT_UOM_NAME};
