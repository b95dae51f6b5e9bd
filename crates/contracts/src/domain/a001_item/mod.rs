pub mod aggregate;

pub use aggregate::{Item, NewItem, ITEM_GROUP_CHEMICAL, ITEM_GROUP_ROLL_FILM};
