mod page;

pub use page::RollStockPage;
