mod page;

pub use page::ChemStockPage;
