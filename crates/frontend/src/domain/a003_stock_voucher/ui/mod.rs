mod header;

pub use header::VoucherHeader;
