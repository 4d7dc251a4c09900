pub mod catalog;
pub mod pricing;

pub use catalog::Catalog;
pub use pricing::QuoteClient;
