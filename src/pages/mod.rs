mod catalog;

pub use catalog::CatalogPage;
