pub mod carousel;
pub mod catalog;
pub mod color;

pub use carousel::{Direction, LoadState, StarSlot};
pub use catalog::{CatalogItem, EnrichedItem, PRICE_ERROR_MESSAGE};
pub use color::{ColorOption, COLOR_OPTIONS};
