mod carousel;
mod color_picker;
mod product_card;
mod rating_stars;

pub use carousel::Carousel;
pub use color_picker::ColorPicker;
pub use product_card::ProductCard;
pub use rating_stars::RatingStars;
