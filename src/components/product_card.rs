use leptos::prelude::*;

use crate::components::{ColorPicker, RatingStars};
use crate::models::color::image_for;
use crate::models::{ColorOption, EnrichedItem};

#[component]
pub fn ProductCard(product: EnrichedItem) -> impl IntoView {
    // Each card keeps its own colour; clicking here never touches other cards
    let (selected, set_selected) = signal(ColorOption::default());

    let rating = product.rating();
    let price = product.price_label();
    let score_label = format!("{}/5", product.score_out_of_5);
    let name = product.item.name.clone();
    let alt = name.clone();
    let item = product.item;
    let image = move || image_for(&item, &selected.get()).to_string();

    view! {
        <div class="product-card">
            <div class="product-image-container">
                <img src=image alt=alt class="product-image"/>
            </div>

            <div class="product-details">
                <h3 class="product-title">{name}</h3>
                <p class="product-price">{price}</p>
                <ColorPicker selected=selected on_select=set_selected/>
                <p class="product-color-name">{move || selected.get().name}</p>
                <div class="product-rating">
                    <RatingStars score=rating/>
                    <span class="rating-text">{score_label}</span>
                </div>
            </div>
        </div>
    }
}
