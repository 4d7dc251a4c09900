use leptos::html;
use leptos::prelude::*;
use leptos::web_sys;

use crate::components::ProductCard;
use crate::models::carousel::{indicator_width, scroll_progress};
use crate::models::{Direction, EnrichedItem};

fn measure(el: &web_sys::Element) -> f64 {
    scroll_progress(
        el.scroll_left() as f64,
        el.scroll_width() as f64,
        el.client_width() as f64,
    )
}

/// Horizontally scrolling strip of product cards with arrows and a progress bar
#[component]
pub fn Carousel(products: Vec<EnrichedItem>) -> impl IntoView {
    let carousel_ref = NodeRef::<html::Div>::new();
    let (progress, set_progress) = signal(0.0_f64);
    let indicator = indicator_width(products.len());

    let update_progress = move || {
        if let Some(el) = carousel_ref.get_untracked() {
            set_progress.set(measure(&el));
        }
    };

    // Initial measurement once the strip is in the DOM
    Effect::new(move |_| {
        if let Some(el) = carousel_ref.get() {
            set_progress.set(measure(&el));
        }
    });

    // Direct offset change; the resulting scroll event updates the progress
    let scroll_by = move |direction: Direction| {
        if let Some(el) = carousel_ref.get_untracked() {
            el.set_scroll_left((el.scroll_left() as f64 + direction.offset()) as _);
        }
    };

    view! {
        <div class="product-list-container">
            <button class="nav-arrow left" on:click=move |_| scroll_by(Direction::Left)>
                "<"
            </button>

            <div class="product-carousel" node_ref=carousel_ref on:scroll=move |_| update_progress()>
                {products
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product/> })
                    .collect_view()}
            </div>

            <button class="nav-arrow right" on:click=move |_| scroll_by(Direction::Right)>
                ">"
            </button>

            <div class="progress-track">
                <div
                    class="progress-indicator"
                    style=move || format!("width: {}%; left: {}%;", indicator, progress.get())
                ></div>
            </div>
        </div>
    }
}
