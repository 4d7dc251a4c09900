use leptos::prelude::*;

use crate::models::carousel::star_slots;

/// Five-slot star rating for a 0-5 score
#[component]
pub fn RatingStars(score: f64) -> impl IntoView {
    view! {
        <div class="stars-container">
            {star_slots(score)
                .into_iter()
                .map(|slot| view! { <span class=slot.class()>"★"</span> })
                .collect_view()}
        </div>
    }
}
