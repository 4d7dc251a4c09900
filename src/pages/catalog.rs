use leptos::prelude::*;

use crate::components::Carousel;
use crate::models::LoadState;
use crate::server_fns::get_products;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let products = Resource::new(|| (), |_| get_products());

    view! {
        <div class="catalog-page">
            <Suspense fallback=move || {
                view! { <p class="status">{LoadState::<()>::Loading.message()}</p> }
            }>
                {move || {
                    match LoadState::from_result(products.get()) {
                        LoadState::Ready(items) => view! {
                            <h1 class="main-title">"Product List"</h1>
                            <Carousel products=items/>
                        }
                            .into_any(),
                        state => {
                            let class = if matches!(state, LoadState::Failed) {
                                "status error"
                            } else {
                                "status"
                            };
                            view! { <p class=class>{state.message()}</p> }.into_any()
                        }
                    }
                }}
            </Suspense>
        </div>
    }
}
