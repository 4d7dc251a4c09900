use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/gold_catalog.css"/>
        <Title text="Gold Catalog - Product List"/>
        <Meta name="description" content="Gold jewellery priced at the live gold rate"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <h1>"404 - Page Not Found"</h1> }>
                    <Route path=path!("/") view=CatalogPage/>
                </Routes>
            </main>
        </Router>
    }
}
