use leptos::prelude::*;

use crate::models::{ColorOption, COLOR_OPTIONS};

#[component]
pub fn ColorPicker(
    selected: ReadSignal<ColorOption>,
    on_select: WriteSignal<ColorOption>,
) -> impl IntoView {
    view! {
        <div class="color-picker">
            {COLOR_OPTIONS
                .into_iter()
                .map(|option| {
                    let class = move || {
                        if selected.get() == option {
                            format!("color-picker-dot color-{} active", option.code)
                        } else {
                            format!("color-picker-dot color-{}", option.code)
                        }
                    };
                    view! {
                        <button
                            type="button"
                            class=class
                            title=option.name
                            style=format!("background-color: {}", option.hex)
                            on:click=move |_| on_select.set(option)
                        ></button>
                    }
                })
                .collect_view()}
        </div>
    }
}
