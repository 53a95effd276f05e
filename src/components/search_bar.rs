//! Search Bar Component

use leptos::prelude::*;

use crate::context::use_shop_context;

/// Free-text search over the catalog. Every keystroke reloads the grid.
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_shop_context();

    view! {
        <div id="search-input" class="search-bar">
            <input
                type="text"
                placeholder="Charakter suchen (Name, Status, Spezies, Herkunft, ID)..."
                autocomplete="off"
                prop:value=move || ctx.query.get()
                on:input=move |ev| ctx.search(event_target_value(&ev))
            />
        </div>
    }
}
