//! Color Toggle Component

use leptos::prelude::*;

use crate::store::{use_shop_store, ShopStateStoreFields};

/// Flips the palette of both shirt images at once
#[component]
pub fn ColorToggle() -> impl IntoView {
    let store = use_shop_store();

    let button_class = move || {
        if store.shirt_inverted().get() {
            "color-toggle bg-white text-black border border-gray-800"
        } else {
            "color-toggle bg-gray-800 text-white"
        }
    };

    view! {
        <button
            id="toggleColor"
            class=button_class
            on:click=move |_| store.shirt_inverted().update(|v| *v = !*v)
        >
            "Farbe wechseln"
        </button>
    }
}
