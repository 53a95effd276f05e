//! Cart Button Component

use leptos::prelude::*;

use crate::store::{use_shop_store, ShopStateStoreFields};

/// Header button opening the cart, with an item count badge
#[component]
pub fn CartButton() -> impl IntoView {
    let store = use_shop_store();

    view! {
        <button id="cart-button" class="cart-button" on:click=move |_| store.cart_open().set(true)>
            "🛒"
            <span id="cart-count" class="cart-badge">
                {move || store.cart().with(|cart| cart.totals().count.to_string())}
            </span>
        </button>
    }
}
