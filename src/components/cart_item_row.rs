//! Cart Item Row Component

use leptos::prelude::*;

use crate::models::LineItem;
use crate::store::{store_remove_line_item, use_shop_store};

/// One line item with its remove control
#[component]
pub fn CartItemRow(item: LineItem) -> impl IntoView {
    let store = use_shop_store();
    let id = item.id;

    view! {
        <li class="cart-item">
            <span class="cart-item-label">{item.label()}</span>
            <span class="cart-item-price item-price">{item.price.format_eur()}</span>
            <button
                class="remove-item"
                title="Entfernen"
                on:click=move |_| store_remove_line_item(&store, id)
            >
                "❌"
            </button>
        </li>
    }
}
