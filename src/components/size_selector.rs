//! Size Selector Component
//!
//! Size buttons, current price readout and the add-to-cart action.

use leptos::prelude::*;

use crate::commands;
use crate::context::use_shop_context;
use crate::models::CartError;
use crate::store::{store_add_to_cart, use_shop_store, ShopStateStoreFields};

const NO_SIZE_SELECTED: &str = "Bitte wählen Sie eine Größe!";

/// Exactly one size can be active; adding resets it
#[component]
pub fn SizeSelector() -> impl IntoView {
    let ctx = use_shop_context();
    let store = use_shop_store();
    let sizes = ctx.with_config(|c| c.sizes.clone());

    let on_add = move |_| match store_add_to_cart(&store) {
        Ok(item) => {
            let count = store.cart().with_untracked(|cart| cart.len());
            log::debug!("[CART] Added {}, cart now holds {} items", item.label(), count);
        }
        Err(CartError::NoSizeSelected) => commands::alert(NO_SIZE_SELECTED),
        Err(e) => log::warn!("[CART] add failed: {}", e),
    };

    view! {
        <div class="size-selector">
            <div class="size-buttons">
                {sizes.into_iter().map(|size| {
                    let label = size.label.clone();
                    let is_active = move || {
                        store.cart().with(|cart| {
                            cart.selected_size().map(|s| s.label == label).unwrap_or(false)
                        })
                    };
                    let text = size.label.clone();
                    let data_size = size.label.clone();
                    let data_price = size.price.to_string();
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_active() {
                                    "size-button bg-green-500 text-white"
                                } else {
                                    "size-button"
                                }
                            }
                            data-size=data_size
                            data-price=data_price
                            on:click=move |_| store.cart().write().select_size(size.clone())
                        >
                            {text}
                        </button>
                    }
                }).collect_view()}
            </div>

            <p class="current-price">
                "Preis: "
                <span id="selected-price">
                    {move || store.cart().with(|cart| cart.current_price().to_string())}
                </span>
                "€"
            </p>

            <button id="add-to-cart" class="add-to-cart" on:click=on_add>
                "AB IN DEN WARENKORB"
            </button>
        </div>
    }
}
