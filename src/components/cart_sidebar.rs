//! Cart Sidebar Component
//!
//! Sliding cart panel with line items, totals, coupon entry and checkout.

use leptos::prelude::*;

use crate::commands;
use crate::components::{CartItemRow, CouponForm};
use crate::context::use_shop_context;
use crate::store::{store_checkout, use_shop_store, ShopStateStoreFields};

const EMPTY_CART: &str =
    "🛒 Ihr Warenkorb ist leer. Bitte fügen Sie Artikel hinzu, bevor Sie den Kauf abschließen!";
const CONFIRM_PURCHASE: &str = "💳 Möchten Sie den Kauf bestätigen?";
const THANK_YOU: &str =
    "🎉 Vielen Dank für Ihren Einkauf! Ihre Bestellung wurde erfolgreich aufgegeben.";

#[component]
pub fn CartSidebar() -> impl IntoView {
    let ctx = use_shop_context();
    let store = use_shop_store();

    let close = move |_| store.cart_open().set(false);

    let on_checkout = move |_| {
        if store.cart().with_untracked(|cart| cart.ready_for_checkout()).is_err() {
            commands::alert(EMPTY_CART);
            return;
        }
        if !commands::confirm(CONFIRM_PURCHASE) {
            return;
        }
        match store_checkout(&store) {
            Ok(purchased) => log::info!("[CART] Purchased {} items", purchased.len()),
            Err(e) => {
                log::warn!("[CART] checkout aborted: {}", e);
                return;
            }
        }
        commands::alert(THANK_YOU);

        let success_url = ctx.with_config(|c| c.success_url.clone());
        if let Err(e) = commands::navigate_to(&success_url) {
            log::error!("[CART] {}", e);
        }
    };

    let totals = move || store.cart().with(|cart| cart.totals());

    view! {
        // Overlay: click outside closes the cart
        <div
            id="cart-overlay"
            class=move || {
                if store.cart_open().get() {
                    "cart-overlay"
                } else {
                    "cart-overlay opacity-0 invisible"
                }
            }
            on:click=close
        ></div>

        <aside
            id="cart-sidebar"
            class="cart-sidebar"
            style:right=move || if store.cart_open().get() { "0" } else { "-100%" }
        >
            <div class="cart-header">
                <h2>"Warenkorb"</h2>
                <button id="close-cart" class="close-cart" on:click=close>"✕"</button>
            </div>

            <ul id="cart-items" class="cart-items">
                {move || {
                    store.cart().with(|cart| cart.items().to_vec()).into_iter().map(|item| {
                        view! { <CartItemRow item=item /> }
                    }).collect_view()
                }}
            </ul>

            <div id="cart-total" class="cart-total">
                <span>{move || totals().total.format_eur()}</span>
                {move || totals().discount_label().map(|label| view! {
                    <span class="text-sm text-green-600">"(" {label} ")"</span>
                })}
            </div>

            <CouponForm />

            <button id="checkout-button" class="checkout-button" on:click=on_checkout>
                "Zur Kasse"
            </button>
        </aside>
    }
}
