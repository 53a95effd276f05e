//! Coupon Form Component
//!
//! Coupon input with mutually exclusive success / error messages.

use leptos::prelude::*;

use crate::context::use_shop_context;
use crate::models::CouponOutcome;
use crate::store::{store_apply_coupon, use_shop_store, ShopStateStoreFields};

#[component]
pub fn CouponForm() -> impl IntoView {
    let ctx = use_shop_context();
    let store = use_shop_store();
    let success_text = format!(
        "✅ Gutschein angewendet: -{}% Rabatt!",
        ctx.with_config(|c| c.discount_percent)
    );
    let (code, set_code) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_apply_coupon(&store, &code.get());
    };

    let accepted = move || store.cart().with(|cart| cart.discount_applied());
    let rejected = move || store.coupon_status().get() == Some(CouponOutcome::Rejected);

    view! {
        <form class="coupon-form" on:submit=on_submit>
            <div class="coupon-row">
                <input
                    id="couponCode"
                    type="text"
                    placeholder="Gutscheincode"
                    autocomplete="off"
                    prop:value=move || code.get()
                    on:input=move |ev| set_code.set(event_target_value(&ev))
                />
                <button id="applyCoupon" type="submit">"Einlösen"</button>
            </div>
            <Show when=accepted>
                <p id="couponMessage" class="text-sm text-green-600">{success_text.clone()}</p>
            </Show>
            <Show when=rejected>
                <p id="couponError" class="text-sm text-red-600">"❌ Ungültiger Gutscheincode"</p>
            </Show>
        </form>
    }
}
