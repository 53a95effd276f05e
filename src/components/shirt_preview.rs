//! Shirt Preview Component
//!
//! Front and back of the mock shirt. The selected character's image is
//! printed on the front, its name on the back.

use leptos::prelude::*;

use crate::context::use_shop_context;
use crate::store::{use_shop_store, ShopStateStoreFields};

const FRONT_IMAGE: &str = "/img/tshirt-front.png";
const BACK_IMAGE: &str = "/img/tshirt-back.png";

#[component]
pub fn ShirtPreview() -> impl IntoView {
    let ctx = use_shop_context();
    let store = use_shop_store();
    let placeholder = ctx.with_config(|c| c.placeholder_image.clone());

    let inverted = move || store.shirt_inverted().get();
    let overlay_src = move || {
        store.selected().with(|selected| {
            selected
                .as_ref()
                .map(|c| c.image_or(&placeholder).to_string())
                .unwrap_or_default()
        })
    };
    let back_name = move || {
        store
            .selected()
            .with(|selected| selected.as_ref().map(|c| c.name.clone()))
    };

    view! {
        <div class="shirt-preview">
            // Front: character image overlay
            <div class="shirt-side">
                <img
                    id="frontTshirt"
                    class="shirt-image"
                    class:invert=inverted
                    src=FRONT_IMAGE
                    alt="T-Shirt vorne"
                />
                <img
                    id="overlayImage"
                    class="shirt-overlay"
                    class:hidden=move || back_name().is_none()
                    src=overlay_src
                    alt=""
                />
            </div>

            // Back: character name
            <div class="shirt-side">
                <img
                    id="backTshirt"
                    class="shirt-image"
                    class:invert=inverted
                    src=BACK_IMAGE
                    alt="T-Shirt hinten"
                />
                <span
                    id="characterName"
                    class="shirt-name text-2xl font-bold text-green-500 font-schwifty"
                    class:hidden=move || back_name().is_none()
                >
                    {move || back_name().unwrap_or_default()}
                </span>
            </div>
        </div>
    }
}
