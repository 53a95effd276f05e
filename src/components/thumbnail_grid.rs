//! Thumbnail Grid Component
//!
//! Clickable character images. The whole grid is rebuilt whenever the
//! catalog changes.

use leptos::prelude::*;

use crate::context::use_shop_context;
use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
pub fn ThumbnailGrid() -> impl IntoView {
    let ctx = use_shop_context();
    let store = use_shop_store();
    let placeholder = ctx.with_config(|c| c.placeholder_image.clone());

    view! {
        <div id="thumbnails" class="thumbnail-grid">
            {move || {
                store.characters().get().into_iter().map(|character| {
                    let src = character.image_or(&placeholder).to_string();
                    let alt = character.name.clone();
                    view! {
                        <img
                            class="thumbnail"
                            src=src
                            alt=alt
                            on:click=move |_| {
                                log::debug!("[GRID] Selected #{} {}", character.id, character.name);
                                store.selected().set(Some(character.clone()));
                            }
                        />
                    }
                }).collect_view()
            }}
        </div>
    }
}
