//! Character Details Component
//!
//! Info panel for the selected character.

use leptos::prelude::*;

use crate::store::{use_shop_store, ShopStateStoreFields};

const EMPTY_SELECTION: &str = "Wählen Sie einen Charakter!";

#[component]
pub fn CharacterDetails() -> impl IntoView {
    let store = use_shop_store();

    view! {
        <div id="selectedCharacterName" class="character-details">
            {move || match store.selected().get() {
                Some(character) => view! {
                    <p class="text-xl font-bold">{character.name}</p>
                    <p class="text-sm"><strong>"Status: "</strong>{character.status}</p>
                    <p class="text-sm"><strong>"Species: "</strong>{character.species}</p>
                    <p class="text-sm"><strong>"Gender: "</strong>{character.gender}</p>
                    <p class="text-sm"><strong>"Origin: "</strong>{character.origin.name}</p>
                    <p class="text-sm"><strong>"ID: "</strong>{character.id}</p>
                }.into_any(),
                None => view! { <p class="text-sm">{EMPTY_SELECTION}</p> }.into_any(),
            }}
        </div>
    }
}
