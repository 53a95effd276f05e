//! Shirt Shop App
//!
//! Main application component: catalog on the left, shirt preview and size
//! picker on the right, cart as a sliding sidebar.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use shop_domain::{filter_characters, CatalogQuery, FetchSequence};

use crate::commands;
use crate::context::ShopContext;
use crate::components::{
    CartButton, CartSidebar, CharacterDetails, ColorToggle, SearchBar, ShirtPreview, SizeSelector,
    ThumbnailGrid,
};
use crate::models::ShopConfig;
use crate::store::{ShopState, ShopStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = ShopConfig::default();
    let store = Store::new(ShopState::new(&config));
    let (query, set_query) = signal(String::new());
    let fetch_sequence = StoredValue::new(FetchSequence::new());

    // Provide context to all children
    let ctx = ShopContext::new((query, set_query), config);
    provide_context(ctx);
    provide_context(store);

    // Reload the catalog on mount and on every search input
    Effect::new(move |_| {
        let raw = query.get();
        let Some(ticket) = fetch_sequence.try_update_value(|seq| seq.begin()) else {
            return;
        };
        let (api_url, max_results) = ctx.with_config(|c| (c.api_url.clone(), c.max_results));

        spawn_local(async move {
            match commands::fetch_characters(&api_url).await {
                Ok(page) => {
                    // A newer search started while this one was in flight
                    if !fetch_sequence.with_value(|seq| seq.is_current(ticket)) {
                        log::debug!("[APP] Dropping stale results for {:?}", raw);
                        return;
                    }
                    let query = CatalogQuery::new(&raw);
                    let shown = filter_characters(page.results, &query, max_results);
                    log::info!("[APP] Showing {} characters for {:?}", shown.len(), raw);
                    store.characters().set(shown);
                }
                Err(e) => log::error!("[APP] Failed to load characters: {}", e),
            }
        });
    });

    view! {
        <div class="shop-layout">
            <header class="shop-header">
                <h1 class="font-schwifty">"Schwifty Shirts"</h1>
                <CartButton />
            </header>

            <main class="shop-main">
                // Left: catalog
                <section class="catalog">
                    <SearchBar />
                    <ThumbnailGrid />
                </section>

                // Right: product customization
                <section class="product">
                    <ShirtPreview />
                    <ColorToggle />
                    <CharacterDetails />
                    <SizeSelector />
                </section>
            </main>

            <CartSidebar />
        </div>
    }
}
