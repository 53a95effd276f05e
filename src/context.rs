//! Application Context
//!
//! Shared signals and settings provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::ShopConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct ShopContext {
    /// Raw search input - read
    pub query: ReadSignal<String>,
    /// Raw search input - write
    set_query: WriteSignal<String>,
    /// Storefront settings
    config: StoredValue<ShopConfig>,
}

impl ShopContext {
    pub fn new(query: (ReadSignal<String>, WriteSignal<String>), config: ShopConfig) -> Self {
        Self {
            query: query.0,
            set_query: query.1,
            config: StoredValue::new(config),
        }
    }

    /// Replace the search text; triggers a catalog reload
    pub fn search(&self, text: String) {
        self.set_query.set(text);
    }

    pub fn with_config<U>(&self, f: impl FnOnce(&ShopConfig) -> U) -> U {
        self.config.with_value(f)
    }
}

/// Get the shop context
pub fn use_shop_context() -> ShopContext {
    expect_context::<ShopContext>()
}
