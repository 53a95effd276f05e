//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Cart, CartError, Character, CouponOutcome, LineItem, ShopConfig};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Thumbnails currently shown (filtered and sorted)
    pub characters: Vec<Character>,
    /// Character printed on the shirt
    pub selected: Option<Character>,
    /// Line items, size choice and coupon state
    pub cart: Cart,
    /// Result of the last coupon submission
    pub coupon_status: Option<CouponOutcome>,
    /// Cart sidebar visibility
    pub cart_open: bool,
    /// Shirt palette flipped
    pub shirt_inverted: bool,
}

impl ShopState {
    pub fn new(config: &ShopConfig) -> Self {
        Self {
            cart: Cart::from_config(config),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Get the shop store from context
pub fn use_shop_store() -> ShopStore {
    expect_context::<ShopStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add the current selection at the chosen size, then clear the selection
pub fn store_add_to_cart(store: &ShopStore) -> Result<LineItem, CartError> {
    let selection = store.selected().get_untracked();
    let item = store.cart().write().add_item(selection.as_ref())?;
    store.selected().set(None);
    Ok(item)
}

/// Remove a line item by ID
pub fn store_remove_line_item(store: &ShopStore, item_id: u32) {
    store.cart().write().remove_item(item_id);
}

/// Submit a coupon code and remember the outcome for the messages
pub fn store_apply_coupon(store: &ShopStore, code: &str) -> CouponOutcome {
    let outcome = store.cart().write().apply_coupon(code);
    store.coupon_status().set(Some(outcome));
    outcome
}

/// Drain the cart and close the sidebar
pub fn store_checkout(store: &ShopStore) -> Result<Vec<LineItem>, CartError> {
    let purchased = store.cart().write().checkout()?;
    store.cart_open().set(false);
    Ok(purchased)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use shop_domain::{Money, Origin, SizeOption};

    fn setup_store() -> (Owner, ShopStore) {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(ShopState::new(&ShopConfig::default()));
        (owner, store)
    }

    fn morty() -> Character {
        Character {
            id: 2,
            name: "Morty Smith".to_string(),
            image: None,
            status: "Alive".to_string(),
            species: "Human".to_string(),
            gender: "Male".to_string(),
            origin: Origin {
                name: "unknown".to_string(),
                url: String::new(),
            },
            location: None,
        }
    }

    fn select_size(store: &ShopStore, label: &str, euros: u64) {
        store.cart().write().select_size(SizeOption::new(label, Money::euros(euros)));
    }

    #[test]
    fn test_checkout_empty_cart_keeps_sidebar_open() {
        let (_owner, store) = setup_store();
        store.cart_open().set(true);

        assert_eq!(store_checkout(&store), Err(CartError::EmptyCart));
        assert!(store.cart_open().get_untracked());
    }

    #[test]
    fn test_add_to_cart_clears_selection() {
        let (_owner, store) = setup_store();
        store.selected().set(Some(morty()));
        select_size(&store, "M", 13);

        let item = store_add_to_cart(&store).expect("size is selected");
        assert_eq!(item.label(), "Morty Smith (M)");
        assert_eq!(store.selected().get_untracked(), None);
        assert_eq!(store.cart().with_untracked(|cart| cart.len()), 1);
    }

    #[test]
    fn test_add_to_cart_without_size_keeps_selection() {
        let (_owner, store) = setup_store();
        store.selected().set(Some(morty()));

        assert_eq!(store_add_to_cart(&store), Err(CartError::NoSizeSelected));
        assert_eq!(store.selected().get_untracked(), Some(morty()));
        assert_eq!(store.cart().with_untracked(|cart| cart.len()), 0);
    }

    #[test]
    fn test_checkout_drains_cart_and_closes_sidebar() {
        let (_owner, store) = setup_store();
        select_size(&store, "S", 12);
        store_add_to_cart(&store).unwrap();
        select_size(&store, "XL", 15);
        store_add_to_cart(&store).unwrap();
        store.cart_open().set(true);

        let purchased = store_checkout(&store).unwrap();
        assert_eq!(purchased.len(), 2);
        assert!(!store.cart_open().get_untracked());

        let totals = store.cart().with_untracked(|cart| cart.totals());
        assert_eq!(totals.count, 0);
        assert_eq!(totals.total.format_eur(), "0.00€");
    }
}
