//! Frontend Models
//!
//! Domain types shared with the shop-domain crate.

pub use shop_domain::{
    Cart, CartError, Character, CharacterPage, CouponOutcome, LineItem, ShopConfig,
};
