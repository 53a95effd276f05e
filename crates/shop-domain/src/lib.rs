//! Shop Domain
//!
//! Target-independent storefront logic:
//! - character: entities returned by the character API
//! - catalog: search, filter and sort over a fetched page
//! - cart: line items, sizes, coupon and totals
//! - money: integer cent amounts in euro
//! - fetch: sequencing of overlapping catalog requests

pub mod cart;
pub mod catalog;
pub mod character;
pub mod config;
pub mod error;
pub mod fetch;
pub mod money;

pub use cart::{Cart, CartTotals, CouponOutcome, LineItem, SizeOption, UNKNOWN_CHARACTER};
pub use catalog::{filter_characters, locale_cmp, CatalogQuery};
pub use character::{Character, CharacterPage, Origin, PageInfo};
pub use config::ShopConfig;
pub use error::{CartError, CatalogError};
pub use fetch::{FetchSequence, RequestTicket};
pub use money::Money;
