//! Storefront Configuration
//!
//! Fixed settings of the shop. Nothing is read from disk or the environment;
//! `ShopConfig::default()` is the configuration.

use serde::{Deserialize, Serialize};

use crate::cart::SizeOption;
use crate::money::Money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Character endpoint, page 1 only
    pub api_url: String,
    /// Results taken from the page before filtering
    pub max_results: usize,
    /// Shown when a character has no image
    pub placeholder_image: String,
    /// The one valid coupon code (compared upper-cased)
    pub coupon_code: String,
    pub discount_percent: u8,
    /// Navigation target after a confirmed checkout
    pub success_url: String,
    pub sizes: Vec<SizeOption>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            api_url: "https://rickandmortyapi.com/api/character/?page=1".to_string(),
            max_results: 50,
            placeholder_image: "/img/placeholder.png".to_string(),
            coupon_code: "SUPER-SALE".to_string(),
            discount_percent: 50,
            success_url: "/success.html".to_string(),
            sizes: vec![
                SizeOption::new("S", Money::euros(12)),
                SizeOption::new("M", Money::euros(13)),
                SizeOption::new("L", Money::euros(14)),
                SizeOption::new("XL", Money::euros(15)),
                SizeOption::new("XXL", Money::euros(16)),
            ],
        }
    }
}
