//! Cart Ledger
//!
//! The cart owns its line items, the currently chosen size and the coupon
//! state. Totals are derived from the line items on every read.

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::config::ShopConfig;
use crate::error::CartError;
use crate::money::Money;

/// Line item name used when nothing is selected
pub const UNKNOWN_CHARACTER: &str = "Unbekannter Charakter";

/// A shirt size and its price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOption {
    pub label: String,
    pub price: Money,
}

impl SizeOption {
    pub fn new(label: impl Into<String>, price: Money) -> Self {
        Self {
            label: label.into(),
            price,
        }
    }
}

/// One printed shirt in the cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub id: u32,
    pub character_name: String,
    pub size: String,
    pub price: Money,
}

impl LineItem {
    /// e.g. `Rick Sanchez (M)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.character_name, self.size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponOutcome {
    Accepted,
    Rejected,
}

/// Derived totals of a cart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Money,
    /// Amount saved, only present when a discount actually applies
    pub discount: Option<Money>,
    pub total: Money,
    /// Number of line items
    pub count: usize,
    pub discount_percent: u8,
}

impl CartTotals {
    /// e.g. `-50% Rabatt: -13.50€`
    pub fn discount_label(&self) -> Option<String> {
        self.discount.map(|saved| {
            format!("-{}% Rabatt: -{}", self.discount_percent, saved.format_eur())
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    next_id: u32,
    selected_size: Option<SizeOption>,
    discount_applied: bool,
    coupon_code: String,
    discount_percent: u8,
}

impl Default for Cart {
    fn default() -> Self {
        Self::from_config(&ShopConfig::default())
    }
}

impl Cart {
    pub fn new(coupon_code: &str, discount_percent: u8) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            selected_size: None,
            discount_applied: false,
            coupon_code: coupon_code.trim().to_uppercase(),
            discount_percent: discount_percent.min(100),
        }
    }

    pub fn from_config(config: &ShopConfig) -> Self {
        Self::new(&config.coupon_code, config.discount_percent)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_size(&self) -> Option<&SizeOption> {
        self.selected_size.as_ref()
    }

    /// Price of the chosen size, zero when none is chosen
    pub fn current_price(&self) -> Money {
        self.selected_size
            .as_ref()
            .map(|s| s.price)
            .unwrap_or(Money::ZERO)
    }

    pub fn discount_applied(&self) -> bool {
        self.discount_applied
    }

    /// Choose a size. Replaces any previous choice.
    pub fn select_size(&mut self, size: SizeOption) {
        log::debug!("size {} selected at {}", size.label, size.price);
        self.selected_size = Some(size);
    }

    /// Append a line item for the selection at the chosen size.
    ///
    /// Fails without touching the cart when no size is chosen. On success the
    /// size choice is reset.
    pub fn add_item(&mut self, selection: Option<&Character>) -> Result<LineItem, CartError> {
        let size = self.selected_size.take().ok_or(CartError::NoSizeSelected)?;
        let character_name = selection
            .map(|c| c.name.clone())
            .unwrap_or_else(|| UNKNOWN_CHARACTER.to_string());

        let item = LineItem {
            id: self.next_id,
            character_name,
            size: size.label,
            price: size.price,
        };
        self.next_id += 1;
        self.items.push(item.clone());
        log::info!("added {} for {}", item.label(), item.price.format_eur());
        Ok(item)
    }

    /// Remove a line item by id
    pub fn remove_item(&mut self, id: u32) -> Option<LineItem> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(pos);
        log::info!("removed {}", removed.label());
        Some(removed)
    }

    /// Check a coupon code. A wrong code switches an active discount off.
    pub fn apply_coupon(&mut self, input: &str) -> CouponOutcome {
        self.discount_applied = input.trim().to_uppercase() == self.coupon_code;
        if self.discount_applied {
            log::info!("coupon accepted");
            CouponOutcome::Accepted
        } else {
            log::info!("coupon {:?} rejected", input);
            CouponOutcome::Rejected
        }
    }

    pub fn totals(&self) -> CartTotals {
        let subtotal: Money = self.items.iter().map(|item| item.price).sum();
        let discount = if self.discount_applied {
            Some(subtotal.percent(self.discount_percent)).filter(|d| *d > Money::ZERO)
        } else {
            None
        };
        CartTotals {
            subtotal,
            discount,
            total: subtotal - discount.unwrap_or(Money::ZERO),
            count: self.items.len(),
            discount_percent: self.discount_percent,
        }
    }

    /// Checkout needs at least one line item
    pub fn ready_for_checkout(&self) -> Result<(), CartError> {
        if self.items.is_empty() {
            Err(CartError::EmptyCart)
        } else {
            Ok(())
        }
    }

    /// Empty the cart for a purchase, returning what was bought
    pub fn checkout(&mut self) -> Result<Vec<LineItem>, CartError> {
        self.ready_for_checkout()?;
        let purchased = std::mem::take(&mut self.items);
        log::info!("checked out {} items", purchased.len());
        Ok(purchased)
    }
}
