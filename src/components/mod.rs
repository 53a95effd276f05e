//! UI Components
//!
//! Reusable Leptos components.

mod search_bar;
mod thumbnail_grid;
mod shirt_preview;
mod color_toggle;
mod character_details;
mod size_selector;
mod cart_button;
mod cart_sidebar;
mod cart_item_row;
mod coupon_form;

pub use search_bar::SearchBar;
pub use thumbnail_grid::ThumbnailGrid;
pub use shirt_preview::ShirtPreview;
pub use color_toggle::ColorToggle;
pub use character_details::CharacterDetails;
pub use size_selector::SizeSelector;
pub use cart_button::CartButton;
pub use cart_sidebar::CartSidebar;
pub use cart_item_row::CartItemRow;
pub use coupon_form::CouponForm;
