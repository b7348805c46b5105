//! UI Components
//!
//! Leptos components for the list, profile and register views.

mod filter_bar;
mod item_row;
mod nav_bar;
mod new_item_form;
mod profile_card;
mod register_form;
mod shopping_list_view;
mod stats_bar;

pub use filter_bar::FilterBar;
pub use item_row::ItemRow;
pub use nav_bar::NavBar;
pub use new_item_form::NewItemForm;
pub use profile_card::ProfileCard;
pub use register_form::RegisterForm;
pub use shopping_list_view::ShoppingListView;
pub use stats_bar::StatsBar;
