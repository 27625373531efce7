//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Country`] and its nested records - the dataset contract
//! - [`View`] - list/detail panel state machine
//! - [`Theme`] - light/dark preference with localStorage persistence

mod country;
mod theme;
mod view;

pub use country::{Country, CountryName, Currency, Flags, NativeName};
pub use theme::Theme;
pub use view::View;
