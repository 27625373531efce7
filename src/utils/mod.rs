//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch_json`] - Network fetching over the browser Fetch API
//! - [`format_population`] - Grouped thousands formatting
//! - [`dom`] - Safe access to window, storage, and the document root

pub mod dom;
mod fetch;
mod format;

pub use fetch::fetch_json;
pub use format::format_population;
