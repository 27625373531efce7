//! Core domain logic: the pure data pipeline that narrows the fetched
//! country collection.
//!
//! This module provides:
//! - [`filter_by_region`], [`search_by_name`], [`apply_filters`] - list
//!   narrowing transforms
//! - [`error`] - fetch error taxonomy

pub mod error;
mod filter;

pub use filter::{apply_filters, filter_by_region, search_by_name};
