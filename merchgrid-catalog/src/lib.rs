//! MerchGrid Catalog Engine
//!
//! Platform-agnostic catalog, browse-state and pagination logic for the
//! MerchGrid storefront. This crate owns the data model and all view-model
//! arithmetic; it has no DOM or platform-specific dependencies, so every
//! rendering decision the web crate makes is testable here as plain data.

pub mod browse;
pub mod catalog;
pub mod pager;
pub mod validate;

// Re-export commonly used types
pub use browse::{BrowseState, View};
pub use catalog::{Catalog, Fandom, Product, ProductType};
pub use pager::{PAGE_SIZE, PageView, page_count, page_slice};
pub use validate::{CatalogIssue, validate_catalog};
