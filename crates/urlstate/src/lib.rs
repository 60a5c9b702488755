//! Pure query-string state for the product listing page.
//!
//! Everything here is browser-free: the frontend reads `location.search`,
//! runs one of the transition functions, and writes the result back.

pub mod filters;
pub mod params;
pub mod sorting;

pub use filters::{apply_filters, FormField, PAGE_PARAM, SHOP_PARAM};
pub use params::QueryParams;
pub use sorting::{apply_sort, SORT_PARAM};
