//! Sort-selection transition over the query parameter set.

use crate::params::QueryParams;

/// Sort order parameter, owned exclusively by the sort controller.
pub const SORT_PARAM: &str = "product_sort";

/// Select a sort order, leaving every other parameter untouched.
pub fn apply_sort(params: &QueryParams, sort_key: &str) -> QueryParams {
    let mut next = params.clone();
    next.set(SORT_PARAM, sort_key);
    next
}

/// Whether `sort_key` is the currently selected sort order.
pub fn is_active(params: &QueryParams, sort_key: &str) -> bool {
    params.get(SORT_PARAM) == Some(sort_key)
}
