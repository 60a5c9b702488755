//! Filter-submit transition: form snapshot in, parameter set out.

use crate::params::QueryParams;

/// Server-provided shop filter, reset on every submit.
pub const SHOP_PARAM: &str = "shop_id";
/// Pagination cursor, reset on every submit so results start at page one.
pub const PAGE_PARAM: &str = "page";

/// Snapshot of one filter input at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    /// A checkbox filter; checked boxes accumulate under a shared name.
    Checkbox {
        name: String,
        value: String,
        checked: bool,
    },
    /// A single-valued text or number filter.
    Value { name: String, value: String },
}

impl FormField {
    pub fn checkbox(name: impl Into<String>, value: impl Into<String>, checked: bool) -> Self {
        FormField::Checkbox {
            name: name.into(),
            value: value.into(),
            checked,
        }
    }

    pub fn value(name: impl Into<String>, value: impl Into<String>) -> Self {
        FormField::Value {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Rebuild the parameter set from the current form snapshot.
///
/// `shop_id` and `page` are dropped unconditionally before any field is
/// processed. Checked checkboxes append (multi-select filters repeat one
/// name), unchecked ones contribute nothing. Text and number fields set
/// their parameter when non-empty and delete it when empty. Parameters not
/// named by the form and not reserved pass through untouched.
pub fn apply_filters(params: &QueryParams, fields: &[FormField]) -> QueryParams {
    let mut next = params.clone();
    next.delete(SHOP_PARAM);
    next.delete(PAGE_PARAM);

    for field in fields {
        match field {
            FormField::Checkbox {
                name,
                value,
                checked,
            } => {
                if *checked {
                    next.append(name, value);
                }
            }
            FormField::Value { name, value } => {
                if value.is_empty() {
                    next.delete(name);
                } else {
                    next.set(name, value);
                }
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_form(min_price: &str, shops: &[(&str, bool)]) -> Vec<FormField> {
        let mut fields = vec![FormField::value("min_price", min_price)];
        for (shop, checked) in shops {
            fields.push(FormField::checkbox("shop_id", *shop, *checked));
        }
        fields
    }

    #[test]
    fn test_submit_is_idempotent() {
        let fields = listing_form("100", &[("1", true), ("2", false), ("4", true)]);

        let once = apply_filters(&QueryParams::parse("?category=wine"), &fields);
        let twice = apply_filters(&once, &fields);
        assert_eq!(once.to_query_string(), twice.to_query_string());
        assert_eq!(
            once.to_query_string(),
            "category=wine&min_price=100&shop_id=1&shop_id=4"
        );
    }

    #[test]
    fn test_shop_and_page_always_reset() {
        let prior = QueryParams::parse("?shop_id=5&page=3&category=wine");

        let next = apply_filters(&prior, &[FormField::value("max_price", "900")]);
        assert_eq!(next.get("shop_id"), None);
        assert_eq!(next.get("page"), None);
        assert_eq!(next.to_query_string(), "category=wine&max_price=900");
    }

    #[test]
    fn test_checked_boxes_accumulate_in_order() {
        let fields = vec![
            FormField::checkbox("brand", "a", true),
            FormField::checkbox("brand", "b", true),
            FormField::checkbox("other", "x", false),
            FormField::checkbox("brand", "c", true),
        ];

        let next = apply_filters(&QueryParams::new(), &fields);
        assert_eq!(next.get_all("brand"), vec!["a", "b", "c"]);
        assert_eq!(next.get("other"), None);
    }

    #[test]
    fn test_empty_field_clears_prior_filter() {
        let prior = QueryParams::parse("?min_price=100");

        let next = apply_filters(&prior, &[FormField::value("min_price", "")]);
        assert_eq!(next.get("min_price"), None);
        assert!(next.is_empty());
    }

    #[test]
    fn test_non_empty_field_overwrites_prior_value() {
        let prior = QueryParams::parse("?min_price=100&category=wine");

        let next = apply_filters(&prior, &[FormField::value("min_price", "250")]);
        assert_eq!(next.to_query_string(), "min_price=250&category=wine");
    }

    #[test]
    fn test_unrelated_parameters_pass_through() {
        let prior = QueryParams::parse("?product_sort=-actual_price&category=wine");

        let next = apply_filters(&prior, &listing_form("", &[("7", true)]));
        assert_eq!(
            next.to_query_string(),
            "product_sort=-actual_price&category=wine&shop_id=7"
        );
    }
}
