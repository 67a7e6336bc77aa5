//! Query string forwarding.
//!
//! # Rules
//! - A value counts as present when supplied and non-empty
//! - A range is forwarded only when both bounds are present
//! - Parameters are emitted in allowlist order; anything else is dropped

use std::collections::HashMap;

use crate::routing::table::QueryRule;

/// Select the query parameters to forward, in the order the upstream expects.
pub fn forwarded_query<'a>(
    rules: &[QueryRule],
    inbound: &'a HashMap<String, String>,
) -> Vec<(&'static str, &'a str)> {
    let present = |name: &str| {
        inbound
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    };

    let mut forwarded = Vec::new();
    for rule in rules {
        match *rule {
            QueryRule::Single(param) => {
                if let Some(value) = present(param.name) {
                    forwarded.push((param.name, value));
                }
            }
            QueryRule::Range(start, end) => {
                if let (Some(from), Some(to)) = (present(start.name), present(end.name)) {
                    forwarded.push((start.name, from));
                    forwarded.push((end.name, to));
                }
            }
        }
    }
    forwarded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::table::find;

    fn inbound(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_cart_filters_put_range_first() {
        let rules = find("getAllCarts").unwrap().query;
        let query = inbound(&[
            ("sort", "asc"),
            ("limit", "5"),
            ("enddate", "2020-12-31"),
            ("startdate", "2020-01-01"),
        ]);

        assert_eq!(
            forwarded_query(rules, &query),
            vec![
                ("startdate", "2020-01-01"),
                ("enddate", "2020-12-31"),
                ("limit", "5"),
                ("sort", "asc"),
            ]
        );
    }

    #[test]
    fn test_half_open_range_is_dropped() {
        let rules = find("getUserCarts").unwrap().query;
        let query = inbound(&[("startdate", "2020-01-01")]);
        assert!(forwarded_query(rules, &query).is_empty());

        let query = inbound(&[("startdate", "2020-01-01"), ("enddate", "")]);
        assert!(forwarded_query(rules, &query).is_empty());
    }

    #[test]
    fn test_unknown_and_empty_params_are_dropped() {
        let rules = find("getAllUsers").unwrap().query;
        let query = inbound(&[("limit", ""), ("sort", "desc"), ("page", "2")]);
        assert_eq!(forwarded_query(rules, &query), vec![("sort", "desc")]);
    }

    #[test]
    fn test_routes_without_allowlist_forward_nothing() {
        let rules = find("getAllProducts").unwrap().query;
        let query = inbound(&[("limit", "5")]);
        assert!(forwarded_query(rules, &query).is_empty());
    }
}
