//! Building a [`QueryState`] from URL query parameters.
//!
//! Recognised keys: `search`, `cuisine`, `sort`, `free_delivery`, `open_now`
//! and `page`. Unknown keys are ignored and malformed values fall back to
//! their defaults, so a hand-edited URL never fails the listing.

use std::collections::HashMap;

use super::types::{CuisineFilter, QueryState, SortKey};

impl QueryState {
    /// Build a state from already decoded query parameters, as produced by
    /// axum's `Query<HashMap<String, String>>` extractor.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let defaults = QueryState::default();
        let get = |key: &str| params.get(key).map(String::as_str);

        Self {
            search: get("search").map(str::to_string).unwrap_or_default(),
            cuisine: get("cuisine").map_or(defaults.cuisine, CuisineFilter::from_param),
            sort: get("sort").map_or(defaults.sort, SortKey::from_param),
            free_delivery_only: get("free_delivery").is_some_and(parse_flag),
            open_now_only: get("open_now").is_some_and(parse_flag),
            page: get("page")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.page),
        }
    }

    /// Render the state back into a query string, omitting defaults.
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();

        if !self.search.is_empty() {
            pairs.push(format!("search={}", urlencoding::encode(&self.search)));
        }
        if let CuisineFilter::Only(label) = &self.cuisine {
            pairs.push(format!("cuisine={}", urlencoding::encode(label)));
        }
        if self.sort != SortKey::default() {
            pairs.push(format!("sort={}", self.sort.as_param()));
        }
        if self.free_delivery_only {
            pairs.push("free_delivery=1".to_string());
        }
        if self.open_now_only {
            pairs.push("open_now=1".to_string());
        }
        if self.page != 1 {
            pairs.push(format!("page={}", self.page));
        }

        pairs.join("&")
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use axum::extract::Query;
    use axum::http::Uri;

    use super::*;

    /// Decode a query string the way the listing route does.
    fn parse(query: &str) -> QueryState {
        let uri: Uri = format!("/api/restaurants?{query}").parse().unwrap();
        let Query(params) = Query::<HashMap<String, String>>::try_from_uri(&uri).unwrap();
        QueryState::from_params(&params)
    }

    #[test]
    fn empty_query_gives_defaults() {
        assert_eq!(QueryState::from_params(&HashMap::new()), QueryState::default());
        assert_eq!(parse(""), QueryState::default());
    }

    #[test]
    fn seeds_search_and_cuisine() {
        let state = parse("search=thai%20food&cuisine=Italian");
        assert_eq!(state.search, "thai food");
        assert_eq!(state.cuisine, CuisineFilter::Only("Italian".to_string()));
    }

    #[test]
    fn plus_decodes_to_space() {
        let state = parse("cuisine=Ice+Cream");
        assert_eq!(state.cuisine, CuisineFilter::Only("Ice Cream".to_string()));
    }

    #[test]
    fn cuisine_all_means_no_filter() {
        assert_eq!(parse("cuisine=all").cuisine, CuisineFilter::All);
        assert_eq!(parse("cuisine=").cuisine, CuisineFilter::All);
    }

    #[test]
    fn flags_sort_and_page() {
        let state = parse("free_delivery=true&open_now=ON&sort=name&page=3");
        assert!(state.free_delivery_only);
        assert!(state.open_now_only);
        assert_eq!(state.sort, SortKey::NameAsc);
        assert_eq!(state.page, 3);
    }

    #[test]
    fn malformed_values_fall_back() {
        let state = parse("page=abc&free_delivery=maybe&sort=random&x=1");
        assert_eq!(state.page, 1);
        assert!(!state.free_delivery_only);
        assert_eq!(state.sort, SortKey::Catalog);
    }

    #[test]
    fn negative_page_is_kept_for_clamping() {
        assert_eq!(parse("page=-2").page, -2);
    }

    #[test]
    fn to_query_string_round_trip() {
        let state = QueryState::default()
            .with_search("fish & chips")
            .with_cuisine(CuisineFilter::Only("Ice Cream".to_string()))
            .with_open_now_only(true)
            .with_page(2);

        assert_eq!(parse(&state.to_query_string()), state);
    }

    #[test]
    fn to_query_string_omits_defaults() {
        assert_eq!(QueryState::default().to_query_string(), "");
    }
}
