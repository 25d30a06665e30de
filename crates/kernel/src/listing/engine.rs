//! Listing pipeline: search, filter, sort, paginate.
//!
//! Every stage runs over the whole catalog. Catalogs are small, and a full
//! pass keeps `total_matches` exact without a second counting query.

use std::cmp::Ordering;

use tracing::trace;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::types::{ListingPage, QueryState, SortKey};
use crate::catalog::RestaurantRecord;

/// Run a listing query over `restaurants`.
///
/// Pure function of its inputs. Never fails: an empty result is a single
/// empty page, out-of-range pages are clamped and a zero `per_page` is
/// treated as 1.
pub fn query<'a>(
    restaurants: &'a [RestaurantRecord],
    state: &QueryState,
    per_page: usize,
) -> ListingPage<'a> {
    let mut matches = filter(restaurants, state);
    sort(&mut matches, state.sort);

    trace!(
        search = %state.search,
        sort = state.sort.as_param(),
        matches = matches.len(),
        "listing query"
    );

    ListingPage::from_matches(matches, state.page, per_page)
}

/// Apply the search term and every active filter, keeping catalog order.
pub fn filter<'a>(
    restaurants: &'a [RestaurantRecord],
    state: &QueryState,
) -> Vec<&'a RestaurantRecord> {
    let needle = state.search.to_lowercase();

    restaurants
        .iter()
        .filter(|r| matches_search(r, &needle))
        .filter(|r| state.cuisine.matches(r))
        .filter(|r| !state.free_delivery_only || r.has_free_delivery)
        .filter(|r| !state.open_now_only || r.is_open)
        .collect()
}

/// Case-insensitive substring match on the name or any cuisine label.
///
/// `needle` must already be lowercased; an empty needle matches everything.
fn matches_search(record: &RestaurantRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.name.to_lowercase().contains(needle)
        || record
            .cuisine_types
            .iter()
            .any(|c| c.to_lowercase().contains(needle))
}

/// Stable in-place sort.
pub fn sort(matches: &mut [&RestaurantRecord], key: SortKey) {
    match key {
        SortKey::RatingDesc => matches.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::DeliveryTimeAsc => matches.sort_by_key(|r| r.delivery_lower_bound()),
        SortKey::NameAsc => matches.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::Catalog => {}
    }
}

/// Alphabetical comparison that ignores case and accents, so "Éclair"
/// sorts with the E's and "bistro" next to "Bistro".
///
/// Names equal after folding are ordered by their case-folded text, and
/// names equal after that keep their catalog order.
fn compare_names(a: &str, b: &str) -> Ordering {
    folded(a)
        .cmp(folded(b))
        .then_with(|| lowercase(a).cmp(lowercase(b)))
}

/// Lowercased base letters: canonical decomposition with combining marks
/// dropped.
fn folded(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Lowercased composed text.
fn lowercase(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfc().flat_map(char::to_lowercase)
}
