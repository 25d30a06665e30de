//! Pager link window for the listing.
//!
//! Short pagers list every page. Longer ones keep the first page, the last
//! page and the neighbours of the current page, with an ellipsis two pages
//! out on either side.

use serde::Serialize;

/// Pagers up to this many pages list every page.
const FULL_PAGER_MAX: usize = 5;

/// One entry of the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PagerLink {
    Page { number: usize, active: bool },
    Ellipsis,
}

/// Pager controls for a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerControls {
    /// Previous page target, `None` on the first page.
    pub prev: Option<usize>,
    /// Next page target, `None` on the last page.
    pub next: Option<usize>,
    pub links: Vec<PagerLink>,
}

impl PagerControls {
    /// Controls for `current` of `total_pages`, or `None` for a single page.
    pub fn new(current: usize, total_pages: usize) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }
        let current = current.clamp(1, total_pages);

        Some(Self {
            prev: (current > 1).then_some(current - 1),
            next: (current < total_pages).then_some(current + 1),
            links: window(current, total_pages),
        })
    }
}

/// Pager entries for `current` of `total_pages`.
pub fn window(current: usize, total_pages: usize) -> Vec<PagerLink> {
    let mut links = Vec::new();

    for number in 1..=total_pages {
        let near = number.abs_diff(current) <= 1;
        if total_pages <= FULL_PAGER_MAX || number == 1 || number == total_pages || near {
            links.push(PagerLink::Page {
                number,
                active: number == current,
            });
        } else if number.abs_diff(current) == 2 {
            links.push(PagerLink::Ellipsis);
        }
    }

    links
}
