//! Client-Side Collection View
//!
//! Raw items -> search match -> filter match -> stable sort -> page slice.
//! The pipeline order is fixed. Search and filter changes return to page 1;
//! sort changes keep the page.

mod pagination;

pub use pagination::{PageItem, Pagination};

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::events::Intent;

/// Filter value meaning "no restriction on this dimension"
pub const ALL: &str = "all";

/// Selectable sort order of a collection
pub trait SortKey: Copy + Default + PartialEq + 'static {
    fn as_str(&self) -> &'static str;
    fn label(&self) -> &'static str;
    fn all() -> &'static [Self];

    fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.as_str() == s)
    }
}

/// Item that can be shown in a collection view
pub trait Listable {
    type Sort: SortKey;

    /// Text fields searched by the free-text query
    fn search_fields(&self) -> Vec<&str>;

    /// Whether the item passes `value` on `dimension`. Unknown dimensions pass.
    fn matches_filter(&self, dimension: &str, value: &str) -> bool;

    fn compare(&self, other: &Self, sort: Self::Sort) -> Ordering;
}

/// Search, filter, sort and page selections of one list
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<S: SortKey> {
    search: String,
    filters: BTreeMap<String, String>,
    sort: S,
    page: usize,
    page_size: usize,
}

impl<S: SortKey> CollectionState<S> {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            sort: S::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> S {
        self.sort
    }

    /// Requested page; [`CollectionView::pagination`] holds the clamped one
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Selected value on a dimension, `"all"` when unset
    pub fn filter(&self, dimension: &str) -> &str {
        self.filters.get(dimension).map(String::as_str).unwrap_or(ALL)
    }

    pub fn set_search(&mut self, query: &str) -> Intent {
        self.search = query.to_string();
        self.page = 1;
        Intent::SearchChange(self.search.clone())
    }

    pub fn set_filter(&mut self, dimension: &str, value: &str) -> Intent {
        if value.is_empty() || value == ALL {
            self.filters.remove(dimension);
        } else {
            self.filters.insert(dimension.to_string(), value.to_string());
        }
        self.page = 1;
        Intent::FilterChange {
            dimension: dimension.to_string(),
            value: value.to_string(),
        }
    }

    pub fn set_sort(&mut self, sort: S) -> Intent {
        self.sort = sort;
        Intent::SortChange(sort.as_str().to_string())
    }

    /// `None` when the page does not change
    pub fn set_page(&mut self, page: usize) -> Option<Intent> {
        let page = page.max(1);
        if page == self.page {
            return None;
        }
        self.page = page;
        Some(Intent::PageChange(page))
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Keep the stored page in range after the result set changed
    pub fn clamp_page(&mut self, pagination: &Pagination) {
        self.page = pagination.page;
    }

    /// Reset search, filters and page. The sort order is kept.
    /// Yields one change per dimension that was actually cleared.
    pub fn clear_filters(&mut self) -> Vec<Intent> {
        let mut intents = Vec::new();
        if !self.search.is_empty() {
            intents.push(self.set_search(""));
        }
        let dimensions: Vec<String> = self.filters.keys().cloned().collect();
        for dimension in dimensions {
            intents.push(self.set_filter(&dimension, ALL));
        }
        self.page = 1;
        intents
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.trim().is_empty() || !self.filters.is_empty()
    }

    fn matches<T: Listable<Sort = S>>(&self, item: &T, query: &str) -> bool {
        let searched = query.is_empty()
            || item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(query));
        searched
            && self
                .filters
                .iter()
                .all(|(dimension, value)| item.matches_filter(dimension, value))
    }

    /// Run the full pipeline over an in-memory list
    pub fn apply<'a, T: Listable<Sort = S>>(&self, items: &'a [T]) -> CollectionView<'a, T> {
        let query = self.search.trim().to_lowercase();
        let mut matched: Vec<&T> = items.iter().filter(|item| self.matches(*item, &query)).collect();
        matched.sort_by(|a, b| a.compare(b, self.sort));

        let pagination = Pagination::new(matched.len(), self.page_size, self.page);
        let page_items = matched[pagination.start()..pagination.end()].to_vec();
        CollectionView {
            items: page_items,
            pagination,
        }
    }

    /// Server-paged list: items are shown as given, the page count comes from `total_items`
    pub fn apply_server<'a, T>(&self, items: &'a [T], total_items: usize) -> CollectionView<'a, T> {
        CollectionView {
            items: items.iter().collect(),
            pagination: Pagination::new(total_items, self.page_size, self.page),
        }
    }
}

/// Items of the current page plus paging info for the whole filtered set
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionView<'a, T> {
    pub items: Vec<&'a T>,
    pub pagination: Pagination,
}

impl<T> CollectionView<'_, T> {
    /// Size of the filtered set across all pages
    pub fn total(&self) -> usize {
        self.pagination.total_items
    }

    pub fn is_empty(&self) -> bool {
        self.pagination.total_items == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    enum ByAmount {
        #[default]
        Original,
        High,
    }

    impl SortKey for ByAmount {
        fn as_str(&self) -> &'static str {
            match self {
                ByAmount::Original => "original",
                ByAmount::High => "high",
            }
        }

        fn label(&self) -> &'static str {
            self.as_str()
        }

        fn all() -> &'static [Self] {
            &[ByAmount::Original, ByAmount::High]
        }
    }

    #[derive(Debug, PartialEq)]
    struct Row {
        name: &'static str,
        kind: &'static str,
        amount: u32,
    }

    impl Listable for Row {
        type Sort = ByAmount;

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }

        fn matches_filter(&self, dimension: &str, value: &str) -> bool {
            dimension != "kind" || self.kind == value
        }

        fn compare(&self, other: &Self, sort: ByAmount) -> Ordering {
            match sort {
                ByAmount::Original => Ordering::Equal,
                ByAmount::High => other.amount.cmp(&self.amount),
            }
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| Row {
                name: if i % 2 == 0 { "Huerto Urbano" } else { "Biblioteca" },
                kind: if i % 3 == 0 { "a" } else { "b" },
                amount: (i as u32 % 4) * 100,
            })
            .collect()
    }

    #[test]
    fn test_search_is_case_insensitive_and_restores() {
        let items = rows(6);
        let mut state = CollectionState::<ByAmount>::new(10);
        state.set_search("HUERTO");
        assert_eq!(state.apply(&items).total(), 3);
        state.set_search("");
        assert_eq!(state.apply(&items).total(), 6);
        state.set_search("   ");
        assert_eq!(state.apply(&items).total(), 6);
    }

    #[test]
    fn test_filter_and_search_reset_page_but_sort_does_not() {
        let mut state = CollectionState::<ByAmount>::new(10);
        state.set_page(3);
        state.set_sort(ByAmount::High);
        assert_eq!(state.page(), 3);
        state.set_filter("kind", "a");
        assert_eq!(state.page(), 1);
        state.set_page(2);
        state.set_search("x");
        assert_eq!(state.page(), 1);
        assert_eq!(state.set_page(1), None);
    }

    #[test]
    fn test_clear_filters_keeps_sort() {
        let mut state = CollectionState::<ByAmount>::new(10);
        state.set_sort(ByAmount::High);
        state.set_filter("kind", "b");
        state.set_search("huerto");
        assert!(state.has_active_filters());
        let intents = state.clear_filters();
        assert_eq!(
            intents,
            vec![
                Intent::SearchChange(String::new()),
                Intent::FilterChange {
                    dimension: "kind".into(),
                    value: ALL.into(),
                },
            ]
        );
        assert!(!state.has_active_filters());
        assert_eq!(state.sort(), ByAmount::High);
        assert_eq!(state.filter("kind"), ALL);
        assert_eq!(state.page(), 1);
        assert!(state.clear_filters().is_empty());
    }

    #[test]
    fn test_selecting_all_removes_filter() {
        let items = rows(6);
        let mut state = CollectionState::<ByAmount>::new(10);
        state.set_filter("kind", "a");
        assert_eq!(state.apply(&items).total(), 2);
        let intent = state.set_filter("kind", ALL);
        assert_eq!(
            intent,
            Intent::FilterChange { dimension: "kind".into(), value: "all".into() }
        );
        assert_eq!(state.apply(&items).total(), 6);
    }

    #[test]
    fn test_sort_is_stable() {
        let items = rows(8);
        let mut state = CollectionState::<ByAmount>::new(10);
        state.set_sort(ByAmount::High);
        let view = state.apply(&items);
        let amounts: Vec<u32> = view.items.iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![300, 300, 200, 200, 100, 100, 0, 0]);
        // rows 3 and 7 both hold 300; original order kept
        assert!(std::ptr::eq(view.items[0], &items[3]));
        assert!(std::ptr::eq(view.items[1], &items[7]));
    }

    #[test]
    fn test_paging_and_clamping() {
        let items = rows(25);
        let mut state = CollectionState::<ByAmount>::new(10);
        state.set_page(3);
        let view = state.apply(&items);
        assert_eq!(view.pagination.total_pages(), 3);
        assert_eq!(view.items.len(), 5);

        // shrinking the set keeps the page inside the new range
        state.set_page(3);
        state.set_search("biblioteca");
        state.set_page(3);
        let view = state.apply(&items);
        assert_eq!(view.total(), 12);
        assert_eq!(view.pagination.page, 2);
        assert_eq!(view.items.len(), 2);
        state.clamp_page(&view.pagination);
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn test_server_mode_skips_filtering() {
        let items = rows(10);
        let mut state = CollectionState::<ByAmount>::new(10);
        state.set_search("nothing matches");
        state.set_page(4);
        let view = state.apply_server(&items, 95);
        assert_eq!(view.items.len(), 10);
        assert_eq!(view.pagination.total_pages(), 10);
        assert_eq!(view.pagination.page, 4);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(ByAmount::parse("high"), Some(ByAmount::High));
        assert_eq!(ByAmount::parse("nope"), None);
    }
}
