//! Library list transformation: filter, sort, paginate.
//!
//! The whole page slice is recomputed from the full collection on every
//! state change. The collection is bounded (a few hundred items), so a
//! from-scratch pass beats incremental bookkeeping.

use chrono::{DateTime, Utc};
use kinoteka_core::{ItemKind, LibraryItem};

/// Items per page in the library grid.
pub const PAGE_SIZE: usize = 18;

/// Sort order for the library list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest additions first; items without a timestamp last.
    #[default]
    Added,
    /// Ascending, case-insensitive title order.
    Title,
}

impl SortKey {
    /// Parse a sort parameter. Unknown values fall back to the default
    /// rather than erroring.
    pub fn parse(s: &str) -> Self {
        match s {
            "title" => Self::Title,
            _ => Self::Added,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Title => "title",
        }
    }
}

/// Filter/sort/page state for the library list.
///
/// `query`, `kind`, and `sort` transitions reset `page` to 1 so a stale
/// out-of-range page is never carried across a filter change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub query: String,
    pub kind: Option<ItemKind>,
    pub sort: SortKey,
    pub page: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            query: String::new(),
            kind: None,
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl ListState {
    pub fn new(query: String, kind: Option<ItemKind>, sort: SortKey, page: usize) -> Self {
        Self {
            query,
            kind,
            sort,
            page: page.max(1),
        }
    }

    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_kind(&self, kind: Option<ItemKind>) -> Self {
        Self {
            kind,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: SortKey) -> Self {
        Self {
            sort,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }
}

/// One page of the transformed library list, borrowing from the input
/// collection.
#[derive(Debug)]
pub struct ListPage<'a> {
    pub items: Vec<&'a LibraryItem>,
    pub page_count: usize,
    pub total: usize,
}

/// Apply filters, sort, and pagination to the full collection.
///
/// Deterministic and total: the input is never mutated, equal sort keys
/// keep collection order (stable sort), and `page_count` is at least 1
/// even for an empty result. A page past the end yields an empty slice;
/// resetting the page is the caller's job via the `ListState` transitions.
pub fn transform<'a>(items: &'a [LibraryItem], state: &ListState) -> ListPage<'a> {
    let query = state.query.trim().to_lowercase();

    let mut filtered: Vec<&LibraryItem> = items
        .iter()
        .filter(|item| query.is_empty() || item.title.to_lowercase().contains(&query))
        .filter(|item| state.kind.is_none_or(|k| item.kind == k))
        .collect();

    match state.sort {
        SortKey::Title => {
            filtered.sort_by(|a, b| {
                (a.title.to_lowercase(), &a.title).cmp(&(b.title.to_lowercase(), &b.title))
            });
        }
        SortKey::Added => {
            // Missing/unparseable timestamps read as the epoch, so they
            // land after everything with a real timestamp.
            filtered.sort_by(|a, b| added_key(b).cmp(&added_key(a)));
        }
    }

    let total = filtered.len();
    let page_count = total.div_ceil(PAGE_SIZE).max(1);

    // Saturating: the page number comes straight from the URL, so the
    // window math must not overflow on absurd values.
    let start = state.page.max(1).saturating_sub(1).saturating_mul(PAGE_SIZE);
    let items = if start < total {
        let end = (start + PAGE_SIZE).min(total);
        filtered[start..end].to_vec()
    } else {
        Vec::new()
    };

    ListPage {
        items,
        page_count,
        total,
    }
}

fn added_key(item: &LibraryItem) -> DateTime<Utc> {
    item.added_at_ts().unwrap_or(DateTime::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, kind: ItemKind, title: &str, added_at: Option<&str>) -> LibraryItem {
        LibraryItem {
            id,
            kind,
            title: title.to_string(),
            year: None,
            rating: None,
            added_at: added_at.map(str::to_string),
            poster_url: None,
            overview: None,
            genres: Vec::new(),
            voice: None,
            quality: None,
            voices: Vec::new(),
            seasons_count: None,
            episodes_count: None,
            seasons: Vec::new(),
        }
    }

    fn state() -> ListState {
        ListState::default()
    }

    fn ids(page: &ListPage<'_>) -> Vec<u64> {
        page.items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn empty_collection_has_one_page() {
        let page = transform(&[], &state());
        assert!(page.items.is_empty());
        assert_eq!(page.page_count, 1);
        assert_eq!(page.total, 0);
    }

    #[test]
    fn query_filter_is_case_insensitive_substring() {
        let items = vec![
            item(1, ItemKind::Movie, "The Matrix", None),
            item(2, ItemKind::Movie, "Matrix Reloaded", None),
            item(3, ItemKind::Movie, "Inception", None),
        ];
        let page = transform(&items, &state().with_query("  mATRix "));
        assert_eq!(ids(&page), vec![1, 2]);
    }

    #[test]
    fn kind_filter_is_exact() {
        let items = vec![
            item(1, ItemKind::Movie, "A", None),
            item(2, ItemKind::Series, "B", None),
            item(3, ItemKind::Anime, "C", None),
        ];
        let page = transform(&items, &state().with_kind(Some(ItemKind::Series)));
        assert_eq!(ids(&page), vec![2]);
    }

    #[test]
    fn filters_compose_and_pages_partition_the_filtered_set() {
        let mut items = Vec::new();
        for i in 0..60 {
            let kind = if i % 2 == 0 {
                ItemKind::Movie
            } else {
                ItemKind::Series
            };
            items.push(item(i, kind, &format!("Title {i}"), None));
        }

        let base = state().with_kind(Some(ItemKind::Movie));
        let first = transform(&items, &base);
        assert_eq!(first.total, 30);
        assert_eq!(first.page_count, 2);

        let mut seen = Vec::new();
        for p in 1..=first.page_count {
            let page = transform(&items, &base.with_page(p));
            for it in &page.items {
                assert_eq!(it.kind, ItemKind::Movie);
                seen.push(it.id);
            }
        }
        let mut expected: Vec<u64> = (0..60).filter(|i| i % 2 == 0).collect();
        expected.sort_unstable();
        let mut seen_sorted = seen.clone();
        seen_sorted.sort_unstable();
        assert_eq!(seen_sorted, expected);
        assert_eq!(seen.len(), 30); // no duplicates across pages
    }

    #[test]
    fn title_sort_is_ascending_and_idempotent() {
        let items = vec![
            item(1, ItemKind::Movie, "zebra", None),
            item(2, ItemKind::Movie, "Apple", None),
            item(3, ItemKind::Movie, "mango", None),
        ];
        let st = state().with_sort(SortKey::Title);
        let once = ids(&transform(&items, &st));
        assert_eq!(once, vec![2, 3, 1]);

        let reordered: Vec<LibraryItem> = once
            .iter()
            .map(|id| items.iter().find(|i| i.id == *id).unwrap().clone())
            .collect();
        assert_eq!(ids(&transform(&reordered, &st)), once);
    }

    #[test]
    fn added_sort_is_newest_first_with_missing_last() {
        let items = vec![
            item(1, ItemKind::Movie, "A", None),
            item(2, ItemKind::Movie, "B", Some("2024-01-01T00:00:00Z")),
            item(3, ItemKind::Movie, "C", Some("2024-06-01T00:00:00Z")),
            item(4, ItemKind::Movie, "D", None),
        ];
        let page = transform(&items, &state().with_sort(SortKey::Added));
        assert_eq!(ids(&page), vec![3, 2, 1, 4]);
    }

    #[test]
    fn added_sort_ties_keep_collection_order() {
        let items = vec![
            item(10, ItemKind::Movie, "A", Some("2024-01-01T00:00:00Z")),
            item(20, ItemKind::Movie, "B", Some("2024-01-01T00:00:00Z")),
            item(30, ItemKind::Movie, "C", Some("2024-01-01T00:00:00Z")),
        ];
        let page = transform(&items, &state());
        assert_eq!(ids(&page), vec![10, 20, 30]);
    }

    #[test]
    fn unparseable_added_at_sorts_with_missing() {
        let items = vec![
            item(1, ItemKind::Movie, "A", Some("not-a-date")),
            item(2, ItemKind::Movie, "B", Some("2020-01-01T00:00:00Z")),
        ];
        let page = transform(&items, &state());
        assert_eq!(ids(&page), vec![2, 1]);
    }

    #[test]
    fn transform_does_not_mutate_input() {
        let items = vec![
            item(2, ItemKind::Movie, "B", None),
            item(1, ItemKind::Movie, "A", None),
        ];
        let before: Vec<u64> = items.iter().map(|i| i.id).collect();
        let _ = transform(&items, &state().with_sort(SortKey::Title));
        let after: Vec<u64> = items.iter().map(|i| i.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn pagination_boundary_19_items() {
        let items: Vec<LibraryItem> = (0..19)
            .map(|i| item(i, ItemKind::Movie, &format!("T{i:02}"), None))
            .collect();

        let p1 = transform(&items, &state());
        assert_eq!(p1.page_count, 2);
        assert_eq!(p1.items.len(), 18);

        let p2 = transform(&items, &state().with_page(2));
        assert_eq!(p2.items.len(), 1);
    }

    #[test]
    fn page_past_the_end_is_empty_not_clamped() {
        let items: Vec<LibraryItem> = (0..5)
            .map(|i| item(i, ItemKind::Movie, "T", None))
            .collect();
        let page = transform(&items, &state().with_page(3));
        assert!(page.items.is_empty());
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn absurdly_large_page_number_is_empty_without_overflow() {
        let items: Vec<LibraryItem> = (0..5)
            .map(|i| item(i, ItemKind::Movie, "T", None))
            .collect();
        for huge in [usize::MAX, usize::MAX / PAGE_SIZE + 2] {
            let page = transform(&items, &state().with_page(huge));
            assert!(page.items.is_empty());
            assert_eq!(page.page_count, 1);
        }
    }

    #[test]
    fn state_transitions_reset_page() {
        let st = state().with_page(7);
        assert_eq!(st.with_query("x").page, 1);
        assert_eq!(st.with_kind(Some(ItemKind::Anime)).page, 1);
        assert_eq!(st.with_sort(SortKey::Title).page, 1);
        assert_eq!(st.with_page(4).page, 4);
    }

    #[test]
    fn zero_page_normalizes_to_one() {
        assert_eq!(ListState::default().with_page(0).page, 1);
        assert_eq!(ListState::new(String::new(), None, SortKey::Added, 0).page, 1);
    }

    #[test]
    fn sort_key_parse_falls_back_to_added() {
        assert_eq!(SortKey::parse("title"), SortKey::Title);
        assert_eq!(SortKey::parse("added"), SortKey::Added);
        assert_eq!(SortKey::parse("garbage"), SortKey::Added);
    }
}
