use serde::{Deserialize, Serialize};

/// Number of rows shown per page in the destinations table.
pub const PAGE_SIZE: i64 = 5;

/// One page of an in-memory list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

/// Pagination metadata derived from the full list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMeta {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        // Ceil division; an empty list has zero pages, which disables
        // both navigation controls (1 < 0 and 1 > 1 are both false).
        let total_pages = if limit > 0 {
            (total + limit - 1) / limit
        } else {
            0
        };
        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// Slice `items` into the requested page.
///
/// The visible window is `[(page - 1) * limit, page * limit)`, clamped by
/// the list bounds: a page past the end yields an empty slice rather than
/// an error. Pages below 1 are treated as page 1.
pub fn paginate<T: Clone>(items: &[T], page: i64, limit: i64) -> Page<T> {
    let page = page.max(1);
    let total = items.len() as i64;

    let start = ((page - 1) * limit).min(total) as usize;
    let end = (page * limit).min(total) as usize;

    Page {
        items: items[start..end].to_vec(),
        meta: PageMeta::new(page, limit, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item-{i}")).collect()
    }

    #[test]
    fn full_pages_have_page_size_items() {
        let items = letters(12);
        let page = paginate(&items, 1, PAGE_SIZE);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.meta.total_pages, 3);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let items = letters(12);
        let page = paginate(&items, 3, PAGE_SIZE);
        assert_eq!(page.items, vec!["item-10", "item-11"]);
        assert!(!page.meta.has_next);
        assert!(page.meta.has_prev);
    }

    #[test]
    fn concatenating_pages_reconstructs_the_list() {
        let items = letters(13);
        let meta = PageMeta::new(1, PAGE_SIZE, items.len() as i64);
        let mut rebuilt = Vec::new();
        for p in 1..=meta.total_pages {
            rebuilt.extend(paginate(&items, p, PAGE_SIZE).items);
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn out_of_range_page_yields_empty_slice() {
        let items = letters(3);
        let page = paginate(&items, 9, PAGE_SIZE);
        assert!(page.items.is_empty());
        assert_eq!(page.meta.total_pages, 1);
        assert!(!page.meta.has_next);
    }

    #[test]
    fn empty_list_has_zero_pages_and_disabled_controls() {
        let items: Vec<String> = Vec::new();
        let page = paginate(&items, 1, PAGE_SIZE);
        assert!(page.items.is_empty());
        assert_eq!(page.meta.total_pages, 0);
        assert!(!page.meta.has_next);
        assert!(!page.meta.has_prev);
    }

    #[test]
    fn three_items_fit_one_page() {
        let items = letters(3);
        let page = paginate(&items, 1, PAGE_SIZE);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.meta.total_pages, 1);
        assert!(!page.meta.has_next);
        assert!(!page.meta.has_prev);
    }

    #[test]
    fn pagination_is_idempotent() {
        let items = letters(8);
        let first = paginate(&items, 2, PAGE_SIZE);
        let second = paginate(&items, 2, PAGE_SIZE);
        assert_eq!(first, second);
    }

    #[test]
    fn exact_multiple_fills_the_last_page() {
        let items = letters(10);
        let page = paginate(&items, 2, PAGE_SIZE);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.meta.total_pages, 2);
        assert!(!page.meta.has_next);
    }
}
