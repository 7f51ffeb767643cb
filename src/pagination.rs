//! Page slicing over the catalog. Pages are 1-based.

/// Number of pages needed for `len` items, 0 when there is nothing to show.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Items on page `page_number`. Out-of-range pages are clamped to an empty
/// or partial slice rather than panicking; callers are expected to keep the
/// page number within `1..=page_count`.
pub fn page<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    let (start, end) = page_bounds(items.len(), page_number, page_size);
    &items[start..end]
}

/// Clamped `[start, end)` range of page `page_number`.
pub fn page_bounds(len: usize, page_number: usize, page_size: usize) -> (usize, usize) {
    if page_number == 0 {
        return (0, 0);
    }
    let start = (page_number - 1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    (start, end)
}

/// 1-based page that holds the item at `index`.
pub fn page_of(index: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    index / page_size + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(53, 16), 4);
        assert_eq!(page_count(48, 16), 3);
        assert_eq!(page_count(1, 16), 1);
        assert_eq!(page_count(0, 16), 0);
        assert_eq!(page_count(10, 0), 0);
    }

    #[test]
    fn test_uneven_last_page() {
        let ids: Vec<u32> = (1..=53).collect();
        assert_eq!(page(&ids, 4, 16), &[49, 50, 51, 52, 53]);
        assert_eq!(page(&ids, 1, 16).len(), 16);
        assert_eq!(page(&ids, 1, 16)[0], 1);
        assert_eq!(page(&ids, 3, 16)[15], 48);
    }

    #[test]
    fn test_out_of_range_pages_clamp() {
        let ids: Vec<u32> = (1..=53).collect();
        assert!(page(&ids, 0, 16).is_empty());
        assert!(page(&ids, 5, 16).is_empty());
        assert!(page(&ids, usize::MAX, 16).is_empty());

        let empty: Vec<u32> = Vec::new();
        assert!(page(&empty, 1, 16).is_empty());
    }

    #[test]
    fn test_page_of_matches_page() {
        let ids: Vec<usize> = (0..53).collect();
        for index in 0..53 {
            let number = page_of(index, 16);
            assert!(page(&ids, number, 16).contains(&index));
        }
        assert_eq!(page_of(52, 16), 4);
    }
}
