//! Pagination Engine
//!
//! Slices an ordered sequence into fixed-size pages. The page index is
//! clamped by the controller; an out-of-range index yields an empty page.

use std::sync::Arc;

use crate::constants::PAGE_WINDOW_SIZE;
use crate::domain::row::Row;
use crate::domain::view::DisplayRange;

/// One page of the derived sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub rows: Vec<Arc<Row>>,
    pub total_pages: usize,
    pub display_range: DisplayRange,
}

/// Number of pages for `len` rows; 0 when there are no rows
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Half-open row range `[start, end)` of a page, `(0, 0)` when out of range
pub fn page_range(len: usize, page_size: usize, page_index: usize) -> (usize, usize) {
    let page_size = page_size.max(1);
    let Some(start) = page_index.checked_mul(page_size) else {
        return (0, 0);
    };
    if start >= len {
        return (0, 0);
    }
    (start, (start + page_size).min(len))
}

/// Slice one page out of `rows`
pub fn paginate(rows: &[Arc<Row>], page_size: usize, page_index: usize) -> Page {
    let total = rows.len();
    let (start, end) = page_range(total, page_size, page_index);

    let display_range = if start == end {
        DisplayRange::new(0, 0, total)
    } else {
        DisplayRange::new(start + 1, end, total)
    };

    Page {
        rows: rows[start..end].to_vec(),
        total_pages: total_pages(total, page_size),
        display_range,
    }
}

/// Zero-based page numbers to offer as links around the current page.
///
/// No links for a single page; every page when there are fewer than the
/// window size; the last window when the current page is near the end;
/// otherwise a window starting at the current page.
pub fn page_window(page_index: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let (start, end) = if total_pages < PAGE_WINDOW_SIZE {
        (0, total_pages)
    } else if total_pages.saturating_sub(page_index) < PAGE_WINDOW_SIZE {
        (total_pages - PAGE_WINDOW_SIZE, total_pages)
    } else {
        (page_index, page_index + PAGE_WINDOW_SIZE)
    };

    (start..end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::row::Cell;
    use proptest::prelude::*;

    fn numbered(n: usize) -> Vec<Arc<Row>> {
        (0..n)
            .map(|i| Arc::new(Row::new(vec![Cell::Number(i as f64)])))
            .collect()
    }

    #[test]
    fn test_twelve_rows_five_per_page() {
        let rows = numbered(12);

        let first = paginate(&rows, 5, 0);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.rows, rows[0..5].to_vec());
        assert_eq!(first.display_range.as_tuple(), (1, 5, 12));

        let last = paginate(&rows, 5, 2);
        assert_eq!(last.rows, rows[10..12].to_vec());
        assert_eq!(last.display_range.as_tuple(), (11, 12, 12));
    }

    #[test]
    fn test_empty_sequence() {
        let page = paginate(&[], 5, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.rows.is_empty());
        assert_eq!(page.display_range.as_tuple(), (0, 0, 0));
    }

    #[test]
    fn test_out_of_range_index_is_empty() {
        let page = paginate(&numbered(3), 5, 7);
        assert!(page.rows.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.display_range.as_tuple(), (0, 0, 3));

        assert_eq!(page_range(3, 5, usize::MAX), (0, 0));
    }

    #[test]
    fn test_page_window() {
        assert!(page_window(0, 0).is_empty());
        assert!(page_window(0, 1).is_empty());
        assert_eq!(page_window(1, 3), vec![0, 1, 2]);
        assert_eq!(page_window(0, 50), vec![0, 1, 2, 3, 4]);
        assert_eq!(page_window(10, 50), vec![10, 11, 12, 13, 14]);
        assert_eq!(page_window(47, 50), vec![45, 46, 47, 48, 49]);
        assert_eq!(page_window(2, 5), vec![0, 1, 2, 3, 4]);
    }

    proptest! {
        /// Concatenating every page reproduces the sequence exactly
        #[test]
        fn prop_pages_cover_sequence(len in 0usize..60, page_size in 1usize..15) {
            let rows = numbered(len);
            let pages = total_pages(len, page_size);

            let mut joined = Vec::with_capacity(len);
            for index in 0..pages {
                let page = paginate(&rows, page_size, index);
                prop_assert!(!page.rows.is_empty());
                prop_assert!(page.rows.len() <= page_size);
                joined.extend(page.rows);
            }

            prop_assert_eq!(joined, rows);
        }
    }
}
