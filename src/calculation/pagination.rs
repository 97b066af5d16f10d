//! Page/limit arithmetic shared by list-returning operations.
//!
//! Converts a 1-based page and page size into an offset, computes the total
//! page count, and flags pages known to be empty so callers can skip the
//! store fetch entirely.

/// Page size applied when the caller supplies none or a non-positive one.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// The result of resolving a page request against a total record count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice {
    /// Number of records to skip.
    pub offset: i64,
    /// Total number of pages for the given limit.
    pub total_pages: i64,
    /// True when the requested page holds no records; callers short-circuit
    /// and return an empty page without querying the store.
    pub is_empty: bool,
}

/// Clamps caller-supplied page parameters to usable values.
///
/// Pages below 1 become 1; limits below 1 become [`DEFAULT_PAGE_LIMIT`].
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::clamp_page_params;
///
/// assert_eq!(clamp_page_params(0, 0), (1, 20));
/// assert_eq!(clamp_page_params(3, 50), (3, 50));
/// ```
pub fn clamp_page_params(page: i64, limit: i64) -> (i64, i64) {
    let page = if page < 1 { 1 } else { page };
    let limit = if limit < 1 { DEFAULT_PAGE_LIMIT } else { limit };
    (page, limit)
}

/// Resolves a page request against a total record count.
///
/// `total_pages` is `ceil(total_records / limit)`. The page is empty when it
/// lies past the last page or its offset is at or beyond the total.
///
/// Callers must clamp `page` and `limit` to at least 1 first (see
/// [`clamp_page_params`]).
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::paginate;
///
/// let slice = paginate(45, 2, 20);
/// assert_eq!(slice.offset, 20);
/// assert_eq!(slice.total_pages, 3);
/// assert!(!slice.is_empty);
///
/// // An empty data set yields an empty page, not an error.
/// assert!(paginate(0, 1, 20).is_empty);
/// ```
pub fn paginate(total_records: i64, page: i64, limit: i64) -> PageSlice {
    let total_pages = (total_records + limit - 1) / limit;
    let offset = (page - 1) * limit;
    let is_empty = page > total_pages || offset >= total_records;

    PageSlice {
        offset,
        total_pages,
        is_empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_page_of_partial_data() {
        let slice = paginate(5, 1, 20);
        assert_eq!(slice.offset, 0);
        assert_eq!(slice.total_pages, 1);
        assert!(!slice.is_empty);
    }

    #[test]
    fn test_exact_multiple_of_limit() {
        let slice = paginate(40, 2, 20);
        assert_eq!(slice.offset, 20);
        assert_eq!(slice.total_pages, 2);
        assert!(!slice.is_empty);
    }

    #[test]
    fn test_page_past_last_is_empty() {
        let slice = paginate(40, 3, 20);
        assert!(slice.is_empty);
        assert_eq!(slice.total_pages, 2);
    }

    #[test]
    fn test_zero_records_yields_empty_page_not_error() {
        let slice = paginate(0, 1, 20);
        assert!(slice.is_empty);
        assert_eq!(slice.offset, 0);
        assert_eq!(slice.total_pages, 0);
    }

    #[test]
    fn test_single_record_single_page() {
        let slice = paginate(1, 1, 20);
        assert!(!slice.is_empty);
        assert_eq!(slice.total_pages, 1);
    }

    #[test]
    fn test_limit_one() {
        let slice = paginate(3, 3, 1);
        assert_eq!(slice.offset, 2);
        assert_eq!(slice.total_pages, 3);
        assert!(!slice.is_empty);
        assert!(paginate(3, 4, 1).is_empty);
    }

    #[test]
    fn test_clamp_page_params_defaults() {
        assert_eq!(clamp_page_params(0, 0), (1, DEFAULT_PAGE_LIMIT));
        assert_eq!(clamp_page_params(-5, -1), (1, DEFAULT_PAGE_LIMIT));
        assert_eq!(clamp_page_params(2, 10), (2, 10));
    }

    proptest! {
        #[test]
        fn prop_paginate_is_pure(total in 0i64..10_000, page in 1i64..200, limit in 1i64..200) {
            prop_assert_eq!(paginate(total, page, limit), paginate(total, page, limit));
        }

        #[test]
        fn prop_offset_is_page_times_limit(total in 0i64..10_000, page in 1i64..200, limit in 1i64..200) {
            let slice = paginate(total, page, limit);
            prop_assert_eq!(slice.offset, (page - 1) * limit);
        }

        #[test]
        fn prop_total_pages_covers_all_records(total in 1i64..10_000, limit in 1i64..200) {
            let slice = paginate(total, 1, limit);
            prop_assert!(slice.total_pages * limit >= total);
            prop_assert!((slice.total_pages - 1) * limit < total);
        }

        #[test]
        fn prop_nonempty_page_offset_within_total(total in 0i64..10_000, page in 1i64..200, limit in 1i64..200) {
            let slice = paginate(total, page, limit);
            if !slice.is_empty {
                prop_assert!(slice.offset < total);
            }
        }

        #[test]
        fn prop_first_page_empty_iff_no_records(total in 0i64..10_000, limit in 1i64..200) {
            prop_assert_eq!(paginate(total, 1, limit).is_empty, total == 0);
        }
    }
}
