//! Fixed-size pagination
//!
//! Page numbers are 1-based and always explicit: there is no implicit
//! default page, and page zero is rejected. The page size is a policy
//! constant, not client-configurable.

use crate::error::{Error, Result};

/// Number of items per page
pub const PAGE_SIZE: usize = 10;

/// Slice an ordered result set into the requested page
///
/// Returns the page slice and the total length of the input (the full
/// filtered result set, not the global catalog size). A page past the end
/// is an empty slice, not an error.
pub fn paginate<T>(ordered: Vec<T>, page: u32) -> Result<(Vec<T>, usize)> {
    if page == 0 {
        return Err(Error::InvalidQuery(
            "Page number must be a positive integer".to_string(),
        ));
    }

    let total_count = ordered.len();
    let skip = (page as usize - 1) * PAGE_SIZE;
    let slice = ordered.into_iter().skip(skip).take(PAGE_SIZE).collect();

    Ok((slice, total_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let items: Vec<u32> = (0..25).collect();
        let (slice, total) = paginate(items, 1).unwrap();
        assert_eq!(slice, (0..10).collect::<Vec<u32>>());
        assert_eq!(total, 25);
    }

    #[test]
    fn test_middle_and_last_pages() {
        let items: Vec<u32> = (0..25).collect();

        let (slice, total) = paginate(items.clone(), 2).unwrap();
        assert_eq!(slice, (10..20).collect::<Vec<u32>>());
        assert_eq!(total, 25);

        let (slice, total) = paginate(items, 3).unwrap();
        assert_eq!(slice, (20..25).collect::<Vec<u32>>());
        assert_eq!(total, 25);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let items: Vec<u32> = (0..25).collect();
        let (slice, total) = paginate(items, 4).unwrap();
        assert!(slice.is_empty());
        assert_eq!(total, 25, "total count is unchanged past the last page");
    }

    #[test]
    fn test_page_zero_rejected() {
        let result = paginate(vec![1, 2, 3], 0);
        assert!(matches!(result, Err(Error::InvalidQuery(_))));
    }

    #[test]
    fn test_empty_input() {
        let (slice, total) = paginate(Vec::<u32>::new(), 1).unwrap();
        assert!(slice.is_empty());
        assert_eq!(total, 0);
    }

    #[test]
    fn test_exact_page_boundary() {
        let items: Vec<u32> = (0..20).collect();
        let (slice, total) = paginate(items, 2).unwrap();
        assert_eq!(slice.len(), PAGE_SIZE);
        assert_eq!(total, 20);
    }
}
