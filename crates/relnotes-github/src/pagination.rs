//! Page-concatenating fetch.

use std::future::Future;

use tracing::debug;

use crate::GitHubResult;

/// Number of items GitHub returns per page when `per_page` is not set.
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Largest `per_page` GitHub honours; bigger values are silently capped.
pub const MAX_PAGE_SIZE: usize = 100;

/// Fetches every page and concatenates the results in the order received.
///
/// Pages are requested one at a time starting at page 1. A page holding
/// exactly `page_size` items means another page may follow; a shorter page
/// (including an empty one) ends the walk. When the total is an exact multiple
/// of `page_size` this costs one extra request that returns nothing.
///
/// # Errors
///
/// Returns the first error produced by `fetch_page`; pages fetched before it
/// are discarded.
pub async fn fetch_all_pages<T, F, Fut>(
    page_size: usize,
    mut fetch_page: F,
) -> GitHubResult<Vec<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = GitHubResult<Vec<T>>>,
{
    let mut all = Vec::new();
    let mut page = 1;

    loop {
        let items = fetch_page(page).await?;
        let received = items.len();
        debug!(page, received, "fetched page");

        all.extend(items);

        if received != page_size {
            break;
        }
        page += 1;
    }

    Ok(all)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::GitHubError;

    /// Serves `total` numbered items in pages of `page_size`, recording calls.
    fn paged(total: usize, page_size: usize, calls: &RefCell<Vec<u32>>, page: u32) -> Vec<usize> {
        calls.borrow_mut().push(page);
        let start = (page as usize - 1) * page_size;
        (start..total.min(start + page_size)).collect()
    }

    async fn run(total: usize, page_size: usize) -> (Vec<usize>, Vec<u32>) {
        let calls = RefCell::new(Vec::new());
        let items = fetch_all_pages(page_size, |page| {
            let data = paged(total, page_size, &calls, page);
            async move { Ok(data) }
        })
        .await
        .unwrap();
        (items, calls.into_inner())
    }

    #[tokio::test]
    async fn test_single_short_page() {
        let (items, calls) = run(7, 30).await;
        assert_eq!(items.len(), 7);
        assert_eq!(calls, vec![1]);
    }

    #[tokio::test]
    async fn test_multiple_pages_in_order() {
        let (items, calls) = run(65, 30).await;
        assert_eq!(items, (0..65).collect::<Vec<_>>());
        assert_eq!(calls, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_exact_multiple_costs_one_extra_request() {
        let (items, calls) = run(60, 30).await;
        assert_eq!(items.len(), 60);
        assert_eq!(calls, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_empty_history() {
        let (items, calls) = run(0, 30).await;
        assert!(items.is_empty());
        assert_eq!(calls, vec![1]);
    }

    #[tokio::test]
    async fn test_request_count_matches_page_arithmetic() {
        for page_size in [1_usize, 3, 10] {
            for total in 0..25_usize {
                let (items, calls) = run(total, page_size).await;
                let expected = total / page_size + 1;
                assert_eq!(items.len(), total, "total={total} page_size={page_size}");
                assert_eq!(calls.len(), expected, "total={total} page_size={page_size}");
            }
        }
    }

    #[tokio::test]
    async fn test_error_propagates_immediately() {
        let calls = RefCell::new(Vec::new());
        let result: GitHubResult<Vec<usize>> = fetch_all_pages(2, |page| {
            calls.borrow_mut().push(page);
            async move {
                if page == 2 {
                    Err(GitHubError::RepositoryNotFound {
                        owner: "foo".to_string(),
                        repo: "bar".to_string(),
                    })
                } else {
                    Ok(vec![1, 2])
                }
            }
        })
        .await;

        assert!(matches!(
            result,
            Err(GitHubError::RepositoryNotFound { .. })
        ));
        assert_eq!(calls.into_inner(), vec![1, 2]);
    }
}
