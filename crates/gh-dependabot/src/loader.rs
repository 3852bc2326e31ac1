//! Loading the initial list
//!
//! Pages through the search results until none remain, then either keeps
//! only duplicate bumps or sorts everything oldest first.

use crate::domain_models::{group_duplicates, ReviewUnit};
use anyhow::{Context, Result};
use gh_dependabot_client::{DependabotClient, SearchQuery};

/// Fetch every page of results
///
/// `progress` is called after each page with the number of units loaded so
/// far and the total reported by GitHub.
pub async fn load_all(
    client: &dyn DependabotClient,
    query: &SearchQuery,
    mut progress: impl FnMut(usize, u64),
) -> Result<Vec<ReviewUnit>> {
    let search = query.search_query();
    log::info!("Searching \"{}\"", search);

    let mut units = Vec::new();
    let mut page = 1;
    loop {
        let results = client
            .search_pull_requests(query, page)
            .await
            .with_context(|| format!("Failed to search \"{}\" (page {})", search, page))?;

        units.extend(results.items.into_iter().map(ReviewUnit::from));
        log::info!(
            "Searching \"{}\"... ({}/{})",
            search,
            units.len(),
            results.total_count
        );
        progress(units.len(), results.total_count);

        match results.next_page {
            Some(next) if next > page => page = next,
            Some(next) => {
                log::warn!("Search returned non-advancing page {}, stopping", next);
                break;
            }
            None => break,
        }
    }

    Ok(units)
}

/// Order the fetched units for display
pub fn prepare(mut units: Vec<ReviewUnit>, dupes_only: bool) -> Vec<ReviewUnit> {
    if dupes_only {
        return group_duplicates(units);
    }
    units.sort_by_key(|unit| unit.updated_at);
    units
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commander::test_support::FakeClient;
    use chrono::{TimeZone, Utc};
    use gh_dependabot_client::{SearchItem, SearchPage};
    use pretty_assertions::assert_eq;

    fn item(number: u64, title: &str, hour: u32) -> SearchItem {
        SearchItem {
            repository: "org/app".to_string(),
            number,
            title: title.to_string(),
            url: format!("https://github.com/org/app/pull/{}", number),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap(),
        }
    }

    fn page(items: Vec<SearchItem>, next_page: Option<u32>) -> SearchPage {
        SearchPage {
            items,
            total_count: 3,
            next_page,
        }
    }

    fn query() -> SearchQuery {
        SearchQuery::new("octocat").with_org(Some("org".to_string()))
    }

    #[tokio::test]
    async fn test_loads_every_page_and_sorts_by_update_time() {
        let client = FakeClient::with_pages(vec![
            page(vec![item(1, "Bump a", 9), item(2, "Bump b", 7)], Some(2)),
            page(vec![item(3, "Bump c", 8)], None),
        ]);
        let mut reported = Vec::new();

        let units = load_all(&client, &query(), |loaded, total| {
            reported.push((loaded, total))
        })
        .await
        .unwrap();

        assert_eq!(client.calls(), vec!["search page 1", "search page 2"]);
        assert_eq!(reported, vec![(2, 3), (3, 3)]);

        let numbers: Vec<u64> = prepare(units, false).iter().map(|u| u.number).collect();
        assert_eq!(numbers, vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn test_duplicates_only() {
        let client = FakeClient::with_pages(vec![page(
            vec![
                item(1, "Bump foo from 1 to 2", 1),
                item(2, "Update README", 2),
                item(3, "Bump foo from 1 to 3", 3),
            ],
            None,
        )]);

        let units = load_all(&client, &query(), |_, _| {}).await.unwrap();
        let numbers: Vec<u64> = prepare(units, true).iter().map(|u| u.number).collect();

        assert_eq!(numbers, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_empty_result() {
        let client = FakeClient::with_pages(Vec::new());
        let units = load_all(&client, &query(), |_, _| {}).await.unwrap();
        assert!(units.is_empty());
    }
}
