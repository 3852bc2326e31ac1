//! Dependabot client trait

use crate::error::Result;
use crate::query::SearchQuery;
use crate::types::{MergeMethod, PullRequestDetails, SearchPage};
use async_trait::async_trait;

/// GitHub operations needed to review Dependabot pull requests
///
/// Repositories are always given in `owner/name` form.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; operations run concurrently on
/// the tokio runtime and share one client.
#[async_trait]
pub trait DependabotClient: Send + Sync {
    /// Login of the authenticated user
    async fn current_user(&self) -> Result<String>;

    /// Fetch one page (1-based) of search results
    async fn search_pull_requests(&self, query: &SearchQuery, page: u32) -> Result<SearchPage>;

    /// Approve and merge a pull request
    ///
    /// With `MergeMethod::Dependabot` the merge is delegated to Dependabot
    /// and happens once checks pass.
    async fn merge_pull_request(
        &self,
        repository: &str,
        number: u64,
        method: MergeMethod,
    ) -> Result<()>;

    /// Ask Dependabot to rebase the pull request
    async fn rebase_pull_request(&self, repository: &str, number: u64) -> Result<()>;

    /// Ask Dependabot to recreate the pull request from scratch
    async fn recreate_pull_request(&self, repository: &str, number: u64) -> Result<()>;

    /// Close the pull request without merging
    async fn close_pull_request(&self, repository: &str, number: u64) -> Result<()>;

    /// Fetch the information shown in the details view
    async fn fetch_details(&self, repository: &str, number: u64) -> Result<PullRequestDetails>;
}
