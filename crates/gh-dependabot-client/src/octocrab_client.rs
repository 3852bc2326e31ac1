//! Octocrab-based implementation of `DependabotClient`

use crate::client::DependabotClient;
use crate::error::{ClientError, Result};
use crate::query::SearchQuery;
use crate::token::TokenResolver;
use crate::types::{MergeMethod, PullRequestDetails, SearchItem, SearchPage};
use async_trait::async_trait;
use log::debug;
use octocrab::{params, Octocrab};
use serde::Serialize;
use std::sync::Arc;

const DEFAULT_PAGE_SIZE: u8 = 100;

#[derive(Serialize)]
struct ReviewBody<'a> {
    body: &'a str,
    event: &'a str,
}

#[derive(Serialize)]
struct UpdatePullRequestBody<'a> {
    state: &'a str,
}

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
    page_size: u8,
    approval_message: String,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self {
            octocrab,
            page_size: DEFAULT_PAGE_SIZE,
            approval_message: String::new(),
        }
    }

    /// Build a client authenticated with the resolved token
    pub async fn from_env() -> Result<Self> {
        let token = TokenResolver::new().get_token().await?;
        let octocrab = Octocrab::builder().personal_token(token).build()?;
        Ok(Self::new(Arc::new(octocrab)))
    }

    pub fn with_page_size(mut self, page_size: u8) -> Self {
        self.page_size = page_size.clamp(1, DEFAULT_PAGE_SIZE);
        self
    }

    /// Body of the approving review submitted before merging
    pub fn with_approval_message(mut self, message: impl Into<String>) -> Self {
        self.approval_message = message.into();
        self
    }

    async fn approve(&self, owner: &str, repo: &str, number: u64) -> Result<()> {
        debug!("Approving {}/{}#{}", owner, repo, number);
        let url = format!("/repos/{}/{}/pulls/{}/reviews", owner, repo, number);
        let body = ReviewBody {
            body: &self.approval_message,
            event: "APPROVE",
        };
        let _: serde_json::Value = self.octocrab.post(&url, Some(&body)).await?;
        Ok(())
    }

    async fn comment(&self, owner: &str, repo: &str, number: u64, body: &str) -> Result<()> {
        debug!("Commenting '{}' on {}/{}#{}", body, owner, repo, number);
        self.octocrab
            .issues(owner, repo)
            .create_comment(number, body)
            .await?;
        Ok(())
    }
}

/// Split `owner/name` into its parts
fn split_repository(repository: &str) -> Result<(&str, &str)> {
    match repository.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner, name))
        }
        _ => Err(ClientError::InvalidRepository(repository.to_string())),
    }
}

/// Extract `owner/name` from an API URL like `https://api.github.com/repos/owner/name`
fn repository_from_api_url(url: &str) -> Option<String> {
    let (_, path) = url.split_once("/repos/")?;
    let mut segments = path.trim_end_matches('/').split('/');
    let owner = segments.next().filter(|s| !s.is_empty())?;
    let name = segments.next().filter(|s| !s.is_empty())?;
    Some(format!("{}/{}", owner, name))
}

fn api_merge_method(method: MergeMethod) -> Option<params::pulls::MergeMethod> {
    match method {
        MergeMethod::Rebase => Some(params::pulls::MergeMethod::Rebase),
        MergeMethod::Merge => Some(params::pulls::MergeMethod::Merge),
        MergeMethod::Squash => Some(params::pulls::MergeMethod::Squash),
        MergeMethod::Dependabot => None,
    }
}

#[async_trait]
impl DependabotClient for OctocrabClient {
    async fn current_user(&self) -> Result<String> {
        let user = self.octocrab.current().user().await?;
        Ok(user.login)
    }

    async fn search_pull_requests(&self, query: &SearchQuery, page: u32) -> Result<SearchPage> {
        let q = query.search_query();
        debug!("Searching '{}' (page {})", q, page);

        let results = self
            .octocrab
            .search()
            .issues_and_pull_requests(&q)
            .per_page(self.page_size)
            .page(page)
            .send()
            .await?;

        let items = results
            .items
            .into_iter()
            .map(|issue| {
                let repository_url = issue.repository_url.to_string();
                let repository = repository_from_api_url(&repository_url).ok_or_else(|| {
                    ClientError::UnexpectedResponse(format!(
                        "cannot derive repository from '{}'",
                        repository_url
                    ))
                })?;
                Ok(SearchItem {
                    repository,
                    number: issue.number,
                    title: issue.title,
                    url: issue.html_url.to_string(),
                    updated_at: issue.updated_at,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SearchPage {
            total_count: results.total_count.unwrap_or(items.len() as u64),
            next_page: results.next.as_ref().map(|_| page + 1),
            items,
        })
    }

    async fn merge_pull_request(
        &self,
        repository: &str,
        number: u64,
        method: MergeMethod,
    ) -> Result<()> {
        let (owner, repo) = split_repository(repository)?;
        self.approve(owner, repo, number).await?;

        let Some(api_method) = api_merge_method(method) else {
            return self
                .comment(owner, repo, number, "@dependabot merge")
                .await;
        };

        debug!(
            "Merging {}/{}#{} ({})",
            owner,
            repo,
            number,
            method.label()
        );
        let merge = self
            .octocrab
            .pulls(owner, repo)
            .merge(number)
            .method(api_method)
            .send()
            .await?;

        if !merge.merged {
            return Err(ClientError::NotMerged(
                merge
                    .message
                    .unwrap_or_else(|| "GitHub refused the merge".to_string()),
            ));
        }

        Ok(())
    }

    async fn rebase_pull_request(&self, repository: &str, number: u64) -> Result<()> {
        let (owner, repo) = split_repository(repository)?;
        self.comment(owner, repo, number, "@dependabot rebase").await
    }

    async fn recreate_pull_request(&self, repository: &str, number: u64) -> Result<()> {
        let (owner, repo) = split_repository(repository)?;
        self.comment(owner, repo, number, "@dependabot recreate")
            .await
    }

    async fn close_pull_request(&self, repository: &str, number: u64) -> Result<()> {
        let (owner, repo) = split_repository(repository)?;
        debug!("Closing {}/{}#{}", owner, repo, number);
        let url = format!("/repos/{}/{}/pulls/{}", owner, repo, number);
        let body = UpdatePullRequestBody { state: "closed" };
        let _: serde_json::Value = self.octocrab.patch(&url, Some(&body)).await?;
        Ok(())
    }

    async fn fetch_details(&self, repository: &str, number: u64) -> Result<PullRequestDetails> {
        let (owner, repo) = split_repository(repository)?;
        let pr = self.octocrab.pulls(owner, repo).get(number).await?;

        Ok(PullRequestDetails {
            title: pr.title.unwrap_or_default(),
            body: pr.body.unwrap_or_default(),
            author: pr
                .user
                .map(|user| user.login)
                .unwrap_or_else(|| "unknown".to_string()),
            state: pr
                .state
                .map(|state| format!("{:?}", state).to_lowercase())
                .unwrap_or_else(|| "unknown".to_string()),
            head_branch: pr.head.ref_field,
            mergeable_state: pr
                .mergeable_state
                .map(|state| format!("{:?}", state).to_lowercase()),
        })
    }
}
