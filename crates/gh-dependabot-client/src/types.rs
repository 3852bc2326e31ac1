//! Client-agnostic types
//!
//! These types are independent of the GitHub API library so the rest of the
//! application never touches octocrab models directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a pull request gets landed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeMethod {
    /// Rebase commits onto the base branch
    #[default]
    Rebase,
    /// Create a merge commit
    Merge,
    /// Squash all commits into one
    Squash,
    /// Ask Dependabot to merge once checks pass
    Dependabot,
}

impl MergeMethod {
    /// Short label for status messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rebase => "rebase",
            Self::Merge => "merge commit",
            Self::Squash => "squash",
            Self::Dependabot => "dependabot",
        }
    }
}

/// A single pull request returned by the search API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchItem {
    /// Repository in `owner/name` form
    pub repository: String,
    pub number: u64,
    pub title: String,
    /// Web URL of the pull request
    pub url: String,
    pub updated_at: DateTime<Utc>,
}

/// One page of search results
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub items: Vec<SearchItem>,
    /// Total number of matches across all pages
    pub total_count: u64,
    /// Page number to request next, None on the last page
    pub next_page: Option<u32>,
}

/// Extra information shown in the details view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestDetails {
    pub title: String,
    pub body: String,
    pub author: String,
    pub state: String,
    pub head_branch: String,
    pub mergeable_state: Option<String>,
}
