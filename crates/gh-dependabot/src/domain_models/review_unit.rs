use chrono::{DateTime, Utc};
use gh_dependabot_client::SearchItem;
use std::fmt;

/// A Dependabot pull request awaiting a decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewUnit {
    /// Repository in `owner/name` form
    pub repository: String,
    pub number: u64,
    pub title: String,
    pub url: String,
    pub updated_at: DateTime<Utc>,
}

impl ReviewUnit {
    pub fn new(repository: impl Into<String>, number: u64, title: impl Into<String>) -> Self {
        let repository = repository.into();
        Self {
            url: format!("https://github.com/{}/pull/{}", repository, number),
            repository,
            number,
            title: title.into(),
            updated_at: Utc::now(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    pub fn key(&self) -> OperationKey {
        OperationKey::new(&self.repository, self.number)
    }

    /// The package this pull request bumps, if the title names one
    pub fn package(&self) -> Option<&str> {
        super::package_name(&self.title)
    }

    /// Shell command that checks this pull request out locally
    pub fn checkout_command(&self) -> String {
        format!("gh pr checkout {} --repo {}", self.number, self.repository)
    }
}

impl From<SearchItem> for ReviewUnit {
    fn from(item: SearchItem) -> Self {
        Self::new(item.repository, item.number, item.title)
            .with_url(item.url)
            .with_updated_at(item.updated_at)
    }
}

impl fmt::Display for ReviewUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.repository, self.number)
    }
}

/// Identity of a review unit: repository plus number
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperationKey(String);

impl OperationKey {
    pub fn new(repository: &str, number: u64) -> Self {
        Self(format!("{}/{}", repository, number))
    }
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
