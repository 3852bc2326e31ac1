//! Search query construction

/// Base qualifiers every search starts from
const BASE_QUERY: &str = "is:pr is:open archived:false author:app/dependabot";

/// Which Dependabot pull requests to look for
///
/// With an organization and/or a team the search is scoped to those.
/// Without either, it falls back to pull requests where the current user
/// was asked for a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub username: String,
    pub org: Option<String>,
    pub team: Option<String>,
}

impl SearchQuery {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            org: None,
            team: None,
        }
    }

    pub fn with_org(mut self, org: Option<String>) -> Self {
        self.org = org.filter(|org| !org.trim().is_empty());
        self
    }

    pub fn with_team(mut self, team: Option<String>) -> Self {
        self.team = team.filter(|team| !team.trim().is_empty());
        self
    }

    /// Full query string sent to the search API
    pub fn search_query(&self) -> String {
        format!("{} {}", BASE_QUERY, self.filter())
    }

    /// The user-facing part of the query, shown in the list title
    pub fn filter(&self) -> String {
        let mut qualifiers = Vec::new();
        if let Some(org) = &self.org {
            qualifiers.push(format!("org:{}", org));
        }
        if let Some(team) = &self.team {
            qualifiers.push(format!("team-review-requested:{}", team));
        }
        if qualifiers.is_empty() {
            qualifiers.push(format!("review-requested:{}", self.username));
        }
        qualifiers.join(" ")
    }
}
