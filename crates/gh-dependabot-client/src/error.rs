//! Client error type

use std::error::Error as StdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no GitHub token found; set GITHUB_TOKEN or run `gh auth login`")]
    MissingToken,

    #[error("{}", describe_octocrab_error(.0))]
    Api(#[from] octocrab::Error),

    #[error("merge was not performed: {0}")]
    NotMerged(String),

    #[error("invalid repository name '{0}', expected owner/name")]
    InvalidRepository(String),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("failed to open browser: {0}")]
    Browser(#[source] std::io::Error),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// Formats an octocrab error into a concise user-facing string
fn describe_octocrab_error(error: &octocrab::Error) -> String {
    match error {
        octocrab::Error::GitHub { source, .. } => {
            let message = source.message.trim();
            let message = if message.is_empty() || message.eq_ignore_ascii_case("github") {
                "GitHub API error"
            } else {
                message
            };
            format!("status {}: {}", source.status_code.as_u16(), message)
        }
        other => describe_error_chain(other),
    }
}

fn describe_error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut current = Some(error);
    let mut parts: Vec<String> = Vec::new();

    while let Some(err) = current {
        let text = err.to_string();
        if !text.is_empty() && parts.last() != Some(&text) {
            parts.push(text);
        }
        current = err.source();
    }

    if parts.is_empty() {
        "unknown error".to_owned()
    } else {
        parts.join(": ")
    }
}
