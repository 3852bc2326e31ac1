//! GitHub token resolution

use crate::error::{ClientError, Result};
use log::debug;

/// Resolves the token used to authenticate against GitHub
///
/// Tries, in order:
/// 1. `GITHUB_TOKEN`
/// 2. `GH_TOKEN`
/// 3. `gh auth token`
#[derive(Debug, Clone, Default)]
pub struct TokenResolver {
    env_token: Option<String>,
}

impl TokenResolver {
    pub fn new() -> Self {
        let env_token = ["GITHUB_TOKEN", "GH_TOKEN"]
            .iter()
            .find_map(|key| std::env::var(key).ok())
            .filter(|token| !token.trim().is_empty());

        Self { env_token }
    }

    pub async fn get_token(&self) -> Result<String> {
        if let Some(token) = &self.env_token {
            debug!("Using token from environment");
            return Ok(token.clone());
        }

        debug!("Trying gh auth token");
        let output = match tokio::process::Command::new("gh")
            .args(["auth", "token"])
            .output()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                debug!("Failed to run 'gh auth token': {}", e);
                return Err(ClientError::MissingToken);
            }
        };

        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if output.status.success() && !token.is_empty() {
            debug!("Using token from gh CLI");
            return Ok(token);
        }

        Err(ClientError::MissingToken)
    }
}
