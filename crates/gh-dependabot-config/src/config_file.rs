use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".gh-dependabot.toml";

/// Load config file content
///
/// Searched in order:
/// 1. `.gh-dependabot.toml` in the current working directory
/// 2. `config.toml` in the application config directory
/// 3. `.gh-dependabot.toml` in the home directory
///
/// Returns the content of the first readable file, None otherwise.
pub fn load_config_file() -> Option<String> {
    candidate_paths().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Ok(path) = crate::paths::app_config_path() {
        paths.push(path);
    }
    if let Some(home) = env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(CONFIG_FILE));
    }
    paths
}
