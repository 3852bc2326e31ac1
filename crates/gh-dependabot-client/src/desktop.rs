//! Local side effects: browser and clipboard

use crate::error::{ClientError, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

/// Side effects on the user's machine
#[async_trait]
pub trait Desktop: Send + Sync {
    /// Open a URL in the default browser
    async fn open_url(&self, url: &str) -> Result<()>;

    /// Place text on the system clipboard
    async fn copy_text(&self, text: &str) -> Result<()>;
}

/// A value created on first use and kept until the owner is dropped
struct Persistent<T> {
    slot: Mutex<Option<T>>,
}

impl<T> Default for Persistent<T> {
    fn default() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl<T> Persistent<T> {
    fn with<R, E>(
        &self,
        init: impl FnOnce() -> std::result::Result<T, E>,
        f: impl FnOnce(&mut T) -> std::result::Result<R, E>,
    ) -> std::result::Result<R, E> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        let mut value = match slot.take() {
            Some(value) => value,
            None => init()?,
        };
        let result = f(&mut value);
        *slot = Some(value);
        result
    }
}

/// Desktop backed by the platform browser opener and `arboard`
///
/// The clipboard handle lives as long as the desktop. On X11 and Wayland the
/// copied text is served by that handle, so dropping it would clear the
/// selection.
#[derive(Clone, Default)]
pub struct SystemDesktop {
    clipboard: Arc<Persistent<arboard::Clipboard>>,
}

#[async_trait]
impl Desktop for SystemDesktop {
    /// Uses platform-specific commands:
    /// - macOS: `open`
    /// - Windows: `cmd /C start`
    /// - everything else: `xdg-open`
    async fn open_url(&self, url: &str) -> Result<()> {
        #[cfg(target_os = "macos")]
        let result = tokio::process::Command::new("open").arg(url).spawn();

        #[cfg(target_os = "windows")]
        let result = tokio::process::Command::new("cmd")
            .args(["/C", "start", url])
            .spawn();

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let result = tokio::process::Command::new("xdg-open").arg(url).spawn();

        result.map(|_| ()).map_err(ClientError::Browser)
    }

    async fn copy_text(&self, text: &str) -> Result<()> {
        let clipboard = Arc::clone(&self.clipboard);
        let text = text.to_string();

        tokio::task::spawn_blocking(move || {
            clipboard.with(arboard::Clipboard::new, |clipboard| clipboard.set_text(text))
        })
        .await
        .map_err(|e| ClientError::Clipboard(e.to_string()))?
        .map_err(|e| ClientError::Clipboard(e.to_string()))
    }
}
