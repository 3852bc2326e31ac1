//! Application State

use crate::domain_models::{OperationTracker, ReviewUnit};
use crate::keymap::{default_keymap, Keymap};
use crate::theme::Theme;
use gh_dependabot_client::PullRequestDetails;
use std::sync::Arc;

use super::{ReviewListState, StatusBarState};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Human description of the search, shown in the list title
    pub filter: String,
    pub list: ReviewListState,
    /// Shared by every state snapshot
    pub tracker: Arc<OperationTracker>,
    pub status_bar: StatusBarState,
    pub spinner: SpinnerState,
    pub layout: ListLayout,
    pub overlay: Overlay,
    pub theme: Theme,
    pub keymap: Keymap,
}

impl AppState {
    pub fn new(filter: impl Into<String>, units: Vec<ReviewUnit>) -> Self {
        Self {
            running: true,
            filter: filter.into(),
            list: ReviewListState::new(units),
            tracker: Arc::new(OperationTracker::new()),
            status_bar: StatusBarState::default(),
            spinner: SpinnerState::default(),
            layout: ListLayout::default(),
            overlay: Overlay::None,
            theme: Theme::default(),
            keymap: default_keymap(),
        }
    }

    pub fn with_status_history(mut self, max_history: usize) -> Self {
        self.status_bar = StatusBarState::with_history(max_history);
        self
    }

    pub fn title(&self) -> String {
        format!("Pull Requests | {}", self.filter)
    }
}

/// Floating view drawn above the list
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Overlay {
    #[default]
    None,
    Help,
    Details {
        unit: ReviewUnit,
        details: DetailsState,
    },
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailsState {
    Loading,
    Loaded(PullRequestDetails),
    Failed(String),
}

/// Padding between the window edge and the list
pub const PADDING_VERTICAL: u16 = 1;
pub const PADDING_HORIZONTAL: u16 = 2;

/// Size available to the list after padding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListLayout {
    pub width: u16,
    pub height: u16,
}

impl ListLayout {
    pub fn from_window(width: u16, height: u16) -> Self {
        Self {
            width: width.saturating_sub(2 * PADDING_HORIZONTAL),
            height: height.saturating_sub(2 * PADDING_VERTICAL),
        }
    }

    /// Number of list items visible at once
    ///
    /// Each item takes two lines; the border and the status bar take three.
    pub fn page_size(&self) -> usize {
        usize::from((self.height.saturating_sub(3) / 2).max(1))
    }
}

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Progress indicator shown while operations run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpinnerState {
    active: bool,
    frame: usize,
}

impl SpinnerState {
    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.frame = 0;
    }

    pub fn tick(&mut self) {
        if self.active {
            self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn symbol(&self) -> &'static str {
        SPINNER_FRAMES[self.frame]
    }
}
