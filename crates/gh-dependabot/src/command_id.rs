//! Command identifiers
//!
//! Commands are the semantic actions a key can trigger. They are
//! serialized as snake_case (e.g., `MergeSquash` -> `"merge_squash"`).

use crate::actions::{Action, GlobalAction, NavigationAction, ReviewAction};
use crate::domain_models::ReviewUnit;
use gh_dependabot_client::MergeMethod;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Navigation ===
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
    NavigatePageDown,
    NavigatePageUp,

    // === Review ===
    MergeRebase,
    MergeCommit,
    MergeSquash,
    MergeDependabot,
    Rebase,
    Recreate,
    Close,
    OpenInBrowser,
    ViewDetails,
    CopyCheckout,

    // === General ===
    ToggleHelp,
    GlobalClose,
    GlobalQuit,
}

impl CommandId {
    /// Convert to an action
    ///
    /// Review commands are bound to `selected`; they yield None when
    /// nothing is selected.
    pub fn to_action(self, selected: Option<&ReviewUnit>) -> Option<Action> {
        let action = match self {
            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateToTop => Action::Navigate(NavigationAction::ToTop),
            Self::NavigateToBottom => Action::Navigate(NavigationAction::ToBottom),
            Self::NavigatePageDown => Action::Navigate(NavigationAction::PageDown),
            Self::NavigatePageUp => Action::Navigate(NavigationAction::PageUp),

            Self::ToggleHelp => Action::Global(GlobalAction::ToggleHelp),
            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),

            review => {
                let unit = selected?.clone();
                return review.review_action(unit).map(Action::Review);
            }
        };
        Some(action)
    }

    fn review_action(self, unit: ReviewUnit) -> Option<ReviewAction> {
        let action = match self {
            Self::MergeRebase => ReviewAction::Merge(unit, MergeMethod::Rebase),
            Self::MergeCommit => ReviewAction::Merge(unit, MergeMethod::Merge),
            Self::MergeSquash => ReviewAction::Merge(unit, MergeMethod::Squash),
            Self::MergeDependabot => ReviewAction::Merge(unit, MergeMethod::Dependabot),
            Self::Rebase => ReviewAction::Rebase(unit),
            Self::Recreate => ReviewAction::Recreate(unit),
            Self::Close => ReviewAction::Close(unit),
            Self::OpenInBrowser => ReviewAction::Browse(unit),
            Self::ViewDetails => ReviewAction::ViewDetails(unit),
            Self::CopyCheckout => ReviewAction::CopyCheckout(unit),
            _ => return None,
        };
        Some(action)
    }

    /// Description shown in the help overlay
    pub fn description(&self) -> &'static str {
        match self {
            Self::NavigateNext => "Move down",
            Self::NavigatePrevious => "Move up",
            Self::NavigateToTop => "Go to first pull request",
            Self::NavigateToBottom => "Go to last pull request",
            Self::NavigatePageDown => "Page down",
            Self::NavigatePageUp => "Page up",

            Self::MergeRebase => "Approve and merge (rebase)",
            Self::MergeCommit => "Approve and merge (merge commit)",
            Self::MergeSquash => "Approve and merge (squash)",
            Self::MergeDependabot => "Approve and let Dependabot merge",
            Self::Rebase => "Ask Dependabot to rebase",
            Self::Recreate => "Ask Dependabot to recreate",
            Self::Close => "Close pull request",
            Self::OpenInBrowser => "Open in browser",
            Self::ViewDetails => "Show details",
            Self::CopyCheckout => "Copy `gh pr checkout` command",

            Self::ToggleHelp => "Toggle help",
            Self::GlobalClose => "Close overlay or quit",
            Self::GlobalQuit => "Quit",
        }
    }

    /// Group heading in the help overlay
    pub fn category(&self) -> &'static str {
        match self {
            Self::NavigateNext
            | Self::NavigatePrevious
            | Self::NavigateToTop
            | Self::NavigateToBottom
            | Self::NavigatePageDown
            | Self::NavigatePageUp => "Navigation",

            Self::MergeRebase
            | Self::MergeCommit
            | Self::MergeSquash
            | Self::MergeDependabot
            | Self::Rebase
            | Self::Recreate
            | Self::Close
            | Self::OpenInBrowser
            | Self::ViewDetails
            | Self::CopyCheckout => "Review",

            Self::ToggleHelp | Self::GlobalClose | Self::GlobalQuit => "General",
        }
    }
}
