//! Actions flowing through the store
//!
//! Key presses enter as `KeyPressed` and are translated by the keyboard
//! middleware. Background operations report back as `OperationFinished`
//! or `DetailsLoaded`.

use crate::domain_models::{Operation, ReviewUnit};
use gh_dependabot_client::{MergeMethod, PullRequestDetails};
use ratatui::crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum Action {
    /// Raw key press, consumed by the keyboard middleware
    KeyPressed(KeyEvent),
    /// Terminal window resized
    Resize { width: u16, height: u16 },
    /// Periodic tick, advances the spinner
    Tick,
    Global(GlobalAction),
    Navigate(NavigationAction),
    /// User decision about one review unit
    Review(ReviewAction),
    /// Completion signal of a background operation
    OperationFinished(Completion),
    /// Result of fetching the details shown in the details overlay
    DetailsLoaded {
        unit: ReviewUnit,
        details: Result<PullRequestDetails, String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    Quit,
    /// Close the open overlay, or quit when none is open
    Close,
    ToggleHelp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    Next,
    Previous,
    ToTop,
    ToBottom,
    PageDown,
    PageUp,
}

/// An action on the unit that was selected when the key was pressed
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewAction {
    Merge(ReviewUnit, MergeMethod),
    Rebase(ReviewUnit),
    Recreate(ReviewUnit),
    Close(ReviewUnit),
    Browse(ReviewUnit),
    CopyCheckout(ReviewUnit),
    ViewDetails(ReviewUnit),
}

impl ReviewAction {
    pub fn unit(&self) -> &ReviewUnit {
        match self {
            Self::Merge(unit, _)
            | Self::Rebase(unit)
            | Self::Recreate(unit)
            | Self::Close(unit)
            | Self::Browse(unit)
            | Self::CopyCheckout(unit)
            | Self::ViewDetails(unit) => unit,
        }
    }

    /// The background operation this action starts; None for UI-only actions
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Merge(_, method) => Some(Operation::Merge(*method)),
            Self::Rebase(_) => Some(Operation::Rebase),
            Self::Recreate(_) => Some(Operation::Recreate),
            Self::Close(_) => Some(Operation::Close),
            Self::Browse(_) => Some(Operation::Browse),
            Self::CopyCheckout(_) => Some(Operation::CopyCheckout),
            Self::ViewDetails(_) => None,
        }
    }
}

/// Outcome of one background operation
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub unit: ReviewUnit,
    pub operation: Operation,
    /// Success message or error text
    pub outcome: Result<String, String>,
}
