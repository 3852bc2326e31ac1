//! List controller
//!
//! Pure reducer over `AppState`. Starting an operation returns a `Command`
//! for the commander; the operation reports back later through
//! `Action::OperationFinished`, possibly after its unit left the list.

use crate::actions::{Action, Completion, GlobalAction, NavigationAction, ReviewAction};
use crate::commander::Command;
use crate::domain_models::ReviewUnit;
use crate::state::{AppState, DetailsState, ListLayout, Overlay};
use gh_dependabot_client::PullRequestDetails;

/// Reduce one action into the next state plus commands to run in the background
pub fn reduce(mut state: AppState, action: &Action) -> (AppState, Vec<Command>) {
    let mut commands = Vec::new();

    match action {
        // Translated by the keyboard middleware
        Action::KeyPressed(_) => {}
        Action::Resize { width, height } => {
            state.layout = ListLayout::from_window(*width, *height);
        }
        Action::Tick => state.spinner.tick(),
        Action::Global(global) => reduce_global(&mut state, *global),
        Action::Navigate(navigation) => reduce_navigation(&mut state, *navigation),
        Action::Review(review) => reduce_review(&mut state, review, &mut commands),
        Action::OperationFinished(completion) => reduce_completion(&mut state, completion),
        Action::DetailsLoaded { unit, details } => reduce_details(&mut state, unit, details),
    }

    (state, commands)
}

fn reduce_global(state: &mut AppState, action: GlobalAction) {
    match action {
        GlobalAction::Quit => state.running = false,
        GlobalAction::Close if state.overlay.is_open() => state.overlay = Overlay::None,
        GlobalAction::Close => state.running = false,
        GlobalAction::ToggleHelp => {
            state.overlay = match state.overlay {
                Overlay::Help => Overlay::None,
                _ => Overlay::Help,
            };
        }
    }
}

fn reduce_navigation(state: &mut AppState, action: NavigationAction) {
    let page_size = state.layout.page_size();
    let list = &mut state.list;
    match action {
        NavigationAction::Next => list.next(),
        NavigationAction::Previous => list.previous(),
        NavigationAction::ToTop => list.first(),
        NavigationAction::ToBottom => list.last(),
        NavigationAction::PageDown => list.page_down(page_size),
        NavigationAction::PageUp => list.page_up(page_size),
    }
}

fn reduce_review(state: &mut AppState, review: &ReviewAction, commands: &mut Vec<Command>) {
    let unit = review.unit();
    let key = unit.key();

    if !state.list.contains(&key) {
        log::warn!("Ignoring {:?}: {} is no longer listed", review, unit);
        return;
    }

    let Some(operation) = review.operation() else {
        state.overlay = Overlay::Details {
            unit: unit.clone(),
            details: DetailsState::Loading,
        };
        commands.push(Command::FetchDetails(unit.clone()));
        return;
    };

    if operation.is_tracked() {
        let count = state.tracker.mark_in_progress(&key);
        log::debug!("{} has {} operation(s) in progress", key, count);
        state.spinner.start();
    }
    if operation.removes_unit() {
        state.list.remove(&key);
    }

    state
        .status_bar
        .running(operation.running_message(unit), operation.label());
    commands.push(Command::Run {
        unit: unit.clone(),
        operation,
    });
}

fn reduce_completion(state: &mut AppState, completion: &Completion) {
    let Completion {
        unit,
        operation,
        outcome,
    } = completion;

    if operation.is_tracked() {
        let key = unit.key();
        state.tracker.mark_done(&key);
        if state.tracker.is_in_progress(&key) {
            log::debug!("{} still has operations in progress", key);
        }
    }
    if !state.tracker.has_work_in_progress() {
        state.spinner.stop();
    }

    match outcome {
        Ok(message) => state.status_bar.success(message.clone(), operation.label()),
        Err(error) => state
            .status_bar
            .error(format!("{}: {}", unit, error), operation.label()),
    }
}

fn reduce_details(
    state: &mut AppState,
    unit: &ReviewUnit,
    details: &Result<PullRequestDetails, String>,
) {
    let showing_unit = matches!(
        &state.overlay,
        Overlay::Details { unit: shown, .. } if shown.key() == unit.key()
    );

    if showing_unit {
        state.overlay = Overlay::Details {
            unit: unit.clone(),
            details: match details {
                Ok(details) => DetailsState::Loaded(details.clone()),
                Err(error) => DetailsState::Failed(error.clone()),
            },
        };
    } else if let Err(error) = details {
        state
            .status_bar
            .error(format!("{}: {}", unit, error), "Details");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Operation;
    use crate::state::StatusKind;
    use gh_dependabot_client::MergeMethod;
    use pretty_assertions::assert_eq;

    fn unit(number: u64) -> ReviewUnit {
        ReviewUnit::new("org/app", number, format!("Bump dep{}", number))
    }

    fn state_with(count: u64) -> AppState {
        AppState::new("org:org", (1..=count).map(unit).collect())
    }

    fn numbers(state: &AppState) -> Vec<u64> {
        state.list.units.iter().map(|u| u.number).collect()
    }

    fn finished(unit: ReviewUnit, operation: Operation, outcome: Result<&str, &str>) -> Action {
        Action::OperationFinished(Completion {
            unit,
            operation,
            outcome: outcome.map(str::to_string).map_err(str::to_string),
        })
    }

    #[test]
    fn test_merge_removes_unit_and_tracks_operation() {
        let state = state_with(3);
        let target = unit(2);

        let (state, commands) = reduce(
            state,
            &Action::Review(ReviewAction::Merge(target.clone(), MergeMethod::Rebase)),
        );

        assert_eq!(numbers(&state), vec![1, 3]);
        assert_eq!(state.tracker.count(&target.key()), 1);
        assert!(state.spinner.is_active());
        assert_eq!(
            commands,
            vec![Command::Run {
                unit: target,
                operation: Operation::Merge(MergeMethod::Rebase),
            }]
        );
    }

    #[test]
    fn test_failed_merge_clears_tracker_and_keeps_unit_removed() {
        let target = unit(1);
        let (state, _) = reduce(
            state_with(2),
            &Action::Review(ReviewAction::Merge(target.clone(), MergeMethod::Squash)),
        );

        let (state, commands) = reduce(
            state,
            &finished(
                target.clone(),
                Operation::Merge(MergeMethod::Squash),
                Err("status 405: Pull Request is not mergeable"),
            ),
        );

        assert!(commands.is_empty());
        assert_eq!(numbers(&state), vec![2]);
        assert_eq!(state.tracker.count(&target.key()), 0);
        assert!(!state.tracker.has_work_in_progress());
        assert!(!state.spinner.is_active());
        let status = state.status_bar.latest().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(
            status.message,
            "org/app#1: status 405: Pull Request is not mergeable"
        );
    }

    #[test]
    fn test_successful_merge_reports_status() {
        let target = unit(1);
        let (state, _) = reduce(
            state_with(1),
            &Action::Review(ReviewAction::Merge(target.clone(), MergeMethod::Rebase)),
        );
        assert!(state.list.is_empty());

        let (state, _) = reduce(
            state,
            &finished(
                target,
                Operation::Merge(MergeMethod::Rebase),
                Ok("Merged https://github.com/org/app/pull/1 (rebase)"),
            ),
        );

        assert!(!state.spinner.is_active());
        let status = state.status_bar.latest().unwrap();
        assert_eq!(status.kind, StatusKind::Success);
        assert_eq!(status.source, "Merge");
    }

    #[test]
    fn test_rebase_and_recreate_keep_unit() {
        let target = unit(1);
        let (state, _) = reduce(
            state_with(2),
            &Action::Review(ReviewAction::Rebase(target.clone())),
        );
        let (state, commands) = reduce(
            state,
            &Action::Review(ReviewAction::Recreate(target.clone())),
        );

        assert_eq!(numbers(&state), vec![1, 2]);
        assert_eq!(state.tracker.count(&target.key()), 2);
        assert_eq!(commands.len(), 1);

        let (state, _) = reduce(state, &finished(target.clone(), Operation::Rebase, Ok("ok")));
        assert_eq!(state.tracker.count(&target.key()), 1);
        assert!(state.spinner.is_active());

        let (state, _) = reduce(state, &finished(target.clone(), Operation::Recreate, Err("boom")));
        assert_eq!(state.tracker.count(&target.key()), 0);
        assert!(!state.spinner.is_active());
    }

    #[test]
    fn test_close_removes_without_tracking() {
        let target = unit(2);
        let (state, commands) = reduce(
            state_with(2),
            &Action::Review(ReviewAction::Close(target.clone())),
        );

        assert_eq!(numbers(&state), vec![1]);
        assert!(!state.tracker.has_work_in_progress());
        assert!(!state.spinner.is_active());
        assert_eq!(
            commands,
            vec![Command::Run {
                unit: target.clone(),
                operation: Operation::Close,
            }]
        );

        let (state, _) = reduce(state, &finished(target, Operation::Close, Err("forbidden")));
        assert!(!state.tracker.has_work_in_progress());
        assert_eq!(state.status_bar.latest().unwrap().kind, StatusKind::Error);
    }

    #[test]
    fn test_browse_and_copy_leave_list_untouched() {
        let target = unit(1);
        let (state, browse) = reduce(
            state_with(2),
            &Action::Review(ReviewAction::Browse(target.clone())),
        );
        let (state, copy) = reduce(
            state,
            &Action::Review(ReviewAction::CopyCheckout(target.clone())),
        );

        assert_eq!(numbers(&state), vec![1, 2]);
        assert!(!state.tracker.has_work_in_progress());
        assert_eq!(browse.len(), 1);
        assert_eq!(copy.len(), 1);
    }

    #[test]
    fn test_untracked_completion_leaves_other_work_running() {
        let merging = unit(1);
        let browsing = unit(2);
        let (state, _) = reduce(
            state_with(2),
            &Action::Review(ReviewAction::Merge(merging.clone(), MergeMethod::Rebase)),
        );

        let (state, _) = reduce(state, &finished(browsing, Operation::Browse, Ok("Opened")));

        assert_eq!(state.tracker.count(&merging.key()), 1);
        assert!(state.spinner.is_active());
    }

    #[test]
    fn test_failure_keeps_spinner_while_other_work_runs() {
        let merging = unit(1);
        let rebasing = unit(2);
        let (state, _) = reduce(
            state_with(2),
            &Action::Review(ReviewAction::Merge(merging.clone(), MergeMethod::Squash)),
        );
        let (state, _) = reduce(
            state,
            &Action::Review(ReviewAction::Rebase(rebasing.clone())),
        );

        let (state, _) = reduce(
            state,
            &finished(
                merging.clone(),
                Operation::Merge(MergeMethod::Squash),
                Err("not mergeable"),
            ),
        );

        assert!(state.spinner.is_active());
        assert_eq!(state.tracker.count(&merging.key()), 0);
        assert_eq!(state.tracker.count(&rebasing.key()), 1);
        assert_eq!(numbers(&state), vec![2]);
        assert_eq!(state.status_bar.latest().unwrap().kind, StatusKind::Error);

        let (state, _) = reduce(state, &finished(rebasing, Operation::Rebase, Ok("ok")));
        assert!(!state.spinner.is_active());
    }

    #[test]
    fn test_duplicate_completion_is_harmless() {
        let target = unit(1);
        let (state, _) = reduce(
            state_with(1),
            &Action::Review(ReviewAction::Merge(target.clone(), MergeMethod::Merge)),
        );
        let completion = finished(target.clone(), Operation::Merge(MergeMethod::Merge), Ok("ok"));

        let (state, _) = reduce(state, &completion);
        let (state, _) = reduce(state, &completion);

        assert_eq!(state.tracker.count(&target.key()), 0);
        assert!(!state.tracker.has_work_in_progress());
    }

    #[test]
    fn test_action_on_unit_no_longer_listed_is_ignored() {
        let target = unit(1);
        let (state, _) = reduce(
            state_with(1),
            &Action::Review(ReviewAction::Close(target.clone())),
        );

        let (state, commands) = reduce(
            state,
            &Action::Review(ReviewAction::Merge(target.clone(), MergeMethod::Rebase)),
        );

        assert!(commands.is_empty());
        assert!(!state.tracker.has_work_in_progress());
    }

    #[test]
    fn test_removal_clamps_cursor() {
        let mut state = state_with(3);
        state.list.last();
        let (state, _) = reduce(state, &Action::Review(ReviewAction::Close(unit(3))));
        assert_eq!(state.list.selected_unit().map(|u| u.number), Some(2));
    }

    #[test]
    fn test_view_details_opens_overlay_and_fetches() {
        let target = unit(1);
        let (state, commands) = reduce(
            state_with(1),
            &Action::Review(ReviewAction::ViewDetails(target.clone())),
        );

        assert_eq!(commands, vec![Command::FetchDetails(target.clone())]);
        assert_eq!(
            state.overlay,
            Overlay::Details {
                unit: target.clone(),
                details: DetailsState::Loading,
            }
        );

        let details = PullRequestDetails {
            author: "dependabot[bot]".to_string(),
            ..Default::default()
        };
        let (state, _) = reduce(
            state,
            &Action::DetailsLoaded {
                unit: target.clone(),
                details: Ok(details.clone()),
            },
        );
        assert_eq!(
            state.overlay,
            Overlay::Details {
                unit: target,
                details: DetailsState::Loaded(details),
            }
        );
    }

    #[test]
    fn test_late_details_after_overlay_closed() {
        let target = unit(1);
        let (state, _) = reduce(
            state_with(1),
            &Action::Review(ReviewAction::ViewDetails(target.clone())),
        );
        let (state, _) = reduce(state, &Action::Global(GlobalAction::Close));
        assert!(state.running);
        assert_eq!(state.overlay, Overlay::None);

        let (state, _) = reduce(
            state,
            &Action::DetailsLoaded {
                unit: target,
                details: Err("not found".to_string()),
            },
        );
        assert_eq!(state.overlay, Overlay::None);
        assert_eq!(state.status_bar.latest().unwrap().kind, StatusKind::Error);
    }

    #[test]
    fn test_close_without_overlay_quits() {
        let (state, _) = reduce(state_with(1), &Action::Global(GlobalAction::Close));
        assert!(!state.running);
    }

    #[test]
    fn test_toggle_help() {
        let (state, _) = reduce(state_with(1), &Action::Global(GlobalAction::ToggleHelp));
        assert_eq!(state.overlay, Overlay::Help);
        let (state, _) = reduce(state, &Action::Global(GlobalAction::ToggleHelp));
        assert_eq!(state.overlay, Overlay::None);
    }

    #[test]
    fn test_resize_updates_layout_only() {
        let before = state_with(2);
        let (state, commands) = reduce(before.clone(), &Action::Resize { width: 100, height: 40 });
        assert!(commands.is_empty());
        assert_eq!(state.layout, ListLayout { width: 96, height: 38 });
        assert_eq!(state.list, before.list);
    }
}
