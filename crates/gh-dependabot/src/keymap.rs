pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Navigation
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("g g", "gg", NavigateToTop),
        KeyBinding::new("home", "Home", NavigateToTop),
        KeyBinding::new("G", "G", NavigateToBottom),
        KeyBinding::new("end", "End", NavigateToBottom),
        KeyBinding::new("pagedown", "PgDn", NavigatePageDown),
        KeyBinding::new("pageup", "PgUp", NavigatePageUp),
        // Review
        KeyBinding::new("enter", "Enter", MergeRebase),
        KeyBinding::new("ctrl+m", "Ctrl+M", MergeCommit),
        KeyBinding::new("M", "M", MergeSquash),
        KeyBinding::new("alt+m", "Alt+M", MergeDependabot),
        KeyBinding::new("r", "r", Rebase),
        KeyBinding::new("R", "R", Recreate),
        KeyBinding::new("C", "C", Close),
        KeyBinding::new("o", "o", OpenInBrowser),
        KeyBinding::new("v", "v", ViewDetails),
        KeyBinding::new("c", "c", CopyCheckout),
        // General
        KeyBinding::new("?", "?", ToggleHelp),
        KeyBinding::new("esc", "Esc", GlobalClose),
        KeyBinding::new("q", "q", GlobalClose),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(bindings)
}
