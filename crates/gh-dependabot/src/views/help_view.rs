use super::popup_area;
use crate::state::AppState;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const CATEGORIES: [&str; 3] = ["Navigation", "Review", "General"];

/// Render all keybindings grouped by category
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let popup = popup_area(area, (70, 90), (80, 40));

    let mut lines = Vec::new();
    for category in CATEGORIES {
        lines.push(Line::from(Span::styled(category, theme.heading())));

        let mut seen = Vec::new();
        for binding in state.keymap.bindings() {
            let command = binding.command;
            if command.category() != category || seen.contains(&command) {
                continue;
            }
            seen.push(command);

            let hint = state
                .keymap
                .compact_hint_for_command(command)
                .unwrap_or_default();
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<14}", hint), theme.key()),
                Span::styled(command.description(), theme.text()),
            ]));
        }
        lines.push(Line::default());
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Key Bindings ")
        .title_style(theme.heading())
        .border_style(theme.frame())
        .style(theme.surface());

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        popup,
    );
}
