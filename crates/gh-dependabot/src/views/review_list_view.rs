use crate::command_id::CommandId;
use crate::state::AppState;
use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Commands advertised in the list footer
const FOOTER_COMMANDS: [(CommandId, &str); 5] = [
    (CommandId::MergeRebase, "merge"),
    (CommandId::Rebase, "rebase"),
    (CommandId::Close, "close"),
    (CommandId::OpenInBrowser, "open"),
    (CommandId::ToggleHelp, "help"),
];

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let mut title = vec![Span::styled(format!(" {} ", state.title()), theme.heading())];
    if state.spinner.is_active() {
        title.push(Span::styled(
            format!("{} ", state.spinner.symbol()),
            theme.busy(),
        ));
    }

    let mut footer = vec![Span::raw(" ")];
    for (command, label) in FOOTER_COMMANDS {
        if let Some(hint) = state.keymap.compact_hint_for_command(command) {
            footer.push(Span::styled(hint, theme.key()));
            footer.push(Span::styled(format!(" {}  ", label), theme.dim()));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.frame())
        .title(Line::from(title))
        .title_bottom(Line::from(footer));

    if state.list.is_empty() {
        let empty = Paragraph::new("No pull requests")
            .style(theme.dim())
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let now = Utc::now();
    let items: Vec<ListItem> = state
        .list
        .units
        .iter()
        .map(|unit| {
            let marker = match state.tracker.count(&unit.key()) {
                0 => Span::raw("   "),
                1 => Span::styled("⏳ ", theme.busy()),
                n => Span::styled(format!("⏳{}", n), theme.busy()),
            };
            ListItem::new(vec![
                Line::from(vec![marker, Span::raw(unit.title.clone())]),
                Line::from(Span::styled(
                    format!("   {} · updated {}", unit, relative_time(unit.updated_at, now)),
                    theme.dim(),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.cursor())
        .highlight_symbol("▌");

    let mut list_state = ListState::default().with_selected(Some(state.list.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}

/// Human description of how long ago `then` was
fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let (amount, unit) = if elapsed.num_days() > 0 {
        (elapsed.num_days(), "day")
    } else if elapsed.num_hours() > 0 {
        (elapsed.num_hours(), "hour")
    } else if elapsed.num_minutes() > 0 {
        (elapsed.num_minutes(), "minute")
    } else {
        return "just now".to_string();
    };

    if amount == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", amount, unit)
    }
}
