use super::popup_area;
use crate::domain_models::ReviewUnit;
use crate::state::{DetailsState, StatusKind};
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(unit: &ReviewUnit, details: &DetailsState, theme: &Theme, area: Rect, f: &mut Frame) {
    let popup = popup_area(area, (80, 80), (120, 50));

    let field = |name: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<10}", name), theme.key()),
            Span::styled(value, theme.text()),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(unit.title.clone(), theme.heading())),
        field("url", unit.url.clone()),
        field("package", unit.package().unwrap_or("-").to_string()),
    ];

    match details {
        DetailsState::Loading => {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Loading...", theme.dim())));
        }
        DetailsState::Failed(error) => {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                error.clone(),
                theme.status(StatusKind::Error),
            )));
        }
        DetailsState::Loaded(details) => {
            lines.push(field("author", details.author.clone()));
            lines.push(field("state", details.state.clone()));
            lines.push(field("branch", details.head_branch.clone()));
            if let Some(mergeable) = &details.mergeable_state {
                lines.push(field("mergeable", mergeable.clone()));
            }
            lines.push(Line::default());
            lines.extend(details.body.lines().map(|line| Line::from(line.to_string())));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", unit))
        .title_style(theme.heading())
        .border_style(theme.frame())
        .title_bottom(Line::from(vec![
            Span::styled(" Esc", theme.key()),
            Span::styled(" close ", theme.dim()),
        ]))
        .style(theme.surface());

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        popup,
    );
}
