//! Status Bar Widget
//!
//! Format: `[timestamp] emoji message                     [source]`

use crate::state::StatusMessage;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    message: Option<&'a StatusMessage>,
    theme: &'a Theme,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: Option<&'a StatusMessage>, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.surface());

        let Some(message) = self.message else {
            return;
        };

        let source = format!("[{}] ", message.source);
        let source_width = u16::try_from(source.chars().count()).unwrap_or(u16::MAX);
        let [message_area, source_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(source_width)])
                .areas(area);

        Line::from(vec![
            Span::styled(
                format!(" [{}] ", message.timestamp.format("%H:%M:%S")),
                self.theme.dim(),
            ),
            Span::styled(
                format!("{} {}", message.kind.emoji(), message.message),
                self.theme.status(message.kind),
            ),
        ])
        .render(message_area, buf);

        Span::styled(source, self.theme.dim()).render(source_area, buf);
    }
}
