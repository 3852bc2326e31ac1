//! Rendering
//!
//! Views read `AppState` and never mutate it.

mod details_view;
mod help_view;
mod review_list_view;
mod status_bar;

pub use status_bar::StatusBarWidget;

use crate::state::{AppState, Overlay, PADDING_HORIZONTAL, PADDING_VERTICAL};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    widgets::Block,
    Frame,
};

/// Render the whole screen
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    f.render_widget(Block::default().style(state.theme.screen()), area);

    let area = area.inner(Margin {
        horizontal: PADDING_HORIZONTAL,
        vertical: PADDING_VERTICAL,
    });
    let [list_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    review_list_view::render(state, list_area, f);
    f.render_widget(
        StatusBarWidget::new(state.status_bar.latest(), &state.theme),
        status_area,
    );

    match &state.overlay {
        Overlay::None => {}
        Overlay::Help => help_view::render(state, area, f),
        Overlay::Details { unit, details } => {
            details_view::render(unit, details, &state.theme, area, f)
        }
    }
}

/// Centered area taking the given share of `area`, bounded by `max`
fn popup_area(area: Rect, percent: (u16, u16), max: (u16, u16)) -> Rect {
    let share = |length: u16, percent: u16| {
        u16::try_from(u32::from(length) * u32::from(percent) / 100).unwrap_or(length)
    };
    let width = share(area.width, percent.0).min(max.0).min(area.width);
    let height = share(area.height, percent.1).min(max.1).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
