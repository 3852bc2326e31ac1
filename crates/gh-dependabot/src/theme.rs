//! Colors of the review screen
//!
//! Views never pick colors themselves; they ask the theme for the style of a
//! role (cursor row, key hint, busy marker, ...).

use crate::state::StatusKind;
use ratatui::style::{palette::tailwind, Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub screen: Color,
    pub surface: Color,
    pub text: Color,
    pub subtle: Color,
    pub dim: Color,
    pub accent: Color,
    pub busy: Color,
    pub done: Color,
    pub failed: Color,
    pub note: Color,
    pub cursor: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            screen: tailwind::ZINC.c950,
            surface: tailwind::ZINC.c800,
            text: tailwind::ZINC.c100,
            subtle: tailwind::ZINC.c300,
            dim: tailwind::ZINC.c500,
            accent: tailwind::EMERALD.c400,
            busy: tailwind::AMBER.c400,
            done: tailwind::GREEN.c400,
            failed: tailwind::ROSE.c500,
            note: tailwind::SKY.c400,
            cursor: tailwind::INDIGO.c600,
        }
    }
}

impl Theme {
    /// Whole-window background
    pub fn screen(&self) -> Style {
        Style::default().bg(self.screen).fg(self.text)
    }

    /// Background of the status bar and overlays
    pub fn surface(&self) -> Style {
        Style::default().bg(self.surface).fg(self.text)
    }

    pub fn frame(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn key(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.subtle)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.dim)
    }

    /// Marker of units with operations in flight
    pub fn busy(&self) -> Style {
        Style::default().fg(self.busy)
    }

    /// Row under the cursor
    pub fn cursor(&self) -> Style {
        Style::default()
            .bg(self.cursor)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status(&self, kind: StatusKind) -> Style {
        match kind {
            StatusKind::Running => self.busy(),
            StatusKind::Success => Style::default().fg(self.done),
            StatusKind::Error => Style::default()
                .fg(self.failed)
                .add_modifier(Modifier::BOLD),
            StatusKind::Info => Style::default().fg(self.note),
        }
    }
}
