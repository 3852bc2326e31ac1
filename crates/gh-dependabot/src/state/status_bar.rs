//! Status Bar State

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Kind of status message (determines icon and color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Operation started
    Running,
    /// Operation completed successfully
    Success,
    /// Operation failed
    Error,
    /// Informational message
    Info,
}

impl StatusKind {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Running => "⏳",
            Self::Success => "✅",
            Self::Error => "🚨",
            Self::Info => "ℹ️",
        }
    }
}

/// A single status message with metadata
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub timestamp: DateTime<Local>,
    pub kind: StatusKind,
    pub message: String,
    /// Name of the operation that produced the message
    pub source: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, message: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            message: message.into(),
            source: source.into(),
        }
    }
}

/// Status bar state - history of messages, newest at the back
#[derive(Debug, Clone)]
pub struct StatusBarState {
    pub messages: VecDeque<StatusMessage>,
    /// Maximum messages to keep
    pub max_history: usize,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self::with_history(100)
    }
}

impl StatusBarState {
    pub fn with_history(max_history: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            max_history: max_history.max(1),
        }
    }

    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.back()
    }

    /// Push a new message, trimming the oldest if over the limit
    pub fn push(&mut self, message: StatusMessage) {
        self.messages.push_back(message);
        while self.messages.len() > self.max_history {
            self.messages.pop_front();
        }
    }

    pub fn running(&mut self, message: impl Into<String>, source: impl Into<String>) {
        self.push(StatusMessage::new(StatusKind::Running, message, source));
    }

    pub fn success(&mut self, message: impl Into<String>, source: impl Into<String>) {
        self.push(StatusMessage::new(StatusKind::Success, message, source));
    }

    pub fn error(&mut self, message: impl Into<String>, source: impl Into<String>) {
        self.push(StatusMessage::new(StatusKind::Error, message, source));
    }

    pub fn info(&mut self, message: impl Into<String>, source: impl Into<String>) {
        self.push(StatusMessage::new(StatusKind::Info, message, source));
    }
}
