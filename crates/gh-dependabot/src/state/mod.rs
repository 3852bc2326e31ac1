//! Application State Module

mod app;
mod review_list;
mod status_bar;

pub use app::{
    AppState, DetailsState, ListLayout, Overlay, PADDING_HORIZONTAL, PADDING_VERTICAL,
};
pub use review_list::ReviewListState;
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
