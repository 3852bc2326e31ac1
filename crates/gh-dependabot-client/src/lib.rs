//! GitHub client for Dependabot pull requests
//!
//! The `DependabotClient` trait is the seam between the application and
//! GitHub. `OctocrabClient` implements it against the real API; tests
//! provide in-memory fakes.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │           DependabotClient trait          │
//! │  - search_pull_requests()                 │
//! │  - merge / rebase / recreate / close      │
//! │  - fetch_details()                        │
//! └──────────────────────────────────────────┘
//!                     │
//!                     ▼
//!            ┌─────────────────┐
//!            │ OctocrabClient  │
//!            └─────────────────┘
//! ```
//!
//! Side effects on the local machine (browser, clipboard) live behind the
//! separate `Desktop` trait.

pub mod client;
pub mod desktop;
pub mod error;
pub mod octocrab_client;
pub mod query;
pub mod token;
pub mod types;

pub use client::DependabotClient;
pub use desktop::{Desktop, SystemDesktop};
pub use error::{ClientError, Result};
pub use octocrab_client::OctocrabClient;
pub use query::SearchQuery;
pub use token::TokenResolver;
pub use types::{MergeMethod, PullRequestDetails, SearchItem, SearchPage};
