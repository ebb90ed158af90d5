//! Achievement Showcase - server-rendered project gallery
//!
//! A read-only dashboard over a fixed catalog of student projects:
//! tag filtering, two distribution charts, award summaries and a
//! submission form that validates input but never stores it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use achievement_showcase::{filter_projects, Catalog, TagSelection};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let selection = TagSelection::from_values(["创新意识"]);
//! let shown = filter_projects(catalog.projects(), &selection);
//! assert_eq!(shown.len(), 3);
//! ```

// Core error handling
pub mod error;

// Fixed data tables
pub mod catalog;

// Tag filtering and form validation
pub mod filter;
pub mod submission;

// Per-request view state and HTML rendering
pub mod ui;
pub mod view_state;

// Env-driven server settings
pub mod config;

// HTTP surface (when server feature is enabled)
#[cfg(feature = "server")]
pub mod api;

pub use catalog::{AwardSummary, Catalog, DistributionEntry, Metric, ProjectRecord};
pub use config::ServerConfig;
pub use error::{CatalogError, ConfigError, ShowcaseError};
pub use filter::{filter_projects, TagSelection};
pub use submission::{RequiredField, SubmissionDraft, SubmissionOutcome};
pub use view_state::{Tab, ViewState};

#[cfg(feature = "server")]
pub use api::{create_router, AppState, RouterOptions};
