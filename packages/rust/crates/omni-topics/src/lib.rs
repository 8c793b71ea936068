//! omni-topics - Topic catalog indexing and content integrity validation.
//!
//! Module layout (leaf-first):
//! - `slug`: Canonical keys from free-text titles
//! - `types`: Topic, Category, difficulty and metadata defaults
//! - `index`: Ordered hierarchy plus flat key lookup
//! - `validate`: Duplicate / title / content / prerequisite checks
//! - `query`: Read-only lookups by key, tag and difficulty
//! - `catalog`: Authored YAML definitions
//! - `config`: Validation settings
//!
//! The index is built once from authored categories and is immutable
//! afterwards; pass it by reference to whatever needs it.
//!
//! # Examples
//!
//! ```rust
//! use omni_topics::{
//!     Difficulty, TopicMetadataOverrides, ValidationConfig, build_index, create_category,
//!     create_topic, run_validation,
//! };
//!
//! let index = build_index(vec![create_category(
//!     "Hooks",
//!     vec![create_topic(
//!         "useState",
//!         "Declares a state variable that survives re-renders of the component.",
//!         TopicMetadataOverrides::new()
//!             .with_tags(["hooks"])
//!             .with_difficulty(Difficulty::Beginner),
//!     )],
//! )]);
//!
//! assert!(index.get_topic("usestate").is_some());
//! assert_eq!(index.get_topics_by_tag("hooks").len(), 1);
//!
//! let report = run_validation(&index, &ValidationConfig::default());
//! assert!(report.is_clean());
//! ```

// ---------------------------------------------------------------------------
// Core pipeline
// ---------------------------------------------------------------------------
mod index;
mod query;
mod slug;
mod types;
mod validate;

// ---------------------------------------------------------------------------
// Loading boundary
// ---------------------------------------------------------------------------
mod catalog;
mod config;
mod error;

// ---------------------------------------------------------------------------
// Public re-exports (crate API)
// ---------------------------------------------------------------------------
pub use catalog::{CatalogDefinition, CategoryDefinition, TopicDefinition};
pub use config::{DEFAULT_MIN_CONTENT_CHARS, ValidationConfig};
pub use error::TopicsError;
pub use index::{CategoryIndex, TopicIndexStats, TopicLocation, build_index};
pub use query::{get_all_topic_keys, get_topic, get_topics_by_difficulty, get_topics_by_tag};
pub use slug::{is_canonical_key, slugify};
pub use types::{
    Category, Difficulty, Topic, TopicMetadata, TopicMetadataOverrides, create_category,
    create_topic,
};
pub use validate::{
    Diagnostic, DiagnosticKind, ValidationReport, run_validation, validate, validate_with,
};
