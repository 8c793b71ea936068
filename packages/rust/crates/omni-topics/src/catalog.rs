//! Authored catalog definitions and their YAML form.
//!
//! ```yaml
//! categories:
//!   - title: Hooks
//!     topics:
//!       - title: useState
//!         content: "..."
//!         tags: [hooks, state]
//!         difficulty: beginner
//!         prerequisites: [components]
//! ```
//!
//! Definitions are accepted as-is: duplicate titles, thin bodies and
//! dangling prerequisites are left for the validator.

use crate::error::TopicsError;
use crate::index::{CategoryIndex, build_index};
use crate::types::{
    Category, Difficulty, Topic, TopicMetadataOverrides, create_category, create_topic,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One authored topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDefinition {
    /// Topic title; the key is derived from it.
    pub title: String,
    /// Opaque body.
    #[serde(default)]
    pub content: String,
    /// Tags, duplicates dropped on build.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Difficulty; intermediate when omitted.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Keys of prerequisite topics.
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl TopicDefinition {
    /// Run the entity builder over this definition.
    #[must_use]
    pub fn into_topic(self) -> Topic {
        let mut overrides = TopicMetadataOverrides::new()
            .with_tags(self.tags)
            .with_prerequisites(self.prerequisites);
        overrides.difficulty = self.difficulty;
        create_topic(self.title, self.content, overrides)
    }
}

/// One authored category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    /// Category title.
    pub title: String,
    /// Topics in display order.
    #[serde(default)]
    pub topics: Vec<TopicDefinition>,
}

impl CategoryDefinition {
    /// Run the entity builder over this category and its topics.
    #[must_use]
    pub fn into_category(self) -> Category {
        let topics = self
            .topics
            .into_iter()
            .map(TopicDefinition::into_topic)
            .collect();
        create_category(self.title, topics)
    }
}

/// The whole authored body of content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDefinition {
    /// Categories in display order.
    #[serde(default)]
    pub categories: Vec<CategoryDefinition>,
}

impl CatalogDefinition {
    /// Parse a YAML catalog.
    ///
    /// # Errors
    ///
    /// Returns [`TopicsError::Parse`] when the YAML does not match the
    /// catalog shape.
    pub fn from_yaml_str(content: &str) -> Result<Self, TopicsError> {
        serde_yaml::from_str(content).map_err(|e| TopicsError::parse("<inline>", &e))
    }

    /// Read and parse a YAML catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`TopicsError::Io`] when the file cannot be read and
    /// [`TopicsError::Parse`] when it is not a valid catalog.
    pub fn load(path: &Path) -> Result<Self, TopicsError> {
        let content = std::fs::read_to_string(path).map_err(|source| TopicsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content)
            .map_err(|e| TopicsError::parse(path.display().to_string(), &e))
    }

    /// Build every category, preserving order.
    #[must_use]
    pub fn into_categories(self) -> Vec<Category> {
        self.categories
            .into_iter()
            .map(CategoryDefinition::into_category)
            .collect()
    }

    /// Build categories and fold them into an index.
    #[must_use]
    pub fn build_index(self) -> CategoryIndex {
        build_index(self.into_categories())
    }
}
