//! Topic types - Topic, Category, Difficulty, and metadata defaults.

use crate::error::TopicsError;
use crate::slug::slugify;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty level of a topic.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Entry-level material.
    Beginner,
    /// Assumes working familiarity.
    #[default]
    Intermediate,
    /// Deep or specialist material.
    Advanced,
}

impl Difficulty {
    /// All levels, easiest first.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = TopicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(TopicsError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Classification metadata attached to every topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicMetadata {
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Ordered, duplicate-free tags.
    pub tags: Vec<String>,
    /// Keys of topics that should be read first. Not required to resolve.
    pub prerequisites: Vec<String>,
}

impl TopicMetadata {
    /// Apply overrides field by field; unset fields keep their current value.
    #[must_use]
    pub fn merged(mut self, overrides: TopicMetadataOverrides) -> Self {
        if let Some(difficulty) = overrides.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(tags) = overrides.tags {
            self.tags = Vec::with_capacity(tags.len());
            for tag in tags {
                self.add_tag(tag);
            }
        }
        if let Some(prerequisites) = overrides.prerequisites {
            self.prerequisites = prerequisites;
        }
        self
    }

    /// Add a tag unless it is already present.
    pub fn add_tag(&mut self, tag: String) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Whether the tag set contains `tag` (exact match).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Partial metadata supplied by authors. `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicMetadataOverrides {
    /// Replacement difficulty.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Replacement tag list.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Replacement prerequisite list.
    #[serde(default)]
    pub prerequisites: Option<Vec<String>>,
}

impl TopicMetadataOverrides {
    /// Empty overrides (all defaults).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Set tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set prerequisites.
    #[must_use]
    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = Some(prerequisites.into_iter().map(Into::into).collect());
        self
    }
}

/// A single unit of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Canonical key derived from `title`.
    pub key: String,
    /// Human-readable title
    pub title: String,
    /// Opaque body, never parsed here
    pub content: String,
    /// Classification metadata
    pub metadata: TopicMetadata,
}

impl Topic {
    /// Build a topic; the key always comes from [`slugify`] over `title`.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        overrides: TopicMetadataOverrides,
    ) -> Self {
        let title = title.into();
        Self {
            key: slugify(&title),
            title,
            content: content.into(),
            metadata: TopicMetadata::default().merged(overrides),
        }
    }

    /// Difficulty shortcut.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.metadata.difficulty
    }
}

/// An ordered, named group of topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display title
    pub title: String,
    /// Topics in display order
    pub topics: Vec<Topic>,
}

impl Category {
    /// Build a category, keeping topic order as given.
    #[must_use]
    pub fn new(title: impl Into<String>, topics: Vec<Topic>) -> Self {
        Self {
            title: title.into(),
            topics,
        }
    }
}

/// Construct a topic with metadata defaults applied. Never fails.
#[must_use]
pub fn create_topic(
    title: impl Into<String>,
    content: impl Into<String>,
    overrides: TopicMetadataOverrides,
) -> Topic {
    Topic::new(title, content, overrides)
}

/// Construct a category. Never fails.
#[must_use]
pub fn create_category(title: impl Into<String>, topics: Vec<Topic>) -> Category {
    Category::new(title, topics)
}
