//! Read-only accessors over a built [`CategoryIndex`].
//!
//! Tag and difficulty lookups re-scan the indexed topics on every call; no
//! secondary index or cache is kept.
//!
//! Scans walk the hierarchy in authored order and keep only topics the key
//! lookup still points at, so results match a scan of the lookup values but
//! come back in a stable order.

use crate::index::CategoryIndex;
use crate::types::{Difficulty, Topic};

impl CategoryIndex {
    /// Topic stored under `key`, if any.
    #[must_use]
    pub fn get_topic(&self, key: &str) -> Option<&Topic> {
        self.location_of(key)
            .and_then(|location| self.topic_at(location))
    }

    /// Every key in the lookup.
    #[must_use]
    pub fn get_all_topic_keys(&self) -> Vec<String> {
        self.indexed_topics().map(|t| t.key.clone()).collect()
    }

    /// Indexed topics whose tag set contains `tag`.
    #[must_use]
    pub fn get_topics_by_tag(&self, tag: &str) -> Vec<&Topic> {
        self.indexed_topics()
            .filter(|topic| topic.metadata.has_tag(tag))
            .collect()
    }

    /// Indexed topics at `difficulty`.
    #[must_use]
    pub fn get_topics_by_difficulty(&self, difficulty: Difficulty) -> Vec<&Topic> {
        self.indexed_topics()
            .filter(|topic| topic.difficulty() == difficulty)
            .collect()
    }
}

/// See [`CategoryIndex::get_topic`].
#[must_use]
pub fn get_topic<'a>(index: &'a CategoryIndex, key: &str) -> Option<&'a Topic> {
    index.get_topic(key)
}

/// See [`CategoryIndex::get_all_topic_keys`].
#[must_use]
pub fn get_all_topic_keys(index: &CategoryIndex) -> Vec<String> {
    index.get_all_topic_keys()
}

/// See [`CategoryIndex::get_topics_by_tag`].
#[must_use]
pub fn get_topics_by_tag<'a>(index: &'a CategoryIndex, tag: &str) -> Vec<&'a Topic> {
    index.get_topics_by_tag(tag)
}

/// See [`CategoryIndex::get_topics_by_difficulty`].
#[must_use]
pub fn get_topics_by_difficulty(index: &CategoryIndex, difficulty: Difficulty) -> Vec<&Topic> {
    index.get_topics_by_difficulty(difficulty)
}
