//! Flat key lookup over the ordered category hierarchy.

use crate::types::{Category, Difficulty, Topic};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Position of a topic inside [`CategoryIndex::categories`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TopicLocation {
    /// Index into the category list.
    pub category: usize,
    /// Index into that category's topic list.
    pub topic: usize,
}

/// The built knowledge base: ordered hierarchy plus key lookup.
///
/// The lookup maps each key to the *last* topic carrying it, while the
/// hierarchy keeps every authored topic. Consumers iterating
/// [`categories`](Self::categories) can therefore meet a topic that
/// [`get_topic`](Self::get_topic) does not return.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    categories: Vec<Category>,
    topic_index: HashMap<String, TopicLocation>,
}

/// Index composition counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicIndexStats {
    /// Number of categories
    pub category_count: usize,
    /// Number of authored topics, shadowed ones included
    pub topic_count: usize,
    /// Number of distinct keys in the lookup
    pub unique_key_count: usize,
    /// Topics hidden from the lookup by a later topic with the same key
    pub shadowed_topic_count: usize,
    /// Indexed topics per difficulty label
    pub topics_by_difficulty: BTreeMap<String, usize>,
    /// Indexed topics per tag
    pub tag_counts: BTreeMap<String, usize>,
}

/// Fold categories into a [`CategoryIndex`].
///
/// Keys are inserted in iteration order, so a later topic silently replaces
/// an earlier one with the same key. Nothing is rejected here.
#[must_use]
pub fn build_index(categories: Vec<Category>) -> CategoryIndex {
    let mut topic_index: HashMap<String, TopicLocation> = HashMap::new();

    for (category_idx, category) in categories.iter().enumerate() {
        for (topic_idx, topic) in category.topics.iter().enumerate() {
            let location = TopicLocation {
                category: category_idx,
                topic: topic_idx,
            };
            if let Some(previous) = topic_index.insert(topic.key.clone(), location) {
                debug!(
                    "Topic key '{}' at {}:{} shadows {}:{}",
                    topic.key, category_idx, topic_idx, previous.category, previous.topic
                );
            }
        }
    }

    let index = CategoryIndex {
        categories,
        topic_index,
    };
    info!(
        "Built topic index: {} categories, {} topics, {} keys",
        index.categories.len(),
        index.topic_count(),
        index.topic_index.len()
    );
    index
}

impl CategoryIndex {
    /// Categories in authored order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Every authored topic in order, shadowed ones included.
    pub fn iter_topics(&self) -> impl Iterator<Item = (TopicLocation, &Topic)> {
        self.categories
            .iter()
            .enumerate()
            .flat_map(|(category_idx, category)| {
                category
                    .topics
                    .iter()
                    .enumerate()
                    .map(move |(topic_idx, topic)| {
                        (
                            TopicLocation {
                                category: category_idx,
                                topic: topic_idx,
                            },
                            topic,
                        )
                    })
            })
    }

    /// Topics reachable through the key lookup, in authored order.
    pub fn indexed_topics(&self) -> impl Iterator<Item = &Topic> {
        self.iter_topics()
            .filter(|(location, _)| !self.is_shadowed(*location))
            .map(|(_, topic)| topic)
    }

    /// Resolve a location to its topic.
    #[must_use]
    pub fn topic_at(&self, location: TopicLocation) -> Option<&Topic> {
        self.categories
            .get(location.category)
            .and_then(|category| category.topics.get(location.topic))
    }

    /// Where the lookup entry for `key` points.
    #[must_use]
    pub fn location_of(&self, key: &str) -> Option<TopicLocation> {
        self.topic_index.get(key).copied()
    }

    /// Whether `key` resolves in the lookup.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.topic_index.contains_key(key)
    }

    /// Whether the topic at `location` is hidden by a later duplicate key.
    #[must_use]
    pub fn is_shadowed(&self, location: TopicLocation) -> bool {
        self.topic_at(location)
            .is_some_and(|topic| self.location_of(&topic.key) != Some(location))
    }

    /// Number of authored topics, shadowed ones included.
    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.categories.iter().map(|c| c.topics.len()).sum()
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.topic_index.len()
    }

    /// Whether the index holds no topics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topic_index.is_empty()
    }

    /// Composition counters over the hierarchy and the lookup.
    #[must_use]
    pub fn stats(&self) -> TopicIndexStats {
        let mut stats = TopicIndexStats {
            category_count: self.categories.len(),
            topic_count: self.topic_count(),
            unique_key_count: self.key_count(),
            ..TopicIndexStats::default()
        };
        stats.shadowed_topic_count = stats.topic_count - stats.unique_key_count;

        for level in Difficulty::ALL {
            stats.topics_by_difficulty.insert(level.to_string(), 0);
        }
        for topic in self.indexed_topics() {
            *stats
                .topics_by_difficulty
                .entry(topic.difficulty().to_string())
                .or_insert(0) += 1;
            for tag in &topic.metadata.tags {
                *stats.tag_counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }
        stats
    }
}
