//! Catalog record types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One showcased work, rendered as a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub authors: String,
    pub tech_highlight: String,
    /// Ideology tags in display order. Matched by exact string.
    pub ideology: Vec<String>,
    pub description: String,
    pub achievement: String,
    pub impact: String,
    pub completed_on: NaiveDate,
}

impl ProjectRecord {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.ideology.iter().any(|t| t == tag)
    }
}

/// Label/count pair of a fixed distribution used for charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub label: String,
    pub count: u32,
}

/// A competition with the award tiers won in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardSummary {
    pub name: String,
    pub awards: Vec<String>,
    pub year: String,
}

/// Headline counter with a fixed value and delta annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub icon: String,
    pub label: String,
    pub value: String,
    pub delta: String,
}

/// Sidebar navigation destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub key: String,
    pub icon: String,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub title: String,
    pub icon: String,
    pub subtitle: String,
    pub sidebar_motto: String,
}
