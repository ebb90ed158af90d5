//! Ideology tag filter over the project list

use serde::{Deserialize, Serialize};

use crate::catalog::ProjectRecord;

/// Tags chosen in the filter control. An empty selection means "show all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSelection(Vec<String>);

impl TagSelection {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a selection from raw control values.
    ///
    /// Values are trimmed, blanks dropped, and duplicates collapsed keeping the
    /// first occurrence.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags: Vec<String> = Vec::new();
        for value in values {
            let tag = value.as_ref().trim();
            if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        Self(tags)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn tags(&self) -> &[String] {
        &self.0
    }

    /// True when the record shares at least one tag with the selection
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        self.0.iter().any(|tag| record.has_tag(tag))
    }
}

/// Records whose tags intersect the selection, in source order.
///
/// An empty selection returns every record.
pub fn filter_projects<'a>(
    projects: &'a [ProjectRecord],
    selection: &TagSelection,
) -> Vec<&'a ProjectRecord> {
    if selection.is_empty() {
        return projects.iter().collect();
    }
    projects.iter().filter(|p| selection.matches(p)).collect()
}
