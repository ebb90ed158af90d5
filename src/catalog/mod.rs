//! Fixed showcase catalog
//!
//! Every table the page shows (projects, distributions, awards, metrics,
//! navigation, vocabularies) lives in one YAML document that is parsed once at
//! startup and shared read-only afterwards. Accessors are pure and return the
//! same data on every call.

mod model;

pub use model::{AwardSummary, DistributionEntry, Metric, NavLink, PageInfo, ProjectRecord};

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;

/// Catalog compiled into the binary
const BUILTIN_CATALOG: &str = include_str!("../../data/showcase.yaml");

/// Immutable showcase tables
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    page: PageInfo,
    navigation: Vec<NavLink>,
    ideology_vocabulary: Vec<String>,
    submission_categories: Vec<String>,
    accepted_extensions: Vec<String>,
    metrics: Vec<Metric>,
    theory_topics: Vec<String>,
    weekly_focus: Vec<String>,
    call_requirements: Vec<String>,
    projects: Vec<ProjectRecord>,
    ideology_distribution: Vec<DistributionEntry>,
    project_types: Vec<DistributionEntry>,
    awards: Vec<AwardSummary>,
}

impl Catalog {
    /// Parse the catalog shipped with the crate
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUILTIN_CATALOG)
    }

    /// Load a catalog from a YAML file with the same schema as the builtin one
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(content)?;
        catalog.check()?;
        Ok(catalog)
    }

    /// Builtin catalog unless an override path is given
    pub fn load(override_path: Option<&Path>) -> Result<Self, CatalogError> {
        match override_path {
            Some(path) => Self::from_path(path),
            None => Self::builtin(),
        }
    }

    fn check(&self) -> Result<(), CatalogError> {
        if self.projects.is_empty() {
            return Err(CatalogError::NoProjects);
        }

        let required: [(&'static str, usize); 3] = [
            ("ideology_vocabulary", self.ideology_vocabulary.len()),
            ("submission_categories", self.submission_categories.len()),
            ("accepted_extensions", self.accepted_extensions.len()),
        ];
        for (field, len) in required {
            if len == 0 {
                return Err(CatalogError::EmptyVocabulary { field });
            }
        }

        let mut seen = HashSet::new();
        for tag in &self.ideology_vocabulary {
            if !seen.insert(tag.as_str()) {
                return Err(CatalogError::DuplicateEntry {
                    field: "ideology_vocabulary",
                    value: tag.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn page(&self) -> &PageInfo {
        &self.page
    }

    pub fn navigation(&self) -> &[NavLink] {
        &self.navigation
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn ideology_distribution(&self) -> &[DistributionEntry] {
        &self.ideology_distribution
    }

    pub fn project_types(&self) -> &[DistributionEntry] {
        &self.project_types
    }

    pub fn awards(&self) -> &[AwardSummary] {
        &self.awards
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Tags offered by the filter control and the submission form
    pub fn ideology_vocabulary(&self) -> &[String] {
        &self.ideology_vocabulary
    }

    pub fn submission_categories(&self) -> &[String] {
        &self.submission_categories
    }

    /// Attachment extensions, lowercase, without the leading dot
    pub fn accepted_extensions(&self) -> &[String] {
        &self.accepted_extensions
    }

    pub fn theory_topics(&self) -> &[String] {
        &self.theory_topics
    }

    pub fn weekly_focus(&self) -> &[String] {
        &self.weekly_focus
    }

    pub fn call_requirements(&self) -> &[String] {
        &self.call_requirements
    }

    /// Whether a file name carries one of the accepted extensions
    pub fn accepts_attachment(&self, file_name: &str) -> bool {
        let Some((_, ext)) = file_name.rsplit_once('.') else {
            return false;
        };
        let ext = ext.to_ascii_lowercase();
        self.accepted_extensions.iter().any(|accepted| *accepted == ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.projects().len(), 8);
        assert_eq!(catalog.awards().len(), 4);
        assert_eq!(catalog.metrics().len(), 4);
        assert_eq!(catalog.navigation().len(), 4);
        assert_eq!(catalog.ideology_vocabulary().len(), 8);
        assert_eq!(catalog.submission_categories().len(), 5);
        assert_eq!(catalog.ideology_distribution().len(), 6);
        assert_eq!(catalog.project_types().len(), 4);
    }

    #[test]
    fn test_builtin_catalog_is_stable_across_loads() {
        let first = Catalog::builtin().unwrap();
        let second = Catalog::builtin().unwrap();
        assert_eq!(first.projects(), second.projects());
        assert_eq!(first.ideology_distribution(), second.ideology_distribution());
    }

    #[test]
    fn test_project_dates_parse() {
        let catalog = Catalog::builtin().unwrap();
        let first = &catalog.projects()[0];
        assert_eq!(first.title, "智能图像增强系统");
        assert_eq!(
            first.completed_on,
            NaiveDate::from_ymd_opt(2024, 8, 11).unwrap()
        );
    }

    #[test]
    fn test_distribution_order_is_preserved() {
        let catalog = Catalog::builtin().unwrap();
        let labels: Vec<&str> = catalog
            .project_types()
            .iter()
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(labels, vec!["技术创新类", "社会服务类", "文化传承类", "国家战略类"]);
    }

    #[test]
    fn test_accepts_attachment() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.accepts_attachment("report.pdf"));
        assert!(catalog.accepts_attachment("Slides.PPTX"));
        assert!(catalog.accepts_attachment("code.tar.zip"));
        assert!(!catalog.accepts_attachment("photo.png"));
        assert!(!catalog.accepts_attachment("README"));
    }

    #[test]
    fn test_rejects_catalog_without_projects() {
        let yaml = BUILTIN_CATALOG.replace("projects:\n", "unused_projects:\n");
        let yaml = format!("{}\nprojects: []\n", yaml);
        let err = Catalog::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, CatalogError::NoProjects));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = Catalog::from_yaml_str("projects: [").unwrap_err();
        assert!(matches!(err, CatalogError::Yaml(_)));
    }

    #[test]
    fn test_missing_override_file() {
        let err = Catalog::from_path("/nonexistent/showcase.yaml").unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
