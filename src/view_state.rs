//! Per-request view state
//!
//! The active tab, the filter selection and the chosen study topic travel in
//! the query string of each request. Nothing is kept on the server between
//! requests, so concurrent viewers never see each other's state.

use url::form_urlencoded;

use crate::catalog::Catalog;
use crate::filter::TagSelection;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Works,
    Analysis,
    Submit,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Works, Tab::Analysis, Tab::Submit];

    /// Unknown values fall back to the works tab
    pub fn parse(s: &str) -> Self {
        match s {
            "analysis" => Tab::Analysis,
            "submit" => Tab::Submit,
            _ => Tab::Works,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Works => "works",
            Tab::Analysis => "analysis",
            Tab::Submit => "submit",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Works => "🎨 优秀作品",
            Tab::Analysis => "📊 成果分析",
            Tab::Submit => "💡 作品征集",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub tab: Tab,
    pub selection: TagSelection,
    /// Study topic picked in the sidebar, if it is one the catalog lists
    pub topic: Option<String>,
}

impl ViewState {
    pub fn with_tab(tab: Tab) -> Self {
        Self {
            tab,
            ..Default::default()
        }
    }

    /// Parse `tab=`, repeated `tag=` and `topic=` from a raw query string
    pub fn from_query(query: Option<&str>, catalog: &Catalog) -> Self {
        let mut tab = Tab::default();
        let mut tags: Vec<String> = Vec::new();
        let mut topic = None;

        for (key, value) in form_urlencoded::parse(query.unwrap_or("").as_bytes()) {
            match key.as_ref() {
                "tab" => tab = Tab::parse(&value),
                "tag" => tags.push(value.into_owned()),
                "topic" => {
                    if catalog.theory_topics().iter().any(|t| *t == value) {
                        topic = Some(value.into_owned());
                    }
                }
                _ => {}
            }
        }

        Self {
            tab,
            selection: TagSelection::from_values(tags),
            topic,
        }
    }

    /// Query string for a link to `tab` that keeps the current filter
    pub fn query_for_tab(&self, tab: Tab) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("tab", tab.as_str());
        for tag in self.selection.tags() {
            serializer.append_pair("tag", tag);
        }
        serializer.finish()
    }

    /// Query string for a sidebar topic link that keeps tab and filter
    pub fn query_for_topic(&self, topic: &str) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("tab", self.tab.as_str());
        for tag in self.selection.tags() {
            serializer.append_pair("tag", tag);
        }
        serializer.append_pair("topic", topic);
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_query() {
        let catalog = Catalog::builtin().unwrap();
        let view = ViewState::from_query(None, &catalog);
        assert_eq!(view, ViewState::default());
        assert_eq!(view.tab, Tab::Works);
    }

    #[test]
    fn test_repeated_tags_are_collected() {
        let catalog = Catalog::builtin().unwrap();
        let query = "tab=works&tag=%E5%88%9B%E6%96%B0%E6%84%8F%E8%AF%86&tag=%E5%B7%A5%E5%8C%A0%E7%B2%BE%E7%A5%9E";
        let view = ViewState::from_query(Some(query), &catalog);
        assert_eq!(
            view.selection.tags(),
            &["创新意识".to_string(), "工匠精神".to_string()]
        );
    }

    #[test]
    fn test_unknown_tab_falls_back() {
        let catalog = Catalog::builtin().unwrap();
        let view = ViewState::from_query(Some("tab=settings"), &catalog);
        assert_eq!(view.tab, Tab::Works);
        let view = ViewState::from_query(Some("tab=analysis"), &catalog);
        assert_eq!(view.tab, Tab::Analysis);
    }

    #[test]
    fn test_unknown_topic_is_ignored() {
        let catalog = Catalog::builtin().unwrap();
        let view = ViewState::from_query(Some("topic=whatever"), &catalog);
        assert_eq!(view.topic, None);

        let known = &catalog.theory_topics()[0];
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("topic", known)
            .finish();
        let view = ViewState::from_query(Some(&query), &catalog);
        assert_eq!(view.topic.as_deref(), Some(known.as_str()));
    }

    #[test]
    fn test_tab_links_keep_selection() {
        let catalog = Catalog::builtin().unwrap();
        let mut view = ViewState::with_tab(Tab::Works);
        view.selection = TagSelection::from_values(["家国情怀"]);
        let query = view.query_for_tab(Tab::Analysis);
        let reparsed = ViewState::from_query(Some(&query), &catalog);
        assert_eq!(reparsed.tab, Tab::Analysis);
        assert_eq!(reparsed.selection, view.selection);
    }
}
