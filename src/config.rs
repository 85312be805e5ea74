/// Dashboard configuration
///
/// Every field has a default matching the stock page template, so an empty
/// object (or no config at all) gives a working dashboard.
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Quiet period before a typed query is searched.
    pub debounce_ms: u32,
    /// Category opened by Ctrl/Cmd+2.
    pub latest_category: String,
    pub search_placeholder: String,
    /// Reload the page every N minutes while it is visible.
    pub auto_refresh_minutes: Option<u32>,
    pub selectors: Selectors,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            debounce_ms: 300,
            latest_category: "latest".to_string(),
            search_placeholder: "Search news...".to_string(),
            auto_refresh_minutes: None,
            selectors: Selectors::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<DashboardConfig, DashboardError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.debounce_ms))
    }

    pub fn auto_refresh_interval(&self) -> Option<Duration> {
        self.auto_refresh_minutes
            .filter(|minutes| *minutes > 0)
            .map(|minutes| Duration::from_secs(u64::from(minutes) * 60))
    }
}

/// Markup the dashboard expects from the page template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav_button: String,
    pub category_attribute: String,
    pub nav_container: String,
    pub all_stories: String,
    pub category_section: String,
    pub section_id_prefix: String,
    pub article: String,
    pub title_link: String,
    pub description: String,
    pub keyword: String,
    pub main: String,
    pub last_viewed: String,
    pub results_section_id: String,
    pub search_input_id: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Selectors {
            nav_button: ".nav-btn".to_string(),
            category_attribute: "data-category".to_string(),
            nav_container: ".category-nav".to_string(),
            all_stories: ".top-stories".to_string(),
            category_section: ".category-section".to_string(),
            section_id_prefix: "section-".to_string(),
            article: ".article-card, .article-item".to_string(),
            title_link: ".article-title a".to_string(),
            description: ".article-description".to_string(),
            keyword: ".keyword-tag".to_string(),
            main: ".dashboard-main".to_string(),
            last_viewed: ".update-info".to_string(),
            results_section_id: "search-results-section".to_string(),
            search_input_id: "search-input".to_string(),
        }
    }
}

impl Selectors {
    /// Element id of the section holding `category`
    pub fn section_id(&self, category: &str) -> String {
        format!("{}{}", self.section_id_prefix, category)
    }

    /// Every top-level section, search results included
    pub fn all_sections(&self) -> String {
        format!(
            "{}, {}, #{}",
            self.all_stories, self.category_section, self.results_section_id
        )
    }

    pub fn nav_button_for(&self, category: &str) -> String {
        format!("{}[{}=\"{}\"]", self.nav_button, self.category_attribute, category)
    }
}
