/// View controller: which top-level section is visible, and the state behind it
///
/// The page shows exactly one of three things at a time: the all-stories
/// section, one category section, or the search results. Every transition
/// goes through [`ViewController`], which owns the [`ViewState`] and drives the
/// page through the [`Page`] trait.
use crate::article::{ArticleIndex, ArticleRecord};
use crate::search::{search, SearchQuery};
use crate::url_state::ALL_CATEGORY;
use log::{debug, info, warn};

/// A top-level section of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section<'a> {
    AllStories,
    Category(&'a str),
    SearchResults,
}

impl<'a> Section<'a> {
    pub fn for_category(category: &'a str) -> Section<'a> {
        if category == ALL_CATEGORY {
            Section::AllStories
        } else {
            Section::Category(category)
        }
    }
}

/// What the page is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Display {
    All,
    Category(String),
    Search(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Last category shown outside of search, `all` or a category with a section
    pub active_category: String,
    /// Query of the visible search results, if any
    pub search: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        ViewState {
            active_category: ALL_CATEGORY.to_string(),
            search: None,
        }
    }

    pub fn search_active(&self) -> bool {
        self.search.is_some()
    }

    pub fn display(&self) -> Display {
        match &self.search {
            Some(query) => Display::Search(query.clone()),
            None if self.active_category == ALL_CATEGORY => Display::All,
            None => Display::Category(self.active_category.clone()),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the controller needs from the rendered page
pub trait Page {
    fn has_section(&self, section: Section<'_>) -> bool;

    /// Hide every top-level section, search results included
    fn hide_all_sections(&mut self);

    fn show_section(&mut self, section: Section<'_>);

    /// Fill the results section (creating it hidden on first use).
    /// Returns false when there is nowhere to put it.
    fn render_search_results(&mut self, query: &SearchQuery, results: &[&ArticleRecord]) -> bool;

    /// Mark the nav control of `category` active, or none of them
    fn set_active_nav(&mut self, category: Option<&str>);

    /// Record `category` in the URL without navigating
    fn replace_url_category(&mut self, category: &str);

    fn touch_last_viewed(&mut self);
}

pub struct ViewController<P: Page> {
    page: P,
    index: ArticleIndex,
    state: ViewState,
}

impl<P: Page> ViewController<P> {
    pub fn new(page: P, index: ArticleIndex) -> Self {
        ViewController {
            page,
            index,
            state: ViewState::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn index(&self) -> &ArticleIndex {
        &self.index
    }

    /// Initial view: all stories, then the category from the URL if there is one
    pub fn init(&mut self, url_category: Option<&str>) {
        self.show_category(ALL_CATEGORY);

        if let Some(category) = url_category.filter(|c| *c != ALL_CATEGORY) {
            self.show_category(category);
        }
    }

    /// Show `category` (or all stories for `all`), leaving any search view.
    ///
    /// An id without a section changes nothing and returns false.
    pub fn show_category(&mut self, category: &str) -> bool {
        let section = Section::for_category(category);

        if !self.page.has_section(section) {
            warn!("No section for category {:?}, keeping current view", category);
            return false;
        }

        self.page.hide_all_sections();
        self.page.show_section(section);
        self.page.set_active_nav(Some(category));
        self.page.replace_url_category(category);
        self.page.touch_last_viewed();

        self.state.active_category = category.to_string();
        self.state.search = None;

        info!("Category viewed: {}", category);
        true
    }

    /// Search the index and show the results; an empty query leaves search instead
    pub fn perform_search(&mut self, input: &str) -> bool {
        let Some(query) = SearchQuery::parse(input) else {
            debug!("Empty query, returning to {}", self.state.active_category);
            self.clear_search();
            return false;
        };

        let results = search(&self.index, &query);
        info!("Search {:?}: {} of {} articles", query.as_str(), results.len(), self.index.len());

        if !self.page.render_search_results(&query, &results) {
            warn!("Search results could not be rendered, keeping current view");
            return false;
        }

        self.page.hide_all_sections();
        self.page.show_section(Section::SearchResults);
        self.page.set_active_nav(None);

        self.state.search = Some(query.as_str().to_string());
        true
    }

    /// Leave the search view and return to the last category
    pub fn clear_search(&mut self) {
        let category = self.state.active_category.clone();

        if !self.show_category(&category) && category != ALL_CATEGORY {
            self.show_category(ALL_CATEGORY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_state::{category_from_url, url_with_category};
    use std::collections::HashSet;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum Visible {
        All,
        Category(String),
        Results,
    }

    impl From<Section<'_>> for Visible {
        fn from(section: Section<'_>) -> Self {
            match section {
                Section::AllStories => Visible::All,
                Section::Category(id) => Visible::Category(id.to_string()),
                Section::SearchResults => Visible::Results,
            }
        }
    }

    struct TestPage {
        categories: Vec<&'static str>,
        visible: HashSet<Visible>,
        has_results: bool,
        can_render: bool,
        active_nav: Option<String>,
        url: String,
        rendered: Vec<(String, Vec<String>)>,
        last_viewed_updates: usize,
    }

    impl TestPage {
        fn new(url: &str) -> Self {
            TestPage {
                categories: vec!["latest", "tech", "cloud"],
                // Server-rendered page shows everything before the controller runs
                visible: [
                    Visible::All,
                    Visible::Category("latest".to_string()),
                    Visible::Category("tech".to_string()),
                ]
                .into_iter()
                .collect(),
                has_results: false,
                can_render: true,
                active_nav: None,
                url: url.to_string(),
                rendered: Vec::new(),
                last_viewed_updates: 0,
            }
        }

        fn only_visible(&self) -> Visible {
            assert_eq!(self.visible.len(), 1, "visible sections: {:?}", self.visible);
            self.visible.iter().next().unwrap().clone()
        }
    }

    impl Page for TestPage {
        fn has_section(&self, section: Section<'_>) -> bool {
            match section {
                Section::AllStories => true,
                Section::Category(id) => self.categories.iter().any(|c| *c == id),
                Section::SearchResults => self.has_results,
            }
        }

        fn hide_all_sections(&mut self) {
            self.visible.clear();
        }

        fn show_section(&mut self, section: Section<'_>) {
            if self.has_section(section) {
                self.visible.insert(section.into());
            }
        }

        fn render_search_results(&mut self, query: &SearchQuery, results: &[&ArticleRecord]) -> bool {
            if !self.can_render {
                return false;
            }
            self.has_results = true;
            self.rendered.push((
                query.as_str().to_string(),
                results.iter().map(|r| r.title.clone()).collect(),
            ));
            true
        }

        fn set_active_nav(&mut self, category: Option<&str>) {
            self.active_nav = category.map(str::to_string);
        }

        fn replace_url_category(&mut self, category: &str) {
            self.url = url_with_category(&self.url, category).unwrap();
        }

        fn touch_last_viewed(&mut self) {
            self.last_viewed_updates += 1;
        }
    }

    fn create_test_index() -> ArticleIndex {
        ArticleIndex::new(vec![
            ArticleRecord::new(
                "IBM Cloud AI".to_string(),
                "new release".to_string(),
                vec!["ai".to_string(), "cloud".to_string()],
                "https://example.com/1".to_string(),
                0,
            ),
            ArticleRecord::new(
                "Quantum news".to_string(),
                "IBM quantum chip".to_string(),
                vec!["quantum".to_string()],
                "https://example.com/2".to_string(),
                1,
            ),
        ])
    }

    fn create_controller(url: &str) -> ViewController<TestPage> {
        let mut controller = ViewController::new(TestPage::new(url), create_test_index());
        controller.init(category_from_url(url).as_deref());
        controller
    }

    #[test]
    fn test_init_defaults_to_all() {
        let controller = create_controller("https://news.example.com/");

        assert_eq!(controller.page().only_visible(), Visible::All);
        assert_eq!(controller.page().active_nav.as_deref(), Some("all"));
        assert_eq!(controller.state().display(), Display::All);
        assert_eq!(controller.page().url, "https://news.example.com/");
    }

    #[test]
    fn test_init_from_url_category() {
        let controller = create_controller("https://news.example.com/?category=tech");

        assert_eq!(controller.page().only_visible(), Visible::Category("tech".to_string()));
        assert_eq!(controller.page().active_nav.as_deref(), Some("tech"));
        assert_eq!(controller.state().display(), Display::Category("tech".to_string()));
    }

    #[test]
    fn test_init_with_unknown_category_stays_on_all() {
        let controller = create_controller("https://news.example.com/?category=sports");

        assert_eq!(controller.page().only_visible(), Visible::All);
        assert_eq!(controller.state().active_category, "all");
    }

    #[test]
    fn test_show_category_updates_url_and_nav() {
        let mut controller = create_controller("https://news.example.com/");

        assert!(controller.show_category("tech"));
        assert_eq!(controller.page().url, "https://news.example.com/?category=tech");
        assert_eq!(controller.page().active_nav.as_deref(), Some("tech"));

        assert!(controller.show_category("all"));
        assert_eq!(controller.page().url, "https://news.example.com/");
        assert_eq!(controller.page().only_visible(), Visible::All);
    }

    #[test]
    fn test_show_category_is_idempotent() {
        let mut controller = create_controller("https://news.example.com/");

        controller.show_category("cloud");
        let visible = controller.page().only_visible();
        let state = controller.state().clone();
        let url = controller.page().url.clone();

        controller.show_category("cloud");
        assert_eq!(controller.page().only_visible(), visible);
        assert_eq!(controller.state(), &state);
        assert_eq!(controller.page().url, url);
    }

    #[test]
    fn test_unknown_category_is_noop() {
        let mut controller = create_controller("https://news.example.com/?category=tech");
        let updates = controller.page().last_viewed_updates;

        assert!(!controller.show_category("sports"));
        assert_eq!(controller.page().only_visible(), Visible::Category("tech".to_string()));
        assert_eq!(controller.page().url, "https://news.example.com/?category=tech");
        assert_eq!(controller.page().last_viewed_updates, updates);
        assert_eq!(controller.state().active_category, "tech");
    }

    #[test]
    fn test_url_round_trip() {
        let mut controller = create_controller("https://news.example.com/");
        controller.show_category("tech");

        let reloaded = create_controller(&controller.page().url.clone());
        assert_eq!(reloaded.page().only_visible(), controller.page().only_visible());
        assert_eq!(reloaded.state(), controller.state());
    }

    #[test]
    fn test_perform_search() {
        let mut controller = create_controller("https://news.example.com/?category=tech");

        assert!(controller.perform_search("ibm cloud"));
        assert_eq!(controller.page().only_visible(), Visible::Results);
        assert_eq!(controller.page().active_nav, None);
        assert_eq!(controller.state().display(), Display::Search("ibm cloud".to_string()));
        assert_eq!(controller.state().active_category, "tech");
        assert_eq!(
            controller.page().rendered.last(),
            Some(&("ibm cloud".to_string(), vec!["IBM Cloud AI".to_string()]))
        );
        // URL keeps the category the search started from
        assert_eq!(controller.page().url, "https://news.example.com/?category=tech");
    }

    #[test]
    fn test_search_without_results_still_shows_results_view() {
        let mut controller = create_controller("https://news.example.com/");

        assert!(controller.perform_search("mainframe"));
        assert_eq!(controller.page().only_visible(), Visible::Results);
        assert_eq!(controller.page().rendered.last().unwrap().1.len(), 0);
    }

    #[test]
    fn test_repeated_search_replaces_results() {
        let mut controller = create_controller("https://news.example.com/");

        controller.perform_search("ibm");
        controller.perform_search("quantum");

        assert_eq!(controller.page().rendered.len(), 2);
        assert_eq!(controller.page().only_visible(), Visible::Results);
        assert_eq!(controller.state().search.as_deref(), Some("quantum"));
    }

    #[test]
    fn test_empty_search_returns_to_category() {
        let mut controller = create_controller("https://news.example.com/?category=cloud");
        controller.perform_search("ibm");

        assert!(!controller.perform_search("   "));
        assert_eq!(controller.page().only_visible(), Visible::Category("cloud".to_string()));
        assert_eq!(controller.page().active_nav.as_deref(), Some("cloud"));
        assert!(!controller.state().search_active());
        assert_eq!(controller.page().rendered.len(), 1);
    }

    #[test]
    fn test_clear_search_restores_category() {
        let mut controller = create_controller("https://news.example.com/");
        controller.show_category("latest");
        controller.perform_search("quantum");

        controller.clear_search();

        assert_eq!(controller.page().only_visible(), Visible::Category("latest".to_string()));
        assert_eq!(controller.page().active_nav.as_deref(), Some("latest"));
        assert_eq!(controller.state().display(), Display::Category("latest".to_string()));
    }

    #[test]
    fn test_clear_search_falls_back_to_all() {
        let mut controller = create_controller("https://news.example.com/?category=tech");
        controller.perform_search("ibm");
        controller.page.categories.retain(|c| *c != "tech");

        controller.clear_search();

        assert_eq!(controller.page().only_visible(), Visible::All);
        assert_eq!(controller.state().active_category, "all");
    }

    #[test]
    fn test_category_click_leaves_search() {
        let mut controller = create_controller("https://news.example.com/");
        controller.perform_search("ibm");

        controller.show_category("tech");

        assert_eq!(controller.page().only_visible(), Visible::Category("tech".to_string()));
        assert!(!controller.state().search_active());
    }

    #[test]
    fn test_render_failure_keeps_view() {
        let mut controller = create_controller("https://news.example.com/?category=tech");
        controller.page.can_render = false;

        assert!(!controller.perform_search("ibm"));
        assert_eq!(controller.page().only_visible(), Visible::Category("tech".to_string()));
        assert!(!controller.state().search_active());
    }

    #[test]
    fn test_exactly_one_visible_after_any_sequence() {
        let mut controller = create_controller("https://news.example.com/");
        let steps = [
            "show tech",
            "search ibm",
            "show sports",
            "clear",
            "search ",
            "search quantum chip",
            "show all",
            "clear",
            "search zzz",
            "show latest",
            "show latest",
        ];

        for step in steps {
            match step.split_once(' ') {
                Some(("show", category)) => {
                    controller.show_category(category);
                }
                Some(("search", query)) => {
                    controller.perform_search(query);
                }
                _ => controller.clear_search(),
            }
            controller.page().only_visible();
        }
    }
}
