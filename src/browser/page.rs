/// The live page behind the view controller

use crate::article::ArticleRecord;
use crate::browser::{query_all, query_one, set_display};
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::search::SearchQuery;
use crate::ui::results::{SearchResults, SearchResultsProps};
use crate::url_state::url_with_category;
use crate::view::{Page, Section};
use log::warn;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};
use yew::AppHandle;
use yew::virtual_dom::AttrValue;

pub struct DomPage {
    window: Window,
    document: Document,
    config: Rc<DashboardConfig>,
    /// Results app and the section it is mounted on
    results_app: Option<(Element, AppHandle<SearchResults>)>,
}

impl DomPage {
    pub fn new(window: Window, document: Document, config: Rc<DashboardConfig>) -> Self {
        DomPage {
            window,
            document,
            config,
            results_app: None,
        }
    }

    fn section_element(&self, section: Section<'_>) -> Option<Element> {
        let selectors = &self.config.selectors;
        match section {
            Section::AllStories => query_one(&self.document, &selectors.all_stories),
            Section::Category(category) => self
                .document
                .get_element_by_id(&selectors.section_id(category)),
            Section::SearchResults => self
                .document
                .get_element_by_id(&selectors.results_section_id),
        }
    }

    /// The results section, created hidden inside the main container on first use
    fn results_section(&self) -> Result<Element, DashboardError> {
        let selectors = &self.config.selectors;
        if let Some(section) = self.section_element(Section::SearchResults) {
            return Ok(section);
        }

        let main = query_one(&self.document, &selectors.main)
            .ok_or_else(|| DashboardError::missing(selectors.main.as_str()))?;

        let section = self.document.create_element("section")?;
        section.set_id(&selectors.results_section_id);
        section.set_class_name("category-section search-results");
        set_display(&section, "none");
        main.append_child(&section)?;

        Ok(section)
    }

    fn replace_url(&self, category: &str) -> Result<(), DashboardError> {
        let href = self.window.location().href()?;
        let url = url_with_category(&href, category)?;
        self.window
            .history()?
            .replace_state_with_url(&JsValue::NULL, "", Some(&url))?;
        Ok(())
    }
}

impl Page for DomPage {
    fn has_section(&self, section: Section<'_>) -> bool {
        self.section_element(section).is_some()
    }

    fn hide_all_sections(&mut self) {
        for section in query_all(&self.document, &self.config.selectors.all_sections()) {
            set_display(&section, "none");
        }
    }

    fn show_section(&mut self, section: Section<'_>) {
        if let Some(element) = self.section_element(section) {
            set_display(&element, "block");
        }
    }

    fn render_search_results(&mut self, query: &SearchQuery, results: &[&ArticleRecord]) -> bool {
        let section = match self.results_section() {
            Ok(section) => section,
            Err(e) => {
                warn!("No place for search results: {}", e);
                return false;
            }
        };

        let props = SearchResultsProps {
            query: AttrValue::from(query.as_str().to_string()),
            results: results.iter().map(|record| (*record).clone()).collect(),
        };

        match self.results_app.as_mut() {
            Some((root, app)) if *root == section => app.update(props),
            _ => {
                // A fresh section has no app on it yet; the old one went with its root
                let app = yew::Renderer::<SearchResults>::with_root_and_props(section.clone(), props)
                    .render();
                self.results_app = Some((section, app));
            }
        }

        true
    }

    fn set_active_nav(&mut self, category: Option<&str>) {
        let selectors = &self.config.selectors;
        for button in query_all(&self.document, &selectors.nav_button) {
            let active = category.is_some_and(|category| {
                button.get_attribute(&selectors.category_attribute).as_deref() == Some(category)
            });
            if let Err(e) = button.class_list().toggle_with_force("active", active) {
                warn!("Could not update nav state: {:?}", e);
            }
        }
    }

    fn replace_url_category(&mut self, category: &str) {
        if let Err(e) = self.replace_url(category) {
            warn!("Could not update URL for {:?}: {}", category, e);
        }
    }

    fn touch_last_viewed(&mut self) {
        let Some(slot) = query_one(&self.document, &self.config.selectors.last_viewed) else {
            return;
        };

        let now = js_sys::Date::new_0();
        let time = String::from(now.to_locale_string("default", &JsValue::UNDEFINED));
        slot.set_text_content(Some(&format!("Last viewed: {}", time)));
    }
}
