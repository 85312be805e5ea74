/// Article cards read straight from the rendered page

use crate::article::ArticleRecord;
use crate::browser::{query_all, query_one};
use crate::config::Selectors;
use crate::extract::{ArticleSource, extract_articles};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement};

struct DomArticle<'a> {
    element: Element,
    selectors: &'a Selectors,
}

impl DomArticle<'_> {
    fn title_link(&self) -> Option<Element> {
        query_one(&self.element, &self.selectors.title_link)
    }
}

impl ArticleSource for DomArticle<'_> {
    fn title(&self) -> Option<String> {
        self.title_link()
            .map(|link| link.text_content().unwrap_or_default())
    }

    fn link(&self) -> Option<String> {
        let link = self.title_link()?;
        match link.dyn_ref::<HtmlAnchorElement>() {
            Some(anchor) => Some(anchor.href()),
            None => link.get_attribute("href"),
        }
    }

    fn description(&self) -> Option<String> {
        query_one(&self.element, &self.selectors.description)
            .map(|description| description.text_content().unwrap_or_default())
    }

    fn keywords(&self) -> Vec<String> {
        query_all(&self.element, &self.selectors.keyword)
            .into_iter()
            .filter_map(|tag| tag.text_content())
            .collect()
    }
}

/// Every article card on the page, visible or not, in document order
pub fn read_articles(document: &Document, selectors: &Selectors) -> Vec<ArticleRecord> {
    let cards = query_all(document, &selectors.article);
    extract_articles(
        cards
            .into_iter()
            .map(|element| DomArticle { element, selectors }),
    )
}
