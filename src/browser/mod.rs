/// Browser wiring: DOM access, event listeners and the shared dashboard state
///
/// Everything here runs on the page's single event loop. Handlers borrow the
/// shared [`Dashboard`] only for the duration of one synchronous step, never
/// across an `.await`.

mod page;
mod source;

pub use page::DomPage;
pub use source::read_articles;

use crate::article::ArticleIndex;
use crate::config::DashboardConfig;
use crate::debounce::Debouncer;
use crate::error::DashboardError;
use crate::shortcuts::{KeyPress, Shortcut, is_text_input_tag, resolve};
use crate::ui::search_box::{SearchBox, SearchBoxProps};
use crate::url_state::category_from_url;
use crate::view::ViewController;
use log::{debug, info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent, NodeList,
    VisibilityState, Window,
};
use yew::platform::time::sleep;
use yew::prelude::Callback;

/// Id of an optional inline JSON config block
pub const CONFIG_SCRIPT_ID: &str = "dashboard-config";

struct Dashboard {
    controller: ViewController<DomPage>,
    debounce: Debouncer<String>,
    config: Rc<DashboardConfig>,
}

type Shared = Rc<RefCell<Dashboard>>;

/// Start the dashboard now, or once the document has finished parsing
pub fn start(config_value: JsValue) -> Result<(), DashboardError> {
    let window = web_sys::window().ok_or_else(|| DashboardError::missing("window"))?;
    let document = window
        .document()
        .ok_or_else(|| DashboardError::missing("document"))?;

    if document.ready_state() == "loading" {
        let ready_document = document.clone();
        let on_ready = Closure::once_into_js(move || {
            let config = load_config(config_value, &ready_document);
            if let Err(e) = mount(window, ready_document, config) {
                warn!("Dashboard failed to start: {}", e);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(());
    }

    let config = load_config(config_value, &document);
    mount(window, document, config).map(|_| ())
}

/// Config from the `start_dashboard` argument, then the inline JSON block, then defaults
pub fn load_config(value: JsValue, document: &Document) -> DashboardConfig {
    if !value.is_undefined() && !value.is_null() {
        match serde_wasm_bindgen::from_value::<DashboardConfig>(value) {
            Ok(config) => return config,
            Err(e) => warn!(
                "Ignoring config argument: {}",
                DashboardError::ConfigValue(e.to_string())
            ),
        }
    }

    if let Some(script) = document.get_element_by_id(CONFIG_SCRIPT_ID) {
        match DashboardConfig::from_json(&script.text_content().unwrap_or_default()) {
            Ok(config) => return config,
            Err(e) => warn!("Ignoring inline config: {}", e),
        }
    }

    DashboardConfig::default()
}

fn mount(window: Window, document: Document, config: DashboardConfig) -> Result<Shared, DashboardError> {
    let config = Rc::new(config);
    let shared = create_dashboard(&window, &document, config.clone());

    if let Err(e) = mount_search_box(&shared, &document, &config) {
        warn!("Search box not mounted: {}", e);
    }
    wire_navigation(&shared, &document, &config)?;
    wire_shortcuts(&shared, &document)?;

    let url_category = window
        .location()
        .href()
        .ok()
        .and_then(|href| category_from_url(&href));
    shared.borrow_mut().controller.init(url_category.as_deref());

    if let Some(interval) = config.auto_refresh_interval() {
        spawn_local(async move {
            loop {
                sleep(interval).await;
                let visible = window
                    .document()
                    .is_some_and(|document| document.visibility_state() == VisibilityState::Visible);
                if visible {
                    if let Err(e) = window.location().reload() {
                        warn!("Auto refresh failed: {:?}", e);
                    }
                }
            }
        });
    }

    Ok(shared)
}

/// Index the page and build the shared state, without touching the DOM
fn create_dashboard(window: &Window, document: &Document, config: Rc<DashboardConfig>) -> Shared {
    let index = ArticleIndex::new(read_articles(document, &config.selectors));
    info!("Indexed {} articles", index.len());

    let page = DomPage::new(window.clone(), document.clone(), config.clone());
    Rc::new(RefCell::new(Dashboard {
        controller: ViewController::new(page, index),
        debounce: Debouncer::new(),
        config,
    }))
}

fn mount_search_box(
    shared: &Shared,
    document: &Document,
    config: &DashboardConfig,
) -> Result<(), DashboardError> {
    let selectors = &config.selectors;
    let nav = query_one(document, &selectors.nav_container)
        .ok_or_else(|| DashboardError::missing(selectors.nav_container.as_str()))?;
    let parent = nav
        .parent_node()
        .ok_or_else(|| DashboardError::missing("navigation parent"))?;

    let container = document.create_element("div")?;
    container.set_class_name("search-container");
    parent.insert_before(&container, nav.next_sibling().as_ref())?;

    let on_input = {
        let shared = shared.clone();
        Callback::from(move |value: String| schedule_search(&shared, value))
    };

    let on_submit = {
        let shared = shared.clone();
        Callback::from(move |value: String| {
            let dashboard = &mut *shared.borrow_mut();
            dashboard.debounce.cancel();
            dashboard.controller.perform_search(&value);
        })
    };

    let on_clear = {
        let shared = shared.clone();
        Callback::from(move |_: ()| {
            let dashboard = &mut *shared.borrow_mut();
            dashboard.debounce.cancel();
            dashboard.controller.clear_search();
        })
    };

    let props = SearchBoxProps {
        input_id: selectors.search_input_id.clone().into(),
        placeholder: config.search_placeholder.clone().into(),
        on_input,
        on_submit,
        on_clear,
    };
    yew::Renderer::<SearchBox>::with_root_and_props(container, props).render();

    Ok(())
}

/// Debounce a typed query; an emptied box leaves search straight away
fn schedule_search(shared: &Shared, value: String) {
    let query = value.trim().to_string();

    let (ticket, delay) = {
        let dashboard = &mut *shared.borrow_mut();
        if query.is_empty() {
            dashboard.debounce.cancel();
            dashboard.controller.clear_search();
            return;
        }
        (
            dashboard.debounce.schedule(query),
            dashboard.config.debounce_delay(),
        )
    };

    let shared = shared.clone();
    spawn_local(async move {
        sleep(delay).await;

        let dashboard = &mut *shared.borrow_mut();
        match dashboard.debounce.fire(ticket) {
            Some(query) => {
                dashboard.controller.perform_search(&query);
            }
            None => debug!("Search superseded by newer input"),
        }
    });
}

fn wire_navigation(
    shared: &Shared,
    document: &Document,
    config: &DashboardConfig,
) -> Result<(), DashboardError> {
    for button in query_all(document, &config.selectors.nav_button) {
        let shared = shared.clone();
        let attribute = config.selectors.category_attribute.clone();

        let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
            let category = e
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.get_attribute(&attribute));

            if let Some(category) = category {
                let dashboard = &mut *shared.borrow_mut();
                dashboard.debounce.cancel();
                dashboard.controller.show_category(&category);
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    Ok(())
}

fn wire_shortcuts(shared: &Shared, document: &Document) -> Result<(), DashboardError> {
    let shared = shared.clone();
    let key_document = document.clone();

    let on_keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        let in_text_input = e
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .is_some_and(|element| is_text_input_tag(&element.tag_name()));

        let press = KeyPress {
            key: e.key(),
            ctrl: e.ctrl_key(),
            meta: e.meta_key(),
            in_text_input,
        };

        let Some(shortcut) = resolve(&press) else {
            return;
        };
        debug!("Shortcut {:?}", shortcut);

        if shortcut.prevents_default() {
            e.prevent_default();
        }
        run_shortcut(&shared, &key_document, shortcut);
    }) as Box<dyn FnMut(KeyboardEvent)>);

    document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
    on_keydown.forget();

    Ok(())
}

fn run_shortcut(shared: &Shared, document: &Document, shortcut: Shortcut) {
    let dashboard = &mut *shared.borrow_mut();
    let input = search_input(document, &dashboard.config.selectors.search_input_id);

    match shortcut {
        Shortcut::FocusSearch => {
            if let Some(input) = input {
                let _ = input.focus();
            }
        }
        Shortcut::ClearSearch => {
            let has_text = input.as_ref().is_some_and(|input| !input.value().is_empty());
            if has_text || dashboard.controller.state().search_active() {
                if let Some(input) = input {
                    input.set_value("");
                }
                dashboard.debounce.cancel();
                dashboard.controller.clear_search();
            }
        }
        Shortcut::ShowAll | Shortcut::ShowLatest => {
            if let Some(category) = shortcut.category(&dashboard.config.latest_category) {
                dashboard.debounce.cancel();
                dashboard.controller.show_category(category);
            }
        }
    }
}

fn search_input(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
}

/// Roots that can be queried with CSS selectors
pub(crate) trait QueryRoot {
    fn select_one(&self, selector: &str) -> Result<Option<Element>, JsValue>;
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue>;
}

impl QueryRoot for Document {
    fn select_one(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl QueryRoot for Element {
    fn select_one(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

pub(crate) fn query_one(root: &impl QueryRoot, selector: &str) -> Option<Element> {
    match root.select_one(selector) {
        Ok(element) => element,
        Err(e) => {
            warn!("Bad selector {:?}: {:?}", selector, e);
            None
        }
    }
}

/// Elements matching `selector` in document order
pub(crate) fn query_all(root: &impl QueryRoot, selector: &str) -> Vec<Element> {
    match root.select_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(e) => {
            warn!("Bad selector {:?}: {:?}", selector, e);
            Vec::new()
        }
    }
}

pub(crate) fn set_display(element: &Element, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        if let Err(e) = element.style().set_property("display", value) {
            warn!("Could not set display on #{}: {:?}", element.id(), e);
        }
    }
}
