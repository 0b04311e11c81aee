//! Smooth scrolling for same-page anchor links

use crate::core::anchor::{ANCHOR_SELECTOR, fragment_selector, scroll_destination};
use crate::core::config::AnchorConfig;
use crate::core::navbar::NAVBAR_ID;
use crate::ui::dom::{self, EventBinding};
use leptos::prelude::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

pub struct SmoothScrollController {
    bindings: Vec<EventBinding>,
}

impl SmoothScrollController {
    pub fn attach(document: &Document, config: &AnchorConfig) -> Self {
        let margin = config.margin_px;
        let links = dom::query_all(document, ANCHOR_SELECTOR);
        let bindings = dom::bind_all(&links, "click", move |link, event| {
            scroll_to_anchor(link, &event, margin)
        });

        Self { bindings }
    }

    /// Number of links being handled
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn detach(self) {
        drop(self.bindings);
    }
}

/// Unresolvable targets (bare `#`, unknown id, malformed selector) keep the browser's
/// default behavior.
fn scroll_to_anchor(link: &Element, event: &Event, margin: f64) {
    let Some(href) = link.get_attribute("href") else {
        return;
    };
    let Some(selector) = fragment_selector(&href) else {
        return;
    };
    let Some(target) = dom::query(&document(), selector) else {
        return;
    };

    event.prevent_default();

    let navbar_height = document()
        .get_element_by_id(NAVBAR_ID)
        .and_then(|navbar| navbar.dyn_into::<HtmlElement>().ok())
        .map(|navbar| navbar.offset_height() as f64)
        .unwrap_or(0.0);
    let page_offset = window().scroll_y().unwrap_or(0.0);
    let top = scroll_destination(
        target.get_bounding_client_rect().top(),
        page_offset,
        navbar_height,
        margin,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
