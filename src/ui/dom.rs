//! Small DOM helpers shared by the controllers
//!
//! Queries never fail loudly: an invalid selector or a missing element simply yields
//! nothing, which is how every controller expresses "not on this page".

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, NodeList};

/// Failure of a browser API call
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomError {
    #[error("DOM call failed: {0}")]
    Js(String),

    #[error("Document has no {0}")]
    Missing(&'static str),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(js_error_message(&value))
    }
}

/// Best-effort readable text for a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// First element matching `selector`
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Every element matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Add or remove a class
pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let result = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(e) = result {
        leptos::logging::warn!("Failed to update class '{}': {}", class, js_error_message(&e));
    }
}

/// An event listener that is removed when dropped
pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
    pub fn new<T: AsRef<EventTarget>>(
        target: &T,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, DomError> {
        let target = target.as_ref().clone();
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;

        Ok(Self {
            target,
            event,
            callback,
        })
    }

    /// Remove the listener
    pub fn detach(self) {}
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Bind `handler` to every element, skipping those that refuse the listener
pub fn bind_all(
    elements: &[Element],
    event: &'static str,
    handler: impl Fn(&Element, Event) + Clone + 'static,
) -> Vec<EventBinding> {
    elements
        .iter()
        .filter_map(|element| {
            let handler = handler.clone();
            let target = element.clone();
            EventBinding::new(element, event, move |ev| handler(&target, ev))
                .map_err(|e| leptos::logging::warn!("Failed to bind '{}': {}", event, e))
                .ok()
        })
        .collect()
}
