//! Mobile navigation menu
//!
//! The toggle opens and closes the panel. Following a link or clicking anywhere outside
//! the menu closes it. While open, the page behind it can't scroll.

use crate::core::menu::{
    ACTIVE_CLASS, ClickTarget, LINK_SELECTOR, MenuState, PANEL_SELECTOR, TOGGLE_SELECTOR,
};
use crate::ui::dom::{self, EventBinding};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Node};

struct MenuView {
    state: RefCell<MenuState>,
    toggle: Element,
    panel: Element,
    body: Option<HtmlElement>,
}

impl MenuView {
    fn update(&self, change: impl FnOnce(&mut MenuState)) {
        change(&mut self.state.borrow_mut());
        self.render();
    }

    fn render(&self) {
        let state = *self.state.borrow();
        dom::set_class(&self.panel, ACTIVE_CLASS, state.is_open());
        dom::set_class(&self.toggle, ACTIVE_CLASS, state.is_open());
        if let Some(body) = &self.body {
            let _ = body.style().set_property("overflow", state.body_overflow());
        }
    }

    fn classify(&self, event: &Event) -> ClickTarget {
        let node = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        ClickTarget::classify(
            self.toggle.contains(node.as_ref()),
            self.panel.contains(node.as_ref()),
        )
    }
}

pub struct MobileMenuController {
    bindings: Vec<EventBinding>,
}

impl MobileMenuController {
    /// Returns `None` when the toggle or the panel is missing
    pub fn attach(document: &Document) -> Option<Self> {
        let toggle = dom::query(document, TOGGLE_SELECTOR)?;
        let panel = dom::query(document, PANEL_SELECTOR)?;

        let view = Rc::new(MenuView {
            state: RefCell::new(MenuState::new()),
            toggle: toggle.clone(),
            panel,
            body: document.body(),
        });

        let mut bindings = Vec::new();

        let on_toggle = view.clone();
        match EventBinding::new(&toggle, "click", move |_| on_toggle.update(MenuState::toggle)) {
            Ok(binding) => bindings.push(binding),
            Err(e) => {
                leptos::logging::warn!("Mobile menu disabled: {}", e);
                return None;
            }
        }

        let on_link = view.clone();
        bindings.extend(dom::bind_all(
            &dom::query_all(document, LINK_SELECTOR),
            "click",
            move |_, _| on_link.update(MenuState::close),
        ));

        let on_document = view;
        match EventBinding::new(document, "click", move |event| {
            let target = on_document.classify(&event);
            let changed = on_document.state.borrow_mut().on_document_click(target);
            if changed {
                on_document.render();
            }
        }) {
            Ok(binding) => bindings.push(binding),
            Err(e) => leptos::logging::warn!("Outside-click closing disabled: {}", e),
        }

        Some(Self { bindings })
    }

    pub fn detach(self) {
        drop(self.bindings);
    }
}
