use crate::core::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::ui::{
    ContactFormController, CounterController, MobileMenuController, NavbarController,
    NotificationService, RevealController, SmoothScrollController,
};
use leptos::prelude::document;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

/// Every page behavior, installed once per page load.
///
/// Controllers are independent; each one whose elements are missing is simply absent.
pub struct SiteBehavior {
    navbar: Option<NavbarController>,
    menu: Option<MobileMenuController>,
    anchors: SmoothScrollController,
    reveal: Option<RevealController>,
    counters: Option<CounterController>,
    contact: Option<ContactFormController>,
}

impl SiteBehavior {
    pub fn install(document: &Document, config: &SiteConfig) -> Self {
        let notifications = NotificationService::new(&config.notification);

        let behavior = Self {
            navbar: NavbarController::attach(&config.navbar),
            menu: MobileMenuController::attach(document),
            anchors: SmoothScrollController::attach(document, &config.anchors),
            reveal: RevealController::attach(document, &config.reveal),
            counters: CounterController::attach(document, &config.counter),
            contact: ContactFormController::attach(document, &config.contact, notifications),
        };

        leptos::logging::log!(
            "Site behavior installed: navbar={}, menu={}, anchors={}, reveal={}, counters={}, contact={}",
            behavior.navbar.is_some(),
            behavior.menu.is_some(),
            behavior.anchors.len(),
            behavior.reveal.as_ref().map_or(0, RevealController::candidates),
            behavior.counters.is_some(),
            behavior.contact.is_some(),
        );

        behavior
    }

    /// Remove every listener and observer
    pub fn uninstall(self) {
        if let Some(navbar) = self.navbar {
            navbar.detach();
        }
        if let Some(menu) = self.menu {
            menu.detach();
        }
        self.anchors.detach();
        if let Some(reveal) = self.reveal {
            reveal.detach();
        }
        if let Some(counters) = self.counters {
            counters.detach();
        }
        if let Some(contact) = self.contact {
            contact.detach();
        }
    }
}

/// Read the optional JSON configuration embedded in the page
pub fn load_config(document: &Document) -> SiteConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return SiteConfig::default();
    };

    SiteConfig::from_json(&json).unwrap_or_else(|e| {
        leptos::logging::warn!("{}; using defaults", e);
        SiteConfig::default()
    })
}

/// Install the site behavior once the document is parsed. It lives as long as the page.
pub fn run() {
    let document = document();

    let install = move || {
        let document = leptos::prelude::document();
        let config = load_config(&document);
        std::mem::forget(SiteBehavior::install(&document, &config));
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::once(install);
        if let Err(e) = document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        ) {
            leptos::logging::warn!(
                "Site behavior not installed: {}",
                crate::ui::dom::js_error_message(&e)
            );
            return;
        }
        // The listener fires once per page load
        on_ready.forget();
    } else {
        install();
    }
}
