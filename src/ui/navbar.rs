//! Navbar scroll styling

use crate::core::config::NavbarConfig;
use crate::core::navbar::{NAVBAR_ID, NavbarTracker, SCROLLED_CLASS};
use crate::ui::dom;
use leptos::prelude::{WindowListenerHandle, document, window, window_event_listener};
use std::cell::RefCell;

/// Toggles the navbar's scrolled class as the page scrolls
pub struct NavbarController {
    handle: WindowListenerHandle,
}

impl NavbarController {
    /// Returns `None` when the page has no navbar
    pub fn attach(config: &NavbarConfig) -> Option<Self> {
        let navbar = document().get_element_by_id(NAVBAR_ID)?;
        let threshold = config.scroll_threshold_px;
        let tracker = RefCell::new(NavbarTracker::new());

        let apply = move || {
            let offset = window().scroll_y().unwrap_or(0.0);
            if let Some(state) = tracker.borrow_mut().update(offset, threshold) {
                dom::set_class(&navbar, SCROLLED_CLASS, state.is_scrolled());
            }
        };

        // Page may load already scrolled (reload, deep link)
        apply();
        let handle = window_event_listener(leptos::ev::scroll, move |_| apply());

        Some(Self { handle })
    }

    pub fn detach(self) {
        self.handle.remove();
    }
}
