//! Scroll-triggered reveal of content regions

use crate::core::config::RevealConfig;
use crate::core::reveal::{
    CANDIDATE_CLASS, ObserverOptions, RevealState, VISIBLE_CLASS, targets_selector,
};
use crate::ui::dom;
use crate::ui::observer::ViewportObserver;
use web_sys::Document;

pub struct RevealController {
    observer: ViewportObserver,
    candidates: usize,
}

impl RevealController {
    /// Tags every reveal target as a candidate and starts watching it.
    ///
    /// Returns `None` when the page has no targets.
    pub fn attach(document: &Document, config: &RevealConfig) -> Option<Self> {
        let candidates = dom::query_all(document, &targets_selector());
        if candidates.is_empty() {
            return None;
        }

        for element in &candidates {
            dom::set_class(element, CANDIDATE_CLASS, true);
        }

        let observer = ViewportObserver::new(&ObserverOptions::from(config), |entry, _| {
            let target = entry.target();
            let mut state = RevealState::from_marker(target.class_list().contains(VISIBLE_CLASS));
            if state.on_intersection(entry.is_intersecting()) {
                dom::set_class(&target, VISIBLE_CLASS, true);
            }
        })
        .map_err(|e| leptos::logging::warn!("Reveal animations disabled: {}", e))
        .ok()?;

        // Revealed elements stay observed; the marker never comes off
        for element in &candidates {
            observer.observe(element);
        }

        Some(Self {
            observer,
            candidates: candidates.len(),
        })
    }

    pub fn candidates(&self) -> usize {
        self.candidates
    }

    pub fn detach(self) {
        self.observer.disconnect();
    }
}
