//! Count-up animation for stat numbers

use crate::core::config::CounterConfig;
use crate::core::counter::{
    CounterAnimation, CounterLabel, CounterTiming, STAT_NUMBER_SELECTOR,
};
use crate::core::reveal::ObserverOptions;
use crate::ui::dom;
use crate::ui::observer::ViewportObserver;
use futures::StreamExt;
use gloo_timers::future::IntervalStream;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

pub struct CounterController {
    observer: ViewportObserver,
}

impl CounterController {
    /// Returns `None` when the page has no stat numbers
    pub fn attach(document: &Document, config: &CounterConfig) -> Option<Self> {
        let stats = dom::query_all(document, STAT_NUMBER_SELECTOR);
        if stats.is_empty() {
            return None;
        }

        let timing = CounterTiming::from(config);
        let options = ObserverOptions::new(config.threshold, "0px");

        let observer = ViewportObserver::new(&options, move |entry, observer| {
            if !entry.is_intersecting() {
                return;
            }
            // Each element counts up once
            let target = entry.target();
            observer.unobserve(&target);
            animate(target, timing);
        })
        .map_err(|e| leptos::logging::warn!("Stat counters disabled: {}", e))
        .ok()?;

        for element in &stats {
            observer.observe(element);
        }

        Some(Self { observer })
    }

    pub fn detach(self) {
        self.observer.disconnect();
    }
}

/// Count the element's number up from zero. Text without a number is left alone.
fn animate(element: Element, timing: CounterTiming) {
    let text = element.text_content().unwrap_or_default();
    let Some(label) = CounterLabel::parse(&text) else {
        return;
    };

    let mut animation = CounterAnimation::new(label, timing);
    spawn_local(async move {
        let start = js_sys::Date::now();
        let mut ticks = IntervalStream::new(timing.interval_ms());
        while !animation.is_finished() {
            if ticks.next().await.is_none() {
                break;
            }
            if let Some(frame) = animation.advance_to(js_sys::Date::now() - start) {
                element.set_text_content(Some(&frame.text));
            }
        }
    });
}
