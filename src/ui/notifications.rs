//! Toast notification service
//!
//! Shows one toast at a time in the bottom-right corner. The service owns the toast it
//! put on screen; a new request tears the old one down before inserting its own.

use crate::core::config::NotificationConfig;
use crate::core::contact::Notifier;
use crate::core::notification::{
    CLOSE_BUTTON_CLASS, NOTIFICATION_CSS, NotificationKind, NotificationSlot, STYLE_ELEMENT_ID,
    ToastPhase, ToastTimeline, exit_animation, toast_style,
};
use crate::ui::dom::{DomError, EventBinding};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::document;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement};

/// A toast on screen together with its close-button listener
struct Toast {
    element: Element,
    _close: Option<EventBinding>,
}

impl Toast {
    fn remove(self) {
        self.element.remove();
    }
}

type Slot = Rc<RefCell<NotificationSlot<Toast>>>;

/// Toast notifications with a single slot
#[derive(Clone)]
pub struct NotificationService {
    slot: Slot,
    timeline: ToastTimeline,
}

impl NotificationService {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            slot: Rc::new(RefCell::new(NotificationSlot::new())),
            timeline: ToastTimeline::from(config),
        }
    }

    /// Show `message`, replacing any toast currently on screen
    pub fn show(&self, message: &str, kind: NotificationKind) {
        if let Err(e) = self.try_show(message, kind) {
            leptos::logging::warn!("Failed to show notification: {}", e);
        }
    }

    fn try_show(&self, message: &str, kind: NotificationKind) -> Result<(), DomError> {
        let document = document();

        // Superseded toast goes away at once, without its exit transition
        let evicted = self.slot.borrow_mut().take();
        if let Some(toast) = evicted {
            toast.remove();
        }

        let element = build_toast(&document, message, kind)?;
        ensure_stylesheet(&document)?;
        document
            .body()
            .ok_or(DomError::Missing("body"))?
            .append_child(&element)?;

        let id = self.slot.borrow_mut().next_id();
        let close = element
            .query_selector(&format!(".{}", CLOSE_BUTTON_CLASS))?
            .and_then(|button| {
                let slot = Rc::downgrade(&self.slot);
                let timeline = self.timeline;
                EventBinding::new(&button, "click", move |_| {
                    if let Some(slot) = slot.upgrade() {
                        begin_exit(&slot, id, timeline);
                    }
                })
                .ok()
            });

        self.slot.borrow_mut().replace(
            id,
            Toast {
                element,
                _close: close,
            },
        );

        schedule_auto_dismiss(Rc::downgrade(&self.slot), id, self.timeline);
        Ok(())
    }
}

impl Notifier for NotificationService {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.show(message, kind);
    }
}

fn build_toast(
    document: &Document,
    message: &str,
    kind: NotificationKind,
) -> Result<Element, DomError> {
    let toast = document.create_element("div")?;
    toast.set_class_name(&kind.class_name());
    toast.set_attribute("style", &toast_style(kind))?;

    let text = document.create_element("span")?;
    text.set_text_content(Some(message));

    let close = document.create_element("button")?;
    close.set_class_name(CLOSE_BUTTON_CLASS);
    close.set_attribute("type", "button")?;
    close.set_attribute("aria-label", "Sluiten")?;
    close.set_text_content(Some("\u{00d7}"));

    toast.append_child(&text)?;
    toast.append_child(&close)?;
    Ok(toast)
}

/// Inject the shared keyframes once per page
fn ensure_stylesheet(document: &Document) -> Result<(), DomError> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }

    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(NOTIFICATION_CSS));
    document
        .head()
        .ok_or(DomError::Missing("head"))?
        .append_child(&style)?;
    Ok(())
}

/// Play the exit transition of toast `id`, then remove it if it is still the current one
fn begin_exit(slot: &Slot, id: u64, timeline: ToastTimeline) {
    let element = {
        let slot = slot.borrow();
        if !slot.is_current(id) {
            return;
        }
        slot.current().map(|toast| toast.element.clone())
    };

    if let Some(element) = element.and_then(|e| e.dyn_into::<HtmlElement>().ok()) {
        let _ = element.style().set_property("animation", exit_animation());
    }

    let Some(exit_ms) = timeline.hold_ms(ToastPhase::Exiting) else {
        return;
    };
    let slot: Weak<_> = Rc::downgrade(slot);
    spawn_local(async move {
        TimeoutFuture::new(exit_ms).await;
        let Some(slot) = slot.upgrade() else {
            return;
        };
        let removed = slot.borrow_mut().take_if_current(id);
        if let Some(toast) = removed {
            toast.remove();
        }
    });
}

fn schedule_auto_dismiss(
    slot: Weak<RefCell<NotificationSlot<Toast>>>,
    id: u64,
    timeline: ToastTimeline,
) {
    let Some(display_ms) = timeline.hold_ms(ToastPhase::Shown) else {
        return;
    };
    spawn_local(async move {
        TimeoutFuture::new(display_ms).await;
        if let Some(slot) = slot.upgrade() {
            begin_exit(&slot, id, timeline);
        }
    });
}
