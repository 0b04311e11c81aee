//! Contact form submission

use crate::core::config::ContactConfig;
use crate::core::contact::{
    CONTACT_FORM_ID, ContactError, ContactForm, ContactMessages, ContactSubmitter, FormFields,
    SUBMIT_BUTTON_SELECTOR, SimulatedSubmitter, handle_submission,
};
use crate::ui::dom::{EventBinding, js_error_message};
use crate::ui::notifications::NotificationService;
use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, FormData, HtmlButtonElement, HtmlFormElement};

/// The contact form as seen by the submission flow
pub struct DomContactForm {
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
}

impl DomContactForm {
    pub fn new(form: HtmlFormElement) -> Self {
        let button = form
            .query_selector(SUBMIT_BUTTON_SELECTOR)
            .ok()
            .flatten()
            .and_then(|button| button.dyn_into::<HtmlButtonElement>().ok());
        Self { form, button }
    }
}

impl ContactForm for DomContactForm {
    fn submit_label(&self) -> String {
        self.button
            .as_ref()
            .and_then(|button| button.text_content())
            .unwrap_or_default()
    }

    fn set_submit_state(&self, disabled: bool, label: &str) {
        if let Some(button) = &self.button {
            button.set_disabled(disabled);
            button.set_text_content(Some(label));
        }
    }

    fn fields(&self) -> Result<FormFields, ContactError> {
        let to_error = |e: wasm_bindgen::JsValue| ContactError::Fields(js_error_message(&e));

        let data = FormData::new_with_form(&self.form).map_err(to_error)?;
        let mut fields = FormFields::new();
        let Some(entries) = js_sys::try_iter(&data).map_err(to_error)? else {
            return Ok(fields);
        };

        for entry in entries {
            let entry = entry.map_err(to_error)?;
            let Ok(pair) = entry.dyn_into::<js_sys::Array>() else {
                continue;
            };
            // File inputs have no string value
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                fields.insert(name, value);
            }
        }
        Ok(fields)
    }

    fn reset(&self) {
        self.form.reset();
    }
}

pub struct ContactFormController {
    binding: EventBinding,
}

impl ContactFormController {
    /// Returns `None` when the page has no contact form
    pub fn attach(
        document: &Document,
        config: &ContactConfig,
        notifications: NotificationService,
    ) -> Option<Self> {
        let form = document
            .get_element_by_id(CONTACT_FORM_ID)?
            .dyn_into::<HtmlFormElement>()
            .ok()?;

        let target = Rc::new(DomContactForm::new(form.clone()));
        let submitter: Rc<dyn ContactSubmitter> = Rc::new(SimulatedSubmitter::from_config(
            config,
            |ms: u32| TimeoutFuture::new(ms).boxed_local(),
        ));
        let messages = Rc::new(ContactMessages::from(config));

        let binding = EventBinding::new(&form, "submit", move |event| {
            event.prevent_default();

            let target = target.clone();
            let submitter = submitter.clone();
            let notifications = notifications.clone();
            let messages = messages.clone();
            spawn_local(async move {
                match handle_submission(&*target, &*submitter, &notifications, &messages).await {
                    Ok(()) => leptos::logging::log!("Contact form submitted"),
                    Err(e) => leptos::logging::warn!("Contact form not sent: {}", e),
                }
            });
        })
        .map_err(|e| leptos::logging::warn!("Contact form disabled: {}", e))
        .ok()?;

        Some(Self { binding })
    }

    pub fn detach(self) {
        self.binding.detach();
    }
}
