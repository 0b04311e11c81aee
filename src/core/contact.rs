//! Contact form submission flow
//!
//! The flow only talks to the page through the [`ContactForm`] and [`Notifier`] traits
//! and to the backend through [`ContactSubmitter`], so it runs unchanged against the
//! live DOM and against in-memory fakes.

use crate::core::config::ContactConfig;
use crate::core::notification::NotificationKind;
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use serde::Serialize;
use std::collections::BTreeMap;

/// Id of the contact form
pub const CONTACT_FORM_ID: &str = "contact-form";

/// Selector of the submit control inside the form
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";

/// Errors of a contact submission
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("Could not read form fields: {0}")]
    Fields(String),
}

/// Flat name -> value map of the form's fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. A repeated name keeps the last value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = FormFields::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}

/// Backend receiving contact submissions
pub trait ContactSubmitter {
    fn submit(&self, fields: FormFields) -> LocalBoxFuture<'static, Result<(), ContactError>>;
}

/// The page-side form being submitted
pub trait ContactForm {
    /// Current label of the submit control
    fn submit_label(&self) -> String;

    /// Enable or disable the submit control and set its label
    fn set_submit_state(&self, disabled: bool, label: &str);

    /// Snapshot of every field value
    fn fields(&self) -> Result<FormFields, ContactError>;

    /// Clear every field
    fn reset(&self);
}

/// Shows user-facing messages
pub trait Notifier {
    fn notify(&self, message: &str, kind: NotificationKind);
}

/// User-facing copy of the contact flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessages {
    pub busy_label: String,
    pub success: String,
    pub error: String,
}

impl From<&ContactConfig> for ContactMessages {
    fn from(config: &ContactConfig) -> Self {
        Self {
            busy_label: config.busy_label.clone(),
            success: config.success_message.clone(),
            error: config.error_message.clone(),
        }
    }
}

impl Default for ContactMessages {
    fn default() -> Self {
        Self::from(&ContactConfig::default())
    }
}

/// Keeps the submit control disabled with the busy label while alive.
///
/// Dropping the guard re-enables the control and puts the original label back, whether
/// the submission succeeded, failed, or was abandoned halfway.
pub struct BusyGuard<'a, F: ContactForm + ?Sized> {
    form: &'a F,
    original_label: String,
}

impl<'a, F: ContactForm + ?Sized> BusyGuard<'a, F> {
    pub fn engage(form: &'a F, busy_label: &str) -> Self {
        let original_label = form.submit_label();
        form.set_submit_state(true, busy_label);
        Self {
            form,
            original_label,
        }
    }

    pub fn original_label(&self) -> &str {
        &self.original_label
    }
}

impl<F: ContactForm + ?Sized> Drop for BusyGuard<'_, F> {
    fn drop(&mut self) {
        self.form.set_submit_state(false, &self.original_label);
    }
}

/// Run one submission end to end.
///
/// On success the user gets the success message and the form is cleared. On any
/// failure the user gets the error message and keeps their input. The submit control is
/// restored in every case.
pub async fn handle_submission<F, S, N>(
    form: &F,
    submitter: &S,
    notifier: &N,
    messages: &ContactMessages,
) -> Result<(), ContactError>
where
    F: ContactForm + ?Sized,
    S: ContactSubmitter + ?Sized,
    N: Notifier + ?Sized,
{
    let _busy = BusyGuard::engage(form, &messages.busy_label);

    let result = match form.fields() {
        Ok(fields) => submitter.submit(fields).await,
        Err(e) => Err(e),
    };

    match &result {
        Ok(()) => {
            notifier.notify(&messages.success, NotificationKind::Success);
            form.reset();
        }
        Err(_) => notifier.notify(&messages.error, NotificationKind::Error),
    }

    result
}

/// Stand-in backend: waits a fixed delay, then succeeds or fails as configured.
///
/// The wait is injected so the browser can use a real timer and tests can resolve
/// immediately.
pub struct SimulatedSubmitter<D> {
    delay_ms: u32,
    fail: bool,
    delay: D,
}

impl<D> SimulatedSubmitter<D>
where
    D: Fn(u32) -> LocalBoxFuture<'static, ()>,
{
    pub fn new(delay_ms: u32, fail: bool, delay: D) -> Self {
        Self {
            delay_ms,
            fail,
            delay,
        }
    }

    pub fn from_config(config: &ContactConfig, delay: D) -> Self {
        Self::new(config.simulated_delay_ms, config.simulate_failure, delay)
    }
}

impl<D> ContactSubmitter for SimulatedSubmitter<D>
where
    D: Fn(u32) -> LocalBoxFuture<'static, ()>,
{
    fn submit(&self, fields: FormFields) -> LocalBoxFuture<'static, Result<(), ContactError>> {
        let wait = (self.delay)(self.delay_ms);
        let fail = self.fail;

        async move {
            wait.await;
            if fail {
                Err(ContactError::Rejected(format!(
                    "simulated failure ({} fields)",
                    fields.len()
                )))
            } else {
                Ok(())
            }
        }
        .boxed_local()
    }
}
