//! Pure behavior logic for the site: state machines, timing and copy, free of any
//! browser dependency so it can be tested on the host

pub mod anchor;
pub mod config;
pub mod contact;
pub mod counter;
pub mod menu;
pub mod navbar;
pub mod notification;
pub mod reveal;
#[cfg(test)]
mod tests;

pub use config::{ConfigError, SiteConfig};
pub use contact::{
    BusyGuard, ContactError, ContactForm, ContactMessages, ContactSubmitter, FormFields, Notifier,
    SimulatedSubmitter, handle_submission,
};
pub use counter::{CounterAnimation, CounterFrame, CounterLabel, CounterTiming};
pub use menu::{ClickTarget, MenuState};
pub use navbar::{NavbarTracker, ScrollState};
pub use notification::{NotificationKind, NotificationSlot, ToastPhase, ToastTimeline};
pub use reveal::{ObserverOptions, RevealState};
