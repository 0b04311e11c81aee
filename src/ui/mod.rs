//! Browser bindings: each controller attaches the matching `core` behavior to the live page

pub mod contact_form;
pub mod counter;
pub mod dom;
pub mod mobile_menu;
pub mod navbar;
pub mod notifications;
pub mod observer;
pub mod reveal;
pub mod smooth_scroll;

pub use contact_form::{ContactFormController, DomContactForm};
pub use counter::CounterController;
pub use dom::{DomError, EventBinding};
pub use mobile_menu::MobileMenuController;
pub use navbar::NavbarController;
pub use notifications::NotificationService;
pub use observer::ViewportObserver;
pub use reveal::RevealController;
pub use smooth_scroll::SmoothScrollController;
