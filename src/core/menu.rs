//! Mobile navigation menu state
//!
//! The open flag is the single source of truth. The toggle's active look and the
//! page scroll lock are both derived from it, so they can never disagree.

/// Selector of the button that opens and closes the menu
pub const TOGGLE_SELECTOR: &str = ".nav-toggle";

/// Selector of the navigation panel
pub const PANEL_SELECTOR: &str = ".nav-links";

/// Selector of the links inside the panel
pub const LINK_SELECTOR: &str = ".nav-links a";

/// Class carried by both the panel and the toggle while open
pub const ACTIVE_CLASS: &str = "active";

/// Where a click landed relative to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Toggle,
    Panel,
    Outside,
}

impl ClickTarget {
    /// Classify a document click. The toggle wins when it sits inside the panel.
    pub fn classify(in_toggle: bool, in_panel: bool) -> Self {
        if in_toggle {
            ClickTarget::Toggle
        } else if in_panel {
            ClickTarget::Panel
        } else {
            ClickTarget::Outside
        }
    }
}

/// Open/closed state of the mobile menu
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip between open and closed
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Force the closed state
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Apply a document click. Returns `true` if the state changed.
    ///
    /// Clicks on the toggle are handled by the toggle itself; clicks inside the panel
    /// leave the menu as is. Anything else closes an open menu.
    pub fn on_document_click(&mut self, target: ClickTarget) -> bool {
        if target == ClickTarget::Outside && self.open {
            self.close();
            true
        } else {
            false
        }
    }

    /// Page scroll is locked exactly while the menu is open
    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    /// Value for the body's `overflow` style
    pub fn body_overflow(&self) -> &'static str {
        if self.scroll_locked() { "hidden" } else { "" }
    }
}
