//! Navbar scroll styling
//!
//! The navbar switches to its compact "scrolled" look once the page has moved past a
//! fixed vertical offset. The state is derived from the offset alone on every tick.

/// Id of the navbar root element
pub const NAVBAR_ID: &str = "navbar";

/// Class added to the navbar while scrolled
pub const SCROLLED_CLASS: &str = "scrolled";

/// Scrolled state of the navbar for one scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollState {
    Top,
    Scrolled,
}

impl ScrollState {
    /// Derive the state from the vertical scroll offset.
    ///
    /// Strictly greater than the threshold counts as scrolled.
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            ScrollState::Scrolled
        } else {
            ScrollState::Top
        }
    }

    pub fn is_scrolled(&self) -> bool {
        matches!(self, ScrollState::Scrolled)
    }
}

/// Tracks the last applied state so repeated scroll events at the same side of the
/// threshold don't touch the DOM.
#[derive(Debug, Default, Clone)]
pub struct NavbarTracker {
    applied: Option<ScrollState>,
}

impl NavbarTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a new scroll offset.
    ///
    /// Returns the state to apply when it differs from the last applied one.
    pub fn update(&mut self, offset: f64, threshold: f64) -> Option<ScrollState> {
        let state = ScrollState::from_offset(offset, threshold);
        if self.applied == Some(state) {
            return None;
        }
        self.applied = Some(state);
        Some(state)
    }

    pub fn applied(&self) -> Option<ScrollState> {
        self.applied
    }
}
