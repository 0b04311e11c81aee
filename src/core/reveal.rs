//! Scroll-triggered reveal animations
//!
//! Content regions start hidden (via CSS on the candidate class) and get a visibility
//! marker the first time they enter the viewport. The transition is one-way.

use crate::core::config::RevealConfig;

/// Regions that fade/slide in when scrolled into view
pub const REVEAL_TARGETS: &[&str] = &[
    ".stat-item",
    ".expertise-card",
    ".team-card",
    ".about-content",
    ".about-image",
    ".contact-info",
    ".contact-form-wrapper",
];

/// Class tagging an element as a reveal candidate
pub const CANDIDATE_CLASS: &str = "animate-on-scroll";

/// Class marking a candidate as revealed
pub const VISIBLE_CLASS: &str = "visible";

/// All reveal targets joined into one selector list
pub fn targets_selector() -> String {
    REVEAL_TARGETS.join(", ")
}

/// Options for a viewport intersection watcher
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible
    pub threshold: f64,
    /// CSS margin applied to the viewport box
    pub root_margin: String,
}

impl ObserverOptions {
    pub fn new(threshold: f64, root_margin: impl Into<String>) -> Self {
        Self {
            threshold,
            root_margin: root_margin.into(),
        }
    }
}

impl From<&RevealConfig> for ObserverOptions {
    fn from(config: &RevealConfig) -> Self {
        Self::new(config.threshold, config.root_margin.clone())
    }
}

/// Per-element reveal state
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// Recover the state from whether the element already carries the marker
    pub fn from_marker(has_visible_class: bool) -> Self {
        if has_visible_class {
            RevealState::Visible
        } else {
            RevealState::Hidden
        }
    }

    /// Apply an intersection report.
    ///
    /// Returns `true` only on the Hidden -> Visible transition; leaving the viewport
    /// or intersecting again afterwards changes nothing.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> bool {
        if is_intersecting && *self == RevealState::Hidden {
            *self = RevealState::Visible;
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, RevealState::Visible)
    }
}
