//! Toast notifications
//!
//! At most one toast is on screen. Showing a new one evicts the current one right away,
//! without its exit transition. A toast leaves on its own after the display period, or
//! earlier through its close button; either way it plays the exit transition first.

use crate::core::config::NotificationConfig;
use derive_more::Display;

/// Id of the injected stylesheet holding the toast keyframes
pub const STYLE_ELEMENT_ID: &str = "notification-styles";

/// Class of the toast's close button
pub const CLOSE_BUTTON_CLASS: &str = "notification-close";

/// Keyframes and close-button styling shared by every toast
pub const NOTIFICATION_CSS: &str = r#"
@keyframes slideIn {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}
.notification-close {
    background: none;
    border: none;
    color: inherit;
    font-size: 24px;
    cursor: pointer;
    padding: 0;
    line-height: 1;
    opacity: 0.7;
}
.notification-close:hover {
    opacity: 1;
}
"#;

/// Kind of notification; decides the color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NotificationKind {
    #[display("success")]
    Success,
    #[display("error")]
    Error,
}

impl NotificationKind {
    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#1a2f4e",
            NotificationKind::Error => "#dc3545",
        }
    }

    /// Class list of the toast element
    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self)
    }
}

/// Inline style for a freshly shown toast
pub fn toast_style(kind: NotificationKind) -> String {
    format!(
        "position: fixed; bottom: 20px; right: 20px; max-width: 400px; padding: 16px 20px; \
         background: {}; color: #fff; border-radius: 8px; box-shadow: 0 10px 40px rgba(0,0,0,0.2); \
         display: flex; align-items: center; gap: 12px; z-index: 9999; animation: {};",
        kind.background(),
        enter_animation(),
    )
}

/// `animation` value while entering
pub fn enter_animation() -> &'static str {
    "slideIn 0.3s ease"
}

/// `animation` value while leaving
pub fn exit_animation() -> &'static str {
    "slideOut 0.3s ease forwards"
}

/// Phase of a toast's life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Shown,
    Exiting,
    Removed,
}

impl ToastPhase {
    pub fn next(self) -> Self {
        match self {
            ToastPhase::Shown => ToastPhase::Exiting,
            ToastPhase::Exiting | ToastPhase::Removed => ToastPhase::Removed,
        }
    }
}

/// Timing of a toast left alone (no manual dismissal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimeline {
    pub display_ms: u32,
    pub exit_ms: u32,
}

impl ToastTimeline {
    /// How long a toast stays in `phase` before moving to the next one
    pub fn hold_ms(&self, phase: ToastPhase) -> Option<u32> {
        match phase {
            ToastPhase::Shown => Some(self.display_ms),
            ToastPhase::Exiting => Some(self.exit_ms),
            ToastPhase::Removed => None,
        }
    }
}

impl Default for ToastTimeline {
    fn default() -> Self {
        Self::from(&NotificationConfig::default())
    }
}

impl From<&NotificationConfig> for ToastTimeline {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            display_ms: config.display_ms,
            exit_ms: config.exit_ms,
        }
    }
}

/// Single-item register holding the toast currently on screen.
///
/// Each toast gets a fresh id; timers scheduled for a toast act only while that id is
/// still current, so a superseded toast's timers can never remove its replacement.
#[derive(Debug)]
pub struct NotificationSlot<T> {
    current: Option<(u64, T)>,
    next_id: u64,
}

impl<T> NotificationSlot<T> {
    pub fn new() -> Self {
        Self {
            current: None,
            next_id: 0,
        }
    }

    /// Reserve the id for the next toast
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Store a new toast and hand back the one it evicts, if any
    pub fn replace(&mut self, id: u64, item: T) -> Option<T> {
        self.current.replace((id, item)).map(|(_, item)| item)
    }

    /// Remove the current toast if it still has this id
    pub fn take_if_current(&mut self, id: u64) -> Option<T> {
        if self.is_current(id) {
            self.current.take().map(|(_, item)| item)
        } else {
            None
        }
    }

    /// Take whatever toast is current
    pub fn take(&mut self) -> Option<T> {
        self.current.take().map(|(_, item)| item)
    }

    pub fn is_current(&self, id: u64) -> bool {
        matches!(self.current, Some((current, _)) if current == id)
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref().map(|(_, item)| item)
    }

    pub fn current_id(&self) -> Option<u64> {
        self.current.as_ref().map(|(id, _)| *id)
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

impl<T> Default for NotificationSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classes_and_colors() {
        assert_eq!(
            NotificationKind::Success.class_name(),
            "notification notification-success"
        );
        assert_eq!(
            NotificationKind::Error.class_name(),
            "notification notification-error"
        );
        assert_eq!(NotificationKind::Success.background(), "#1a2f4e");
        assert_eq!(NotificationKind::Error.background(), "#dc3545");
    }

    #[test]
    fn test_toast_style() {
        let style = toast_style(NotificationKind::Error);
        assert!(style.contains("position: fixed"));
        assert!(style.contains("bottom: 20px"));
        assert!(style.contains("right: 20px"));
        assert!(style.contains("background: #dc3545"));
        assert!(style.contains("z-index: 9999"));
        assert!(style.contains("animation: slideIn 0.3s ease"));
    }

    #[test]
    fn test_stylesheet_defines_both_keyframes() {
        assert!(NOTIFICATION_CSS.contains("@keyframes slideIn"));
        assert!(NOTIFICATION_CSS.contains("@keyframes slideOut"));
        assert!(NOTIFICATION_CSS.contains(".notification-close:hover"));
    }

    #[test]
    fn test_timeline_holds() {
        let timeline = ToastTimeline::default();
        assert_eq!(timeline.hold_ms(ToastPhase::Shown), Some(5000));
        assert_eq!(timeline.hold_ms(ToastPhase::Exiting), Some(300));
        assert_eq!(timeline.hold_ms(ToastPhase::Removed), None);
    }

    #[test]
    fn test_phases_end_removed() {
        assert_eq!(ToastPhase::Shown.next(), ToastPhase::Exiting);
        assert_eq!(ToastPhase::Exiting.next(), ToastPhase::Removed);
        assert_eq!(ToastPhase::Removed.next(), ToastPhase::Removed);
    }

    #[test]
    fn test_slot_replace_evicts_previous() {
        let mut slot = NotificationSlot::new();
        let first = slot.next_id();
        assert!(slot.replace(first, "first").is_none());

        let second = slot.next_id();
        assert_eq!(slot.replace(second, "second"), Some("first"));
        assert_eq!(slot.current(), Some(&"second"));
        assert_eq!(slot.current_id(), Some(second));
    }

    #[test]
    fn test_slot_ids_are_unique() {
        let mut slot: NotificationSlot<()> = NotificationSlot::new();
        let a = slot.next_id();
        let b = slot.next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_stale_id_cannot_remove_replacement() {
        let mut slot = NotificationSlot::new();
        let first = slot.next_id();
        slot.replace(first, "first");
        let second = slot.next_id();
        slot.replace(second, "second");

        assert!(slot.take_if_current(first).is_none());
        assert!(!slot.is_empty());
        assert_eq!(slot.take_if_current(second), Some("second"));
        assert!(slot.is_empty());
    }

    #[test]
    fn test_take_empties_slot() {
        let mut slot = NotificationSlot::new();
        let id = slot.next_id();
        slot.replace(id, 1);

        assert_eq!(slot.take(), Some(1));
        assert!(slot.take().is_none());
        assert!(!slot.is_current(id));
    }
}
