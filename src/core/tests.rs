#[cfg(test)]
mod tests {
    use crate::core::anchor::{fragment_selector, scroll_destination};
    use crate::core::{
        ClickTarget, ContactForm, ContactMessages, CounterAnimation, CounterLabel, CounterTiming,
        FormFields, MenuState, NavbarTracker, NotificationKind, NotificationSlot, Notifier,
        ScrollState, SimulatedSubmitter, SiteConfig, ToastPhase, ToastTimeline,
        handle_submission,
    };
    use futures::FutureExt;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::HashMap;

    // ========================================================================
    // Navbar
    // ========================================================================

    #[test]
    fn test_navbar_follows_scroll_sequence() {
        let config = SiteConfig::default();
        let threshold = config.navbar.scroll_threshold_px;
        let mut tracker = NavbarTracker::new();
        let mut class_writes = 0;

        for offset in [0.0, 10.0, 50.0, 51.0, 400.0, 400.0, 49.0, 0.0, 0.0] {
            if tracker.update(offset, threshold).is_some() {
                class_writes += 1;
            }
            assert_eq!(
                tracker.applied(),
                Some(ScrollState::from_offset(offset, threshold))
            );
        }

        // Top, Scrolled, Top
        assert_eq!(class_writes, 3);
    }

    // ========================================================================
    // Mobile menu
    // ========================================================================

    #[test]
    fn test_menu_lock_never_diverges_from_open_state() {
        let mut menu = MenuState::new();
        let events = [
            "toggle", "link", "toggle", "outside", "toggle", "toggle", "outside", "toggle",
            "panel", "link",
        ];

        for event in events {
            match event {
                "toggle" => menu.toggle(),
                "link" => menu.close(),
                "panel" => {
                    menu.on_document_click(ClickTarget::Panel);
                }
                _ => {
                    menu.on_document_click(ClickTarget::Outside);
                }
            }
            assert_eq!(menu.is_open(), menu.scroll_locked());
            assert_eq!(menu.body_overflow() == "hidden", menu.is_open());
        }

        assert!(!menu.is_open());
    }

    // ========================================================================
    // Smooth scroll
    // ========================================================================

    #[test]
    fn test_anchor_resolution_against_page() {
        // Element tops relative to the viewport
        let page: HashMap<&str, f64> = [("#contact", 1200.0), ("#team", 800.0)].into();
        let margin = SiteConfig::default().anchors.margin_px;

        let resolve = |href: &str| {
            fragment_selector(href)
                .and_then(|selector| page.get(selector))
                .map(|top| scroll_destination(*top, 0.0, 72.0, margin))
        };

        assert_eq!(resolve("#contact"), Some(1108.0));
        assert_eq!(resolve("#team"), Some(708.0));
        assert_eq!(resolve("#missing"), None);
        assert_eq!(resolve("#"), None);
    }

    // ========================================================================
    // Counter
    // ========================================================================

    #[test]
    fn test_counter_driven_by_virtual_clock() {
        let timing = CounterTiming::from(&SiteConfig::default().counter);
        let mut anim = CounterAnimation::new(CounterLabel::parse("250+").unwrap(), timing);

        // Timer ticks at the rounded interval, frames chosen from the clock
        let mut shown = Vec::new();
        let mut now = 0.0;
        while !anim.is_finished() {
            now += f64::from(timing.interval_ms());
            if let Some(frame) = anim.advance_to(now) {
                shown.push(frame.text);
            }
        }

        assert_eq!(shown.last().map(String::as_str), Some("250+"));
        assert!(now >= 2000.0);
        assert!(now < 2000.0 + f64::from(timing.interval_ms()));

        let values: Vec<u64> = shown
            .iter()
            .map(|t| t.trim_end_matches('+').parse().unwrap())
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|v| *v <= 250));
    }

    #[test]
    fn test_counter_skips_unparsable_label() {
        let mut text = "N/A".to_string();
        if let Some(label) = CounterLabel::parse(&text) {
            for frame in CounterAnimation::new(label, CounterTiming::default()) {
                text = frame.text;
            }
        }
        assert_eq!(text, "N/A");
    }

    #[test]
    fn test_counter_frames_write_back_exact_label() {
        for original in ["250+", "15", "1.200+", "98%"] {
            let mut text = original.to_string();
            let label = CounterLabel::parse(&text).unwrap();
            for frame in CounterAnimation::new(label, CounterTiming::default()) {
                text = frame.text;
            }
            assert_eq!(text, original);
        }
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    #[test]
    fn test_second_notification_replaces_first() {
        let mut page: Vec<String> = Vec::new();
        let mut slot = NotificationSlot::new();

        for message in ["first", "second"] {
            let id = slot.next_id();
            if let Some(evicted) = slot.replace(id, message.to_string()) {
                page.retain(|m| *m != evicted);
            }
            page.push(message.to_string());
        }

        assert_eq!(page, vec!["second".to_string()]);
    }

    #[test]
    fn test_notification_gone_within_lifetime() {
        let timeline = ToastTimeline::from(&SiteConfig::default().notification);

        // Walk the same holds the auto-dismiss timers wait on
        let mut phase = ToastPhase::Shown;
        let mut elapsed = 0;
        while let Some(hold) = timeline.hold_ms(phase) {
            elapsed += hold;
            phase = phase.next();
        }

        assert_eq!(phase, ToastPhase::Removed);
        assert_eq!(elapsed, 5300);
    }

    #[test]
    fn test_superseded_toast_timers_do_not_touch_replacement() {
        let timeline = ToastTimeline::default();
        let mut slot = NotificationSlot::new();

        let first = slot.next_id();
        slot.replace(first, "first");
        // Second toast shown 3s later
        let second = slot.next_id();
        slot.replace(second, "second");

        // First toast's exit timer fires after its display and exit holds
        assert_eq!(timeline.hold_ms(ToastPhase::Exiting), Some(300));
        assert!(slot.take_if_current(first).is_none());
        assert_eq!(slot.current(), Some(&"second"));
    }

    // ========================================================================
    // Contact form
    // ========================================================================

    struct Form {
        disabled: RefCell<bool>,
        label: RefCell<String>,
        values: RefCell<FormFields>,
    }

    impl ContactForm for Form {
        fn submit_label(&self) -> String {
            self.label.borrow().clone()
        }

        fn set_submit_state(&self, disabled: bool, label: &str) {
            *self.disabled.borrow_mut() = disabled;
            *self.label.borrow_mut() = label.to_string();
        }

        fn fields(&self) -> Result<FormFields, crate::core::ContactError> {
            Ok(self.values.borrow().clone())
        }

        fn reset(&self) {
            *self.values.borrow_mut() = FormFields::new();
        }
    }

    #[derive(Default)]
    struct Toasts(RefCell<Vec<NotificationKind>>);

    impl Notifier for Toasts {
        fn notify(&self, _message: &str, kind: NotificationKind) {
            self.0.borrow_mut().push(kind);
        }
    }

    fn filled_form() -> Form {
        Form {
            disabled: RefCell::new(false),
            label: RefCell::new("Verstuur".to_string()),
            values: RefCell::new(
                [("name", "Jan"), ("email", "jan@example.nl"), ("message", "Hallo")]
                    .into_iter()
                    .collect(),
            ),
        }
    }

    fn submit_with(config: &SiteConfig, form: &Form, toasts: &Toasts) -> bool {
        let submitter =
            SimulatedSubmitter::from_config(&config.contact, |_: u32| async {}.boxed_local());
        let messages = ContactMessages::from(&config.contact);
        block_on(handle_submission(form, &submitter, toasts, &messages)).is_ok()
    }

    #[test]
    fn test_contact_success_path_from_default_config() {
        let config = SiteConfig::default();
        let form = filled_form();
        let toasts = Toasts::default();

        assert!(submit_with(&config, &form, &toasts));
        assert!(!*form.disabled.borrow());
        assert_eq!(*form.label.borrow(), "Verstuur");
        assert!(form.values.borrow().is_empty());
        assert_eq!(*toasts.0.borrow(), vec![NotificationKind::Success]);
    }

    #[test]
    fn test_contact_failure_path_from_config_switch() {
        let config =
            SiteConfig::from_json(r#"{ "contact": { "simulate_failure": true } }"#).unwrap();
        let form = filled_form();
        let toasts = Toasts::default();

        assert!(!submit_with(&config, &form, &toasts));
        assert!(!*form.disabled.borrow());
        assert_eq!(*form.label.borrow(), "Verstuur");
        assert_eq!(form.values.borrow().len(), 3);
        assert_eq!(*toasts.0.borrow(), vec![NotificationKind::Error]);
    }
}
