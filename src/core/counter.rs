//! Stat counter animation
//!
//! A stat label such as `"250+"` counts up from zero to its value once it scrolls into
//! view. Everything here is a pure function of the frame index or of elapsed time, so the
//! easing and rounding can be checked against a virtual clock; the browser side only
//! supplies timestamps.

use crate::core::config::CounterConfig;

/// Selector of the animated stat numbers
pub const STAT_NUMBER_SELECTOR: &str = ".stat-number";

/// Cubic ease-out: fast start, gentle landing. Input is clamped to `0.0..=1.0`.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - progress).powi(3)
}

/// A parsed stat label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterLabel {
    original: String,
    target: u64,
    has_plus: bool,
}

impl CounterLabel {
    /// Parse a label by keeping only its digits.
    ///
    /// Returns `None` when no number can be read (no digits at all, or too many to fit),
    /// in which case the element is left alone.
    pub fn parse(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        let target = digits.parse::<u64>().ok()?;

        Some(Self {
            original: text.to_string(),
            target,
            has_plus: text.contains('+'),
        })
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn has_plus(&self) -> bool {
        self.has_plus
    }

    /// Text shown for an intermediate value
    pub fn render(&self, value: u64) -> String {
        if self.has_plus {
            format!("{}+", value)
        } else {
            value.to_string()
        }
    }
}

/// Frame cadence of a counter animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterTiming {
    frames_per_second: u32,
    frame_ms: f64,
    total_frames: u32,
}

impl CounterTiming {
    pub fn new(duration_ms: u32, frames_per_second: u32) -> Self {
        let frames_per_second = frames_per_second.max(1);
        let frame_ms = 1000.0 / frames_per_second as f64;
        let total_frames = (duration_ms as f64 / frame_ms).round() as u32;

        Self {
            frames_per_second,
            frame_ms,
            // Always at least one frame so the final text gets written
            total_frames: total_frames.max(1),
        }
    }

    /// Exact frame length in milliseconds
    pub fn frame_ms(&self) -> f64 {
        self.frame_ms
    }

    /// Timer interval for one frame, in whole milliseconds
    pub fn interval_ms(&self) -> u32 {
        (self.frame_ms.round() as u32).max(1)
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    /// Frame reached after `elapsed_ms` of animation
    pub fn frame_at(&self, elapsed_ms: f64) -> u32 {
        if elapsed_ms <= 0.0 {
            return 0;
        }
        // Multiply rather than divide by the frame length to stay exact on frame edges
        let frame = (elapsed_ms * self.frames_per_second as f64 / 1000.0).floor() as u32;
        frame.min(self.total_frames)
    }
}

impl Default for CounterTiming {
    fn default() -> Self {
        Self::from(&CounterConfig::default())
    }
}

impl From<&CounterConfig> for CounterTiming {
    fn from(config: &CounterConfig) -> Self {
        Self::new(config.duration_ms, config.frames_per_second)
    }
}

/// One rendered frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub index: u32,
    pub text: String,
    pub is_final: bool,
}

/// Progress of one element's count-up
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    label: CounterLabel,
    timing: CounterTiming,
    total_frames: u32,
    frame: u32,
}

impl CounterAnimation {
    pub fn new(label: CounterLabel, timing: CounterTiming) -> Self {
        Self {
            label,
            timing,
            total_frames: timing.total_frames(),
            frame: 0,
        }
    }

    pub fn label(&self) -> &CounterLabel {
        &self.label
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    /// Displayed value at a frame; never exceeds the target
    pub fn value_at(&self, frame: u32) -> u64 {
        if frame >= self.total_frames {
            return self.label.target;
        }
        let progress = frame as f64 / self.total_frames as f64;
        let value = (self.label.target as f64 * ease_out_cubic(progress)).round() as u64;
        value.min(self.label.target)
    }

    /// Displayed text at a frame. The last frame restores the original label verbatim.
    pub fn text_at(&self, frame: u32) -> String {
        if frame >= self.total_frames {
            self.label.original.clone()
        } else {
            self.label.render(self.value_at(frame))
        }
    }

    pub fn is_finished(&self) -> bool {
        self.frame >= self.total_frames
    }

    /// Step to the next frame. Returns `None` once the final frame has been produced.
    pub fn advance(&mut self) -> Option<CounterFrame> {
        if self.is_finished() {
            return None;
        }
        Some(self.jump_to(self.frame + 1))
    }

    /// Jump to the frame reached `elapsed_ms` after the animation started.
    ///
    /// Late ticks skip frames rather than stretching the animation, so the final text is
    /// written on the first call at or past the full duration. Returns `None` while the
    /// frame has not moved, and after the final frame.
    pub fn advance_to(&mut self, elapsed_ms: f64) -> Option<CounterFrame> {
        if self.is_finished() {
            return None;
        }
        let frame = self.timing.frame_at(elapsed_ms);
        if frame <= self.frame {
            return None;
        }
        Some(self.jump_to(frame))
    }

    fn jump_to(&mut self, frame: u32) -> CounterFrame {
        self.frame = frame.min(self.total_frames);
        CounterFrame {
            index: self.frame,
            text: self.text_at(self.frame),
            is_final: self.is_finished(),
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = CounterFrame;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animation(text: &str) -> CounterAnimation {
        CounterAnimation::new(CounterLabel::parse(text).unwrap(), CounterTiming::default())
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_parse_plain_number() {
        let label = CounterLabel::parse("35").unwrap();
        assert_eq!(label.target(), 35);
        assert!(!label.has_plus());
        assert_eq!(label.original(), "35");
    }

    #[test]
    fn test_parse_plus_suffix() {
        let label = CounterLabel::parse("250+").unwrap();
        assert_eq!(label.target(), 250);
        assert!(label.has_plus());
        assert_eq!(label.render(12), "12+");
    }

    #[test]
    fn test_parse_strips_every_non_digit() {
        assert_eq!(CounterLabel::parse("1.500").unwrap().target(), 1500);
        assert_eq!(CounterLabel::parse(" 98% ").unwrap().target(), 98);
        assert_eq!(CounterLabel::parse("007").unwrap().target(), 7);
    }

    #[test]
    fn test_parse_rejects_text_without_digits() {
        assert!(CounterLabel::parse("N/A").is_none());
        assert!(CounterLabel::parse("").is_none());
        assert!(CounterLabel::parse("+").is_none());
    }

    #[test]
    fn test_parse_rejects_overflowing_number() {
        assert!(CounterLabel::parse("99999999999999999999999").is_none());
    }

    #[test]
    fn test_default_timing() {
        let timing = CounterTiming::default();
        assert_eq!(timing.total_frames(), 120);
        assert_eq!(timing.interval_ms(), 17);
        assert!((timing.frame_ms() - 16.666).abs() < 0.01);
    }

    #[test]
    fn test_zero_duration_still_has_final_frame() {
        let timing = CounterTiming::new(0, 60);
        assert_eq!(timing.total_frames(), 1);
    }

    #[test]
    fn test_frame_at_elapsed() {
        let timing = CounterTiming::default();
        assert_eq!(timing.frame_at(0.0), 0);
        assert_eq!(timing.frame_at(-5.0), 0);
        assert_eq!(timing.frame_at(16.0), 0);
        assert_eq!(timing.frame_at(17.0), 1);
        assert_eq!(timing.frame_at(1000.0), 60);
        assert_eq!(timing.frame_at(2000.0), 120);
        assert_eq!(timing.frame_at(10_000.0), 120);
    }

    #[test]
    fn test_value_at_follows_easing() {
        let anim = animation("250+");
        assert_eq!(anim.value_at(0), 0);
        // Halfway: 250 * 0.875 = 218.75
        assert_eq!(anim.value_at(60), 219);
        assert_eq!(anim.value_at(120), 250);
    }

    #[test]
    fn test_intermediate_text_keeps_plus() {
        let anim = animation("250+");
        assert_eq!(anim.text_at(60), "219+");
    }

    #[test]
    fn test_final_frame_restores_original_text() {
        let frames: Vec<CounterFrame> = animation("250+").collect();

        assert_eq!(frames.len(), 120);
        let last = frames.last().unwrap();
        assert_eq!(last.text, "250+");
        assert!(last.is_final);
        assert!(frames[..119].iter().all(|f| !f.is_final));
    }

    #[test]
    fn test_final_frame_restores_formatted_label() {
        // Separators are dropped while counting but come back at the end
        let frames: Vec<CounterFrame> = animation("1.500").collect();
        assert_eq!(frames[frames.len() - 2].text, "1500");
        assert_eq!(frames.last().unwrap().text, "1.500");
    }

    #[test]
    fn test_values_are_monotonic_and_bounded() {
        let anim = animation("250+");
        let mut previous = 0;
        for frame in 0..=anim.total_frames() {
            let value = anim.value_at(frame);
            assert!(value >= previous);
            assert!(value <= 250);
            previous = value;
        }
    }

    #[test]
    fn test_advance_to_finishes_on_duration_with_coarse_ticks() {
        // 17 ms ticks drift past the 16.67 ms frame; elapsed time decides the frame
        let mut anim = animation("250+");
        let mut finished_at = None;
        for tick in 1..=200u32 {
            let elapsed = f64::from(tick * 17);
            let Some(frame) = anim.advance_to(elapsed) else {
                continue;
            };
            if frame.is_final {
                assert_eq!(frame.text, "250+");
                finished_at = Some(elapsed);
                break;
            }
        }

        let finished_at = finished_at.unwrap();
        assert!(finished_at >= 2000.0);
        assert!(finished_at < 2000.0 + 17.0);
    }

    #[test]
    fn test_advance_to_ignores_unchanged_frame() {
        let mut anim = animation("100");
        assert!(anim.advance_to(5.0).is_none());
        let frame = anim.advance_to(1000.0).unwrap();
        assert_eq!(frame.index, 60);
        assert!(anim.advance_to(1000.0).is_none());
        assert!(anim.advance_to(900.0).is_none());
    }

    #[test]
    fn test_advance_to_after_final_frame() {
        let mut anim = animation("100");
        assert!(anim.advance_to(5000.0).unwrap().is_final);
        assert!(anim.advance_to(6000.0).is_none());
        assert!(anim.is_finished());
    }

    #[test]
    fn test_advance_stops_after_final_frame() {
        let mut anim = animation("10");
        while anim.advance().is_some() {}

        assert!(anim.is_finished());
        assert!(anim.advance().is_none());
    }

    #[test]
    fn test_zero_target() {
        let frames: Vec<CounterFrame> = animation("0").collect();
        assert!(frames.iter().all(|f| f.text == "0"));
    }
}
