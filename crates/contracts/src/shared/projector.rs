//! Animated value projection: interpolates a metric from a start magnitude to
//! its target over time.
//!
//! Time is an input here. The frontend owns the ticking clock and asks for
//! [`Projection::value_at`]; tests walk [`Projection::frames`].

use super::metric_value::MetricValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOutCubic => "cubic-bezier(0.33, 1, 0.68, 1)",
            Easing::EaseInOutCubic => "cubic-bezier(0.65, 0, 0.35, 1)",
        }
    }
}

/// Timing of one animation, handed to the rendering layer as plain data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    pub from: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub frame_ms: u32,
    pub easing: Easing,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::gentle()
    }
}

impl AnimationSpec {
    pub const FRAME_MS: u32 = 16;

    pub fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            from: 0.0,
            duration_ms,
            delay_ms: 0,
            frame_ms: Self::FRAME_MS,
            easing,
        }
    }

    /// Soft entrance used by cards and charts.
    pub fn gentle() -> Self {
        Self::new(800, Easing::EaseOutCubic)
    }

    /// Slow counter roll-up for stat numbers.
    pub fn molasses() -> Self {
        Self::new(1600, Easing::EaseInOutCubic)
    }

    /// Quick pop for small badges and chips.
    pub fn wobbly() -> Self {
        Self::new(450, Easing::EaseOutCubic)
    }

    pub fn linear(duration_ms: u32) -> Self {
        Self::new(duration_ms, Easing::Linear)
    }

    pub fn with_from(mut self, from: f64) -> Self {
        self.from = from;
        self
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_frame(mut self, frame_ms: u32) -> Self {
        self.frame_ms = frame_ms;
        self
    }

    pub fn total_ms(&self) -> u32 {
        self.delay_ms.saturating_add(self.duration_ms)
    }

    /// Eased progress in `[0, 1]` after `elapsed_ms` (delay included).
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        let running = elapsed_ms - f64::from(self.delay_ms);
        if running <= 0.0 {
            return if self.duration_ms == 0 && elapsed_ms >= f64::from(self.delay_ms) {
                1.0
            } else {
                0.0
            };
        }
        if self.duration_ms == 0 {
            return 1.0;
        }
        self.easing.apply(running / f64::from(self.duration_ms))
    }

    /// CSS `animation` shorthand for a keyframes rule defined in the stylesheet.
    pub fn css_animation(&self, keyframes: &str) -> String {
        format!(
            "animation: {} {}ms {} {}ms both;",
            keyframes,
            self.duration_ms,
            self.easing.css(),
            self.delay_ms
        )
    }
}

/// A target metric plus the timing used to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    target: MetricValue,
    spec: AnimationSpec,
}

impl Projection {
    pub fn new(target: MetricValue, spec: AnimationSpec) -> Self {
        Self { target, spec }
    }

    /// Projection of a display string; unknown forms fall back per
    /// [`MetricValue::parse_lenient`].
    pub fn from_display(display: &str, spec: AnimationSpec) -> Self {
        Self::new(MetricValue::parse_lenient(display), spec)
    }

    pub fn target(&self) -> MetricValue {
        self.target
    }

    pub fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= f64::from(self.spec.total_ms())
    }

    /// Interpolated value at `elapsed_ms`; exactly the target once finished.
    pub fn value_at(&self, elapsed_ms: f64) -> MetricValue {
        if self.is_finished(elapsed_ms) {
            return self.target;
        }
        let progress = self.spec.progress_at(elapsed_ms);
        let from = self.spec.from;
        let to = self.target.magnitude();
        self.target.with_magnitude(from + (to - from) * progress)
    }

    /// Lazy frame sequence, one value per `frame_ms`, ending at the target.
    pub fn frames(&self) -> Frames {
        let frame_ms = self.spec.frame_ms.max(1);
        let total = self.spec.total_ms();
        Frames {
            projection: *self,
            frame_ms,
            index: 0,
            last: u64::from(total.div_ceil(frame_ms)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Frames {
    projection: Projection,
    frame_ms: u32,
    // u64 so that `last + 1` fits even for a u32::MAX frame count
    index: u64,
    last: u64,
}

impl Iterator for Frames {
    type Item = MetricValue;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index > self.last {
            return None;
        }
        let elapsed = self.index as f64 * f64::from(self.frame_ms);
        self.index += 1;
        Some(self.projection.value_at(elapsed))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last + 1).saturating_sub(self.index);
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metric_value::CurrencyUnit;

    #[test]
    fn test_frames_start_and_end() {
        let projection = Projection::new(
            MetricValue::Plain(245.0),
            AnimationSpec::linear(160).with_frame(16),
        );
        let frames: Vec<MetricValue> = projection.frames().collect();
        assert_eq!(frames.len(), 11);
        assert_eq!(frames.first(), Some(&MetricValue::Plain(0.0)));
        assert_eq!(frames.last(), Some(&MetricValue::Plain(245.0)));
    }

    #[test]
    fn test_frames_are_monotonic() {
        for spec in [
            AnimationSpec::gentle(),
            AnimationSpec::molasses(),
            AnimationSpec::wobbly().with_delay(200),
        ] {
            let frames: Vec<f64> = Projection::new(MetricValue::Percent(32.0), spec)
                .frames()
                .map(|v| v.magnitude())
                .collect();
            assert!(frames.windows(2).all(|w| w[0] <= w[1]), "{:?}", spec);
            assert_eq!(*frames.last().unwrap(), 32.0);
        }
    }

    #[test]
    fn test_frames_keep_variant() {
        let target = MetricValue::dollars(84.5, CurrencyUnit::Thousands);
        let projection = Projection::new(target, AnimationSpec::gentle());
        assert!(projection
            .frames()
            .all(|v| matches!(v, MetricValue::Currency { unit: CurrencyUnit::Thousands, .. })));
        assert_eq!(projection.value_at(10_000.0).to_string(), "$84.5K");
    }

    #[test]
    fn test_delay_holds_start() {
        let projection = Projection::new(
            MetricValue::days(18.0),
            AnimationSpec::linear(100).with_delay(200).with_from(5.0),
        );
        assert_eq!(projection.value_at(0.0).magnitude(), 5.0);
        assert_eq!(projection.value_at(200.0).magnitude(), 5.0);
        assert_eq!(projection.value_at(250.0).magnitude(), 11.5);
        assert_eq!(projection.value_at(300.0), MetricValue::days(18.0));
    }

    #[test]
    fn test_zero_duration() {
        let projection = Projection::new(MetricValue::Plain(7.0), AnimationSpec::linear(0));
        let frames: Vec<MetricValue> = projection.frames().collect();
        assert_eq!(frames, vec![MetricValue::Plain(7.0)]);
    }

    #[test]
    fn test_longest_spec_does_not_overflow() {
        let projection = Projection::new(
            MetricValue::Plain(1.0),
            AnimationSpec::linear(u32::MAX).with_frame(1),
        );
        let mut frames = projection.frames();
        let expected = u64::from(u32::MAX) + 1;
        assert_eq!(frames.size_hint().0 as u64, expected.min(usize::MAX as u64));
        assert_eq!(frames.next(), Some(MetricValue::Plain(0.0)));

        // jump to the final frame
        frames.index = frames.last;
        assert_eq!(frames.next(), Some(MetricValue::Plain(1.0)));
        assert_eq!(frames.next(), None);
        assert_eq!(frames.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_from_display_fallback() {
        let projection = Projection::from_display("n/a", AnimationSpec::gentle());
        assert_eq!(projection.target(), MetricValue::Plain(0.0));
        let projection = Projection::from_display("+32%", AnimationSpec::gentle());
        assert_eq!(projection.target(), MetricValue::Percent(32.0));
    }

    #[test]
    fn test_easing_bounds() {
        for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
    }

    #[test]
    fn test_css_animation() {
        let spec = AnimationSpec::gentle().with_delay(80);
        assert_eq!(
            spec.css_animation("card-appear"),
            "animation: card-appear 800ms cubic-bezier(0.33, 1, 0.68, 1) 80ms both;"
        );
    }
}
