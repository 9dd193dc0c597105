//! Animation timing primitives.

use std::time::Duration;

/// Progress of `elapsed` through `duration`, clamped to `[0, 1]`.
#[must_use]
pub fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Standard easing for motion effects (smooth scroll, overlays).
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// A fixed-duration timer advanced by frame deltas.
#[derive(Debug, Clone)]
pub struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{EffectTimer, ease_out_cubic, normalized_progress};

    #[test]
    fn zero_duration_is_immediately_finished() {
        let timer = EffectTimer::new(Duration::ZERO);
        assert!(timer.is_finished());
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn progress_clamps_past_duration() {
        let mut timer = EffectTimer::new(Duration::from_millis(100));
        timer.advance(Duration::from_millis(250));
        assert_eq!(timer.progress(), 1.0);
        assert!(timer.is_finished());
    }

    #[test]
    fn ease_out_cubic_is_monotonic_and_bounded() {
        let mut prev = ease_out_cubic(0.0);
        assert_eq!(prev, 0.0);
        for i in 1..=10 {
            let t = i as f32 / 10.0;
            let eased = ease_out_cubic(t);
            assert!(eased >= prev);
            prev = eased;
        }
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(normalized_progress(Duration::from_secs(1), Duration::from_secs(2)), 0.5);
    }
}
