//! Horizontal "bounce" that pulls a freshly started alert banner out of the
//! stack and lets it settle back.
//!
//! The offset is a closed-form function of time since the effect started: a
//! rectified cosine (three bounces) under a quadratic envelope that reaches
//! exactly zero at the end of the window.

/// Bounces before the banner settles.
const BOUNCES: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AlertBounce {
    started_at: Option<f64>,
    duration: f64,
    start_offset: f32,
}

impl AlertBounce {
    pub const DEFAULT_DURATION_SECS: f64 = 1.0;
    pub const DEFAULT_START_OFFSET: f32 = 300.0;

    pub fn new(duration: f64, start_offset: f32) -> Self {
        Self {
            started_at: None,
            duration: duration.max(f64::EPSILON),
            start_offset,
        }
    }

    /// Restart the animation at real time `now`.
    pub fn do_alert_start_effect(&mut self, now: f64) {
        self.started_at = Some(now);
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Pixels to shift the banner left at real time `now`. Zero before the
    /// first start, and zero once the window has elapsed.
    pub fn horizontal_offset(&self, now: f64) -> f32 {
        let Some(started_at) = self.started_at else {
            return 0.0;
        };
        let elapsed = (now - started_at).max(0.0);
        if elapsed >= self.duration {
            return 0.0;
        }
        let progress = elapsed / self.duration;
        let envelope = (1.0 - progress).powi(2);
        let bounce = (progress * BOUNCES * std::f64::consts::PI).cos().abs();
        (f64::from(self.start_offset) * envelope * bounce) as f32
    }
}

impl Default for AlertBounce {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION_SECS, Self::DEFAULT_START_OFFSET)
    }
}
