use super::time::AlertTime;

/// Process-wide limiter for the "alert started" bell.
///
/// Owned by the registry and shared by every alert, so a burst of alerts
/// starting in the same tick rings once.
#[derive(Debug, Clone, PartialEq)]
pub struct BellThrottle {
    min_interval_secs: f64,
    startup_grace_secs: f64,
    last_ring: Option<f64>,
}

impl BellThrottle {
    pub fn new(min_interval_secs: f64, startup_grace_secs: f64) -> Self {
        Self {
            min_interval_secs,
            startup_grace_secs,
            last_ring: None,
        }
    }

    /// Real time of the most recent ring, if any.
    pub fn last_ring(&self) -> Option<f64> {
        self.last_ring
    }

    /// Record a ring and return true if one is allowed at `time`.
    ///
    /// Never rings before `startup_grace_secs` of session time, and never
    /// within `min_interval_secs` of real time after the previous ring.
    pub fn try_ring(&mut self, time: &AlertTime) -> bool {
        if time.session_seconds < self.startup_grace_secs {
            return false;
        }
        let quiet_long_enough = self
            .last_ring
            .is_none_or(|last| time.real_seconds - last >= self.min_interval_secs);
        if !quiet_long_enough {
            return false;
        }
        self.last_ring = Some(time.real_seconds);
        true
    }
}

impl Default for BellThrottle {
    fn default() -> Self {
        Self::new(0.5, 1.0)
    }
}
