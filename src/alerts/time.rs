/// Snapshot of the clocks an alert cares about, taken once per tick.
///
/// `real_seconds` is unscaled wall time since startup (drives the bell
/// throttle and animations). `session_seconds` is scaled play time since the
/// current session began (drives the startup grace period). `frame` counts
/// ticks and is what critical alerts use to tell a continuing streak from a
/// fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AlertTime {
    pub frame: u64,
    pub real_seconds: f64,
    pub session_seconds: f64,
}

impl AlertTime {
    pub fn new(frame: u64, real_seconds: f64, session_seconds: f64) -> Self {
        Self {
            frame,
            real_seconds,
            session_seconds,
        }
    }
}
