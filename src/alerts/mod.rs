//! The alert readout core: alert records, their escalation rules, the
//! registry that polls them, and the built-in colony alerts.

pub mod alert;
pub mod bell;
pub mod bounce;
pub mod cycle;
pub mod effect;
pub mod readout;
pub mod registry;
pub mod time;
pub mod variants;

pub use alert::{Alert, AlertContext, AlertDefaults, AlertKind, AlertTier, StreakChange};
pub use bell::BellThrottle;
pub use bounce::AlertBounce;
pub use cycle::{ClickButton, CycleCursor, positive_mod};
pub use effect::AlertEffect;
pub use readout::{AlertBanner, BANNER_HEIGHT, BANNER_WIDTH, Rect, ScreenSize};
pub use registry::AlertRegistry;
pub use time::AlertTime;
