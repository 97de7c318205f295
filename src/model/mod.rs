pub mod color;
pub mod message;
pub mod priority;
pub mod report;

pub use color::{BgColor, pulse_brightness};
pub use message::{MessageSeverity, SoundCue, capitalize_first};
pub use priority::AlertPriority;
pub use report::{AlertReport, TargetRef};
