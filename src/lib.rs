pub mod alerts;
pub mod config;
pub mod ecs;
pub mod error;
pub mod flush;
pub mod model;
pub mod scenario;

pub use alerts::{
    Alert, AlertContext, AlertDefaults, AlertEffect, AlertKind, AlertRegistry, AlertTier,
    AlertTime, ClickButton,
};
pub use config::{AlertOverride, AlertsConfig};
pub use error::{AlertsError, Result};
pub use model::{AlertPriority, AlertReport, TargetRef};
