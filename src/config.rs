use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::AlertPriority;

/// Per-alert overrides, keyed by the alert's stable key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertOverride {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Replaces the alert's default priority when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<AlertPriority>,
}

fn default_enabled() -> bool {
    true
}

impl Default for AlertOverride {
    fn default() -> Self {
        Self {
            enabled: true,
            priority: None,
        }
    }
}

/// Tick length used when the configured one is unusable.
pub const DEFAULT_SECONDS_PER_TICK: f64 = 1.0 / 60.0;

/// Alert readout configuration. Every field has a default, so a partial JSON
/// file (or `{}`) is a valid config.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertsConfig {
    /// Minimum real time between two bells, process-wide.
    pub bell_throttle_secs: f64,
    /// Session time before any bell may ring.
    pub startup_grace_secs: f64,
    /// Real seconds the scheduled clock advances per tick.
    pub seconds_per_tick: f64,
    pub bounce_duration_secs: f64,
    pub bounce_start_offset: f32,
    pub screen_width: f32,
    pub screen_height: f32,
    pub alerts: BTreeMap<String, AlertOverride>,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            bell_throttle_secs: 0.5,
            startup_grace_secs: 1.0,
            seconds_per_tick: DEFAULT_SECONDS_PER_TICK,
            bounce_duration_secs: 1.0,
            bounce_start_offset: 300.0,
            screen_width: 1920.0,
            screen_height: 1080.0,
            alerts: BTreeMap::new(),
        }
    }
}

impl AlertsConfig {
    /// Load from `path`. A non-positive or non-finite `seconds_per_tick` is
    /// replaced by the default.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&content)?;
        if !config.has_valid_tick_length() {
            tracing::warn!(
                seconds_per_tick = config.seconds_per_tick,
                "Invalid tick length in {}, using default",
                path.display()
            );
            config.seconds_per_tick = DEFAULT_SECONDS_PER_TICK;
        }
        Ok(config)
    }

    /// Load from `path`, falling back to defaults if the file is missing or
    /// malformed.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load alert config from {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn has_valid_tick_length(&self) -> bool {
        self.seconds_per_tick.is_finite() && self.seconds_per_tick > 0.0
    }

    /// Seconds the clock advances per tick; always positive.
    pub fn tick_length(&self) -> f64 {
        if self.has_valid_tick_length() {
            self.seconds_per_tick
        } else {
            DEFAULT_SECONDS_PER_TICK
        }
    }

    pub fn is_enabled(&self, key: &str) -> bool {
        self.alerts.get(key).is_none_or(|o| o.enabled)
    }

    pub fn priority_override(&self, key: &str) -> Option<AlertPriority> {
        self.alerts.get(key).and_then(|o| o.priority)
    }

    /// Builder-style helper used by tests and the demo.
    pub fn with_override(mut self, key: &str, over: AlertOverride) -> Self {
        self.alerts.insert(key.to_string(), over);
        self
    }
}
