#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use bevy_ecs::entity::Entity;
use colony_alerts::alerts::{AlertContext, AlertDefaults, AlertKind, AlertTier, AlertTime};
use colony_alerts::model::{AlertPriority, AlertReport};

/// Shared handle for steering a [`ScriptedAlert`] from a test.
#[derive(Clone, Default)]
pub struct Script {
    state: Arc<Mutex<(bool, Vec<Entity>)>>,
}

impl Script {
    pub fn set_active(&self, active: bool) {
        self.state.lock().unwrap().0 = active;
    }

    pub fn set_culprits(&self, culprits: Vec<Entity>) {
        self.state.lock().unwrap().1 = culprits;
    }
}

/// Alert whose report is whatever the test last scripted.
pub struct ScriptedAlert {
    pub key: &'static str,
    pub tier: AlertTier,
    pub priority: AlertPriority,
    pub script: Script,
}

impl ScriptedAlert {
    pub fn new(key: &'static str, tier: AlertTier, priority: AlertPriority) -> (Self, Script) {
        let script = Script::default();
        (
            Self {
                key,
                tier,
                priority,
                script: script.clone(),
            },
            script,
        )
    }
}

impl AlertKind for ScriptedAlert {
    fn key(&self) -> &'static str {
        self.key
    }

    fn tier(&self) -> AlertTier {
        self.tier
    }

    fn defaults(&self) -> AlertDefaults {
        AlertDefaults::new(format!("{} label", self.key))
            .explanation(format!("{} explanation", self.key))
            .priority(self.priority)
    }

    fn report(&self, _ctx: &AlertContext) -> AlertReport {
        let state = self.script.state.lock().unwrap();
        AlertReport::new(state.0, state.1.iter().copied().map(Into::into).collect())
    }
}

/// Clock snapshot with real and session time both at `seconds`.
pub fn at(frame: u64, seconds: f64) -> AlertTime {
    AlertTime::new(frame, seconds, seconds)
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
