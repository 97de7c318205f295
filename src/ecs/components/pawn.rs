use std::collections::VecDeque;

use bevy_ecs::component::Component;
use serde::{Deserialize, Serialize};

/// Pawn is incapacitated and cannot move on its own.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Downed;

/// Pawn is currently lying in a bed.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct InBed {
    pub medical: bool,
}

/// Pawn is being carried by another pawn.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Carried;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedJob {
    pub label: String,
    pub can_begin_now: bool,
}

/// Jobs the pawn will take once the current one ends.
#[derive(Component, Debug, Clone, Default)]
pub struct JobQueue {
    pub jobs: VecDeque<QueuedJob>,
}

impl JobQueue {
    pub fn push(&mut self, label: impl Into<String>, can_begin_now: bool) {
        self.jobs.push_back(QueuedJob {
            label: label.into(),
            can_begin_now,
        });
    }

    /// True when the next queued job could start right now.
    pub fn next_can_begin(&self) -> bool {
        self.jobs.front().is_some_and(|job| job.can_begin_now)
    }
}

// ---------------------------------------------------------------------------
// Needs
// ---------------------------------------------------------------------------

pub const REST_THRESHOLD_TIRED: f32 = 0.28;
pub const REST_THRESHOLD_VERY_TIRED: f32 = 0.14;
pub const REST_THRESHOLD_EXHAUSTED: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RestCategory {
    Exhausted,
    VeryTired,
    Tired,
    Rested,
}

impl RestCategory {
    pub fn from_level(level: f32) -> Self {
        if level < REST_THRESHOLD_EXHAUSTED {
            RestCategory::Exhausted
        } else if level < REST_THRESHOLD_VERY_TIRED {
            RestCategory::VeryTired
        } else if level < REST_THRESHOLD_TIRED {
            RestCategory::Tired
        } else {
            RestCategory::Rested
        }
    }
}

/// Need levels in `[0, 1]`. `None` means the pawn lacks that need entirely.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Needs {
    pub rest: Option<f32>,
    pub joy: Option<f32>,
}

impl Default for Needs {
    fn default() -> Self {
        Self {
            rest: Some(1.0),
            joy: Some(1.0),
        }
    }
}

impl Needs {
    pub fn rest_category(&self) -> Option<RestCategory> {
        self.rest.map(RestCategory::from_level)
    }
}

/// Whether the pawn has grown tired of every recreation kind on its map.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct JoyTolerance {
    pub bored_of_all_available: bool,
}

/// What the pawn's schedule says it should be doing this hour.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeAssignment {
    #[default]
    Anything,
    Work,
    Joy,
    Sleep,
}

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Health {
    /// Has injuries or illnesses the player should tend.
    pub needs_tend: bool,
    /// Has a surgery bill that should be done now.
    pub needs_surgery: bool,
}

// ---------------------------------------------------------------------------
// Character
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitKind {
    Brawler,
    Industrious,
    Kind,
    Pyromaniac,
}

#[derive(Component, Debug, Clone, Default)]
pub struct Traits(pub Vec<TraitKind>);

impl Traits {
    pub fn has(&self, kind: TraitKind) -> bool {
        self.0.contains(&kind)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    pub name: String,
    pub ranged: bool,
}

impl Weapon {
    pub fn melee(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ranged: false,
        }
    }

    pub fn ranged(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ranged: true,
        }
    }
}

#[derive(Component, Debug, Clone, Default)]
pub struct Equipment {
    pub primary: Option<Weapon>,
}

impl Equipment {
    pub fn primary_is_ranged(&self) -> bool {
        self.primary.as_ref().is_some_and(|w| w.ranged)
    }
}

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct MindState {
    pub idle: bool,
}
