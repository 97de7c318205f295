//! Need decay: the slow pull that eventually trips the exhaustion and
//! boredom alerts.

use bevy_app::App;
use bevy_ecs::query::With;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::Query;

use crate::ecs::components::{Colonist, InBed, Needs};
use crate::ecs::schedule::{SimPhase, SimTick};

/// Rest lost per tick while awake; a full bar lasts about half a day.
pub const REST_FALL_PER_TICK: f32 = 1.0 / 30_000.0;
/// Rest regained per tick in bed.
pub const REST_GAIN_PER_TICK: f32 = 1.0 / 10_000.0;
pub const JOY_FALL_PER_TICK: f32 = 1.0 / 40_000.0;

pub fn add_need_systems(app: &mut App) {
    app.add_systems(SimTick, decay_needs.in_set(SimPhase::Update));
}

pub fn decay_needs(mut pawns: Query<(&mut Needs, Option<&InBed>), With<Colonist>>) {
    for (mut needs, bed) in pawns.iter_mut() {
        if let Some(rest) = needs.rest.as_mut() {
            let delta = if bed.is_some() {
                REST_GAIN_PER_TICK
            } else {
                -REST_FALL_PER_TICK
            };
            *rest = (*rest + delta).clamp(0.0, 1.0);
        }
        if let Some(joy) = needs.joy.as_mut() {
            *joy = (*joy - JOY_FALL_PER_TICK).max(0.0);
        }
    }
}
