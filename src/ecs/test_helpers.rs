use bevy_app::App;

use crate::alerts::AlertEffect;
use crate::ecs::schedule::SimTick;

/// Run `n` scheduled ticks.
pub fn tick_n(app: &mut App, n: u64) {
    for _ in 0..n {
        app.world_mut().run_schedule(SimTick);
    }
}

/// Count of bell sounds in a batch of effects.
pub fn bell_count(effects: &[AlertEffect]) -> usize {
    effects
        .iter()
        .filter(|e| matches!(e, AlertEffect::PlaySound(_)))
        .count()
}
