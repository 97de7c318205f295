use bevy_app::App;
use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Res, ResMut};

use crate::alerts::AlertTime;
use crate::config::{AlertsConfig, DEFAULT_SECONDS_PER_TICK};
use crate::ecs::schedule::SimTick;

/// Game ticks in one in-game day.
pub const TICKS_PER_DAY: u64 = 60_000;

/// Game clock resource: tick counter plus the two wall clocks alerts need.
///
/// The `advance_clock` system moves the clock forward at the end of each
/// tick (in `SimPhase::Last`), so systems see the current time before it
/// advances.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameClock {
    pub tick_count: u64,
    /// Unscaled seconds since startup.
    pub real_seconds: f64,
    /// Seconds since the current session began, scaled by `time_scale`.
    pub session_seconds: f64,
    pub time_scale: f64,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            tick_count: 0,
            real_seconds: 0.0,
            session_seconds: 0.0,
            time_scale: 1.0,
        }
    }
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick that took `real_dt` seconds of wall time.
    pub fn advance(&mut self, real_dt: f64) {
        self.tick_count += 1;
        self.real_seconds += real_dt;
        self.session_seconds += real_dt * self.time_scale;
    }

    /// Whole in-game days since the colony was founded.
    pub fn days_passed(&self) -> u64 {
        self.tick_count / TICKS_PER_DAY
    }

    pub fn alert_time(&self) -> AlertTime {
        AlertTime::new(self.tick_count, self.real_seconds, self.session_seconds)
    }
}

/// Bevy system that advances the clock by the configured tick length.
/// Registered in `SimPhase::Last` so all other systems see the current
/// time before it advances.
pub fn advance_clock(mut clock: ResMut<GameClock>, config: Option<Res<AlertsConfig>>) {
    let dt = config.map_or(DEFAULT_SECONDS_PER_TICK, |c| c.tick_length());
    clock.advance(dt);
}

/// Run scheduled ticks until `seconds` of real time have passed on the
/// clock. Returns the number of ticks run.
///
/// Gives up after the tick count the configured tick length implies (plus
/// one), in case something else holds the clock still.
pub fn run_for_seconds(app: &mut App, seconds: f64) -> u64 {
    let step = app
        .world()
        .get_resource::<AlertsConfig>()
        .map_or(DEFAULT_SECONDS_PER_TICK, AlertsConfig::tick_length);
    let max_ticks = (seconds.max(0.0) / step).ceil() as u64 + 1;
    let target = app.world().resource::<GameClock>().real_seconds + seconds;

    let mut ticks = 0;
    while ticks < max_ticks && app.world().resource::<GameClock>().real_seconds < target {
        app.world_mut().run_schedule(SimTick);
        ticks += 1;
    }
    if app.world().resource::<GameClock>().real_seconds < target {
        tracing::warn!(ticks, seconds, "Clock stalled before the requested time passed");
    }
    ticks
}
