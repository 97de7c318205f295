use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};

use super::clock::GameClock;
use super::events::AlertClick;
use super::plugin::{AlertsPlugin, ColonySimPlugin};
use super::resources::{CameraFocus, ColonyMap, MessageLog, SoundQueue};
use super::schedule::{SimPhase, configure_sim_schedule};
use crate::alerts::AlertRegistry;
use crate::config::AlertsConfig;

/// Build a headless Bevy app with the game clock, the alert registry holding
/// every built-in alert, the collaborator resources, and the alert systems.
///
/// Manual tick control:
/// ```no_run
/// # use colony_alerts::config::AlertsConfig;
/// # use colony_alerts::ecs::{build_alert_app, SimTick};
/// let mut app = build_alert_app(AlertsConfig::default());
/// for _ in 0..600 {  // ten seconds at 60 ticks per second
///     app.world_mut().run_schedule(SimTick);
/// }
/// ```
pub fn build_alert_app(config: AlertsConfig) -> App {
    let registry = AlertRegistry::with_default_alerts(config.clone());
    build_alert_app_with_registry(config, registry)
}

/// Same as [`build_alert_app`] but with a caller-supplied registry, for
/// tests and embedders with their own alert kinds.
pub fn build_alert_app_with_registry(config: AlertsConfig, registry: AlertRegistry) -> App {
    let mut app = App::empty();

    // Core resources
    app.insert_resource(GameClock::new());
    app.insert_resource(registry);
    app.insert_resource(config);
    app.init_resource::<ColonyMap>();

    // Collaborators the alert effects land in
    app.init_resource::<MessageLog>();
    app.init_resource::<SoundQueue>();
    app.init_resource::<CameraFocus>();

    // Register message types
    MessageRegistry::register_message::<AlertClick>(app.world_mut());

    // Exclusive systems keep the tick order identical across runs
    let mut schedule = configure_sim_schedule(ExecutorKind::SingleThreaded);
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(SimPhase::PreUpdate));
    app.add_schedule(schedule);

    app.add_plugins((ColonySimPlugin, AlertsPlugin));
    app
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::ecs::schedule::SimTick;

    #[test]
    fn app_builds_with_default_alerts() {
        let app = build_alert_app(AlertsConfig::default());
        let registry = app.world().resource::<AlertRegistry>();
        assert_eq!(registry.len(), 9);
        assert_eq!(app.world().resource::<GameClock>().tick_count, 0);
    }

    #[test]
    fn single_tick_advances_clock() {
        let mut app = build_alert_app(AlertsConfig {
            seconds_per_tick: 0.25,
            ..AlertsConfig::default()
        });
        app.world_mut().run_schedule(SimTick);
        let clock = app.world().resource::<GameClock>();
        assert_eq!(clock.tick_count, 1);
        assert_eq!(clock.real_seconds, 0.25);
        assert_eq!(clock.session_seconds, 0.25);
    }

    #[test]
    fn phase_ordering_respected() {
        let log = Arc::new(Mutex::new(Vec::<&'static str>::new()));

        let log1 = log.clone();
        let log2 = log.clone();
        let log3 = log.clone();
        let log4 = log.clone();

        let mut app = build_alert_app(AlertsConfig::default());
        app.add_systems(
            SimTick,
            (move || {
                log1.lock().unwrap().push("pre_update");
            })
            .in_set(SimPhase::PreUpdate),
        );
        app.add_systems(
            SimTick,
            (move || {
                log2.lock().unwrap().push("update");
            })
            .in_set(SimPhase::Update),
        );
        app.add_systems(
            SimTick,
            (move || {
                log3.lock().unwrap().push("post_update");
            })
            .in_set(SimPhase::PostUpdate),
        );
        app.add_systems(
            SimTick,
            (move || {
                log4.lock().unwrap().push("last");
            })
            .in_set(SimPhase::Last),
        );

        app.world_mut().run_schedule(SimTick);

        let entries = log.lock().unwrap();
        assert_eq!(*entries, vec!["pre_update", "update", "post_update", "last"]);
    }
}
