use bevy_app::{App, Plugin};

use super::systems::alerts::add_alert_systems;
use super::systems::needs::add_need_systems;

/// Polls the alert registry each tick and applies what it asks for.
pub struct AlertsPlugin;

impl Plugin for AlertsPlugin {
    fn build(&self, app: &mut App) {
        add_alert_systems(app);
    }
}

/// The minimal colony simulation the built-in alerts watch.
pub struct ColonySimPlugin;

impl Plugin for ColonySimPlugin {
    fn build(&self, app: &mut App) {
        add_need_systems(app);
    }
}
