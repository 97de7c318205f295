//! Alert readout systems.
//!
//! Two exclusive systems in `SimPhase::PostUpdate`:
//! 1. `update_alerts` polls the registry and refreshes the banner readout
//! 2. `handle_alert_clicks` routes banner clicks to their alerts
//!
//! Both hand the resulting effects to `apply_alert_effects`, which is the
//! only place the audio, message, and camera resources are written.

use bevy_app::App;
use bevy_ecs::message::Messages;
use bevy_ecs::resource::Resource;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::world::World;

use crate::alerts::{AlertBanner, AlertEffect, AlertRegistry, AlertTime, ScreenSize};
use crate::ecs::clock::GameClock;
use crate::ecs::components::Cell;
use crate::ecs::events::AlertClick;
use crate::ecs::resources::{CameraFocus, MessageLog, SoundQueue};
use crate::ecs::schedule::{SimPhase, SimTick};

/// Banners the renderer should draw this frame, most urgent first.
#[derive(Resource, Debug, Clone, Default)]
pub struct AlertReadout {
    pub banners: Vec<AlertBanner>,
}

// ---------------------------------------------------------------------------
// Plugin registration
// ---------------------------------------------------------------------------

pub fn add_alert_systems(app: &mut App) {
    app.init_resource::<AlertReadout>();
    app.add_systems(
        SimTick,
        (update_alerts, handle_alert_clicks)
            .chain()
            .in_set(SimPhase::PostUpdate),
    );
}

fn current_time(world: &World) -> AlertTime {
    world
        .get_resource::<GameClock>()
        .map(GameClock::alert_time)
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// System 1: poll alerts
// ---------------------------------------------------------------------------

pub fn update_alerts(world: &mut World) {
    let Some(mut registry) = world.remove_resource::<AlertRegistry>() else {
        return;
    };
    let time = current_time(world);

    let effects = registry.tick(world, &time);
    let screen = ScreenSize {
        width: registry.config().screen_width,
        height: registry.config().screen_height,
    };
    let banners = registry.banners(world, &time, screen);
    world.insert_resource(registry);

    world.insert_resource(AlertReadout { banners });
    apply_alert_effects(world, &time, effects);
}

// ---------------------------------------------------------------------------
// System 2: banner clicks
// ---------------------------------------------------------------------------

pub fn handle_alert_clicks(world: &mut World) {
    let clicks: Vec<AlertClick> = {
        let Some(mut messages) = world.get_resource_mut::<Messages<AlertClick>>() else {
            return;
        };
        messages.drain().collect()
    };
    if clicks.is_empty() {
        return;
    }

    let Some(mut registry) = world.remove_resource::<AlertRegistry>() else {
        return;
    };
    let time = current_time(world);

    let mut effects = Vec::new();
    for click in &clicks {
        if let Some(target) = registry.click(&click.key, click.button, world, &time) {
            if let Some(alert) = registry.get(&click.key) {
                effects.push(AlertEffect::JumpTo {
                    alert: alert.key(),
                    target,
                });
            }
        }
    }
    world.insert_resource(registry);

    apply_alert_effects(world, &time, effects);
}

// ---------------------------------------------------------------------------
// Effect application
// ---------------------------------------------------------------------------

/// Hand each effect to its collaborator resource. Missing resources are
/// created on first use.
pub fn apply_alert_effects(world: &mut World, time: &AlertTime, effects: Vec<AlertEffect>) {
    for effect in effects {
        match effect {
            AlertEffect::PlaySound(cue) => {
                world
                    .get_resource_or_insert_with(SoundQueue::default)
                    .play(time.frame, cue);
            }
            AlertEffect::Message {
                alert,
                severity,
                text,
                targets,
            } => {
                let entities: Vec<_> = targets.iter().map(|t| t.entity()).collect();
                world
                    .get_resource_or_insert_with(MessageLog::default)
                    .push(time.frame, time.real_seconds, alert, severity, text, &entities);
            }
            AlertEffect::JumpTo { alert, target } => {
                let cell = world.get::<Cell>(target.entity()).copied();
                tracing::debug!(alert, culprit = ?target.entity(), ?cell, "Camera jump");
                world
                    .get_resource_or_insert_with(CameraFocus::default)
                    .jump_and_select(target.entity(), cell);
            }
        }
    }
}
