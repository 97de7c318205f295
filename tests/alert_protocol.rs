mod common;

use bevy_ecs::world::World;
use colony_alerts::alerts::{AlertEffect, AlertRegistry, AlertTier, ClickButton};
use colony_alerts::config::AlertsConfig;
use colony_alerts::ecs::test_helpers::bell_count;
use colony_alerts::model::{AlertPriority, MessageSeverity, TargetRef};

use common::{Script, ScriptedAlert, at};

fn registry_with(
    alerts: &[(&'static str, AlertTier, AlertPriority)],
) -> (AlertRegistry, Vec<Script>) {
    let mut registry = AlertRegistry::new(AlertsConfig::default());
    let scripts = alerts
        .iter()
        .map(|&(key, tier, priority)| {
            let (alert, script) = ScriptedAlert::new(key, tier, priority);
            registry.register(Box::new(alert));
            script
        })
        .collect();
    (registry, scripts)
}

fn messages(effects: &[AlertEffect]) -> usize {
    effects
        .iter()
        .filter(|e| matches!(e, AlertEffect::Message { .. }))
        .count()
}

#[test]
fn inactive_alert_has_no_side_effects() {
    let world = World::new();
    let (mut registry, _scripts) =
        registry_with(&[("quiet", AlertTier::Critical, AlertPriority::Critical)]);

    for frame in 0..10 {
        assert!(registry.tick(&world, &at(frame, 10.0 + frame as f64)).is_empty());
    }
    let alert = registry.get("quiet").unwrap();
    assert!(!alert.bounce().has_started());
    assert_eq!(alert.last_bell_time(), None);
    assert_eq!(alert.last_active_frame(), None);
}

#[test]
fn start_effect_fires_once_per_streak() {
    let world = World::new();
    let (mut registry, scripts) =
        registry_with(&[("high", AlertTier::Normal, AlertPriority::High)]);

    let mut bells_per_tick = Vec::new();
    for (frame, active) in [false, true, true, false, true].into_iter().enumerate() {
        scripts[0].set_active(active);
        let effects = registry.tick(&world, &at(frame as u64, 10.0 + frame as f64));
        bells_per_tick.push(bell_count(&effects));
    }
    assert_eq!(bells_per_tick, vec![0, 1, 0, 0, 1]);
    assert_eq!(registry.get("high").unwrap().last_bell_time(), Some(14.0));
}

#[test]
fn bell_is_throttled_across_alerts() {
    let world = World::new();
    let (mut registry, scripts) = registry_with(&[
        ("first", AlertTier::Normal, AlertPriority::High),
        ("second", AlertTier::Normal, AlertPriority::High),
        ("third", AlertTier::Normal, AlertPriority::High),
    ]);

    scripts[0].set_active(true);
    assert_eq!(bell_count(&registry.tick(&world, &at(0, 10.0))), 1);

    // 0.3s later: starts, bounces, but stays silent.
    scripts[1].set_active(true);
    assert_eq!(bell_count(&registry.tick(&world, &at(1, 10.3))), 0);
    assert!(registry.get("second").unwrap().bounce().has_started());
    assert_eq!(registry.get("second").unwrap().last_bell_time(), None);

    // 0.5s after the last ring: rings again.
    scripts[2].set_active(true);
    assert_eq!(bell_count(&registry.tick(&world, &at(2, 10.5))), 1);
    assert_eq!(registry.bell().last_ring(), Some(10.5));
}

#[test]
fn critical_announces_once_per_continuous_streak() {
    let world = World::new();

    let (mut registry, scripts) =
        registry_with(&[("crit", AlertTier::Critical, AlertPriority::Low)]);
    scripts[0].set_active(true);
    let continuous: usize = (0..3)
        .map(|frame| messages(&registry.tick(&world, &at(frame, 10.0))))
        .sum();
    assert_eq!(continuous, 1);

    let (mut registry, scripts) =
        registry_with(&[("crit", AlertTier::Critical, AlertPriority::Low)]);
    let mut flickering = 0;
    for (frame, active) in [true, false, true].into_iter().enumerate() {
        scripts[0].set_active(active);
        flickering += messages(&registry.tick(&world, &at(frame as u64, 10.0)));
    }
    assert_eq!(flickering, 2);
}

#[test]
fn critical_message_names_label_and_culprits() {
    let mut world = World::new();
    let culprit = world.spawn_empty().id();
    let (mut registry, scripts) =
        registry_with(&[("crit", AlertTier::Critical, AlertPriority::Low)]);
    scripts[0].set_culprits(vec![culprit]);
    scripts[0].set_active(true);

    let effects = registry.tick(&world, &at(0, 0.0));
    // Session time is inside the startup grace: message, but no bell.
    assert_eq!(bell_count(&effects), 0);
    assert_eq!(
        effects,
        vec![AlertEffect::Message {
            alert: "crit",
            severity: MessageSeverity::ThreatBig,
            text: "Critical alert: Crit label".to_string(),
            targets: vec![TargetRef(culprit)],
        }]
    );
}

#[test]
fn clicks_cycle_with_true_modulo() {
    let mut world = World::new();
    let culprits: Vec<_> = (0..3).map(|_| world.spawn_empty().id()).collect();
    let (mut registry, scripts) =
        registry_with(&[("cycle", AlertTier::Normal, AlertPriority::Medium)]);
    scripts[0].set_culprits(culprits.clone());
    scripts[0].set_active(true);

    let buttons = [
        ClickButton::Primary,
        ClickButton::Secondary,
        ClickButton::Secondary,
        ClickButton::Secondary,
        ClickButton::Primary,
    ];
    let picked: Vec<usize> = buttons
        .iter()
        .map(|&button| {
            let target = registry
                .click("cycle", button, &world, &at(0, 10.0))
                .unwrap();
            culprits.iter().position(|&c| c == target.entity()).unwrap()
        })
        .collect();
    assert_eq!(picked, vec![1, 0, 2, 1, 2]);
    assert_eq!(registry.get("cycle").unwrap().cursor().value(), -1);
}

#[test]
fn click_indexes_the_live_culprit_list() {
    let mut world = World::new();
    let culprits: Vec<_> = (0..4).map(|_| world.spawn_empty().id()).collect();
    let (mut registry, scripts) =
        registry_with(&[("live", AlertTier::Normal, AlertPriority::Medium)]);
    scripts[0].set_culprits(culprits.clone());
    scripts[0].set_active(true);

    for _ in 0..3 {
        registry.click("live", ClickButton::Primary, &world, &at(0, 10.0));
    }
    // Cursor is at 3 when the list shrinks to two; the next click lands on 4 mod 2.
    scripts[0].set_culprits(culprits[..2].to_vec());
    let next = registry.click("live", ClickButton::Primary, &world, &at(0, 10.0));
    assert_eq!(next, Some(TargetRef(culprits[0])));

    // Everything despawned: no jump, cursor stays put.
    for &c in &culprits {
        world.despawn(c);
    }
    assert_eq!(
        registry.click("live", ClickButton::Primary, &world, &at(0, 10.0)),
        None
    );
    assert_eq!(registry.get("live").unwrap().cursor().value(), 4);
}

#[test]
fn inactive_report_ignores_culprits() {
    let mut world = World::new();
    let culprit = world.spawn_empty().id();
    let (mut registry, scripts) =
        registry_with(&[("dormant", AlertTier::Critical, AlertPriority::Critical)]);
    scripts[0].set_culprits(vec![culprit]);
    scripts[0].set_active(false);

    assert!(registry.tick(&world, &at(0, 10.0)).is_empty());
    assert_eq!(
        registry.click("dormant", ClickButton::Primary, &world, &at(0, 10.0)),
        None
    );
    assert_eq!(
        registry.info_text("dormant", &world, &at(0, 10.0)).unwrap(),
        "dormant explanation"
    );
}

#[test]
fn high_alert_bounces_and_rings_once() {
    let world = World::new();
    let (mut registry, scripts) =
        registry_with(&[("high", AlertTier::Normal, AlertPriority::High)]);
    scripts[0].set_active(true);

    let effects = registry.tick(&world, &at(0, 1.5));
    assert_eq!(bell_count(&effects), 1);
    let alert = registry.get("high").unwrap();
    assert!(alert.bounce().has_started());
    assert!(alert.horizontal_offset(1.5) > 0.0);
    assert_eq!(alert.horizontal_offset(3.0), 0.0);
}
