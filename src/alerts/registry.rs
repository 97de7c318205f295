use std::panic::{self, AssertUnwindSafe};

use bevy_ecs::resource::Resource;
use bevy_ecs::world::World;

use super::alert::{Alert, AlertKind, StreakChange};
use super::bell::BellThrottle;
use super::cycle::ClickButton;
use super::effect::AlertEffect;
use super::readout::{AlertBanner, BannerEntry, ScreenSize, layout_banners};
use super::time::AlertTime;
use super::variants::default_alerts;
use crate::config::AlertsConfig;
use crate::error::{AlertsError, Result};
use crate::model::TargetRef;

/// Owns every registered alert and the bell throttle they share.
///
/// Alerts are polled in registration order. A panicking alert is logged and
/// treated as inactive for that tick; the rest still run.
#[derive(Resource, Debug)]
pub struct AlertRegistry {
    alerts: Vec<Alert>,
    bell: BellThrottle,
    config: AlertsConfig,
}

impl AlertRegistry {
    pub fn new(config: AlertsConfig) -> Self {
        Self {
            alerts: Vec::new(),
            bell: BellThrottle::new(config.bell_throttle_secs, config.startup_grace_secs),
            config,
        }
    }

    /// Registry with every built-in colony alert registered.
    pub fn with_default_alerts(config: AlertsConfig) -> Self {
        let mut registry = Self::new(config);
        for kind in default_alerts() {
            registry.register(kind);
        }
        registry
    }

    /// Add an alert. Config overrides for its key are applied here.
    pub fn register(&mut self, kind: Box<dyn AlertKind>) {
        let alert = Alert::new(kind, &self.config);
        tracing::debug!(
            alert = alert.key(),
            enabled = alert.is_enabled(),
            "Registered alert"
        );
        self.alerts.push(alert);
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.key() == key)
    }

    fn get_mut(&mut self, key: &str) -> Result<&mut Alert> {
        self.alerts
            .iter_mut()
            .find(|a| a.key() == key)
            .ok_or_else(|| AlertsError::UnknownAlert(key.to_string()))
    }

    pub fn set_enabled(&mut self, key: &str, enabled: bool) -> Result<()> {
        self.get_mut(key)?.set_enabled(enabled);
        Ok(())
    }

    pub fn bell(&self) -> &BellThrottle {
        &self.bell
    }

    pub fn config(&self) -> &AlertsConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Per-tick polling
    // -----------------------------------------------------------------------

    /// Poll every enabled alert once and collect the effects to apply.
    ///
    /// For each alert: evaluate activity, detect an inactive-to-active edge
    /// and run the start hook on it, then run the active hook while active.
    pub fn tick(&mut self, world: &World, time: &AlertTime) -> Vec<AlertEffect> {
        let mut effects = Vec::new();
        let bell = &mut self.bell;

        for alert in self.alerts.iter_mut().filter(|a| a.is_enabled()) {
            let mut local = Vec::new();
            let bell_before = bell.clone();
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                step_alert(alert, world, time, bell, &mut local)
            }));

            match outcome {
                Ok(StreakChange::Started) => {
                    tracing::info!(
                        alert = alert.key(),
                        frame = time.frame,
                        "Alert started"
                    );
                }
                Ok(StreakChange::Ended) => {
                    tracing::debug!(alert = alert.key(), frame = time.frame, "Alert cleared");
                }
                Ok(_) => {}
                Err(payload) => {
                    tracing::warn!(
                        alert = alert.key(),
                        frame = time.frame,
                        "Alert evaluation panicked: {}",
                        panic_message(payload.as_ref())
                    );
                    // A ring that never reaches the effects must not throttle the others.
                    *bell = bell_before;
                    alert.observe(false);
                    continue;
                }
            }
            effects.append(&mut local);
        }

        effects
    }

    // -----------------------------------------------------------------------
    // Readout
    // -----------------------------------------------------------------------

    /// Banners for every enabled, active alert, laid out for `screen`.
    pub fn banners(&self, world: &World, time: &AlertTime, screen: ScreenSize) -> Vec<AlertBanner> {
        let entries = self
            .alerts
            .iter()
            .filter(|a| a.is_enabled())
            .filter_map(|alert| {
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                    if !alert.is_active(world, time) {
                        return None;
                    }
                    Some(BannerEntry {
                        key: alert.key(),
                        label: alert.label(world, time),
                        priority: alert.priority(world, time),
                        bg_color: alert.bg_color(world, time),
                        bounce_offset: alert.horizontal_offset(time.real_seconds),
                    })
                }));
                outcome.unwrap_or_else(|payload| {
                    tracing::warn!(
                        alert = alert.key(),
                        "Alert readout panicked: {}",
                        panic_message(payload.as_ref())
                    );
                    None
                })
            })
            .collect();
        layout_banners(entries, screen)
    }

    /// Route a banner click to the alert named `key`.
    ///
    /// Returns the target to jump to, or `None` when the key is unknown, the
    /// alert is disabled or inactive, or nothing valid is left to jump to.
    pub fn click(
        &mut self,
        key: &str,
        button: ClickButton,
        world: &World,
        time: &AlertTime,
    ) -> Option<TargetRef> {
        let alert = match self.get_mut(key) {
            Ok(alert) => alert,
            Err(e) => {
                tracing::warn!("Ignoring click: {e}");
                return None;
            }
        };
        if !alert.is_enabled() {
            return None;
        }
        let target = alert.click(world, time, button);
        match target {
            Some(target) => tracing::debug!(
                alert = key,
                culprit = ?target.entity(),
                cursor = alert.cursor().value(),
                "Cycled to culprit"
            ),
            None => tracing::debug!(alert = key, "Click with no valid culprit"),
        }
        target
    }

    /// Hover text for the alert named `key`.
    pub fn info_text(&self, key: &str, world: &World, time: &AlertTime) -> Result<String> {
        let alert = self
            .get(key)
            .ok_or_else(|| AlertsError::UnknownAlert(key.to_string()))?;
        Ok(alert.info_text(world, time))
    }
}

fn step_alert(
    alert: &mut Alert,
    world: &World,
    time: &AlertTime,
    bell: &mut BellThrottle,
    out: &mut Vec<AlertEffect>,
) -> StreakChange {
    let active = alert.is_active(world, time);
    let change = alert.observe(active);
    if change == StreakChange::Started {
        alert.notify_started(world, time, bell, out);
    }
    if active {
        alert.active_update(world, time, out);
    }
    change
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

    use super::*;
    use crate::alerts::alert::{AlertContext, AlertDefaults, AlertTier};
    use crate::config::AlertOverride;
    use crate::model::{AlertPriority, AlertReport, SoundCue};

    struct Flag {
        key: &'static str,
        tier: AlertTier,
        priority: AlertPriority,
        on: Arc<AtomicBool>,
    }

    impl AlertKind for Flag {
        fn key(&self) -> &'static str {
            self.key
        }

        fn tier(&self) -> AlertTier {
            self.tier
        }

        fn defaults(&self) -> AlertDefaults {
            AlertDefaults::new(self.key).priority(self.priority)
        }

        fn report(&self, _ctx: &AlertContext) -> AlertReport {
            AlertReport::from(self.on.load(Ordering::Relaxed))
        }
    }

    /// Panics on the ticks where the shared mode is 2.
    struct Flaky(Arc<AtomicU8>);

    impl AlertKind for Flaky {
        fn key(&self) -> &'static str {
            "flaky"
        }

        fn defaults(&self) -> AlertDefaults {
            AlertDefaults::new("flaky").priority(AlertPriority::High)
        }

        fn report(&self, _ctx: &AlertContext) -> AlertReport {
            match self.0.load(Ordering::Relaxed) {
                0 => AlertReport::inactive(),
                1 => AlertReport::active(),
                _ => panic!("flaky alert broke"),
            }
        }
    }

    /// Critical alert whose report works once and then panics, so the
    /// failure lands after the start hook has already run.
    struct BreaksAfterStart(AtomicU8);

    impl AlertKind for BreaksAfterStart {
        fn key(&self) -> &'static str {
            "breaks_after_start"
        }

        fn tier(&self) -> AlertTier {
            AlertTier::Critical
        }

        fn defaults(&self) -> AlertDefaults {
            AlertDefaults::new("breaks after start")
        }

        fn report(&self, _ctx: &AlertContext) -> AlertReport {
            if self.0.fetch_add(1, Ordering::Relaxed) > 0 {
                panic!("report failed mid-tick");
            }
            AlertReport::active()
        }
    }

    fn flag(
        registry: &mut AlertRegistry,
        key: &'static str,
        tier: AlertTier,
        priority: AlertPriority,
    ) -> Arc<AtomicBool> {
        let on = Arc::new(AtomicBool::new(false));
        registry.register(Box::new(Flag {
            key,
            tier,
            priority,
            on: on.clone(),
        }));
        on
    }

    fn at(frame: u64) -> AlertTime {
        let seconds = 10.0 + frame as f64;
        AlertTime::new(frame, seconds, seconds)
    }

    fn bells(effects: &[AlertEffect]) -> usize {
        effects
            .iter()
            .filter(|e| matches!(e, AlertEffect::PlaySound(SoundCue::TinyBell)))
            .count()
    }

    #[test]
    fn start_fires_once_per_streak() {
        let world = World::new();
        let mut registry = AlertRegistry::new(AlertsConfig::default());
        let on = flag(&mut registry, "a", AlertTier::Normal, AlertPriority::High);

        let mut rung = Vec::new();
        for (frame, active) in [false, true, true, false, true].into_iter().enumerate() {
            on.store(active, Ordering::Relaxed);
            let effects = registry.tick(&world, &at(frame as u64));
            rung.push(bells(&effects));
        }
        assert_eq!(rung, vec![0, 1, 0, 0, 1]);
    }

    #[test]
    fn simultaneous_starts_ring_once() {
        let world = World::new();
        let mut registry = AlertRegistry::new(AlertsConfig::default());
        let a = flag(&mut registry, "a", AlertTier::Normal, AlertPriority::High);
        let b = flag(&mut registry, "b", AlertTier::Normal, AlertPriority::Critical);
        a.store(true, Ordering::Relaxed);
        b.store(true, Ordering::Relaxed);

        let effects = registry.tick(&world, &at(0));
        assert_eq!(bells(&effects), 1);
        assert!(registry.get("a").is_some_and(|a| a.bounce().has_started()));
        assert!(registry.get("b").is_some_and(|b| b.bounce().has_started()));
    }

    #[test]
    fn disabled_alerts_are_skipped() {
        let world = World::new();
        let config = AlertsConfig::default().with_override(
            "a",
            AlertOverride {
                enabled: false,
                priority: None,
            },
        );
        let mut registry = AlertRegistry::new(config);
        let on = flag(&mut registry, "a", AlertTier::Critical, AlertPriority::High);
        on.store(true, Ordering::Relaxed);

        assert!(registry.tick(&world, &at(0)).is_empty());
        assert!(
            registry
                .banners(&world, &at(0), ScreenSize { width: 800.0, height: 600.0 })
                .is_empty()
        );

        registry.set_enabled("a", true).unwrap();
        assert_eq!(registry.tick(&world, &at(1)).len(), 2);
    }

    #[test]
    fn panicking_alert_is_isolated() {
        let world = World::new();
        let mut registry = AlertRegistry::new(AlertsConfig::default());
        let mode = Arc::new(AtomicU8::new(2));
        registry.register(Box::new(Flaky(mode.clone())));
        let other = flag(&mut registry, "other", AlertTier::Normal, AlertPriority::High);
        other.store(true, Ordering::Relaxed);

        let effects = registry.tick(&world, &at(0));
        assert_eq!(bells(&effects), 1);
        assert!(!registry.get("flaky").unwrap().was_active());

        // Recovers and starts a fresh streak.
        mode.store(1, Ordering::Relaxed);
        registry.tick(&world, &at(1));
        assert!(registry.get("flaky").unwrap().was_active());
        assert!(registry.get("flaky").unwrap().bounce().has_started());
    }

    #[test]
    fn panic_after_start_hook_leaves_bell_for_others() {
        let world = World::new();
        let mut registry = AlertRegistry::new(AlertsConfig::default());
        registry.register(Box::new(BreaksAfterStart(AtomicU8::new(0))));
        let healthy = flag(&mut registry, "healthy", AlertTier::Normal, AlertPriority::High);
        healthy.store(true, Ordering::Relaxed);

        let effects = registry.tick(&world, &at(0));

        assert_eq!(bells(&effects), 1);
        assert_eq!(registry.bell().last_ring(), Some(10.0));
        assert_eq!(registry.get("healthy").unwrap().last_bell_time(), Some(10.0));
        assert!(!registry.get("breaks_after_start").unwrap().was_active());
        assert!(
            effects
                .iter()
                .all(|e| !matches!(e, AlertEffect::Message { .. }))
        );
    }

    #[test]
    fn unknown_key_is_reported() {
        let world = World::new();
        let mut registry = AlertRegistry::new(AlertsConfig::default());
        assert!(
            registry
                .click("nope", ClickButton::Primary, &world, &at(0))
                .is_none()
        );
        assert!(matches!(
            registry.info_text("nope", &world, &at(0)),
            Err(AlertsError::UnknownAlert(key)) if key == "nope"
        ));
        assert!(registry.set_enabled("nope", false).is_err());
    }

    #[test]
    fn banners_only_for_active_alerts() {
        let world = World::new();
        let mut registry = AlertRegistry::new(AlertsConfig::default());
        let low = flag(&mut registry, "low", AlertTier::Normal, AlertPriority::Low);
        let _idle = flag(&mut registry, "idle", AlertTier::Normal, AlertPriority::High);
        let crit = flag(&mut registry, "crit", AlertTier::Critical, AlertPriority::Low);
        low.store(true, Ordering::Relaxed);
        crit.store(true, Ordering::Relaxed);

        let banners = registry.banners(
            &world,
            &at(0),
            ScreenSize {
                width: 800.0,
                height: 600.0,
            },
        );
        let keys: Vec<_> = banners.iter().map(|b| b.key).collect();
        assert_eq!(keys, vec!["crit", "low"]);
        assert_eq!(banners[0].priority, AlertPriority::Critical);
    }

    #[test]
    fn default_registry_has_builtin_alerts() {
        let registry = AlertRegistry::with_default_alerts(AlertsConfig::default());
        assert!(!registry.is_empty());
        assert!(registry.get("fire_in_home_area").is_some());
        assert!(registry.get("colonist_needs_rescuing").is_some());
    }
}
