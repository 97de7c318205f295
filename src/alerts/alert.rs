use bevy_ecs::world::World;

use super::bell::BellThrottle;
use super::bounce::AlertBounce;
use super::cycle::{ClickButton, CycleCursor};
use super::effect::AlertEffect;
use super::time::AlertTime;
use crate::config::AlertsConfig;
use crate::model::{
    AlertPriority, AlertReport, BgColor, MessageSeverity, SoundCue, TargetRef, capitalize_first,
    pulse_brightness,
};

const CRITICAL_PULSE_FREQ: f32 = 0.5;
const CRITICAL_PULSE_AMP: f32 = 0.6;

const CLICK_TO_JUMP_HINT: &str = "(Click to jump to problem)";

/// Escalation tier. Critical alerts pulse red and announce each new streak
/// in the message log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertTier {
    Normal,
    Critical,
}

impl AlertTier {
    /// Background color when the variant does not supply its own.
    pub fn default_bg_color(self, real_seconds: f64) -> BgColor {
        match self {
            AlertTier::Normal => BgColor::CLEAR,
            AlertTier::Critical => {
                let t = real_seconds as f32;
                let amplitude = pulse_brightness(CRITICAL_PULSE_FREQ, CRITICAL_PULSE_AMP, t);
                let brightness = pulse_brightness(CRITICAL_PULSE_FREQ, amplitude, t);
                BgColor::grey(brightness) * BgColor::RED
            }
        }
    }
}

/// Text and priority an alert starts with. Fixed once the alert is built.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertDefaults {
    pub label: String,
    pub explanation: String,
    pub priority: AlertPriority,
}

impl AlertDefaults {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            explanation: String::new(),
            priority: AlertPriority::default(),
        }
    }

    pub fn explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    pub fn priority(mut self, priority: AlertPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// Everything a variant may look at while answering a query.
///
/// Bundled so new inputs can be added without touching every variant.
pub struct AlertContext<'a> {
    pub world: &'a World,
    pub defaults: &'a AlertDefaults,
    pub tier: AlertTier,
    pub time: AlertTime,
}

/// The per-variant capability set.
///
/// Only [`AlertKind::key`], [`AlertKind::defaults`] and [`AlertKind::report`]
/// are required; everything else falls back to the stored defaults. Every
/// query must be free of side effects and safe to call several times per
/// tick.
pub trait AlertKind: Send + Sync + 'static {
    /// Stable identifier used in config, logs, and click routing.
    fn key(&self) -> &'static str;

    fn tier(&self) -> AlertTier {
        AlertTier::Normal
    }

    fn defaults(&self) -> AlertDefaults;

    fn report(&self, ctx: &AlertContext) -> AlertReport;

    fn active(&self, ctx: &AlertContext) -> bool {
        self.report(ctx).is_active()
    }

    fn priority(&self, ctx: &AlertContext) -> AlertPriority {
        ctx.defaults.priority
    }

    fn label(&self, ctx: &AlertContext) -> String {
        ctx.defaults.label.clone()
    }

    fn explanation(&self, ctx: &AlertContext) -> String {
        ctx.defaults.explanation.clone()
    }

    fn bg_color(&self, ctx: &AlertContext) -> BgColor {
        ctx.tier.default_bg_color(ctx.time.real_seconds)
    }
}

/// How an alert's activity changed between two consecutive ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    Started,
    Continued,
    Ended,
    Idle,
}

/// One registered alert: the variant plus the runtime state the readout
/// keeps for it.
pub struct Alert {
    kind: Box<dyn AlertKind>,
    tier: AlertTier,
    defaults: AlertDefaults,
    enabled: bool,
    last_bell_time: Option<f64>,
    bounce: AlertBounce,
    cursor: CycleCursor,
    last_active_frame: Option<u64>,
    was_active: bool,
}

impl Alert {
    pub fn new(kind: Box<dyn AlertKind>, config: &AlertsConfig) -> Self {
        let tier = kind.tier();
        let mut defaults = kind.defaults();
        if tier == AlertTier::Critical {
            defaults.priority = AlertPriority::Critical;
        }
        if let Some(priority) = config.priority_override(kind.key()) {
            defaults.priority = priority;
        }
        Self {
            enabled: config.is_enabled(kind.key()),
            tier,
            defaults,
            kind,
            last_bell_time: None,
            bounce: AlertBounce::new(config.bounce_duration_secs, config.bounce_start_offset),
            cursor: CycleCursor::default(),
            last_active_frame: None,
            was_active: false,
        }
    }

    pub fn key(&self) -> &'static str {
        self.kind.key()
    }

    pub fn tier(&self) -> AlertTier {
        self.tier
    }

    pub fn defaults(&self) -> &AlertDefaults {
        &self.defaults
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling also ends any running streak, so re-enabling starts fresh.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.was_active = false;
        }
    }

    pub fn was_active(&self) -> bool {
        self.was_active
    }

    pub fn last_bell_time(&self) -> Option<f64> {
        self.last_bell_time
    }

    pub fn last_active_frame(&self) -> Option<u64> {
        self.last_active_frame
    }

    pub fn cursor(&self) -> CycleCursor {
        self.cursor
    }

    pub fn bounce(&self) -> &AlertBounce {
        &self.bounce
    }

    fn context<'a>(&'a self, world: &'a World, time: &AlertTime) -> AlertContext<'a> {
        AlertContext {
            world,
            defaults: &self.defaults,
            tier: self.tier,
            time: *time,
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn report(&self, world: &World, time: &AlertTime) -> AlertReport {
        self.kind.report(&self.context(world, time))
    }

    pub fn is_active(&self, world: &World, time: &AlertTime) -> bool {
        self.kind.active(&self.context(world, time))
    }

    pub fn priority(&self, world: &World, time: &AlertTime) -> AlertPriority {
        self.kind.priority(&self.context(world, time))
    }

    pub fn label(&self, world: &World, time: &AlertTime) -> String {
        self.kind.label(&self.context(world, time))
    }

    pub fn explanation(&self, world: &World, time: &AlertTime) -> String {
        self.kind.explanation(&self.context(world, time))
    }

    pub fn bg_color(&self, world: &World, time: &AlertTime) -> BgColor {
        self.kind.bg_color(&self.context(world, time))
    }

    /// Explanation plus a click hint when there is something to jump to.
    pub fn info_text(&self, world: &World, time: &AlertTime) -> String {
        let mut text = self.explanation(world, time);
        if self.report(world, time).any_culprit_valid(world) {
            text.push_str("\n\n");
            text.push_str(CLICK_TO_JUMP_HINT);
        }
        text
    }

    /// Banner offset from the start bounce at real time `now`.
    pub fn horizontal_offset(&self, now: f64) -> f32 {
        self.bounce.horizontal_offset(now)
    }

    // -----------------------------------------------------------------------
    // Tick protocol
    // -----------------------------------------------------------------------

    /// Record this tick's activity and report how the streak changed.
    pub fn observe(&mut self, active: bool) -> StreakChange {
        let change = match (self.was_active, active) {
            (false, true) => StreakChange::Started,
            (true, true) => StreakChange::Continued,
            (true, false) => StreakChange::Ended,
            (false, false) => StreakChange::Idle,
        };
        self.was_active = active;
        change
    }

    /// Run once when a streak starts. High and critical alerts bounce, and
    /// ring the bell if the shared throttle allows it.
    pub fn notify_started(
        &mut self,
        world: &World,
        time: &AlertTime,
        bell: &mut BellThrottle,
        out: &mut Vec<AlertEffect>,
    ) {
        if !self.priority(world, time).escalates() {
            return;
        }
        self.bounce.do_alert_start_effect(time.real_seconds);
        if bell.try_ring(time) {
            self.last_bell_time = Some(time.real_seconds);
            out.push(AlertEffect::PlaySound(SoundCue::TinyBell));
        } else {
            tracing::debug!(alert = self.key(), "Bell throttled");
        }
    }

    /// Run every tick the alert is active, after `notify_started` on the
    /// first tick of a streak.
    pub fn active_update(&mut self, world: &World, time: &AlertTime, out: &mut Vec<AlertEffect>) {
        if self.tier != AlertTier::Critical {
            return;
        }
        let fresh_streak = self
            .last_active_frame
            .is_none_or(|last| last.saturating_add(1) < time.frame);
        if fresh_streak {
            let label = capitalize_first(&self.label(world, time));
            let targets = self.report(world, time).culprits().to_vec();
            tracing::info!(alert = self.key(), culprits = targets.len(), "Critical alert: {label}");
            out.push(AlertEffect::Message {
                alert: self.key(),
                severity: MessageSeverity::ThreatBig,
                text: format!("Critical alert: {label}"),
                targets,
            });
        }
        self.last_active_frame = Some(time.frame);
    }

    // -----------------------------------------------------------------------
    // Interaction
    // -----------------------------------------------------------------------

    /// Cycle to the next (primary) or previous (secondary) valid culprit of
    /// the live report. Returns `None`, leaving the cursor untouched, when
    /// nothing valid is left to jump to.
    pub fn click(
        &mut self,
        world: &World,
        time: &AlertTime,
        button: ClickButton,
    ) -> Option<TargetRef> {
        let targets = self.report(world, time).valid_culprits(world);
        let index = self.cursor.advance(button, targets.len())?;
        Some(targets[index])
    }
}

impl std::fmt::Debug for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alert")
            .field("key", &self.key())
            .field("tier", &self.tier)
            .field("defaults", &self.defaults)
            .field("enabled", &self.enabled)
            .field("was_active", &self.was_active)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
