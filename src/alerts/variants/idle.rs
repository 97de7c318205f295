use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use super::finders::{days_passed, free_colonists, pawn_lines};
use crate::alerts::alert::{AlertContext, AlertDefaults, AlertKind};
use crate::ecs::components::MindState;
use crate::model::AlertReport;

/// Quiet for the colony's first day, while everybody is still settling in.
pub const MIN_DAYS_PASSED: u64 = 1;

/// Colonists with nothing to do.
pub struct ColonistsIdle;

impl ColonistsIdle {
    fn idle(world: &World) -> Vec<Entity> {
        free_colonists(world)
            .into_iter()
            .filter(|&p| world.get::<MindState>(p).is_some_and(|m| m.idle))
            .collect()
    }
}

impl AlertKind for ColonistsIdle {
    fn key(&self) -> &'static str {
        "colonists_idle"
    }

    fn defaults(&self) -> AlertDefaults {
        AlertDefaults::new("Idle colonists")
    }

    fn report(&self, ctx: &AlertContext) -> AlertReport {
        if days_passed(ctx.world) < MIN_DAYS_PASSED {
            return AlertReport::inactive();
        }
        AlertReport::culprits_are(Self::idle(ctx.world))
    }

    fn label(&self, ctx: &AlertContext) -> String {
        format!("{} idle colonists", Self::idle(ctx.world).len())
    }

    fn explanation(&self, ctx: &AlertContext) -> String {
        let idle = Self::idle(ctx.world);
        format!(
            "These colonists have nothing to do:\n\n{}\nAssign them work or queue up more jobs.",
            pawn_lines(ctx.world, &idle, "    ", true)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::AlertTime;
    use crate::alerts::alert::AlertTier;
    use crate::ecs::clock::{GameClock, TICKS_PER_DAY};
    use crate::ecs::components::{Colonist, Pawn};

    #[test]
    fn silent_during_first_day() {
        let mut world = World::new();
        world.insert_resource(GameClock::new());
        world.spawn((Pawn::new("ada"), Colonist, MindState { idle: true }));
        world.spawn((Pawn::new("bo"), Colonist, MindState { idle: false }));

        let defaults = ColonistsIdle.defaults();
        let report = |world: &World| {
            ColonistsIdle.report(&AlertContext {
                world,
                defaults: &defaults,
                tier: AlertTier::Normal,
                time: AlertTime::default(),
            })
        };
        assert!(!report(&world).is_active());

        world.resource_mut::<GameClock>().tick_count = TICKS_PER_DAY;
        let after = report(&world);
        assert!(after.is_active());
        assert_eq!(after.culprits().len(), 1);

        let ctx = AlertContext {
            world: &world,
            defaults: &defaults,
            tier: AlertTier::Normal,
            time: AlertTime::default(),
        };
        assert_eq!(ColonistsIdle.label(&ctx), "1 idle colonists");
        assert!(ColonistsIdle.explanation(&ctx).contains("    Ada\n"));
    }
}
