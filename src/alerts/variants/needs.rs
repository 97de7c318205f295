use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use super::finders::{free_colonists, pawn_label, pawn_lines};
use crate::alerts::alert::{AlertContext, AlertDefaults, AlertKind};
use crate::ecs::components::{JoyTolerance, Needs, RestCategory, TimeAssignment};
use crate::model::{AlertPriority, AlertReport};

const JOY_NEED_THRESHOLD: f32 = 0.24;

/// Colonists whose rest need has bottomed out.
pub struct Exhaustion;

impl Exhaustion {
    fn exhausted(world: &World) -> Vec<Entity> {
        free_colonists(world)
            .into_iter()
            .filter(|&p| {
                world
                    .get::<Needs>(p)
                    .and_then(Needs::rest_category)
                    .is_some_and(|c| c == RestCategory::Exhausted)
            })
            .collect()
    }
}

impl AlertKind for Exhaustion {
    fn key(&self) -> &'static str {
        "exhaustion"
    }

    fn defaults(&self) -> AlertDefaults {
        AlertDefaults::new("Exhaustion").priority(AlertPriority::High)
    }

    fn report(&self, ctx: &AlertContext) -> AlertReport {
        AlertReport::culprits_are(Self::exhausted(ctx.world))
    }

    fn explanation(&self, ctx: &AlertContext) -> String {
        let exhausted = Self::exhausted(ctx.world);
        format!(
            "These colonists are exhausted and will collapse where they stand:\n\n{}\nMake sure they have beds and time to sleep.",
            pawn_lines(ctx.world, &exhausted, "    ", false)
        )
    }
}

/// Colonists starved of recreation who are bored of every kind on offer.
pub struct Boredom;

impl Boredom {
    fn bored(world: &World) -> Vec<Entity> {
        free_colonists(world)
            .into_iter()
            .filter(|&p| {
                let wants_joy = world
                    .get::<Needs>(p)
                    .and_then(|n| n.joy)
                    .is_some_and(|joy| joy < JOY_NEED_THRESHOLD)
                    || world.get::<TimeAssignment>(p) == Some(&TimeAssignment::Joy);
                wants_joy
                    && world
                        .get::<JoyTolerance>(p)
                        .is_some_and(|t| t.bored_of_all_available)
            })
            .collect()
    }
}

impl AlertKind for Boredom {
    fn key(&self) -> &'static str {
        "boredom"
    }

    fn defaults(&self) -> AlertDefaults {
        AlertDefaults::new("Boredom").priority(AlertPriority::Medium)
    }

    fn report(&self, ctx: &AlertContext) -> AlertReport {
        AlertReport::culprits_are(Self::bored(ctx.world))
    }

    fn explanation(&self, ctx: &AlertContext) -> String {
        let bored = Self::bored(ctx.world);
        let Some(&first) = bored.first() else {
            return ctx.defaults.explanation.clone();
        };
        let lines = pawn_lines(ctx.world, &bored, "   ", false);
        format!(
            "These colonists are bored of every kind of recreation available:\n\n{}\n\n{} and the others need more variety. Build different kinds of recreation.",
            lines.trim_end_matches('\n'),
            pawn_label(ctx.world, first)
        )
    }
}
