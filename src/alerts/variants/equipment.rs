use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use super::finders::free_colonists;
use crate::alerts::alert::{AlertContext, AlertDefaults, AlertKind};
use crate::ecs::components::{Equipment, TraitKind, Traits};
use crate::model::AlertReport;

pub struct BrawlerHasRangedWeapon;

impl BrawlerHasRangedWeapon {
    fn brawlers_with_guns(world: &World) -> Vec<Entity> {
        free_colonists(world)
            .into_iter()
            .filter(|&p| {
                world.get::<Traits>(p).is_some_and(|t| t.has(TraitKind::Brawler))
                    && world
                        .get::<Equipment>(p)
                        .is_some_and(Equipment::primary_is_ranged)
            })
            .collect()
    }
}

impl AlertKind for BrawlerHasRangedWeapon {
    fn key(&self) -> &'static str {
        "brawler_has_ranged_weapon"
    }

    fn defaults(&self) -> AlertDefaults {
        AlertDefaults::new("Brawler has ranged weapon").explanation(
            "Brawlers are unhappy carrying ranged weapons. Give them a melee weapon instead.",
        )
    }

    fn report(&self, ctx: &AlertContext) -> AlertReport {
        AlertReport::culprits_are(Self::brawlers_with_guns(ctx.world))
    }
}
