use bevy_ecs::entity::Entity;
use bevy_ecs::query::With;
use bevy_ecs::world::World;

use super::finders::entities_matching;
use crate::alerts::alert::{AlertContext, AlertDefaults, AlertKind, AlertTier};
use crate::ecs::components::{Cell, Fire};
use crate::ecs::resources::ColonyMap;
use crate::model::AlertReport;

/// A fire burning inside the home area where the player can see it.
pub struct FireInHomeArea;

impl FireInHomeArea {
    fn first_fire(world: &World) -> Option<Entity> {
        let map = world.get_resource::<ColonyMap>()?;
        entities_matching::<With<Fire>>(world)
            .into_iter()
            .find(|&fire| {
                world
                    .get::<Cell>(fire)
                    .is_some_and(|&cell| map.in_home_area(cell) && !map.is_fogged(cell))
            })
    }
}

impl AlertKind for FireInHomeArea {
    fn key(&self) -> &'static str {
        "fire_in_home_area"
    }

    fn tier(&self) -> AlertTier {
        AlertTier::Critical
    }

    fn defaults(&self) -> AlertDefaults {
        AlertDefaults::new("Fire in home area")
            .explanation("A fire is burning in your home area. Order colonists to put it out.")
    }

    fn report(&self, ctx: &AlertContext) -> AlertReport {
        AlertReport::culprit_is(Self::first_fire(ctx.world))
    }
}
