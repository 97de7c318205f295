use bevy_ecs::entity::Entity;
use bevy_ecs::query::With;
use bevy_ecs::world::World;

use super::finders::entities_matching;
use crate::alerts::alert::{AlertContext, AlertDefaults, AlertKind};
use crate::ecs::components::{BilliardsTable, Cell, PlayerOwned};
use crate::ecs::resources::ColonyMap;
use crate::model::AlertReport;

/// Player billiards tables pushed up against a wall or off the map edge.
pub struct BilliardsTableOnWall;

impl BilliardsTableOnWall {
    fn bad_tables(world: &World) -> Vec<Entity> {
        let Some(map) = world.get_resource::<ColonyMap>() else {
            return Vec::new();
        };
        entities_matching::<(With<BilliardsTable>, With<PlayerOwned>)>(world)
            .into_iter()
            .filter(|&table| {
                world
                    .get::<Cell>(table)
                    .is_some_and(|cell| !cell.neighbours().all(|n| map.is_standable(n)))
            })
            .collect()
    }
}

impl AlertKind for BilliardsTableOnWall {
    fn key(&self) -> &'static str {
        "billiards_table_on_wall"
    }

    fn defaults(&self) -> AlertDefaults {
        AlertDefaults::new("Billiards table needs space").explanation(
            "Billiards tables need a free cell on every side so players can stand around them.",
        )
    }

    fn report(&self, ctx: &AlertContext) -> AlertReport {
        AlertReport::culprits_are(Self::bad_tables(ctx.world))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::AlertTime;
    use crate::alerts::alert::AlertTier;

    #[test]
    fn walls_and_edges_block_tables() {
        let mut world = World::new();
        let mut map = ColonyMap::new(10, 10);
        map.impassable.insert(Cell::new(6, 5));
        world.insert_resource(map);

        world.spawn((BilliardsTable, PlayerOwned, Cell::new(2, 2)));
        let walled = world.spawn((BilliardsTable, PlayerOwned, Cell::new(5, 5))).id();
        let edge = world.spawn((BilliardsTable, PlayerOwned, Cell::new(0, 4))).id();
        // Not ours.
        world.spawn((BilliardsTable, Cell::new(9, 9)));

        let defaults = BilliardsTableOnWall.defaults();
        let report = BilliardsTableOnWall.report(&AlertContext {
            world: &world,
            defaults: &defaults,
            tier: AlertTier::Normal,
            time: AlertTime::default(),
        });
        let found: Vec<Entity> = report.culprits().iter().map(|t| t.entity()).collect();
        assert_eq!(found, vec![walled, edge]);
    }
}
