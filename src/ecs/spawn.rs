use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::*;

/// Spawn a free colonist with full needs at `cell`.
pub fn spawn_colonist(world: &mut World, name: impl Into<String>, cell: Cell) -> Entity {
    world
        .spawn((
            Pawn::new(name),
            Colonist,
            cell,
            Needs::default(),
            JoyTolerance::default(),
            TimeAssignment::default(),
            Health::default(),
            MindState::default(),
            JobQueue::default(),
            Traits::default(),
            Equipment::default(),
        ))
        .id()
}

pub fn spawn_prisoner(world: &mut World, name: impl Into<String>, cell: Cell) -> Entity {
    world
        .spawn((
            Pawn::new(name),
            PrisonerOfColony,
            cell,
            Needs::default(),
            Health::default(),
        ))
        .id()
}

pub fn spawn_fire(world: &mut World, cell: Cell) -> Entity {
    world.spawn((Fire::default(), cell)).id()
}

pub fn spawn_billiards_table(world: &mut World, cell: Cell) -> Entity {
    world.spawn((BilliardsTable, PlayerOwned, cell)).id()
}

/// Knock a pawn down where it stands.
pub fn down_pawn(world: &mut World, pawn: Entity) {
    if let Ok(mut entity) = world.get_entity_mut(pawn) {
        entity.insert(Downed).remove::<InBed>();
    }
}
