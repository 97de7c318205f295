use bevy_ecs::entity::Entity;
use bevy_ecs::query::{QueryFilter, With};
use bevy_ecs::world::World;

use crate::ecs::clock::GameClock;
use crate::ecs::components::{
    Colonist, Downed, InBed, JobQueue, Pawn, PlayerOwned, PrisonerOfColony,
};
use crate::ecs::components::{Carried, Health};
use crate::model::capitalize_first;

/// Entities matching `F`, in spawn order. Empty when a filtered component
/// has never been used in this world.
pub(crate) fn entities_matching<F: QueryFilter>(world: &World) -> Vec<Entity> {
    let Some(mut state) = world.try_query_filtered::<Entity, F>() else {
        return Vec::new();
    };
    let mut found: Vec<Entity> = state.iter(world).collect();
    found.sort();
    found
}

/// Spawned free colonists of the player faction.
pub(crate) fn free_colonists(world: &World) -> Vec<Entity> {
    entities_matching::<(With<Pawn>, With<Colonist>)>(world)
}

/// Every spawned pawn of the player faction: colonists plus player-owned
/// pawns such as tamed animals.
pub(crate) fn player_faction_pawns(world: &World) -> Vec<Entity> {
    let mut pawns = free_colonists(world);
    pawns.extend(entities_matching::<(With<Pawn>, With<PlayerOwned>)>(world));
    pawns.sort();
    pawns.dedup();
    pawns
}

pub(crate) fn prisoners_of_colony(world: &World) -> Vec<Entity> {
    entities_matching::<(With<Pawn>, With<PrisonerOfColony>)>(world)
}

/// Downed outside a bed, not being carried, and nobody has a rescue job
/// ready to start.
pub(crate) fn needs_rescue(world: &World, pawn: Entity) -> bool {
    world.get::<Downed>(pawn).is_some()
        && world.get::<InBed>(pawn).is_none()
        && world.get::<Carried>(pawn).is_none()
        && !world.get::<JobQueue>(pawn).is_some_and(JobQueue::next_can_begin)
}

pub(crate) fn needs_tend(world: &World, pawn: Entity) -> bool {
    world.get::<Health>(pawn).is_some_and(|h| h.needs_tend)
}

pub(crate) fn pawn_label(world: &World, pawn: Entity) -> String {
    world
        .get::<Pawn>(pawn)
        .map_or_else(|| format!("{pawn}"), |p| p.label_short().to_string())
}

/// One indented line per pawn, newline-terminated.
pub(crate) fn pawn_lines(world: &World, pawns: &[Entity], indent: &str, capitalize: bool) -> String {
    pawns
        .iter()
        .map(|&pawn| {
            let label = pawn_label(world, pawn);
            let label = if capitalize {
                capitalize_first(&label)
            } else {
                label
            };
            format!("{indent}{label}\n")
        })
        .collect()
}

pub(crate) fn days_passed(world: &World) -> u64 {
    world.get_resource::<GameClock>().map_or(0, GameClock::days_passed)
}
