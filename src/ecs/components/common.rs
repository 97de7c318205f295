use bevy_ecs::component::Component;
use serde::{Deserialize, Serialize};

/// Identity component present on every pawn, colonist or not.
#[derive(Component, Debug, Clone, Default)]
pub struct Pawn {
    pub name: String,
}

impl Pawn {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Short label used in alert explanations.
    pub fn label_short(&self) -> &str {
        &self.name
    }
}

/// Grid position of a spawned thing or pawn on the colony map.
#[derive(
    Component, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Cell {
    pub x: i32,
    pub z: i32,
}

impl Cell {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The eight surrounding cells, row by row.
    pub fn neighbours(self) -> impl Iterator<Item = Cell> {
        (-1..=1).flat_map(move |dz| {
            (-1..=1)
                .filter(move |&dx| dx != 0 || dz != 0)
                .map(move |dx| Cell::new(self.x + dx, self.z + dz))
        })
    }
}

// ---------------------------------------------------------------------------
// Faction markers
// ---------------------------------------------------------------------------

/// Free member of the player's colony.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Colonist;

/// Prisoner held by the player's colony.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PrisonerOfColony;

/// Thing owned by the player faction.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PlayerOwned;
