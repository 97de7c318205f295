use std::collections::HashSet;

use bevy_ecs::resource::Resource;

use crate::ecs::components::Cell;

/// The single player home map: its bounds plus the per-cell flags the
/// alerts read.
#[derive(Resource, Debug, Clone, Default)]
pub struct ColonyMap {
    pub width: i32,
    pub height: i32,
    pub home_area: HashSet<Cell>,
    pub fogged: HashSet<Cell>,
    pub impassable: HashSet<Cell>,
}

impl ColonyMap {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.z)
    }

    pub fn in_home_area(&self, cell: Cell) -> bool {
        self.home_area.contains(&cell)
    }

    pub fn is_fogged(&self, cell: Cell) -> bool {
        self.fogged.contains(&cell)
    }

    /// A pawn could stand here: inside the map and not blocked.
    pub fn is_standable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.impassable.contains(&cell)
    }

    /// Mark every cell of the rectangle `[min, max]` as home area.
    pub fn add_home_rect(&mut self, min: Cell, max: Cell) {
        for x in min.x..=max.x {
            for z in min.z..=max.z {
                self.home_area.insert(Cell::new(x, z));
            }
        }
    }
}
