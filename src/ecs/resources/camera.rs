use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

use crate::ecs::components::Cell;

/// Where the camera is looking and what is selected.
#[derive(Resource, Debug, Clone, Default)]
pub struct CameraFocus {
    pub position: Option<Cell>,
    pub selected: Option<Entity>,
    /// Number of jumps performed, for callers that poll for changes.
    pub jumps: u64,
}

impl CameraFocus {
    /// Center on `entity` (at `cell`, when known) and select it.
    pub fn jump_and_select(&mut self, entity: Entity, cell: Option<Cell>) {
        if let Some(cell) = cell {
            self.position = Some(cell);
        }
        self.selected = Some(entity);
        self.jumps += 1;
    }
}
