use bevy_ecs::component::Component;

/// A burning fire. Position comes from the entity's `Cell`.
#[derive(Component, Debug, Clone, Copy)]
pub struct Fire {
    pub size: f32,
}

impl Default for Fire {
    fn default() -> Self {
        Self { size: 0.1 }
    }
}

/// Billiards table. Players need room to stand on every side to use it.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct BilliardsTable;
