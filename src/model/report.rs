use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

/// Something in the world the camera can jump to: a pawn, a fire, a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetRef(pub Entity);

impl TargetRef {
    pub fn entity(self) -> Entity {
        self.0
    }

    /// A target is valid while its entity is still alive in the world.
    pub fn is_valid(self, world: &World) -> bool {
        world.get_entity(self.0).is_ok()
    }
}

impl From<Entity> for TargetRef {
    fn from(entity: Entity) -> Self {
        Self(entity)
    }
}

/// Result of evaluating one alert at one point in time.
///
/// Culprits of an inactive report are never exposed: [`AlertReport::culprits`]
/// returns an empty slice whenever `active` is false, whatever the report was
/// built with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertReport {
    active: bool,
    culprits: Vec<TargetRef>,
}

impl AlertReport {
    pub fn new(active: bool, culprits: Vec<TargetRef>) -> Self {
        Self { active, culprits }
    }

    pub fn inactive() -> Self {
        Self::default()
    }

    /// Active with nothing in particular to point at.
    pub fn active() -> Self {
        Self {
            active: true,
            culprits: Vec::new(),
        }
    }

    /// Active iff at least one culprit was found.
    pub fn culprits_are<I, T>(culprits: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TargetRef>,
    {
        let culprits: Vec<TargetRef> = culprits.into_iter().map(Into::into).collect();
        Self {
            active: !culprits.is_empty(),
            culprits,
        }
    }

    /// Active iff the single culprit is present.
    pub fn culprit_is(culprit: Option<impl Into<TargetRef>>) -> Self {
        match culprit {
            Some(target) => Self {
                active: true,
                culprits: vec![target.into()],
            },
            None => Self::inactive(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn culprits(&self) -> &[TargetRef] {
        if self.active { self.culprits.as_slice() } else { &[] }
    }

    /// Culprits that still resolve to a live entity, in report order.
    pub fn valid_culprits(&self, world: &World) -> Vec<TargetRef> {
        self.culprits()
            .iter()
            .copied()
            .filter(|target| target.is_valid(world))
            .collect()
    }

    pub fn any_culprit_valid(&self, world: &World) -> bool {
        self.culprits().iter().any(|target| target.is_valid(world))
    }
}

impl From<bool> for AlertReport {
    fn from(active: bool) -> Self {
        if active { Self::active() } else { Self::inactive() }
    }
}
