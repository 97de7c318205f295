//! Deterministic colony setups for tests and the demo.
//!
//! ```no_run
//! # use colony_alerts::scenario::ColonyScenario;
//! # use colony_alerts::ecs::Cell;
//! let mut scenario = ColonyScenario::new(42);
//! let ada = scenario.colonist("Ada").at(Cell::new(5, 5)).downed().id();
//! scenario.fire(Cell::new(6, 6));
//! let app = scenario.build();
//! ```

use bevy_app::App;
use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::AlertsConfig;
use crate::ecs::app::build_alert_app;
use crate::ecs::clock::{GameClock, TICKS_PER_DAY};
use crate::ecs::components::*;
use crate::ecs::resources::ColonyMap;
use crate::ecs::spawn;

pub const DEFAULT_MAP_SIZE: i32 = 50;

const NAMES: &[&str] = &[
    "Ada", "Bo", "Cass", "Dell", "Eno", "Fitz", "Gale", "Hana", "Ivo", "Juno", "Kit", "Lark",
];

/// Typed reference to a pawn in a [`ColonyScenario`], enabling chained
/// component edits. Call [`.id()`](PawnRef::id) to end the chain.
pub struct PawnRef<'a> {
    world: &'a mut World,
    entity: Entity,
}

impl<'a> PawnRef<'a> {
    fn insert(self, bundle: impl bevy_ecs::bundle::Bundle) -> Self {
        self.world.entity_mut(self.entity).insert(bundle);
        self
    }

    fn edit<T: bevy_ecs::component::Component<Mutability = bevy_ecs::component::Mutable>>(
        self,
        f: impl FnOnce(&mut T),
    ) -> Self {
        if let Some(mut component) = self.world.get_mut::<T>(self.entity) {
            f(&mut *component);
        }
        self
    }

    pub fn at(self, cell: Cell) -> Self {
        self.insert(cell)
    }

    pub fn downed(self) -> Self {
        spawn::down_pawn(self.world, self.entity);
        self
    }

    pub fn in_bed(self, medical: bool) -> Self {
        self.insert(InBed { medical })
    }

    pub fn carried(self) -> Self {
        self.insert(Carried)
    }

    /// Queue a job; `can_begin_now` decides whether it counts as a rescue
    /// already under way.
    pub fn queued_job(self, label: &str, can_begin_now: bool) -> Self {
        self.edit::<JobQueue>(|q| q.push(label, can_begin_now))
    }

    pub fn rest(self, level: f32) -> Self {
        self.edit::<Needs>(|n| n.rest = Some(level))
    }

    pub fn joy(self, level: f32) -> Self {
        self.edit::<Needs>(|n| n.joy = Some(level))
    }

    pub fn bored_of_everything(self) -> Self {
        self.insert(JoyTolerance {
            bored_of_all_available: true,
        })
    }

    pub fn assigned(self, assignment: TimeAssignment) -> Self {
        self.insert(assignment)
    }

    pub fn needs_tend(self) -> Self {
        self.edit::<Health>(|h| h.needs_tend = true)
    }

    pub fn needs_surgery(self) -> Self {
        self.edit::<Health>(|h| h.needs_surgery = true)
    }

    pub fn idle(self) -> Self {
        self.insert(MindState { idle: true })
    }

    pub fn with_trait(self, kind: TraitKind) -> Self {
        self.edit::<Traits>(|t| t.0.push(kind))
    }

    pub fn wielding(self, weapon: Weapon) -> Self {
        self.insert(Equipment {
            primary: Some(weapon),
        })
    }

    /// Terminate the chain and return the entity.
    pub fn id(self) -> Entity {
        self.entity
    }
}

/// Builder for a single-map colony inside a ready-to-tick alert app.
pub struct ColonyScenario {
    app: App,
    rng: SmallRng,
    next_name: usize,
}

impl ColonyScenario {
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, AlertsConfig::default())
    }

    /// A `DEFAULT_MAP_SIZE` square map whose inner half is home area.
    pub fn with_config(seed: u64, config: AlertsConfig) -> Self {
        let mut app = build_alert_app(config);
        let mut map = ColonyMap::new(DEFAULT_MAP_SIZE, DEFAULT_MAP_SIZE);
        let quarter = DEFAULT_MAP_SIZE / 4;
        map.add_home_rect(
            Cell::new(quarter, quarter),
            Cell::new(DEFAULT_MAP_SIZE - quarter - 1, DEFAULT_MAP_SIZE - quarter - 1),
        );
        app.insert_resource(map);
        Self {
            app,
            rng: SmallRng::seed_from_u64(seed),
            next_name: 0,
        }
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    fn random_home_cell(&mut self) -> Cell {
        let quarter = DEFAULT_MAP_SIZE / 4;
        Cell::new(
            self.rng.random_range(quarter..DEFAULT_MAP_SIZE - quarter),
            self.rng.random_range(quarter..DEFAULT_MAP_SIZE - quarter),
        )
    }

    fn pawn_ref(&mut self, entity: Entity) -> PawnRef<'_> {
        PawnRef {
            world: self.app.world_mut(),
            entity,
        }
    }

    /// Spawn a colonist at a random home cell.
    pub fn colonist(&mut self, name: &str) -> PawnRef<'_> {
        let cell = self.random_home_cell();
        let entity = spawn::spawn_colonist(self.app.world_mut(), name, cell);
        self.pawn_ref(entity)
    }

    /// Spawn a prisoner at a random home cell.
    pub fn prisoner(&mut self, name: &str) -> PawnRef<'_> {
        let cell = self.random_home_cell();
        let entity = spawn::spawn_prisoner(self.app.world_mut(), name, cell);
        self.pawn_ref(entity)
    }

    /// Spawn `count` healthy colonists with names from the built-in table.
    pub fn populate(&mut self, count: usize) -> Vec<Entity> {
        (0..count)
            .map(|_| {
                let name = NAMES[self.next_name % NAMES.len()];
                self.next_name += 1;
                self.colonist(name).id()
            })
            .collect()
    }

    pub fn pawn_mut(&mut self, entity: Entity) -> PawnRef<'_> {
        self.pawn_ref(entity)
    }

    pub fn fire(&mut self, cell: Cell) -> Entity {
        spawn::spawn_fire(self.app.world_mut(), cell)
    }

    pub fn billiards_table(&mut self, cell: Cell) -> Entity {
        spawn::spawn_billiards_table(self.app.world_mut(), cell)
    }

    fn map_mut(&mut self) -> bevy_ecs::change_detection::Mut<'_, ColonyMap> {
        self.app.world_mut().resource_mut::<ColonyMap>()
    }

    pub fn wall(&mut self, cell: Cell) -> &mut Self {
        self.map_mut().impassable.insert(cell);
        self
    }

    pub fn fog(&mut self, cell: Cell) -> &mut Self {
        self.map_mut().fogged.insert(cell);
        self
    }

    /// Jump the clock forward by whole in-game days.
    pub fn days_passed(&mut self, days: u64) -> &mut Self {
        self.app.world_mut().resource_mut::<GameClock>().tick_count += days * TICKS_PER_DAY;
        self
    }

    /// Move real and session time past the bell's startup grace period.
    pub fn warm_up(&mut self, seconds: f64) -> &mut Self {
        let mut clock = self.app.world_mut().resource_mut::<GameClock>();
        clock.real_seconds += seconds;
        clock.session_seconds += seconds;
        self
    }

    pub fn build(self) -> App {
        self.app
    }
}
