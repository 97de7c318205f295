pub mod app;
pub mod clock;
pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod schedule;
pub mod spawn;
pub mod systems;
pub mod test_helpers;

pub use app::{build_alert_app, build_alert_app_with_registry};
pub use clock::{GameClock, TICKS_PER_DAY, run_for_seconds};
pub use components::{
    BilliardsTable, Carried, Cell, Colonist, Downed, Equipment, Fire, Health, InBed, JobQueue,
    JoyTolerance, MindState, Needs, Pawn, PlayerOwned, PrisonerOfColony, RestCategory,
    TimeAssignment, TraitKind, Traits, Weapon,
};
pub use events::AlertClick;
pub use plugin::{AlertsPlugin, ColonySimPlugin};
pub use resources::{CameraFocus, ColonyMap, LoggedMessage, MessageLog, SoundQueue};
pub use schedule::{SimPhase, SimTick, configure_sim_schedule};
pub use systems::alerts::AlertReadout;
