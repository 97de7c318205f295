pub mod common;
pub mod pawn;
pub mod things;

pub use common::{Cell, Colonist, Pawn, PlayerOwned, PrisonerOfColony};
pub use pawn::{
    Carried, Downed, Equipment, Health, InBed, JobQueue, JoyTolerance, MindState, Needs,
    QueuedJob, RestCategory, TimeAssignment, TraitKind, Traits, Weapon,
};
pub use things::{BilliardsTable, Fire};
