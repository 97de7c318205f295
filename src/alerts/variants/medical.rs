use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use super::finders::{
    free_colonists, needs_rescue, needs_tend, pawn_lines, player_faction_pawns, prisoners_of_colony,
};
use crate::alerts::alert::{AlertContext, AlertDefaults, AlertKind, AlertTier};
use crate::ecs::components::{Health, InBed};
use crate::model::{AlertPriority, AlertReport};

// ---------------------------------------------------------------------------
// Awaiting medical operation
// ---------------------------------------------------------------------------

/// Colonists and prisoners lying in bed with a surgery due.
pub struct AwaitingMedicalOperation;

impl AwaitingMedicalOperation {
    fn patients(world: &World) -> Vec<Entity> {
        player_faction_pawns(world)
            .into_iter()
            .chain(prisoners_of_colony(world))
            .filter(|&p| {
                world.get::<Health>(p).is_some_and(|h| h.needs_surgery)
                    && world.get::<InBed>(p).is_some()
            })
            .collect()
    }
}

impl AlertKind for AwaitingMedicalOperation {
    fn key(&self) -> &'static str {
        "awaiting_medical_operation"
    }

    fn defaults(&self) -> AlertDefaults {
        AlertDefaults::new("Patients awaiting operation")
    }

    fn report(&self, ctx: &AlertContext) -> AlertReport {
        AlertReport::culprits_are(Self::patients(ctx.world))
    }

    fn label(&self, ctx: &AlertContext) -> String {
        format!("{} awaiting operation", Self::patients(ctx.world).len())
    }

    fn explanation(&self, ctx: &AlertContext) -> String {
        let patients = Self::patients(ctx.world);
        format!(
            "These patients are in bed, waiting for a doctor to perform an operation:\n\n{}",
            pawn_lines(ctx.world, &patients, "    ", true)
        )
    }
}

// ---------------------------------------------------------------------------
// Colonist needs rescuing
// ---------------------------------------------------------------------------

/// Downed colonists nobody is coming for.
pub struct ColonistNeedsRescuing;

impl ColonistNeedsRescuing {
    fn stranded(world: &World) -> Vec<Entity> {
        free_colonists(world)
            .into_iter()
            .filter(|&p| needs_rescue(world, p))
            .collect()
    }
}

impl AlertKind for ColonistNeedsRescuing {
    fn key(&self) -> &'static str {
        "colonist_needs_rescuing"
    }

    fn tier(&self) -> AlertTier {
        AlertTier::Critical
    }

    fn defaults(&self) -> AlertDefaults {
        AlertDefaults::new("Colonists need rescue")
    }

    fn report(&self, ctx: &AlertContext) -> AlertReport {
        AlertReport::culprits_are(Self::stranded(ctx.world))
    }

    fn label(&self, ctx: &AlertContext) -> String {
        if Self::stranded(ctx.world).len() == 1 {
            "Colonist needs rescue".to_string()
        } else {
            ctx.defaults.label.clone()
        }
    }

    fn explanation(&self, ctx: &AlertContext) -> String {
        let stranded = Self::stranded(ctx.world);
        format!(
            "These colonists are downed and need to be carried to a bed:\n\n{}\nOrder a colonist to rescue them.",
            pawn_lines(ctx.world, &stranded, "    ", false)
        )
    }
}

// ---------------------------------------------------------------------------
// Colonist needs tend
// ---------------------------------------------------------------------------

/// Injured colonists outside a medical bed who can still get around.
pub struct ColonistNeedsTend;

impl ColonistNeedsTend {
    fn untended(world: &World) -> Vec<Entity> {
        free_colonists(world)
            .into_iter()
            .filter(|&p| {
                needs_tend(world, p)
                    && !world.get::<InBed>(p).is_some_and(|bed| bed.medical)
                    && !needs_rescue(world, p)
            })
            .collect()
    }
}

impl AlertKind for ColonistNeedsTend {
    fn key(&self) -> &'static str {
        "colonist_needs_tend"
    }

    fn defaults(&self) -> AlertDefaults {
        AlertDefaults::new("Colonist needs treatment").priority(AlertPriority::High)
    }

    fn report(&self, ctx: &AlertContext) -> AlertReport {
        AlertReport::culprits_are(Self::untended(ctx.world))
    }

    fn explanation(&self, ctx: &AlertContext) -> String {
        let untended = Self::untended(ctx.world);
        format!(
            "These colonists have injuries or illnesses that need tending:\n\n{}\nAssign a doctor or put them in a medical bed.",
            pawn_lines(ctx.world, &untended, "    ", false)
        )
    }
}
