//! Built-in colony alerts.

pub mod equipment;
pub mod finders;
pub mod fire;
pub mod furniture;
pub mod idle;
pub mod medical;
pub mod needs;

pub use equipment::BrawlerHasRangedWeapon;
pub use fire::FireInHomeArea;
pub use furniture::BilliardsTableOnWall;
pub use idle::ColonistsIdle;
pub use medical::{AwaitingMedicalOperation, ColonistNeedsRescuing, ColonistNeedsTend};
pub use needs::{Boredom, Exhaustion};

use super::alert::AlertKind;

/// Every built-in alert, in readout registration order.
pub fn default_alerts() -> Vec<Box<dyn AlertKind>> {
    vec![
        Box::new(FireInHomeArea),
        Box::new(ColonistNeedsRescuing),
        Box::new(ColonistNeedsTend),
        Box::new(Exhaustion),
        Box::new(AwaitingMedicalOperation),
        Box::new(Boredom),
        Box::new(ColonistsIdle),
        Box::new(BrawlerHasRangedWeapon),
        Box::new(BilliardsTableOnWall),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn keys_are_unique() {
        let alerts = default_alerts();
        let keys: HashSet<&str> = alerts.iter().map(|a| a.key()).collect();
        assert_eq!(keys.len(), alerts.len());
    }
}
