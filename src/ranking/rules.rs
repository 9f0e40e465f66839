//! Built-in priority rules.

use super::{PriorityRule, PriorityScore};
use crate::config::AllocationConfig;
use crate::models::Requester;

/// Equipment-and-capacity demand.
///
/// `priority = weight * distinct equipment kinds + capacity`. Requesters
/// needing many kinds of equipment or many seats are the hardest to
/// satisfy and go first.
#[derive(Debug, Clone, Copy)]
pub struct EquipmentDemand {
    equipment_weight: u64,
}

impl EquipmentDemand {
    /// Creates the rule with the given points per equipment kind.
    pub fn new(equipment_weight: u64) -> Self {
        Self { equipment_weight }
    }

    /// Creates the rule from an allocation config.
    pub fn from_config(config: &AllocationConfig) -> Self {
        Self::new(config.equipment_priority_weight)
    }
}

impl Default for EquipmentDemand {
    fn default() -> Self {
        Self::from_config(&AllocationConfig::default())
    }
}

impl PriorityRule for EquipmentDemand {
    fn name(&self) -> &'static str {
        "EQUIPMENT_DEMAND"
    }

    fn evaluate(&self, requester: &Requester) -> PriorityScore {
        let kinds = requester.required_equipment().len() as u64;
        self.equipment_weight
            .saturating_mul(kinds)
            .saturating_add(u64::from(requester.preference.capacity))
    }

    fn description(&self) -> &'static str {
        "Most equipment kinds and seats first"
    }
}
