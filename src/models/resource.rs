//! Resource model.
//!
//! Resources are the rooms being handed out. Each has fixed attributes
//! (seat capacity, chemical suitability, installed equipment) and can be
//! reserved by at most one requester per weekly cycle.

use serde::{Deserialize, Serialize};

use super::equipment::quantity_of;
use super::EquipmentRequirement;

/// A reservable resource (room).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier.
    #[serde(rename = "_id")]
    pub id: u64,
    /// Human-readable name.
    pub name: String,
    /// Fixed attributes used for scoring.
    pub attributes: ResourceAttributes,
}

/// Fixed attributes of a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAttributes {
    /// Number of seats.
    pub capacity: u32,
    /// Whether chemicals may be handled here.
    pub chemical_use: bool,
    /// Installed equipment. A repeated id uses the quantity of its last
    /// record.
    #[serde(default)]
    pub equipment: Vec<EquipmentRequirement>,
}

impl Resource {
    /// Creates a resource with no equipment and zero capacity.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            attributes: ResourceAttributes::default(),
        }
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.attributes.capacity = capacity;
        self
    }

    /// Sets the chemical-use flag.
    pub fn with_chemical_use(mut self, chemical_use: bool) -> Self {
        self.attributes.chemical_use = chemical_use;
        self
    }

    /// Adds installed equipment.
    pub fn with_equipment(mut self, id: impl Into<String>, quantity: u32) -> Self {
        self.attributes
            .equipment
            .push(EquipmentRequirement::new(id, quantity));
        self
    }

    /// Installed quantity of an equipment kind (0 if absent).
    pub fn equipment_quantity(&self, id: &str) -> u32 {
        quantity_of(&self.attributes.equipment, id)
    }
}
