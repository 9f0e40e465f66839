//! Equipment model.
//!
//! The same record type describes both sides of a match: the equipment a
//! requester needs and the equipment a resource provides. Two records are
//! match candidates when their ids are equal.

use serde::{Deserialize, Serialize};

/// An equipment kind with a quantity (needed or available).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRequirement {
    /// Equipment kind identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name, when the caller has already joined it in.
    ///
    /// Not used for scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Units needed (requester side) or available (resource side).
    pub quantity: u32,
}

impl EquipmentRequirement {
    /// Creates an equipment record.
    pub fn new(id: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: None,
            quantity,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Quantity of `id` in an equipment list (0 if absent).
///
/// When an id is listed more than once, the last record wins.
pub(crate) fn quantity_of(equipment: &[EquipmentRequirement], id: &str) -> u32 {
    equipment
        .iter()
        .rev()
        .find(|e| e.id == id)
        .map(|e| e.quantity)
        .unwrap_or(0)
}

/// Collapses an equipment list to one `(id, quantity)` pair per distinct id.
///
/// Ids keep the order of their first appearance; the quantity is the one of
/// the last record for that id, as with [`quantity_of`].
pub(crate) fn distinct(equipment: &[EquipmentRequirement]) -> Vec<(&str, u32)> {
    let mut kinds: Vec<(&str, u32)> = Vec::with_capacity(equipment.len());
    for e in equipment {
        match kinds.iter_mut().find(|(id, _)| *id == e.id) {
            Some(kind) => kind.1 = e.quantity,
            None => kinds.push((e.id.as_str(), e.quantity)),
        }
    }
    kinds
}
