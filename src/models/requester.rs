//! Requester model.
//!
//! A requester is a person asking for a room for the week. It carries a
//! requirement profile (capacity, chemical use, equipment) and a per-day
//! unavailability flag. Requesters are created and edited elsewhere; the
//! engine only reads them.

use serde::{Deserialize, Serialize};

use super::equipment::distinct;
use super::{EquipmentRequirement, Weekday};

/// A requester (user) competing for a weekly resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requester {
    /// Unique requester identifier.
    #[serde(rename = "_id")]
    pub id: u64,
    /// Human-readable name.
    pub name: String,
    /// Days on which the requester will not attend.
    #[serde(default)]
    pub unavailability: Unavailability,
    /// Requirement profile driving scoring.
    #[serde(rename = "roomPreference")]
    pub preference: RequesterPreference,
}

/// Requirement profile of a requester.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequesterPreference {
    /// Number of seats needed.
    pub capacity: u32,
    /// Whether chemicals will be handled. Hard constraint.
    pub chemical_use: bool,
    /// Equipment needed. A repeated id counts once, with the quantity of
    /// its last record.
    #[serde(default)]
    pub equipment: Vec<EquipmentRequirement>,
}

/// Per-weekday unavailability flags (`true` = not attending).
///
/// Missing days in a serialized document default to available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Unavailability {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
}

impl Unavailability {
    /// Available every day.
    pub fn none() -> Self {
        Self::default()
    }

    /// Unavailable every day.
    pub fn all() -> Self {
        Self {
            monday: true,
            tuesday: true,
            wednesday: true,
            thursday: true,
            friday: true,
        }
    }

    /// Available only on the given days.
    pub fn only_available_on(days: &[Weekday]) -> Self {
        let mut u = Self::all();
        for &day in days {
            u.set(day, false);
        }
        u
    }

    /// Whether the requester is away on `day`.
    pub fn is_unavailable(&self, day: Weekday) -> bool {
        match day {
            Weekday::Monday => self.monday,
            Weekday::Tuesday => self.tuesday,
            Weekday::Wednesday => self.wednesday,
            Weekday::Thursday => self.thursday,
            Weekday::Friday => self.friday,
        }
    }

    /// Sets the flag for one day.
    pub fn set(&mut self, day: Weekday, unavailable: bool) {
        let slot = match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
        };
        *slot = unavailable;
    }

    /// Whether the requester is away on every day of the cycle.
    pub fn is_unavailable_all_week(&self) -> bool {
        Weekday::ALL.iter().all(|&day| self.is_unavailable(day))
    }
}

impl Requester {
    /// Creates a requester with no requirements who is available all week.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            unavailability: Unavailability::none(),
            preference: RequesterPreference::default(),
        }
    }

    /// Sets the required capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.preference.capacity = capacity;
        self
    }

    /// Sets the chemical-use flag.
    pub fn with_chemical_use(mut self, chemical_use: bool) -> Self {
        self.preference.chemical_use = chemical_use;
        self
    }

    /// Adds an equipment requirement.
    pub fn with_equipment(mut self, id: impl Into<String>, quantity: u32) -> Self {
        self.preference
            .equipment
            .push(EquipmentRequirement::new(id, quantity));
        self
    }

    /// Sets the unavailability flags.
    pub fn with_unavailability(mut self, unavailability: Unavailability) -> Self {
        self.unavailability = unavailability;
        self
    }

    /// Marks one day as unavailable.
    pub fn unavailable_on(mut self, day: Weekday) -> Self {
        self.unavailability.set(day, true);
        self
    }

    /// Required equipment as `(id, quantity)`, one pair per distinct id.
    pub fn required_equipment(&self) -> Vec<(&str, u32)> {
        distinct(&self.preference.equipment)
    }

    /// Whether the requester can attend on `day`.
    #[inline]
    pub fn is_available_on(&self, day: Weekday) -> bool {
        !self.unavailability.is_unavailable(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requester_builder() {
        let r = Requester::new(7, "Ada")
            .with_capacity(4)
            .with_chemical_use(true)
            .with_equipment("pipette", 2)
            .unavailable_on(Weekday::Tuesday);

        assert_eq!(r.id, 7);
        assert_eq!(r.name, "Ada");
        assert_eq!(r.preference.capacity, 4);
        assert!(r.preference.chemical_use);
        assert_eq!(r.preference.equipment.len(), 1);
        assert!(r.is_available_on(Weekday::Monday));
        assert!(!r.is_available_on(Weekday::Tuesday));
    }

    #[test]
    fn test_required_equipment_counts_ids_once() {
        let r = Requester::new(1, "Ada")
            .with_equipment("bench", 1)
            .with_equipment("pipette", 4)
            .with_equipment("bench", 2);

        assert_eq!(r.preference.equipment.len(), 3);
        assert_eq!(r.required_equipment(), vec![("bench", 2), ("pipette", 4)]);
    }

    #[test]
    fn test_unavailable_all_week() {
        assert!(Unavailability::all().is_unavailable_all_week());
        assert!(!Unavailability::none().is_unavailable_all_week());

        let only_friday = Unavailability::only_available_on(&[Weekday::Friday]);
        assert!(!only_friday.is_unavailable_all_week());
        assert!(only_friday.is_unavailable(Weekday::Monday));
        assert!(!only_friday.is_unavailable(Weekday::Friday));
    }

    #[test]
    fn test_json_document() {
        let json = r#"{
            "_id": 3,
            "name": "I Require Pipettes and Fridays",
            "isManager": false,
            "unavailability": {
                "Monday": true, "Tuesday": true, "Wednesday": true,
                "Thursday": true, "Friday": false
            },
            "roomPreference": {
                "capacity": 2,
                "chemicalUse": false,
                "equipment": [{"_id": "pipette", "name": "Pipette", "quantity": 3}]
            }
        }"#;

        let r: Requester = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, 3);
        assert_eq!(r.preference.capacity, 2);
        assert!(!r.preference.chemical_use);
        assert_eq!(r.preference.equipment[0].id, "pipette");
        assert_eq!(r.preference.equipment[0].name.as_deref(), Some("Pipette"));
        assert!(r.is_available_on(Weekday::Friday));
        assert!(!r.is_available_on(Weekday::Thursday));
    }

    #[test]
    fn test_missing_days_default_to_available() {
        let u: Unavailability = serde_json::from_str(r#"{"Monday": true}"#).unwrap();
        assert!(u.is_unavailable(Weekday::Monday));
        assert!(!u.is_unavailable(Weekday::Friday));
    }
}
