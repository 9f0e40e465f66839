//! Timetable (solution) model.
//!
//! A timetable lists, for every day of the cycle, which requester sits in
//! which resource. It is the engine's only output and is rebuilt from
//! scratch on every allocation run.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::Weekday;

/// A weekly requester-resource pairing produced by the reservation phase.
///
/// Lives only for the duration of one allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub requester_id: u64,
    pub resource_id: u64,
    /// Resource name (denormalized for timetable entries).
    pub resource_name: String,
    /// Compatibility score that won the reservation.
    pub score: f64,
}

/// One occupied slot: a requester using a resource on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    #[serde(rename = "user_id")]
    pub requester_id: u64,
    #[serde(rename = "user_name")]
    pub requester_name: String,
    #[serde(rename = "room_id")]
    pub resource_id: u64,
    #[serde(rename = "room_name")]
    pub resource_name: String,
}

/// A same-day double booking found in a timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    /// A resource is listed more than once on one day.
    ResourceDoubleBooked { day: Weekday, resource_id: u64 },
    /// A requester is listed more than once on one day.
    RequesterDoubleBooked { day: Weekday, requester_id: u64 },
}

/// Weekly timetable: ordered entries per weekday.
///
/// Every weekday is always present, possibly empty. Serializes as a JSON
/// object keyed `"Monday"` .. `"Friday"` in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Weekday, Vec<TimetableEntry>>",
    into = "BTreeMap<Weekday, Vec<TimetableEntry>>"
)]
pub struct Timetable {
    days: BTreeMap<Weekday, Vec<TimetableEntry>>,
}

impl Reservation {
    /// Creates a reservation.
    pub fn new(
        requester_id: u64,
        resource_id: u64,
        resource_name: impl Into<String>,
        score: f64,
    ) -> Self {
        Self {
            requester_id,
            resource_id,
            resource_name: resource_name.into(),
            score,
        }
    }
}

impl TimetableEntry {
    /// Creates an entry.
    pub fn new(
        requester_id: u64,
        requester_name: impl Into<String>,
        resource_id: u64,
        resource_name: impl Into<String>,
    ) -> Self {
        Self {
            requester_id,
            requester_name: requester_name.into(),
            resource_id,
            resource_name: resource_name.into(),
        }
    }
}

impl Timetable {
    /// Creates a timetable with all five weekdays present and empty.
    pub fn new() -> Self {
        Self {
            days: Weekday::ALL.iter().map(|&d| (d, Vec::new())).collect(),
        }
    }

    /// Appends an entry to a day.
    pub fn add_entry(&mut self, day: Weekday, entry: TimetableEntry) {
        self.days.entry(day).or_default().push(entry);
    }

    /// Entries for one day, in placement order.
    pub fn day(&self, day: Weekday) -> &[TimetableEntry] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates days Monday through Friday with their entries.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[TimetableEntry])> {
        self.days.iter().map(|(&d, e)| (d, e.as_slice()))
    }

    /// Days (with the entry) on which a requester is placed.
    pub fn entries_for_requester(&self, requester_id: u64) -> Vec<(Weekday, &TimetableEntry)> {
        self.iter()
            .flat_map(|(d, entries)| entries.iter().map(move |e| (d, e)))
            .filter(|(_, e)| e.requester_id == requester_id)
            .collect()
    }

    /// Days (with the entry) on which a resource is occupied.
    pub fn entries_for_resource(&self, resource_id: u64) -> Vec<(Weekday, &TimetableEntry)> {
        self.iter()
            .flat_map(|(d, entries)| entries.iter().map(move |e| (d, e)))
            .filter(|(_, e)| e.resource_id == resource_id)
            .collect()
    }

    /// Total number of occupied slots across the week.
    pub fn slot_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Whether no day has any entry.
    pub fn is_empty(&self) -> bool {
        self.slot_count() == 0
    }

    /// Finds same-day double bookings of resources or requesters.
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut conflicts = Vec::new();
        for (day, entries) in self.iter() {
            let mut resources = HashSet::new();
            let mut requesters = HashSet::new();
            for e in entries {
                if !resources.insert(e.resource_id) {
                    conflicts.push(Conflict::ResourceDoubleBooked {
                        day,
                        resource_id: e.resource_id,
                    });
                }
                if !requesters.insert(e.requester_id) {
                    conflicts.push(Conflict::RequesterDoubleBooked {
                        day,
                        requester_id: e.requester_id,
                    });
                }
            }
        }
        conflicts
    }

    /// Whether the timetable has no same-day double bookings.
    pub fn is_valid(&self) -> bool {
        self.conflicts().is_empty()
    }
}

impl Default for Timetable {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BTreeMap<Weekday, Vec<TimetableEntry>>> for Timetable {
    fn from(days: BTreeMap<Weekday, Vec<TimetableEntry>>) -> Self {
        let mut timetable = Self::new();
        timetable.days.extend(days);
        timetable
    }
}

impl From<Timetable> for BTreeMap<Weekday, Vec<TimetableEntry>> {
    fn from(timetable: Timetable) -> Self {
        timetable.days
    }
}
