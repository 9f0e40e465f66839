//! Allocation domain models.
//!
//! Provides the data types consumed and produced by the weekly allocator.
//! Inputs arrive already denormalized (equipment ids and quantities
//! resolved); the engine reads them and produces a [`Timetable`].
//!
//! # Domain Mappings
//!
//! | u-timetable | Lab booking | Desk sharing | Clinic |
//! |-------------|-------------|--------------|--------|
//! | Requester | Researcher | Employee | Practitioner |
//! | Resource | Lab room | Desk/Office | Consulting room |
//! | Equipment | Instruments | Monitors | Devices |
//! | Timetable | Weekly rota | Seating plan | Room rota |

mod equipment;
mod requester;
mod resource;
mod timetable;
mod weekday;

pub use equipment::EquipmentRequirement;
pub use requester::{Requester, RequesterPreference, Unavailability};
pub use resource::{Resource, ResourceAttributes};
pub use timetable::{Conflict, Reservation, Timetable, TimetableEntry};
pub use weekday::Weekday;
