//! Weekly resource allocation for the U-Engine ecosystem.
//!
//! Hands out rooms to requesters for a Monday-to-Friday cycle: scores every
//! requester/room pair, reserves at most one room per requester for the
//! week, then builds a per-day timetable with no double bookings.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Requester`, `Resource`, `EquipmentRequirement`,
//!   `Reservation`, `Timetable`, `Weekday`
//! - **`scoring`**: `CompatibilityScorer` (chemical hard filter, weighted
//!   capacity and equipment fit)
//! - **`ranking`**: `PriorityRanker` and pluggable `PriorityRule`s
//! - **`allocator`**: `WeeklyAllocator` (two-phase greedy allocation) and
//!   `TimetableSummary`
//! - **`validation`**: Input integrity checks (duplicate IDs, zero quantities)
//! - **`config`**: `AllocationConfig` policy constants
//!
//! # Example
//!
//! ```
//! use u_timetable::allocate;
//! use u_timetable::models::{Requester, Resource, Weekday};
//!
//! let requesters = vec![
//!     Requester::new(1, "Ada").with_capacity(2).with_equipment("pipette", 2),
//!     Requester::new(2, "Bob").with_capacity(1).unavailable_on(Weekday::Monday),
//! ];
//! let resources = vec![
//!     Resource::new(1, "Wet lab").with_capacity(2).with_equipment("pipette", 4),
//!     Resource::new(2, "Office").with_capacity(1),
//! ];
//!
//! let timetable = allocate(&requesters, &resources).unwrap();
//! assert_eq!(timetable.day(Weekday::Monday).len(), 1);
//! assert_eq!(timetable.day(Weekday::Tuesday).len(), 2);
//! ```
//!
//! # Non-goals
//!
//! The matching is greedy, not a maximum-weight bipartite matching, and
//! every call recomputes the week from scratch.

pub mod allocator;
pub mod config;
pub mod error;
pub mod models;
pub mod ranking;
pub mod scoring;
pub mod validation;

pub use allocator::{allocate, AllocationOutcome, AllocationRequest, WeeklyAllocator};
pub use config::AllocationConfig;
pub use error::AllocationError;
