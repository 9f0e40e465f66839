//! Requester prioritization.
//!
//! Orders requesters so that the hardest to satisfy claim resources first
//! and are not crowded out by less demanding requesters.
//!
//! # Usage
//!
//! ```
//! use u_timetable::ranking::{EquipmentDemand, PriorityRanker};
//! use u_timetable::models::Requester;
//!
//! let ranker = PriorityRanker::new().with_rule(EquipmentDemand::new(10));
//! let requesters = vec![
//!     Requester::new(1, "light").with_capacity(1),
//!     Requester::new(2, "heavy").with_capacity(1).with_equipment("bench", 1),
//! ];
//! let ranked = ranker.rank(&requesters);
//! assert_eq!(ranked[0].id, 2);
//! ```

mod ranker;
mod rules;

pub use ranker::PriorityRanker;
pub use rules::EquipmentDemand;

use crate::models::Requester;
use std::fmt::Debug;

/// Priority returned by a [`PriorityRule`].
///
/// Higher priority = placed earlier.
pub type PriorityScore = u64;

/// A rule that evaluates how urgently a requester should be served.
pub trait PriorityRule: Send + Sync + Debug {
    /// Rule name (e.g., "EQUIPMENT_DEMAND").
    fn name(&self) -> &'static str;

    /// Evaluates a requester. Higher = served first.
    fn evaluate(&self, requester: &Requester) -> PriorityScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
