//! Weekly allocation: reservation followed by per-day timetabling.
//!
//! # Algorithm
//!
//! 1. Validate the input. Only zero equipment quantities abort the run;
//!    repeated ids are logged and allocated anyway.
//! 2. Rank requesters by priority, dropping those unavailable all week.
//! 3. Phase 1: reserve at most one resource per requester for the week
//!    (greedy, best score first-seen, strict acceptance threshold).
//! 4. Phase 2: build each weekday's entries from the fixed reservations,
//!    honoring availability and never double-booking a resource.
//!
//! The two phases run strictly in sequence with no backtracking. Each call
//! recomputes everything from its inputs, so the same input always yields
//! the same timetable.
//!
//! # Complexity
//! O(u * r * e) where u = requesters, r = resources, e = equipment kinds.

mod daily;
mod reservation;
mod summary;

pub use summary::TimetableSummary;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::AllocationConfig;
use crate::error::AllocationError;
use crate::models::{Requester, Reservation, Resource, Timetable};
use crate::ranking::{EquipmentDemand, PriorityRanker};
use crate::scoring::CompatibilityScorer;
use crate::validation::{validate_input, ValidationError};

/// Input container for one allocation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Requesters competing for resources.
    #[serde(alias = "users")]
    pub requesters: Vec<Requester>,
    /// Reservable resources.
    #[serde(alias = "rooms")]
    pub resources: Vec<Resource>,
}

impl AllocationRequest {
    /// Creates a new allocation request.
    pub fn new(requesters: Vec<Requester>, resources: Vec<Resource>) -> Self {
        Self {
            requesters,
            resources,
        }
    }
}

/// Timetable together with the intermediate results that produced it.
#[derive(Debug, Clone, Default)]
pub struct AllocationOutcome {
    /// The weekly timetable.
    pub timetable: Timetable,
    /// Weekly reservations, in priority order.
    pub reservations: Vec<Reservation>,
    /// Eligible requesters that got no reservation, in priority order.
    pub unreserved: Vec<u64>,
    /// Requesters dropped because they are unavailable all week, in input
    /// order.
    pub excluded: Vec<u64>,
}

impl AllocationOutcome {
    /// Reservation held by a requester, if any.
    pub fn reservation_for(&self, requester_id: u64) -> Option<&Reservation> {
        self.reservations
            .iter()
            .find(|r| r.requester_id == requester_id)
    }
}

/// Two-phase greedy weekly allocator.
///
/// Holds only immutable configuration, so one instance can serve any
/// number of independent runs.
///
/// # Example
///
/// ```
/// use u_timetable::allocator::WeeklyAllocator;
/// use u_timetable::models::{Requester, Resource, Weekday};
///
/// let requesters = vec![Requester::new(1, "Ada").with_capacity(2).with_equipment("bench", 1)];
/// let resources = vec![Resource::new(1, "Lab A").with_capacity(2).with_equipment("bench", 1)];
///
/// let allocator = WeeklyAllocator::default();
/// let timetable = allocator.allocate(&requesters, &resources).unwrap();
/// for day in Weekday::ALL {
///     assert_eq!(timetable.day(day)[0].resource_name, "Lab A");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct WeeklyAllocator {
    scorer: CompatibilityScorer,
    ranker: PriorityRanker,
}

impl WeeklyAllocator {
    /// Creates an allocator with the given policy.
    ///
    /// Requesters are ranked with [`EquipmentDemand`] weighted by
    /// [`AllocationConfig::equipment_priority_weight`].
    ///
    /// # Errors
    /// [`AllocationError::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn new(config: AllocationConfig) -> Result<Self, AllocationError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: AllocationConfig) -> Self {
        Self {
            ranker: PriorityRanker::new().with_rule(EquipmentDemand::from_config(&config)),
            scorer: CompatibilityScorer::new(config),
        }
    }

    /// The requester ranking in use.
    pub fn ranker(&self) -> &PriorityRanker {
        &self.ranker
    }

    /// The configuration in use.
    pub fn config(&self) -> &AllocationConfig {
        self.scorer.config()
    }

    /// Produces the weekly timetable.
    ///
    /// # Errors
    /// [`AllocationError::InvalidInput`] if a requester asks for zero units
    /// of some equipment.
    pub fn allocate(
        &self,
        requesters: &[Requester],
        resources: &[Resource],
    ) -> Result<Timetable, AllocationError> {
        self.allocate_detailed(requesters, resources)
            .map(|outcome| outcome.timetable)
    }

    /// Produces the weekly timetable along with reservations and the
    /// requesters left out.
    pub fn allocate_detailed(
        &self,
        requesters: &[Requester],
        resources: &[Resource],
    ) -> Result<AllocationOutcome, AllocationError> {
        if let Err(errors) = validate_input(requesters, resources) {
            let (rejected, tolerated): (Vec<ValidationError>, Vec<ValidationError>) =
                errors.into_iter().partition(|e| e.kind.rejects_input());
            for e in &tolerated {
                warn!(kind = ?e.kind, "{}", e.message);
            }
            if !rejected.is_empty() {
                return Err(AllocationError::InvalidInput(rejected));
            }
        }

        debug!(
            requesters = requesters.len(),
            resources = resources.len(),
            "allocating week"
        );

        let excluded: Vec<u64> = requesters
            .iter()
            .filter(|r| r.unavailability.is_unavailable_all_week())
            .map(|r| r.id)
            .collect();
        let ranked = self.ranker.rank(requesters);

        let phase = reservation::reserve_resources(&ranked, resources, &self.scorer)?;
        let timetable = daily::build_timetable(&ranked, &phase.reservations);

        debug!(
            reserved = phase.reservations.len(),
            unreserved = phase.unreserved.len(),
            excluded = excluded.len(),
            slots = timetable.slot_count(),
            "allocation finished"
        );

        Ok(AllocationOutcome {
            timetable,
            reservations: phase.reservations,
            unreserved: phase.unreserved,
            excluded,
        })
    }

    /// Allocates from a request.
    pub fn allocate_request(&self, request: &AllocationRequest) -> Result<Timetable, AllocationError> {
        self.allocate(&request.requesters, &request.resources)
    }
}

impl Default for WeeklyAllocator {
    fn default() -> Self {
        Self::from_config(AllocationConfig::default())
    }
}

/// Allocates a week with the default policy.
pub fn allocate(
    requesters: &[Requester],
    resources: &[Resource],
) -> Result<Timetable, AllocationError> {
    WeeklyAllocator::default().allocate(requesters, resources)
}
