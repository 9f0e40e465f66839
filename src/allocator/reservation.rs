//! Phase 1: weekly reservation.
//!
//! # Algorithm
//!
//! For each requester in priority order:
//! 1. Score every resource still in the pool; incompatible ones are skipped.
//! 2. Keep the strictly highest score. On exact ties the resource seen
//!    first in pool order wins.
//! 3. Commit only if that score is strictly above the acceptance
//!    threshold, and remove the resource from the pool at once.
//!
//! A requester id that already holds a reservation is not matched again, so
//! a repeated id never takes a second resource out of the pool.
//!
//! Single pass, no re-matching or swapping, so the result is greedy rather
//! than a maximum-weight matching.
//!
//! # Complexity
//! O(u * r * e) where u = requesters, r = resources, e = equipment kinds.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::AllocationError;
use crate::models::{Requester, Reservation, Resource};
use crate::scoring::{Compatibility, CompatibilityScorer};

/// Result of the reservation phase.
#[derive(Debug, Clone, Default)]
pub(crate) struct ReservationPhase {
    /// Committed reservations, in priority order.
    pub reservations: Vec<Reservation>,
    /// Requesters whose best score did not pass the threshold.
    pub unreserved: Vec<u64>,
}

/// Reserves at most one resource per requester for the whole week.
pub(crate) fn reserve_resources(
    ranked: &[&Requester],
    resources: &[Resource],
    scorer: &CompatibilityScorer,
) -> Result<ReservationPhase, AllocationError> {
    let threshold = scorer.config().acceptance_threshold;
    let mut pool: Vec<&Resource> = resources.iter().collect();
    let mut phase = ReservationPhase::default();
    let mut holders: HashSet<u64> = HashSet::new();

    for requester in ranked {
        if holders.contains(&requester.id) {
            debug!(requester = requester.id, "repeated id already holds a reservation");
            continue;
        }

        let mut best: Option<(usize, f64)> = None;

        for (idx, resource) in pool.iter().enumerate() {
            let score = match scorer.score(requester, resource)? {
                Compatibility::Score(s) => s,
                Compatibility::Incompatible => continue,
            };
            trace!(requester = requester.id, resource = resource.id, score, "scored");

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((idx, score));
            }
        }

        match best {
            Some((idx, score)) if score > threshold => {
                let resource = pool.remove(idx);
                holders.insert(requester.id);
                debug!(
                    requester = requester.id,
                    resource = resource.id,
                    score,
                    "reserved"
                );
                phase.reservations.push(Reservation::new(
                    requester.id,
                    resource.id,
                    resource.name.clone(),
                    score,
                ));
            }
            Some((_, score)) => {
                debug!(requester = requester.id, score, threshold, "best score below threshold");
                phase.unreserved.push(requester.id);
            }
            None => {
                debug!(requester = requester.id, "no compatible resource left");
                phase.unreserved.push(requester.id);
            }
        }
    }

    let mut listed = HashSet::new();
    phase
        .unreserved
        .retain(|id| !holders.contains(id) && listed.insert(*id));

    Ok(phase)
}
