//! Phase 2: per-day timetable construction.
//!
//! # Algorithm
//!
//! Each weekday is built independently. Requesters are visited in the
//! priority order of Phase 1 and placed unless they are unavailable that
//! day, already placed that day, hold no reservation, or their reserved
//! resource is already occupied that day. The "already placed" check is
//! what keeps a repeated requester id to one slot per day.
//!
//! With exclusive weekly reservations the last guard never fires. It is
//! kept so that relaxing exclusivity cannot silently double-book a room.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::models::{Requester, Reservation, Timetable, TimetableEntry, Weekday};

/// Builds the weekly timetable from the fixed weekly reservations.
pub(crate) fn build_timetable(ranked: &[&Requester], reservations: &[Reservation]) -> Timetable {
    let by_requester: HashMap<u64, &Reservation> = reservations
        .iter()
        .map(|r| (r.requester_id, r))
        .collect();

    let mut timetable = Timetable::new();

    for day in Weekday::ALL {
        let mut resources_today: HashSet<u64> = HashSet::new();
        let mut requesters_today: HashSet<u64> = HashSet::new();

        for requester in ranked {
            if !requester.is_available_on(day) || requesters_today.contains(&requester.id) {
                continue;
            }
            let Some(reservation) = by_requester.get(&requester.id) else {
                continue;
            };
            if !resources_today.insert(reservation.resource_id) {
                trace!(%day, resource = reservation.resource_id, "resource already occupied");
                continue;
            }
            requesters_today.insert(requester.id);

            trace!(%day, requester = requester.id, resource = reservation.resource_id, "placed");
            timetable.add_entry(
                day,
                TimetableEntry::new(
                    requester.id,
                    requester.name.clone(),
                    reservation.resource_id,
                    reservation.resource_name.clone(),
                ),
            );
        }
    }

    timetable
}
