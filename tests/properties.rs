//! Property tests over generated weeks.

use std::collections::HashSet;

use proptest::prelude::*;
use u_timetable::models::{Requester, Resource, Unavailability, Weekday};
use u_timetable::ranking::PriorityRanker;
use u_timetable::scoring::{Compatibility, CompatibilityScorer};
use u_timetable::{AllocationConfig, WeeklyAllocator};

// Equipment lists may repeat an id; capacities may be zero.
type RequesterParts = (u32, bool, Vec<(u8, u32)>, [bool; 5]);
type ResourceParts = (u32, bool, Vec<(u8, u32)>);

fn requester_parts() -> impl Strategy<Value = RequesterParts> {
    (
        0u32..20,
        any::<bool>(),
        prop::collection::vec((0u8..6, 1u32..5), 0..5),
        prop::array::uniform5(any::<bool>()),
    )
}

fn resource_parts() -> impl Strategy<Value = ResourceParts> {
    (
        0u32..20,
        any::<bool>(),
        prop::collection::vec((0u8..6, 0u32..5), 0..6),
    )
}

fn build_requester(id: u64, (capacity, chemical, equipment, away): RequesterParts) -> Requester {
    let mut unavailability = Unavailability::none();
    for (day, flag) in Weekday::ALL.into_iter().zip(away) {
        unavailability.set(day, flag);
    }
    equipment.into_iter().fold(
        Requester::new(id, format!("requester-{id}"))
            .with_capacity(capacity)
            .with_chemical_use(chemical)
            .with_unavailability(unavailability),
        |r, (kind, qty)| r.with_equipment(format!("eq-{kind}"), qty),
    )
}

fn build_resource(id: u64, (capacity, chemical, equipment): ResourceParts) -> Resource {
    equipment.into_iter().fold(
        Resource::new(id, format!("room-{id}"))
            .with_capacity(capacity)
            .with_chemical_use(chemical),
        |r, (kind, qty)| r.with_equipment(format!("eq-{kind}"), qty),
    )
}

/// Requester ids are drawn from a small range so that weeks regularly
/// contain repeated ids.
fn arb_week() -> impl Strategy<Value = (Vec<Requester>, Vec<Resource>)> {
    (
        prop::collection::vec((1u64..9, requester_parts()), 0..12),
        prop::collection::vec(resource_parts(), 0..8),
    )
        .prop_map(|(requesters, resources)| {
            (
                requesters
                    .into_iter()
                    .map(|(id, p)| build_requester(id, p))
                    .collect(),
                resources
                    .into_iter()
                    .enumerate()
                    .map(|(i, p)| build_resource(i as u64 + 100, p))
                    .collect(),
            )
        })
}

proptest! {
    #[test]
    fn valid_week_always_allocates((requesters, resources) in arb_week()) {
        let timetable = WeeklyAllocator::default().allocate(&requesters, &resources);
        prop_assert!(timetable.is_ok(), "allocation failed: {:?}", timetable.as_ref().err());

        let days: Vec<Weekday> = timetable.unwrap().iter().map(|(day, _)| day).collect();
        prop_assert_eq!(days, Weekday::ALL.to_vec());
    }

    #[test]
    fn no_same_day_double_booking((requesters, resources) in arb_week()) {
        let timetable = WeeklyAllocator::default().allocate(&requesters, &resources).unwrap();
        prop_assert!(timetable.conflicts().is_empty());
    }

    #[test]
    fn rerun_gives_identical_json((requesters, resources) in arb_week()) {
        let allocator = WeeklyAllocator::default();
        let a = serde_json::to_string(&allocator.allocate(&requesters, &resources).unwrap()).unwrap();
        let b = serde_json::to_string(&allocator.allocate(&requesters, &resources).unwrap()).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn placements_respect_reservations_and_availability((requesters, resources) in arb_week()) {
        let outcome = WeeklyAllocator::default().allocate_detailed(&requesters, &resources).unwrap();

        for (day, entries) in outcome.timetable.iter() {
            for e in entries {
                prop_assert!(requesters
                    .iter()
                    .any(|r| r.id == e.requester_id && r.is_available_on(day)));

                let reservation = outcome.reservation_for(e.requester_id);
                prop_assert_eq!(reservation.map(|r| r.resource_id), Some(e.resource_id));
            }
        }

        for r in &outcome.reservations {
            prop_assert!(r.score > 0.6);
        }
    }

    #[test]
    fn reservations_are_exclusive((requesters, resources) in arb_week()) {
        let outcome = WeeklyAllocator::default().allocate_detailed(&requesters, &resources).unwrap();
        let mut resources_seen = HashSet::new();
        let mut requesters_seen = HashSet::new();
        for r in &outcome.reservations {
            prop_assert!(resources_seen.insert(r.resource_id));
            prop_assert!(requesters_seen.insert(r.requester_id));
            prop_assert!(!outcome.unreserved.contains(&r.requester_id));
        }
    }

    #[test]
    fn chemical_mismatch_always_incompatible(
        req in requester_parts(),
        res in resource_parts(),
    ) {
        let requester = build_requester(1, req);
        let resource = build_resource(1, res).with_chemical_use(!requester.preference.chemical_use);
        let scorer = CompatibilityScorer::new(AllocationConfig::default());
        prop_assert_eq!(scorer.score(&requester, &resource).unwrap(), Compatibility::Incompatible);
    }

    #[test]
    fn scores_stay_in_unit_interval(req in requester_parts(), res in resource_parts()) {
        let requester = build_requester(1, req);
        let resource = build_resource(1, res).with_chemical_use(requester.preference.chemical_use);
        let scorer = CompatibilityScorer::new(AllocationConfig::default());
        let b = scorer.breakdown(&requester, &resource).unwrap().unwrap();

        prop_assert!((0.0..=1.0 + 1e-12).contains(&b.total));
        if resource.attributes.capacity < requester.preference.capacity {
            prop_assert!((b.capacity - 0.2).abs() < 1e-12);
        }
        if requester.preference.equipment.is_empty() {
            prop_assert!((b.equipment - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn priority_counts_each_equipment_id_once(req in requester_parts()) {
        let requester = build_requester(1, req);
        let kinds: HashSet<&str> = requester
            .preference
            .equipment
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        let expected = 10 * kinds.len() as u64 + u64::from(requester.preference.capacity);
        prop_assert_eq!(PriorityRanker::new().priority(&requester), expected);
    }
}
