//! Timetable quality metrics.
//!
//! Computes summary indicators from a finished allocation run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Slots | Entries across the whole week |
//! | Slots by Day | Entries per weekday |
//! | Reservation Rate | Reserved / eligible requesters |
//! | Avg Score | Mean score of committed reservations |
//! | Utilization | Occupied slots / (resources x weekdays) |

use std::collections::BTreeMap;

use super::AllocationOutcome;
use crate::models::Weekday;

/// Allocation quality indicators.
#[derive(Debug, Clone)]
pub struct TimetableSummary {
    /// Occupied slots across the week.
    pub total_slots: usize,
    /// Occupied slots per weekday, Monday first.
    pub slots_by_day: BTreeMap<Weekday, usize>,
    /// Requesters holding a weekly reservation.
    pub reserved_requesters: usize,
    /// Eligible requesters left without a reservation.
    pub unreserved_requesters: usize,
    /// Requesters excluded as unavailable all week.
    pub excluded_requesters: usize,
    /// Fraction of eligible requesters that got a reservation (0.0..1.0).
    pub reservation_rate: f64,
    /// Mean score of committed reservations.
    pub avg_score: f64,
    /// Fraction of resource-days in use (0.0..1.0).
    pub utilization: f64,
}

impl TimetableSummary {
    /// Computes the summary of an allocation run.
    ///
    /// # Arguments
    /// * `outcome` - The finished run.
    /// * `resource_count` - Number of resources offered to the run.
    pub fn calculate(outcome: &AllocationOutcome, resource_count: usize) -> Self {
        let slots_by_day: BTreeMap<Weekday, usize> = outcome
            .timetable
            .iter()
            .map(|(day, entries)| (day, entries.len()))
            .collect();
        let total_slots: usize = slots_by_day.values().sum();

        let reserved = outcome.reservations.len();
        let eligible = reserved + outcome.unreserved.len();

        let reservation_rate = if eligible == 0 {
            1.0
        } else {
            reserved as f64 / eligible as f64
        };

        let avg_score = if reserved == 0 {
            0.0
        } else {
            outcome.reservations.iter().map(|r| r.score).sum::<f64>() / reserved as f64
        };

        let capacity = resource_count * Weekday::ALL.len();
        let utilization = if capacity == 0 {
            0.0
        } else {
            total_slots as f64 / capacity as f64
        };

        Self {
            total_slots,
            slots_by_day,
            reserved_requesters: reserved,
            unreserved_requesters: outcome.unreserved.len(),
            excluded_requesters: outcome.excluded.len(),
            reservation_rate,
            avg_score,
            utilization,
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_reservation_rate: f64, min_utilization: f64) -> bool {
        self.reservation_rate >= min_reservation_rate && self.utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Reservation, Timetable, TimetableEntry};

    fn sample_outcome() -> AllocationOutcome {
        let mut timetable = Timetable::new();
        for day in Weekday::ALL {
            timetable.add_entry(day, TimetableEntry::new(1, "Ada", 10, "Lab A"));
        }
        timetable.add_entry(Weekday::Friday, TimetableEntry::new(2, "Bob", 11, "Lab B"));

        AllocationOutcome {
            timetable,
            reservations: vec![
                Reservation::new(1, 10, "Lab A", 0.9),
                Reservation::new(2, 11, "Lab B", 0.7),
            ],
            unreserved: vec![3, 4],
            excluded: vec![5],
        }
    }

    #[test]
    fn test_summary_basic() {
        let s = TimetableSummary::calculate(&sample_outcome(), 3);

        assert_eq!(s.total_slots, 6);
        assert_eq!(s.slots_by_day[&Weekday::Monday], 1);
        assert_eq!(s.slots_by_day[&Weekday::Friday], 2);
        assert_eq!(s.reserved_requesters, 2);
        assert_eq!(s.unreserved_requesters, 2);
        assert_eq!(s.excluded_requesters, 1);
        assert!((s.reservation_rate - 0.5).abs() < 1e-10);
        assert!((s.avg_score - 0.8).abs() < 1e-10);
        // 6 slots over 3 resources x 5 days
        assert!((s.utilization - 0.4).abs() < 1e-10);
    }

    #[test]
    fn test_summary_empty() {
        let s = TimetableSummary::calculate(&AllocationOutcome::default(), 0);
        assert_eq!(s.total_slots, 0);
        assert_eq!(s.slots_by_day.len(), 5);
        assert!((s.reservation_rate - 1.0).abs() < 1e-10);
        assert!((s.avg_score - 0.0).abs() < 1e-10);
        assert!((s.utilization - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let s = TimetableSummary::calculate(&sample_outcome(), 3);
        assert!(s.meets_thresholds(0.5, 0.4));
        assert!(!s.meets_thresholds(0.6, 0.0));
        assert!(!s.meets_thresholds(0.0, 0.5));
    }
}
