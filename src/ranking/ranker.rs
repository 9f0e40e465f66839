//! Stable priority ranking of requesters.

use std::sync::Arc;

use tracing::debug;

use super::{EquipmentDemand, PriorityRule, PriorityScore};
use crate::models::Requester;

/// Orders requesters by descending priority.
///
/// Requesters unavailable on every weekday are dropped first: they can
/// never hold a slot. The sort is stable, so requesters with equal
/// priority keep their input order and results are reproducible.
#[derive(Clone)]
pub struct PriorityRanker {
    rule: Arc<dyn PriorityRule>,
}

impl PriorityRanker {
    /// Creates a ranker using [`EquipmentDemand`] with default weight.
    pub fn new() -> Self {
        Self {
            rule: Arc::new(EquipmentDemand::default()),
        }
    }

    /// Replaces the priority rule.
    pub fn with_rule<R: PriorityRule + 'static>(mut self, rule: R) -> Self {
        self.rule = Arc::new(rule);
        self
    }

    /// Priority of a single requester.
    pub fn priority(&self, requester: &Requester) -> PriorityScore {
        self.rule.evaluate(requester)
    }

    /// Indices of eligible requesters, highest priority first.
    pub fn rank_indices(&self, requesters: &[Requester]) -> Vec<usize> {
        let scores: Vec<PriorityScore> = requesters.iter().map(|r| self.priority(r)).collect();

        let mut indices: Vec<usize> = Vec::with_capacity(requesters.len());
        for (i, r) in requesters.iter().enumerate() {
            if r.unavailability.is_unavailable_all_week() {
                debug!(requester = r.id, "excluded: unavailable all week");
            } else {
                indices.push(i);
            }
        }

        // `sort_by` is stable.
        indices.sort_by(|&a, &b| scores[b].cmp(&scores[a]));
        indices
    }

    /// Eligible requesters, highest priority first.
    pub fn rank<'a>(&self, requesters: &'a [Requester]) -> Vec<&'a Requester> {
        self.rank_indices(requesters)
            .into_iter()
            .map(|i| &requesters[i])
            .collect()
    }
}

impl Default for PriorityRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PriorityRanker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityRanker")
            .field("rule", &self.rule.name())
            .finish()
    }
}
