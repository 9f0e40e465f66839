//! Requester/resource compatibility scoring.
//!
//! # Algorithm
//!
//! 1. Hard filter: a chemical-use mismatch makes the pair
//!    [`Compatibility::Incompatible`]. No weighting happens.
//! 2. Capacity sub-score: a fixed penalty for undersized resources,
//!    otherwise `min(1, needed / available + fit_bonus)`. Tighter fits
//!    score higher.
//! 3. Equipment sub-score: mean per-kind coverage, where a kind counts 1
//!    when fully available and `available / needed` when partially
//!    available. A requester with no equipment needs scores 1.
//! 4. Final score: weighted sum of the two sub-scores.
//!
//! # Complexity
//! O(e * f) where e = required kinds, f = installed kinds.

use tracing::trace;

use crate::config::AllocationConfig;
use crate::error::AllocationError;
use crate::models::{Requester, Resource};

/// Result of scoring one requester/resource pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Compatibility {
    /// Compatible, with a score in `[0, 1]`.
    Score(f64),
    /// Chemical-use mismatch. Not a score of zero: the pair must never be
    /// matched.
    Incompatible,
}

impl Compatibility {
    /// The score, or `None` when incompatible.
    pub fn value(self) -> Option<f64> {
        match self {
            Compatibility::Score(s) => Some(s),
            Compatibility::Incompatible => None,
        }
    }

    /// Whether the pair passed the hard filter.
    pub fn is_compatible(self) -> bool {
        matches!(self, Compatibility::Score(_))
    }
}

/// Sub-scores behind a compatible pair's final score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Capacity sub-score (0..1).
    pub capacity: f64,
    /// Equipment sub-score (0..1).
    pub equipment: f64,
    /// Weighted final score (0..1).
    pub total: f64,
}

/// Scores requester/resource pairs under an [`AllocationConfig`].
///
/// Pure: no state is kept between calls and call order does not matter.
///
/// # Example
///
/// ```
/// use u_timetable::scoring::{Compatibility, CompatibilityScorer};
/// use u_timetable::models::{Requester, Resource};
/// use u_timetable::AllocationConfig;
///
/// let scorer = CompatibilityScorer::new(AllocationConfig::default());
/// let requester = Requester::new(1, "Ada").with_capacity(2).with_equipment("bench", 1);
/// let room = Resource::new(1, "Lab A").with_capacity(4).with_equipment("bench", 1);
///
/// let score = scorer.score(&requester, &room).unwrap().value().unwrap();
/// // capacity: 2/4 + 0.2 = 0.7, equipment: 1.0 → 0.3 * 0.7 + 0.7 * 1.0
/// assert!((score - 0.91).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompatibilityScorer {
    config: AllocationConfig,
}

impl CompatibilityScorer {
    /// Creates a scorer.
    pub fn new(config: AllocationConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Scores a pair.
    ///
    /// # Errors
    /// [`AllocationError::InvalidQuantity`] if the requester asks for zero
    /// units of some equipment and the pair passes the hard filter.
    pub fn score(
        &self,
        requester: &Requester,
        resource: &Resource,
    ) -> Result<Compatibility, AllocationError> {
        Ok(match self.breakdown(requester, resource)? {
            Some(b) => Compatibility::Score(b.total),
            None => Compatibility::Incompatible,
        })
    }

    /// Scores a pair and returns the sub-scores.
    ///
    /// Returns `Ok(None)` when the pair is incompatible.
    pub fn breakdown(
        &self,
        requester: &Requester,
        resource: &Resource,
    ) -> Result<Option<ScoreBreakdown>, AllocationError> {
        if !Self::passes_hard_filter(requester, resource) {
            trace!(
                requester = requester.id,
                resource = resource.id,
                "chemical use mismatch"
            );
            return Ok(None);
        }

        let capacity = self.capacity_score(
            requester.preference.capacity,
            resource.attributes.capacity,
        );
        let equipment = Self::equipment_score(requester, resource)?;
        let total = self.config.capacity_weight * capacity + self.config.equipment_weight * equipment;

        Ok(Some(ScoreBreakdown {
            capacity,
            equipment,
            total,
        }))
    }

    /// Whether the chemical-use flags agree.
    #[inline]
    pub fn passes_hard_filter(requester: &Requester, resource: &Resource) -> bool {
        requester.preference.chemical_use == resource.attributes.chemical_use
    }

    /// Capacity sub-score for `needed` seats in a resource with `available`.
    pub fn capacity_score(&self, needed: u32, available: u32) -> f64 {
        if available < needed {
            return self.config.undersized_penalty;
        }
        // available == 0 implies needed == 0: an exact fit.
        let ratio = if available == 0 {
            1.0
        } else {
            f64::from(needed) / f64::from(available)
        };
        (ratio + self.config.fit_bonus).min(1.0)
    }

    /// Equipment sub-score of a resource for a requester.
    ///
    /// An equipment id listed more than once counts as one kind, with the
    /// quantity of its last record.
    pub fn equipment_score(
        requester: &Requester,
        resource: &Resource,
    ) -> Result<f64, AllocationError> {
        if let Some(req) = requester.preference.equipment.iter().find(|e| e.quantity == 0) {
            return Err(AllocationError::InvalidQuantity {
                requester_id: requester.id,
                equipment_id: req.id.clone(),
            });
        }

        let required = requester.required_equipment();
        if required.is_empty() {
            return Ok(1.0);
        }

        let mut matched = 0.0;
        for &(id, needed) in &required {
            let available = resource.equipment_quantity(id);
            if available >= needed {
                matched += 1.0;
            } else if available > 0 {
                matched += f64::from(available) / f64::from(needed);
            }
        }

        Ok(matched / required.len() as f64)
    }
}
