//! Allocation policy configuration.
//!
//! Every tunable constant of the scoring function, the acceptance rule and
//! the priority ordering lives here, so policy changes stay in one place.

use serde::{Deserialize, Serialize};

use crate::error::AllocationError;

/// Policy constants for scoring, ranking and reservation.
///
/// # Examples
///
/// ```
/// use u_timetable::AllocationConfig;
///
/// let config = AllocationConfig::default()
///     .with_weights(0.4, 0.6)
///     .with_acceptance_threshold(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Weight of the capacity sub-score in the final score.
    pub capacity_weight: f64,

    /// Weight of the equipment sub-score in the final score.
    pub equipment_weight: f64,

    /// Capacity sub-score given to a resource smaller than requested.
    ///
    /// Undersized resources are a last resort, never excluded outright.
    pub undersized_penalty: f64,

    /// Added to the `needed / available` capacity ratio before capping at 1.
    pub fit_bonus: f64,

    /// A reservation is committed only when the best score is strictly
    /// greater than this value.
    pub acceptance_threshold: f64,

    /// Priority points per distinct required equipment kind.
    pub equipment_priority_weight: u64,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            capacity_weight: 0.3,
            equipment_weight: 0.7,
            undersized_penalty: 0.2,
            fit_bonus: 0.2,
            acceptance_threshold: 0.6,
            equipment_priority_weight: 10,
        }
    }
}

impl AllocationConfig {
    /// Sets both score weights. They must sum to 1.
    pub fn with_weights(mut self, capacity: f64, equipment: f64) -> Self {
        self.capacity_weight = capacity;
        self.equipment_weight = equipment;
        self
    }

    pub fn with_undersized_penalty(mut self, penalty: f64) -> Self {
        self.undersized_penalty = penalty;
        self
    }

    pub fn with_fit_bonus(mut self, bonus: f64) -> Self {
        self.fit_bonus = bonus;
        self
    }

    pub fn with_acceptance_threshold(mut self, threshold: f64) -> Self {
        self.acceptance_threshold = threshold;
        self
    }

    pub fn with_equipment_priority_weight(mut self, weight: u64) -> Self {
        self.equipment_priority_weight = weight;
        self
    }

    /// Validates the configuration.
    ///
    /// Scores stay within `[0, 1]` only when the weights are non-negative
    /// and sum to 1 and the penalty and bonus are themselves in `[0, 1]`.
    pub fn validate(&self) -> Result<(), AllocationError> {
        let unit = |name: &str, v: f64| {
            if v.is_finite() && (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(AllocationError::InvalidConfig(format!(
                    "{name} must be in [0, 1], got {v}"
                )))
            }
        };

        unit("capacity_weight", self.capacity_weight)?;
        unit("equipment_weight", self.equipment_weight)?;
        let sum = self.capacity_weight + self.equipment_weight;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(AllocationError::InvalidConfig(format!(
                "score weights must sum to 1, got {sum}"
            )));
        }
        unit("undersized_penalty", self.undersized_penalty)?;
        unit("fit_bonus", self.fit_bonus)?;
        unit("acceptance_threshold", self.acceptance_threshold)?;
        Ok(())
    }
}
