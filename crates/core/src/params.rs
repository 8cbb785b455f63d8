//! Job, hardware, and facility parameter groups
//!
//! These structs carry the validated external inputs for one estimate. They
//! are plain immutable value types; `validate()` checks every stated
//! invariant and the estimator refuses to compute until all three groups
//! pass. The utilisation percentage is the one exception: out-of-range
//! values are clamped to [0, 100] rather than rejected.

use serde::{Deserialize, Serialize};

use crate::core_types::{Hours, Percent, Pue, Watts};
use crate::error::FootprintError;

/// Workload shape: how many nodes, for how long, at what average load
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JobParameters {
    /// Number of compute nodes used (>= 1)
    pub node_count: u32,
    /// Wall-clock job duration (> 0)
    pub duration: Hours,
    /// Average CPU/GPU load during the job; drives power draw between
    /// idle and peak. Clamped to [0, 100] before use.
    pub average_utilisation: Percent,
}

impl JobParameters {
    /// Create a new job parameter group
    #[must_use]
    pub const fn new(node_count: u32, duration: Hours, average_utilisation: Percent) -> Self {
        Self {
            node_count,
            duration,
            average_utilisation,
        }
    }

    /// Check the job invariants: `node_count >= 1`, `duration > 0`.
    ///
    /// # Errors
    /// Returns [`FootprintError::InvalidParameter`] naming the offending
    /// field when an invariant is violated.
    pub fn validate(&self) -> Result<(), FootprintError> {
        if self.node_count == 0 {
            return Err(FootprintError::invalid(
                "node_count",
                "must be at least 1",
            ));
        }
        if !self.duration.is_finite() || *self.duration <= 0.0 {
            return Err(FootprintError::invalid(
                "duration",
                format!("must be a positive number of hours, got {}", *self.duration),
            ));
        }
        if !self.average_utilisation.is_finite() {
            return Err(FootprintError::invalid(
                "average_utilisation",
                "must be a finite percentage",
            ));
        }
        Ok(())
    }
}

/// Per-node power envelope of the (homogeneous) cluster hardware
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HardwareProfile {
    /// Power consumed by one node when doing no work
    pub idle_power: Watts,
    /// Maximum power consumed by one node under full load
    pub peak_power: Watts,
}

impl HardwareProfile {
    /// Create a new hardware power profile
    #[must_use]
    pub const fn new(idle_power: Watts, peak_power: Watts) -> Self {
        Self {
            idle_power,
            peak_power,
        }
    }

    /// Check the hardware invariants: both powers positive and finite,
    /// `peak_power >= idle_power`.
    ///
    /// # Errors
    /// Returns [`FootprintError::InvalidParameter`] naming the offending
    /// field when an invariant is violated.
    pub fn validate(&self) -> Result<(), FootprintError> {
        if !self.idle_power.is_finite() || *self.idle_power <= 0.0 {
            return Err(FootprintError::invalid(
                "idle_power",
                format!("must be positive watts, got {}", *self.idle_power),
            ));
        }
        if !self.peak_power.is_finite() || *self.peak_power <= 0.0 {
            return Err(FootprintError::invalid(
                "peak_power",
                format!("must be positive watts, got {}", *self.peak_power),
            ));
        }
        if self.peak_power < self.idle_power {
            return Err(FootprintError::invalid(
                "peak_power",
                format!(
                    "must be >= idle_power ({} < {})",
                    self.peak_power, self.idle_power
                ),
            ));
        }
        Ok(())
    }
}

/// Data-centre efficiency parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FacilityParameters {
    /// Power Usage Effectiveness (>= 1.0; a PUE below 1 is physically
    /// meaningless and is rejected)
    pub pue: Pue,
}

impl FacilityParameters {
    /// Create a new facility parameter group
    #[must_use]
    pub const fn new(pue: Pue) -> Self {
        Self { pue }
    }

    /// Check the facility invariant: `pue >= 1.0` and finite.
    ///
    /// # Errors
    /// Returns [`FootprintError::InvalidParameter`] when the PUE is below
    /// 1.0 or not finite.
    pub fn validate(&self) -> Result<(), FootprintError> {
        if !self.pue.is_finite() || self.pue < Pue::IDEAL {
            return Err(FootprintError::invalid(
                "pue",
                format!("must be >= 1.0, got {}", *self.pue),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: &FootprintError) -> &'static str {
        match err {
            FootprintError::InvalidParameter { field, .. } => field,
            FootprintError::UnknownLocation(_) => panic!("expected InvalidParameter"),
        }
    }

    #[test]
    fn test_valid_job_passes() {
        let job = JobParameters::new(100, Hours::new(24.0), Percent::new(75.0));
        assert!(job.validate().is_ok());
    }

    #[test]
    fn test_zero_nodes_rejected() {
        let job = JobParameters::new(0, Hours::new(24.0), Percent::new(75.0));
        let err = job.validate().unwrap_err();
        assert_eq!(field_of(&err), "node_count");
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        for bad in [0.0, -1.0, f64::NAN] {
            let job = JobParameters::new(1, Hours::new(bad), Percent::new(50.0));
            let err = job.validate().unwrap_err();
            assert_eq!(field_of(&err), "duration", "duration {bad} should be rejected");
        }
    }

    #[test]
    fn test_out_of_range_utilisation_is_not_an_error() {
        // Utilisation is clamped by the estimator, not rejected here
        let job = JobParameters::new(1, Hours::new(1.0), Percent::new(150.0));
        assert!(job.validate().is_ok());
    }

    #[test]
    fn test_peak_below_idle_rejected() {
        let hw = HardwareProfile::new(Watts::new(100.0), Watts::new(50.0));
        let err = hw.validate().unwrap_err();
        assert_eq!(field_of(&err), "peak_power");
    }

    #[test]
    fn test_non_positive_powers_rejected() {
        let hw = HardwareProfile::new(Watts::new(0.0), Watts::new(600.0));
        assert_eq!(field_of(&hw.validate().unwrap_err()), "idle_power");

        let hw = HardwareProfile::new(Watts::new(150.0), Watts::new(-600.0));
        assert_eq!(field_of(&hw.validate().unwrap_err()), "peak_power");
    }

    #[test]
    fn test_pue_below_one_rejected() {
        let facility = FacilityParameters::new(Pue::new(0.5));
        assert_eq!(field_of(&facility.validate().unwrap_err()), "pue");
    }

    #[test]
    fn test_ideal_pue_accepted() {
        let facility = FacilityParameters::new(Pue::IDEAL);
        assert!(facility.validate().is_ok());
    }
}
