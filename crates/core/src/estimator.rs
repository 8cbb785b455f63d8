//! Core footprint estimation formulas and the cross-location sweep
//!
//! The estimate is a pure function of its inputs: no I/O, no hidden state,
//! deterministic. All validation runs before any arithmetic; an estimate is
//! never computed from invalid values and no partial result is produced.
//!
//! # Model
//! ```text
//! u          = clamp(utilisation, 0, 100) / 100
//! P_avg      = P_idle + u * (P_peak - P_idle)          [W per node]
//! E_it       = P_avg * nodes * duration / 1000         [kWh]
//! E_total    = E_it * PUE                              [kWh]
//! M_co2e     = E_total * intensity / 1000              [kg]
//! ```
//!
//! The linear idle-to-peak interpolation is a simplifying modeling choice,
//! not physics: real hardware power curves are nonlinear, and real draw
//! fluctuates around the average during a job.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core_types::{GramsCo2ePerKwh, KilogramsCo2e, KilowattHours, Percent, Watts};
use crate::equivalency::Equivalencies;
use crate::error::FootprintError;
use crate::params::{FacilityParameters, HardwareProfile, JobParameters};
use crate::registry::LocationRegistry;

/// Derived, immutable result of one estimate. Always recomputed from
/// scratch; inputs are few and cheap enough that no caching is warranted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootprintEstimate {
    /// Interpolated average power draw of one node
    pub average_power_per_node: Watts,
    /// Energy drawn by the IT equipment alone (before facility overhead)
    pub it_energy: KilowattHours,
    /// Total facility energy including overhead (IT energy times PUE)
    pub total_energy: KilowattHours,
    /// Total CO2e emitted generating the facility energy on the given grid
    pub total_emissions: KilogramsCo2e,
    /// Human-relatable comparisons for the emissions figure
    pub equivalencies: Equivalencies,
}

/// Per-node average power by linear interpolation between idle and peak.
///
/// Simplifying assumption: power scales linearly with utilisation between
/// the idle and peak draw. Utilisation is clamped to [0, 100] first.
#[must_use]
pub fn average_node_power(hardware: &HardwareProfile, utilisation: Percent) -> Watts {
    let u = utilisation.clamped().to_fraction();
    Watts::new(*hardware.idle_power + u * (*hardware.peak_power - *hardware.idle_power))
}

/// Estimate energy consumption and carbon footprint for one job.
///
/// # Errors
/// Returns [`FootprintError::InvalidParameter`] naming the offending field
/// if any input invariant is violated (`node_count == 0`,
/// `duration <= 0`, `peak_power < idle_power`, `pue < 1.0`, negative
/// carbon intensity). No arithmetic runs on invalid inputs.
pub fn estimate(
    job: &JobParameters,
    hardware: &HardwareProfile,
    facility: &FacilityParameters,
    carbon_intensity: GramsCo2ePerKwh,
) -> Result<FootprintEstimate, FootprintError> {
    // 1. Validate every invariant before touching the numbers
    job.validate()?;
    hardware.validate()?;
    facility.validate()?;
    if !carbon_intensity.is_finite() || *carbon_intensity < 0.0 {
        return Err(FootprintError::invalid(
            "carbon_intensity",
            format!("must be non-negative gCO2e/kWh, got {}", *carbon_intensity),
        ));
    }

    // 2-3. Clamp utilisation and interpolate per-node power
    let average_power = average_node_power(hardware, job.average_utilisation);

    // 4. IT-equipment energy over the whole job (W -> kW conversion)
    let it_energy = KilowattHours::new(
        *average_power * f64::from(job.node_count) * *job.duration / Watts::PER_KILOWATT,
    );

    // 5. Facility overhead (cooling, power distribution, lighting)
    let total_energy = it_energy * *facility.pue;

    // 6. Grid emissions (g -> kg conversion)
    let total_emissions = carbon_intensity.emissions_for(total_energy);

    debug!(
        nodes = job.node_count,
        duration_h = *job.duration,
        avg_power_w = *average_power,
        it_energy_kwh = *it_energy,
        total_energy_kwh = *total_energy,
        emissions_kg = *total_emissions,
        "footprint estimate computed"
    );

    Ok(FootprintEstimate {
        average_power_per_node: average_power,
        it_energy,
        total_energy,
        total_emissions,
        equivalencies: Equivalencies::from_emissions(total_emissions),
    })
}

/// One row of the cross-location comparison table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationComparison {
    /// Location name as it appears in the registry
    pub name: String,
    /// Grid carbon intensity used for this row
    pub carbon_intensity: GramsCo2ePerKwh,
    /// Emissions for the identical job/hardware/facility on this grid
    pub total_emissions: KilogramsCo2e,
}

/// Estimate the same job on every grid in the registry.
///
/// All non-location inputs are held fixed; each registry entry yields
/// exactly one row, in registry order. Rows are independent, so the sweep
/// runs in parallel; the output order is still the registry order. No
/// sorting by value is applied (a presentation concern).
///
/// # Errors
/// Returns [`FootprintError::InvalidParameter`] if the fixed inputs fail
/// validation; the registry itself cannot produce errors here since its
/// intensities are non-negative by construction.
pub fn compare_locations(
    registry: &LocationRegistry,
    job: &JobParameters,
    hardware: &HardwareProfile,
    facility: &FacilityParameters,
) -> Result<Vec<LocationComparison>, FootprintError> {
    registry
        .entries()
        .par_iter()
        .map(|entry| {
            estimate(job, hardware, facility, entry.carbon_intensity).map(|result| {
                LocationComparison {
                    name: entry.name.clone(),
                    carbon_intensity: entry.carbon_intensity,
                    total_emissions: result.total_emissions,
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{Hours, Percent, Pue};

    fn reference_inputs() -> (JobParameters, HardwareProfile, FacilityParameters) {
        (
            JobParameters::new(10, Hours::new(24.0), Percent::new(50.0)),
            HardwareProfile::new(Watts::new(100.0), Watts::new(300.0)),
            FacilityParameters::new(Pue::new(1.5)),
        )
    }

    #[test]
    fn test_reference_scenario() {
        let (job, hw, facility) = reference_inputs();
        let est = estimate(&job, &hw, &facility, GramsCo2ePerKwh::new(400.0)).unwrap();

        assert_eq!(est.average_power_per_node, Watts::new(200.0));
        assert_eq!(est.it_energy, KilowattHours::new(48.0));
        assert_eq!(est.total_energy, KilowattHours::new(72.0));
        assert_eq!(est.total_emissions, KilogramsCo2e::new(28.8));
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let (job, hw, facility) = reference_inputs();
        let a = estimate(&job, &hw, &facility, GramsCo2ePerKwh::new(400.0)).unwrap();
        let b = estimate(&job, &hw, &facility, GramsCo2ePerKwh::new(400.0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_utilisation_clamped_above_range() {
        let hw = HardwareProfile::new(Watts::new(100.0), Watts::new(300.0));
        assert_eq!(
            average_node_power(&hw, Percent::new(250.0)),
            Watts::new(300.0)
        );
        assert_eq!(
            average_node_power(&hw, Percent::new(-10.0)),
            Watts::new(100.0)
        );
    }

    #[test]
    fn test_invalid_inputs_rejected_before_arithmetic() {
        let (job, hw, facility) = reference_inputs();

        let bad_hw = HardwareProfile::new(Watts::new(100.0), Watts::new(50.0));
        assert!(estimate(&job, &bad_hw, &facility, GramsCo2ePerKwh::new(400.0)).is_err());

        let bad_job = JobParameters::new(0, Hours::new(24.0), Percent::new(50.0));
        assert!(estimate(&bad_job, &hw, &facility, GramsCo2ePerKwh::new(400.0)).is_err());

        let bad_facility = FacilityParameters::new(Pue::new(0.5));
        assert!(estimate(&job, &hw, &bad_facility, GramsCo2ePerKwh::new(400.0)).is_err());

        assert!(estimate(&job, &hw, &facility, GramsCo2ePerKwh::new(-400.0)).is_err());
    }

    #[test]
    fn test_sweep_propagates_invalid_inputs() {
        let registry = LocationRegistry::default();
        let (_, hw, facility) = reference_inputs();
        let bad_job = JobParameters::new(0, Hours::new(24.0), Percent::new(50.0));
        assert!(compare_locations(&registry, &bad_job, &hw, &facility).is_err());
    }
}
