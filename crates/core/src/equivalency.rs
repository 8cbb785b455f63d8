//! Human-relatable emission equivalencies
//!
//! Converts an emissions figure into more intuitive comparable units using
//! fixed published-average conversion factors (EPA greenhouse-gas
//! equivalency approximations). The factors are rough context-setting
//! estimates, documented as approximate, and swappable without affecting
//! the core energy/emissions math.

use serde::{Deserialize, Serialize};

use crate::core_types::{Kilometers, KilogramsCo2e};

/// Approximate CO2e emitted per kilometer driven by an average passenger car
pub const KG_CO2E_PER_KM: f64 = 0.175;

/// Approximate number of mature trees needed to sequester one tonne of CO2e
/// in a year. Tree sequestration is highly variable (species, age, climate);
/// one mature tree absorbs roughly 20-25 kg CO2 per year.
pub const TREES_PER_TONNE_CO2E_PER_YEAR: f64 = 45.0;

/// Intuitive comparisons for an emissions figure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equivalencies {
    /// Distance an average passenger car would drive to emit the same CO2e
    pub distance_driven: Kilometers,
    /// Number of mature trees that would sequester this CO2e in one year
    pub tree_years: f64,
}

impl Equivalencies {
    /// Derive all equivalencies from a total emissions figure
    #[must_use]
    pub fn from_emissions(emissions: KilogramsCo2e) -> Self {
        Self {
            distance_driven: Kilometers::new(*emissions / KG_CO2E_PER_KM),
            tree_years: emissions.to_tonnes() * TREES_PER_TONNE_CO2E_PER_YEAR,
        }
    }
}
