//! Grid carbon intensity reference data
//!
//! A curated, ordered table of representative average grid carbon
//! intensities by hosting location. The table is fixed at construction and
//! read-only afterwards; it is safe to share across any number of
//! concurrent readers.
//!
//! Intensity figures are approximate 2023/2024 annual averages drawn from
//! public sources (Electricity Maps, Ember, national grid reports). Real
//! intensities vary significantly with time of day and grid load; use
//! current, local data for anything beyond comparative estimation.

use serde::{Deserialize, Serialize};

use crate::core_types::GramsCo2ePerKwh;
use crate::error::FootprintError;

/// One hosting location and the average carbon intensity of its grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationEntry {
    /// Unique location name, e.g. "France (Nuclear)"
    pub name: String,
    /// Average grid carbon intensity in grams CO2e per kWh
    pub carbon_intensity: GramsCo2ePerKwh,
}

/// Ordered, immutable mapping from location name to grid carbon intensity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRegistry {
    entries: Vec<LocationEntry>,
}

/// Representative average grid intensities (gCO2e/kWh), lowest-carbon
/// hydro grids through coal-dominant grids, with a global-average-like
/// mixed entry in between. Order is the presentation order.
const REFERENCE_GRIDS: [(&str, f64); 15] = [
    ("Iceland (Hydro/Geo)", 10.0),
    ("Norway (Hydro)", 15.0),
    ("Sweden (Hydro/Nuclear/Wind)", 25.0),
    ("France (Nuclear)", 55.0),
    ("Ontario, Canada (Nuclear/Hydro)", 30.0),
    ("Quebec, Canada (Hydro)", 5.0),
    ("UK (Mixed, increasing Renewables)", 210.0),
    ("California, USA (Mixed, high Solar)", 230.0),
    ("Germany (Mixed, Coal phase-out)", 380.0),
    ("US Average (Mixed)", 390.0),
    ("Texas, USA (Mixed, high Wind/Gas)", 400.0),
    ("China Average (Mixed, high Coal)", 540.0),
    ("India (Mixed, high Coal)", 650.0),
    ("Australia (Mixed, high Coal/Gas)", 600.0),
    ("Poland (Coal Dominant)", 750.0),
];

impl LocationRegistry {
    /// Build the registry from the built-in reference grid table
    #[must_use]
    pub fn with_reference_grids() -> Self {
        let entries = REFERENCE_GRIDS
            .iter()
            .map(|&(name, intensity)| LocationEntry {
                name: name.to_string(),
                carbon_intensity: GramsCo2ePerKwh::new(intensity),
            })
            .collect();
        Self { entries }
    }

    /// Build a registry from a caller-supplied ordered entry list
    #[must_use]
    pub fn from_entries(entries: Vec<LocationEntry>) -> Self {
        Self { entries }
    }

    /// Look up the carbon intensity for a location by name.
    ///
    /// # Errors
    /// Returns [`FootprintError::UnknownLocation`] if `name` is not in the
    /// registry.
    pub fn lookup(&self, name: &str) -> Result<GramsCo2ePerKwh, FootprintError> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.carbon_intensity)
            .ok_or_else(|| FootprintError::UnknownLocation(name.to_string()))
    }

    /// All entries in registry order (used by the comparison sweep and for
    /// populating a selection control)
    #[must_use]
    pub fn entries(&self) -> &[LocationEntry] {
        &self.entries
    }

    /// Number of locations in the registry
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the registry holds no locations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LocationRegistry {
    fn default() -> Self {
        Self::with_reference_grids()
    }
}

/// The carbon intensity to use for one estimate: either a registry location
/// or an explicit manual override (the "Custom" entry of the original UI)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CarbonIntensitySelection {
    /// Use the registry intensity for the named location
    Location(String),
    /// Use an explicit caller-supplied intensity, bypassing the registry
    Custom(GramsCo2ePerKwh),
}

impl CarbonIntensitySelection {
    /// Resolve the selection to a concrete carbon intensity.
    ///
    /// # Errors
    /// Returns [`FootprintError::UnknownLocation`] for a name missing from
    /// the registry, or [`FootprintError::InvalidParameter`] for a negative
    /// or non-finite custom intensity.
    pub fn resolve(&self, registry: &LocationRegistry) -> Result<GramsCo2ePerKwh, FootprintError> {
        match self {
            CarbonIntensitySelection::Location(name) => registry.lookup(name),
            CarbonIntensitySelection::Custom(intensity) => {
                if !intensity.is_finite() || **intensity < 0.0 {
                    return Err(FootprintError::invalid(
                        "carbon_intensity",
                        format!("must be non-negative gCO2e/kWh, got {}", **intensity),
                    ));
                }
                Ok(*intensity)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_table_shape() {
        let registry = LocationRegistry::default();
        assert_eq!(registry.len(), 15);
        assert!(!registry.is_empty());

        // The table must span low-carbon, mixed, and coal-heavy grids
        let min = registry
            .entries()
            .iter()
            .map(|e| e.carbon_intensity)
            .min()
            .unwrap();
        let max = registry
            .entries()
            .iter()
            .map(|e| e.carbon_intensity)
            .max()
            .unwrap();
        assert_eq!(min, GramsCo2ePerKwh::new(5.0), "hydro-heavy Quebec grid");
        assert_eq!(max, GramsCo2ePerKwh::new(750.0), "coal-dominant Polish grid");
    }

    #[test]
    fn test_lookup_hit() {
        let registry = LocationRegistry::default();
        let intensity = registry.lookup("France (Nuclear)").unwrap();
        assert_eq!(intensity, GramsCo2ePerKwh::new(55.0));
    }

    #[test]
    fn test_lookup_miss() {
        let registry = LocationRegistry::default();
        let err = registry.lookup("Atlantis").unwrap_err();
        assert_eq!(err, FootprintError::UnknownLocation("Atlantis".to_string()));
    }

    #[test]
    fn test_iteration_order_is_table_order() {
        let registry = LocationRegistry::default();
        assert_eq!(registry.entries()[0].name, "Iceland (Hydro/Geo)");
        assert_eq!(registry.entries()[14].name, "Poland (Coal Dominant)");
    }

    #[test]
    fn test_selection_resolves_location() {
        let registry = LocationRegistry::default();
        let selection = CarbonIntensitySelection::Location("Norway (Hydro)".to_string());
        assert_eq!(
            selection.resolve(&registry).unwrap(),
            GramsCo2ePerKwh::new(15.0)
        );
    }

    #[test]
    fn test_selection_custom_overrides_registry() {
        let registry = LocationRegistry::default();
        let selection = CarbonIntensitySelection::Custom(GramsCo2ePerKwh::new(123.0));
        assert_eq!(
            selection.resolve(&registry).unwrap(),
            GramsCo2ePerKwh::new(123.0)
        );
    }

    #[test]
    fn test_selection_negative_custom_rejected() {
        let registry = LocationRegistry::default();
        let selection = CarbonIntensitySelection::Custom(GramsCo2ePerKwh::new(-1.0));
        let err = selection.resolve(&registry).unwrap_err();
        assert!(matches!(
            err,
            FootprintError::InvalidParameter { field: "carbon_intensity", .. }
        ));
    }
}
