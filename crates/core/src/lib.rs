//! Carbon Footprint Estimation Core Library
//!
//! Estimates the energy consumption and carbon footprint of a compute job run
//! on a cluster of homogeneous nodes, from job sizing, per-node power envelope,
//! data-centre efficiency (PUE), and the carbon intensity of the hosting grid.
//!
//! The engine is a set of pure, synchronous computations:
//! - linear idle-to-peak power interpolation by average utilisation
//! - energy accounting with facility overhead (PUE)
//! - grid-intensity conversion to CO2e emissions
//! - human-relatable equivalencies (driving distance, tree-years)
//! - a cross-location comparison sweep over a fixed grid-intensity registry
//!
//! This is a simplified model for educational estimation, not a certified
//! carbon-accounting tool: it assumes constant average power draw, annual
//! average grid intensity, constant PUE, homogeneous nodes, and excludes
//! embodied carbon.

// Core types and utilities
pub mod core_types;

pub mod equivalency;
pub mod error;
pub mod estimator;
pub mod params;
pub mod registry;

// Re-export core types
pub use core_types::{
    GramsCo2ePerKwh, Hours, Kilometers, KilogramsCo2e, KilowattHours, Percent, Pue, Watts,
};

pub use equivalency::Equivalencies;
pub use error::FootprintError;
pub use estimator::{compare_locations, estimate, FootprintEstimate, LocationComparison};
pub use params::{FacilityParameters, HardwareProfile, JobParameters};
pub use registry::{CarbonIntensitySelection, LocationEntry, LocationRegistry};
