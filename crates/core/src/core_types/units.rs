//! Semantic unit types for type-safe physical quantity handling
//!
//! This module provides newtype wrappers for the physical quantities of the
//! estimation model to prevent accidental mixing of incompatible units
//! (e.g., watts with kilowatt-hours, or grams-per-kWh with kilograms).
//!
//! # Design Philosophy
//! - All types wrap f64: every quantity feeds multiplicative chains where the
//!   reference scenarios expect exact decimal results
//! - Implements common traits (Add, Sub, Mul, Div, Ord, Display, etc.)
//! - Provides explicit conversion methods between related scales
//! - Serde support for serialization
//! - Total ordering via Ord trait (NaN handled as greater than all values)
//!
//! # Usage
//! ```
//! use carbon_sim_core::core_types::units::{Percent, Watts};
//!
//! let idle = Watts::new(150.0);
//! let peak = Watts::new(600.0);
//! assert!(idle < peak);
//!
//! let util = Percent::new(130.0).clamped();
//! assert_eq!(util, Percent::new(100.0));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Deref, DerefMut, Div, Mul, Sub, SubAssign};

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// POWER TYPES
// ============================================================================

/// Electrical power in watts
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Watts(f64);

impl Eq for Watts {}

impl PartialOrd for Watts {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Watts {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Watts {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Watts {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Watts {
    /// Watts per kilowatt
    pub const PER_KILOWATT: f64 = 1000.0;

    /// Create a new power value in watts
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Watts(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to kilowatts
    #[inline]
    #[must_use]
    pub fn to_kilowatts(self) -> f64 {
        self.0 / Self::PER_KILOWATT
    }
}

impl From<f64> for Watts {
    fn from(v: f64) -> Self {
        Watts(v)
    }
}

impl From<Watts> for f64 {
    fn from(w: Watts) -> f64 {
        w.0
    }
}

impl Add for Watts {
    type Output = Watts;
    fn add(self, rhs: Watts) -> Watts {
        Watts(self.0 + rhs.0)
    }
}

impl Sub for Watts {
    type Output = Watts;
    fn sub(self, rhs: Watts) -> Watts {
        Watts(self.0 - rhs.0)
    }
}

impl Mul<f64> for Watts {
    type Output = Watts;
    fn mul(self, rhs: f64) -> Watts {
        Watts(self.0 * rhs)
    }
}

impl fmt::Display for Watts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} W", self.0)
    }
}

// ============================================================================
// ENERGY TYPES
// ============================================================================

/// Electrical energy in kilowatt-hours
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilowattHours(f64);

impl Eq for KilowattHours {}

impl PartialOrd for KilowattHours {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KilowattHours {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for KilowattHours {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for KilowattHours {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl KilowattHours {
    /// Create a new energy value in kilowatt-hours
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KilowattHours(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to megawatt-hours
    #[inline]
    #[must_use]
    pub fn to_megawatt_hours(self) -> f64 {
        self.0 / 1000.0
    }
}

impl From<f64> for KilowattHours {
    fn from(v: f64) -> Self {
        KilowattHours(v)
    }
}

impl From<KilowattHours> for f64 {
    fn from(e: KilowattHours) -> f64 {
        e.0
    }
}

impl Add for KilowattHours {
    type Output = KilowattHours;
    fn add(self, rhs: KilowattHours) -> KilowattHours {
        KilowattHours(self.0 + rhs.0)
    }
}

impl AddAssign for KilowattHours {
    fn add_assign(&mut self, rhs: KilowattHours) {
        self.0 += rhs.0;
    }
}

impl Mul<f64> for KilowattHours {
    type Output = KilowattHours;
    fn mul(self, rhs: f64) -> KilowattHours {
        KilowattHours(self.0 * rhs)
    }
}

impl fmt::Display for KilowattHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} kWh", self.0)
    }
}

// ============================================================================
// EMISSION TYPES
// ============================================================================

/// Mass of CO2-equivalent emissions in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilogramsCo2e(f64);

impl Eq for KilogramsCo2e {}

impl PartialOrd for KilogramsCo2e {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KilogramsCo2e {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for KilogramsCo2e {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for KilogramsCo2e {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl KilogramsCo2e {
    /// Kilograms per metric tonne
    pub const PER_TONNE: f64 = 1000.0;

    /// Create a new emissions mass in kilograms CO2e
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KilogramsCo2e(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to metric tonnes of CO2e
    #[inline]
    #[must_use]
    pub fn to_tonnes(self) -> f64 {
        self.0 / Self::PER_TONNE
    }
}

impl From<f64> for KilogramsCo2e {
    fn from(v: f64) -> Self {
        KilogramsCo2e(v)
    }
}

impl From<KilogramsCo2e> for f64 {
    fn from(m: KilogramsCo2e) -> f64 {
        m.0
    }
}

impl Add for KilogramsCo2e {
    type Output = KilogramsCo2e;
    fn add(self, rhs: KilogramsCo2e) -> KilogramsCo2e {
        KilogramsCo2e(self.0 + rhs.0)
    }
}

impl Sub for KilogramsCo2e {
    type Output = KilogramsCo2e;
    fn sub(self, rhs: KilogramsCo2e) -> KilogramsCo2e {
        KilogramsCo2e(self.0 - rhs.0)
    }
}

impl fmt::Display for KilogramsCo2e {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kg CO2e", self.0)
    }
}

/// Grid carbon intensity in grams CO2-equivalent per kilowatt-hour
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct GramsCo2ePerKwh(f64);

impl Eq for GramsCo2ePerKwh {}

impl PartialOrd for GramsCo2ePerKwh {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GramsCo2ePerKwh {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for GramsCo2ePerKwh {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for GramsCo2ePerKwh {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl GramsCo2ePerKwh {
    /// Grams per kilogram (for converting grid emissions to kg CO2e)
    pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

    /// Create a new carbon intensity in grams CO2e per kWh
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        GramsCo2ePerKwh(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Emissions mass for a given amount of energy drawn from this grid
    #[inline]
    #[must_use]
    pub fn emissions_for(self, energy: KilowattHours) -> KilogramsCo2e {
        KilogramsCo2e(*energy * self.0 / Self::GRAMS_PER_KILOGRAM)
    }
}

impl From<f64> for GramsCo2ePerKwh {
    fn from(v: f64) -> Self {
        GramsCo2ePerKwh(v)
    }
}

impl From<GramsCo2ePerKwh> for f64 {
    fn from(i: GramsCo2ePerKwh) -> f64 {
        i.0
    }
}

impl fmt::Display for GramsCo2ePerKwh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} gCO2e/kWh", self.0)
    }
}

// ============================================================================
// TIME TYPES
// ============================================================================

/// Duration in hours
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Hours(f64);

impl Eq for Hours {}

impl PartialOrd for Hours {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hours {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Hours {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Hours {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Hours {
    /// Hours per day
    pub const PER_DAY: f64 = 24.0;

    /// Create a new duration in hours
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Hours(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to days
    #[inline]
    #[must_use]
    pub fn to_days(self) -> f64 {
        self.0 / Self::PER_DAY
    }
}

impl From<f64> for Hours {
    fn from(v: f64) -> Self {
        Hours(v)
    }
}

impl From<Hours> for f64 {
    fn from(h: Hours) -> f64 {
        h.0
    }
}

impl Add for Hours {
    type Output = Hours;
    fn add(self, rhs: Hours) -> Hours {
        Hours(self.0 + rhs.0)
    }
}

impl Sub for Hours {
    type Output = Hours;
    fn sub(self, rhs: Hours) -> Hours {
        Hours(self.0 - rhs.0)
    }
}

impl Mul<f64> for Hours {
    type Output = Hours;
    fn mul(self, rhs: f64) -> Hours {
        Hours(self.0 * rhs)
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} h", self.0)
    }
}

// ============================================================================
// RATIO TYPES
// ============================================================================

/// Percentage (0-100 in normal use)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Percent(f64);

impl Eq for Percent {}

impl PartialOrd for Percent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Percent {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Percent {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Percent {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Percent {
    /// Zero percent
    pub const ZERO: Percent = Percent(0.0);

    /// One hundred percent
    pub const FULL: Percent = Percent(100.0);

    /// Create a new percentage
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Percent(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Clamp to the valid [0, 100] range
    #[inline]
    #[must_use]
    pub fn clamped(self) -> Percent {
        Percent(self.0.clamp(0.0, 100.0))
    }

    /// Convert to a fraction (0-1)
    #[inline]
    #[must_use]
    pub fn to_fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl From<f64> for Percent {
    fn from(v: f64) -> Self {
        Percent(v)
    }
}

impl From<Percent> for f64 {
    fn from(p: Percent) -> f64 {
        p.0
    }
}

impl Add for Percent {
    type Output = Percent;
    fn add(self, rhs: Percent) -> Percent {
        Percent(self.0 + rhs.0)
    }
}

impl Sub for Percent {
    type Output = Percent;
    fn sub(self, rhs: Percent) -> Percent {
        Percent(self.0 - rhs.0)
    }
}

impl SubAssign for Percent {
    fn sub_assign(&mut self, rhs: Percent) {
        self.0 -= rhs.0;
    }
}

impl Mul<f64> for Percent {
    type Output = Percent;
    fn mul(self, rhs: f64) -> Percent {
        Percent(self.0 * rhs)
    }
}

impl Div<f64> for Percent {
    type Output = Percent;
    fn div(self, rhs: f64) -> Percent {
        Percent(self.0 / rhs)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

/// Power Usage Effectiveness: ratio of total facility energy draw to
/// IT-equipment energy draw. 1.0 means no facility overhead; real data
/// centres typically sit between 1.1 and 2.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Pue(f64);

impl Eq for Pue {}

impl PartialOrd for Pue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pue {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Pue {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Pue {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Pue {
    /// Physical lower bound: total facility draw cannot be below IT draw
    pub const IDEAL: Pue = Pue(1.0);

    /// Create a new PUE value
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Pue(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Pue {
    fn default() -> Self {
        Pue::IDEAL
    }
}

impl From<f64> for Pue {
    fn from(v: f64) -> Self {
        Pue(v)
    }
}

impl From<Pue> for f64 {
    fn from(p: Pue) -> f64 {
        p.0
    }
}

impl fmt::Display for Pue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PUE {:.2}", self.0)
    }
}

// ============================================================================
// DISTANCE TYPES
// ============================================================================

/// Distance in kilometers
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kilometers(f64);

impl Eq for Kilometers {}

impl PartialOrd for Kilometers {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kilometers {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Kilometers {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Kilometers {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Kilometers {
    /// Miles per kilometer
    pub const MILES_PER_KM: f64 = 0.621371;

    /// Create a new distance in kilometers
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Kilometers(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to miles
    #[inline]
    #[must_use]
    pub fn to_miles(self) -> f64 {
        self.0 * Self::MILES_PER_KM
    }
}

impl From<f64> for Kilometers {
    fn from(v: f64) -> Self {
        Kilometers(v)
    }
}

impl From<Kilometers> for f64 {
    fn from(d: Kilometers) -> f64 {
        d.0
    }
}

impl Add for Kilometers {
    type Output = Kilometers;
    fn add(self, rhs: Kilometers) -> Kilometers {
        Kilometers(self.0 + rhs.0)
    }
}

impl Mul<f64> for Kilometers {
    type Output = Kilometers;
    fn mul(self, rhs: f64) -> Kilometers {
        Kilometers(self.0 * rhs)
    }
}

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km", self.0)
    }
}
