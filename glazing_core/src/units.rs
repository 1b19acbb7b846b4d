//! # Unit Types
//!
//! Type-safe wrappers for the units that appear in silicone glazing design.
//! They are plain `f64` newtypes so JSON stays clean (just numbers).
//!
//! ## Working Units
//!
//! The calculation formulas work in the mixed metric units used by facade
//! engineers in Latin America and Europe:
//! - Panel geometry: meters (m); glass thickness and joint sizes: millimeters (mm)
//! - Wind pressure: kilogram-force per square meter (kgf/m²)
//! - Silicone allowables: entered in psi (as published by sealant makers),
//!   evaluated in kgf/cm²
//! - Elastic modulus: megapascals (MPa), evaluated in kgf/cm²
//!
//! ## Example
//!
//! ```rust
//! use glazing_core::units::{KgfPerCm2, Millimeters, Inches, Psi};
//!
//! let fv: KgfPerCm2 = Psi(20.0).into();
//! assert!((fv.0 - 1.40614).abs() < 1e-5);
//!
//! let bite: Inches = Millimeters(25.4).into();
//! assert!((bite.0 - 1.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// kgf/cm² per psi
pub const KGF_CM2_PER_PSI: f64 = 0.070307;

/// kgf/cm² per MPa
pub const KGF_CM2_PER_MPA: f64 = 10.19716;

/// Standard gravity (Pa per kgf/m², N per kgf)
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Pa per psf
pub const PA_PER_PSF: f64 = 47.880259;

/// mm per inch
pub const MM_PER_INCH: f64 = 25.4;

/// lb per kgf
pub const LB_PER_KGF: f64 = 2.2046226;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Millimeters> for Inches {
    fn from(mm: Millimeters) -> Self {
        Inches(mm.0 / MM_PER_INCH)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pounds per square inch (psi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

/// Stress in kilogram-force per square centimeter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgfPerCm2(pub f64);

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

impl From<Psi> for KgfPerCm2 {
    fn from(psi: Psi) -> Self {
        KgfPerCm2(psi.0 * KGF_CM2_PER_PSI)
    }
}

impl From<MegaPascals> for KgfPerCm2 {
    fn from(mpa: MegaPascals) -> Self {
        KgfPerCm2(mpa.0 * KGF_CM2_PER_MPA)
    }
}

// ============================================================================
// Pressure Units
// ============================================================================

/// Pressure in kilogram-force per square meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgfPerM2(pub f64);

/// Pressure in pascals (N/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Pressure in pounds per square foot
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psf(pub f64);

impl From<KgfPerM2> for Pascals {
    fn from(kgf: KgfPerM2) -> Self {
        Pascals(kgf.0 * STANDARD_GRAVITY)
    }
}

impl From<Pascals> for KgfPerM2 {
    fn from(pa: Pascals) -> Self {
        KgfPerM2(pa.0 / STANDARD_GRAVITY)
    }
}

impl From<Pascals> for Psf {
    fn from(pa: Pascals) -> Self {
        Psf(pa.0 / PA_PER_PSF)
    }
}

impl From<KgfPerM2> for Psf {
    fn from(kgf: KgfPerM2) -> Self {
        Pascals::from(kgf).into()
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force (or mass under standard gravity) in kilogram-force
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kgf(pub f64);

/// Force in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

impl From<Kgf> for Pounds {
    fn from(kgf: Kgf) -> Self {
        Pounds(kgf.0 * LB_PER_KGF)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Inches);
impl_arithmetic!(Psi);
impl_arithmetic!(KgfPerCm2);
impl_arithmetic!(MegaPascals);
impl_arithmetic!(KgfPerM2);
impl_arithmetic!(Pascals);
impl_arithmetic!(Psf);
impl_arithmetic!(Kgf);
impl_arithmetic!(Pounds);

// ============================================================================
// Display Unit System
// ============================================================================

/// Which units to show results in.
///
/// Calculations always run in the working units above; this only affects
/// how results are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// mm, kgf, kgf/m²
    Metric,
    /// in, lb, psf
    Imperial,
    /// Metric with imperial in brackets
    #[default]
    Dual,
}

impl UnitSystem {
    /// Format a joint dimension.
    pub fn format_length(&self, mm: Millimeters) -> String {
        let inches: Inches = mm.into();
        match self {
            UnitSystem::Metric => format!("{:.2} mm", mm.0),
            UnitSystem::Imperial => format!("{:.3} in", inches.0),
            UnitSystem::Dual => format!("{:.2} mm ({:.3} in)", mm.0, inches.0),
        }
    }

    /// Format a wind pressure.
    pub fn format_pressure(&self, p: KgfPerM2) -> String {
        let psf: Psf = p.into();
        match self {
            UnitSystem::Metric => format!("{:.1} kgf/m²", p.0),
            UnitSystem::Imperial => format!("{:.2} psf", psf.0),
            UnitSystem::Dual => format!("{:.1} kgf/m² ({:.2} psf)", p.0, psf.0),
        }
    }

    /// Format a weight.
    pub fn format_weight(&self, w: Kgf) -> String {
        let lb: Pounds = w.into();
        match self {
            UnitSystem::Metric => format!("{:.2} kgf", w.0),
            UnitSystem::Imperial => format!("{:.2} lb", lb.0),
            UnitSystem::Dual => format!("{:.2} kgf ({:.2} lb)", w.0, lb.0),
        }
    }

    /// Format a stress given in psi.
    pub fn format_stress(&self, s: Psi) -> String {
        let kgf: KgfPerCm2 = s.into();
        match self {
            UnitSystem::Metric => format!("{:.3} kgf/cm²", kgf.0),
            UnitSystem::Imperial => format!("{:.1} psi", s.0),
            UnitSystem::Dual => format!("{:.1} psi ({:.3} kgf/cm²)", s.0, kgf.0),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
            UnitSystem::Dual => "dual",
        };
        write!(f, "{}", name)
    }
}
