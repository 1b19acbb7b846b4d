//! # Glazing Equations
//!
//! All closed-form formulas used by the glazing calculations live here.
//! Keeping them in one place enables:
//! - Easy verification against the referenced standards
//! - Documentation of assumptions and unit conventions
//! - Consistent implementation across calculation types
//!
//! ## Modules
//!
//! - [`glazing`] - Glass weight, structural bite, thermal movement, glueline
//! - [`wind`] - Velocity pressure and cladding design pressure
//! - [`registry`] - Equation metadata and usage tracking
//!
//! ## References
//!
//! - ASTM C1401: Standard Guide for Structural Sealant Glazing
//! - ASTM C1184: Standard Specification for Structural Silicone Sealants
//! - AAMA CW-13: Structural Sealant Glazing Systems
//! - ASCE 7-22: Minimum Design Loads for Buildings

pub mod glazing;
pub mod registry;
pub mod wind;

// Re-export commonly used items
pub use glazing::{
    apply_minimum,
    bite_for_self_weight_mm,
    bite_for_wind_mm,
    glass_weight_kg,
    glueline_by_movement_capability_mm,
    glueline_by_shear_mm,
    glueline_thickness_mm,
    perimeter_m,
    thermal_differential_movement_mm,
};

pub use wind::{cladding_design_pressure, velocity_pressure_pa};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
