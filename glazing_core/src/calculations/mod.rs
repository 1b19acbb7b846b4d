//! # Glazing Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, settings) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`glazing`] - Structural bite and glueline thickness of a glass lite
//! - [`sensitivity`] - Bite and glueline sweeps over wind pressure and ΔT

pub mod glazing;
pub mod sensitivity;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use glazing::{BiteCriterion, GlazingInput, GlazingResult, GluelineCriterion, JointDimensions};
pub use sensitivity::{SensitivityCurve, SensitivityPoint, SweepParameter, SweepRange};

/// Enum wrapper for all calculation types.
///
/// Allows storing heterogeneous calculations in a project while keeping
/// a clean tagged serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Structural silicone glazed lite
    Glazing(GlazingInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Glazing(g) => &g.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Glazing(_) => "Glazing",
        }
    }
}
