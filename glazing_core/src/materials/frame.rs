//! Supporting frame materials.
//!
//! The frame expands more than the glass it carries; the difference is the
//! movement the structural silicone joint has to absorb.

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};

/// Coefficient of thermal expansion of aluminum 6063-T6 (1/°C)
pub const ALUMINUM_6063_T6_ALPHA_PER_C: f64 = 23.2e-6;

/// Frame material carrying the glass.
///
/// ## JSON Serialization
///
/// ```json
/// { "type": "Aluminum6063T6" }
/// { "type": "Custom", "name": "Steel S275", "alpha_per_c": 1.2e-5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FrameMaterial {
    /// Extruded aluminum 6063-T6 mullions and transoms
    Aluminum6063T6,
    /// Any other frame with a user-supplied expansion coefficient
    Custom { name: String, alpha_per_c: f64 },
}

impl FrameMaterial {
    /// Linear coefficient of thermal expansion (1/°C)
    pub fn alpha_per_c(&self) -> f64 {
        match self {
            FrameMaterial::Aluminum6063T6 => ALUMINUM_6063_T6_ALPHA_PER_C,
            FrameMaterial::Custom { alpha_per_c, .. } => *alpha_per_c,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            FrameMaterial::Aluminum6063T6 => "Aluminum 6063-T6",
            FrameMaterial::Custom { name, .. } => name,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '_'], "-").as_str() {
            "ALUMINUM" | "ALUMINIUM" | "6063-T6" | "AL-6063-T6" | "ALUMINUM-6063-T6" => {
                Ok(FrameMaterial::Aluminum6063T6)
            }
            _ => Err(CalcError::invalid_input(
                "frame",
                s,
                "Unknown frame material; use a custom material with an explicit expansion coefficient",
            )),
        }
    }

    /// Validate material constants.
    pub fn validate(&self) -> CalcResult<()> {
        if let FrameMaterial::Custom { alpha_per_c, .. } = self {
            require_positive(
                "frame.alpha_per_c",
                *alpha_per_c,
                "Thermal expansion coefficient must be positive",
            )?;
        }
        Ok(())
    }
}

impl Default for FrameMaterial {
    fn default() -> Self {
        FrameMaterial::Aluminum6063T6
    }
}

impl std::fmt::Display for FrameMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
