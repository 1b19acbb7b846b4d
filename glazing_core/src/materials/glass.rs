//! Glass lite material properties.

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};

/// Density of annealed soda-lime float glass (kg/m³)
pub const FLOAT_GLASS_DENSITY_KG_M3: f64 = 2500.0;

/// Coefficient of thermal expansion of float glass (1/°C)
pub const FLOAT_GLASS_ALPHA_PER_C: f64 = 9.0e-6;

/// Physical properties of the glass lite.
///
/// ## JSON Example
///
/// ```json
/// { "density_kg_m3": 2500.0, "alpha_per_c": 9.0e-6 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlassMaterial {
    /// Density (kg/m³)
    pub density_kg_m3: f64,
    /// Linear coefficient of thermal expansion (1/°C)
    pub alpha_per_c: f64,
}

impl GlassMaterial {
    /// Soda-lime float glass
    pub fn float() -> Self {
        GlassMaterial {
            density_kg_m3: FLOAT_GLASS_DENSITY_KG_M3,
            alpha_per_c: FLOAT_GLASS_ALPHA_PER_C,
        }
    }

    /// Validate material constants.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("glass.density_kg_m3", self.density_kg_m3, "Glass density must be positive")?;
        require_positive(
            "glass.alpha_per_c",
            self.alpha_per_c,
            "Thermal expansion coefficient must be positive",
        )
    }
}

impl Default for GlassMaterial {
    fn default() -> Self {
        GlassMaterial::float()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_glass_defaults() {
        let glass = GlassMaterial::default();
        assert_eq!(glass.density_kg_m3, 2500.0);
        assert_eq!(glass.alpha_per_c, 9.0e-6);
        assert!(glass.validate().is_ok());
    }

    #[test]
    fn test_invalid_density() {
        let glass = GlassMaterial {
            density_kg_m3: 0.0,
            ..GlassMaterial::float()
        };
        assert!(glass.validate().is_err());
    }
}
