//! # Design Settings
//!
//! Office-wide defaults for glazing calculations: the minimum joint
//! dimension, default materials, sweep ranges, and display units.
//! Every field has a default, so a settings file only needs to list what
//! it changes.
//!
//! ## Example
//!
//! ```rust
//! use glazing_core::settings::DesignSettings;
//!
//! let settings = DesignSettings::from_json(r#"{ "minimum_joint_mm": 9.5 }"#).unwrap();
//! assert_eq!(settings.minimum_joint_mm, 9.5);
//! assert_eq!(settings.silicone.wind_stress_psi, 20.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::sensitivity::SweepRange;
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::materials::{FrameMaterial, GlassMaterial, SiliconeProperties};
use crate::units::UnitSystem;

/// Default minimum bite and glueline (1/4 in)
pub const DEFAULT_MINIMUM_JOINT_MM: f64 = 6.35;

/// Design settings shared by every calculation in a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Minimum bite and glueline thickness (mm)
    pub minimum_joint_mm: f64,

    /// Glass for lites that do not name their own
    pub glass: GlassMaterial,

    /// Frame for lites that do not name their own
    pub frame: FrameMaterial,

    /// Silicone for lites that do not name their own
    pub silicone: SiliconeProperties,

    /// Wind pressure sweep for bite sensitivity (kgf/m²)
    pub pressure_sweep: SweepRange,

    /// Temperature differential sweep for glueline sensitivity (°C)
    pub delta_t_sweep: SweepRange,

    /// Display units for reports
    pub units: UnitSystem,
}

impl DesignSettings {
    /// Parse settings from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: DesignSettings = serde_json::from_str(json)
            .map_err(|e| CalcError::serialization(format!("Invalid settings JSON: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive(
            "minimum_joint_mm",
            self.minimum_joint_mm,
            "Minimum joint dimension must be positive",
        )?;
        self.glass.validate()?;
        self.frame.validate()?;
        self.silicone.validate()?;
        self.pressure_sweep.validate("pressure_sweep")?;
        self.delta_t_sweep.validate("delta_t_sweep")?;
        Ok(())
    }
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            minimum_joint_mm: DEFAULT_MINIMUM_JOINT_MM,
            glass: GlassMaterial::default(),
            frame: FrameMaterial::default(),
            silicone: SiliconeProperties::default(),
            pressure_sweep: SweepRange::pressure_default(),
            delta_t_sweep: SweepRange::delta_t_default(),
            units: UnitSystem::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = DesignSettings::default();
        assert_eq!(s.minimum_joint_mm, 6.35);
        assert_eq!(s.units, UnitSystem::Dual);
        assert_eq!(s.pressure_sweep, SweepRange::new(50.0, 450.0, 100));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        let s = DesignSettings::from_json("{}").unwrap();
        assert_eq!(s, DesignSettings::default());
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{
            "units": "metric",
            "silicone": { "dead_load_stress_psi": 1.5 },
            "frame": { "type": "Custom", "name": "Steel", "alpha_per_c": 1.2e-5 }
        }"#;
        let s = DesignSettings::from_json(json).unwrap();
        assert_eq!(s.units, UnitSystem::Metric);
        assert_eq!(s.silicone.dead_load_stress_psi, 1.5);
        assert_eq!(s.silicone.wind_stress_psi, 20.0);
        assert_eq!(s.frame.alpha_per_c(), 1.2e-5);
    }

    #[test]
    fn test_invalid_minimum_rejected() {
        let err = DesignSettings::from_json(r#"{ "minimum_joint_mm": 0.0 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_bad_json_is_serialization_error() {
        let err = DesignSettings::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
