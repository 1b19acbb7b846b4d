//! Structural silicone design properties.
//!
//! Allowable stresses are expressed in psi because that is how sealant
//! manufacturers and ASTM C1184 publish them. The glueline formulas need
//! them in kgf/cm²; use the `*_kgf_cm2` accessors.

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::units::{KgfPerCm2, MegaPascals, Psi};

/// Default design tensile stress under wind load (psi)
pub const DEFAULT_WIND_STRESS_PSI: f64 = 20.0;

/// Default design stress under permanent dead load (psi)
pub const DEFAULT_DEAD_LOAD_STRESS_PSI: f64 = 1.0;

/// Default design shear stress for glueline sizing (psi)
pub const DEFAULT_SHEAR_STRESS_PSI: f64 = 20.0;

/// Default elastic modulus (MPa)
pub const DEFAULT_MODULUS_MPA: f64 = 1.40;

/// Default movement capability (±25 %)
pub const DEFAULT_MOVEMENT_CAPABILITY: f64 = 0.25;

/// Structural silicone properties used by the bite and glueline checks.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wind_stress_psi": 20.0,
///   "dead_load_stress_psi": 1.0,
///   "shear_stress_psi": 20.0,
///   "modulus_mpa": 1.4,
///   "movement_capability": 0.25
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiliconeProperties {
    /// Allowable tensile stress under wind load, F_a.v (psi)
    pub wind_stress_psi: f64,
    /// Allowable stress under permanent self-weight, F_a.p (psi)
    pub dead_load_stress_psi: f64,
    /// Allowable shear stress for thermal movement, F_a.s (psi)
    pub shear_stress_psi: f64,
    /// Elastic (tensile) modulus E (MPa)
    pub modulus_mpa: f64,
    /// Movement capability as a strain fraction (0.25 = ±25 %)
    pub movement_capability: f64,
}

impl SiliconeProperties {
    /// Validate the silicone properties.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive(
            "silicone.wind_stress_psi",
            self.wind_stress_psi,
            "Allowable wind stress must be positive",
        )?;
        require_positive(
            "silicone.dead_load_stress_psi",
            self.dead_load_stress_psi,
            "Allowable dead-load stress must be positive",
        )?;
        require_positive(
            "silicone.shear_stress_psi",
            self.shear_stress_psi,
            "Allowable shear stress must be positive",
        )?;
        require_positive(
            "silicone.modulus_mpa",
            self.modulus_mpa,
            "Elastic modulus must be positive",
        )?;
        if !self.movement_capability.is_finite()
            || self.movement_capability <= 0.0
            || self.movement_capability > 1.0
        {
            return Err(CalcError::invalid_input(
                "silicone.movement_capability",
                self.movement_capability.to_string(),
                "Movement capability must be a strain fraction in (0, 1]",
            ));
        }
        Ok(())
    }

    /// Allowable wind stress in kgf/cm²
    pub fn wind_stress_kgf_cm2(&self) -> f64 {
        KgfPerCm2::from(Psi(self.wind_stress_psi)).0
    }

    /// Allowable dead-load stress in kgf/cm²
    pub fn dead_load_stress_kgf_cm2(&self) -> f64 {
        KgfPerCm2::from(Psi(self.dead_load_stress_psi)).0
    }

    /// Allowable shear stress in kgf/cm²
    pub fn shear_stress_kgf_cm2(&self) -> f64 {
        KgfPerCm2::from(Psi(self.shear_stress_psi)).0
    }

    /// Elastic modulus in kgf/cm²
    pub fn modulus_kgf_cm2(&self) -> f64 {
        KgfPerCm2::from(MegaPascals(self.modulus_mpa)).0
    }
}

impl Default for SiliconeProperties {
    fn default() -> Self {
        SiliconeProperties {
            wind_stress_psi: DEFAULT_WIND_STRESS_PSI,
            dead_load_stress_psi: DEFAULT_DEAD_LOAD_STRESS_PSI,
            shear_stress_psi: DEFAULT_SHEAR_STRESS_PSI,
            modulus_mpa: DEFAULT_MODULUS_MPA,
            movement_capability: DEFAULT_MOVEMENT_CAPABILITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let s = SiliconeProperties::default();
        assert!(s.validate().is_ok());
        assert!((s.wind_stress_kgf_cm2() - 1.40614).abs() < 1e-9);
        assert!((s.dead_load_stress_kgf_cm2() - 0.070307).abs() < 1e-9);
        assert!((s.modulus_kgf_cm2() - 14.276024).abs() < 1e-6);
    }

    #[test]
    fn test_movement_capability_bounds() {
        let mut s = SiliconeProperties::default();
        s.movement_capability = 0.0;
        assert!(s.validate().is_err());
        s.movement_capability = 1.5;
        assert!(s.validate().is_err());
        s.movement_capability = 1.0;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_negative_stress_rejected() {
        let s = SiliconeProperties {
            shear_stress_psi: -20.0,
            ..SiliconeProperties::default()
        };
        match s.validate() {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "silicone.shear_stress_psi"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s: SiliconeProperties = serde_json::from_str(r#"{ "wind_stress_psi": 24.0 }"#).unwrap();
        assert_eq!(s.wind_stress_psi, 24.0);
        assert_eq!(s.movement_capability, 0.25);
    }
}
