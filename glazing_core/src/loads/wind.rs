//! Wind pressure on components and cladding per ASCE 7-22
//!
//! Derives the design suction on a glass lite from the basic wind speed,
//! the exposure/topography/directionality factors, the external pressure
//! coefficient of the facade zone, and the enclosure classification of the
//! building (which sets the internal pressure coefficient).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::registry::{Equation, EquationTracker};
use crate::equations::wind::{cladding_design_pressure, velocity_pressure_pa};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::units::{KgfPerM2, Pascals, Psf};

/// Default wind directionality factor for components and cladding
pub const DEFAULT_KD: f64 = 0.85;

/// Building enclosure classification per ASCE 7-22 Section 26.12
///
/// # Example
/// ```
/// use glazing_core::loads::EnclosureClass;
///
/// assert_eq!(EnclosureClass::PartiallyEnclosed.gcpi(), 0.55);
/// assert_eq!(EnclosureClass::Open.gcpi(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EnclosureClass {
    /// Enclosed building
    #[default]
    Enclosed,
    /// Partially enclosed building (dominant opening on one wall)
    PartiallyEnclosed,
    /// Partially open building
    PartiallyOpen,
    /// Open building
    Open,
}

impl EnclosureClass {
    /// Internal pressure coefficient magnitude (ASCE 7-22 Table 26.13-1)
    pub fn gcpi(&self) -> f64 {
        match self {
            EnclosureClass::Enclosed => 0.18,
            EnclosureClass::PartiallyEnclosed => 0.55,
            EnclosureClass::PartiallyOpen => 0.18,
            EnclosureClass::Open => 0.0,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            EnclosureClass::Enclosed => "Enclosed",
            EnclosureClass::PartiallyEnclosed => "Partially enclosed",
            EnclosureClass::PartiallyOpen => "Partially open",
            EnclosureClass::Open => "Open",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "enclosed" | "e" => Ok(EnclosureClass::Enclosed),
            "partially-enclosed" | "pe" => Ok(EnclosureClass::PartiallyEnclosed),
            "partially-open" | "po" => Ok(EnclosureClass::PartiallyOpen),
            "open" | "o" => Ok(EnclosureClass::Open),
            _ => Err(CalcError::invalid_input(
                "enclosure",
                s,
                "Expected enclosed, partially-enclosed, partially-open or open",
            )),
        }
    }
}

impl std::fmt::Display for EnclosureClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn default_factor() -> f64 {
    1.0
}

fn default_kd() -> f64 {
    DEFAULT_KD
}

/// Wind parameters for a cladding element.
///
/// # JSON Format
/// ```json
/// {
///   "basic_wind_speed_m_s": 40.0,
///   "kz": 1.0,
///   "kzt": 1.0,
///   "kd": 0.85,
///   "gcp": -1.4,
///   "enclosure": "Enclosed"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindInput {
    /// Basic wind speed V (m/s)
    pub basic_wind_speed_m_s: f64,
    /// Velocity pressure exposure coefficient K_z
    #[serde(default = "default_factor")]
    pub kz: f64,
    /// Topographic factor K_zt
    #[serde(default = "default_factor")]
    pub kzt: f64,
    /// Wind directionality factor K_d
    #[serde(default = "default_kd")]
    pub kd: f64,
    /// External pressure coefficient GC_p of the facade zone (sign ignored)
    pub gcp: f64,
    /// Enclosure classification
    #[serde(default)]
    pub enclosure: EnclosureClass,
}

impl WindInput {
    /// Create wind input with K_z = K_zt = 1.0 and K_d = 0.85
    pub fn new(basic_wind_speed_m_s: f64, gcp: f64, enclosure: EnclosureClass) -> Self {
        WindInput {
            basic_wind_speed_m_s,
            kz: default_factor(),
            kzt: default_factor(),
            kd: DEFAULT_KD,
            gcp,
            enclosure,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive(
            "basic_wind_speed_m_s",
            self.basic_wind_speed_m_s,
            "Wind speed must be positive",
        )?;
        require_positive("kz", self.kz, "Exposure coefficient must be positive")?;
        require_positive("kzt", self.kzt, "Topographic factor must be positive")?;
        require_positive("kd", self.kd, "Directionality factor must be positive")?;
        if !self.gcp.is_finite() || self.gcp == 0.0 {
            return Err(CalcError::invalid_input(
                "gcp",
                self.gcp.to_string(),
                "External pressure coefficient must be non-zero",
            ));
        }
        Ok(())
    }
}

/// Derived wind pressures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindResult {
    /// Velocity pressure q (Pa)
    pub velocity_pressure_pa: f64,
    /// Internal pressure coefficient used
    pub gcpi: f64,
    /// Design suction (Pa)
    pub design_pressure_pa: f64,
    /// Design suction (kgf/m²), the input to the bite calculation
    pub design_pressure_kgf_m2: f64,
    /// Design suction (psf)
    pub design_pressure_psf: f64,
}

/// Derive the design wind suction on a lite.
pub fn calculate(input: &WindInput) -> CalcResult<WindResult> {
    let mut tracker = EquationTracker::new();
    calculate_with_tracker(input, &mut tracker)
}

/// Derive the design wind suction and record the equations applied.
pub fn calculate_with_tracker(input: &WindInput, tracker: &mut EquationTracker) -> CalcResult<WindResult> {
    input.validate()?;

    let q = velocity_pressure_pa(input.basic_wind_speed_m_s, input.kz, input.kzt, input.kd);
    tracker.record(Equation::VelocityPressure, "Velocity pressure");

    let gcpi = input.enclosure.gcpi();
    let p = cladding_design_pressure(q, input.gcp, gcpi);
    tracker.record(Equation::CladdingDesignPressure, "Design suction");

    let p_pa = Pascals(p);
    let result = WindResult {
        velocity_pressure_pa: q,
        gcpi,
        design_pressure_pa: p,
        design_pressure_kgf_m2: KgfPerM2::from(p_pa).0,
        design_pressure_psf: Psf::from(p_pa).0,
    };

    debug!(
        q_pa = q,
        gcpi,
        p_kgf_m2 = result.design_pressure_kgf_m2,
        enclosure = %input.enclosure,
        "wind pressure derived"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enclosed_building() {
        let input = WindInput {
            basic_wind_speed_m_s: 40.0,
            kz: 1.0,
            kzt: 1.0,
            kd: 1.0,
            gcp: -1.4,
            enclosure: EnclosureClass::Enclosed,
        };
        let result = calculate(&input).unwrap();
        // q = 0.613 * 1600 = 980.8 Pa; p = 980.8 * 1.58 = 1549.664 Pa
        assert!((result.velocity_pressure_pa - 980.8).abs() < 1e-9);
        assert!((result.design_pressure_pa - 1549.664).abs() < 1e-6);
        assert!((result.design_pressure_kgf_m2 - 158.02).abs() < 0.01);
    }

    #[test]
    fn test_partially_enclosed_increases_pressure() {
        let enclosed = calculate(&WindInput::new(35.0, -1.2, EnclosureClass::Enclosed)).unwrap();
        let partial = calculate(&WindInput::new(35.0, -1.2, EnclosureClass::PartiallyEnclosed)).unwrap();
        let open = calculate(&WindInput::new(35.0, -1.2, EnclosureClass::Open)).unwrap();
        assert!(partial.design_pressure_pa > enclosed.design_pressure_pa);
        assert!(open.design_pressure_pa < enclosed.design_pressure_pa);
        assert!((open.design_pressure_pa - open.velocity_pressure_pa * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_wind_input() {
        assert!(calculate(&WindInput::new(0.0, -1.4, EnclosureClass::Enclosed)).is_err());
        assert!(calculate(&WindInput::new(40.0, 0.0, EnclosureClass::Enclosed)).is_err());

        let mut input = WindInput::new(40.0, -1.4, EnclosureClass::Enclosed);
        input.kd = -0.85;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_enclosure_parsing() {
        assert_eq!(
            EnclosureClass::from_str_flexible("Partially Enclosed").unwrap(),
            EnclosureClass::PartiallyEnclosed
        );
        assert_eq!(EnclosureClass::from_str_flexible("open").unwrap(), EnclosureClass::Open);
        assert!(EnclosureClass::from_str_flexible("sealed").is_err());
    }

    #[test]
    fn test_json_defaults() {
        let input: WindInput = serde_json::from_str(r#"{ "basic_wind_speed_m_s": 45.0, "gcp": -1.8 }"#).unwrap();
        assert_eq!(input.kz, 1.0);
        assert_eq!(input.kd, 0.85);
        assert_eq!(input.enclosure, EnclosureClass::Enclosed);
    }

    #[test]
    fn test_tracker() {
        let mut tracker = EquationTracker::new();
        calculate_with_tracker(&WindInput::new(40.0, -1.4, EnclosureClass::Enclosed), &mut tracker).unwrap();
        assert_eq!(
            tracker.unique_equations(),
            vec![Equation::VelocityPressure, Equation::CladdingDesignPressure]
        );
    }
}
