//! # Structural Silicone Glazing Calculation
//!
//! Sizes the structural silicone joint of a four-side supported glass lite:
//!
//! - **Bite** (contact width) to carry wind suction, and self-weight in shear
//!   when the lite has no setting blocks
//! - **Glueline thickness** to absorb differential thermal movement between
//!   the frame and the glass
//!
//! Both design values are clamped to a configured minimum (6.35 mm by
//! default).
//!
//! ## Example
//!
//! ```rust
//! use glazing_core::calculations::glazing::{calculate, GlazingInput};
//! use glazing_core::settings::DesignSettings;
//!
//! let input = GlazingInput::new("L-1", 1.5, 2.5, 10.0, 185.0, 50.0);
//! let result = calculate(&input, &DesignSettings::default()).unwrap();
//!
//! assert!((result.bite_wind_mm - 9.867).abs() < 0.01);
//! assert!((result.bite_design_mm - 9.867).abs() < 0.01);
//! assert_eq!(result.glueline_design_mm, 6.35);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::equations::glazing::{
    apply_minimum, bite_for_self_weight_mm, bite_for_wind_mm, glass_weight_kg,
    glueline_by_movement_capability_mm, glueline_by_shear_mm, perimeter_m,
    thermal_differential_movement_mm,
};
use crate::equations::registry::{Equation, EquationTracker};
use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::materials::{FrameMaterial, GlassMaterial, SiliconeProperties};
use crate::settings::DesignSettings;

/// Input parameters for a glazed lite.
///
/// `silicone`, `glass` and `frame` are optional; when absent the defaults
/// of the [`DesignSettings`] passed to [`calculate`] apply. A material given
/// on the lite replaces the settings default as a whole.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "L-1",
///   "width_m": 1.5,
///   "height_m": 2.5,
///   "thickness_mm": 10.0,
///   "wind_pressure_kgf_m2": 185.0,
///   "delta_t_c": 50.0,
///   "carries_self_weight": false,
///   "silicone": { "wind_stress_psi": 20.0, "dead_load_stress_psi": 1.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlazingInput {
    /// User label for this lite (e.g., "L-1", "Typical vision panel")
    pub label: String,

    /// Lite width in meters
    pub width_m: f64,

    /// Lite height in meters
    pub height_m: f64,

    /// Nominal glass thickness in millimeters
    pub thickness_mm: f64,

    /// Design wind pressure (suction) in kgf/m²
    pub wind_pressure_kgf_m2: f64,

    /// Service temperature differential ΔT in °C
    pub delta_t_c: f64,

    /// True when there are no setting blocks and the silicone carries the
    /// lite's weight in shear
    #[serde(default)]
    pub carries_self_weight: bool,

    /// Structural silicone properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silicone: Option<SiliconeProperties>,

    /// Glass material
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glass: Option<GlassMaterial>,

    /// Frame material
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<FrameMaterial>,

    /// Joint dimensions shown on the drawings, checked against the design values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provided: Option<JointDimensions>,
}

impl GlazingInput {
    /// Create an input that takes its materials from the design settings.
    pub fn new(
        label: impl Into<String>,
        width_m: f64,
        height_m: f64,
        thickness_mm: f64,
        wind_pressure_kgf_m2: f64,
        delta_t_c: f64,
    ) -> Self {
        GlazingInput {
            label: label.into(),
            width_m,
            height_m,
            thickness_mm,
            wind_pressure_kgf_m2,
            delta_t_c,
            carries_self_weight: false,
            silicone: None,
            glass: None,
            frame: None,
            provided: None,
        }
    }

    /// Set whether the silicone carries the lite's self-weight
    pub fn with_self_weight(mut self, carries_self_weight: bool) -> Self {
        self.carries_self_weight = carries_self_weight;
        self
    }

    /// Replace the silicone properties
    pub fn with_silicone(mut self, silicone: SiliconeProperties) -> Self {
        self.silicone = Some(silicone);
        self
    }

    /// Replace the frame material
    pub fn with_frame(mut self, frame: FrameMaterial) -> Self {
        self.frame = Some(frame);
        self
    }

    /// Check the design against detailed joint dimensions
    pub fn with_provided(mut self, bite_mm: f64, glueline_mm: f64) -> Self {
        self.provided = Some(JointDimensions { bite_mm, glueline_mm });
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("width_m", self.width_m, "Width must be positive")?;
        require_positive("height_m", self.height_m, "Height must be positive")?;
        require_positive("thickness_mm", self.thickness_mm, "Glass thickness must be positive")?;
        require_non_negative(
            "wind_pressure_kgf_m2",
            self.wind_pressure_kgf_m2,
            "Wind pressure cannot be negative (enter the suction magnitude)",
        )?;
        require_non_negative("delta_t_c", self.delta_t_c, "Temperature differential cannot be negative")?;
        if let Some(silicone) = &self.silicone {
            silicone.validate()?;
        }
        if let Some(glass) = &self.glass {
            glass.validate()?;
        }
        if let Some(frame) = &self.frame {
            frame.validate()?;
        }
        if let Some(provided) = &self.provided {
            provided.validate()?;
        }
        Ok(())
    }

    /// Short side of the lite (m), governs wind bite
    pub fn short_side_m(&self) -> f64 {
        self.width_m.min(self.height_m)
    }

    /// Long side of the lite (m), governs thermal movement
    pub fn long_side_m(&self) -> f64 {
        self.width_m.max(self.height_m)
    }

    /// Joint perimeter (m)
    pub fn perimeter_m(&self) -> f64 {
        perimeter_m(self.width_m, self.height_m)
    }

    /// Silicone in effect: the lite's own, else the settings default
    pub fn silicone_or<'a>(&'a self, settings: &'a DesignSettings) -> &'a SiliconeProperties {
        self.silicone.as_ref().unwrap_or(&settings.silicone)
    }

    /// Glass in effect: the lite's own, else the settings default
    pub fn glass_or<'a>(&'a self, settings: &'a DesignSettings) -> &'a GlassMaterial {
        self.glass.as_ref().unwrap_or(&settings.glass)
    }

    /// Frame in effect: the lite's own, else the settings default
    pub fn frame_or<'a>(&'a self, settings: &'a DesignSettings) -> &'a FrameMaterial {
        self.frame.as_ref().unwrap_or(&settings.frame)
    }
}

/// Bite and glueline dimensions of a detailed joint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointDimensions {
    /// Bite in mm
    pub bite_mm: f64,
    /// Glueline thickness in mm
    pub glueline_mm: f64,
}

impl JointDimensions {
    /// Validate joint dimensions.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("provided.bite_mm", self.bite_mm, "Provided bite must be positive")?;
        require_positive(
            "provided.glueline_mm",
            self.glueline_mm,
            "Provided glueline thickness must be positive",
        )
    }
}

/// Criterion that sets the design bite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiteCriterion {
    /// Wind suction
    Wind,
    /// Self-weight in shear
    SelfWeight,
    /// Minimum joint dimension
    Minimum,
}

/// Criterion that sets the design glueline thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GluelineCriterion {
    /// Allowable shear stress
    ShearStress,
    /// Movement capability (strain limit)
    MovementCapability,
    /// Minimum joint dimension
    Minimum,
}

impl std::fmt::Display for BiteCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BiteCriterion::Wind => "Wind",
            BiteCriterion::SelfWeight => "Self-weight",
            BiteCriterion::Minimum => "Minimum",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Display for GluelineCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GluelineCriterion::ShearStress => "Shear stress",
            GluelineCriterion::MovementCapability => "Movement capability",
            GluelineCriterion::Minimum => "Minimum",
        };
        write!(f, "{}", s)
    }
}

/// Results from the glazing calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "glass_weight_kg": 93.75,
///   "bite_wind_mm": 9.87,
///   "bite_self_weight_mm": 0.0,
///   "bite_design_mm": 9.87,
///   "bite_criterion": "Wind",
///   "thermal_movement_mm": 0.8875,
///   "glueline_design_mm": 6.35,
///   "glueline_criterion": "Minimum"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlazingResult {
    /// Lite weight (kgf)
    pub glass_weight_kg: f64,

    /// Short side used for wind bite (m)
    pub short_side_m: f64,

    /// Long side used for thermal movement (m)
    pub long_side_m: f64,

    /// Bite required by wind (mm)
    pub bite_wind_mm: f64,

    /// Bite required by self-weight (mm); zero with setting blocks
    pub bite_self_weight_mm: f64,

    /// Larger of wind and self-weight bite, before the minimum (mm)
    pub bite_required_mm: f64,

    /// Design bite, not less than the minimum (mm)
    pub bite_design_mm: f64,

    /// What sets the design bite
    pub bite_criterion: BiteCriterion,

    /// Differential thermal movement amplitude (mm)
    pub thermal_movement_mm: f64,

    /// Glueline required by the shear stress criterion (mm)
    pub glueline_shear_mm: f64,

    /// Glueline required by the movement capability criterion (mm)
    pub glueline_capacity_mm: f64,

    /// Larger of the two glueline criteria, before the minimum (mm)
    pub glueline_required_mm: f64,

    /// Design glueline thickness, not less than the minimum (mm)
    pub glueline_design_mm: f64,

    /// What sets the design glueline
    pub glueline_criterion: GluelineCriterion,

    /// Minimum joint dimension applied (mm)
    pub minimum_joint_mm: f64,

    /// Design bite / provided bite, when provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bite_utilization: Option<f64>,

    /// Design glueline / provided glueline, when provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glueline_utilization: Option<f64>,
}

impl GlazingResult {
    /// Check that the provided joint, if any, is large enough.
    ///
    /// Without provided dimensions the design values are the answer and
    /// the lite always passes.
    pub fn passes(&self) -> bool {
        self.bite_utilization.map_or(true, |u| u <= 1.0)
            && self.glueline_utilization.map_or(true, |u| u <= 1.0)
    }

    /// Reject results that overflowed to infinity or NaN.
    fn check_finite(&self) -> CalcResult<()> {
        let values = [
            ("glass_weight_kg", self.glass_weight_kg),
            ("bite_design_mm", self.bite_design_mm),
            ("thermal_movement_mm", self.thermal_movement_mm),
            ("glueline_design_mm", self.glueline_design_mm),
        ];
        match values.iter().find(|(_, v)| !v.is_finite()) {
            Some((name, v)) => Err(CalcError::calculation_failed(
                "Glazing",
                format!("{} is not finite ({})", name, v),
            )),
            None => Ok(()),
        }
    }

    /// Governing utilization ratio, when provided dimensions were checked
    pub fn max_utilization(&self) -> Option<f64> {
        match (self.bite_utilization, self.glueline_utilization) {
            (Some(b), Some(g)) => Some(b.max(g)),
            (b, g) => b.or(g),
        }
    }
}

/// Calculate design bite and glueline thickness.
///
/// # Arguments
///
/// * `input` - Lite geometry, loads and materials
/// * `settings` - Design settings (minimum joint dimension)
///
/// # Returns
///
/// * `Ok(GlazingResult)` - Calculation results
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(input: &GlazingInput, settings: &DesignSettings) -> CalcResult<GlazingResult> {
    let mut tracker = EquationTracker::new();
    calculate_with_tracker(input, settings, &mut tracker)
}

/// Calculate and record every equation applied in `tracker`.
pub fn calculate_with_tracker(
    input: &GlazingInput,
    settings: &DesignSettings,
    tracker: &mut EquationTracker,
) -> CalcResult<GlazingResult> {
    input.validate()?;
    settings.validate()?;

    let label = input.label.as_str();
    let minimum = settings.minimum_joint_mm;
    let silicone = input.silicone_or(settings);
    let glass = input.glass_or(settings);
    let frame = input.frame_or(settings);

    let short_side = input.short_side_m();
    let long_side = input.long_side_m();

    let fv = silicone.wind_stress_kgf_cm2();
    let fp = silicone.dead_load_stress_kgf_cm2();
    let fs = silicone.shear_stress_kgf_cm2();
    let e = silicone.modulus_kgf_cm2();
    tracker.record_for_member(Equation::StressConversion, "Silicone allowables", label);

    let weight = glass_weight_kg(
        input.width_m,
        input.height_m,
        input.thickness_mm,
        glass.density_kg_m3,
    );
    tracker.record_for_member(Equation::GlassWeight, "Lite weight", label);

    // Bite
    let bite_wind = bite_for_wind_mm(input.wind_pressure_kgf_m2, short_side, fv);
    tracker.record_for_member(Equation::BiteWindLoad, "Wind bite", label);

    let bite_weight = if input.carries_self_weight {
        tracker.record_for_member(Equation::BiteSelfWeight, "Self-weight bite", label);
        bite_for_self_weight_mm(weight, input.perimeter_m(), fp)
    } else {
        0.0
    };

    let bite_required = bite_wind.max(bite_weight);
    let bite_design = apply_minimum(bite_required, minimum);
    tracker.record_for_member(Equation::DesignBite, "Design bite", label);

    let bite_criterion = if bite_required < minimum {
        BiteCriterion::Minimum
    } else if bite_weight > bite_wind {
        BiteCriterion::SelfWeight
    } else {
        BiteCriterion::Wind
    };

    // Glueline
    let movement = thermal_differential_movement_mm(
        long_side,
        frame.alpha_per_c(),
        glass.alpha_per_c,
        input.delta_t_c,
    );
    tracker.record_for_member(Equation::ThermalDifferentialMovement, "Thermal movement", label);

    let gt_shear = glueline_by_shear_mm(movement, e, fs);
    tracker.record_for_member(Equation::GluelineShearStress, "Glueline by shear", label);
    let gt_capacity = glueline_by_movement_capability_mm(movement, silicone.movement_capability);
    tracker.record_for_member(Equation::GluelineMovementCapability, "Glueline by movement", label);

    let glueline_required = gt_shear.max(gt_capacity);
    let glueline_design = apply_minimum(glueline_required, minimum);
    tracker.record_for_member(Equation::DesignGlueline, "Design glueline", label);

    let glueline_criterion = if glueline_required < minimum {
        GluelineCriterion::Minimum
    } else if gt_shear > gt_capacity {
        GluelineCriterion::ShearStress
    } else {
        GluelineCriterion::MovementCapability
    };

    debug!(
        label,
        weight_kg = weight,
        bite_wind_mm = bite_wind,
        bite_weight_mm = bite_weight,
        movement_mm = movement,
        gt_shear_mm = gt_shear,
        gt_capacity_mm = gt_capacity,
        "glazing joint sized"
    );

    let (bite_utilization, glueline_utilization) = match &input.provided {
        Some(provided) => {
            tracker.record_for_member(Equation::JointUtilization, "Provided joint check", label);
            (
                Some(bite_design / provided.bite_mm),
                Some(glueline_design / provided.glueline_mm),
            )
        }
        None => (None, None),
    };

    let result = GlazingResult {
        glass_weight_kg: weight,
        short_side_m: short_side,
        long_side_m: long_side,
        bite_wind_mm: bite_wind,
        bite_self_weight_mm: bite_weight,
        bite_required_mm: bite_required,
        bite_design_mm: bite_design,
        bite_criterion,
        thermal_movement_mm: movement,
        glueline_shear_mm: gt_shear,
        glueline_capacity_mm: gt_capacity,
        glueline_required_mm: glueline_required,
        glueline_design_mm: glueline_design,
        glueline_criterion,
        minimum_joint_mm: minimum,
        bite_utilization,
        glueline_utilization,
    };

    result.check_finite()?;

    if !result.passes() {
        warn!(
            label,
            bite_utilization = ?result.bite_utilization,
            glueline_utilization = ?result.glueline_utilization,
            "provided joint is smaller than required"
        );
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_lite() -> GlazingInput {
        GlazingInput::new("Test Lite", 1.5, 2.5, 10.0, 185.0, 50.0)
    }

    fn settings() -> DesignSettings {
        DesignSettings::default()
    }

    #[test]
    fn test_reference_lite() {
        let result = calculate(&reference_lite(), &settings()).unwrap();

        assert!((result.glass_weight_kg - 93.75).abs() < 1e-9);
        // 185 * 1.5 / (2 * 1.40614 * 100) * 10
        assert!((result.bite_wind_mm - 9.8674).abs() < 1e-3);
        assert_eq!(result.bite_self_weight_mm, 0.0);
        assert_eq!(result.bite_design_mm, result.bite_wind_mm);
        assert_eq!(result.bite_criterion, BiteCriterion::Wind);

        assert!((result.thermal_movement_mm - 0.8875).abs() < 1e-9);
        assert!((result.glueline_shear_mm - 3.0035).abs() < 1e-3);
        assert!((result.glueline_capacity_mm - 3.55).abs() < 1e-9);
        assert!((result.glueline_required_mm - 3.55).abs() < 1e-9);
        assert_eq!(result.glueline_design_mm, 6.35);
        assert_eq!(result.glueline_criterion, GluelineCriterion::Minimum);

        assert!(result.passes());
        assert!(result.max_utilization().is_none());
    }

    #[test]
    fn test_self_weight_governs_without_setting_blocks() {
        let input = reference_lite().with_self_weight(true);
        let result = calculate(&input, &settings()).unwrap();

        assert!((result.bite_self_weight_mm - 16.668).abs() < 1e-2);
        assert_eq!(result.bite_design_mm, result.bite_self_weight_mm);
        assert_eq!(result.bite_criterion, BiteCriterion::SelfWeight);
    }

    #[test]
    fn test_orientation_does_not_matter() {
        let portrait = calculate(&reference_lite(), &settings()).unwrap();
        let landscape =
            calculate(&GlazingInput::new("Rotated", 2.5, 1.5, 10.0, 185.0, 50.0), &settings()).unwrap();
        assert_eq!(portrait.bite_design_mm, landscape.bite_design_mm);
        assert_eq!(portrait.thermal_movement_mm, landscape.thermal_movement_mm);
    }

    #[test]
    fn test_minimum_clamp_for_small_lite() {
        let input = GlazingInput::new("Small", 0.5, 0.6, 6.0, 80.0, 20.0);
        let result = calculate(&input, &settings()).unwrap();
        assert!(result.bite_required_mm < 6.35);
        assert_eq!(result.bite_design_mm, 6.35);
        assert_eq!(result.bite_criterion, BiteCriterion::Minimum);
    }

    #[test]
    fn test_custom_minimum_from_settings() {
        let mut s = settings();
        s.minimum_joint_mm = 12.0;
        let result = calculate(&reference_lite(), &s).unwrap();
        assert_eq!(result.bite_design_mm, 12.0);
        assert_eq!(result.glueline_design_mm, 12.0);
        assert_eq!(result.minimum_joint_mm, 12.0);
    }

    #[test]
    fn test_movement_capability_governs_large_lite() {
        let input = GlazingInput::new("Tall", 2.0, 6.0, 12.0, 150.0, 60.0);
        let result = calculate(&input, &settings()).unwrap();
        // 14.2e-6 * 60 * 3000 = 2.556 mm -> /0.25 = 10.224 mm
        assert!((result.thermal_movement_mm - 2.556).abs() < 1e-9);
        assert!((result.glueline_design_mm - 10.224).abs() < 1e-9);
        assert_eq!(result.glueline_criterion, GluelineCriterion::MovementCapability);
    }

    #[test]
    fn test_shear_governs_for_stiff_silicone() {
        let silicone = SiliconeProperties {
            modulus_mpa: 5.0,
            ..SiliconeProperties::default()
        };
        let input = GlazingInput::new("Stiff", 2.0, 6.0, 12.0, 150.0, 60.0).with_silicone(silicone);
        let result = calculate(&input, &settings()).unwrap();
        assert!(result.glueline_shear_mm > result.glueline_capacity_mm);
        assert_eq!(result.glueline_criterion, GluelineCriterion::ShearStress);
    }

    #[test]
    fn test_custom_frame_material() {
        let frame = FrameMaterial::Custom {
            name: "Glass fin".to_string(),
            alpha_per_c: 9.0e-6,
        };
        let input = reference_lite().with_frame(frame);
        let result = calculate(&input, &settings()).unwrap();
        assert!(result.thermal_movement_mm.abs() < 1e-15);
        assert_eq!(result.glueline_design_mm, 6.35);
    }

    #[test]
    fn test_provided_joint_check() {
        let ok = calculate(&reference_lite().with_provided(12.0, 8.0), &settings()).unwrap();
        assert!(ok.passes());
        assert!((ok.bite_utilization.unwrap() - 9.8674 / 12.0).abs() < 1e-3);

        let too_thin = calculate(&reference_lite().with_provided(12.0, 6.0), &settings()).unwrap();
        assert!(!too_thin.passes());
        assert!(too_thin.max_utilization().unwrap() > 1.0);
    }

    #[test]
    fn test_invalid_inputs() {
        let mut input = reference_lite();
        input.width_m = 0.0;
        assert!(calculate(&input, &settings()).is_err());

        let mut input = reference_lite();
        input.wind_pressure_kgf_m2 = -10.0;
        match calculate(&input, &settings()) {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "wind_pressure_kgf_m2"),
            other => panic!("unexpected: {:?}", other),
        }

        let input = reference_lite().with_silicone(SiliconeProperties {
            wind_stress_psi: 0.0,
            ..SiliconeProperties::default()
        });
        assert!(calculate(&input, &settings()).is_err());

        let input = reference_lite().with_provided(-1.0, 6.0);
        assert!(calculate(&input, &settings()).is_err());
    }

    #[test]
    fn test_zero_pressure_gives_minimum() {
        let mut input = reference_lite();
        input.wind_pressure_kgf_m2 = 0.0;
        let result = calculate(&input, &settings()).unwrap();
        assert_eq!(result.bite_wind_mm, 0.0);
        assert_eq!(result.bite_design_mm, 6.35);
    }

    #[test]
    fn test_tracker_records_equations() {
        let mut tracker = EquationTracker::new();
        calculate_with_tracker(&reference_lite(), &settings(), &mut tracker).unwrap();
        let used = tracker.unique_equations();
        assert!(used.contains(&Equation::BiteWindLoad));
        assert!(used.contains(&Equation::DesignGlueline));
        assert!(!used.contains(&Equation::BiteSelfWeight));
        assert!(!used.contains(&Equation::JointUtilization));

        let mut tracker = EquationTracker::new();
        let input = reference_lite().with_self_weight(true).with_provided(20.0, 8.0);
        calculate_with_tracker(&input, &settings(), &mut tracker).unwrap();
        let used = tracker.unique_equations();
        assert!(used.contains(&Equation::BiteSelfWeight));
        assert!(used.contains(&Equation::JointUtilization));
    }

    #[test]
    fn test_serialization() {
        let input = reference_lite().with_provided(12.0, 8.0);
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: GlazingInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        // Minimal JSON leaves materials to the settings
        let minimal = r#"{
            "label": "L-2",
            "width_m": 1.2,
            "height_m": 2.0,
            "thickness_mm": 8.0,
            "wind_pressure_kgf_m2": 150.0,
            "delta_t_c": 40.0
        }"#;
        let parsed: GlazingInput = serde_json::from_str(minimal).unwrap();
        assert!(!parsed.carries_self_weight);
        assert!(parsed.silicone.is_none());
        assert!(parsed.glass.is_none());
        assert!(parsed.frame.is_none());
        assert!(parsed.provided.is_none());
        assert!(!serde_json::to_string(&parsed).unwrap().contains("silicone"));
    }

    #[test]
    fn test_settings_materials_apply_when_lite_omits_them() {
        let mut s = settings();
        s.silicone.wind_stress_psi = 40.0;
        s.frame = FrameMaterial::Custom {
            name: "Steel".to_string(),
            alpha_per_c: 12.0e-6,
        };
        s.glass = GlassMaterial {
            density_kg_m3: 2600.0,
            ..GlassMaterial::default()
        };

        let result = calculate(&reference_lite(), &s).unwrap();
        // Twice the allowable halves the wind bite
        assert!((result.bite_wind_mm - 9.8674 / 2.0).abs() < 1e-3);
        // (12.0 - 9.0)e-6 * 50 * 1250
        assert!((result.thermal_movement_mm - 0.1875).abs() < 1e-9);
        assert!((result.glass_weight_kg - 97.5).abs() < 1e-9);
    }

    #[test]
    fn test_lite_material_overrides_settings() {
        let mut s = settings();
        s.silicone.wind_stress_psi = 40.0;
        let input = reference_lite().with_silicone(SiliconeProperties::default());
        let result = calculate(&input, &s).unwrap();
        assert!((result.bite_wind_mm - 9.8674).abs() < 1e-3);
    }

    #[test]
    fn test_overflow_is_calculation_failure() {
        let input = GlazingInput::new("Huge", 1e200, 1e200, 1e200, 185.0, 50.0);
        let err = calculate(&input, &settings()).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }
}
