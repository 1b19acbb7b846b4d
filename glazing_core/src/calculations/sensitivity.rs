//! # Sensitivity Analysis
//!
//! Sweeps one input of a glazing calculation across a range and reports how
//! the joint requirement responds. Two sweeps are provided:
//!
//! - Bite versus wind pressure
//! - Glueline thickness versus temperature differential
//!
//! Each point carries the raw requirement of the swept criterion and the
//! design value after the minimum clamp.
//!
//! ## Example
//!
//! ```rust
//! use glazing_core::calculations::glazing::GlazingInput;
//! use glazing_core::calculations::sensitivity::{bite_vs_pressure, SweepRange};
//! use glazing_core::settings::DesignSettings;
//!
//! let input = GlazingInput::new("L-1", 1.5, 2.5, 10.0, 185.0, 50.0);
//! let curve = bite_vs_pressure(&input, &DesignSettings::default(), &SweepRange::new(50.0, 450.0, 5)).unwrap();
//!
//! assert_eq!(curve.points.len(), 5);
//! assert_eq!(curve.points[0].x, 50.0);
//! assert_eq!(curve.points[4].x, 450.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::glazing::{calculate, GlazingInput};
use crate::errors::{CalcError, CalcResult};
use crate::settings::DesignSettings;

/// Evenly spaced values from `start` to `end` inclusive.
///
/// Returns an empty vector for `count == 0` and `[start]` for `count == 1`.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Range of a parameter sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    /// First value
    pub start: f64,
    /// Last value (inclusive)
    pub end: f64,
    /// Number of points
    pub count: usize,
}

/// Largest number of points a sweep may request
pub const MAX_SWEEP_POINTS: usize = 10_000;

impl SweepRange {
    pub fn new(start: f64, end: f64, count: usize) -> Self {
        SweepRange { start, end, count }
    }

    /// Default wind pressure sweep: 50 to 450 kgf/m², 100 points
    pub fn pressure_default() -> Self {
        SweepRange::new(50.0, 450.0, 100)
    }

    /// Default temperature differential sweep: 10 to 90 °C, 100 points
    pub fn delta_t_default() -> Self {
        SweepRange::new(10.0, 90.0, 100)
    }

    /// Validate the range.
    pub fn validate(&self, field: &str) -> CalcResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() || self.end <= self.start {
            return Err(CalcError::invalid_input(
                field,
                format!("{}..{}", self.start, self.end),
                "Sweep end must be greater than start",
            ));
        }
        if self.count < 2 || self.count > MAX_SWEEP_POINTS {
            return Err(CalcError::invalid_input(
                format!("{}.count", field),
                self.count.to_string(),
                format!("A sweep needs between 2 and {} points", MAX_SWEEP_POINTS),
            ));
        }
        Ok(())
    }

    /// The sweep values
    pub fn values(&self) -> Vec<f64> {
        linspace(self.start, self.end, self.count)
    }
}

/// The input being swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepParameter {
    /// Wind pressure (kgf/m²) against bite
    WindPressure,
    /// Temperature differential (°C) against glueline thickness
    DeltaT,
}

impl SweepParameter {
    /// Axis label for the swept input
    pub fn x_label(&self) -> &'static str {
        match self {
            SweepParameter::WindPressure => "Wind pressure (kgf/m²)",
            SweepParameter::DeltaT => "Temperature differential (°C)",
        }
    }

    /// Axis label for the response
    pub fn y_label(&self) -> &'static str {
        match self {
            SweepParameter::WindPressure => "Bite (mm)",
            SweepParameter::DeltaT => "Glueline thickness (mm)",
        }
    }
}

/// One point of a sensitivity curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// Swept input value
    pub x: f64,
    /// Requirement of the swept criterion before the minimum (mm)
    pub required_mm: f64,
    /// Design value after the minimum clamp (mm)
    pub design_mm: f64,
}

/// Result of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityCurve {
    /// What was swept
    pub parameter: SweepParameter,
    /// Value of the swept input in the original calculation
    pub current_x: f64,
    /// Design value at the current input (mm)
    pub current_design_mm: f64,
    /// Curve points in sweep order
    pub points: Vec<SensitivityPoint>,
}

impl SensitivityCurve {
    /// Point with the largest design value
    pub fn max_point(&self) -> Option<&SensitivityPoint> {
        self.points
            .iter()
            .max_by(|a, b| a.design_mm.total_cmp(&b.design_mm))
    }
}

/// Bite as a function of wind pressure.
///
/// `required_mm` is the wind bite alone (as plotted against pressure);
/// `design_mm` is the full design bite including self-weight and minimum.
pub fn bite_vs_pressure(
    input: &GlazingInput,
    settings: &DesignSettings,
    range: &SweepRange,
) -> CalcResult<SensitivityCurve> {
    range.validate("pressure_sweep")?;
    let current = calculate(input, settings)?;

    let mut point_input = input.clone();
    let points = range
        .values()
        .into_iter()
        .map(|pressure| -> CalcResult<SensitivityPoint> {
            point_input.wind_pressure_kgf_m2 = pressure;
            let r = calculate(&point_input, settings)?;
            Ok(SensitivityPoint {
                x: pressure,
                required_mm: r.bite_wind_mm,
                design_mm: r.bite_design_mm,
            })
        })
        .collect::<CalcResult<Vec<_>>>()?;

    debug!(label = %input.label, points = points.len(), "bite sweep over wind pressure");

    Ok(SensitivityCurve {
        parameter: SweepParameter::WindPressure,
        current_x: input.wind_pressure_kgf_m2,
        current_design_mm: current.bite_design_mm,
        points,
    })
}

/// Glueline thickness as a function of the temperature differential.
pub fn glueline_vs_delta_t(
    input: &GlazingInput,
    settings: &DesignSettings,
    range: &SweepRange,
) -> CalcResult<SensitivityCurve> {
    range.validate("delta_t_sweep")?;
    let current = calculate(input, settings)?;

    let mut point_input = input.clone();
    let points = range
        .values()
        .into_iter()
        .map(|delta_t| -> CalcResult<SensitivityPoint> {
            point_input.delta_t_c = delta_t;
            let r = calculate(&point_input, settings)?;
            Ok(SensitivityPoint {
                x: delta_t,
                required_mm: r.glueline_required_mm,
                design_mm: r.glueline_design_mm,
            })
        })
        .collect::<CalcResult<Vec<_>>>()?;

    debug!(label = %input.label, points = points.len(), "glueline sweep over delta T");

    Ok(SensitivityCurve {
        parameter: SweepParameter::DeltaT,
        current_x: input.delta_t_c,
        current_design_mm: current.glueline_design_mm,
        points,
    })
}
