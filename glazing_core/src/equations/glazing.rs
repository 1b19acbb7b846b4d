//! # Structural Silicone Joint Formulas
//!
//! Closed-form formulas for sizing a structural silicone glazing joint.
//!
//! ```text
//!        glass lite
//!   ═══════════════════╗
//!                      ║
//!          ┌─────────┐ ║
//!       gt │ silicone│ ║   B  = bite (contact width on the glass)
//!          └─────────┘ ║   gt = glueline thickness
//!          ◄── B ────► ║
//!   ███████████████████║   aluminum frame
//! ```
//!
//! ## Notation
//!
//! - `p` = design wind pressure (kgf/m²)
//! - `a` = short side of the lite (m)
//! - `L` = long side of the lite (m)
//! - `F_a.v` = allowable silicone stress under wind (kgf/cm²)
//! - `F_a.p` = allowable silicone stress under dead load (kgf/cm²)
//! - `F_a.s` = allowable silicone shear stress (kgf/cm²)
//! - `E` = silicone elastic modulus (kgf/cm²)
//! - `ΔT` = service temperature differential (°C)
//!
//! ## References
//!
//! - ASTM C1401: Standard Guide for Structural Sealant Glazing
//! - ASTM C1184: Standard Specification for Structural Silicone Sealants
//! - AAMA CW-13: Structural Sealant Glazing Systems

/// Weight of a rectangular glass lite.
///
/// # Formula
/// W = w · h · (t / 1000) · ρ
///
/// # Arguments
/// * `width_m` - Lite width (m)
/// * `height_m` - Lite height (m)
/// * `thickness_mm` - Nominal glass thickness (mm)
/// * `density_kg_m3` - Glass density (kg/m³)
///
/// # Returns
/// Weight in kgf
///
/// # Example
/// ```rust
/// use glazing_core::equations::glazing::glass_weight_kg;
///
/// let w = glass_weight_kg(1.5, 2.5, 10.0, 2500.0);
/// assert!((w - 93.75).abs() < 1e-9);
/// ```
#[inline]
pub fn glass_weight_kg(width_m: f64, height_m: f64, thickness_mm: f64, density_kg_m3: f64) -> f64 {
    width_m * height_m * (thickness_mm / 1000.0) * density_kg_m3
}

/// Bite required to carry wind load (trapezoidal tributary area).
///
/// The lite spans two-way; with a trapezoidal load distribution the
/// silicone along the long edge carries `p · a / 2` per unit length.
///
/// # Formula
/// B = p · a / (2 · F_a.v)
///
/// With `p` in kgf/m², `a` in m and `F_a.v` in kgf/cm²:
/// B [mm] = (p · a) / (2 · F_a.v · 100) · 10
///
/// # Example
/// ```rust
/// use glazing_core::equations::glazing::bite_for_wind_mm;
///
/// // 185 kgf/m² on a 1.5 m short side, 20 psi allowable
/// let bite = bite_for_wind_mm(185.0, 1.5, 20.0 * 0.070307);
/// assert!((bite - 9.8674).abs() < 1e-3);
/// ```
#[inline]
pub fn bite_for_wind_mm(pressure_kgf_m2: f64, short_side_m: f64, allowable_kgf_cm2: f64) -> f64 {
    (pressure_kgf_m2 * short_side_m) / (2.0 * allowable_kgf_cm2 * 100.0) * 10.0
}

/// Bite required when the silicone carries the lite's self-weight in shear
/// (no setting blocks).
///
/// The weight is shared by the full perimeter of the joint.
///
/// # Formula
/// B = W / (P · F_a.p)
///
/// With `W` in kgf, perimeter `P` in m (converted to cm) and `F_a.p` in kgf/cm²:
/// B [mm] = W / (P · 100 · F_a.p) · 10
///
/// # Example
/// ```rust
/// use glazing_core::equations::glazing::bite_for_self_weight_mm;
///
/// let bite = bite_for_self_weight_mm(93.75, 8.0, 0.070307);
/// assert!((bite - 16.668).abs() < 1e-3);
/// ```
#[inline]
pub fn bite_for_self_weight_mm(weight_kg: f64, perimeter_m: f64, allowable_kgf_cm2: f64) -> f64 {
    let perimeter_cm = perimeter_m * 100.0;
    (weight_kg / (perimeter_cm * allowable_kgf_cm2)) * 10.0
}

/// Perimeter of a rectangular lite (m).
#[inline]
pub fn perimeter_m(width_m: f64, height_m: f64) -> f64 {
    2.0 * (width_m + height_m)
}

/// Differential thermal movement between frame and glass.
///
/// The lite is assumed to be centred on the frame, so each corner moves
/// relative to the frame by the expansion of half the long side.
///
/// # Formula
/// ΔL = |α_frame - α_glass| · ΔT · (L / 2)
///
/// # Arguments
/// * `long_side_m` - Long side of the lite (m)
/// * `alpha_frame` - Frame expansion coefficient (1/°C)
/// * `alpha_glass` - Glass expansion coefficient (1/°C)
/// * `delta_t_c` - Temperature differential (°C)
///
/// # Returns
/// Movement amplitude in mm
///
/// # Example
/// ```rust
/// use glazing_core::equations::glazing::thermal_differential_movement_mm;
///
/// let dt = thermal_differential_movement_mm(2.5, 23.2e-6, 9.0e-6, 50.0);
/// assert!((dt - 0.8875).abs() < 1e-9);
/// ```
#[inline]
pub fn thermal_differential_movement_mm(
    long_side_m: f64,
    alpha_frame: f64,
    alpha_glass: f64,
    delta_t_c: f64,
) -> f64 {
    let half_length_mm = long_side_m * 1000.0 / 2.0;
    let frame_mm = alpha_frame * delta_t_c * half_length_mm;
    let glass_mm = alpha_glass * delta_t_c * half_length_mm;
    (frame_mm - glass_mm).abs()
}

/// Glueline thickness limited by the allowable shear stress.
///
/// Shear modulus is taken as `G = E / 3` (incompressible elastomer), so the
/// shear stress from a movement ΔL across a thickness gt is `G · ΔL / gt`.
///
/// # Formula
/// gt = ΔL · E / (3 · F_a.s)
#[inline]
pub fn glueline_by_shear_mm(movement_mm: f64, modulus_kgf_cm2: f64, allowable_shear_kgf_cm2: f64) -> f64 {
    (movement_mm * modulus_kgf_cm2) / (3.0 * allowable_shear_kgf_cm2)
}

/// Glueline thickness limited by the sealant's movement capability.
///
/// # Formula
/// gt = ΔL / ε
#[inline]
pub fn glueline_by_movement_capability_mm(movement_mm: f64, strain_limit: f64) -> f64 {
    movement_mm / strain_limit
}

/// Required glueline thickness: the larger of the shear and movement
/// capability criteria.
///
/// # Example
/// ```rust
/// use glazing_core::equations::glazing::glueline_thickness_mm;
///
/// // ΔL = 0.8875 mm, E = 1.4 MPa, F_a.s = 20 psi, ε = 25 %
/// let gt = glueline_thickness_mm(0.8875, 1.4 * 10.19716, 20.0 * 0.070307, 0.25);
/// assert!((gt - 3.55).abs() < 1e-9);
/// ```
#[inline]
pub fn glueline_thickness_mm(
    movement_mm: f64,
    modulus_kgf_cm2: f64,
    allowable_shear_kgf_cm2: f64,
    strain_limit: f64,
) -> f64 {
    glueline_by_shear_mm(movement_mm, modulus_kgf_cm2, allowable_shear_kgf_cm2)
        .max(glueline_by_movement_capability_mm(movement_mm, strain_limit))
}

/// Clamp a required joint dimension to the configured minimum.
///
/// # Example
/// ```rust
/// use glazing_core::equations::glazing::apply_minimum;
///
/// assert_eq!(apply_minimum(3.55, 6.35), 6.35);
/// assert_eq!(apply_minimum(9.87, 6.35), 9.87);
/// ```
#[inline]
pub fn apply_minimum(value_mm: f64, minimum_mm: f64) -> f64 {
    value_mm.max(minimum_mm)
}
