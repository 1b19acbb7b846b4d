//! # Wind Pressure Formulas (Components and Cladding)
//!
//! Formulas for deriving the design wind pressure on a glass lite from the
//! basic wind speed, following ASCE 7-22 Chapters 26 and 30.
//!
//! ## Sign Conventions
//!
//! - **Pressure**: positive acting toward the surface, negative (suction) away
//! - Design pressures returned here are magnitudes of the governing suction,
//!   which is what loads the structural silicone in tension
//!
//! ## References
//!
//! - ASCE 7-22 Eq. 26.10-1: velocity pressure
//! - ASCE 7-22 Eq. 30.3-1: design pressure for components and cladding

/// Velocity pressure at the height of the lite.
///
/// # Formula
/// q = 0.613 · K_z · K_zt · K_d · V²
///
/// # Arguments
/// * `wind_speed_m_s` - Basic wind speed V (m/s)
/// * `kz` - Velocity pressure exposure coefficient
/// * `kzt` - Topographic factor
/// * `kd` - Wind directionality factor
///
/// # Returns
/// Velocity pressure in Pa
///
/// # Example
/// ```rust
/// use glazing_core::equations::wind::velocity_pressure_pa;
///
/// let q = velocity_pressure_pa(40.0, 1.0, 1.0, 1.0);
/// assert!((q - 980.8).abs() < 1e-9);
/// ```
#[inline]
pub fn velocity_pressure_pa(wind_speed_m_s: f64, kz: f64, kzt: f64, kd: f64) -> f64 {
    0.613 * kz * kzt * kd * wind_speed_m_s * wind_speed_m_s
}

/// Governing suction on a cladding element.
///
/// External suction and internal pressurization add up, so the worst case
/// combines the magnitude of the external coefficient with the positive
/// internal coefficient.
///
/// # Formula
/// p = q · (|GC_p| + GC_pi)
///
/// # Returns
/// Design pressure in the units of `q`
#[inline]
pub fn cladding_design_pressure(q: f64, gcp: f64, gcpi: f64) -> f64 {
    q * (gcp.abs() + gcpi.abs())
}
