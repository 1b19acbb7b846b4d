//! # Materials
//!
//! Material definitions for structural silicone glazing: the glass lite,
//! the supporting frame, and the structural silicone itself.
//!
//! ## Example
//!
//! ```rust
//! use glazing_core::materials::{FrameMaterial, GlassMaterial, SiliconeProperties};
//!
//! let glass = GlassMaterial::default();
//! let frame = FrameMaterial::Aluminum6063T6;
//!
//! // Differential expansion coefficient between frame and glass
//! let d_alpha = (frame.alpha_per_c() - glass.alpha_per_c).abs();
//! assert!((d_alpha - 14.2e-6).abs() < 1e-12);
//!
//! let silicone = SiliconeProperties::default();
//! assert_eq!(silicone.wind_stress_psi, 20.0);
//! ```

pub mod frame;
pub mod glass;
pub mod silicone;

pub use frame::FrameMaterial;
pub use glass::GlassMaterial;
pub use silicone::SiliconeProperties;
