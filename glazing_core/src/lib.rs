//! # glazing_core - Structural Silicone Glazing Calculation Engine
//!
//! `glazing_core` sizes the structural silicone joint of a glass lite
//! bonded to its frame. Given lite geometry, wind pressure, the frame/glass
//! temperature differential, and the silicone allowables, it returns the
//! required bite (adhesive contact width) and glueline thickness.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs, results and settings implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Traceable**: Every formula is registered with its code reference
//!
//! ## Quick Start
//!
//! ```rust
//! use glazing_core::calculations::glazing::{calculate, GlazingInput};
//! use glazing_core::settings::DesignSettings;
//!
//! let input = GlazingInput::new("L-1", 1.5, 2.5, 10.0, 185.0, 50.0);
//! let result = calculate(&input, &DesignSettings::default()).unwrap();
//!
//! assert!((result.bite_design_mm - 9.87).abs() < 0.01);
//! assert_eq!(result.glueline_design_mm, 6.35);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Bite and glueline calculation, sensitivity sweeps
//! - [`loads`] - Wind pressure from wind speed and enclosure classification
//! - [`equations`] - Formulas and the equation registry
//! - [`materials`] - Glass, frame and silicone properties
//! - [`settings`] - Design settings (minimum joint, defaults, units)
//! - [`project`] - Project container and metadata
//! - [`units`] - Type-safe unit wrappers and conversions
//! - [`errors`] - Structured error types
//! - [`file_io`] - JSON loaders for settings, lites and projects

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod materials;
pub mod project;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, GlazingInput, GlazingResult};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_glazing_input, load_project, load_settings};
pub use project::{Project, ProjectMetadata};
pub use settings::DesignSettings;
