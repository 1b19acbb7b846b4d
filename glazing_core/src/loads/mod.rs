//! Loads acting on glazed lites
//!
//! The design wind pressure is usually given directly by the facade
//! specification. When it is not, [`wind`] derives it from the basic wind
//! speed and the building enclosure classification per ASCE 7-22.
//!
//! # Example
//!
//! ```
//! use glazing_core::loads::{EnclosureClass, WindInput};
//!
//! let wind = WindInput::new(40.0, -1.4, EnclosureClass::Enclosed);
//! let result = glazing_core::loads::wind::calculate(&wind).unwrap();
//! assert!(result.design_pressure_kgf_m2 > 0.0);
//! ```

pub mod wind;

pub use wind::{EnclosureClass, WindInput, WindResult};
