//! # Equation Registry
//!
//! Central registry of every formula used in glazing calculations.
//! Each equation has metadata including code references, formulas, and
//! variable definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for calculation appendices and audit trails
//! - Serialization support for JSON export
//!
//! ## Usage
//!
//! ```rust
//! use glazing_core::equations::registry::{Equation, EquationUsage};
//!
//! // Track equation usage during calculation
//! let usage = EquationUsage::new(Equation::BiteWindLoad, "Lite L-1");
//!
//! // Get metadata for the appendix
//! let meta = Equation::BiteWindLoad.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a standard or guide.
///
/// All equations should cite their source for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// ASTM C1401 - Standard Guide for Structural Sealant Glazing
    AstmC1401 { year: u16, topic: &'static str },
    /// ASTM C1184 - Standard Specification for Structural Silicone Sealants
    AstmC1184 { year: u16, topic: &'static str },
    /// AAMA CW-13 - Structural Sealant Glazing Systems
    AamaCw13 { topic: &'static str },
    /// ASCE 7 - Minimum Design Loads for Buildings
    ASCE7 { year: u16, section: &'static str },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::AstmC1401 { year, topic } => {
                format!("ASTM C1401-{:02}, {}", year % 100, topic)
            }
            CodeReference::AstmC1184 { year, topic } => {
                format!("ASTM C1184-{:02}, {}", year % 100, topic)
            }
            CodeReference::AamaCw13 { topic } => format!("AAMA CW-13, {}", topic),
            CodeReference::ASCE7 { year, section } => {
                format!("ASCE 7-{} Section {}", year % 100, section)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::AstmC1401 { .. } => "ASTM C1401",
            CodeReference::AstmC1184 { .. } => "ASTM C1184",
            CodeReference::AamaCw13 { .. } => "AAMA CW-13",
            CodeReference::ASCE7 { .. } => "ASCE 7",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the appendix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Wind pressure derivation
    WindLoads,
    /// Glass self-weight
    DeadLoads,
    /// psi / MPa to kgf/cm²
    UnitConversions,
    /// Structural bite
    Bite,
    /// Differential thermal movement
    ThermalMovement,
    /// Glueline thickness
    Glueline,
    /// Minimums and utilization
    DesignChecks,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::WindLoads => "Wind Loads",
            EquationCategory::DeadLoads => "Dead Loads",
            EquationCategory::UnitConversions => "Unit Conversions",
            EquationCategory::Bite => "Structural Bite",
            EquationCategory::ThermalMovement => "Thermal Movement",
            EquationCategory::Glueline => "Glueline Thickness",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }

    /// Sort order for the appendix (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::WindLoads => 1,
            EquationCategory::DeadLoads => 2,
            EquationCategory::UnitConversions => 3,
            EquationCategory::Bite => 4,
            EquationCategory::ThermalMovement => 5,
            EquationCategory::Glueline => 6,
            EquationCategory::DesignChecks => 7,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "B", "gt", "p")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "mm", "kgf/m²")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for an equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Bite for Wind Load")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text (human-readable)
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping in appendix
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used in glazing calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// q = 0.613 Kz Kzt Kd V²
    VelocityPressure,
    /// p = q (|GCp| + GCpi)
    CladdingDesignPressure,
    /// W = w h t ρ
    GlassWeight,
    /// F [kgf/cm²] = 0.070307 F [psi], E [kgf/cm²] = 10.19716 E [MPa]
    StressConversion,
    /// B = p a / (2 F_a.v)
    BiteWindLoad,
    /// B = W / (P F_a.p)
    BiteSelfWeight,
    /// ΔL = |α_f - α_g| ΔT L/2
    ThermalDifferentialMovement,
    /// gt = ΔL E / (3 F_a.s)
    GluelineShearStress,
    /// gt = ΔL / ε
    GluelineMovementCapability,
    /// B_design = max(B_wind, B_weight, B_min)
    DesignBite,
    /// gt_design = max(gt_shear, gt_capacity, gt_min)
    DesignGlueline,
    /// required / provided <= 1.0
    JointUtilization,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::VelocityPressure => EquationMetadata {
                name: "Velocity Pressure",
                description: "Velocity pressure at the height of the glazed element",
                formula_plain: "q = 0.613 * Kz * Kzt * Kd * V^2",
                reference: CodeReference::ASCE7 { year: 2022, section: "26.10" },
                variables: vec![
                    Variable::new("q", "Velocity pressure", "Pa"),
                    Variable::new("V", "Basic wind speed", "m/s"),
                    Variable::new("Kz", "Velocity pressure exposure coefficient", "-"),
                    Variable::new("Kzt", "Topographic factor", "-"),
                    Variable::new("Kd", "Wind directionality factor", "-"),
                ],
                assumptions: vec!["Ground elevation factor Ke = 1.0"],
                category: EquationCategory::WindLoads,
                source_module: "equations/wind.rs",
                source_function: "velocity_pressure_pa",
            },

            Equation::CladdingDesignPressure => EquationMetadata {
                name: "Components and Cladding Design Pressure",
                description: "Governing suction on the lite combining external and internal pressure",
                formula_plain: "p = q * (|GCp| + GCpi)",
                reference: CodeReference::ASCE7 { year: 2022, section: "30.3" },
                variables: vec![
                    Variable::new("p", "Design wind pressure", "Pa"),
                    Variable::new("GCp", "External pressure coefficient", "-"),
                    Variable::new("GCpi", "Internal pressure coefficient (enclosure class)", "-"),
                ],
                assumptions: vec![
                    "Same velocity pressure used for external and internal terms",
                    "Internal pressurization adds to external suction",
                ],
                category: EquationCategory::WindLoads,
                source_module: "equations/wind.rs",
                source_function: "cladding_design_pressure",
            },

            Equation::GlassWeight => EquationMetadata {
                name: "Glass Lite Weight",
                description: "Self-weight of a rectangular monolithic lite",
                formula_plain: "W = w * h * (t / 1000) * rho",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("W", "Lite weight", "kgf"),
                    Variable::new("w", "Lite width", "m"),
                    Variable::new("h", "Lite height", "m"),
                    Variable::new("t", "Nominal glass thickness", "mm"),
                    Variable::new("rho", "Glass density", "kg/m³"),
                ],
                assumptions: vec!["Nominal thickness used for weight"],
                category: EquationCategory::DeadLoads,
                source_module: "equations/glazing.rs",
                source_function: "glass_weight_kg",
            },

            Equation::StressConversion => EquationMetadata {
                name: "Stress Unit Conversion",
                description: "Silicone allowables and modulus converted to kgf/cm² for the sizing formulas",
                formula_plain: "F [kgf/cm²] = 0.070307 * F [psi], E [kgf/cm²] = 10.19716 * E [MPa]",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("F", "Allowable silicone stress", "psi"),
                    Variable::new("E", "Silicone elastic modulus", "MPa"),
                ],
                assumptions: vec!["Standard gravity 9.80665 m/s²"],
                category: EquationCategory::UnitConversions,
                source_module: "units.rs",
                source_function: "KgfPerCm2::from",
            },

            Equation::BiteWindLoad => EquationMetadata {
                name: "Bite for Wind Load",
                description: "Structural bite required to transfer wind suction to the frame",
                formula_plain: "B = (p * a) / (2 * F_av * 100) * 10",
                reference: CodeReference::AstmC1401 { year: 2014, topic: "Structural bite, trapezoidal load" },
                variables: vec![
                    Variable::new("B", "Required bite", "mm"),
                    Variable::new("p", "Design wind pressure", "kgf/m²"),
                    Variable::new("a", "Short side of the lite", "m"),
                    Variable::new("F_av", "Allowable silicone stress under wind", "kgf/cm²"),
                ],
                assumptions: vec![
                    "Four-sided support",
                    "Trapezoidal tributary area on the long edge",
                    "Glass is rigid relative to the silicone",
                ],
                category: EquationCategory::Bite,
                source_module: "equations/glazing.rs",
                source_function: "bite_for_wind_mm",
            },

            Equation::BiteSelfWeight => EquationMetadata {
                name: "Bite for Self-Weight",
                description: "Structural bite required when the silicone carries the lite weight in shear",
                formula_plain: "B = W / (2 * (w + h) * 100 * F_ap) * 10",
                reference: CodeReference::AamaCw13 { topic: "Dead load design" },
                variables: vec![
                    Variable::new("B", "Required bite", "mm"),
                    Variable::new("W", "Lite weight", "kgf"),
                    Variable::new("w", "Lite width", "m"),
                    Variable::new("h", "Lite height", "m"),
                    Variable::new("F_ap", "Allowable silicone stress under dead load", "kgf/cm²"),
                ],
                assumptions: vec![
                    "No setting blocks",
                    "Weight shared uniformly by the full joint perimeter",
                ],
                category: EquationCategory::Bite,
                source_module: "equations/glazing.rs",
                source_function: "bite_for_self_weight_mm",
            },

            Equation::ThermalDifferentialMovement => EquationMetadata {
                name: "Differential Thermal Movement",
                description: "Relative movement between frame and glass at the lite corner",
                formula_plain: "dL = |alpha_f - alpha_g| * dT * (L * 1000 / 2)",
                reference: CodeReference::AstmC1401 { year: 2014, topic: "Thermal movement" },
                variables: vec![
                    Variable::new("dL", "Differential movement", "mm"),
                    Variable::new("alpha_f", "Frame expansion coefficient", "1/°C"),
                    Variable::new("alpha_g", "Glass expansion coefficient", "1/°C"),
                    Variable::new("dT", "Temperature differential", "°C"),
                    Variable::new("L", "Long side of the lite", "m"),
                ],
                assumptions: vec![
                    "Lite centred on the frame (movement referenced to L/2)",
                    "Glass and frame at the same temperature change",
                ],
                category: EquationCategory::ThermalMovement,
                source_module: "equations/glazing.rs",
                source_function: "thermal_differential_movement_mm",
            },

            Equation::GluelineShearStress => EquationMetadata {
                name: "Glueline Thickness by Shear Stress",
                description: "Thickness keeping silicone shear stress from thermal movement within the allowable",
                formula_plain: "gt = dL * E / (3 * F_as)",
                reference: CodeReference::AstmC1401 { year: 2014, topic: "Glueline thickness" },
                variables: vec![
                    Variable::new("gt", "Glueline thickness", "mm"),
                    Variable::new("dL", "Differential movement", "mm"),
                    Variable::new("E", "Silicone elastic modulus", "kgf/cm²"),
                    Variable::new("F_as", "Allowable silicone shear stress", "kgf/cm²"),
                ],
                assumptions: vec!["Shear modulus G = E / 3"],
                category: EquationCategory::Glueline,
                source_module: "equations/glazing.rs",
                source_function: "glueline_by_shear_mm",
            },

            Equation::GluelineMovementCapability => EquationMetadata {
                name: "Glueline Thickness by Movement Capability",
                description: "Thickness keeping shear strain within the sealant's movement capability",
                formula_plain: "gt = dL / eps",
                reference: CodeReference::AstmC1184 { year: 2018, topic: "Movement capability" },
                variables: vec![
                    Variable::new("gt", "Glueline thickness", "mm"),
                    Variable::new("dL", "Differential movement", "mm"),
                    Variable::new("eps", "Movement capability (strain limit)", "-"),
                ],
                assumptions: vec!["Pure shear deformation of the joint"],
                category: EquationCategory::Glueline,
                source_module: "equations/glazing.rs",
                source_function: "glueline_by_movement_capability_mm",
            },

            Equation::DesignBite => EquationMetadata {
                name: "Design Bite",
                description: "Governing bite from wind and self-weight, not less than the minimum",
                formula_plain: "B_design = max(B_wind, B_weight, B_min)",
                reference: CodeReference::AstmC1401 { year: 2014, topic: "Minimum joint dimensions" },
                variables: vec![
                    Variable::new("B_design", "Design bite", "mm"),
                    Variable::new("B_min", "Minimum joint dimension (typically 6.35)", "mm"),
                ],
                assumptions: vec!["B_weight = 0 when setting blocks carry the lite"],
                category: EquationCategory::DesignChecks,
                source_module: "calculations/glazing.rs",
                source_function: "calculate",
            },

            Equation::DesignGlueline => EquationMetadata {
                name: "Design Glueline Thickness",
                description: "Governing glueline thickness, not less than the minimum",
                formula_plain: "gt_design = max(gt_shear, gt_capacity, gt_min)",
                reference: CodeReference::AstmC1401 { year: 2014, topic: "Minimum joint dimensions" },
                variables: vec![
                    Variable::new("gt_design", "Design glueline thickness", "mm"),
                    Variable::new("gt_min", "Minimum joint dimension (typically 6.35)", "mm"),
                ],
                assumptions: vec!["Same minimum applied to bite and glueline"],
                category: EquationCategory::DesignChecks,
                source_module: "calculations/glazing.rs",
                source_function: "calculate",
            },

            Equation::JointUtilization => EquationMetadata {
                name: "Joint Utilization",
                description: "Ratio of required to provided joint dimension",
                formula_plain: "U = required / provided <= 1.0",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("U", "Utilization ratio", "-"),
                    Variable::new("required", "Design bite or glueline", "mm"),
                    Variable::new("provided", "Detailed bite or glueline", "mm"),
                ],
                assumptions: vec!["Checked only when provided dimensions are given"],
                category: EquationCategory::DesignChecks,
                source_module: "calculations/glazing.rs",
                source_function: "calculate",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in appendix order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![
            WindLoads,
            DeadLoads,
            UnitConversions,
            Bite,
            ThermalMovement,
            Glueline,
            DesignChecks,
        ];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::VelocityPressure,
    Equation::CladdingDesignPressure,
    Equation::GlassWeight,
    Equation::StressConversion,
    Equation::BiteWindLoad,
    Equation::BiteSelfWeight,
    Equation::ThermalDifferentialMovement,
    Equation::GluelineShearStress,
    Equation::GluelineMovementCapability,
    Equation::DesignBite,
    Equation::DesignGlueline,
    Equation::JointUtilization,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where/why it was used (e.g., "Wind bite")
    pub context: String,
    /// Optional: the lite label this equation was applied to
    pub member_label: Option<String>,
}

impl EquationUsage {
    /// Create a new equation usage record
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
            member_label: None,
        }
    }

    /// Create usage record with a lite label
    pub fn for_member(equation: Equation, context: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
            member_label: Some(label.into()),
        }
    }
}

/// Collector for equation usage during a calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Record equation usage for a specific lite
    pub fn record_for_member(&mut self, equation: Equation, context: impl Into<String>, label: impl Into<String>) {
        self.usages.push(EquationUsage::for_member(equation, context, label));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Get unique equations used (deduplicated, first-use order)
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group usages by equation
    pub fn by_equation(&self) -> HashMap<Equation, Vec<&EquationUsage>> {
        let mut map: HashMap<Equation, Vec<&EquationUsage>> = HashMap::new();
        for usage in &self.usages {
            map.entry(usage.equation).or_default().push(usage);
        }
        map
    }

    /// Group unique equations by category, in appendix order
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }

    /// Merge another tracker into this one
    pub fn merge(&mut self, other: EquationTracker) {
        self.usages.extend(other.usages);
    }

    /// Generate a markdown "List of Equations" for the recorded usages.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glazing_core::equations::registry::{Equation, EquationTracker};
    ///
    /// let mut tracker = EquationTracker::new();
    /// tracker.record_for_member(Equation::BiteWindLoad, "Wind bite", "L-1");
    ///
    /// let md = tracker.generate_appendix_markdown();
    /// assert!(md.contains("Bite for Wind Load"));
    /// assert!(md.contains("L-1"));
    /// ```
    pub fn generate_appendix_markdown(&self) -> String {
        let mut output = String::from("## List of Equations\n\n");

        let by_category = self.by_category();
        if by_category.is_empty() {
            output.push_str("_No equations recorded._\n");
            return output;
        }

        let usage_by_eq = self.by_equation();

        for (category, equations) in by_category {
            output.push_str(&format!("### {}\n\n", category.display_name()));

            for equation in equations {
                let meta = equation.metadata();
                output.push_str(&format!("- **{}**: `{}` ({})", meta.name, meta.formula_plain, meta.reference.citation()));

                if let Some(usages) = usage_by_eq.get(&equation) {
                    let mut labels: Vec<&str> = usages
                        .iter()
                        .filter_map(|u| u.member_label.as_deref())
                        .collect();
                    labels.sort();
                    labels.dedup();
                    if !labels.is_empty() {
                        output.push_str(&format!(" - applied to {}", labels.join(", ")));
                    }
                }
                output.push('\n');
            }
            output.push('\n');
        }

        output
    }
}

// ============================================================================
// Markdown Generation for the Equations Reference
// ============================================================================

/// Generate the complete equations reference as markdown.
///
/// # Example
///
/// ```rust
/// use glazing_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Glazing Equations Reference"));
/// assert!(markdown.contains("Structural Bite"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(r#"# Glazing Equations Reference

> **Generated from the equation registry.**
>
> Regenerate with: `glazing equations`

This document lists every formula used to size structural silicone joints.
Each equation includes its formula, reference, source location, and assumptions.

## Working Units

| Quantity | Unit |
|----------|------|
| Panel dimensions | m |
| Glass thickness, bite, glueline, movement | mm |
| Wind pressure | kgf/m² |
| Silicone stresses and modulus | kgf/cm² (entered as psi / MPa) |
| Temperature differential | °C |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 12);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_module.is_empty(), "Equation {:?} missing source_module", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source_function", eq);
        }

        let gt = Equation::GluelineShearStress.metadata();
        assert!(gt.formula_plain.contains("3 * F_as"), "Glueline shear formula wrong");
    }

    #[test]
    fn test_code_reference_citation() {
        let asce = CodeReference::ASCE7 { year: 2022, section: "26.10" };
        assert_eq!(asce.citation(), "ASCE 7-22 Section 26.10");

        let astm = CodeReference::AstmC1401 { year: 2014, topic: "Thermal movement" };
        assert_eq!(astm.citation(), "ASTM C1401-14, Thermal movement");
        assert_eq!(astm.short_form(), "ASTM C1401");
    }

    #[test]
    fn test_every_category_is_populated() {
        for cat in Equation::all_categories() {
            assert!(!Equation::in_category(cat).is_empty(), "{:?} is empty", cat);
        }
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Equation::all_categories();
        let orders: Vec<u8> = cats.iter().map(|c| c.sort_order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::BiteWindLoad, "L-1");
        tracker.record(Equation::GluelineShearStress, "L-1");
        tracker.record(Equation::BiteWindLoad, "L-2");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(tracker.unique_equations(), vec![Equation::BiteWindLoad, Equation::GluelineShearStress]);

        let by_cat = tracker.by_category();
        assert_eq!(by_cat.len(), 2);
        assert_eq!(by_cat[0].0, EquationCategory::Bite);
        assert_eq!(by_cat[1].0, EquationCategory::Glueline);
    }

    #[test]
    fn test_merge() {
        let mut a = EquationTracker::new();
        a.record(Equation::GlassWeight, "a");
        let mut b = EquationTracker::new();
        b.record(Equation::DesignBite, "b");
        a.merge(b);
        assert_eq!(a.usages().len(), 2);
    }

    #[test]
    fn test_appendix_markdown() {
        let mut tracker = EquationTracker::new();
        tracker.record_for_member(Equation::DesignBite, "Design bite", "L-2");
        tracker.record_for_member(Equation::DesignBite, "Design bite", "L-1");
        tracker.record_for_member(Equation::ThermalDifferentialMovement, "Movement", "L-1");

        let md = tracker.generate_appendix_markdown();
        assert!(md.contains("### Thermal Movement"));
        assert!(md.contains("### Design Checks"));
        assert!(md.contains("applied to L-1, L-2"));
        // Thermal movement sorts before design checks
        assert!(md.find("Thermal Movement").unwrap() < md.find("Design Checks").unwrap());
    }

    #[test]
    fn test_appendix_empty_tracker() {
        let md = EquationTracker::new().generate_appendix_markdown();
        assert!(md.contains("No equations recorded"));
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# Glazing Equations Reference"));
        assert!(markdown.contains("## Wind Loads"));
        assert!(markdown.contains("## Structural Bite"));
        assert!(markdown.contains("## Glueline Thickness"));
        assert!(markdown.contains("### Bite for Wind Load"));
        assert!(markdown.contains("`gt = dL / eps`"));
        assert!(markdown.contains("ASCE 7-22"));
        assert!(markdown.contains("equations/glazing.rs"));
        assert!(markdown.contains("**Total Equations:** 12"));
        assert!(markdown.contains("**Categories:** 7"));
    }
}
