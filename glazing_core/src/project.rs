//! # Project Data Structures
//!
//! The `Project` struct groups the lites of one facade job with the design
//! settings they share. Projects are stored as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: DesignSettings (minimum joint, default materials, units)
//! └── items: HashMap<Uuid, CalculationItem> (all lites)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use glazing_core::calculations::{CalculationItem, GlazingInput};
//! use glazing_core::project::Project;
//!
//! let mut project = Project::new("Jane Engineer", "26-042", "ACME Facades");
//! project.add_item(CalculationItem::Glazing(GlazingInput::new("L-1", 1.5, 2.5, 10.0, 185.0, 50.0)));
//!
//! let outcomes = project.calculate_all();
//! assert!(outcomes[0].result.is_ok());
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::calculations::{glazing, CalculationItem, GlazingResult};
use crate::errors::{CalcError, CalcResult};
use crate::settings::DesignSettings;

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Design settings applied to every lite
    #[serde(default)]
    pub settings: DesignSettings,

    /// All calculation items, keyed by UUID
    #[serde(default)]
    pub items: HashMap<Uuid, CalculationItem>,
}

/// Outcome of evaluating one project item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemOutcome {
    /// Item identifier
    pub id: Uuid,
    /// Item label
    pub label: String,
    /// Calculation result, or the error that stopped it
    pub result: Result<GlazingResult, CalcError>,
}

impl Project {
    /// Create a new empty project with default settings.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glazing_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "26-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// ```
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: DesignSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Parse a project from JSON and check its schema version and settings.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let project: Project = serde_json::from_str(json)
            .map_err(|e| CalcError::serialization(format!("Invalid project JSON: {}", e)))?;
        validate_version(&project.meta.version)?;
        project.settings.validate()?;
        Ok(project)
    }

    /// Add a calculation item to the project.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a calculation item by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a calculation item by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Get a mutable reference to a calculation item by UUID.
    ///
    /// Marks the project as modified when the item exists.
    pub fn get_item_mut(&mut self, id: &Uuid) -> Option<&mut CalculationItem> {
        if self.items.contains_key(id) {
            self.meta.modified = Utc::now();
            self.items.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Evaluate every item with the project settings.
    ///
    /// A failing item does not stop the others. Outcomes are sorted by
    /// label, then by id for equal labels.
    pub fn calculate_all(&self) -> Vec<ItemOutcome> {
        let mut outcomes: Vec<ItemOutcome> = self
            .items
            .iter()
            .map(|(id, item)| {
                let result = match item {
                    CalculationItem::Glazing(input) => glazing::calculate(input, &self.settings),
                };
                if let Err(e) = &result {
                    warn!(label = item.label(), code = e.error_code(), "item failed: {}", e);
                }
                ItemOutcome {
                    id: *id,
                    label: item.label().to_string(),
                    result,
                }
            })
            .collect();

        outcomes.sort_by(|a, b| a.label.cmp(&b.label).then(a.id.cmp(&b.id)));
        debug!(job = %self.meta.job_id, items = outcomes.len(), "project evaluated");
        outcomes
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    #[serde(default)]
    pub engineer: String,

    /// Job/project number
    #[serde(default)]
    pub job_id: String,

    /// Client name
    #[serde(default)]
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Validate that a file version is compatible with the current schema.
///
/// Major versions must match. While the schema is 0.x a file with a newer
/// minor version is rejected as well.
pub fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let parse = |v: &str| -> Option<Vec<u32>> { v.split('.').map(|p| p.parse().ok()).collect() };
    let file_parts = parse(file_version).ok_or_else(mismatch)?;
    let current_parts = parse(SCHEMA_VERSION).ok_or_else(mismatch)?;

    match (file_parts.first(), current_parts.first()) {
        (Some(file_major), Some(current_major)) if file_major == current_major => {}
        _ => return Err(mismatch()),
    }

    if current_parts[0] == 0 {
        if let (Some(file_minor), Some(current_minor)) = (file_parts.get(1), current_parts.get(1)) {
            if file_minor > current_minor {
                return Err(mismatch());
            }
        }
    }

    Ok(())
}
