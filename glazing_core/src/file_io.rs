//! # File I/O Module
//!
//! Loads settings, single lites, and projects from JSON files. Every
//! loader validates what it reads, so a value that parses but would fail
//! a calculation is reported with the file it came from.
//!
//! ## Example
//!
//! ```rust,no_run
//! use glazing_core::file_io::{load_project, load_settings};
//! use std::path::Path;
//!
//! let settings = load_settings(Path::new("office.json"))?;
//! let project = load_project(Path::new("tower-a.json"))?;
//! println!("{} lites, minimum joint {} mm", project.item_count(), settings.minimum_joint_mm);
//! # Ok::<(), glazing_core::errors::CalcError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::calculations::GlazingInput;
use crate::errors::{CalcError, CalcResult};
use crate::project::{validate_version, Project};
use crate::settings::DesignSettings;

/// Read and parse a JSON file.
fn read_json<T: DeserializeOwned>(path: &Path) -> CalcResult<T> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let value = serde_json::from_str(&contents)
        .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;

    debug!(path = %path.display(), bytes = contents.len(), "loaded JSON file");
    Ok(value)
}

/// Load design settings. Fields missing from the file keep their defaults.
pub fn load_settings(path: &Path) -> CalcResult<DesignSettings> {
    let settings: DesignSettings = read_json(path)?;
    settings.validate()?;
    Ok(settings)
}

/// Load a single lite.
pub fn load_glazing_input(path: &Path) -> CalcResult<GlazingInput> {
    let input: GlazingInput = read_json(path)?;
    input.validate()?;
    Ok(input)
}

/// Load a project and check its schema version.
///
/// Items are not validated here; invalid items are reported per item by
/// [`Project::calculate_all`].
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let project: Project = read_json(path)?;
    validate_version(&project.meta.version)?;
    project.settings.validate()?;
    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::CalculationItem;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("glazing_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_load_settings() {
        let path = temp_path("settings");
        fs::write(&path, r#"{ "minimum_joint_mm": 9.5, "units": "imperial" }"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.minimum_joint_mm, 9.5);
        assert_eq!(settings.units, crate::units::UnitSystem::Imperial);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let path = temp_path("bad_settings");
        fs::write(&path, r#"{ "minimum_joint_mm": -1.0 }"#).unwrap();
        assert_eq!(load_settings(&path).unwrap_err().error_code(), "INVALID_INPUT");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_glazing_input() {
        let path = temp_path("lite");
        let input = GlazingInput::new("L-7", 1.2, 3.0, 12.0, 220.0, 45.0).with_self_weight(true);
        fs::write(&path, serde_json::to_string(&input).unwrap()).unwrap();

        let loaded = load_glazing_input(&path).unwrap();
        assert_eq!(loaded.label, "L-7");
        assert_eq!(loaded.thickness_mm, 12.0);
        assert!(loaded.carries_self_weight);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_loaded_lite_uses_settings_materials() {
        let lite_path = temp_path("bare_lite");
        let settings_path = temp_path("stiff_settings");
        fs::write(&lite_path, serde_json::to_string(&GlazingInput::new("L-8", 1.5, 2.5, 10.0, 185.0, 50.0)).unwrap())
            .unwrap();
        fs::write(&settings_path, r#"{ "silicone": { "wind_stress_psi": 40.0 } }"#).unwrap();

        let input = load_glazing_input(&lite_path).unwrap();
        let settings = load_settings(&settings_path).unwrap();
        assert!(input.silicone.is_none());
        let result = crate::calculations::glazing::calculate(&input, &settings).unwrap();
        assert!((result.bite_wind_mm - 4.9337).abs() < 1e-3);

        fs::remove_file(&lite_path).ok();
        fs::remove_file(&settings_path).ok();
    }

    #[test]
    fn test_save_and_load_project() {
        let path = temp_path("project");
        let mut project = Project::new("Test Engineer", "26-999", "Test Client");
        project.add_item(CalculationItem::Glazing(GlazingInput::new("L-1", 1.5, 2.5, 10.0, 185.0, 50.0)));
        fs::write(&path, serde_json::to_string_pretty(&project).unwrap()).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.meta.engineer, "Test Engineer");
        assert_eq!(loaded.item_count(), 1);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file() {
        let err = load_project(&temp_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_malformed_json() {
        let path = temp_path("malformed");
        fs::write(&path, "{ \"meta\": ").unwrap();
        assert_eq!(load_project(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");
        fs::remove_file(&path).ok();
    }
}
