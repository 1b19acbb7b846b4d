//! # Glazing CLI
//!
//! Command line front end for glazing_core: sizes structural silicone
//! joints, runs sensitivity sweeps, derives wind pressure, and evaluates
//! project files. Results print as text or, with `--json`, as JSON for
//! scripting.

mod commands;
mod logging;
mod report;

use anyhow::{Context, Result};
use glazing_core::calculations::{glazing, sensitivity};
use glazing_core::equations::{generate_equations_markdown, EquationTracker};
use glazing_core::errors::CalcError;
use glazing_core::loads::wind;
use glazing_core::settings::DesignSettings;
use glazing_core::units::UnitSystem;
use glazing_core::{GlazingInput, GlazingResult};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use commands::{CalcArgs, CommandLine, Commands, PanelArgs, SweepKind};

fn load_settings(cli: &CommandLine) -> Result<DesignSettings> {
    let mut settings = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading settings");
            glazing_core::file_io::load_settings(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?
        }
        None => DesignSettings::default(),
    };
    if let Some(units) = cli.units {
        settings.units = units.into();
    }
    Ok(settings)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Panel input, with the wind pressure derived from wind speed when given
fn panel_input(
    panel: &PanelArgs,
    settings: &DesignSettings,
    tracker: &mut EquationTracker,
) -> Result<(GlazingInput, Option<wind::WindResult>)> {
    let wind = match panel.wind.to_input() {
        Some(w) => Some(wind::calculate_with_tracker(&w, tracker)?),
        None => None,
    };
    let input = panel.to_input(settings, wind.map(|w| w.design_pressure_kgf_m2))?;
    debug!(label = %input.label, pressure = input.wind_pressure_kgf_m2, "panel input");
    Ok((input, wind))
}

/// A sized lite with everything needed to report it
struct CalcRun {
    input: GlazingInput,
    result: GlazingResult,
    wind: Option<wind::WindResult>,
    tracker: EquationTracker,
}

impl CalcRun {
    fn new(args: &CalcArgs, settings: &DesignSettings) -> Result<Self> {
        let mut tracker = EquationTracker::new();
        let (input, wind) = panel_input(&args.panel, settings, &mut tracker)?;
        let result = glazing::calculate_with_tracker(&input, settings, &mut tracker)?;
        Ok(CalcRun { input, result, wind, tracker })
    }

    fn to_json(&self, equations: bool) -> Result<serde_json::Value> {
        let mut value = json!({ "input": self.input, "result": self.result });
        if let Some(w) = &self.wind {
            value["wind"] = serde_json::to_value(w)?;
        }
        if equations {
            value["equations"] = json!(self.tracker.generate_appendix_markdown());
        }
        Ok(value)
    }
}

fn run(cli: &CommandLine, settings: &DesignSettings) -> Result<()> {
    let units: UnitSystem = settings.units;

    match &cli.command {
        Commands::Calc(args) => {
            let calc = CalcRun::new(args, settings)?;
            if cli.json {
                print_json(&calc.to_json(args.equations)?)
            } else {
                report::print_glazing(&calc.input, &calc.result, settings);
                if args.equations {
                    println!();
                    println!("{}", calc.tracker.generate_appendix_markdown());
                }
                Ok(())
            }
        }
        Commands::Sweep { kind } => {
            let args = match kind {
                SweepKind::Pressure(a) | SweepKind::DeltaT(a) => a,
            };
            let (input, _) = panel_input(&args.panel, settings, &mut EquationTracker::new())?;
            let curve = match kind {
                SweepKind::Pressure(_) => {
                    sensitivity::bite_vs_pressure(&input, settings, &args.range(&settings.pressure_sweep))?
                }
                SweepKind::DeltaT(_) => {
                    sensitivity::glueline_vs_delta_t(&input, settings, &args.range(&settings.delta_t_sweep))?
                }
            };
            if cli.json {
                print_json(&curve)
            } else {
                report::print_curve(&input.label, &curve, units);
                Ok(())
            }
        }
        Commands::Wind(args) => {
            let input = args.to_input().ok_or_else(|| CalcError::missing_field("wind-speed"))?;
            let result = wind::calculate(&input)?;
            if cli.json {
                print_json(&json!({ "input": input, "result": result }))
            } else {
                report::print_wind(&input, &result, units);
                Ok(())
            }
        }
        Commands::Project { file } => {
            let mut project = glazing_core::file_io::load_project(file)
                .with_context(|| format!("failed to load project {}", file.display()))?;
            if cli.units.is_some() {
                project.settings.units = units;
            }
            let outcomes = project.calculate_all();
            if cli.json {
                print_json(&outcomes)
            } else {
                report::print_project(&project, &outcomes, project.settings.units);
                Ok(())
            }
        }
        Commands::Equations => {
            println!("{}", generate_equations_markdown());
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = CommandLine::parse_args();
    logging::init_logging(cli.verbose);

    let outcome = load_settings(&cli).and_then(|settings| run(&cli, &settings));

    if let Err(e) = &outcome {
        if cli.json {
            if let Some(calc_error) = e.downcast_ref::<CalcError>() {
                eprintln!("{}", serde_json::to_string_pretty(calc_error)?);
                std::process::exit(1);
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::env::temp_dir;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("glazing_cli_test_{}_{}.json", name, std::process::id()))
    }

    fn calc_args(cli: &CommandLine) -> &CalcArgs {
        match &cli.command {
            Commands::Calc(args) => args,
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn test_config_file_settings_take_effect() {
        let path = temp_path("config");
        fs::write(
            &path,
            r#"{ "minimum_joint_mm": 12.0, "silicone": { "wind_stress_psi": 40.0 }, "units": "imperial" }"#,
        )
        .unwrap();

        let cli = CommandLine::try_parse_from(["glazing", "--config", path.to_str().unwrap(), "calc"]).unwrap();
        let settings = load_settings(&cli).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(settings.units, UnitSystem::Imperial);

        let calc = CalcRun::new(calc_args(&cli), &settings).unwrap();
        assert!((calc.result.bite_wind_mm - 9.8674 / 2.0).abs() < 1e-3);
        assert_eq!(calc.result.bite_design_mm, 12.0);
        assert_eq!(calc.result.glueline_design_mm, 12.0);
    }

    #[test]
    fn test_units_flag_overrides_config() {
        let path = temp_path("units");
        fs::write(&path, r#"{ "units": "imperial" }"#).unwrap();
        let cli = CommandLine::try_parse_from(["glazing", "--config", path.to_str().unwrap(), "--units", "dual", "calc"])
            .unwrap();
        let settings = load_settings(&cli).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(settings.units, UnitSystem::Dual);
    }

    #[test]
    fn test_invalid_config_is_calc_error() {
        let path = temp_path("bad_config");
        fs::write(&path, r#"{ "minimum_joint_mm": 0.0 }"#).unwrap();
        let cli = CommandLine::try_parse_from(["glazing", "--config", path.to_str().unwrap(), "calc"]).unwrap();
        let err = load_settings(&cli).unwrap_err();
        fs::remove_file(&path).ok();
        assert_eq!(err.downcast_ref::<CalcError>().map(|e| e.error_code()), Some("INVALID_INPUT"));
    }

    #[test]
    fn test_calc_json_shape() {
        let cli = CommandLine::try_parse_from(["glazing", "calc", "--wind-speed", "40", "--equations"]).unwrap();
        let settings = load_settings(&cli).unwrap();
        let calc = CalcRun::new(calc_args(&cli), &settings).unwrap();
        let value = calc.to_json(true).unwrap();

        assert_eq!(value["input"]["label"], "Lite");
        assert!(value["result"]["bite_design_mm"].as_f64().unwrap() >= 6.35);
        // Wind speed replaces the pressure flag
        assert_eq!(value["input"]["wind_pressure_kgf_m2"], value["wind"]["design_pressure_kgf_m2"]);
        assert!(value["equations"].as_str().unwrap().contains("Bite"));

        let value = calc.to_json(false).unwrap();
        assert!(value.get("equations").is_none());
    }

    #[test]
    fn test_wind_without_speed_is_missing_field() {
        let cli = CommandLine::try_parse_from(["glazing", "--json", "wind"]).unwrap();
        let err = run(&cli, &DesignSettings::default()).unwrap_err();
        assert_eq!(err.downcast_ref::<CalcError>().map(|e| e.error_code()), Some("MISSING_FIELD"));
    }
}
