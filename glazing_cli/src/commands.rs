use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use glazing_core::calculations::sensitivity::SweepRange;
use glazing_core::calculations::GlazingInput;
use glazing_core::loads::{EnclosureClass, WindInput};
use glazing_core::materials::FrameMaterial;
use glazing_core::settings::DesignSettings;
use glazing_core::units::UnitSystem;

#[derive(Parser, Debug)]
#[command(name = "glazing")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Structural silicone bite and glueline sizing.")]
pub struct CommandLine {
    /// Design settings file (JSON)
    #[arg(long, global = true, env = "GLAZING_CONFIG")]
    pub config: Option<PathBuf>,

    /// Display units, overriding the settings file
    #[arg(long, global = true, value_enum)]
    pub units: Option<Units>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Size the joint of a single lite
    #[command(alias = "c")]
    Calc(CalcArgs),
    /// Sweep wind pressure or temperature differential
    #[command(alias = "s")]
    Sweep {
        #[command(subcommand)]
        kind: SweepKind,
    },
    /// Derive the design wind suction from wind speed
    #[command(alias = "w")]
    Wind(WindArgs),
    /// Evaluate every lite of a project file
    #[command(alias = "p")]
    Project { file: PathBuf },
    /// Print the equation reference (markdown)
    Equations,
}

#[derive(Subcommand, Debug)]
pub enum SweepKind {
    /// Bite against wind pressure (kgf/m²)
    Pressure(SweepArgs),
    /// Glueline thickness against temperature differential (°C)
    DeltaT(SweepArgs),
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
    Dual,
}

impl From<Units> for UnitSystem {
    fn from(units: Units) -> Self {
        match units {
            Units::Metric => UnitSystem::Metric,
            Units::Imperial => UnitSystem::Imperial,
            Units::Dual => UnitSystem::Dual,
        }
    }
}

fn parse_enclosure(s: &str) -> Result<EnclosureClass, String> {
    EnclosureClass::from_str_flexible(s).map_err(|e| e.to_string())
}

fn parse_frame(s: &str) -> Result<FrameMaterial, String> {
    FrameMaterial::from_str_flexible(s).map_err(|e| e.to_string())
}

/// Wind speed parameters, shared by `wind` and the panel commands
#[derive(Args, Debug, Clone)]
pub struct WindArgs {
    /// Basic wind speed V (m/s)
    #[arg(long = "wind-speed", alias = "speed")]
    pub speed: Option<f64>,

    /// Exposure coefficient K_z
    #[arg(long, default_value_t = 1.0)]
    pub kz: f64,

    /// Topographic factor K_zt
    #[arg(long, default_value_t = 1.0)]
    pub kzt: f64,

    /// Directionality factor K_d
    #[arg(long, default_value_t = glazing_core::loads::wind::DEFAULT_KD)]
    pub kd: f64,

    /// External pressure coefficient GC_p
    #[arg(long, default_value_t = -1.4, allow_hyphen_values = true)]
    pub gcp: f64,

    /// Enclosure classification
    #[arg(long, default_value = "enclosed", value_parser = parse_enclosure)]
    pub enclosure: EnclosureClass,
}

impl WindArgs {
    /// Wind input, when a wind speed was given
    pub fn to_input(&self) -> Option<WindInput> {
        self.speed.map(|speed| WindInput {
            basic_wind_speed_m_s: speed,
            kz: self.kz,
            kzt: self.kzt,
            kd: self.kd,
            gcp: self.gcp,
            enclosure: self.enclosure,
        })
    }
}

/// Lite definition from flags or from a JSON file
#[derive(Args, Debug, Clone)]
pub struct PanelArgs {
    /// Read the lite from a JSON file instead of flags
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[arg(long, default_value = "Lite")]
    pub label: String,

    /// Glass width (m)
    #[arg(long, default_value_t = 1.5)]
    pub width: f64,

    /// Glass height (m)
    #[arg(long, default_value_t = 2.5)]
    pub height: f64,

    /// Nominal glass thickness (mm)
    #[arg(long, default_value_t = 10.0)]
    pub thickness: f64,

    /// Design wind pressure (kgf/m²); ignored when --wind-speed is given
    #[arg(long, default_value_t = 185.0)]
    pub pressure: f64,

    /// Temperature differential ΔT (°C)
    #[arg(long = "delta-t", default_value_t = 50.0)]
    pub delta_t: f64,

    /// Silicone carries the lite's weight (no setting blocks)
    #[arg(long)]
    pub carries_self_weight: bool,

    /// Allowable wind stress (psi)
    #[arg(long)]
    pub wind_stress: Option<f64>,

    /// Allowable dead load stress (psi)
    #[arg(long)]
    pub dead_load_stress: Option<f64>,

    /// Allowable shear stress for the glueline (psi)
    #[arg(long)]
    pub shear_stress: Option<f64>,

    /// Silicone modulus (MPa)
    #[arg(long)]
    pub modulus: Option<f64>,

    /// Silicone movement capability (strain, e.g. 0.25)
    #[arg(long)]
    pub movement_capability: Option<f64>,

    /// Frame material (e.g. aluminum, 6063-T6)
    #[arg(long, value_parser = parse_frame)]
    pub frame: Option<FrameMaterial>,

    /// Custom frame expansion coefficient (1/°C)
    #[arg(long, conflicts_with = "frame")]
    pub frame_alpha: Option<f64>,

    /// Bite shown on the drawings (mm)
    #[arg(long)]
    pub provided_bite: Option<f64>,

    /// Glueline thickness shown on the drawings (mm)
    #[arg(long)]
    pub provided_glueline: Option<f64>,

    #[command(flatten)]
    pub wind: WindArgs,
}

impl PanelArgs {
    /// Build the lite input.
    ///
    /// Materials the lite leaves out come from `settings` at calculation
    /// time. Material flags pin a material on the lite, starting from the
    /// one currently in effect. `wind_pressure` replaces the pressure flag
    /// when given.
    pub fn to_input(&self, settings: &DesignSettings, wind_pressure: Option<f64>) -> Result<GlazingInput> {
        let mut input = match &self.input {
            Some(path) => glazing_core::file_io::load_glazing_input(path)?,
            None => GlazingInput::new(
                self.label.clone(),
                self.width,
                self.height,
                self.thickness,
                self.pressure,
                self.delta_t,
            )
            .with_self_weight(self.carries_self_weight),
        };

        if let Some(p) = wind_pressure {
            input.wind_pressure_kgf_m2 = p;
        }

        let overrides = [
            self.wind_stress,
            self.dead_load_stress,
            self.shear_stress,
            self.modulus,
            self.movement_capability,
        ];
        if overrides.iter().any(Option::is_some) {
            let mut silicone = *input.silicone_or(settings);
            if let Some(v) = self.wind_stress {
                silicone.wind_stress_psi = v;
            }
            if let Some(v) = self.dead_load_stress {
                silicone.dead_load_stress_psi = v;
            }
            if let Some(v) = self.shear_stress {
                silicone.shear_stress_psi = v;
            }
            if let Some(v) = self.modulus {
                silicone.modulus_mpa = v;
            }
            if let Some(v) = self.movement_capability {
                silicone.movement_capability = v;
            }
            input = input.with_silicone(silicone);
        }

        if let Some(frame) = &self.frame {
            input = input.with_frame(frame.clone());
        }
        if let Some(alpha_per_c) = self.frame_alpha {
            input = input.with_frame(FrameMaterial::Custom {
                name: "Custom frame".to_string(),
                alpha_per_c,
            });
        }

        match (self.provided_bite, self.provided_glueline) {
            (Some(b), Some(g)) => input = input.with_provided(b, g),
            (None, None) => {}
            _ => bail!("--provided-bite and --provided-glueline must be given together"),
        }

        Ok(input)
    }
}

#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    #[command(flatten)]
    pub panel: PanelArgs,

    /// Append the equations used, as markdown
    #[arg(long)]
    pub equations: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub panel: PanelArgs,

    /// First sweep value
    #[arg(long)]
    pub start: Option<f64>,

    /// Last sweep value
    #[arg(long)]
    pub end: Option<f64>,

    /// Number of points
    #[arg(long)]
    pub count: Option<usize>,
}

impl SweepArgs {
    /// Sweep range from flags, falling back to `default`
    pub fn range(&self, default: &SweepRange) -> SweepRange {
        SweepRange::new(
            self.start.unwrap_or(default.start),
            self.end.unwrap_or(default.end),
            self.count.unwrap_or(default.count),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CommandLine {
        CommandLine::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_calc_defaults() {
        let cli = parse(&["glazing", "calc"]);
        let Commands::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        let input = args.panel.to_input(&DesignSettings::default(), None).unwrap();
        assert_eq!(input.width_m, 1.5);
        assert_eq!(input.height_m, 2.5);
        assert_eq!(input.wind_pressure_kgf_m2, 185.0);
        assert_eq!(input.delta_t_c, 50.0);
        assert!(!input.carries_self_weight);
        assert!(input.provided.is_none());
    }

    #[test]
    fn test_calc_flags() {
        let cli = parse(&[
            "glazing",
            "--json",
            "-vv",
            "calc",
            "--width",
            "2.0",
            "--carries-self-weight",
            "--dead-load-stress",
            "1.5",
            "--provided-bite",
            "12",
            "--provided-glueline",
            "8",
            "--equations",
        ]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        let Commands::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        assert!(args.equations);
        let input = args.panel.to_input(&DesignSettings::default(), None).unwrap();
        assert_eq!(input.width_m, 2.0);
        assert!(input.carries_self_weight);
        let silicone = input.silicone.unwrap();
        assert_eq!(silicone.dead_load_stress_psi, 1.5);
        assert_eq!(silicone.wind_stress_psi, 20.0);
        assert_eq!(input.provided.map(|p| p.bite_mm), Some(12.0));
    }

    #[test]
    fn test_provided_requires_both() {
        let cli = parse(&["glazing", "calc", "--provided-bite", "12"]);
        let Commands::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        assert!(args.panel.to_input(&DesignSettings::default(), None).is_err());
    }

    #[test]
    fn test_settings_silicone_used() {
        let mut settings = DesignSettings::default();
        settings.silicone.wind_stress_psi = 23.0;
        let cli = parse(&["glazing", "calc"]);
        let Commands::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        let input = args.panel.to_input(&settings, Some(200.0)).unwrap();
        assert!(input.silicone.is_none());
        assert_eq!(input.silicone_or(&settings).wind_stress_psi, 23.0);
        assert_eq!(input.wind_pressure_kgf_m2, 200.0);
    }

    #[test]
    fn test_silicone_flag_starts_from_settings() {
        let mut settings = DesignSettings::default();
        settings.silicone.wind_stress_psi = 23.0;
        let cli = parse(&["glazing", "calc", "--modulus", "2.0"]);
        let Commands::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        let silicone = args.panel.to_input(&settings, None).unwrap().silicone.unwrap();
        assert_eq!(silicone.modulus_mpa, 2.0);
        assert_eq!(silicone.wind_stress_psi, 23.0);
    }

    #[test]
    fn test_frame_flags() {
        let cli = parse(&["glazing", "calc", "--frame", "aluminium"]);
        let Commands::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        let input = args.panel.to_input(&DesignSettings::default(), None).unwrap();
        assert_eq!(input.frame, Some(FrameMaterial::Aluminum6063T6));

        let cli = parse(&["glazing", "calc", "--frame-alpha", "1.2e-5"]);
        let Commands::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        let input = args.panel.to_input(&DesignSettings::default(), None).unwrap();
        assert_eq!(input.frame.map(|f| f.alpha_per_c()), Some(1.2e-5));

        assert!(CommandLine::try_parse_from(["glazing", "calc", "--frame", "timber"]).is_err());
        assert!(
            CommandLine::try_parse_from(["glazing", "calc", "--frame", "aluminum", "--frame-alpha", "1e-5"]).is_err()
        );
    }

    #[test]
    fn test_sweep_subcommands() {
        let cli = parse(&["glazing", "sweep", "delta-t", "--start", "20", "--count", "5"]);
        let Commands::Sweep { kind: SweepKind::DeltaT(args) } = cli.command else {
            panic!("expected delta-t sweep");
        };
        let range = args.range(&SweepRange::delta_t_default());
        assert_eq!(range, SweepRange::new(20.0, 90.0, 5));

        let cli = parse(&["glazing", "sweep", "pressure"]);
        assert!(matches!(cli.command, Commands::Sweep { kind: SweepKind::Pressure(_) }));
    }

    #[test]
    fn test_wind_args() {
        let cli = parse(&[
            "glazing",
            "wind",
            "--speed",
            "40",
            "--gcp",
            "-1.8",
            "--enclosure",
            "partially-enclosed",
        ]);
        let Commands::Wind(args) = cli.command else {
            panic!("expected wind");
        };
        let wind = args.to_input().unwrap();
        assert_eq!(wind.basic_wind_speed_m_s, 40.0);
        assert_eq!(wind.gcp, -1.8);
        assert_eq!(wind.kd, 0.85);
        assert_eq!(wind.enclosure, EnclosureClass::PartiallyEnclosed);
    }

    #[test]
    fn test_bad_enclosure_rejected() {
        assert!(CommandLine::try_parse_from(["glazing", "wind", "--enclosure", "sealed"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["glazing", "project", "tower.json", "--units", "imperial", "--config", "office.json"]);
        assert_eq!(cli.units, Some(Units::Imperial));
        assert_eq!(cli.config, Some(PathBuf::from("office.json")));
        assert!(matches!(cli.command, Commands::Project { .. }));
        assert_eq!(UnitSystem::from(Units::Metric), UnitSystem::Metric);
    }
}
