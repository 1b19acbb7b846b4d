use glazing_core::calculations::{GlazingInput, GlazingResult, SensitivityCurve, SweepParameter};
use glazing_core::loads::{WindInput, WindResult};
use glazing_core::project::{ItemOutcome, Project};
use glazing_core::settings::DesignSettings;
use glazing_core::units::{Kgf, KgfPerM2, Millimeters, Psi, UnitSystem};

const RULE: &str = "═══════════════════════════════════════";

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

fn banner(title: &str) {
    println!("{}", RULE);
    println!("  {}", title);
    println!("{}", RULE);
}

fn mm(units: UnitSystem, value: f64) -> String {
    units.format_length(Millimeters(value))
}

pub fn print_glazing(input: &GlazingInput, result: &GlazingResult, settings: &DesignSettings) {
    let units = settings.units;
    let silicone = input.silicone_or(settings);
    banner(&format!("STRUCTURAL GLAZING: {}", input.label));
    println!();
    println!("Input:");
    println!("  Glass:      {:.2} m x {:.2} m x {:.0} mm", input.width_m, input.height_m, input.thickness_mm);
    println!("  Pressure:   {}", units.format_pressure(KgfPerM2(input.wind_pressure_kgf_m2)));
    println!("  ΔT:         {:.0} °C", input.delta_t_c);
    println!("  Frame:      {}", input.frame_or(settings));
    println!(
        "  Self-weight: {}",
        if input.carries_self_weight { "carried by silicone" } else { "setting blocks" }
    );
    println!();
    println!("Silicone:");
    println!("  Wind stress:      {}", units.format_stress(Psi(silicone.wind_stress_psi)));
    println!("  Dead load stress: {}", units.format_stress(Psi(silicone.dead_load_stress_psi)));
    println!("  Shear stress:     {}", units.format_stress(Psi(silicone.shear_stress_psi)));
    println!("  Modulus:          {:.2} MPa", silicone.modulus_mpa);
    println!("  Movement cap.:    ±{:.0}%", silicone.movement_capability * 100.0);
    println!();
    println!("Bite:");
    println!("  Glass weight:   {}", units.format_weight(Kgf(result.glass_weight_kg)));
    println!("  By wind:        {}", mm(units, result.bite_wind_mm));
    if input.carries_self_weight {
        println!("  By self-weight: {}", mm(units, result.bite_self_weight_mm));
    }
    println!("  Design bite:    {} (governs: {})", mm(units, result.bite_design_mm), result.bite_criterion);
    println!();
    println!("Glueline:");
    println!("  Thermal movement: {}", mm(units, result.thermal_movement_mm));
    println!("  By shear stress:  {}", mm(units, result.glueline_shear_mm));
    println!("  By movement cap.: {}", mm(units, result.glueline_capacity_mm));
    println!(
        "  Design glueline:  {} (governs: {})",
        mm(units, result.glueline_design_mm),
        result.glueline_criterion
    );

    if let Some(provided) = &input.provided {
        println!();
        println!("Provided Joint Checks:");
        if let Some(u) = result.bite_utilization {
            println!(
                "  Bite:     {:.2} ({} / {}) {}",
                u,
                mm(units, result.bite_design_mm),
                mm(units, provided.bite_mm),
                status_icon(u <= 1.0)
            );
        }
        if let Some(u) = result.glueline_utilization {
            println!(
                "  Glueline: {:.2} ({} / {}) {}",
                u,
                mm(units, result.glueline_design_mm),
                mm(units, provided.glueline_mm),
                status_icon(u <= 1.0)
            );
        }
        println!();
        banner(&format!("RESULT: {}", if result.passes() { "PASS" } else { "FAIL" }));
    } else {
        println!();
        println!("{}", RULE);
    }
}

pub fn print_curve(label: &str, curve: &SensitivityCurve, units: UnitSystem) {
    let title = match curve.parameter {
        SweepParameter::WindPressure => "BITE vs WIND PRESSURE",
        SweepParameter::DeltaT => "GLUELINE vs ΔT",
    };
    banner(&format!("{}: {}", title, label));
    println!();
    println!("  {:>12}  {:>24}  {:>24}", "x", "Required", "Design");
    println!("  {:<12}  {:>24}", curve.parameter.x_label(), curve.parameter.y_label());
    for p in &curve.points {
        println!("  {:>12.2}  {:>24}  {:>24}", p.x, mm(units, p.required_mm), mm(units, p.design_mm));
    }
    println!();
    println!("  Current: x = {:.2}, design = {}", curve.current_x, mm(units, curve.current_design_mm));
    if let Some(max) = curve.max_point() {
        println!("  Maximum: x = {:.2}, design = {}", max.x, mm(units, max.design_mm));
    }
    println!("{}", RULE);
}

pub fn print_wind(input: &WindInput, result: &WindResult, units: UnitSystem) {
    banner("WIND PRESSURE (ASCE 7-22 C&C)");
    println!();
    println!("Input:");
    println!("  V:         {:.1} m/s", input.basic_wind_speed_m_s);
    println!("  Kz, Kzt:   {:.2}, {:.2}", input.kz, input.kzt);
    println!("  Kd:        {:.2}", input.kd);
    println!("  GCp:       {:.2}", input.gcp);
    println!("  Enclosure: {} (GCpi = ±{:.2})", input.enclosure, result.gcpi);
    println!();
    println!("  q  = {:.1} Pa", result.velocity_pressure_pa);
    println!("  p  = {:.1} Pa", result.design_pressure_pa);
    println!("     = {}", units.format_pressure(KgfPerM2(result.design_pressure_kgf_m2)));
    println!("{}", RULE);
}

pub fn print_project(project: &Project, outcomes: &[ItemOutcome], units: UnitSystem) {
    banner(&format!("PROJECT {} ({})", project.meta.job_id, project.meta.client));
    println!("  Engineer: {}", project.meta.engineer);
    println!("  Minimum joint: {}", mm(units, project.settings.minimum_joint_mm));
    println!();
    for outcome in outcomes {
        match &outcome.result {
            Ok(r) => println!(
                "  {:<16} bite {:<24} glueline {:<24} {}",
                outcome.label,
                mm(units, r.bite_design_mm),
                mm(units, r.glueline_design_mm),
                status_icon(r.passes())
            ),
            Err(e) => println!("  {:<16} [ERROR] {}", outcome.label, e),
        }
    }
    println!("{}", RULE);
}
