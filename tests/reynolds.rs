use fluid_mechanics_lab::reynolds::{
    self, FlowRegime, ReynoldsError, ReynoldsInput, RE_LAMINAR_MAX, RE_TRANSITIONAL_MAX,
};

#[test]
fn classification_boundaries_are_lower_inclusive() {
    assert_eq!(reynolds::classify(2299.9), FlowRegime::Laminar);
    assert_eq!(reynolds::classify(RE_LAMINAR_MAX), FlowRegime::Transitional);
    assert_eq!(reynolds::classify(3999.9), FlowRegime::Transitional);
    assert_eq!(reynolds::classify(RE_TRANSITIONAL_MAX), FlowRegime::Turbulent);
    assert_eq!(reynolds::classify(0.0), FlowRegime::Laminar);
    assert_eq!(reynolds::classify(1.0e9), FlowRegime::Turbulent);
}

#[test]
fn turbulent_scenario_water_in_50mm_pipe() {
    let res = reynolds::evaluate(ReynoldsInput {
        density_kg_per_m3: 1000.0,
        velocity_m_per_s: 1.0,
        diameter_m: 0.05,
        dynamic_viscosity_pa_s: 0.001,
    })
    .unwrap();
    assert!((res.reynolds - 50_000.0).abs() < 1e-9);
    assert_eq!(res.regime, FlowRegime::Turbulent);
}

#[test]
fn laminar_scenario_slow_flow_in_narrow_pipe() {
    let res = reynolds::evaluate(ReynoldsInput {
        density_kg_per_m3: 1000.0,
        velocity_m_per_s: 0.002,
        diameter_m: 0.01,
        dynamic_viscosity_pa_s: 0.01,
    })
    .unwrap();
    assert!((res.reynolds - 2.0).abs() < 1e-12);
    assert_eq!(res.regime, FlowRegime::Laminar);
}

#[test]
fn domain_violations_are_rejected() {
    let mut input = ReynoldsInput::default();
    input.dynamic_viscosity_pa_s = 0.0;
    assert_eq!(
        reynolds::evaluate(input),
        Err(ReynoldsError::NonPositiveViscosity(0.0))
    );
    input.dynamic_viscosity_pa_s = -0.001;
    assert_eq!(
        reynolds::evaluate(input),
        Err(ReynoldsError::NonPositiveViscosity(-0.001))
    );
    input = ReynoldsInput::default();
    input.density_kg_per_m3 = 0.0;
    assert_eq!(
        reynolds::evaluate(input),
        Err(ReynoldsError::NonPositiveDensity(0.0))
    );
}

#[test]
fn regime_display_colors() {
    assert_eq!(FlowRegime::Laminar.color_rgb(), [46, 160, 67]);
    assert_eq!(FlowRegime::Transitional.color_rgb(), [255, 140, 0]);
    assert_eq!(FlowRegime::Turbulent.color_rgb(), [220, 50, 47]);
    assert_eq!(FlowRegime::Laminar.label(), "Laminar");
    assert_eq!(FlowRegime::Transitional.to_string(), "Transitional");
}

#[test]
fn summary_rows_round_reynolds_to_integer() {
    let input = ReynoldsInput::default();
    let res = reynolds::evaluate(input).unwrap();
    let rows = reynolds::summary_rows(&input, &res);
    assert_eq!(rows[0], ("Density (kg/m³)", "1000".to_string()));
    assert_eq!(rows[1], ("Velocity (m/s)", "1".to_string()));
    assert_eq!(rows[2], ("Diameter (m)", "0.05".to_string()));
    assert_eq!(rows[3], ("Viscosity (Pa·s)", "0.001".to_string()));
    assert_eq!(rows[4], ("Reynolds Number", "50000".to_string()));
    assert_eq!(rows[5], ("Flow Type", "Turbulent".to_string()));
}

#[test]
fn summary_rows_are_deterministic() {
    let input = ReynoldsInput {
        density_kg_per_m3: 870.0,
        velocity_m_per_s: 3.3,
        diameter_m: 0.08,
        dynamic_viscosity_pa_s: 0.004,
    };
    let a = reynolds::summary_rows(&input, &reynolds::evaluate(input).unwrap());
    let b = reynolds::summary_rows(&input, &reynolds::evaluate(input).unwrap());
    assert_eq!(a, b);
}
