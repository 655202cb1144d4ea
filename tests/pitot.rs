use fluid_mechanics_lab::pitot::{
    self, PitotError, PitotInput, CURVE_POINTS, CURVE_V_MAX, CURVE_V_MIN,
};

#[test]
fn velocity_matches_closed_form() {
    for rho in [800.0, 950.0, 1000.0, 1200.0] {
        for dp in [0.0, 1.0, 100.0, 512.5, 1000.0] {
            let v = pitot::velocity_m_per_s(rho, dp).expect("in-domain inputs");
            let expected = (2.0 * dp / rho).sqrt();
            assert!(
                (v - expected).abs() < 1e-12,
                "rho={rho} dp={dp} v={v} expected={expected}"
            );
        }
    }
}

#[test]
fn velocity_monotonic_in_pressure_and_density() {
    // Δp 증가 → v 비감소
    let mut prev = 0.0;
    for dp in [0.0, 50.0, 100.0, 400.0, 1000.0] {
        let v = pitot::velocity_m_per_s(1000.0, dp).unwrap();
        assert!(v >= prev, "dp={dp} v={v} prev={prev}");
        prev = v;
    }
    // ρ 증가 → v 비증가
    let mut prev = f64::INFINITY;
    for rho in [800.0, 900.0, 1000.0, 1100.0, 1200.0] {
        let v = pitot::velocity_m_per_s(rho, 500.0).unwrap();
        assert!(v <= prev, "rho={rho} v={v} prev={prev}");
        prev = v;
    }
}

#[test]
fn dynamic_pressure_round_trips_velocity() {
    for rho in [800.0, 1000.0, 1200.0] {
        for dp in [0.0, 100.0, 777.0, 1000.0] {
            let v = pitot::velocity_m_per_s(rho, dp).unwrap();
            let back = pitot::dynamic_pressure_pa(rho, v);
            assert!((back - dp).abs() < 1e-9, "rho={rho} dp={dp} back={back}");
        }
    }
}

#[test]
fn zero_pressure_diff_is_valid_and_gives_zero_velocity() {
    let v = pitot::velocity_m_per_s(1000.0, 0.0).unwrap();
    assert_eq!(v, 0.0);
}

#[test]
fn reference_scenario_density_1000_dp_100() {
    let res = pitot::evaluate(PitotInput {
        density_kg_per_m3: 1000.0,
        pressure_diff_pa: 100.0,
    })
    .unwrap();
    // v = sqrt(2·100/1000) = sqrt(0.2)
    assert!((res.velocity_m_per_s - 0.2f64.sqrt()).abs() < 1e-12);
}

#[test]
fn domain_violations_are_rejected() {
    assert_eq!(
        pitot::velocity_m_per_s(0.0, 100.0),
        Err(PitotError::NonPositiveDensity(0.0))
    );
    assert_eq!(
        pitot::velocity_m_per_s(-800.0, 100.0),
        Err(PitotError::NonPositiveDensity(-800.0))
    );
    assert_eq!(
        pitot::velocity_m_per_s(1000.0, -1.0),
        Err(PitotError::NegativePressureDiff(-1.0))
    );
    assert!(pitot::evaluate(PitotInput {
        density_kg_per_m3: 0.0,
        pressure_diff_pa: 100.0,
    })
    .is_err());
}

#[test]
fn reference_curve_samples_fifty_points_for_current_density() {
    let rho = 950.0;
    let curve = pitot::reference_curve(rho);
    assert_eq!(curve.len(), CURVE_POINTS);
    assert!((curve[0][0] - CURVE_V_MIN).abs() < 1e-12);
    assert!((curve[CURVE_POINTS - 1][0] - CURVE_V_MAX).abs() < 1e-9);
    for point in &curve {
        let expected = 0.5 * rho * point[0] * point[0];
        assert!(
            (point[1] - expected).abs() < 1e-9,
            "v={} p={} expected={expected}",
            point[0],
            point[1]
        );
    }
}

#[test]
fn curve_tracks_density_not_pressure_slider() {
    // 곡선은 Δp 슬라이더와 무관하고 ρ에만 의존한다.
    let a = pitot::evaluate(PitotInput {
        density_kg_per_m3: 1000.0,
        pressure_diff_pa: 0.0,
    })
    .unwrap();
    let b = pitot::evaluate(PitotInput {
        density_kg_per_m3: 1000.0,
        pressure_diff_pa: 1000.0,
    })
    .unwrap();
    assert_eq!(a.curve, b.curve);
}

#[test]
fn summary_rows_are_deterministic() {
    let input = PitotInput {
        density_kg_per_m3: 1000.0,
        pressure_diff_pa: 100.0,
    };
    let first = pitot::evaluate(input).unwrap();
    let second = pitot::evaluate(input).unwrap();
    let rows_a = pitot::summary_rows(&input, &first);
    let rows_b = pitot::summary_rows(&input, &second);
    assert_eq!(rows_a, rows_b);
    assert_eq!(rows_a[0], ("Fluid Density (kg/m³)", "1000".to_string()));
    assert_eq!(rows_a[1], ("Pressure Difference (Pa)", "100".to_string()));
    assert_eq!(rows_a[2], ("Velocity (m/s)", "0.45".to_string()));
}
