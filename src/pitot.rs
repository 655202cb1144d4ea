/// 피토관 유속 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct PitotInput {
    /// 유체 밀도 [kg/m3] (슬라이더 범위 800~1200)
    pub density_kg_per_m3: f64,
    /// 측정 차압 [Pa] (슬라이더 범위 0~1000)
    pub pressure_diff_pa: f64,
}

impl Default for PitotInput {
    fn default() -> Self {
        Self {
            density_kg_per_m3: 1000.0,
            pressure_diff_pa: 100.0,
        }
    }
}

/// 피토관 계산 결과.
#[derive(Debug, Clone)]
pub struct PitotResult {
    /// 계산 유속 [m/s]
    pub velocity_m_per_s: f64,
    /// 참조 곡선: (유속 [m/s], 차압 [Pa]) 50점
    pub curve: Vec<[f64; 2]>,
}

/// 피토관 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum PitotError {
    /// 밀도가 0 이하라 v = sqrt(2Δp/ρ)가 정의되지 않음
    NonPositiveDensity(f64),
    /// 차압이 음수라 제곱근이 정의되지 않음
    NegativePressureDiff(f64),
}

impl std::fmt::Display for PitotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PitotError::NonPositiveDensity(rho) => {
                write!(f, "density must be positive (got {rho} kg/m3)")
            }
            PitotError::NegativePressureDiff(dp) => {
                write!(f, "pressure difference must be non-negative (got {dp} Pa)")
            }
        }
    }
}

impl std::error::Error for PitotError {}

/// 참조 곡선의 샘플 점 수.
pub const CURVE_POINTS: usize = 50;
/// 참조 곡선 유속 범위 [m/s].
pub const CURVE_V_MIN: f64 = 0.1;
pub const CURVE_V_MAX: f64 = 10.0;

/// 피토관 식 v = sqrt(2Δp/ρ)로 유속을 계산한다.
pub fn velocity_m_per_s(density_kg_per_m3: f64, pressure_diff_pa: f64) -> Result<f64, PitotError> {
    if density_kg_per_m3 <= 0.0 {
        return Err(PitotError::NonPositiveDensity(density_kg_per_m3));
    }
    if pressure_diff_pa < 0.0 {
        return Err(PitotError::NegativePressureDiff(pressure_diff_pa));
    }
    Ok((2.0 * pressure_diff_pa / density_kg_per_m3).sqrt())
}

/// 동압 식 p(v) = 0.5ρv². 참조 곡선과 왕복 검증에 사용한다.
pub fn dynamic_pressure_pa(density_kg_per_m3: f64, velocity_m_per_s: f64) -> f64 {
    0.5 * density_kg_per_m3 * velocity_m_per_s * velocity_m_per_s
}

/// 현재 밀도에 대한 차압-유속 참조 곡선을 생성한다.
/// 0.1~10 m/s 구간을 50점 등간격으로 샘플링하며 슬라이더 Δp와는 무관하다.
pub fn reference_curve(density_kg_per_m3: f64) -> Vec<[f64; 2]> {
    let step = (CURVE_V_MAX - CURVE_V_MIN) / (CURVE_POINTS as f64 - 1.0);
    (0..CURVE_POINTS)
        .map(|i| {
            let v = CURVE_V_MIN + step * i as f64;
            [v, dynamic_pressure_pa(density_kg_per_m3, v)]
        })
        .collect()
}

/// 피토관 평가: 유속과 참조 곡선을 함께 반환한다.
pub fn evaluate(input: PitotInput) -> Result<PitotResult, PitotError> {
    let velocity = velocity_m_per_s(input.density_kg_per_m3, input.pressure_diff_pa)?;
    Ok(PitotResult {
        velocity_m_per_s: velocity,
        curve: reference_curve(input.density_kg_per_m3),
    })
}

/// 요약 테이블 행. 표기 형식이 고정이라 동일 입력이면 바이트 단위로 동일하다.
pub fn summary_rows(input: &PitotInput, result: &PitotResult) -> Vec<(&'static str, String)> {
    vec![
        ("Fluid Density (kg/m³)", format!("{}", input.density_kg_per_m3)),
        ("Pressure Difference (Pa)", format!("{}", input.pressure_diff_pa)),
        ("Velocity (m/s)", format!("{:.2}", result.velocity_m_per_s)),
    ]
}
