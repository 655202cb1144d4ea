/// 레이놀즈수 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct ReynoldsInput {
    /// 유체 밀도 [kg/m3] (슬라이더 범위 800~1200)
    pub density_kg_per_m3: f64,
    /// 유속 [m/s] (슬라이더 범위 0~10)
    pub velocity_m_per_s: f64,
    /// 배관 내경 [m] (슬라이더 범위 0.01~0.1)
    pub diameter_m: f64,
    /// 동점도 [Pa·s] (슬라이더 범위 0.001~0.01)
    pub dynamic_viscosity_pa_s: f64,
}

impl Default for ReynoldsInput {
    fn default() -> Self {
        Self {
            density_kg_per_m3: 1000.0,
            velocity_m_per_s: 1.0,
            diameter_m: 0.05,
            dynamic_viscosity_pa_s: 0.001,
        }
    }
}

/// 유동 형태 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowRegime {
    /// 표시용 영문 라벨.
    pub fn label(&self) -> &'static str {
        match self {
            FlowRegime::Laminar => "Laminar",
            FlowRegime::Transitional => "Transitional",
            FlowRegime::Turbulent => "Turbulent",
        }
    }

    /// 색 블록 차트에 쓰는 RGB 값 (녹색/주황/적색).
    pub fn color_rgb(&self) -> [u8; 3] {
        match self {
            FlowRegime::Laminar => [46, 160, 67],
            FlowRegime::Transitional => [255, 140, 0],
            FlowRegime::Turbulent => [220, 50, 47],
        }
    }
}

impl std::fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 레이놀즈수 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReynoldsResult {
    /// 레이놀즈수 (무차원)
    pub reynolds: f64,
    /// 분류된 유동 형태
    pub regime: FlowRegime,
}

/// 레이놀즈수 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ReynoldsError {
    /// 점도가 0 이하면 Re = ρvD/μ가 발산한다
    NonPositiveViscosity(f64),
    /// 밀도가 0 이하
    NonPositiveDensity(f64),
}

impl std::fmt::Display for ReynoldsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReynoldsError::NonPositiveViscosity(mu) => {
                write!(f, "viscosity must be positive (got {mu} Pa·s)")
            }
            ReynoldsError::NonPositiveDensity(rho) => {
                write!(f, "density must be positive (got {rho} kg/m3)")
            }
        }
    }
}

impl std::error::Error for ReynoldsError {}

/// 층류/천이 경계 레이놀즈수.
pub const RE_LAMINAR_MAX: f64 = 2300.0;
/// 천이/난류 경계 레이놀즈수.
pub const RE_TRANSITIONAL_MAX: f64 = 4000.0;

/// 고정 임계값으로 유동 형태를 분류한다.
/// 경계값은 상위 구간에 속한다 (Re=2300 → 천이, Re=4000 → 난류).
pub fn classify(reynolds: f64) -> FlowRegime {
    if reynolds < RE_LAMINAR_MAX {
        FlowRegime::Laminar
    } else if reynolds < RE_TRANSITIONAL_MAX {
        FlowRegime::Transitional
    } else {
        FlowRegime::Turbulent
    }
}

/// Re = ρvD/μ를 계산하고 유동 형태를 분류한다.
pub fn evaluate(input: ReynoldsInput) -> Result<ReynoldsResult, ReynoldsError> {
    if input.dynamic_viscosity_pa_s <= 0.0 {
        return Err(ReynoldsError::NonPositiveViscosity(
            input.dynamic_viscosity_pa_s,
        ));
    }
    if input.density_kg_per_m3 <= 0.0 {
        return Err(ReynoldsError::NonPositiveDensity(input.density_kg_per_m3));
    }
    let reynolds = input.density_kg_per_m3 * input.velocity_m_per_s * input.diameter_m
        / input.dynamic_viscosity_pa_s;
    Ok(ReynoldsResult {
        reynolds,
        regime: classify(reynolds),
    })
}

/// 요약 테이블 행. 표기 형식이 고정이라 동일 입력이면 바이트 단위로 동일하다.
pub fn summary_rows(input: &ReynoldsInput, result: &ReynoldsResult) -> Vec<(&'static str, String)> {
    vec![
        ("Density (kg/m³)", format!("{}", input.density_kg_per_m3)),
        ("Velocity (m/s)", format!("{}", input.velocity_m_per_s)),
        ("Diameter (m)", format!("{}", input.diameter_m)),
        ("Viscosity (Pa·s)", format!("{}", input.dynamic_viscosity_pa_s)),
        ("Reynolds Number", format!("{:.0}", result.reynolds)),
        ("Flow Type", result.regime.label().to_string()),
    ]
}
