use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const WARN_PREFIX: &str = "general.warn_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_PITOT: &str = "main_menu.pitot";
    pub const MAIN_MENU_REYNOLDS: &str = "main_menu.reynolds";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PITOT_HEADING: &str = "pitot.heading";
    pub const PROMPT_DENSITY: &str = "prompt.density";
    pub const PROMPT_PRESSURE_DIFF: &str = "prompt.pressure_diff";
    pub const PITOT_RESULT_VELOCITY: &str = "pitot.result_velocity";
    pub const PITOT_CURVE_HEADING: &str = "pitot.curve_heading";

    pub const REYNOLDS_HEADING: &str = "reynolds.heading";
    pub const PROMPT_VELOCITY: &str = "prompt.velocity";
    pub const PROMPT_DIAMETER: &str = "prompt.diameter";
    pub const PROMPT_VISCOSITY: &str = "prompt.viscosity";
    pub const REYNOLDS_RESULT: &str = "reynolds.result";

    pub const REGIME_LAMINAR: &str = "regime.laminar";
    pub const REGIME_TRANSITIONAL: &str = "regime.transitional";
    pub const REGIME_TURBULENT: &str = "regime.turbulent";

    pub const NARRATION_PROMPT_ENABLE: &str = "narration.prompt_enable";
    pub const NARRATION_SAVED: &str = "narration.saved";
    pub const NARRATION_FAILED: &str = "narration.failed";
    pub const NARRATION_PITOT: &str = "narration.pitot";
    pub const NARRATION_REYNOLDS: &str = "narration.reynolds";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 빌드에 내장된 언어팩을 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영문 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// 번역 템플릿의 {name} 자리표시자를 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        WARN_PREFIX => "경고",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Virtual Fluid Mechanics Lab ===",
        MAIN_MENU_PITOT => "1) 피토관 유속 측정",
        MAIN_MENU_REYNOLDS => "2) 레이놀즈수 유동 시각화",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "실험 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PITOT_HEADING => "\n-- Pitot Tube Flow Measurement --",
        PROMPT_DENSITY => "유체 밀도 [kg/m3] (800~1200): ",
        PROMPT_PRESSURE_DIFF => "차압 [Pa] (0~1000): ",
        PITOT_RESULT_VELOCITY => "계산 유속:",
        PITOT_CURVE_HEADING => "유속-차압 참조 곡선 (0.5ρv²):",
        REYNOLDS_HEADING => "\n-- Reynolds Number Flow Visualization --",
        PROMPT_VELOCITY => "유속 [m/s] (0~10): ",
        PROMPT_DIAMETER => "배관 내경 [m] (0.01~0.1): ",
        PROMPT_VISCOSITY => "동점도 [Pa·s] (0.001~0.01): ",
        REYNOLDS_RESULT => "레이놀즈수: {re} — 유동 형태: {regime}",
        REGIME_LAMINAR => "층류",
        REGIME_TRANSITIONAL => "천이",
        REGIME_TURBULENT => "난류",
        NARRATION_PROMPT_ENABLE => "음성 해설을 생성할까요? (y/n): ",
        NARRATION_SAVED => "해설 저장:",
        NARRATION_FAILED => "해설 생성 실패 (수치 결과에는 영향 없음):",
        NARRATION_PITOT => {
            "유체 밀도 {rho}, 차압 {dp}에서 계산된 유속은 초당 {v} 미터입니다."
        }
        NARRATION_REYNOLDS => {
            "유속 초당 {v} 미터, 점도 {mu}에서 레이놀즈수는 {re}입니다. 이는 {regime} 유동을 의미합니다."
        }
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_PROMPT_CHANGE => "언어 코드 입력 (ko/en, 취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        WARN_PREFIX => "Warning",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Virtual Fluid Mechanics Lab ===",
        MAIN_MENU_PITOT => "1) Pitot Tube Flow Measurement",
        MAIN_MENU_REYNOLDS => "2) Reynolds Number Flow Visualization",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Choose an experiment: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PITOT_HEADING => "\n-- Pitot Tube Flow Measurement --",
        PROMPT_DENSITY => "Fluid density [kg/m3] (800-1200): ",
        PROMPT_PRESSURE_DIFF => "Pressure difference [Pa] (0-1000): ",
        PITOT_RESULT_VELOCITY => "Calculated velocity:",
        PITOT_CURVE_HEADING => "Velocity vs pressure-difference reference curve (0.5ρv²):",
        REYNOLDS_HEADING => "\n-- Reynolds Number Flow Visualization --",
        PROMPT_VELOCITY => "Velocity [m/s] (0-10): ",
        PROMPT_DIAMETER => "Pipe diameter [m] (0.01-0.1): ",
        PROMPT_VISCOSITY => "Dynamic viscosity [Pa·s] (0.001-0.01): ",
        REYNOLDS_RESULT => "Reynolds number: {re} — Flow is {regime}",
        REGIME_LAMINAR => "Laminar",
        REGIME_TRANSITIONAL => "Transitional",
        REGIME_TURBULENT => "Turbulent",
        NARRATION_PROMPT_ENABLE => "Generate spoken narration? (y/n): ",
        NARRATION_SAVED => "Narration saved:",
        NARRATION_FAILED => "Narration failed (numeric results are unaffected):",
        NARRATION_PITOT => {
            "With a fluid density of {rho} and pressure difference of {dp}, \
             the calculated velocity is {v} meters per second."
        }
        NARRATION_REYNOLDS => {
            "With velocity {v} meters per second and viscosity {mu}, \
             the Reynolds number is {re}. This indicates {regime} flow."
        }
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_PROMPT_CHANGE => "Language code (ko/en, enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        _ => "[missing translation]",
    }
}
