use std::io::{self, Write};
use std::path::Path;

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{self, fill_template, Translator};
use crate::narration::{self, Synthesizer};
use crate::pitot;
use crate::reynolds;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PitotTube,
    ReynoldsNumber,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(i18n::keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(i18n::keys::MAIN_MENU_PITOT));
    println!("{}", tr.t(i18n::keys::MAIN_MENU_REYNOLDS));
    println!("{}", tr.t(i18n::keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(i18n::keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(i18n::keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::PitotTube),
            "2" => return Ok(MenuChoice::ReynoldsNumber),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(i18n::keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 피토관 실험을 처리한다. 도메인 오류는 메시지 출력 후 복귀한다.
pub fn handle_pitot(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(i18n::keys::PITOT_HEADING));
    let density = read_f64(tr, tr.t(i18n::keys::PROMPT_DENSITY))?;
    let pressure_diff = read_f64(tr, tr.t(i18n::keys::PROMPT_PRESSURE_DIFF))?;

    let input = pitot::PitotInput {
        density_kg_per_m3: density,
        pressure_diff_pa: pressure_diff,
    };
    let result = match pitot::evaluate(input) {
        Ok(r) => r,
        Err(e) => {
            println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX));
            return Ok(());
        }
    };

    println!(
        "{} {:.2} m/s",
        tr.t(i18n::keys::PITOT_RESULT_VELOCITY),
        result.velocity_m_per_s
    );
    print_table(&pitot::summary_rows(&input, &result));

    println!("{}", tr.t(i18n::keys::PITOT_CURVE_HEADING));
    print_curve_preview(&result.curve);

    maybe_narrate(tr, cfg, "pitot", &narration::pitot_script(tr, &input, &result))?;
    Ok(())
}

/// 레이놀즈수 실험을 처리한다.
pub fn handle_reynolds(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(i18n::keys::REYNOLDS_HEADING));
    let density = read_f64(tr, tr.t(i18n::keys::PROMPT_DENSITY))?;
    let velocity = read_f64(tr, tr.t(i18n::keys::PROMPT_VELOCITY))?;
    let diameter = read_f64(tr, tr.t(i18n::keys::PROMPT_DIAMETER))?;
    let viscosity = read_f64(tr, tr.t(i18n::keys::PROMPT_VISCOSITY))?;

    let input = reynolds::ReynoldsInput {
        density_kg_per_m3: density,
        velocity_m_per_s: velocity,
        diameter_m: diameter,
        dynamic_viscosity_pa_s: viscosity,
    };
    let result = match reynolds::evaluate(input) {
        Ok(r) => r,
        Err(e) => {
            println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX));
            return Ok(());
        }
    };

    let regime_key = match result.regime {
        reynolds::FlowRegime::Laminar => i18n::keys::REGIME_LAMINAR,
        reynolds::FlowRegime::Transitional => i18n::keys::REGIME_TRANSITIONAL,
        reynolds::FlowRegime::Turbulent => i18n::keys::REGIME_TURBULENT,
    };
    println!(
        "{}",
        fill_template(
            tr.t(i18n::keys::REYNOLDS_RESULT),
            &[
                ("re", format!("{:.0}", result.reynolds)),
                ("regime", tr.t(regime_key).to_string()),
            ],
        )
    );
    print_table(&reynolds::summary_rows(&input, &result));

    maybe_narrate(
        tr,
        cfg,
        "reynolds",
        &narration::reynolds_script(tr, &input, &result),
    )?;
    Ok(())
}

/// 설정 메뉴를 처리한다 (언어 변경).
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(i18n::keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(i18n::keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language
    );
    let sel = read_line(tr.t(i18n::keys::SETTINGS_PROMPT_CHANGE))?;
    let code = sel.trim().to_lowercase();
    if code.is_empty() {
        return Ok(());
    }
    match code.as_str() {
        "ko" | "ko-kr" | "en" | "en-us" | "auto" => {
            cfg.language = code;
            println!("{} {}", tr.t(i18n::keys::SETTINGS_SAVED), cfg.language);
        }
        _ => println!("{}", tr.t(i18n::keys::SETTINGS_INVALID)),
    }
    Ok(())
}

/// y/n 확인 후 해설을 합성해 고유 파일명으로 저장한다.
/// 합성 실패는 경고로만 표시하고 평가 결과에는 영향을 주지 않는다.
fn maybe_narrate(tr: &Translator, cfg: &Config, prefix: &str, script: &str) -> Result<(), AppError> {
    let answer = read_line(tr.t(i18n::keys::NARRATION_PROMPT_ENABLE))?;
    if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
        return Ok(());
    }
    let synth =
        narration::EngineSynthesizer::new(cfg.narration.engine.clone(), cfg.narration.voice.clone());
    match synth.synthesize(script) {
        Ok(clip) => match clip.save_to_dir(Path::new("."), prefix) {
            Ok(path) => println!("{} {}", tr.t(i18n::keys::NARRATION_SAVED), path.display()),
            Err(e) => println!("{} {e}", tr.t(i18n::keys::NARRATION_FAILED)),
        },
        Err(e) => println!("{} {e}", tr.t(i18n::keys::NARRATION_FAILED)),
    }
    Ok(())
}

/// 키/값 요약 테이블을 출력한다.
fn print_table(rows: &[(&'static str, String)]) {
    let width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    for (key, value) in rows {
        println!("  {key:width$}  {value}");
    }
}

/// 참조 곡선을 10점 간격 + 마지막 점으로 요약 출력한다.
fn print_curve_preview(curve: &[[f64; 2]]) {
    println!("  {:>8}  {:>12}", "v [m/s]", "Δp [Pa]");
    for point in curve.iter().step_by(10) {
        println!("  {:>8.2}  {:>12.1}", point[0], point[1]);
    }
    if let Some(last) = curve.last() {
        println!("  {:>8.2}  {:>12.1}", last[0], last[1]);
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let line = read_line(prompt)?;
        match line.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(i18n::keys::ERROR_INVALID_NUMBER)),
        }
    }
}
