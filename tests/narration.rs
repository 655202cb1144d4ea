use fluid_mechanics_lab::i18n::Translator;
use fluid_mechanics_lab::narration::{
    self, NarrationClip, NarrationError, Synthesizer,
};
use fluid_mechanics_lab::pitot::{self, PitotInput};
use fluid_mechanics_lab::reynolds::{self, ReynoldsInput};
use uuid::Uuid;

/// 항상 성공하는 스텁 합성기. 파일 시스템과 외부 엔진 없이 검증한다.
struct StubSynth;

impl Synthesizer for StubSynth {
    fn synthesize(&self, text: &str) -> Result<NarrationClip, NarrationError> {
        Ok(NarrationClip {
            id: Uuid::new_v4(),
            text: text.to_string(),
            wav: vec![0x52, 0x49, 0x46, 0x46],
        })
    }
}

/// 항상 실패하는 스텁 합성기.
struct FailingSynth;

impl Synthesizer for FailingSynth {
    fn synthesize(&self, _text: &str) -> Result<NarrationClip, NarrationError> {
        Err(NarrationError::EmptyOutput)
    }
}

#[test]
fn english_pitot_script_matches_expected_wording() {
    let tr = Translator::new("en");
    let input = PitotInput {
        density_kg_per_m3: 1000.0,
        pressure_diff_pa: 100.0,
    };
    let result = pitot::evaluate(input).unwrap();
    let script = narration::pitot_script(&tr, &input, &result);
    assert_eq!(
        script,
        "With a fluid density of 1000 and pressure difference of 100, \
         the calculated velocity is 0.45 meters per second."
    );
}

#[test]
fn english_reynolds_script_matches_expected_wording() {
    let tr = Translator::new("en");
    let input = ReynoldsInput {
        density_kg_per_m3: 1000.0,
        velocity_m_per_s: 1.0,
        diameter_m: 0.05,
        dynamic_viscosity_pa_s: 0.001,
    };
    let result = reynolds::evaluate(input).unwrap();
    let script = narration::reynolds_script(&tr, &input, &result);
    assert_eq!(
        script,
        "With velocity 1 meters per second and viscosity 0.001, \
         the Reynolds number is 50000. This indicates Turbulent flow."
    );
}

#[test]
fn korean_scripts_use_localized_regime_names() {
    let tr = Translator::new("ko");
    let input = ReynoldsInput {
        density_kg_per_m3: 1000.0,
        velocity_m_per_s: 0.002,
        diameter_m: 0.01,
        dynamic_viscosity_pa_s: 0.01,
    };
    let result = reynolds::evaluate(input).unwrap();
    let script = narration::reynolds_script(&tr, &input, &result);
    assert!(script.contains("층류"), "script={script}");
    assert!(script.contains('2'), "script={script}");
}

#[test]
fn scripts_describe_slider_pressure_not_curve() {
    // 해설의 Δp는 참조 곡선이 아니라 입력 슬라이더 값이다.
    let tr = Translator::new("en");
    let input = PitotInput {
        density_kg_per_m3: 900.0,
        pressure_diff_pa: 250.0,
    };
    let result = pitot::evaluate(input).unwrap();
    let script = narration::pitot_script(&tr, &input, &result);
    assert!(script.contains("pressure difference of 250"), "script={script}");
}

#[test]
fn narration_failure_leaves_evaluation_untouched() {
    let tr = Translator::new("en");
    let input = ReynoldsInput::default();
    let result = reynolds::evaluate(input).unwrap();
    let rows_before = reynolds::summary_rows(&input, &result);

    let script = narration::reynolds_script(&tr, &input, &result);
    let err = FailingSynth.synthesize(&script).unwrap_err();
    assert!(matches!(err, NarrationError::EmptyOutput));

    // 합성 실패 후에도 수치 결과와 요약은 동일하다.
    let rows_after = reynolds::summary_rows(&input, &result);
    assert_eq!(rows_before, rows_after);
    assert_eq!(reynolds::evaluate(input).unwrap(), result);
}

#[test]
fn clips_from_identical_text_get_distinct_ids() {
    let a = StubSynth.synthesize("same text").unwrap();
    let b = StubSynth.synthesize("same text").unwrap();
    assert_eq!(a.text, b.text);
    assert_ne!(a.id, b.id);
}

#[test]
fn saved_clip_filename_carries_prefix_and_id() {
    let clip = StubSynth.synthesize("hello").unwrap();
    let dir = std::env::temp_dir();
    let path = clip.save_to_dir(&dir, "pitot").unwrap();
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("pitot-narration-"), "name={name}");
    assert!(name.ends_with(".wav"), "name={name}");
    assert!(name.contains(&clip.id.to_string()), "name={name}");
    let _ = std::fs::remove_file(path);
}

#[test]
fn missing_engine_reports_spawn_error() {
    let synth = narration::EngineSynthesizer::new("definitely-not-a-real-tts-engine", None);
    match synth.synthesize("hello") {
        Err(NarrationError::Spawn(_)) => {}
        other => panic!("expected spawn error, got {other:?}"),
    }
}
