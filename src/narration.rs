//! 평가 결과를 음성 해설로 변환하는 모듈.
//!
//! 해설 문장 생성은 순수 함수이고, 음성 합성은 `Synthesizer` 트레이트 뒤의
//! 외부 협력자(기본: 로컬 espeak)이다. 합성 결과는 uuid가 붙은 메모리 내
//! 클립이므로 반복/동시 평가가 고정 파일명을 두고 경쟁하지 않는다.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use uuid::Uuid;

use crate::i18n::{self, fill_template, Translator};
use crate::pitot::{PitotInput, PitotResult};
use crate::reynolds::{FlowRegime, ReynoldsInput, ReynoldsResult};

/// 피토관 해설 문장을 생성한다. Δp는 곡선이 아니라 슬라이더 입력값을 설명한다.
pub fn pitot_script(tr: &Translator, input: &PitotInput, result: &PitotResult) -> String {
    fill_template(
        tr.t(i18n::keys::NARRATION_PITOT),
        &[
            ("rho", format!("{}", input.density_kg_per_m3)),
            ("dp", format!("{}", input.pressure_diff_pa)),
            ("v", format!("{:.2}", result.velocity_m_per_s)),
        ],
    )
}

/// 레이놀즈 해설 문장을 생성한다.
pub fn reynolds_script(tr: &Translator, input: &ReynoldsInput, result: &ReynoldsResult) -> String {
    let regime_key = match result.regime {
        FlowRegime::Laminar => i18n::keys::REGIME_LAMINAR,
        FlowRegime::Transitional => i18n::keys::REGIME_TRANSITIONAL,
        FlowRegime::Turbulent => i18n::keys::REGIME_TURBULENT,
    };
    fill_template(
        tr.t(i18n::keys::NARRATION_REYNOLDS),
        &[
            ("v", format!("{}", input.velocity_m_per_s)),
            ("mu", format!("{}", input.dynamic_viscosity_pa_s)),
            ("re", format!("{:.0}", result.reynolds)),
            ("regime", tr.t(regime_key).to_string()),
        ],
    )
}

/// 합성된 해설 클립. 파일이 아니라 메모리 버퍼로 반환된다.
#[derive(Debug, Clone)]
pub struct NarrationClip {
    /// 평가마다 새로 발급되는 고유 식별자
    pub id: Uuid,
    /// 합성에 사용한 문장
    pub text: String,
    /// WAV 바이트
    pub wav: Vec<u8>,
}

impl NarrationClip {
    /// 요청 시에만 디스크에 저장한다. 파일명에 uuid가 들어가 덮어쓰기가 없다.
    pub fn save_to_dir(&self, dir: &Path, prefix: &str) -> io::Result<PathBuf> {
        let path = dir.join(format!("{prefix}-narration-{}.wav", self.id));
        std::fs::write(&path, &self.wav)?;
        Ok(path)
    }
}

/// 음성 합성 중 발생 가능한 오류. 수치 결과/테이블/차트에는 영향을 주지 않는다.
#[derive(Debug)]
pub enum NarrationError {
    /// 합성 엔진 실행 실패 (미설치 등)
    Spawn(io::Error),
    /// 엔진이 0이 아닌 코드로 종료
    Engine { status: Option<i32>, stderr: String },
    /// 합성 출력 읽기 실패
    Io(io::Error),
    /// 엔진이 빈 출력을 생성
    EmptyOutput,
}

impl std::fmt::Display for NarrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NarrationError::Spawn(e) => write!(f, "failed to launch speech engine: {e}"),
            NarrationError::Engine { status, stderr } => {
                let code = status.map_or("?".to_string(), |c| c.to_string());
                write!(f, "speech engine exited with code {code}: {}", stderr.trim())
            }
            NarrationError::Io(e) => write!(f, "failed to read synthesized audio: {e}"),
            NarrationError::EmptyOutput => write!(f, "speech engine produced no audio"),
        }
    }
}

impl std::error::Error for NarrationError {}

/// 텍스트를 음성 클립으로 바꾸는 외부 협력자의 좁은 인터페이스.
pub trait Synthesizer {
    fn synthesize(&self, text: &str) -> Result<NarrationClip, NarrationError>;
}

/// 로컬 TTS 엔진(espeak 계열 CLI)을 호출하는 기본 구현.
/// 엔진은 임시 파일에 WAV를 쓰고, 읽은 뒤 즉시 삭제한다.
#[derive(Debug, Clone)]
pub struct EngineSynthesizer {
    /// 실행할 명령 (기본 "espeak")
    pub command: String,
    /// 엔진 보이스 옵션 (-v)
    pub voice: Option<String>,
}

impl EngineSynthesizer {
    pub fn new(command: impl Into<String>, voice: Option<String>) -> Self {
        Self {
            command: command.into(),
            voice,
        }
    }
}

impl Default for EngineSynthesizer {
    fn default() -> Self {
        Self::new("espeak", None)
    }
}

impl Synthesizer for EngineSynthesizer {
    fn synthesize(&self, text: &str) -> Result<NarrationClip, NarrationError> {
        let id = Uuid::new_v4();
        let tmp = std::env::temp_dir().join(format!("fml-tts-{id}.wav"));

        let mut cmd = Command::new(&self.command);
        cmd.arg("-w").arg(&tmp);
        if let Some(voice) = &self.voice {
            cmd.arg("-v").arg(voice);
        }
        let output = cmd.arg(text).output().map_err(NarrationError::Spawn)?;
        if !output.status.success() {
            let _ = std::fs::remove_file(&tmp);
            return Err(NarrationError::Engine {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let wav = std::fs::read(&tmp).map_err(NarrationError::Io)?;
        let _ = std::fs::remove_file(&tmp);
        if wav.is_empty() {
            return Err(NarrationError::EmptyOutput);
        }
        Ok(NarrationClip {
            id,
            text: text.to_string(),
            wav,
        })
    }
}
