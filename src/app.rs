use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::narration;
use crate::pitot;
use crate::reynolds;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 피토관 계산 오류
    Pitot(pitot::PitotError),
    /// 레이놀즈수 계산 오류
    Reynolds(reynolds::ReynoldsError),
    /// 음성 해설 합성 오류
    Narration(narration::NarrationError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Pitot(e) => write!(f, "피토관 계산 오류: {e}"),
            AppError::Reynolds(e) => write!(f, "레이놀즈수 계산 오류: {e}"),
            AppError::Narration(e) => write!(f, "음성 해설 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<pitot::PitotError> for AppError {
    fn from(value: pitot::PitotError) -> Self {
        AppError::Pitot(value)
    }
}

impl From<reynolds::ReynoldsError> for AppError {
    fn from(value: reynolds::ReynoldsError) -> Self {
        AppError::Reynolds(value)
    }
}

impl From<narration::NarrationError> for AppError {
    fn from(value: narration::NarrationError) -> Self {
        AppError::Narration(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
/// 한 평가의 실패는 메시지 출력으로 끝나고 다음 평가에 영향을 주지 않는다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::PitotTube => ui_cli::handle_pitot(tr, config)?,
            MenuChoice::ReynoldsNumber => ui_cli::handle_reynolds(tr, config)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
