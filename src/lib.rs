//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 모듈을 공유한다.

pub mod app;
pub mod config;
pub mod i18n;
pub mod narration;
pub mod pitot;
pub mod reynolds;
pub mod ui_cli;
