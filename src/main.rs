use clap::Parser;
use fluid_mechanics_lab::{app, config, i18n};

/// 터미널 UI 옵션.
#[derive(Parser)]
#[command(name = "fluid_mechanics_lab_cli", about = "Virtual fluid mechanics lab (terminal UI)")]
struct Cli {
    /// UI 언어 (auto/ko/ko-kr/en/en-us)
    #[arg(short = 'L', long = "lang", default_value = "auto")]
    lang: String,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("Error: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    app::run(&mut cfg, &tr)?;
    Ok(())
}
