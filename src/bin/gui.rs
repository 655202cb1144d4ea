#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};
use fluid_mechanics_lab::{
    config,
    i18n::{self, fill_template},
    narration::{self, Synthesizer},
    pitot, reynolds,
};
use std::{env, fs, path::Path};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let viewport = egui::ViewportBuilder::default().with_transparent(true);
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Virtual Fluid Mechanics Lab",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 기본 폰트를 우선 적용한다.
/// 1) assets/fonts/ 안의 첫 .ttf/.ttc
/// 2) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    if let Ok(entries) = fs::read_dir("assets/fonts") {
        for entry in entries.flatten() {
            let p = entry.path();
            let is_font = p
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| matches!(e.to_lowercase().as_str(), "ttf" | "ttc"))
                .unwrap_or(false);
            if is_font {
                let bytes =
                    fs::read(&p).map_err(|e| format!("Failed to read font file: {e}"))?;
                apply_font_bytes(ctx, bytes, "bundled_font");
                return Ok(());
            }
        }
    }

    // 2) 시스템 폰트 탐색 (Windows 기준)
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = [
            "malgun.ttf",
            "malgunsl.ttf",
            "malgunbd.ttf",
            "gulim.ttc",
            "batang.ttc",
        ];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    // 3) 실패: 기본 폰트 유지, 사용자 지정 안내
    Err("Font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Experiment {
    PitotTube,
    ReynoldsNumber,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    experiment: Experiment,
    window_alpha: f32,
    show_settings_modal: bool,
    // 설정 창
    lang_input: String,
    custom_font_path: String,
    font_load_error: Option<String>,
    // 피토관
    pitot_density: f64,
    pitot_pressure_diff: f64,
    pitot_narration: bool,
    pitot_narration_status: Option<Result<String, String>>,
    // 레이놀즈수
    rey_density: f64,
    rey_velocity: f64,
    rey_diameter: f64,
    rey_viscosity: f64,
    rey_narration: bool,
    rey_narration_status: Option<Result<String, String>>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let lang_input = config.language.clone();
        let pitot_defaults = pitot::PitotInput::default();
        let rey_defaults = reynolds::ReynoldsInput::default();
        Self {
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            config,
            tr,
            experiment: Experiment::PitotTube,
            show_settings_modal: false,
            lang_input,
            custom_font_path: String::new(),
            font_load_error: None,
            pitot_density: pitot_defaults.density_kg_per_m3,
            pitot_pressure_diff: pitot_defaults.pressure_diff_pa,
            pitot_narration: false,
            pitot_narration_status: None,
            rey_density: rey_defaults.density_kg_per_m3,
            rey_velocity: rey_defaults.velocity_m_per_s,
            rey_diameter: rey_defaults.diameter_m,
            rey_viscosity: rey_defaults.dynamic_viscosity_pa_s,
            rey_narration: false,
            rey_narration_status: None,
        }
    }

    /// 해설을 합성해 고유 파일명으로 저장하고 상태 문자열을 만든다.
    /// 실패해도 평가 결과(테이블/차트)는 그대로 유지된다.
    fn synthesize_narration(&self, script: &str, prefix: &str) -> Result<String, String> {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let synth = narration::EngineSynthesizer::new(
            self.config.narration.engine.clone(),
            self.config.narration.voice.clone(),
        );
        match synth
            .synthesize(script)
            .and_then(|clip| clip.save_to_dir(&env::temp_dir(), prefix).map_err(narration::NarrationError::Io))
        {
            Ok(path) => Ok(fill_template(
                &txt("gui.narration.saved", "Narration saved: {path}"),
                &[("path", path.display().to_string())],
            )),
            Err(e) => Err(fill_template(
                &txt(
                    "gui.narration.failed",
                    "Narration failed (results unaffected): {e}",
                ),
                &[("e", e.to_string())],
            )),
        }
    }

    fn ui_pitot(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.pitot.heading", "Pitot Tube Flow Measurement"));
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.add(
                egui::Slider::new(&mut self.pitot_density, 800.0..=1200.0)
                    .text(txt("gui.pitot.density", "Fluid Density (kg/m³)")),
            );
            ui.add(
                egui::Slider::new(&mut self.pitot_pressure_diff, 0.0..=1000.0)
                    .text(txt("gui.pitot.pressure_diff", "Pressure Difference (Pa)")),
            );
        });

        let input = pitot::PitotInput {
            density_kg_per_m3: self.pitot_density,
            pressure_diff_pa: self.pitot_pressure_diff,
        };
        let result = match pitot::evaluate(input) {
            Ok(r) => r,
            Err(e) => {
                // 슬라이더 범위에서는 도달 불가. 도달 시 테이블/차트 없이 메시지만.
                ui.colored_label(egui::Color32::RED, format!("{}: {e}", self.tr.t(i18n::keys::ERROR_PREFIX)));
                return;
            }
        };

        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(fill_template(
                &txt("gui.pitot.success", "Calculated Velocity: {v} m/s"),
                &[("v", format!("{:.2}", result.velocity_m_per_s))],
            ))
            .color(egui::Color32::from_rgb(46, 160, 67))
            .strong(),
        );

        ui.add_space(6.0);
        egui::Grid::new("pitot_summary")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for (key, value) in pitot::summary_rows(&input, &result) {
                    ui.strong(key);
                    ui.label(value);
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        ui.label(txt("gui.pitot.plot_title", "Velocity vs Pressure Difference"));
        let points = PlotPoints::from(result.curve.clone());
        Plot::new("pitot_curve")
            .height(240.0)
            .allow_drag(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(points)
                        .color(egui::Color32::from_rgb(43, 108, 176))
                        .width(2.0),
                );
            });

        ui.add_space(8.0);
        ui.checkbox(
            &mut self.pitot_narration,
            txt("gui.narration.enable", "Enable Narration"),
        );
        if self.pitot_narration {
            if ui
                .button(txt("gui.narration.generate", "Generate narration"))
                .clicked()
            {
                let script = narration::pitot_script(&self.tr, &input, &result);
                self.pitot_narration_status = Some(self.synthesize_narration(&script, "pitot"));
            }
            match &self.pitot_narration_status {
                Some(Ok(msg)) => {
                    ui.label(msg);
                }
                Some(Err(msg)) => {
                    ui.colored_label(egui::Color32::from_rgb(255, 140, 0), msg);
                }
                None => {}
            }
        }
    }

    fn ui_reynolds(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.reynolds.heading", "Reynolds Number Flow Visualization"));
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.add(
                egui::Slider::new(&mut self.rey_density, 800.0..=1200.0)
                    .text(txt("gui.pitot.density", "Fluid Density (kg/m³)")),
            );
            ui.add(
                egui::Slider::new(&mut self.rey_velocity, 0.0..=10.0)
                    .text(txt("gui.reynolds.velocity", "Velocity (m/s)")),
            );
            ui.add(
                egui::Slider::new(&mut self.rey_diameter, 0.01..=0.1)
                    .text(txt("gui.reynolds.diameter", "Pipe Diameter (m)")),
            );
            ui.add(
                egui::Slider::new(&mut self.rey_viscosity, 0.001..=0.01)
                    .text(txt("gui.reynolds.viscosity", "Dynamic Viscosity (Pa·s)")),
            );
        });

        let input = reynolds::ReynoldsInput {
            density_kg_per_m3: self.rey_density,
            velocity_m_per_s: self.rey_velocity,
            diameter_m: self.rey_diameter,
            dynamic_viscosity_pa_s: self.rey_viscosity,
        };
        let result = match reynolds::evaluate(input) {
            Ok(r) => r,
            Err(e) => {
                ui.colored_label(egui::Color32::RED, format!("{}: {e}", self.tr.t(i18n::keys::ERROR_PREFIX)));
                return;
            }
        };

        let regime_key = match result.regime {
            reynolds::FlowRegime::Laminar => i18n::keys::REGIME_LAMINAR,
            reynolds::FlowRegime::Transitional => i18n::keys::REGIME_TRANSITIONAL,
            reynolds::FlowRegime::Turbulent => i18n::keys::REGIME_TURBULENT,
        };
        let regime_label = self.tr.t(regime_key).to_string();
        let [r, g, b] = result.regime.color_rgb();
        let regime_color = egui::Color32::from_rgb(r, g, b);

        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(fill_template(
                &txt("gui.reynolds.success", "Reynolds Number: {re} — Flow is {regime}"),
                &[
                    ("re", format!("{:.0}", result.reynolds)),
                    ("regime", regime_label.clone()),
                ],
            ))
            .color(regime_color)
            .strong(),
        );

        ui.add_space(6.0);
        egui::Grid::new("reynolds_summary")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for (key, value) in reynolds::summary_rows(&input, &result) {
                    ui.strong(key);
                    ui.label(value);
                    ui.end_row();
                }
            });

        // 색 블록 차트: 분류 결과를 단일 가로 막대로 표시한다.
        ui.add_space(8.0);
        ui.label(fill_template(
            &txt("gui.reynolds.plot_title", "Flow Type: {regime}"),
            &[("regime", regime_label)],
        ));
        let bar = Bar::new(0.0, 1.0).fill(regime_color);
        Plot::new("regime_block")
            .height(100.0)
            .show_axes([false, false])
            .show_grid([false, false])
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .include_x(0.0)
            .include_x(1.0)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(vec![bar]).horizontal());
            });

        ui.add_space(8.0);
        ui.checkbox(
            &mut self.rey_narration,
            txt("gui.narration.enable", "Enable Narration"),
        );
        if self.rey_narration {
            if ui
                .button(txt("gui.narration.generate", "Generate narration"))
                .clicked()
            {
                let script = narration::reynolds_script(&self.tr, &input, &result);
                self.rey_narration_status = Some(self.synthesize_narration(&script, "reynolds"));
            }
            match &self.rey_narration_status {
                Some(Ok(msg)) => {
                    ui.label(msg);
                }
                Some(Err(msg)) => {
                    ui.colored_label(egui::Color32::from_rgb(255, 140, 0), msg);
                }
                None => {}
            }
        }
    }

    fn ui_settings_window(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let mut open = self.show_settings_modal;
        let mut apply_clicked = false;
        let mut font_apply_clicked = false;
        egui::Window::new(txt("gui.settings.heading", "Settings"))
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(txt("gui.settings.language", "Language (auto/ko/en)"));
                        ui.text_edit_singleline(&mut self.lang_input);
                        ui.end_row();
                        ui.label(txt("gui.settings.alpha", "Window transparency"));
                        ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0));
                        ui.end_row();
                        ui.label(txt("gui.settings.font_path", "Custom font path (.ttf/.ttc)"));
                        ui.text_edit_singleline(&mut self.custom_font_path);
                        ui.end_row();
                    });
                ui.horizontal(|ui| {
                    if ui.button(txt("gui.settings.apply", "Apply")).clicked() {
                        apply_clicked = true;
                    }
                    if !self.custom_font_path.trim().is_empty()
                        && ui.button("Load font").clicked()
                    {
                        font_apply_clicked = true;
                    }
                });
                if let Some(err) = &self.font_load_error {
                    ui.colored_label(egui::Color32::RED, err);
                }
            });
        self.show_settings_modal = open;

        if apply_clicked {
            self.config.language = self.lang_input.trim().to_string();
            self.config.window_alpha = self.window_alpha;
            let lang_code = i18n::resolve_language("auto", Some(self.config.language.as_str()));
            self.tr = i18n::Translator::new_with_pack(
                &lang_code,
                self.config.language_pack_dir.as_deref(),
            );
            if let Err(e) = self.config.save() {
                eprintln!("Config save error: {e}");
            }
        }
        if font_apply_clicked {
            self.font_load_error = load_custom_font(ctx, self.custom_font_path.trim()).err();
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Virtual Fluid Mechanics Lab"));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙").clicked() {
                        self.show_settings_modal = !self.show_settings_modal;
                    }
                });
            });
            ui.separator();

            ui.horizontal(|ui| {
                ui.label(txt("gui.nav.experiment", "Choose an Experiment:"));
                ui.radio_value(
                    &mut self.experiment,
                    Experiment::PitotTube,
                    txt("gui.pitot.heading", "Pitot Tube Flow Measurement"),
                );
                ui.radio_value(
                    &mut self.experiment,
                    Experiment::ReynoldsNumber,
                    txt("gui.reynolds.heading", "Reynolds Number Flow Visualization"),
                );
            });
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| match self.experiment {
                Experiment::PitotTube => self.ui_pitot(ui),
                Experiment::ReynoldsNumber => self.ui_reynolds(ui),
            });
        });

        if self.show_settings_modal {
            self.ui_settings_window(ctx);
        }
    }
}
