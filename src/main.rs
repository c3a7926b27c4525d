//! Desmos Sketch Exporter.
//!
//! Freihand-Striche aufnehmen oder Bilder vektorisieren und als
//! parametrische Desmos-Ausdrücke in eine Textdatei schreiben.

use desmos_sketch::{ui, AppController, AppIntent, AppState, SketchOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Desmos Sketch Exporter v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SketchOptions::config_path();
        let sketch_options = SketchOptions::load_from_file(&config_path);

        // Platz für Toolbar und Statusleiste über bzw. unter dem Canvas
        let window_size = [
            sketch_options.canvas_width as f32 + 16.0,
            sketch_options.canvas_height as f32 + 80.0,
        ];

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(window_size)
                .with_title("Desmos Sketch Exporter"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Desmos Sketch Exporter",
            options,
            Box::new(move |_cc| Ok(Box::new(SketchApp::new(sketch_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SketchApp {
    state: AppState,
    controller: AppController,
    canvas: ui::CanvasInput,
}

impl SketchApp {
    fn new(options: SketchOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            canvas: ui::CanvasInput::new(),
        }
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        if has_events || self.state.ui.show_options_dialog {
            ctx.request_repaint();
        }
    }
}

impl SketchApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        let scene = self.controller.build_canvas_scene(&self.state);
        egui::CentralPanel::default().show(ctx, |ui| {
            events.extend(self.canvas.show(ui, &scene));
        });

        events.extend(self.canvas.drive_sampling(ctx, &mut self.state.sampling));

        if ctx.input(|i| i.viewport().close_requested()) {
            events.push(AppIntent::ExitRequested);
        }

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
