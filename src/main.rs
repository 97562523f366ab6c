//! Reverse Desmos AI.
//!
//! Freihand-Kurve zeichnen, Punkte an ein Fit-Backend schicken und die
//! vorhergesagte Gleichung samt Fit-Kurve anzeigen.

use eframe::egui;
use reverse_desmos::{ui, AppController, AppIntent, AppOptions, AppState, DispatchGate};

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

        log::info!("Reverse Desmos AI v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1100.0, 860.0])
                .with_title("Reverse Desmos AI"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Reverse Desmos AI",
            options,
            Box::new(|_cc| Ok(Box::new(SketchApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SketchApp {
    state: AppState,
    controller: AppController,
    canvas_view: ui::CanvasView,
    dispatch_gate: DispatchGate,
}

impl SketchApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = AppOptions::config_path();
        let options = AppOptions::load_from_file(&config_path);
        log::info!("Backend: {}", options.backend_url);

        let mut state = AppState::with_options(options);
        state.options_path = Some(config_path);

        Self {
            state,
            controller: AppController::new(),
            canvas_view: ui::CanvasView::new(),
            dispatch_gate: DispatchGate::new(),
        }
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Request erst absetzen, nachdem der Wartehinweis gezeichnet wurde
        if self.dispatch_gate.take_ready(&self.state) {
            self.process_events(vec![AppIntent::AnalysisDispatchReady]);
        }

        let queued_at_render = self.state.analysis.is_queued();
        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();
        self.process_events(events);
        self.dispatch_gate.frame_rendered(queued_at_render);

        if self.state.analysis.is_queued() {
            ctx.request_repaint();
        } else if has_events || self.state.show_options_dialog {
            ctx.request_repaint();
        }
    }
}

impl SketchApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_sidebar(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        let scene = self.controller.build_plot_scene(&self.state);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("🎨 Reverse Desmos AI — Draw and Get Equation");
                ui.label("Draw a curve below and let the AI guess its mathematical form!");
                ui.add_space(8.0);

                events.extend(self.canvas_view.show(ui, &self.state));

                ui.add_space(12.0);
                ui::render_result(ui, &self.state, scene.as_ref());
            });
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("{:#}", e));
            }
        }
    }
}
