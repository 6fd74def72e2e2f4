//! Swipe Card View.
//!
//! Demo-Host für wischbare Rezeptkarten: Karten einfliegen lassen, ziehen,
//! zurückfedern oder nach links/rechts wegwischen.

use eframe::egui;
use swipe_card_view::{ui, AppController, AppIntent, AppState, CardOptions};

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

        log::info!("Swipe Card View v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([480.0, 800.0])
                .with_title("Swipe Card View"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Swipe Card View",
            options,
            Box::new(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(SwipeApp::new()))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SwipeApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl SwipeApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = CardOptions::config_path();
        let card_options = CardOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = card_options;

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for SwipeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.collect_ui_events(ctx);
        events.push(AppIntent::FrameAdvanced {
            dt: ctx.input(|i| i.stable_dt),
        });

        self.process_events(events);

        self.maybe_request_repaint(ctx);
    }
}

impl SwipeApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::show_options_dialog(ctx, &self.state));
        events.extend(ui::show_detail_window(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_rgb(245, 242, 238)))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(ui, &response));

                ui::paint_cards(ui, rect, self.state.stage.cards());

                if self.state.deck.records.is_empty() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Keine Rezepte vorhanden",
                        egui::FontId::proportional(20.0),
                        egui::Color32::GRAY,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context) {
        if self.state.stage.is_animating()
            || self.input.is_dragging()
            || ctx.input(|i| i.pointer.is_moving())
        {
            ctx.request_repaint();
        }
    }
}
