//! Top-Menü (Stapel, Ansicht).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Stapel", |ui| {
                let has_records = !state.deck.records.is_empty();
                if ui
                    .add_enabled(has_records, egui::Button::new("Karte auflegen"))
                    .clicked()
                {
                    events.push(AppIntent::DealRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OptionsRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
