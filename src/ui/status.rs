//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    let stats = state.host.stats();
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Karten: {} (aktiv: {})",
                state.stage.len(),
                state.stage.active_count()
            ));

            ui.separator();

            ui.label(format!(
                "Links: {} | Rechts: {} | Zurück: {} | Drags: {}",
                stats.swiped_left, stats.swiped_right, stats.returned, stats.drags_began
            ));

            if let Some((index, center)) = stats.last_position {
                ui.separator();
                ui.label(format!(
                    "Karte {}: ({:.1}, {:.1})",
                    index, center.x, center.y
                ));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
