//! Detail-Fenster für „Weiterlesen“.

use crate::app::{AppIntent, AppState};

/// Zeigt den Inhalt der angetippten Karte und gibt erzeugte Events zurück.
pub fn show_detail_window(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(content) = &state.ui.detail else {
        return events;
    };

    let mut open = true;
    egui::Window::new(content.title.as_str())
        .id(egui::Id::new("card_detail"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(360.0)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(&content.date_line).weak());
            if !content.remark.is_empty() {
                ui.label(&content.remark);
            }
            if let Some(image) = &content.image {
                ui.add(egui::Image::new(image.uri()).max_width(340.0));
            }
            ui.separator();
            ui.label(&content.description);
            ui.separator();
            if ui.button("Schließen").clicked() {
                events.push(AppIntent::DetailsClosed);
            }
        });

    if !open {
        events.push(AppIntent::DetailsClosed);
    }

    events
}
