//! Optionen-Dialog für Animationen, Schwellen und Kartenstil.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
///
/// Änderungen gelten für Karten, die danach aufgelegt werden.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 16.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Animationen ─────────────────────────────────
                    ui.collapsing("Animationen (s)", |ui| {
                        changed |= value_edit(
                            ui,
                            "Einflug:",
                            &mut opts.duration_of_initialize,
                            0.0..=5.0,
                            0.01,
                        );
                        changed |= value_edit(
                            ui,
                            "Drag-Blende:",
                            &mut opts.duration_of_start_dragging,
                            0.0..=5.0,
                            0.01,
                        );
                        changed |= value_edit(
                            ui,
                            "Rückfedern:",
                            &mut opts.duration_of_return_original,
                            0.0..=5.0,
                            0.01,
                        );
                        changed |= value_edit(
                            ui,
                            "Wegwischen:",
                            &mut opts.duration_of_swipe_out,
                            0.0..=5.0,
                            0.01,
                        );
                    });

                    // ── Drag ────────────────────────────────────────
                    ui.collapsing("Drag", |ui| {
                        changed |= value_edit(
                            ui,
                            "Alpha beim Drag:",
                            &mut opts.start_dragging_alpha,
                            0.0..=1.0,
                            0.01,
                        );
                        changed |= value_edit(
                            ui,
                            "Alpha nach Drag:",
                            &mut opts.stop_dragging_alpha,
                            0.0..=1.0,
                            0.01,
                        );
                        changed |= value_edit(
                            ui,
                            "Skalierung beim Drag:",
                            &mut opts.max_scale_of_dragging,
                            0.1..=2.0,
                            0.01,
                        );
                        changed |= value_edit(
                            ui,
                            "Schwelle X:",
                            &mut opts.swipe_x_pos_limit_ratio,
                            0.01..=0.99,
                            0.005,
                        );
                        changed |= value_edit(
                            ui,
                            "Schwelle Y:",
                            &mut opts.swipe_y_pos_limit_ratio,
                            0.01..=0.99,
                            0.005,
                        );
                    });

                    // ── Einflug ─────────────────────────────────────
                    ui.collapsing("Einflug", |ui| {
                        changed |= value_edit(
                            ui,
                            "Skalierung vorher:",
                            &mut opts.before_initialize_scale,
                            0.1..=3.0,
                            0.01,
                        );
                        changed |= value_edit(
                            ui,
                            "Skalierung nachher:",
                            &mut opts.after_initialize_scale,
                            0.1..=3.0,
                            0.01,
                        );
                    });

                    // ── Stil ────────────────────────────────────────
                    ui.collapsing("Stil", |ui| {
                        changed |= value_edit(
                            ui,
                            "Breite:",
                            &mut opts.card_width,
                            120.0..=800.0,
                            1.0,
                        );
                        changed |= value_edit(
                            ui,
                            "Höhe:",
                            &mut opts.card_height,
                            120.0..=800.0,
                            1.0,
                        );
                        changed |= value_edit(
                            ui,
                            "Rahmenbreite:",
                            &mut opts.border_width,
                            0.0..=10.0,
                            0.05,
                        );
                        changed |= value_edit(
                            ui,
                            "Eckenradius:",
                            &mut opts.corner_radius,
                            0.0..=60.0,
                            0.5,
                        );
                        changed |= value_edit(
                            ui,
                            "Schatten-Radius:",
                            &mut opts.shadow_radius,
                            0.0..=30.0,
                            0.1,
                        );
                        changed |= value_edit(
                            ui,
                            "Schatten-Deckkraft:",
                            &mut opts.shadow_opacity,
                            0.0..=1.0,
                            0.01,
                        );
                        changed |= color_edit(ui, "Hintergrund:", &mut opts.background_color);
                        changed |= color_edit(ui, "Rahmen:", &mut opts.border_color);
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::OptionsReset);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::OptionsClosed);
                }
            });
        });

    if changed {
        events.push(AppIntent::OptionsApplied {
            options: Box::new(opts),
        });
    }

    events
}

/// Hilfsfunktion: beschrifteter Zahlenwert mit Bereich.
fn value_edit(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed = ui
            .add(egui::DragValue::new(value).range(range).speed(speed))
            .changed();
    });
    changed
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
