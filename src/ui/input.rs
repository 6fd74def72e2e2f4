//! Viewport-Input-Handling: Primär-Drag und Klicks → AppIntent.

use crate::app::AppIntent;

/// Verwaltet den Drag-Zustand des Karten-Viewports.
///
/// Alle Positionen werden relativ zur linken oberen Ecke des Viewports
/// weitergegeben.
#[derive(Debug, Default)]
pub struct InputState {
    /// Position des Drucks, der den laufenden Drag ausgelöst hat
    press_origin: Option<egui::Pos2>,
    /// Zuletzt gemeldete Verschiebung
    last_translation: glam::Vec2,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true`, solange ein Drag läuft.
    pub fn is_dragging(&self) -> bool {
        self.press_origin.is_some()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let rect = response.rect;
        let mut events = vec![AppIntent::ViewportResized {
            size: glam::Vec2::new(rect.width(), rect.height()),
        }];

        let (pointer_pos, press_origin, velocity, focused) = ui.input(|i| {
            (
                i.pointer.interact_pos(),
                i.pointer.press_origin(),
                i.pointer.velocity(),
                i.focused,
            )
        });
        let velocity = glam::Vec2::new(velocity.x, velocity.y);

        if response.drag_started_by(egui::PointerButton::Primary) {
            if let (Some(origin), Some(pos)) = (press_origin, pointer_pos) {
                self.press_origin = Some(origin);
                let translation = to_vec2(pos - origin);
                self.last_translation = translation;
                events.push(AppIntent::DragStarted {
                    pointer_pos: to_vec2(origin - rect.min),
                    translation,
                });
            }
        }

        let Some(origin) = self.press_origin else {
            if response.clicked() {
                if let Some(pos) = pointer_pos {
                    events.push(AppIntent::CardTapped {
                        pointer_pos: to_vec2(pos - rect.min),
                    });
                }
            }
            return events;
        };

        if let Some(pos) = pointer_pos {
            let translation = to_vec2(pos - origin);
            if translation != self.last_translation {
                self.last_translation = translation;
                events.push(AppIntent::DragMoved { translation });
            }
        }

        if response.drag_stopped() {
            events.push(AppIntent::DragReleased {
                translation: self.last_translation,
                velocity,
            });
            self.press_origin = None;
        } else if !focused || !response.dragged() {
            // Fokusverlust oder Drag ohne Loslass-Ereignis verschwunden
            events.push(AppIntent::DragCancelled {
                translation: self.last_translation,
                velocity,
            });
            self.press_origin = None;
        }

        events
    }
}

fn to_vec2(v: egui::Vec2) -> glam::Vec2 {
    glam::Vec2::new(v.x, v.y)
}
