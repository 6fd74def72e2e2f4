//! Zeichnet die Karten des Stapels mit egui-Shapes.
//!
//! Jede Karte wird im lokalen Koordinatensystem (Ursprung = Kartenmitte)
//! beschrieben und über die affine Transformation der Pose in den Viewport
//! abgebildet. Rotation, Skalierung und Alpha wirken so auf alle Teile.

use crate::core::card::READ_MORE_SIZE;
use crate::core::{Card, CardImage};
use crate::shared::CardOptions;
use egui::epaint::{Mesh, TextShape, Vertex};
use egui::text::{LayoutJob, TextFormat, TextWrapping};
use egui::{Color32, FontId, Pos2, Shape, Stroke};
use glam::{Affine2, Vec2};

const MARGIN: f32 = 12.0;
const CORNER_SEGMENTS: usize = 6;
const TITLE_FONT_SIZE: f32 = 17.0;
const DATE_FONT_SIZE: f32 = 12.0;
const REMARK_FONT_SIZE: f32 = 13.0;
const DESCRIPTION_FONT_SIZE: f32 = 12.0;
const DESCRIPTION_ROWS: usize = 2;
const DESCRIPTION_HEIGHT: f32 = 34.0;
const READ_MORE_FONT_SIZE: f32 = 13.0;
const TITLE_COLOR: Color32 = Color32::from_rgb(40, 40, 40);
const SECONDARY_COLOR: Color32 = Color32::from_rgb(120, 120, 120);
const READ_MORE_COLOR: Color32 = Color32::from_rgb(220, 90, 60);

/// Zeichnet alle Karten (unten → oben) in den Viewport `rect`.
pub fn paint_cards(ui: &egui::Ui, rect: egui::Rect, cards: &[Card]) {
    let painter = ui.painter_at(rect);
    let origin = Vec2::new(rect.min.x, rect.min.y);
    for card in cards {
        paint_card(ui, &painter, origin, card);
    }
}

/// Zeichnet eine einzelne Karte.
fn paint_card(ui: &egui::Ui, painter: &egui::Painter, origin: Vec2, card: &Card) {
    let pose = card.pose();
    if pose.alpha <= 0.0 {
        return;
    }
    let options = card.options();
    let view = CardView {
        affine: Affine2::from_translation(origin) * pose.affine(),
        rotation: pose.transform.rotation,
        scale: pose.transform.scale,
        alpha: pose.alpha.clamp(0.0, 1.0),
        half: options.card_size() * 0.5,
    };

    paint_background(painter, &view, options);

    let content = card.content();
    let left = -view.half.x + MARGIN;
    let top = -view.half.y + MARGIN;
    view.text(
        painter,
        Vec2::new(left, top),
        &content.title,
        TITLE_FONT_SIZE,
        TITLE_COLOR,
    );
    view.text(
        painter,
        Vec2::new(left, top + 24.0),
        &content.date_line,
        DATE_FONT_SIZE,
        SECONDARY_COLOR,
    );

    let image_min = Vec2::new(left, top + 46.0);
    let image_max = Vec2::new(
        view.half.x - MARGIN,
        view.half.y - READ_MORE_SIZE.y - MARGIN - DESCRIPTION_HEIGHT,
    );
    if let Some(image) = &content.image {
        paint_image(ui, painter, &view, image, image_min, image_max);
    }

    view.wrapped_text(
        painter,
        Vec2::new(left, image_max.y + 4.0),
        &content.description,
        DESCRIPTION_FONT_SIZE,
        TITLE_COLOR,
        image_max.x - left,
    );

    view.text(
        painter,
        Vec2::new(left, view.half.y - READ_MORE_SIZE.y + 10.0),
        &content.remark,
        REMARK_FONT_SIZE,
        SECONDARY_COLOR,
    );

    // „Weiterlesen“ rechts unten, zentriert in der Trefferfläche
    let area_center = view.half - READ_MORE_SIZE * 0.5;
    view.centered_text(
        painter,
        area_center,
        "Weiterlesen ›",
        READ_MORE_FONT_SIZE,
        READ_MORE_COLOR,
    );
}

/// Abbildung lokaler Kartenkoordinaten in den Viewport
struct CardView {
    affine: Affine2,
    rotation: f32,
    scale: f32,
    alpha: f32,
    half: Vec2,
}

impl CardView {
    fn to_screen(&self, local: Vec2) -> Pos2 {
        let p = self.affine.transform_point2(local);
        Pos2::new(p.x, p.y)
    }

    fn layout(
        &self,
        painter: &egui::Painter,
        text: &str,
        font_size: f32,
        color: Color32,
    ) -> std::sync::Arc<egui::Galley> {
        painter.layout_no_wrap(
            text.to_owned(),
            FontId::proportional(font_size * self.scale),
            color,
        )
    }

    /// Text mit linker oberer Ecke bei `local`.
    fn text(
        &self,
        painter: &egui::Painter,
        local: Vec2,
        text: &str,
        font_size: f32,
        color: Color32,
    ) {
        if text.is_empty() {
            return;
        }
        let galley = self.layout(painter, text, font_size, color);
        painter.add(
            TextShape::new(self.to_screen(local), galley, color)
                .with_angle(self.rotation)
                .with_opacity_factor(self.alpha),
        );
    }

    /// Umbrochener Text mit höchstens `DESCRIPTION_ROWS` Zeilen, gekürzt mit „…“.
    fn wrapped_text(
        &self,
        painter: &egui::Painter,
        local: Vec2,
        text: &str,
        font_size: f32,
        color: Color32,
        width: f32,
    ) {
        if text.is_empty() {
            return;
        }
        let mut job = LayoutJob::single_section(
            text.to_owned(),
            TextFormat::simple(FontId::proportional(font_size * self.scale), color),
        );
        job.wrap = TextWrapping {
            max_width: (width * self.scale).max(1.0),
            max_rows: DESCRIPTION_ROWS,
            break_anywhere: false,
            overflow_character: Some('…'),
        };
        let galley = painter.layout_job(job);
        painter.add(
            TextShape::new(self.to_screen(local), galley, color)
                .with_angle(self.rotation)
                .with_opacity_factor(self.alpha),
        );
    }

    /// Text mit Mittelpunkt bei `local`.
    fn centered_text(
        &self,
        painter: &egui::Painter,
        local: Vec2,
        text: &str,
        font_size: f32,
        color: Color32,
    ) {
        let galley = self.layout(painter, text, font_size, color);
        // Galley-Größe ist bereits skaliert, lokal wird unskaliert gerechnet
        let size = Vec2::new(galley.size().x, galley.size().y) / self.scale.max(f32::EPSILON);
        let top_left = local - size * 0.5;
        painter.add(
            TextShape::new(self.to_screen(top_left), galley, color)
                .with_angle(self.rotation)
                .with_opacity_factor(self.alpha),
        );
    }
}

/// Schatten, Hintergrund und Rahmen als abgerundetes Polygon.
fn paint_background(painter: &egui::Painter, view: &CardView, options: &CardOptions) {
    let radius = options.corner_radius.clamp(0.0, view.half.x.min(view.half.y));

    let shadow_offset = Vec2::from(options.shadow_offset);
    let shadow_half = view.half + Vec2::splat(options.shadow_radius.max(0.0));
    let shadow_radius = radius + options.shadow_radius.max(0.0);
    let shadow_points: Vec<Pos2> = rounded_rect_outline(shadow_half, shadow_radius)
        .into_iter()
        .map(|p| view.to_screen(p + shadow_offset))
        .collect();
    let shadow_color = to_color32(options.border_color)
        .gamma_multiply(options.shadow_opacity * view.alpha * 0.35);
    painter.add(Shape::convex_polygon(shadow_points, shadow_color, Stroke::NONE));

    let points: Vec<Pos2> = rounded_rect_outline(view.half, radius)
        .into_iter()
        .map(|p| view.to_screen(p))
        .collect();
    let fill = to_color32(options.background_color).gamma_multiply(view.alpha);
    let stroke = Stroke::new(
        options.border_width * view.scale,
        to_color32(options.border_color).gamma_multiply(view.alpha),
    );
    painter.add(Shape::convex_polygon(points, fill, stroke));
}

/// Bild über den Loader holen; Spinner solange ausstehend, nichts bei Fehler.
fn paint_image(
    ui: &egui::Ui,
    painter: &egui::Painter,
    view: &CardView,
    image: &CardImage,
    min: Vec2,
    max: Vec2,
) {
    let poll = ui.ctx().try_load_texture(
        image.uri(),
        egui::TextureOptions::LINEAR,
        egui::load::SizeHint::default(),
    );
    match poll {
        Ok(egui::load::TexturePoll::Ready { texture }) => {
            let corners = [
                Vec2::new(min.x, min.y),
                Vec2::new(max.x, min.y),
                Vec2::new(max.x, max.y),
                Vec2::new(min.x, max.y),
            ];
            let uvs = cover_uvs(texture.size, max - min);
            let tint = Color32::WHITE.gamma_multiply(view.alpha);

            let mut mesh = Mesh::with_texture(texture.id);
            for (corner, uv) in corners.iter().zip(uvs) {
                mesh.vertices.push(Vertex {
                    pos: view.to_screen(*corner),
                    uv,
                    color: tint,
                });
            }
            mesh.add_triangle(0, 1, 2);
            mesh.add_triangle(0, 2, 3);
            painter.add(Shape::mesh(mesh));
        }
        Ok(egui::load::TexturePoll::Pending { .. }) => {
            let center = view.to_screen((min + max) * 0.5);
            let size = 24.0 * view.scale;
            egui::Spinner::new().size(size).paint_at(
                ui,
                egui::Rect::from_center_size(center, egui::vec2(size, size)),
            );
        }
        Err(e) => {
            log::debug!("Bild {} nicht verfügbar: {}", image.uri(), e);
        }
    }
}

/// UV-Koordinaten, die das Bild seitenverhältnistreu auf die Fläche zuschneiden.
fn cover_uvs(texture_size: egui::Vec2, area: Vec2) -> [Pos2; 4] {
    let mut u = (0.0, 1.0);
    let mut v = (0.0, 1.0);
    if texture_size.x > 0.0 && texture_size.y > 0.0 && area.x > 0.0 && area.y > 0.0 {
        let texture_aspect = texture_size.x / texture_size.y;
        let area_aspect = area.x / area.y;
        if texture_aspect > area_aspect {
            let visible = area_aspect / texture_aspect;
            u = ((1.0 - visible) * 0.5, (1.0 + visible) * 0.5);
        } else {
            let visible = texture_aspect / area_aspect;
            v = ((1.0 - visible) * 0.5, (1.0 + visible) * 0.5);
        }
    }
    [
        Pos2::new(u.0, v.0),
        Pos2::new(u.1, v.0),
        Pos2::new(u.1, v.1),
        Pos2::new(u.0, v.1),
    ]
}

/// Umriss eines abgerundeten Rechtecks um den Ursprung (im Uhrzeigersinn).
fn rounded_rect_outline(half: Vec2, radius: f32) -> Vec<Vec2> {
    let radius = radius.clamp(0.0, half.x.min(half.y));
    if radius <= 0.0 {
        return vec![
            Vec2::new(-half.x, -half.y),
            Vec2::new(half.x, -half.y),
            Vec2::new(half.x, half.y),
            Vec2::new(-half.x, half.y),
        ];
    }

    let corners = [
        (Vec2::new(half.x - radius, -half.y + radius), -std::f32::consts::FRAC_PI_2),
        (Vec2::new(half.x - radius, half.y - radius), 0.0),
        (Vec2::new(-half.x + radius, half.y - radius), std::f32::consts::FRAC_PI_2),
        (Vec2::new(-half.x + radius, -half.y + radius), std::f32::consts::PI),
    ];
    let mut points = Vec::with_capacity(corners.len() * (CORNER_SEGMENTS + 1));
    for (center, start) in corners {
        for step in 0..=CORNER_SEGMENTS {
            let angle = start + std::f32::consts::FRAC_PI_2 * step as f32 / CORNER_SEGMENTS as f32;
            points.push(center + Vec2::from_angle(angle) * radius);
        }
    }
    points
}

/// RGBA-Array (0..1) als egui-Farbe.
fn to_color32(color: [f32; 4]) -> Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RecipeRecord, ScriptedJitter};
    use approx::assert_relative_eq;

    #[test]
    fn test_rounded_outline_stays_inside_half_extent() {
        let half = Vec2::new(150.0, 160.0);
        let points = rounded_rect_outline(half, 6.0);
        assert_eq!(points.len(), 4 * (CORNER_SEGMENTS + 1));
        for p in points {
            assert!(p.x.abs() <= half.x + 1e-3 && p.y.abs() <= half.y + 1e-3);
        }
    }

    fn painted_texts(card: &Card) -> Vec<String> {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                paint_cards(ui, ui.max_rect(), std::slice::from_ref(card));
            });
        });
        output
            .shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                Shape::Text(text) => Some(text.galley.text().to_owned()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_card_paints_description_below_image() {
        let mut card = Card::new(
            &CardOptions::default(),
            Vec2::new(400.0, 800.0),
            &mut ScriptedJitter::default(),
        );
        card.bind_content(&RecipeRecord {
            recipe_title: "Miso-Suppe".into(),
            recipe_description: "Dashi erhitzen, Tofu und Wakame zugeben, Miso einrühren.".into(),
            ..RecipeRecord::default()
        });
        card.advance(5.0);

        let texts = painted_texts(&card);

        assert!(texts.iter().any(|t| t == "Miso-Suppe"));
        assert!(texts.iter().any(|t| t.starts_with("Dashi erhitzen")));
    }

    #[test]
    fn test_zero_radius_gives_plain_rect() {
        assert_eq!(rounded_rect_outline(Vec2::new(10.0, 5.0), 0.0).len(), 4);
    }

    #[test]
    fn test_cover_uvs_crop_wide_image_horizontally() {
        let uvs = cover_uvs(egui::vec2(200.0, 100.0), Vec2::new(100.0, 100.0));
        assert_relative_eq!(uvs[0].x, 0.25);
        assert_relative_eq!(uvs[1].x, 0.75);
        assert_relative_eq!(uvs[0].y, 0.0);
        assert_relative_eq!(uvs[2].y, 1.0);
    }

    #[test]
    fn test_to_color32_clamps_channels() {
        assert_eq!(to_color32([2.0, -1.0, 1.0, 1.0]), Color32::from_rgb(255, 0, 255));
    }
}
