//! Zeichenflaeche: Freihand-Eingabe und Darstellung der gezeichneten Pfade.

use glam::DVec2;

use super::rgb_to_color32;
use crate::app::{AppIntent, AppState};
use crate::core::{render_grid_image, Rgb, StrokePoint, GRID_LINE_COLOR};

/// Schlüssel des gecachten Raster-Bildes (neu rendern bei Änderung).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridKey {
    size: [u32; 2],
    grid_size: u32,
    background: Rgb,
}

/// Zeichenflaeche mit gecachter Raster-Textur.
#[derive(Default)]
pub struct CanvasView {
    grid_texture: Option<(GridKey, egui::TextureHandle)>,
}

impl CanvasView {
    /// Erstellt eine Zeichenflaeche ohne Textur.
    pub fn new() -> Self {
        Self { grid_texture: None }
    }

    /// Zeichnet die Flaeche samt Objekten und liefert Stroke-Intents.
    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let [width, height] = state.options.canvas_size();
        let (response, painter) = ui.allocate_painter(
            egui::vec2(width as f32, height as f32),
            egui::Sense::drag(),
        );
        let rect = response.rect;

        // ── Hintergrund ──
        if state.canvas.show_grid {
            let texture_id = self.grid_texture_id(ui.ctx(), state);
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(texture_id, rect, uv, egui::Color32::WHITE);
        } else {
            painter.rect_filled(rect, 0.0, rgb_to_color32(state.options.background_color));
        }
        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::GRAY),
            egui::StrokeKind::Outside,
        );

        // ── Gezeichnete Objekte ──
        let painter = painter.with_clip_rect(rect);
        if let Some(payload) = &state.canvas.payload {
            for object in payload.objects.iter().filter(|o| o.is_path()) {
                let width = object.stroke_width.unwrap_or(1.0) as f32;
                let color = rgb_to_color32(object.stroke_rgb());
                paint_polyline(&painter, rect, object.points(), width, color);
            }
        }

        // ── Laufender Stroke ──
        if state.canvas.drawing {
            paint_polyline(
                &painter,
                rect,
                state.canvas.active_stroke.iter().copied(),
                f32::from(state.canvas.stroke_width),
                rgb_to_color32(state.canvas.stroke_color),
            );
        }

        // ── Eingabe ──
        let to_canvas = |pos: egui::Pos2| -> StrokePoint {
            DVec2::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64)
        };

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(AppIntent::StrokeStarted {
                    pos: to_canvas(pos),
                });
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(AppIntent::StrokeExtended {
                    pos: to_canvas(pos),
                });
            }
        }
        if response.drag_stopped() {
            events.push(AppIntent::StrokeFinished);
        }

        if state.canvas.payload.is_none() && !state.canvas.drawing {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Draw here",
                egui::FontId::proportional(18.0),
                egui::Color32::LIGHT_GRAY,
            );
        }

        events
    }

    /// Liefert die Raster-Textur; rendert sie neu, wenn Größe, Weite oder Farbe abweichen.
    fn grid_texture_id(&mut self, ctx: &egui::Context, state: &AppState) -> egui::TextureId {
        let key = GridKey {
            size: state.options.canvas_size(),
            grid_size: state.canvas.grid_size,
            background: state.options.background_color,
        };

        let stale = !matches!(&self.grid_texture, Some((cached, _)) if *cached == key);
        if stale {
            self.grid_texture = None;
        }

        let (_, handle) = self.grid_texture.get_or_insert_with(|| {
            let image = render_grid_image(
                key.size[0],
                key.size[1],
                key.grid_size,
                key.background,
                GRID_LINE_COLOR,
            );
            let color_image = egui::ColorImage::from_rgba_unmultiplied(
                [image.width() as usize, image.height() as usize],
                image.as_raw(),
            );
            log::debug!(
                "Raster-Textur erzeugt: {}x{}, Weite {}",
                key.size[0],
                key.size[1],
                key.grid_size
            );
            (
                key,
                ctx.load_texture("canvas_grid", color_image, egui::TextureOptions::NEAREST),
            )
        });

        handle.id()
    }
}

/// Zeichnet eine Punktfolge als Linienzug (Einzelpunkt als Kreis).
fn paint_polyline(
    painter: &egui::Painter,
    rect: egui::Rect,
    points: impl Iterator<Item = StrokePoint>,
    width: f32,
    color: egui::Color32,
) {
    let screen: Vec<egui::Pos2> = points
        .map(|p| rect.min + egui::vec2(p.x as f32, p.y as f32))
        .collect();

    if screen.len() == 1 {
        painter.circle_filled(screen[0], width.max(1.0) / 2.0, color);
    } else if screen.len() > 1 {
        painter.add(egui::Shape::line(screen, egui::Stroke::new(width, color)));
    }
}
