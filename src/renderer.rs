use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use crate::document::Document;
use crate::geometry::Point2D;
use crate::shape::{Geometry, Shape};

/// Paints the document's shapes onto an egui painter.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    highlight_color: Color32,
    /// How far the hover shadow extends past the shape bounds
    highlight_spread: f32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            highlight_color: Color32::from_black_alpha(70),
            highlight_spread: 8.0,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the surface into `rect`, bottom shape first
    pub fn render(&self, painter: &Painter, rect: Rect, document: &Document) {
        painter.rect_filled(rect, 0.0, self.background);
        let painter = painter.with_clip_rect(rect);
        for shape in document.shapes() {
            self.paint_shape(&painter, rect.min, &shape.borrow());
        }
    }

    fn paint_shape(&self, painter: &Painter, origin: Pos2, shape: &Shape) {
        let offset = origin.to_vec2();
        let to_screen = |p: Point2D| (p + shape.layout).to_pos2() + offset;

        if shape.highlighted {
            let shadow = shape
                .bounds()
                .to_rect()
                .translate(offset)
                .expand(self.highlight_spread);
            painter.rect_filled(shadow, self.highlight_spread, self.highlight_color);
        }

        let style = shape.style();
        let fill = style.fill.unwrap_or(Color32::TRANSPARENT);
        let outline = style
            .outline
            .map_or(Stroke::NONE, |o| Stroke::new(o.width as f32, o.color));

        match &shape.geometry {
            Geometry::Path { points } => {
                if points.len() < 2 {
                    return;
                }
                let points = points.iter().map(|p| to_screen(*p)).collect();
                painter.add(egui::Shape::line(points, outline));
            }
            Geometry::Line { start, end } => {
                painter.line_segment([to_screen(*start), to_screen(*end)], outline);
            }
            Geometry::Rect(bounds) => {
                let rect = bounds.translate(shape.layout).to_rect().translate(offset);
                painter.rect(rect, 0.0, fill, outline);
            }
            Geometry::Circle { center, radius } => {
                painter.circle(to_screen(*center), *radius as f32, fill, outline);
            }
            Geometry::Ellipse {
                center,
                radius_x,
                radius_y,
            } => {
                let radius = Vec2::new(*radius_x as f32, *radius_y as f32);
                let center = to_screen(*center);
                if fill != Color32::TRANSPARENT {
                    painter.add(egui::Shape::ellipse_filled(center, radius, fill));
                }
                if outline != Stroke::NONE {
                    painter.add(egui::Shape::ellipse_stroke(center, radius, outline));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{ShapeKind, ShapeStyle};

    #[test]
    fn test_render_basics() {
        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = Painter::new(ctx, layer_id, rect);

        let mut document = Document::new();
        let circle = Shape::new_ref(
            ShapeKind::Circle,
            Geometry::Circle {
                center: Point2D::new(50.0, 50.0),
                radius: 10.0,
            },
            ShapeStyle::outlined(Color32::RED, 2.0),
        );
        circle.borrow_mut().highlighted = true;
        document.add_shape(circle);

        Renderer::new().render(&painter, rect, &document);
    }
}
