use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use egui::Color32;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{Bounds, Point2D, hit_testing};

/// Stable identity of a shape across undo/redo cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of shape created by the drawing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Freehand path following the pointer
    #[default]
    Stroke,
    Rectangle,
    Ellipse,
    Circle,
    Line,
    Square,
    /// Only created by clicking
    Point,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Stroke,
        ShapeKind::Rectangle,
        ShapeKind::Ellipse,
        ShapeKind::Circle,
        ShapeKind::Line,
        ShapeKind::Square,
        ShapeKind::Point,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Stroke => "Stroke",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Circle => "Circle",
            ShapeKind::Line => "Line",
            ShapeKind::Square => "Square",
            ShapeKind::Point => "Point",
        }
    }

    /// Closed outlines honor the fill option
    pub fn is_fillable(self) -> bool {
        matches!(
            self,
            ShapeKind::Rectangle | ShapeKind::Ellipse | ShapeKind::Circle | ShapeKind::Square
        )
    }
}

/// Geometry in the shape's own coordinates, before the layout offset.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Path { points: Vec<Point2D> },
    Rect(Bounds),
    Ellipse {
        center: Point2D,
        radius_x: f64,
        radius_y: f64,
    },
    Circle { center: Point2D, radius: f64 },
    Line { start: Point2D, end: Point2D },
}

impl Geometry {
    /// Zero-extent geometry for a freshly pressed shape
    pub fn empty_at(kind: ShapeKind, at: Point2D) -> Self {
        match kind {
            ShapeKind::Stroke => Geometry::Path { points: vec![at] },
            ShapeKind::Rectangle | ShapeKind::Square | ShapeKind::Point => {
                Geometry::Rect(Bounds::new(at.x, at.y, 0.0, 0.0))
            }
            ShapeKind::Ellipse => Geometry::Ellipse {
                center: at,
                radius_x: 0.0,
                radius_y: 0.0,
            },
            ShapeKind::Circle => Geometry::Circle {
                center: at,
                radius: 0.0,
            },
            ShapeKind::Line => Geometry::Line { start: at, end: at },
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Geometry::Path { points } => {
                let Some(first) = points.first() else {
                    return Bounds::default();
                };
                let (mut min, mut max) = (*first, *first);
                for point in points {
                    min = Point2D::new(min.x.min(point.x), min.y.min(point.y));
                    max = Point2D::new(max.x.max(point.x), max.y.max(point.y));
                }
                Bounds::new(min.x, min.y, max.x - min.x, max.y - min.y)
            }
            Geometry::Rect(bounds) => *bounds,
            Geometry::Ellipse {
                center,
                radius_x,
                radius_y,
            } => Bounds::new(
                center.x - radius_x,
                center.y - radius_y,
                radius_x * 2.0,
                radius_y * 2.0,
            ),
            Geometry::Circle { center, radius } => Bounds::new(
                center.x - radius,
                center.y - radius,
                radius * 2.0,
                radius * 2.0,
            ),
            Geometry::Line { start, end } => crate::geometry::normalized_rect(*start, *end),
        }
    }
}

/// Outline paint of a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Color32,
    pub width: f64,
}

/// Paint chosen when the shape is created; never re-evaluated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeStyle {
    pub fill: Option<Color32>,
    pub outline: Option<Outline>,
}

impl ShapeStyle {
    pub fn filled(color: Color32) -> Self {
        Self {
            fill: Some(color),
            outline: None,
        }
    }

    pub fn outlined(color: Color32, width: f64) -> Self {
        Self {
            fill: None,
            outline: Some(Outline { color, width }),
        }
    }

    /// Style for a new shape of `kind` under the current tool options
    pub fn for_kind(kind: ShapeKind, color: Color32, width: f64, fill: bool) -> Self {
        match kind {
            ShapeKind::Point => Self::filled(color),
            kind if fill && kind.is_fillable() => Self::filled(color),
            _ => Self::outlined(color, width),
        }
    }

    pub fn outline_width(&self) -> f64 {
        self.outline.map_or(0.0, |outline| outline.width)
    }
}

/// A drawable on the surface.
#[derive(Debug, Clone)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    pub geometry: Geometry,
    style: ShapeStyle,
    /// Translation applied on top of the geometry. Moves record and restore this.
    pub layout: Point2D,
    pub highlighted: bool,
}

/// Handle shared between the document and the mutations that reference a shape.
pub type ShapeRef = Rc<RefCell<Shape>>;

impl Shape {
    pub fn new(kind: ShapeKind, geometry: Geometry, style: ShapeStyle) -> Self {
        Self {
            id: ShapeId::new(),
            kind,
            geometry,
            style,
            layout: Point2D::ORIGIN,
            highlighted: false,
        }
    }

    pub fn new_ref(kind: ShapeKind, geometry: Geometry, style: ShapeStyle) -> ShapeRef {
        Self::new(kind, geometry, style).into_ref()
    }

    pub fn into_ref(self) -> ShapeRef {
        Rc::new(RefCell::new(self))
    }

    /// A filled square of side `size` centered on `center`
    pub fn point(center: Point2D, size: f64, color: Color32) -> Self {
        let half = size / 2.0;
        Self::new(
            ShapeKind::Point,
            Geometry::Rect(Bounds::new(center.x - half, center.y - half, size, size)),
            ShapeStyle::filled(color),
        )
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    /// Bounds on the surface, layout included
    pub fn bounds(&self) -> Bounds {
        self.geometry.bounds().translate(self.layout)
    }

    /// Hit test against a surface-local point
    pub fn contains(&self, point: Point2D) -> bool {
        hit_testing::geometry_contains(
            &self.geometry,
            self.style.outline_width(),
            point - self.layout,
        )
    }
}
