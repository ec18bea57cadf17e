use log::{debug, trace};

use super::{EditorContext, UsageMode};
use crate::command::Mutation;
use crate::geometry::{self, Point2D};
use crate::input::PointerEvent;
use crate::shape::{Geometry, Shape, ShapeKind, ShapeRef, ShapeStyle};

/// Whether a shape is being dragged out
#[derive(Debug, Clone, Default)]
pub enum DrawingState {
    #[default]
    Idle,
    Constructing {
        /// Already on the surface; kept here so the drag can keep reshaping it
        shape: ShapeRef,
        anchor: Point2D,
    },
}

/// Creates shapes from press/drag gestures and points from clicks.
#[derive(Debug, Default)]
pub struct DrawingMode {
    state: DrawingState,
    /// Set by a drag so that the click following its release is swallowed
    drawing_in_progress: bool,
}

impl DrawingMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn is_constructing(&self) -> bool {
        matches!(self.state, DrawingState::Constructing { .. })
    }

    pub fn drawing_in_progress(&self) -> bool {
        self.drawing_in_progress
    }

    fn begin_shape(&mut self, kind: ShapeKind, anchor: Point2D, ctx: &mut EditorContext<'_>) {
        let settings = ctx.settings;
        let style = ShapeStyle::for_kind(kind, settings.color, settings.stroke_width, settings.fill);
        let shape = Shape::new_ref(kind, Geometry::empty_at(kind, anchor), style);
        debug!(
            "Started {} {} at ({}, {})",
            kind.label(),
            shape.borrow().id(),
            anchor.x,
            anchor.y
        );

        ctx.document.add_shape(shape.clone());
        ctx.history.add(Mutation::draw(shape.clone()));
        self.state = DrawingState::Constructing { shape, anchor };
    }
}

/// Geometry of a shape of `kind` dragged from `anchor` to `current`
fn reshape(target: &mut Geometry, kind: ShapeKind, anchor: Point2D, current: Point2D) {
    match kind {
        ShapeKind::Stroke => {
            if let Geometry::Path { points } = target {
                points.push(current);
            }
        }
        ShapeKind::Rectangle => *target = Geometry::Rect(geometry::normalized_rect(anchor, current)),
        ShapeKind::Square => *target = Geometry::Rect(geometry::normalized_square(anchor, current)),
        ShapeKind::Ellipse => {
            let (center, radius_x, radius_y) = geometry::normalized_ellipse(anchor, current);
            *target = Geometry::Ellipse {
                center,
                radius_x,
                radius_y,
            };
        }
        ShapeKind::Circle => {
            let (center, radius) = geometry::normalized_circle(anchor, current);
            *target = Geometry::Circle { center, radius };
        }
        ShapeKind::Line => {
            *target = Geometry::Line {
                start: anchor,
                end: current,
            }
        }
        // Points are never dragged out
        ShapeKind::Point => {}
    }
}

impl UsageMode for DrawingMode {
    fn name(&self) -> &'static str {
        "Drawing"
    }

    fn deactivate(&mut self) {
        // The shape stays on the surface with its Draw already recorded
        self.state = DrawingState::Idle;
        self.drawing_in_progress = false;
    }

    fn on_press(&mut self, event: &PointerEvent, ctx: &mut EditorContext<'_>) {
        if !event.button.is_primary() {
            return;
        }
        self.drawing_in_progress = false;

        let kind = ctx.settings.shape_kind;
        if kind == ShapeKind::Point {
            return;
        }
        self.begin_shape(kind, event.position, ctx);
    }

    fn on_drag(&mut self, event: &PointerEvent, _ctx: &mut EditorContext<'_>) {
        if !event.button.is_primary() {
            return;
        }
        self.drawing_in_progress = true;

        if let DrawingState::Constructing { shape, anchor } = &self.state {
            let mut shape = shape.borrow_mut();
            let kind = shape.kind();
            reshape(&mut shape.geometry, kind, *anchor, event.position);
            trace!("Reshaped {} to {:?}", shape.id(), shape.geometry);
        }
    }

    fn on_click(&mut self, event: &PointerEvent, ctx: &mut EditorContext<'_>) {
        if !event.button.is_primary() {
            return;
        }
        if self.drawing_in_progress {
            self.drawing_in_progress = false;
            return;
        }

        let point = Shape::point(event.position, ctx.settings.stroke_width, ctx.settings.color);
        debug!(
            "Placed point {} at ({}, {})",
            point.id(),
            event.position.x,
            event.position.y
        );
        let point = point.into_ref();
        ctx.document.add_shape(point.clone());
        ctx.history.add(Mutation::draw(point));
    }

    fn on_release(&mut self, _event: &PointerEvent, _ctx: &mut EditorContext<'_>) {
        self.state = DrawingState::Idle;
    }
}
