use std::rc::Rc;

use crate::geometry::Point2D;
use crate::shape::ShapeRef;

/// The drawing surface: the shapes currently visible, bottom to top.
#[derive(Debug, Default)]
pub struct Document {
    shapes: Vec<ShapeRef>,
}

impl Document {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Adds the shape on top unless this exact instance is already visible.
    pub fn add_shape(&mut self, shape: ShapeRef) {
        if !self.contains(&shape) {
            self.shapes.push(shape);
        }
    }

    /// Removes this exact instance. Returns whether it was visible.
    pub fn remove_shape(&mut self, shape: &ShapeRef) -> bool {
        let before = self.shapes.len();
        self.shapes.retain(|s| !Rc::ptr_eq(s, shape));
        self.shapes.len() != before
    }

    pub fn contains(&self, shape: &ShapeRef) -> bool {
        self.shapes.iter().any(|s| Rc::ptr_eq(s, shape))
    }

    pub fn shapes(&self) -> &[ShapeRef] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Topmost shape under `point`
    pub fn shape_at(&self, point: Point2D) -> Option<ShapeRef> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.borrow().contains(point))
            .cloned()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}
