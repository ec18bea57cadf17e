use std::rc::Rc;

use log::{debug, trace};

use super::{EditorContext, UsageMode};
use crate::command::Mutation;
use crate::geometry::Point2D;
use crate::input::PointerEvent;
use crate::shape::ShapeRef;

/// A shape being dragged around
#[derive(Debug, Clone)]
struct Grab {
    shape: ShapeRef,
    /// Pointer position at press
    anchor: Point2D,
    layout_at_press: Point2D,
}

/// Moves shapes by dragging them and erases them with a secondary click.
#[derive(Debug, Default)]
pub struct DirectorMode {
    grab: Option<Grab>,
}

impl DirectorMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }
}

impl UsageMode for DirectorMode {
    fn name(&self) -> &'static str {
        "Director"
    }

    fn on_press(&mut self, event: &PointerEvent, ctx: &mut EditorContext<'_>) {
        let Some(shape) = &event.source else {
            return;
        };

        let layout = shape.borrow().layout;
        debug!("Grabbed {} at layout ({}, {})", shape.borrow().id(), layout.x, layout.y);
        ctx.history.add(Mutation::move_from(shape.clone(), layout));
        self.grab = Some(Grab {
            shape: shape.clone(),
            anchor: event.position,
            layout_at_press: layout,
        });
    }

    fn on_drag(&mut self, event: &PointerEvent, ctx: &mut EditorContext<'_>) {
        let (Some(source), Some(grab)) = (&event.source, &self.grab) else {
            return;
        };
        if !Rc::ptr_eq(source, &grab.shape) {
            return;
        }

        // The move pushed at press must still be the latest entry
        let recorded = ctx.history.peek_previous_mut();
        let is_our_move = matches!(&*recorded, Mutation::Move { shape, .. } if Rc::ptr_eq(shape, &grab.shape));
        if !is_our_move {
            debug!("Dropping grab, its move is no longer the latest history entry");
            self.grab = None;
            return;
        }

        let offset = event.position - grab.anchor;
        let layout = grab.layout_at_press + offset;
        grab.shape.borrow_mut().layout = layout;
        recorded.set_move_end(layout);
        trace!("Moved {} to ({}, {})", grab.shape.borrow().id(), layout.x, layout.y);
    }

    fn on_click(&mut self, event: &PointerEvent, ctx: &mut EditorContext<'_>) {
        if event.button.is_primary() {
            return;
        }
        let Some(shape) = &event.source else {
            return;
        };

        if ctx.document.remove_shape(shape) {
            shape.borrow_mut().highlighted = false;
            debug!("Erased {}", shape.borrow().id());
            ctx.history.add(Mutation::erase(shape.clone()));
        }
        if self.grab.as_ref().is_some_and(|g| Rc::ptr_eq(&g.shape, shape)) {
            self.grab = None;
        }
    }

    fn on_release(&mut self, _event: &PointerEvent, _ctx: &mut EditorContext<'_>) {
        self.grab = None;
    }

    fn deactivate(&mut self) {
        self.grab = None;
    }

    fn on_pointer_enter(&mut self, event: &PointerEvent, _ctx: &mut EditorContext<'_>) {
        if let Some(shape) = &event.source {
            shape.borrow_mut().highlighted = true;
        }
    }

    fn on_pointer_exit(&mut self, event: &PointerEvent, _ctx: &mut EditorContext<'_>) {
        if let Some(shape) = &event.source {
            shape.borrow_mut().highlighted = false;
        }
    }
}
