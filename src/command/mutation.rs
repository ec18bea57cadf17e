use log::debug;

use crate::document::Document;
use crate::error::MutationError;
use crate::geometry::Point2D;
use crate::shape::ShapeRef;

/// What applying a mutation did to the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Changed,
    Unchanged,
    /// Undo ran past the first recorded change; the shell should ask to quit
    ExitRequested,
}

/// Reversible changes to the drawing surface
#[derive(Clone)]
pub enum Mutation {
    /// A shape was added to the surface
    Draw { shape: ShapeRef },
    /// A shape was removed from the surface
    Erase { shape: ShapeRef },
    /// A shape's layout was dragged from `start` to `end`
    Move {
        shape: ShapeRef,
        start: Option<Point2D>,
        end: Option<Point2D>,
    },
    /// Nothing earlier in the history
    SentinelStart,
    /// Nothing later in the history
    SentinelBlank,
}

impl std::fmt::Debug for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mutation::Draw { shape } => f
                .debug_struct("Draw")
                .field("shape", &shape.borrow().id())
                .finish(),
            Mutation::Erase { shape } => f
                .debug_struct("Erase")
                .field("shape", &shape.borrow().id())
                .finish(),
            Mutation::Move { shape, start, end } => f
                .debug_struct("Move")
                .field("shape", &shape.borrow().id())
                .field("start", start)
                .field("end", end)
                .finish(),
            Mutation::SentinelStart => write!(f, "SentinelStart"),
            Mutation::SentinelBlank => write!(f, "SentinelBlank"),
        }
    }
}

impl Mutation {
    pub fn draw(shape: ShapeRef) -> Self {
        Mutation::Draw { shape }
    }

    pub fn erase(shape: ShapeRef) -> Self {
        Mutation::Erase { shape }
    }

    /// A move whose end is filled in while the drag continues
    pub fn move_from(shape: ShapeRef, start: Point2D) -> Self {
        Mutation::Move {
            shape,
            start: Some(start),
            end: None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Draw { .. } => "draw",
            Mutation::Erase { .. } => "erase",
            Mutation::Move { .. } => "move",
            Mutation::SentinelStart => "start",
            Mutation::SentinelBlank => "blank",
        }
    }

    /// The shape this mutation refers to, if any
    pub fn shape(&self) -> Option<&ShapeRef> {
        match self {
            Mutation::Draw { shape } | Mutation::Erase { shape } | Mutation::Move { shape, .. } => {
                Some(shape)
            }
            Mutation::SentinelStart | Mutation::SentinelBlank => None,
        }
    }

    /// Records the latest drag position of a move. Other variants are left alone.
    pub fn set_move_end(&mut self, position: Point2D) {
        if let Mutation::Move { end, .. } = self {
            *end = Some(position);
        }
    }

    pub fn undo(&self, document: &mut Document) -> Applied {
        debug!("Undo {:?}", self);
        match self {
            Mutation::Draw { shape } => changed(document.remove_shape(shape)),
            Mutation::Erase { shape } => {
                document.add_shape(shape.clone());
                Applied::Changed
            }
            Mutation::Move { shape, start, .. } => set_layout(shape, *start),
            Mutation::SentinelStart => Applied::ExitRequested,
            Mutation::SentinelBlank => Applied::Unchanged,
        }
    }

    pub fn redo(&self, document: &mut Document) -> Result<Applied, MutationError> {
        debug!("Redo {:?}", self);
        let applied = match self {
            Mutation::Draw { shape } => {
                document.add_shape(shape.clone());
                Applied::Changed
            }
            Mutation::Erase { shape } => changed(document.remove_shape(shape)),
            Mutation::Move { shape, end, .. } => set_layout(shape, *end),
            Mutation::SentinelStart => {
                return Err(MutationError::UnsupportedOperation {
                    operation: "redo",
                    mutation: self.name(),
                });
            }
            Mutation::SentinelBlank => Applied::Unchanged,
        };
        Ok(applied)
    }
}

fn changed(did_change: bool) -> Applied {
    if did_change {
        Applied::Changed
    } else {
        Applied::Unchanged
    }
}

fn set_layout(shape: &ShapeRef, layout: Option<Point2D>) -> Applied {
    match layout {
        Some(layout) => {
            shape.borrow_mut().layout = layout;
            Applied::Changed
        }
        None => Applied::Unchanged,
    }
}
