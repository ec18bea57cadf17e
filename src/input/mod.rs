use crate::geometry::Point2D;
use crate::shape::ShapeRef;

mod gestures;
pub use gestures::{GestureTracker, PointerSample};

/// Mouse button carried by a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

impl PointerButton {
    pub fn is_primary(self) -> bool {
        self == PointerButton::Primary
    }
}

impl From<egui::PointerButton> for PointerButton {
    fn from(button: egui::PointerButton) -> Self {
        match button {
            egui::PointerButton::Primary => PointerButton::Primary,
            egui::PointerButton::Secondary => PointerButton::Secondary,
            _ => PointerButton::Middle,
        }
    }
}

/// A pointer event in surface-local coordinates
#[derive(Debug, Clone)]
pub struct PointerEvent {
    pub position: Point2D,
    pub button: PointerButton,
    /// The shape the event originated on, if any
    pub source: Option<ShapeRef>,
}

impl PointerEvent {
    pub fn new(position: Point2D, button: PointerButton) -> Self {
        Self {
            position,
            button,
            source: None,
        }
    }

    pub fn on_shape(position: Point2D, button: PointerButton, shape: ShapeRef) -> Self {
        Self {
            position,
            button,
            source: Some(shape),
        }
    }
}

/// The six gestures a mode reacts to
#[derive(Debug, Clone)]
pub enum Gesture {
    Press(PointerEvent),
    Drag(PointerEvent),
    Click(PointerEvent),
    Release(PointerEvent),
    Enter(PointerEvent),
    Exit(PointerEvent),
}

impl Gesture {
    pub fn event(&self) -> &PointerEvent {
        match self {
            Gesture::Press(e)
            | Gesture::Drag(e)
            | Gesture::Click(e)
            | Gesture::Release(e)
            | Gesture::Enter(e)
            | Gesture::Exit(e) => e,
        }
    }
}
