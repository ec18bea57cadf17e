use std::rc::Rc;

use super::{Gesture, PointerButton, PointerEvent};
use crate::document::Document;
use crate::geometry::Point2D;
use crate::shape::ShapeRef;

const BUTTONS: [egui::PointerButton; 3] = [
    egui::PointerButton::Primary,
    egui::PointerButton::Secondary,
    egui::PointerButton::Middle,
];

/// Pointer state sampled once per frame, in surface-local coordinates
#[derive(Debug, Clone, Default)]
pub struct PointerSample {
    /// Last known pointer position, `None` once the pointer left the window
    pub position: Option<Point2D>,
    /// Whether the pointer is over the drawing surface
    pub over_surface: bool,
    pub pressed: Vec<PointerButton>,
    pub released: Vec<PointerButton>,
}

impl PointerSample {
    /// Samples egui's pointer relative to the surface rectangle
    pub fn from_egui(input: &egui::InputState, surface: egui::Rect) -> Self {
        let hover = input.pointer.hover_pos();
        let over_surface = hover.is_some_and(|pos| surface.contains(pos));
        let position = hover
            .or_else(|| input.pointer.latest_pos())
            .map(|pos| Point2D::from(pos) - Point2D::from(surface.min));

        let mut sample = Self {
            position,
            over_surface,
            ..Default::default()
        };
        for button in BUTTONS {
            if input.pointer.button_pressed(button) && over_surface {
                sample.pressed.push(button.into());
            }
            if input.pointer.button_released(button) {
                sample.released.push(button.into());
            }
        }
        sample
    }
}

#[derive(Debug)]
struct Press {
    button: PointerButton,
    source: Option<ShapeRef>,
}

/// Turns per-frame pointer samples into press/drag/release/click and
/// enter/exit gestures, resolving the shape under the pointer.
///
/// A click follows every release, including after a drag; the modes decide
/// whether a click after a drag means anything.
#[derive(Debug, Default)]
pub struct GestureTracker {
    last_position: Option<Point2D>,
    press: Option<Press>,
    hovered: Option<ShapeRef>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn update(&mut self, sample: &PointerSample, document: &Document) -> Vec<Gesture> {
        let mut gestures = Vec::new();

        let Some(position) = sample.position.or(self.last_position) else {
            return gestures;
        };

        if self.press.is_none() {
            let under = if sample.over_surface {
                document.shape_at(position)
            } else {
                None
            };
            self.update_hover(under, position, &mut gestures);
        }

        for &button in &sample.pressed {
            if self.press.is_some() {
                continue;
            }
            let source = document.shape_at(position);
            gestures.push(Gesture::Press(event(position, button, source.clone())));
            self.press = Some(Press { button, source });
            // Drags are measured from the press, not from the previous frame
            self.last_position = Some(position);
        }

        let moved = self.last_position.is_some_and(|last| last != position);
        if moved {
            if let Some(press) = &self.press {
                gestures.push(Gesture::Drag(event(
                    position,
                    press.button,
                    press.source.clone(),
                )));
            }
        }

        for &button in &sample.released {
            if !self.press.as_ref().is_some_and(|p| p.button == button) {
                continue;
            }
            let Some(press) = self.press.take() else {
                continue;
            };
            gestures.push(Gesture::Release(event(
                position,
                button,
                press.source.clone(),
            )));
            // Clicks land on the pressed shape only if the pointer is still over it
            let click_source = press
                .source
                .filter(|shape| shape.borrow().contains(position));
            gestures.push(Gesture::Click(event(position, button, click_source)));
        }

        self.last_position = Some(position);
        gestures
    }

    fn update_hover(&mut self, under: Option<ShapeRef>, position: Point2D, gestures: &mut Vec<Gesture>) {
        let same = match (&self.hovered, &under) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        if same {
            return;
        }
        if let Some(old) = self.hovered.take() {
            gestures.push(Gesture::Exit(event(position, PointerButton::Primary, Some(old))));
        }
        if let Some(new) = &under {
            gestures.push(Gesture::Enter(event(
                position,
                PointerButton::Primary,
                Some(new.clone()),
            )));
        }
        self.hovered = under;
    }
}

fn event(position: Point2D, button: PointerButton, source: Option<ShapeRef>) -> PointerEvent {
    PointerEvent {
        position,
        button,
        source,
    }
}
