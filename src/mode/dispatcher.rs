use log::debug;

use super::{DirectorMode, DrawingMode, EditorContext, ModeKind, UsageMode};
use crate::input::Gesture;

/// Single entry point for every gesture. Forwards each one, unchanged, to
/// whichever mode is active; the gesture state lives in the modes.
#[derive(Debug, Default)]
pub struct ModeDispatcher {
    drawing: DrawingMode,
    director: DirectorMode,
    current: ModeKind,
}

impl ModeDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ModeKind {
        self.current
    }

    pub fn set_mode(&mut self, kind: ModeKind) {
        if self.current == kind {
            return;
        }
        let previous = self.active_mut();
        debug!("Leaving {} mode", previous.name());
        previous.deactivate();
        debug!("Switching to {} mode", kind.label());
        self.current = kind;
    }

    pub fn drawing(&self) -> &DrawingMode {
        &self.drawing
    }

    pub fn director(&self) -> &DirectorMode {
        &self.director
    }

    fn active_mut(&mut self) -> &mut dyn UsageMode {
        match self.current {
            ModeKind::Drawing => &mut self.drawing,
            ModeKind::Director => &mut self.director,
        }
    }

    pub fn dispatch(&mut self, gesture: &Gesture, ctx: &mut EditorContext<'_>) {
        self.active_mut().handle(gesture, ctx);
    }
}
