use crate::command::HistoryBuffer;
use crate::document::Document;
use crate::input::{Gesture, PointerEvent};
use crate::settings::ToolSettings;

mod director;
mod dispatcher;
mod drawing;

pub use director::DirectorMode;
pub use dispatcher::ModeDispatcher;
pub use drawing::{DrawingMode, DrawingState};

/// Everything a mode may touch while handling one gesture
pub struct EditorContext<'a> {
    pub document: &'a mut Document,
    pub history: &'a mut HistoryBuffer,
    pub settings: &'a ToolSettings,
}

impl<'a> EditorContext<'a> {
    pub fn new(
        document: &'a mut Document,
        history: &'a mut HistoryBuffer,
        settings: &'a ToolSettings,
    ) -> Self {
        Self {
            document,
            history,
            settings,
        }
    }
}

/// Which mode interprets gestures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeKind {
    #[default]
    Drawing,
    Director,
}

impl ModeKind {
    pub fn label(self) -> &'static str {
        match self {
            ModeKind::Drawing => "Drawing",
            ModeKind::Director => "Director",
        }
    }
}

/// A gesture interpreter. Each callback either applies a bounded change to the
/// document (recording it in the history) or does nothing.
pub trait UsageMode {
    fn name(&self) -> &'static str;

    fn on_press(&mut self, event: &PointerEvent, ctx: &mut EditorContext<'_>);

    fn on_drag(&mut self, event: &PointerEvent, ctx: &mut EditorContext<'_>);

    fn on_click(&mut self, event: &PointerEvent, ctx: &mut EditorContext<'_>);

    fn on_release(&mut self, event: &PointerEvent, ctx: &mut EditorContext<'_>);

    /// Called when the mode stops receiving gestures. Drops any gesture in
    /// progress so it cannot resume when the mode comes back.
    fn deactivate(&mut self) {
        // default: do nothing
    }

    fn on_pointer_enter(&mut self, _event: &PointerEvent, _ctx: &mut EditorContext<'_>) {
        // default: do nothing
    }

    fn on_pointer_exit(&mut self, _event: &PointerEvent, _ctx: &mut EditorContext<'_>) {
        // default: do nothing
    }

    /// Routes a gesture to the matching callback
    fn handle(&mut self, gesture: &Gesture, ctx: &mut EditorContext<'_>) {
        match gesture {
            Gesture::Press(event) => self.on_press(event, ctx),
            Gesture::Drag(event) => self.on_drag(event, ctx),
            Gesture::Click(event) => self.on_click(event, ctx),
            Gesture::Release(event) => self.on_release(event, ctx),
            Gesture::Enter(event) => self.on_pointer_enter(event, ctx),
            Gesture::Exit(event) => self.on_pointer_exit(event, ctx),
        }
    }
}
