use log::{debug, error};

use crate::command::{Applied, HistoryBuffer};
use crate::document::Document;
use crate::input::Gesture;
use crate::mode::{EditorContext, ModeDispatcher, ModeKind};
use crate::settings::ToolSettings;

/// The editor behind the window: surface, history, modes and tool options.
#[derive(Debug, Default)]
pub struct EditorState {
    document: Document,
    history: HistoryBuffer,
    dispatcher: ModeDispatcher,
    settings: ToolSettings,
}

impl EditorState {
    pub fn new(settings: ToolSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Feeds one gesture to the active mode
    pub fn handle(&mut self, gesture: &Gesture) {
        let mut ctx = EditorContext::new(&mut self.document, &mut self.history, &self.settings);
        self.dispatcher.dispatch(gesture, &mut ctx);
    }

    pub fn handle_all<'g>(&mut self, gestures: impl IntoIterator<Item = &'g Gesture>) {
        for gesture in gestures {
            self.handle(gesture);
        }
    }

    /// Reverts the latest mutation. At the start of history this asks the
    /// shell to confirm leaving instead.
    pub fn undo(&mut self) -> Applied {
        self.history.get_previous().undo(&mut self.document)
    }

    /// Reapplies the next undone mutation, if any.
    pub fn redo(&mut self) -> Applied {
        match self.history.get_next().redo(&mut self.document) {
            Ok(applied) => applied,
            Err(err) => {
                error!("Redo failed: {err}");
                debug_assert!(false, "redo reached a start sentinel: {err}");
                Applied::Unchanged
            }
        }
    }

    /// Empties the surface together with its history
    pub fn clear(&mut self) {
        debug!(
            "Clearing {} shapes and {} history entries",
            self.document.len(),
            self.history.len()
        );
        self.document.clear();
        self.history.clear();
    }

    /// Director mode while the modifier is held, drawing mode otherwise
    pub fn set_modifier(&mut self, held: bool) {
        let kind = if held {
            ModeKind::Director
        } else {
            ModeKind::Drawing
        };
        self.dispatcher.set_mode(kind);
    }

    pub fn mode(&self) -> ModeKind {
        self.dispatcher.current()
    }

    pub fn dispatcher(&self) -> &ModeDispatcher {
        &self.dispatcher
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.settings
    }
}
