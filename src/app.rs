use crate::command::Applied;
use crate::config::DrawerConfig;
use crate::input::{GestureTracker, PointerSample};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::settings::ToolSettings;
use crate::state::EditorState;

const HELP_TEXT: &str = "The drawer has two modes:\n\n\
    1. Drawing mode, for drawing shapes.\n\
    2. Director mode (hold Ctrl), for working with drawn shapes:\n\
    \t- move a shape by dragging it with the left mouse button\n\
    \t- erase a shape by clicking it with the right mouse button\n\n\
    Undo and Redo are also bound to Escape and Space.";

pub struct DrawerApp {
    editor: EditorState,
    tracker: GestureTracker,
    renderer: Renderer,
    config: DrawerConfig,
    show_help: bool,
    confirm_exit: bool,
}

impl Default for DrawerApp {
    fn default() -> Self {
        Self::with_config(DrawerConfig::default(), None)
    }
}

impl DrawerApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: DrawerConfig) -> Self {
        // Tool settings survive restarts, history does not
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<ToolSettings>(storage, eframe::APP_KEY));
        Self::with_config(config, settings)
    }

    pub fn with_config(config: DrawerConfig, settings: Option<ToolSettings>) -> Self {
        let mut settings = settings.unwrap_or_else(|| ToolSettings::from_config(&config));
        settings.clamp_to(&config);
        Self {
            editor: EditorState::new(settings),
            tracker: GestureTracker::new(),
            renderer: Renderer::new(),
            config,
            show_help: false,
            confirm_exit: false,
        }
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorState {
        &mut self.editor
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn stroke_width_range(&self) -> (f64, f64) {
        (self.config.min_stroke_width, self.config.max_stroke_width)
    }

    pub fn undo(&mut self) {
        if self.editor.undo() == Applied::ExitRequested {
            self.confirm_exit = true;
        }
    }

    pub fn redo(&mut self) {
        self.editor.redo();
    }

    pub fn clear(&mut self) {
        self.editor.clear();
    }

    pub fn show_help(&mut self) {
        self.show_help = true;
    }

    pub fn has_open_dialog(&self) -> bool {
        self.confirm_exit
    }

    pub fn handle_pointer(&mut self, sample: &PointerSample) {
        let gestures = self.tracker.update(sample, self.editor.document());
        self.editor.handle_all(&gestures);
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (undo, redo, help, ctrl) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::F1),
                i.modifiers.ctrl,
            )
        });
        self.editor.set_modifier(ctrl);
        if undo {
            self.undo();
        }
        if redo {
            self.redo();
        }
        if help {
            self.show_help();
        }
    }

    fn dialogs(&mut self, ctx: &egui::Context) {
        if self.show_help {
            egui::Window::new("Help")
                .collapsible(false)
                .open(&mut self.show_help)
                .show(ctx, |ui| {
                    ui.label(HELP_TEXT);
                });
        }

        if self.confirm_exit {
            egui::Window::new("Exit Confirmation")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label("Are you sure you want to leave the program?");
                    ui.horizontal(|ui| {
                        if ui.button("Yes").clicked() {
                            log::info!("Exit confirmed");
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                        if ui.button("No").clicked() {
                            self.confirm_exit = false;
                        }
                    });
                });
        }
    }
}

impl eframe::App for DrawerApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.editor.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !ctx.wants_keyboard_input() {
            self.handle_keys(ctx);
        }
        tools_panel(self, ctx);
        central_panel(self, ctx);
        self.dialogs(ctx);
    }
}
