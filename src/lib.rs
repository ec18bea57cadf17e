#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod input;
pub mod mode;
pub mod panels;
pub mod renderer;
pub mod settings;
pub mod shape;
pub mod state;

pub use app::DrawerApp;
pub use command::{Applied, HistoryBuffer, Mutation};
pub use config::DrawerConfig;
pub use document::Document;
pub use error::{ConfigError, MutationError};
pub use geometry::Point2D;
pub use input::{Gesture, PointerButton, PointerEvent};
pub use mode::{DirectorMode, DrawingMode, ModeDispatcher, ModeKind, UsageMode};
pub use renderer::Renderer;
pub use settings::ToolSettings;
pub use shape::{Shape, ShapeKind, ShapeRef};
pub use state::EditorState;
