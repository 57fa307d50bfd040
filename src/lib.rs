pub mod app;
pub mod errors;
pub mod host;
pub mod input;
#[path = "runner/mod.rs"]
pub mod runner;
pub mod saves;
#[path = "ui/mod.rs"]
pub mod ui;

pub use crate::app::{MenuContext, NodeId, Settings};
pub use crate::errors::MenuError;
pub use crate::host::GameHost;
pub use crate::input::InputEvent;
pub use crate::runner::handle_event;
