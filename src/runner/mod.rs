pub mod event_loop_main;
pub mod handlers;
pub mod terminal;

pub use handlers::handle_event;
