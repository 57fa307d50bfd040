pub mod frame;
pub mod terminal_view;

pub use frame::{build_frame, DrawCmd, MenuFrame};
pub use terminal_view::{draw, item_label};
