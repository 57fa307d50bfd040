use thiserror::Error;

use crate::app::NodeId;

/// Invariant violations raised by the menu core.
///
/// None of these are expected during correct operation. They are surfaced as
/// values instead of being silently tolerated so the host can decide whether
/// to abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// A modal message was opened while another one was still pending.
    #[error("a message is already pending: {pending:?}")]
    MessageAlreadyOpen { pending: String },

    /// Up/down navigation was requested on a node whose items are all disabled.
    #[error("menu node {0:?} has no selectable items")]
    NoSelectableItems(NodeId),

    /// The focus index does not address an item of the current node.
    #[error("focus index {index} is out of range for node {node:?} ({count} items)")]
    FocusOutOfRange {
        node: NodeId,
        index: usize,
        count: usize,
    },

    /// A save slot outside the fixed slot table was addressed.
    #[error("save slot {0} does not exist")]
    NoSuchSlot(usize),
}

pub type Result<T> = std::result::Result<T, MenuError>;
