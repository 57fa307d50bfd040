//! Declarative menu tree.
//!
//! Node and item definitions are immutable once the model is built. The only
//! runtime state is kept in two tables indexed like the definitions: the
//! activation status of every item and the last focused index of every node.

use super::types::{DrawRoutine, GameVariant, ItemAction, ItemStatus, NodeId};

mod defs;

pub use defs::{SAVE_SLOTS, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Vertical distance between two menu lines, in virtual-screen pixels.
pub const LINE_HEIGHT: i32 = 16;

/// One entry of a menu node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Status the item starts with; the live value is held by `MenuModel`.
    pub status: ItemStatus,
    /// Patch drawn for this item. Empty for spacers and text-only slots.
    pub name: &'static str,
    pub action: Option<ItemAction>,
    /// Keyboard shortcut; `'\0'` means none.
    pub shortcut: char,
}

impl MenuItem {
    pub fn new(
        status: ItemStatus,
        name: &'static str,
        action: Option<ItemAction>,
        shortcut: char,
    ) -> Self {
        MenuItem {
            status,
            name,
            action,
            shortcut,
        }
    }

    /// Plain selectable item.
    pub fn selectable(name: &'static str, action: ItemAction, shortcut: char) -> Self {
        Self::new(ItemStatus::Selectable, name, Some(action), shortcut)
    }

    pub fn slider(name: &'static str, action: ItemAction, shortcut: char) -> Self {
        Self::new(ItemStatus::Slider, name, Some(action), shortcut)
    }

    /// Disabled spacer line (room for a thermometer or blank row).
    pub fn spacer() -> Self {
        Self::new(ItemStatus::Disabled, "", None, '\0')
    }
}

/// One screen of menu items plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub id: NodeId,
    pub items: Vec<MenuItem>,
    pub parent: Option<NodeId>,
    pub draw: DrawRoutine,
    pub x: i32,
    pub y: i32,
    /// Focus restored the first time the node is entered.
    pub initial_focus: usize,
}

impl MenuNode {
    pub fn new(
        id: NodeId,
        items: Vec<MenuItem>,
        parent: Option<NodeId>,
        draw: DrawRoutine,
        x: i32,
        y: i32,
    ) -> Self {
        MenuNode {
            id,
            items,
            parent,
            draw,
            x,
            y,
            initial_focus: 0,
        }
    }

    pub fn with_initial_focus(mut self, index: usize) -> Self {
        self.initial_focus = index;
        self
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// The menu tree plus its per-session mutable tables.
#[derive(Debug, Clone)]
pub struct MenuModel {
    nodes: Vec<MenuNode>,
    status: Vec<Vec<ItemStatus>>,
    last_on: Vec<usize>,
}

impl MenuModel {
    /// Build the standard tree adjusted for `variant`.
    pub fn new(variant: GameVariant) -> Self {
        Self::from_nodes(defs::standard_nodes(variant))
    }

    fn from_nodes(nodes: Vec<MenuNode>) -> Self {
        let status = nodes
            .iter()
            .map(|n| n.items.iter().map(|i| i.status).collect())
            .collect();
        let last_on = nodes.iter().map(|n| n.initial_focus).collect();
        MenuModel {
            nodes,
            status,
            last_on,
        }
    }

    /// Replace a node definition. Intended for initialization only (custom
    /// trees, tests); runtime tables for the node are reset.
    pub fn with_node(mut self, node: MenuNode) -> Self {
        let idx = node.id.index();
        self.status[idx] = node.items.iter().map(|i| i.status).collect();
        self.last_on[idx] = node.initial_focus;
        self.nodes[idx] = node;
        self
    }

    pub fn node(&self, id: NodeId) -> &MenuNode {
        &self.nodes[id.index()]
    }

    pub fn item_count(&self, id: NodeId) -> usize {
        self.node(id).item_count()
    }

    pub fn item_at(&self, id: NodeId, index: usize) -> &MenuItem {
        &self.node(id).items[index]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Live activation status of an item.
    pub fn status(&self, id: NodeId, index: usize) -> ItemStatus {
        self.status[id.index()][index]
    }

    pub fn set_status(&mut self, id: NodeId, index: usize, status: ItemStatus) {
        self.status[id.index()][index] = status;
    }

    pub fn last_focused(&self, id: NodeId) -> usize {
        self.last_on[id.index()]
    }

    pub fn set_last_focused(&mut self, id: NodeId, index: usize) {
        self.last_on[id.index()] = index;
    }

    /// Whether at least one item of the node can hold the cursor.
    pub fn has_selectable(&self, id: NodeId) -> bool {
        self.status[id.index()].iter().any(|s| !s.is_disabled())
    }
}
