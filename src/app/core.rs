use tracing::{debug, trace};

use super::font::{FontMetrics, UniformFont};
use super::menu::{MenuItem, MenuModel, SAVE_SLOTS};
use super::settings::Settings;
use super::types::{ItemStatus, NodeId, QuickSaveSlot};
use crate::errors::{MenuError, Result};
use crate::host::GameHost;
use crate::input::{InputEvent, InputNormalizer, LogicalInput, NormalizeContext};
use crate::saves::slot_entry;

// submodules live in `src/app/core/`
mod actions;
pub mod message;
mod navigation;
pub mod text_entry;

pub use message::Message;
pub use text_entry::{EntryLimits, TextEntry};

/// Ticks between skull cursor frame changes.
const SKULL_ANIM_TICKS: i32 = 8;
/// The first frame change happens a little later.
const SKULL_ANIM_START: i32 = 10;

/// The menu context object.
///
/// Owns the menu tree, the mode state (active flag, focused node and item,
/// pending message, text entry) and the small amount of session state the
/// menus keep between visits. The host frame loop owns one instance and
/// passes it to `runner::handle_event` for every input and to `tick` once
/// per game tick.
pub struct MenuContext {
    pub model: MenuModel,
    pub settings: Settings,
    pub font: Box<dyn FontMetrics>,
    /// Limits applied to save-name entry.
    pub entry_limits: EntryLimits,

    /// Whether any menu UI is visible.
    pub active: bool,
    /// Node the cursor is in. Meaningful only while `active`.
    pub current: NodeId,
    /// Index of the focused item within `current`.
    pub item_on: usize,
    pub message: Option<Message>,
    pub text_entry: Option<TextEntry>,

    /// Episode picked in the episode menu (0-based).
    pub episode: usize,
    pub quick_save: QuickSaveSlot,
    /// Descriptions of the save slots as last read.
    pub save_strings: Vec<String>,
    /// The pending save-slot selection came from the joystick.
    pub joypad_save: bool,
    /// Set by the frame builder when a full-screen help page is shown.
    pub in_help_screens: bool,
    /// Which of the two skull cursor frames to draw.
    pub which_skull: usize,
    skull_counter: i32,

    normalizer: InputNormalizer,
}

impl MenuContext {
    /// Build a context with the standard tree for the configured variant.
    pub fn new(settings: Settings) -> Self {
        let model = MenuModel::new(settings.variant);
        Self::with_model(settings, model)
    }

    /// Build a context around a custom menu tree.
    pub fn with_model(settings: Settings, model: MenuModel) -> Self {
        let item_on = model.last_focused(NodeId::Main);
        MenuContext {
            model,
            settings,
            font: Box::new(UniformFont::default()),
            entry_limits: EntryLimits::default(),
            active: false,
            current: NodeId::Main,
            item_on,
            message: None,
            text_entry: None,
            episode: 0,
            quick_save: QuickSaveSlot::Unset,
            save_strings: vec![String::new(); SAVE_SLOTS],
            joypad_save: false,
            in_help_screens: false,
            which_skull: 0,
            skull_counter: SKULL_ANIM_START,
            normalizer: InputNormalizer::new(),
        }
    }

    pub fn with_font(mut self, font: Box<dyn FontMetrics>) -> Self {
        self.font = font;
        self
    }

    /// Focused node, or `None` while no menu is shown.
    pub fn current_node(&self) -> Option<NodeId> {
        self.active.then_some(self.current)
    }

    pub fn is_message_pending(&self) -> bool {
        self.message.is_some()
    }

    pub fn is_text_entry_active(&self) -> bool {
        self.text_entry.is_some()
    }

    /// The focused item, checked against the current node.
    pub fn focused_item(&self) -> Result<&MenuItem> {
        let count = self.model.item_count(self.current);
        if self.item_on >= count {
            return Err(MenuError::FocusOutOfRange {
                node: self.current,
                index: self.item_on,
                count,
            });
        }
        Ok(self.model.item_at(self.current, self.item_on))
    }

    pub fn focused_status(&self) -> Result<ItemStatus> {
        self.focused_item()?;
        Ok(self.model.status(self.current, self.item_on))
    }

    /// Open the root menu unless a menu is already shown.
    pub fn start_control_panel(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        self.current = NodeId::Main;
        self.item_on = self.model.last_focused(NodeId::Main);
        debug!(item = self.item_on, "menu opened");
    }

    /// Hide all menus. A pending message is left untouched.
    pub fn clear_menus(&mut self) {
        self.active = false;
        debug!("menu closed");
    }

    /// Move to `node`, restoring its last focused item.
    pub fn setup_next_menu(&mut self, node: NodeId) {
        self.current = node;
        self.item_on = self.model.last_focused(node);
        trace!(?node, item = self.item_on, "entered node");
    }

    /// Remember the focused item in the current node.
    pub fn persist_focus(&mut self) {
        self.model.set_last_focused(self.current, self.item_on);
    }

    /// Refresh the save-slot descriptions and the load menu's availability.
    pub fn read_save_strings(&mut self, host: &mut dyn GameHost) {
        let load_items = self.model.item_count(NodeId::Load);
        for slot in 0..SAVE_SLOTS {
            let entry = slot_entry(host.read_save_header(slot));
            if slot < load_items {
                let status = if entry.loadable {
                    ItemStatus::Selectable
                } else {
                    ItemStatus::Unavailable
                };
                self.model.set_status(NodeId::Load, slot, status);
            }
            self.save_strings[slot] = entry.description;
        }
    }

    /// Run the first stage of the input pipeline against the current mode.
    pub(crate) fn normalize(&mut self, event: &InputEvent, now: u64) -> Option<LogicalInput> {
        let ctx = NormalizeContext {
            menu_active: self.active,
            message_needs_input: self.message.as_ref().is_some_and(|m| m.needs_input),
            text_entry_active: self.text_entry.is_some(),
            on_save_menu: self.current == NodeId::Save,
        };
        self.normalizer.normalize(
            event,
            &ctx,
            &self.settings.keys,
            &self.settings.joystick,
            now,
        )
    }

    /// Per-tick update: skull animation and informational message expiry.
    /// Safe to call with no menu shown.
    pub fn tick(&mut self) {
        self.skull_counter -= 1;
        if self.skull_counter <= 0 {
            self.which_skull ^= 1;
            self.skull_counter = SKULL_ANIM_TICKS;
        }
        self.tick_message();
    }
}
