use super::*;
use crate::app::types::SoundCue;

impl MenuContext {
    fn ensure_navigable(&self) -> Result<usize> {
        if !self.model.has_selectable(self.current) {
            return Err(MenuError::NoSelectableItems(self.current));
        }
        Ok(self.model.item_count(self.current))
    }

    /// Move the cursor down, wrapping to the top and skipping disabled
    /// items. One cue is played for every step taken.
    pub fn move_down(&mut self, host: &mut dyn GameHost) -> Result<()> {
        let count = self.ensure_navigable()?;
        loop {
            self.item_on = if self.item_on + 1 >= count { 0 } else { self.item_on + 1 };
            host.play_sound(SoundCue::Pstop);
            if !self.model.status(self.current, self.item_on).is_disabled() {
                return Ok(());
            }
        }
    }

    /// Move the cursor up, wrapping to the bottom and skipping disabled items.
    pub fn move_up(&mut self, host: &mut dyn GameHost) -> Result<()> {
        let count = self.ensure_navigable()?;
        loop {
            self.item_on = if self.item_on == 0 { count - 1 } else { self.item_on - 1 };
            host.play_sound(SoundCue::Pstop);
            if !self.model.status(self.current, self.item_on).is_disabled() {
                return Ok(());
            }
        }
    }

    /// Focus the next item bound to `ch`, searching after the cursor first
    /// and then wrapping round up to and including it. Disabled items never
    /// match.
    pub fn search_shortcut(&mut self, ch: char) -> Option<usize> {
        let count = self.model.item_count(self.current);
        if count == 0 {
            return None;
        }
        let focus = self.item_on.min(count - 1);
        let found = (focus + 1..count)
            .chain(0..=focus)
            .find(|&i| {
                !self.model.status(self.current, i).is_disabled()
                    && self.model.item_at(self.current, i).shortcut == ch
            })?;
        self.item_on = found;
        trace!(item = found, ?ch, "shortcut matched");
        Some(found)
    }

    /// Leave the current node for its parent. The focus is remembered
    /// either way; nothing else happens at a root.
    pub fn go_back(&mut self, host: &mut dyn GameHost) {
        self.persist_focus();
        if let Some(parent) = self.model.parent(self.current) {
            self.setup_next_menu(parent);
            host.play_sound(SoundCue::Swtchn);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::menu::MenuNode;
    use crate::app::types::{DrawRoutine, ItemAction};
    use crate::host::RecordingHost;

    fn ctx_with_main(items: Vec<MenuItem>) -> MenuContext {
        let node = MenuNode::new(NodeId::Main, items, None, DrawRoutine::MainMenu, 0, 0);
        let model = MenuModel::new(Default::default()).with_node(node);
        let mut ctx = MenuContext::with_model(Settings::default(), model);
        ctx.start_control_panel();
        ctx
    }

    #[test]
    fn all_disabled_node_is_an_error() {
        let mut ctx = ctx_with_main(vec![MenuItem::spacer(), MenuItem::spacer()]);
        let mut host = RecordingHost::new();
        assert_eq!(
            ctx.move_down(&mut host),
            Err(MenuError::NoSelectableItems(NodeId::Main))
        );
        assert_eq!(
            ctx.move_up(&mut host),
            Err(MenuError::NoSelectableItems(NodeId::Main))
        );
        assert!(host.calls.is_empty());
    }

    #[test]
    fn shortcut_skips_disabled_items() {
        let mut ctx = ctx_with_main(vec![
            MenuItem::selectable("A", ItemAction::Options, 'a'),
            MenuItem::new(ItemStatus::Disabled, "", None, 'x'),
            MenuItem::selectable("X", ItemAction::Options, 'x'),
        ]);
        assert_eq!(ctx.search_shortcut('x'), Some(2));
        assert_eq!(ctx.search_shortcut('z'), None);
        assert_eq!(ctx.item_on, 2);
    }

    #[test]
    fn shortcut_wraps_onto_focused_item() {
        let mut ctx = ctx_with_main(vec![
            MenuItem::selectable("A", ItemAction::Options, 'a'),
            MenuItem::selectable("B", ItemAction::Options, 'b'),
        ]);
        ctx.item_on = 1;
        assert_eq!(ctx.search_shortcut('b'), Some(1));
    }
}
