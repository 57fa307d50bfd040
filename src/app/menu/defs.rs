use super::{MenuItem, MenuNode};
use crate::app::types::{
    DrawRoutine, GameMode, GameVariant, GameVersion, ItemAction, ItemStatus, NodeId,
};

/// Width of the virtual screen the anchors are expressed in.
pub const SCREEN_WIDTH: i32 = 320;
pub const SCREEN_HEIGHT: i32 = 200;

/// Number of save/load slots.
pub const SAVE_SLOTS: usize = 6;

const READ_THIS_ITEM: usize = 4;
const SLOT_KEYS: [char; SAVE_SLOTS] = ['1', '2', '3', '4', '5', '6'];

fn main_node() -> MenuNode {
    MenuNode::new(
        NodeId::Main,
        vec![
            MenuItem::selectable("M_NGAME", ItemAction::NewGame, 'n'),
            MenuItem::selectable("M_OPTION", ItemAction::Options, 'o'),
            MenuItem::selectable("M_LOADG", ItemAction::LoadGame, 'l'),
            MenuItem::selectable("M_SAVEG", ItemAction::SaveGame, 's'),
            MenuItem::selectable("M_RDTHIS", ItemAction::ReadThis, 'r'),
            MenuItem::selectable("M_QUITG", ItemAction::QuitGame, 'q'),
        ],
        None,
        DrawRoutine::MainMenu,
        SCREEN_WIDTH / 2 - 63,
        68,
    )
}

fn episode_node() -> MenuNode {
    MenuNode::new(
        NodeId::Episode,
        vec![
            MenuItem::selectable("M_EPI1", ItemAction::Episode, 'k'),
            MenuItem::selectable("M_EPI2", ItemAction::Episode, 't'),
            MenuItem::selectable("M_EPI3", ItemAction::Episode, 'i'),
            MenuItem::selectable("M_EPI4", ItemAction::Episode, 't'),
        ],
        Some(NodeId::Main),
        DrawRoutine::Episode,
        SCREEN_WIDTH / 2 - 112,
        63,
    )
}

fn new_game_node() -> MenuNode {
    MenuNode::new(
        NodeId::NewGame,
        vec![
            MenuItem::selectable("M_JKILL", ItemAction::ChooseSkill, 'i'),
            MenuItem::selectable("M_ROUGH", ItemAction::ChooseSkill, 'h'),
            MenuItem::selectable("M_HURT", ItemAction::ChooseSkill, 'h'),
            MenuItem::selectable("M_ULTRA", ItemAction::ChooseSkill, 'u'),
            MenuItem::selectable("M_NMARE", ItemAction::ChooseSkill, 'n'),
        ],
        Some(NodeId::Episode),
        DrawRoutine::NewGame,
        SCREEN_WIDTH / 2 - 112,
        63,
    )
    // "Hurt me plenty"
    .with_initial_focus(2)
}

fn options_node() -> MenuNode {
    MenuNode::new(
        NodeId::Options,
        vec![
            MenuItem::selectable("M_ENDGAM", ItemAction::EndGame, 'e'),
            MenuItem::selectable("M_MESSG", ItemAction::ToggleMessages, 'm'),
            MenuItem::spacer(),
            MenuItem::slider("M_MSENS", ItemAction::ChangeSensitivity, 'm'),
            MenuItem::spacer(),
            MenuItem::selectable("M_SVOL", ItemAction::Sound, 's'),
        ],
        Some(NodeId::Main),
        DrawRoutine::Options,
        SCREEN_WIDTH / 2 - 100,
        37,
    )
}

fn read_this_nodes() -> (MenuNode, MenuNode) {
    let first = MenuNode::new(
        NodeId::ReadThis1,
        vec![MenuItem::new(
            ItemStatus::Selectable,
            "",
            Some(ItemAction::ReadThis2),
            '\0',
        )],
        Some(NodeId::Main),
        DrawRoutine::ReadThis1,
        280,
        185,
    );
    let second = MenuNode::new(
        NodeId::ReadThis2,
        vec![MenuItem::new(
            ItemStatus::Selectable,
            "",
            Some(ItemAction::FinishReadThis),
            '\0',
        )],
        Some(NodeId::ReadThis1),
        DrawRoutine::ReadThis2,
        330,
        175,
    );
    (first, second)
}

fn sound_node() -> MenuNode {
    MenuNode::new(
        NodeId::Sound,
        vec![
            MenuItem::slider("M_SFXVOL", ItemAction::SfxVolume, 's'),
            MenuItem::spacer(),
            MenuItem::slider("M_MUSVOL", ItemAction::MusicVolume, 'm'),
            MenuItem::spacer(),
        ],
        Some(NodeId::Options),
        DrawRoutine::Sound,
        SCREEN_WIDTH / 2 - 80,
        64,
    )
}

fn slot_node(id: NodeId, action: ItemAction, draw: DrawRoutine) -> MenuNode {
    let items = SLOT_KEYS
        .iter()
        .map(|&k| MenuItem::selectable("", action, k))
        .collect();
    MenuNode::new(id, items, Some(NodeId::Main), draw, SCREEN_WIDTH / 2 - 90, 54)
}

/// Build every node, in `NodeId` order, adjusted for the emulated variant.
pub(super) fn standard_nodes(variant: GameVariant) -> Vec<MenuNode> {
    let mut main = main_node();
    let mut episode = episode_node();
    let mut new_game = new_game_node();
    let (mut read1, mut read2) = read_this_nodes();

    if variant.version >= GameVersion::Ultimate {
        main.items[READ_THIS_ITEM].action = Some(ItemAction::ReadThis2);
        read2.parent = None;
    }

    if (GameVersion::Final..=GameVersion::Final2).contains(&variant.version) {
        read2.draw = DrawRoutine::ReadThisCommercial;
    }

    if variant.mode == GameMode::Commercial {
        // The quit entry takes the place of "read this".
        let quit = main.items.remove(READ_THIS_ITEM + 1);
        main.items[READ_THIS_ITEM] = quit;
        main.y += 8;
        new_game.parent = Some(NodeId::Main);
        read1.draw = DrawRoutine::ReadThisCommercial;
        read1.x = 330;
        read1.y = 165;
        read1.items[0].action = Some(ItemAction::FinishReadThis);
    }

    if variant.version < GameVersion::Ultimate {
        episode.items.truncate(3);
    } else if variant.version == GameVersion::Chex {
        episode.items.truncate(1);
    }

    vec![
        main,
        episode,
        new_game,
        options_node(),
        read1,
        read2,
        sound_node(),
        slot_node(NodeId::Load, ItemAction::LoadSelect, DrawRoutine::Load),
        slot_node(NodeId::Save, ItemAction::SaveSelect, DrawRoutine::Save),
    ]
}
