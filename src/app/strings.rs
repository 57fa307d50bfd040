// User-facing message text.

pub const PRESSKEY: &str = "press a key.";
pub const PRESSYN: &str = "press y or n.";

pub const EMPTY_SLOT: &str = "empty slot";

pub const LOADNET: &str = "you can't do load while in a net game!\n\npress a key.";
pub const QLOADNET: &str = "you can't quickload during a netgame!\n\npress a key.";
pub const QSAVESPOT: &str = "you haven't picked a quicksave slot yet!\n\npress a key.";
pub const SAVEDEAD: &str = "you can't save if you aren't playing!\n\npress a key.";
pub const NEWGAME: &str =
    "you can't start a new game\nwhile in a network game.\n\npress a key.";
pub const NIGHTMARE: &str =
    "are you sure? this skill level\nisn't even remotely fair.\n\npress y or n.";
pub const SWSTRING: &str = "this is the shareware version of doom.\n\n\
                            you need to order the entire trilogy.\n\npress a key.";
pub const NETEND: &str = "you can't end a netgame!\n\npress a key.";
pub const ENDGAME: &str = "are you sure you want to end the game?\n\npress y or n.";
pub const DOSY: &str = "(press y to quit to dos.)";

pub const MSGOFF: &str = "Messages OFF";
pub const MSGON: &str = "Messages ON";

pub const GAMMA_LEVELS: [&str; 5] = [
    "Gamma correction OFF",
    "Gamma correction level 1",
    "Gamma correction level 2",
    "Gamma correction level 3",
    "Gamma correction level 4",
];

pub const QUIT_MESSAGES_DOOM1: [&str; 8] = [
    "are you sure you want to\nquit this great game?",
    "please don't leave, there's more\ndemons to toast!",
    "let's beat it -- this is turning\ninto a bloodbath!",
    "i wouldn't leave if i were you.\ndos is much worse.",
    "you're trying to say you like dos\nbetter than me, right?",
    "don't leave yet -- there's a\ndemon around that corner!",
    "ya know, next time you come in here\ni'm gonna toast ya.",
    "go ahead and leave. see if i care.",
];

pub const QUIT_MESSAGES_DOOM2: [&str; 8] = [
    "are you sure you want to\nquit this great game?",
    "you want to quit?\nthen, thou hast lost an eighth!",
    "don't go now, there's a \ndimensional shambler waiting\nat the dos prompt!",
    "get outta here and go back\nto your boring programs.",
    "if i were your boss, i'd \n deathmatch ya in a minute!",
    "look, bud. you leave now\nand you forfeit your body count!",
    "just leave. when you come\nback, i'll be waiting with a bat.",
    "you're lucky i don't smack\nyou for thinking about leaving.",
];

pub fn quicksave_prompt(name: &str) -> String {
    format!("quicksave over your game named\n\n'{}'?\n\n{}", name, PRESSYN)
}

pub fn quickload_prompt(name: &str) -> String {
    format!("do you want to quickload the game named\n\n'{}'?\n\n{}", name, PRESSYN)
}
