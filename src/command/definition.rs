//! The `/gif` command surface.

use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::CommandOptionType;

pub const GIF_COMMAND_NAME: &str = "gif";

pub const SEARCH_OPTION: &str = "search";
pub const CUSTOM_OPTION: &str = "custom";

/// Presence label shown while no invocation is in flight
pub const IDLE_PRESENCE: &str = "/gif";

/// Fixed category choices offered by the `custom` option, in display order
///
/// Discord caps a choice list at 25 entries, which this list uses in full.
pub const CATEGORIES: [&str; 25] = [
    "slap",
    "kiss",
    "anime",
    "dance",
    "angry",
    "happy",
    "sad",
    "facepalm",
    "excited",
    "highfive",
    "hug",
    "cry",
    "laugh",
    "wave",
    "clap",
    "thumbs up",
    "shrug",
    "run",
    "sleep",
    "yawn",
    "poke",
    "boop",
    "stare",
    "pat",
    "zoom",
];

/// Build the descriptor published to Discord
///
/// Both options are optional; Discord itself rejects `custom` values that
/// are not among `CATEGORIES`.
pub fn create_gif_command() -> CreateCommand {
    let custom = CATEGORIES.iter().fold(
        CreateCommandOption::new(CommandOptionType::String, CUSTOM_OPTION, "Choose a category")
            .required(false),
        |option, category| option.add_string_choice(*category, *category),
    );

    CreateCommand::new(GIF_COMMAND_NAME)
        .description("Send a random GIF, search one, or choose a category")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, SEARCH_OPTION, "Search for a keyword")
                .required(false),
        )
        .add_option(custom)
}

/// Whether an incoming command name belongs to this bot
pub fn is_gif_command(name: &str) -> bool {
    name == GIF_COMMAND_NAME
}
