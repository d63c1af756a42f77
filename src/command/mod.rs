pub mod definition;
pub mod gif_command;
pub mod options;
pub mod registrar;
pub mod select;

pub use definition::{IDLE_PRESENCE, create_gif_command, is_gif_command};
pub use gif_command::{ERROR_MESSAGE, GifCommand, GifOutcome, NO_RESULTS_MESSAGE};
pub use options::GifOptions;
pub use registrar::{CommandRegistrar, register_commands};
