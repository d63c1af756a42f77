// Trait definitions
pub mod command_registry;
pub mod gif_provider;
pub mod interaction_responder;
pub mod presence;

// Type definitions
pub mod giphy_response;

// Implementations
pub mod giphy_provider;
pub mod serenity_command_registry;
pub mod serenity_interaction_responder;
pub mod serenity_presence;

// Re-exports for convenience
pub use command_registry::CommandRegistry;
pub use gif_provider::{Gif, GifProvider, GifQuery, GifResults};
pub use giphy_provider::GiphyProvider;
pub use interaction_responder::InteractionResponder;
pub use presence::Presence;
pub use serenity_command_registry::SerenityCommandRegistry;
pub use serenity_interaction_responder::SerenityInteractionResponder;
pub use serenity_presence::SerenityPresence;
