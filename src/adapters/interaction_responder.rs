use serenity::async_trait;

/// Interface for answering a single slash-command interaction
#[async_trait]
pub trait InteractionResponder: Send + Sync {
    /// Acknowledge the interaction now and answer later
    ///
    /// Must be called before any slow work; Discord drops interactions that
    /// are not acknowledged within three seconds.
    async fn defer(&self) -> Result<(), serenity::Error>;

    /// Replace the content of the deferred reply
    async fn edit_reply(&self, content: &str) -> Result<(), serenity::Error>;

    /// Send a fresh reply visible only to the invoking user
    async fn reply_ephemeral(&self, content: &str) -> Result<(), serenity::Error>;
}
