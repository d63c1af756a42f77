use serenity::async_trait;
use serenity::builder::CreateCommand;

/// Interface for publishing application commands
#[async_trait]
pub trait CommandRegistry: Send + Sync {
    /// Replace the application's global command set with `commands`
    ///
    /// # Returns
    ///
    /// The number of commands Discord acknowledged
    async fn publish(&self, commands: Vec<CreateCommand>) -> Result<usize, serenity::Error>;
}
