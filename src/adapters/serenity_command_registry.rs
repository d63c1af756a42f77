use super::command_registry::CommandRegistry;
use serenity::async_trait;
use serenity::builder::CreateCommand;
use serenity::model::application::Command;
use std::sync::Arc;

/// Publishes global commands for the application the HTTP client is logged in as
pub struct SerenityCommandRegistry {
    http: Arc<serenity::http::Http>,
}

impl SerenityCommandRegistry {
    pub fn new(http: Arc<serenity::http::Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CommandRegistry for SerenityCommandRegistry {
    async fn publish(&self, commands: Vec<CreateCommand>) -> Result<usize, serenity::Error> {
        let registered = Command::set_global_commands(&self.http, commands).await?;
        Ok(registered.len())
    }
}
