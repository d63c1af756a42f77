use super::interaction_responder::InteractionResponder;
use serenity::async_trait;
use serenity::builder::{
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
};
use serenity::model::application::CommandInteraction;
use std::sync::Arc;

/// InteractionResponder for one serenity CommandInteraction
pub struct SerenityInteractionResponder {
    http: Arc<serenity::http::Http>,
    command: CommandInteraction,
}

impl SerenityInteractionResponder {
    pub fn new(http: Arc<serenity::http::Http>, command: CommandInteraction) -> Self {
        Self { http, command }
    }
}

#[async_trait]
impl InteractionResponder for SerenityInteractionResponder {
    async fn defer(&self) -> Result<(), serenity::Error> {
        self.command.defer(&self.http).await
    }

    async fn edit_reply(&self, content: &str) -> Result<(), serenity::Error> {
        let builder = EditInteractionResponse::new().content(content);

        self.command.edit_response(&self.http, builder).await?;
        Ok(())
    }

    async fn reply_ephemeral(&self, content: &str) -> Result<(), serenity::Error> {
        let builder = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(content)
                .ephemeral(true),
        );

        self.command.create_response(&self.http, builder).await
    }
}
