//! Message composition delegates.

use crate::domain::rest::{FileAttachment, RestRequest};
use crate::domain::value_objects::{
    ActionRow, AllowedMentions, Embed, EmbedAuthor, EmbedField, EmbedFooter, MentionType,
    Snowflake,
};
use crate::shared::error::DelegateError;

/// Accumulates an [`Embed`].
pub trait EmbedBuilderDelegate: Send {
    fn set_title(&mut self, title: String);
    fn set_description(&mut self, description: String);
    fn set_url(&mut self, url: String);
    fn set_timestamp(&mut self, timestamp: chrono::DateTime<chrono::Utc>);
    fn set_color(&mut self, color: u32);
    fn set_footer(&mut self, footer: EmbedFooter);
    fn set_image(&mut self, url: String);
    fn set_thumbnail(&mut self, url: String);
    fn set_author(&mut self, author: EmbedAuthor);
    fn add_field(&mut self, field: EmbedField);

    /// Remove every field whose name matches.
    fn remove_fields(&mut self, name: &str);

    fn build(&self) -> Result<Embed, DelegateError>;
}

/// Accumulates an [`AllowedMentions`] policy.
///
/// Allowing a whole category and listing explicit ids for it are mutually
/// exclusive; the later call wins.
pub trait AllowedMentionsBuilderDelegate: Send {
    fn set_mention_all_users(&mut self, allow: bool);
    fn set_mention_all_roles(&mut self, allow: bool);
    fn set_mention_everyone(&mut self, allow: bool);
    fn add_user(&mut self, user_id: Snowflake);
    fn add_role(&mut self, role_id: Snowflake);
    fn set_mention_replied_user(&mut self, mention: bool);
    fn is_allowed(&self, mention_type: MentionType) -> bool;
    fn build(&self) -> Result<AllowedMentions, DelegateError>;
}

/// Content shared by every kind of outgoing message.
pub trait MessageBuilderBaseDelegate: Send {
    fn set_content(&mut self, content: String);
    fn append_content(&mut self, content: &str);
    fn content(&self) -> &str;
    fn set_tts(&mut self, tts: bool);
    fn add_embed(&mut self, embed: Embed);
    fn remove_all_embeds(&mut self);
    fn add_action_row(&mut self, row: ActionRow);
    fn remove_all_components(&mut self);
    fn set_allowed_mentions(&mut self, mentions: AllowedMentions);
    fn add_attachment(&mut self, file: FileAttachment);
}

/// A regular channel message.
pub trait MessageBuilderDelegate: MessageBuilderBaseDelegate {
    fn reply_to(&mut self, message_id: Snowflake);
    fn add_sticker(&mut self, sticker_id: Snowflake);
    fn set_nonce(&mut self, nonce: String);

    /// `POST /channels/{channel}/messages`
    fn send_request(&self, channel_id: Snowflake) -> Result<RestRequest, DelegateError>;

    /// `PATCH /channels/{channel}/messages/{message}`
    fn edit_request(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> Result<RestRequest, DelegateError>;
}

/// How an interaction is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionCallbackType {
    /// Respond with a new message
    ChannelMessageWithSource = 4,
    /// Edit the message the component was attached to
    UpdateMessage = 7,
}

/// A message sent in response to an interaction.
pub trait InteractionMessageBuilderDelegate: MessageBuilderBaseDelegate {
    /// Only the invoking user sees ephemeral messages.
    fn set_ephemeral(&mut self, ephemeral: bool);

    /// `POST /interactions/{id}/{token}/callback`
    fn respond_request(
        &self,
        interaction_id: Snowflake,
        token: &str,
        callback_type: InteractionCallbackType,
    ) -> Result<RestRequest, DelegateError>;

    /// `POST /webhooks/{application}/{token}`
    fn followup_request(
        &self,
        application_id: Snowflake,
        token: &str,
    ) -> Result<RestRequest, DelegateError>;

    /// `PATCH /webhooks/{application}/{token}/messages/@original`
    fn edit_original_request(
        &self,
        application_id: Snowflake,
        token: &str,
    ) -> Result<RestRequest, DelegateError>;
}

/// A message executed through a webhook.
pub trait WebhookMessageBuilderDelegate: MessageBuilderBaseDelegate {
    fn set_display_name(&mut self, name: String);
    fn set_display_avatar(&mut self, avatar_url: String);

    /// `POST /webhooks/{id}/{token}?wait=`
    fn execute_request(
        &self,
        webhook_id: Snowflake,
        token: &str,
        wait: bool,
    ) -> Result<RestRequest, DelegateError>;
}
