//! Embeds, allowed mentions and outgoing messages.

use chrono::{DateTime, Utc};

use crate::application::context::ApiContext;
use crate::domain::delegates::{
    AllowedMentionsBuilderDelegate, DelegateFactoryExt, EmbedBuilderDelegate,
    InteractionCallbackType, InteractionMessageBuilderDelegate, MessageBuilderBaseDelegate,
    MessageBuilderDelegate, WebhookMessageBuilderDelegate,
};
use crate::domain::entities::{Message, Webhook};
use crate::domain::rest::{FileAttachment, RestResponse};
use crate::domain::value_objects::{
    ActionRow, AllowedMentions, Embed, EmbedAuthor, EmbedField, EmbedFooter, MentionType,
    Snowflake,
};
use crate::shared::error::{ClientError, DelegateError};

pub struct EmbedBuilder {
    delegate: Box<dyn EmbedBuilderDelegate>,
}

impl EmbedBuilder {
    pub fn new(ctx: &ApiContext) -> Result<Self, DelegateError> {
        Ok(Self {
            delegate: ctx.factory().create_embed_builder_delegate()?,
        })
    }

    forward! {
        title(title: impl Into<String>) => set_title(title.into());
        description(description: impl Into<String>) => set_description(description.into());
        url(url: impl Into<String>) => set_url(url.into());
        timestamp(timestamp: DateTime<Utc>) => set_timestamp(timestamp);
        /// RGB color, e.g. `0x5865F2`.
        color(color: u32) => set_color(color);
        footer(footer: EmbedFooter) => set_footer(footer);
        image(url: impl Into<String>) => set_image(url.into());
        thumbnail(url: impl Into<String>) => set_thumbnail(url.into());
        author(author: EmbedAuthor) => set_author(author);
        remove_fields(name: &str) => remove_fields(name);
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.delegate.add_field(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn build(self) -> Result<Embed, DelegateError> {
        self.delegate.build()
    }
}

pub struct AllowedMentionsBuilder {
    delegate: Box<dyn AllowedMentionsBuilderDelegate>,
}

impl AllowedMentionsBuilder {
    pub fn new(ctx: &ApiContext) -> Result<Self, DelegateError> {
        Ok(Self {
            delegate: ctx.factory().create_allowed_mentions_builder_delegate()?,
        })
    }

    forward! {
        all_users(allow: bool) => set_mention_all_users(allow);
        all_roles(allow: bool) => set_mention_all_roles(allow);
        everyone(allow: bool) => set_mention_everyone(allow);
        user(user_id: Snowflake) => add_user(user_id);
        role(role_id: Snowflake) => add_role(role_id);
        replied_user(mention: bool) => set_mention_replied_user(mention);
    }

    pub fn is_allowed(&self, mention_type: MentionType) -> bool {
        self.delegate.is_allowed(mention_type)
    }

    pub fn build(self) -> Result<AllowedMentions, DelegateError> {
        self.delegate.build()
    }
}

/// Setters shared by every message facade.
macro_rules! message_base {
    () => {
        forward! {
            content(content: impl Into<String>) => set_content(content.into());
            append(content: &str) => append_content(content);
            tts(tts: bool) => set_tts(tts);
            embed(embed: Embed) => add_embed(embed);
            remove_all_embeds() => remove_all_embeds();
            action_row(row: ActionRow) => add_action_row(row);
            remove_all_components() => remove_all_components();
            allowed_mentions(mentions: AllowedMentions) => set_allowed_mentions(mentions);
            attachment(file: FileAttachment) => add_attachment(file);
        }

        /// Content accumulated so far.
        pub fn current_content(&self) -> &str {
            self.delegate.content()
        }
    };
}

/// A message sent to a channel.
pub struct MessageBuilder<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn MessageBuilderDelegate>,
}

impl<'a> MessageBuilder<'a> {
    pub fn new(ctx: &'a ApiContext) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_message_builder_delegate()?,
        })
    }

    message_base!();

    forward! {
        reply_to(message_id: Snowflake) => reply_to(message_id);
        sticker(sticker_id: Snowflake) => add_sticker(sticker_id);
        nonce(nonce: impl Into<String>) => set_nonce(nonce.into());
    }

    pub async fn send(self, channel_id: Snowflake) -> Result<RestResponse, ClientError> {
        let request = self.delegate.send_request(channel_id)?;
        self.ctx.execute(request).await
    }

    /// Replace the content of an existing message.
    pub async fn edit(self, message: &Message) -> Result<RestResponse, ClientError> {
        let request = self.delegate.edit_request(message.channel_id, message.id)?;
        self.ctx.execute(request).await
    }
}

/// A response to an interaction.
pub struct InteractionMessageBuilder<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn InteractionMessageBuilderDelegate>,
}

impl<'a> InteractionMessageBuilder<'a> {
    pub fn new(ctx: &'a ApiContext) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_interaction_message_builder_delegate()?,
        })
    }

    message_base!();

    forward! {
        ephemeral(ephemeral: bool) => set_ephemeral(ephemeral);
    }

    pub async fn respond(
        self,
        interaction_id: Snowflake,
        token: &str,
        callback_type: InteractionCallbackType,
    ) -> Result<RestResponse, ClientError> {
        let request = self
            .delegate
            .respond_request(interaction_id, token, callback_type)?;
        self.ctx.execute(request).await
    }

    pub async fn send_followup(self, token: &str) -> Result<RestResponse, ClientError> {
        let request = self
            .delegate
            .followup_request(self.ctx.session().application_id, token)?;
        self.ctx.execute(request).await
    }

    pub async fn edit_original(self, token: &str) -> Result<RestResponse, ClientError> {
        let request = self
            .delegate
            .edit_original_request(self.ctx.session().application_id, token)?;
        self.ctx.execute(request).await
    }
}

/// A message executed through a webhook.
pub struct WebhookMessageBuilder<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn WebhookMessageBuilderDelegate>,
}

impl<'a> WebhookMessageBuilder<'a> {
    pub fn new(ctx: &'a ApiContext) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_webhook_message_builder_delegate()?,
        })
    }

    message_base!();

    forward! {
        display_name(name: impl Into<String>) => set_display_name(name.into());
        display_avatar(avatar_url: impl Into<String>) => set_display_avatar(avatar_url.into());
    }

    /// Execute the webhook. With `wait` the platform returns the created
    /// message.
    pub async fn send(self, webhook: &Webhook, wait: bool) -> Result<RestResponse, ClientError> {
        let token = webhook
            .token
            .as_deref()
            .ok_or(DelegateError::MissingField("webhook.token"))?;
        let request = self.delegate.execute_request(webhook.id, token, wait)?;
        self.ctx.execute(request).await
    }
}
