//! Message composition REST delegates.

use serde::Serialize;
use validator::Validate;

use crate::domain::delegates::{
    AllowedMentionsBuilderDelegate, EmbedBuilderDelegate, InteractionCallbackType,
    InteractionMessageBuilderDelegate, MessageBuilderBaseDelegate, MessageBuilderDelegate,
    WebhookMessageBuilderDelegate,
};
use crate::domain::rest::{FileAttachment, RestRequest};
use crate::domain::value_objects::{
    ActionRow, AllowedMentions, Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedMedia,
    MentionType, Snowflake,
};
use crate::shared::error::DelegateError;
use crate::shared::validation::{validated, validation_error};

/// Message flag hiding a response from everyone but the invoking user.
pub const EPHEMERAL_FLAG: u64 = 1 << 6;

const MAX_FILES: usize = 10;

// =============================================================================
// Embeds and mentions
// =============================================================================

#[derive(Default)]
pub struct RestEmbedBuilderDelegate {
    embed: Embed,
}

impl EmbedBuilderDelegate for RestEmbedBuilderDelegate {
    fn set_title(&mut self, title: String) {
        self.embed.title = Some(title);
    }

    fn set_description(&mut self, description: String) {
        self.embed.description = Some(description);
    }

    fn set_url(&mut self, url: String) {
        self.embed.url = Some(url);
    }

    fn set_timestamp(&mut self, timestamp: chrono::DateTime<chrono::Utc>) {
        self.embed.timestamp = Some(timestamp);
    }

    fn set_color(&mut self, color: u32) {
        self.embed.color = Some(color & 0xFFFFFF);
    }

    fn set_footer(&mut self, footer: EmbedFooter) {
        self.embed.footer = Some(footer);
    }

    fn set_image(&mut self, url: String) {
        self.embed.image = Some(EmbedMedia { url });
    }

    fn set_thumbnail(&mut self, url: String) {
        self.embed.thumbnail = Some(EmbedMedia { url });
    }

    fn set_author(&mut self, author: EmbedAuthor) {
        self.embed.author = Some(author);
    }

    fn add_field(&mut self, field: EmbedField) {
        self.embed.fields.push(field);
    }

    fn remove_fields(&mut self, name: &str) {
        self.embed.fields.retain(|f| f.name != name);
    }

    fn build(&self) -> Result<Embed, DelegateError> {
        validated(self.embed.clone())
    }
}

/// The platform caps explicit user and role mentions at 100 each.
const MAX_EXPLICIT_MENTIONS: usize = 100;

#[derive(Default)]
pub struct RestAllowedMentionsBuilderDelegate {
    mentions: AllowedMentions,
}

impl RestAllowedMentionsBuilderDelegate {
    fn set_parse(&mut self, mention_type: MentionType, allow: bool) {
        self.mentions.parse.retain(|t| *t != mention_type);
        if allow {
            self.mentions.parse.push(mention_type);
        }
    }
}

impl AllowedMentionsBuilderDelegate for RestAllowedMentionsBuilderDelegate {
    fn set_mention_all_users(&mut self, allow: bool) {
        if allow {
            self.mentions.users.clear();
        }
        self.set_parse(MentionType::Users, allow);
    }

    fn set_mention_all_roles(&mut self, allow: bool) {
        if allow {
            self.mentions.roles.clear();
        }
        self.set_parse(MentionType::Roles, allow);
    }

    fn set_mention_everyone(&mut self, allow: bool) {
        self.set_parse(MentionType::Everyone, allow);
    }

    fn add_user(&mut self, user_id: Snowflake) {
        self.set_parse(MentionType::Users, false);
        if !self.mentions.users.contains(&user_id) {
            self.mentions.users.push(user_id);
        }
    }

    fn add_role(&mut self, role_id: Snowflake) {
        self.set_parse(MentionType::Roles, false);
        if !self.mentions.roles.contains(&role_id) {
            self.mentions.roles.push(role_id);
        }
    }

    fn set_mention_replied_user(&mut self, mention: bool) {
        self.mentions.replied_user = mention;
    }

    fn is_allowed(&self, mention_type: MentionType) -> bool {
        self.mentions.parse.contains(&mention_type)
    }

    fn build(&self) -> Result<AllowedMentions, DelegateError> {
        if self.mentions.users.len() > MAX_EXPLICIT_MENTIONS
            || self.mentions.roles.len() > MAX_EXPLICIT_MENTIONS
        {
            return Err(DelegateError::Validation(format!(
                "allowed_mentions: at most {} users and {} roles",
                MAX_EXPLICIT_MENTIONS, MAX_EXPLICIT_MENTIONS
            )));
        }
        Ok(self.mentions.clone())
    }
}

// =============================================================================
// Message payload shared by all builders
// =============================================================================

#[derive(Debug, Clone, Serialize)]
struct MessageReference {
    message_id: Snowflake,
}

#[derive(Debug, Clone, Serialize)]
struct AttachmentInfo {
    id: usize,
    filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

#[derive(Debug, Default, Serialize, Validate)]
struct MessagePayload {
    #[serde(skip_serializing_if = "String::is_empty")]
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    content: String,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    tts: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[validate(length(max = 10, message = "must contain at most 10 embeds"), nested)]
    embeds: Vec<Embed>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[validate(length(max = 5, message = "must contain at most 5 action rows"), nested)]
    components: Vec<ActionRow>,

    #[serde(skip_serializing_if = "Option::is_none")]
    allowed_mentions: Option<AllowedMentions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    message_reference: Option<MessageReference>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[validate(length(max = 3, message = "must contain at most 3 stickers"))]
    sticker_ids: Vec<Snowflake>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 25, message = "must be at most 25 characters"))]
    nonce: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    flags: Option<u64>,

    /// Webhook display name override
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 80, message = "must be 1-80 characters"))]
    username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
}

/// Accumulated message state plus the files to upload with it.
#[derive(Debug, Default)]
struct MessageDraft {
    payload: MessagePayload,
    files: Vec<FileAttachment>,
}

impl MessageDraft {
    fn is_empty(&self) -> bool {
        self.payload.content.is_empty()
            && self.payload.embeds.is_empty()
            && self.payload.components.is_empty()
            && self.payload.sticker_ids.is_empty()
            && self.files.is_empty()
    }

    fn ensure_sendable(&self) -> Result<(), DelegateError> {
        if self.is_empty() {
            return Err(DelegateError::Validation(
                "message: needs content, embeds, components, stickers or files".into(),
            ));
        }
        Ok(())
    }

    /// Validate the payload and fill in the attachment metadata.
    fn prepared(&self) -> Result<PreparedMessage<'_>, DelegateError> {
        self.payload.validate().map_err(validation_error)?;
        if self.files.len() > MAX_FILES {
            return Err(DelegateError::Validation(format!(
                "attachments: must contain at most {} files",
                MAX_FILES
            )));
        }

        let attachments = self
            .files
            .iter()
            .enumerate()
            .map(|(id, file)| AttachmentInfo {
                id,
                filename: file.upload_name(),
                description: file.description.clone(),
            })
            .collect();
        Ok(PreparedMessage {
            payload: &self.payload,
            attachments,
        })
    }

    /// Attach the payload and files to `request`.
    fn render(&self, request: RestRequest) -> Result<RestRequest, DelegateError> {
        let request = request.with_json(&self.prepared()?)?;
        Ok(request.with_files(self.files.clone()))
    }

    /// Like `render`, but an edit must change something.
    fn render_changes(&self, request: RestRequest) -> Result<RestRequest, DelegateError> {
        let request = self.render(request)?;
        match &request.body {
            Some(serde_json::Value::Object(fields)) if !fields.is_empty() => Ok(request),
            _ => Err(DelegateError::NothingToUpdate),
        }
    }
}

/// Payload with the attachment metadata derived from the files.
#[derive(Serialize)]
struct PreparedMessage<'a> {
    #[serde(flatten)]
    payload: &'a MessagePayload,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<AttachmentInfo>,
}

/// Implement the shared message builder contract by forwarding to the
/// `draft` field.
macro_rules! impl_message_base {
    ($ty:ty) => {
        impl MessageBuilderBaseDelegate for $ty {
            fn set_content(&mut self, content: String) {
                self.draft.payload.content = content;
            }

            fn append_content(&mut self, content: &str) {
                self.draft.payload.content.push_str(content);
            }

            fn content(&self) -> &str {
                &self.draft.payload.content
            }

            fn set_tts(&mut self, tts: bool) {
                self.draft.payload.tts = tts;
            }

            fn add_embed(&mut self, embed: Embed) {
                self.draft.payload.embeds.push(embed);
            }

            fn remove_all_embeds(&mut self) {
                self.draft.payload.embeds.clear();
            }

            fn add_action_row(&mut self, row: ActionRow) {
                self.draft.payload.components.push(row);
            }

            fn remove_all_components(&mut self) {
                self.draft.payload.components.clear();
            }

            fn set_allowed_mentions(&mut self, mentions: AllowedMentions) {
                self.draft.payload.allowed_mentions = Some(mentions);
            }

            fn add_attachment(&mut self, file: FileAttachment) {
                self.draft.files.push(file);
            }
        }
    };
}

// =============================================================================
// Channel messages
// =============================================================================

#[derive(Default)]
pub struct RestMessageBuilderDelegate {
    draft: MessageDraft,
}

impl_message_base!(RestMessageBuilderDelegate);

impl MessageBuilderDelegate for RestMessageBuilderDelegate {
    fn reply_to(&mut self, message_id: Snowflake) {
        self.draft.payload.message_reference = Some(MessageReference { message_id });
    }

    fn add_sticker(&mut self, sticker_id: Snowflake) {
        self.draft.payload.sticker_ids.push(sticker_id);
    }

    fn set_nonce(&mut self, nonce: String) {
        self.draft.payload.nonce = Some(nonce);
    }

    fn send_request(&self, channel_id: Snowflake) -> Result<RestRequest, DelegateError> {
        self.draft.ensure_sendable()?;
        self.draft
            .render(RestRequest::post(format!("/channels/{}/messages", channel_id)))
    }

    fn edit_request(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> Result<RestRequest, DelegateError> {
        self.draft.render_changes(RestRequest::patch(format!(
            "/channels/{}/messages/{}",
            channel_id, message_id
        )))
    }
}

// =============================================================================
// Interaction responses
// =============================================================================

#[derive(Serialize)]
struct InteractionCallback<'a> {
    #[serde(rename = "type")]
    callback_type: u8,
    data: PreparedMessage<'a>,
}

#[derive(Default)]
pub struct RestInteractionMessageBuilderDelegate {
    draft: MessageDraft,
}

impl_message_base!(RestInteractionMessageBuilderDelegate);

impl InteractionMessageBuilderDelegate for RestInteractionMessageBuilderDelegate {
    fn set_ephemeral(&mut self, ephemeral: bool) {
        let flags = self.draft.payload.flags.unwrap_or(0);
        let flags = if ephemeral {
            flags | EPHEMERAL_FLAG
        } else {
            flags & !EPHEMERAL_FLAG
        };
        self.draft.payload.flags = (flags != 0).then_some(flags);
    }

    fn respond_request(
        &self,
        interaction_id: Snowflake,
        token: &str,
        callback_type: InteractionCallbackType,
    ) -> Result<RestRequest, DelegateError> {
        let callback = InteractionCallback {
            callback_type: callback_type as u8,
            data: self.draft.prepared()?,
        };
        let request = RestRequest::post(format!(
            "/interactions/{}/{}/callback",
            interaction_id, token
        ))
        .unauthorized()
        .with_json(&callback)?;
        Ok(request.with_files(self.draft.files.clone()))
    }

    fn followup_request(
        &self,
        application_id: Snowflake,
        token: &str,
    ) -> Result<RestRequest, DelegateError> {
        self.draft.ensure_sendable()?;
        self.draft.render(
            RestRequest::post(format!("/webhooks/{}/{}", application_id, token)).unauthorized(),
        )
    }

    fn edit_original_request(
        &self,
        application_id: Snowflake,
        token: &str,
    ) -> Result<RestRequest, DelegateError> {
        self.draft.render_changes(
            RestRequest::patch(format!(
                "/webhooks/{}/{}/messages/@original",
                application_id, token
            ))
            .unauthorized(),
        )
    }
}

// =============================================================================
// Webhook messages
// =============================================================================

#[derive(Default)]
pub struct RestWebhookMessageBuilderDelegate {
    draft: MessageDraft,
}

impl_message_base!(RestWebhookMessageBuilderDelegate);

impl WebhookMessageBuilderDelegate for RestWebhookMessageBuilderDelegate {
    fn set_display_name(&mut self, name: String) {
        self.draft.payload.username = Some(name);
    }

    fn set_display_avatar(&mut self, avatar_url: String) {
        self.draft.payload.avatar_url = Some(avatar_url);
    }

    fn execute_request(
        &self,
        webhook_id: Snowflake,
        token: &str,
        wait: bool,
    ) -> Result<RestRequest, DelegateError> {
        self.draft.ensure_sendable()?;
        self.draft.render(
            RestRequest::post(format!("/webhooks/{}/{}", webhook_id, token))
                .with_query("wait", wait)
                .unauthorized(),
        )
    }
}
