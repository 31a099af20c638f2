//! Custom emoji REST delegates.

use std::sync::Arc;

use serde::Serialize;
use validator::Validate;

use super::common::{require, with_changes, with_payload};
use crate::domain::delegates::{CustomEmojiBuilderDelegate, CustomEmojiUpdaterDelegate};
use crate::domain::entities::{KnownCustomEmoji, Server};
use crate::domain::rest::RestRequest;
use crate::domain::value_objects::Snowflake;
use crate::shared::error::DelegateError;
use crate::shared::image::ImageData;

const MAX_EMOJI_SIZE: usize = 256 * 1024;

#[derive(Debug, Default, Serialize, Validate)]
struct EmojiPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 32, message = "must be 2-32 characters"))]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<ImageData>,

    #[serde(skip_serializing_if = "Option::is_none")]
    roles: Option<Vec<Snowflake>>,
}

fn check_emoji_name(name: &Option<String>) -> Result<(), DelegateError> {
    match name {
        Some(name) if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') => Err(
            DelegateError::Validation("name: only letters, digits and underscores".into()),
        ),
        _ => Ok(()),
    }
}

pub struct RestCustomEmojiBuilderDelegate {
    server: Arc<Server>,
    payload: EmojiPayload,
    reason: Option<String>,
}

impl RestCustomEmojiBuilderDelegate {
    pub fn new(server: Arc<Server>) -> Self {
        Self {
            server,
            payload: EmojiPayload::default(),
            reason: None,
        }
    }
}

impl CustomEmojiBuilderDelegate for RestCustomEmojiBuilderDelegate {
    fn server(&self) -> &Server {
        &self.server
    }

    fn set_audit_log_reason(&mut self, reason: String) {
        self.reason = Some(reason);
    }

    fn set_name(&mut self, name: String) {
        self.payload.name = Some(name);
    }

    fn set_image(&mut self, image: ImageData) {
        self.payload.image = Some(image);
    }

    fn add_role_to_whitelist(&mut self, role_id: Snowflake) {
        let roles = self.payload.roles.get_or_insert_with(Vec::new);
        if !roles.contains(&role_id) {
            roles.push(role_id);
        }
    }

    fn create_request(&self) -> Result<RestRequest, DelegateError> {
        require(&self.payload.name, "name")?;
        let image = require(&self.payload.image, "image")?;
        if image.bytes.len() > MAX_EMOJI_SIZE {
            return Err(DelegateError::Validation(
                "image: must be at most 256 KiB".into(),
            ));
        }
        check_emoji_name(&self.payload.name)?;

        let request = RestRequest::post(format!("/guilds/{}/emojis", self.server.id))
            .with_reason(self.reason.clone());
        with_payload(request, &self.payload)
    }
}

pub struct RestCustomEmojiUpdaterDelegate {
    emoji: Arc<KnownCustomEmoji>,
    patch: EmojiPayload,
    reason: Option<String>,
}

impl RestCustomEmojiUpdaterDelegate {
    pub fn new(emoji: Arc<KnownCustomEmoji>) -> Self {
        Self {
            emoji,
            patch: EmojiPayload::default(),
            reason: None,
        }
    }

    /// The whitelist being edited, seeded from the emoji's current roles.
    fn roles_mut(&mut self) -> &mut Vec<Snowflake> {
        let current = &self.emoji.whitelisted_roles;
        self.patch.roles.get_or_insert_with(|| current.clone())
    }
}

impl CustomEmojiUpdaterDelegate for RestCustomEmojiUpdaterDelegate {
    fn emoji(&self) -> &KnownCustomEmoji {
        &self.emoji
    }

    fn set_audit_log_reason(&mut self, reason: String) {
        self.reason = Some(reason);
    }

    fn set_name(&mut self, name: String) {
        self.patch.name = Some(name);
    }

    fn add_role_to_whitelist(&mut self, role_id: Snowflake) {
        let roles = self.roles_mut();
        if !roles.contains(&role_id) {
            roles.push(role_id);
        }
    }

    fn remove_role_from_whitelist(&mut self, role_id: Snowflake) {
        self.roles_mut().retain(|r| *r != role_id);
    }

    fn remove_all_roles_from_whitelist(&mut self) {
        self.patch.roles = Some(Vec::new());
    }

    fn update_request(&self) -> Result<RestRequest, DelegateError> {
        check_emoji_name(&self.patch.name)?;
        let request = RestRequest::patch(format!(
            "/guilds/{}/emojis/{}",
            self.emoji.server_id, self.emoji.id
        ))
        .with_reason(self.reason.clone());
        with_changes(request, &self.patch)
    }
}
