//! Custom emoji delegates.

use crate::domain::entities::{KnownCustomEmoji, Server};
use crate::domain::rest::RestRequest;
use crate::domain::value_objects::Snowflake;
use crate::shared::error::DelegateError;
use crate::shared::image::ImageData;

pub trait CustomEmojiBuilderDelegate: Send {
    fn server(&self) -> &Server;
    fn set_audit_log_reason(&mut self, reason: String);
    fn set_name(&mut self, name: String);

    /// The emoji image (at most 256 KiB). Required.
    fn set_image(&mut self, image: ImageData);

    /// Restrict the emoji to members of these roles.
    fn add_role_to_whitelist(&mut self, role_id: Snowflake);

    /// `POST /guilds/{server}/emojis`
    fn create_request(&self) -> Result<RestRequest, DelegateError>;
}

pub trait CustomEmojiUpdaterDelegate: Send {
    fn emoji(&self) -> &KnownCustomEmoji;
    fn set_audit_log_reason(&mut self, reason: String);
    fn set_name(&mut self, name: String);
    fn add_role_to_whitelist(&mut self, role_id: Snowflake);
    fn remove_role_from_whitelist(&mut self, role_id: Snowflake);

    /// Make the emoji usable by everyone again.
    fn remove_all_roles_from_whitelist(&mut self);

    /// `PATCH /guilds/{server}/emojis/{emoji}`
    fn update_request(&self) -> Result<RestRequest, DelegateError>;
}
