//! Session-level delegates.

use crate::domain::entities::{ApiSession, SessionConfig};
use crate::domain::rest::RestRequest;
use crate::shared::error::DelegateError;
use crate::shared::image::ImageData;

/// Collects the connection parameters of a new session.
pub trait ApiBuilderDelegate: Send {
    fn set_token(&mut self, token: String);

    /// Replace the intents bitfield.
    fn set_intents(&mut self, intents: u64);

    /// Add intents to the current bitfield.
    fn add_intents(&mut self, intents: u64);

    fn set_total_shards(&mut self, total_shards: u32);

    fn set_current_shard(&mut self, current_shard: u32);

    fn set_wait_for_servers_on_startup(&mut self, wait: bool);

    /// Produce the session config. Fails without a token or with a shard id
    /// outside the shard count.
    fn build(&self) -> Result<SessionConfig, DelegateError>;
}

/// Modifies the account a session is logged in as.
pub trait AccountUpdaterDelegate: Send {
    fn session(&self) -> &ApiSession;

    fn set_username(&mut self, username: String);

    fn set_avatar(&mut self, avatar: ImageData);

    fn remove_avatar(&mut self);

    /// `PATCH /users/@me`
    fn update_request(&self) -> Result<RestRequest, DelegateError>;
}
