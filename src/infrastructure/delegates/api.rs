//! Session-level REST delegates.

use std::sync::Arc;

use serde::Serialize;
use validator::Validate;

use super::common::with_changes;
use crate::domain::delegates::{AccountUpdaterDelegate, ApiBuilderDelegate};
use crate::domain::entities::{intents, ApiSession, SessionConfig};
use crate::domain::rest::RestRequest;
use crate::shared::error::DelegateError;
use crate::shared::image::ImageData;

pub struct RestApiBuilderDelegate {
    token: Option<String>,
    intents: u64,
    total_shards: u32,
    current_shard: u32,
    wait_for_servers_on_startup: bool,
}

impl RestApiBuilderDelegate {
    pub fn new() -> Self {
        Self {
            token: None,
            intents: intents::DEFAULT,
            total_shards: 1,
            current_shard: 0,
            wait_for_servers_on_startup: true,
        }
    }
}

impl Default for RestApiBuilderDelegate {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiBuilderDelegate for RestApiBuilderDelegate {
    fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    fn set_intents(&mut self, intents: u64) {
        self.intents = intents;
    }

    fn add_intents(&mut self, intents: u64) {
        self.intents |= intents;
    }

    fn set_total_shards(&mut self, total_shards: u32) {
        self.total_shards = total_shards;
    }

    fn set_current_shard(&mut self, current_shard: u32) {
        self.current_shard = current_shard;
    }

    fn set_wait_for_servers_on_startup(&mut self, wait: bool) {
        self.wait_for_servers_on_startup = wait;
    }

    fn build(&self) -> Result<SessionConfig, DelegateError> {
        let token = self
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(DelegateError::MissingField("token"))?;

        if self.total_shards == 0 {
            return Err(DelegateError::Validation(
                "total_shards: must be at least 1".into(),
            ));
        }
        if self.current_shard >= self.total_shards {
            return Err(DelegateError::Validation(format!(
                "current_shard: must be lower than total_shards ({})",
                self.total_shards
            )));
        }

        Ok(SessionConfig {
            token: token.to_string(),
            intents: self.intents,
            current_shard: self.current_shard,
            total_shards: self.total_shards,
            wait_for_servers_on_startup: self.wait_for_servers_on_startup,
        })
    }
}

#[derive(Debug, Default, Serialize, Validate)]
struct AccountPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 32, message = "must be 2-32 characters"))]
    username: Option<String>,

    /// `Some(None)` removes the avatar
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar: Option<Option<ImageData>>,
}

pub struct RestAccountUpdaterDelegate {
    session: Arc<ApiSession>,
    patch: AccountPatch,
}

impl RestAccountUpdaterDelegate {
    pub fn new(session: Arc<ApiSession>) -> Self {
        Self {
            session,
            patch: AccountPatch::default(),
        }
    }
}

impl AccountUpdaterDelegate for RestAccountUpdaterDelegate {
    fn session(&self) -> &ApiSession {
        &self.session
    }

    fn set_username(&mut self, username: String) {
        self.patch.username = Some(username);
    }

    fn set_avatar(&mut self, avatar: ImageData) {
        self.patch.avatar = Some(Some(avatar));
    }

    fn remove_avatar(&mut self) {
        self.patch.avatar = Some(None);
    }

    fn update_request(&self) -> Result<RestRequest, DelegateError> {
        with_changes(RestRequest::patch("/users/@me"), &self.patch)
    }
}
