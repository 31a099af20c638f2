//! Common Test Utilities
//!
//! Shared fixtures, a mocked transport and test factories.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use chat_client::application::ApiContext;
use chat_client::domain::delegates::{Delegate, DelegateFactory, DelegateKind, DelegateRequest};
use chat_client::domain::entities::{
    intents, ApiSession, Channel, ChannelType, Message, Server, ServerTextChannel, SessionConfig,
};
use chat_client::domain::rest::{RestRequest, RestResponse, Transport};
use chat_client::domain::value_objects::Snowflake;
use chat_client::infrastructure::delegates::{RestDelegateFactory, RestEmbedBuilderDelegate};
use chat_client::shared::error::{ClientError, DelegateError};

pub const SERVER_ID: i64 = 100;
pub const APPLICATION_ID: i64 = 42;

mock! {
    pub Transport {}

    #[async_trait]
    impl Transport for Transport {
        async fn execute(&self, request: RestRequest) -> Result<RestResponse, ClientError>;
    }
}

pub fn session() -> Arc<ApiSession> {
    Arc::new(ApiSession::new(
        Snowflake::new(1),
        Snowflake::new(APPLICATION_ID),
        SessionConfig {
            token: "test-token".into(),
            intents: intents::DEFAULT,
            current_shard: 0,
            total_shards: 1,
            wait_for_servers_on_startup: true,
        },
    ))
}

/// A context over the REST factory.
pub fn context(transport: MockTransport) -> ApiContext {
    context_with(Arc::new(RestDelegateFactory::new()), transport)
}

pub fn context_with(factory: Arc<dyn DelegateFactory>, transport: MockTransport) -> ApiContext {
    ApiContext::new(factory, Arc::new(transport), session()).unwrap()
}

pub fn server() -> Arc<Server> {
    Arc::new(Server {
        id: Snowflake::new(SERVER_ID),
        name: "Test server".into(),
        ..Default::default()
    })
}

pub fn text_channel(id: i64) -> Arc<ServerTextChannel> {
    let channel = Channel {
        id: Snowflake::new(id),
        server_id: Some(Snowflake::new(SERVER_ID)),
        name: "general".into(),
        channel_type: ChannelType::Text,
        ..Default::default()
    };
    Arc::new(ServerTextChannel::try_from(channel).unwrap())
}

pub fn message(channel_id: i64, id: i64) -> Arc<Message> {
    Arc::new(Message {
        id: Snowflake::new(id),
        channel_id: Snowflake::new(channel_id),
        server_id: Some(Snowflake::new(SERVER_ID)),
        ..Default::default()
    })
}

/// Serves only the listed kinds and refuses everything else.
pub struct PartialFactory {
    inner: RestDelegateFactory,
    supported: HashSet<DelegateKind>,
}

impl PartialFactory {
    pub fn new(supported: &[DelegateKind]) -> Self {
        Self {
            inner: RestDelegateFactory::new(),
            supported: supported.iter().copied().collect(),
        }
    }

    /// Everything a context needs, plus `extra`.
    pub fn with_context_kinds(extra: &[DelegateKind]) -> Self {
        let mut kinds = vec![DelegateKind::ExceptionValidator, DelegateKind::ExceptionLogger];
        kinds.extend_from_slice(extra);
        Self::new(&kinds)
    }
}

impl DelegateFactory for PartialFactory {
    fn name(&self) -> &'static str {
        "partial"
    }

    fn create(&self, request: DelegateRequest) -> Result<Delegate, DelegateError> {
        if self.supported.contains(&request.kind()) {
            self.inner.create(request)
        } else {
            Err(DelegateError::UnsupportedKind(request.kind()))
        }
    }
}

/// Answers message builder requests with an embed builder.
pub struct WrongVariantFactory {
    inner: RestDelegateFactory,
}

impl WrongVariantFactory {
    pub fn new() -> Self {
        Self {
            inner: RestDelegateFactory::new(),
        }
    }
}

impl DelegateFactory for WrongVariantFactory {
    fn name(&self) -> &'static str {
        "wrong-variant"
    }

    fn create(&self, request: DelegateRequest) -> Result<Delegate, DelegateError> {
        match request {
            DelegateRequest::MessageBuilder => Ok(Delegate::EmbedBuilder(Box::new(
                RestEmbedBuilderDelegate::default(),
            ))),
            other => self.inner.create(other),
        }
    }
}
