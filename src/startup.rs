//! Application Startup
//!
//! Wires the delegate factory, transport and session into an [`ApiContext`].

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::facades::ApiBuilder;
use crate::application::ApiContext;
use crate::config::Settings;
use crate::domain::delegates::DelegateFactory;
use crate::domain::entities::ApiSession;
use crate::domain::value_objects::Snowflake;
use crate::infrastructure::delegates::RestDelegateFactory;
use crate::infrastructure::transport::LoggingTransport;

/// The factory used when nothing else is configured.
pub fn default_factory() -> Arc<dyn DelegateFactory> {
    Arc::new(RestDelegateFactory::new())
}

/// Build a context from settings.
///
/// The session is assembled through the factory's own API builder, so an
/// invalid token or shard setup fails here instead of on the first request.
pub fn build_context(settings: &Settings, factory: Arc<dyn DelegateFactory>) -> Result<ApiContext> {
    let config = ApiBuilder::new(factory.as_ref())
        .context("factory cannot build sessions")?
        .token(settings.api.token.clone())
        .intents(settings.api.intents)
        .build()
        .context("invalid session settings")?;

    let session = Arc::new(ApiSession::new(
        Snowflake::new(settings.api.session_user_id()),
        Snowflake::new(settings.api.application_id),
        config,
    ));

    let base_url = settings.api.base_url();
    let transport = Arc::new(LoggingTransport::new(base_url.clone()));
    let context = ApiContext::new(factory, transport, session)
        .context("factory cannot provide exception handling delegates")?;

    tracing::info!(
        base_url = %base_url,
        application_id = settings.api.application_id,
        environment = %settings.environment,
        "API context ready"
    );
    Ok(context)
}
