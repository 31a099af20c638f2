//! The API context facades are built against.
//!
//! Holds the active delegate factory and everything terminal operations
//! need: the transport, the session, and the exception validator and logger
//! obtained from the factory. There is no global instance; callers pass the
//! context explicitly.

use std::sync::Arc;

use crate::domain::delegates::{
    DelegateFactory, DelegateFactoryExt, ExceptionLoggerDelegate, ExceptionValidatorDelegate,
};
use crate::domain::entities::ApiSession;
use crate::domain::rest::{RestRequest, RestResponse, Transport};
use crate::shared::error::{ClientError, DelegateError};

pub struct ApiContext {
    factory: Arc<dyn DelegateFactory>,
    transport: Arc<dyn Transport>,
    session: Arc<ApiSession>,
    validator: Box<dyn ExceptionValidatorDelegate>,
    logger: Box<dyn ExceptionLoggerDelegate>,
}

impl ApiContext {
    /// Build a context. Fails if the factory cannot provide the exception
    /// validator or logger.
    pub fn new(
        factory: Arc<dyn DelegateFactory>,
        transport: Arc<dyn Transport>,
        session: Arc<ApiSession>,
    ) -> Result<Self, DelegateError> {
        let validator = factory.create_exception_validator_delegate()?;
        let logger = factory.create_exception_logger_delegate()?;

        tracing::debug!(factory = factory.name(), "API context created");

        Ok(Self {
            factory,
            transport,
            session,
            validator,
            logger,
        })
    }

    /// The active delegate factory.
    pub fn factory(&self) -> &dyn DelegateFactory {
        self.factory.as_ref()
    }

    pub fn session(&self) -> &Arc<ApiSession> {
        &self.session
    }

    /// Configure which errors get logged.
    pub fn exception_logger_mut(&mut self) -> &mut dyn ExceptionLoggerDelegate {
        self.logger.as_mut()
    }

    /// Execute a rendered request and turn error responses into errors.
    pub async fn execute(&self, request: RestRequest) -> Result<RestResponse, ClientError> {
        let summary = RestRequest::new(request.method, request.route.clone());

        tracing::debug!(method = %request.method, route = %request.route, "Executing request");
        let response = self.transport.execute(request).await?;

        self.validator.validate(&summary, &response)?;
        Ok(response)
    }

    /// Log a failed fire-and-forget result through the exception logger.
    pub fn log_failure<T>(&self, result: Result<T, ClientError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.logger.log(&error);
                None
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::domain::entities::{intents, SessionConfig};
    use crate::domain::rest::MockTransport;
    use crate::domain::value_objects::Snowflake;
    use crate::infrastructure::delegates::RestDelegateFactory;

    pub(crate) fn session() -> Arc<ApiSession> {
        Arc::new(ApiSession::new(
            Snowflake::new(1),
            Snowflake::new(42),
            SessionConfig {
                token: "token".into(),
                intents: intents::DEFAULT,
                current_shard: 0,
                total_shards: 1,
                wait_for_servers_on_startup: true,
            },
        ))
    }

    pub(crate) fn context(transport: MockTransport) -> ApiContext {
        ApiContext::new(
            Arc::new(RestDelegateFactory::new()),
            Arc::new(transport),
            session(),
        )
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::testing::context;
    use super::*;
    use crate::domain::rest::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_execute_passes_success_through() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|request| request.route == "/guilds")
            .times(1)
            .returning(|_| Ok(RestResponse::new(201, json!({ "id": "1" }))));

        let ctx = context(transport);
        let response = ctx.execute(RestRequest::post("/guilds")).await.unwrap();
        assert_eq!(response.status, 201);
    }

    #[tokio::test]
    async fn test_execute_maps_error_response() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .returning(|_| Ok(RestResponse::new(404, json!({ "message": "Unknown Guild" }))));

        let ctx = context(transport);
        let err = ctx.execute(RestRequest::post("/guilds")).await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound(_)));
    }

    #[test]
    fn test_log_failure_swallows_error() {
        let ctx = context(MockTransport::new());
        assert_eq!(ctx.log_failure::<u8>(Err(ClientError::ServerError(500))), None);
        assert_eq!(ctx.log_failure(Ok(3)), Some(3));
    }

    #[test]
    fn test_context_requires_validator_support() {
        use crate::domain::delegates::{Delegate, DelegateKind, DelegateRequest};

        struct Empty;

        impl DelegateFactory for Empty {
            fn name(&self) -> &'static str {
                "empty"
            }

            fn create(&self, request: DelegateRequest) -> Result<Delegate, DelegateError> {
                Err(DelegateError::UnsupportedKind(request.kind()))
            }
        }

        let result = ApiContext::new(
            Arc::new(Empty),
            Arc::new(MockTransport::new()),
            testing::session(),
        );
        assert!(matches!(
            result,
            Err(DelegateError::UnsupportedKind(DelegateKind::ExceptionValidator))
        ));
    }
}
