//! Session builder and account updater.

use crate::application::context::ApiContext;
use crate::domain::delegates::{
    AccountUpdaterDelegate, ApiBuilderDelegate, DelegateFactory, DelegateFactoryExt,
};
use crate::domain::entities::SessionConfig;
use crate::domain::rest::RestResponse;
use crate::shared::error::{ClientError, DelegateError};
use crate::shared::image::ImageData;

/// Collects the parameters of a new session.
///
/// Runs before any context exists, so it takes the factory directly.
pub struct ApiBuilder {
    delegate: Box<dyn ApiBuilderDelegate>,
}

impl ApiBuilder {
    pub fn new(factory: &dyn DelegateFactory) -> Result<Self, DelegateError> {
        Ok(Self {
            delegate: factory.create_api_builder_delegate()?,
        })
    }

    forward! {
        token(token: impl Into<String>) => set_token(token.into());
        intents(intents: u64) => set_intents(intents);
        add_intents(intents: u64) => add_intents(intents);
        total_shards(total: u32) => set_total_shards(total);
        current_shard(shard: u32) => set_current_shard(shard);
        wait_for_servers_on_startup(wait: bool) => set_wait_for_servers_on_startup(wait);
    }

    pub fn build(self) -> Result<SessionConfig, DelegateError> {
        self.delegate.build()
    }
}

/// Modifies the logged-in account.
pub struct AccountUpdater<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn AccountUpdaterDelegate>,
}

impl<'a> AccountUpdater<'a> {
    pub fn new(ctx: &'a ApiContext) -> Result<Self, DelegateError> {
        let delegate = ctx
            .factory()
            .create_account_updater_delegate(ctx.session().clone())?;
        Ok(Self { ctx, delegate })
    }

    forward! {
        username(username: impl Into<String>) => set_username(username.into());
        avatar(avatar: ImageData) => set_avatar(avatar);
        remove_avatar() => remove_avatar();
    }

    pub async fn update(self) -> Result<RestResponse, ClientError> {
        let request = self.delegate.update_request()?;
        self.ctx.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::context::testing::context;
    use crate::domain::rest::{MockTransport, RestMethod};
    use crate::infrastructure::delegates::RestDelegateFactory;
    use serde_json::json;

    #[test]
    fn test_api_builder_chain() {
        let config = ApiBuilder::new(&RestDelegateFactory::new())
            .unwrap()
            .token("  abc  ")
            .total_shards(2)
            .current_shard(1)
            .build()
            .unwrap();
        assert_eq!(config.token, "abc");
        assert_eq!(config.current_shard, 1);
    }

    #[tokio::test]
    async fn test_account_update_executes_patch() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|r| r.method == RestMethod::Patch && r.route == "/users/@me")
            .times(1)
            .returning(|_| Ok(RestResponse::new(200, json!({}))));

        let ctx = context(transport);
        AccountUpdater::new(&ctx)
            .unwrap()
            .username("new-name")
            .update()
            .await
            .unwrap();
    }
}
