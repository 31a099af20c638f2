//! Permissions and roles.

use std::sync::Arc;

use crate::application::context::ApiContext;
use crate::domain::delegates::{
    DelegateFactoryExt, PermissionsBuilderDelegate, RoleBuilderDelegate, RoleUpdaterDelegate,
};
use crate::domain::entities::{Role, Server};
use crate::domain::rest::RestResponse;
use crate::domain::value_objects::{PermissionState, PermissionType, Permissions};
use crate::shared::error::{ClientError, DelegateError};

pub struct PermissionsBuilder {
    delegate: Box<dyn PermissionsBuilderDelegate>,
}

impl PermissionsBuilder {
    /// Start with every permission unset.
    pub fn new(ctx: &ApiContext) -> Result<Self, DelegateError> {
        Ok(Self {
            delegate: ctx.factory().create_permissions_builder_delegate()?,
        })
    }

    /// Start from a copy of existing permissions.
    pub fn from_permissions(ctx: &ApiContext, permissions: Permissions) -> Result<Self, DelegateError> {
        Ok(Self {
            delegate: ctx
                .factory()
                .create_permissions_builder_delegate_from(permissions)?,
        })
    }

    forward! {
        state(permission: PermissionType, state: PermissionState) => set_state(permission, state);
    }

    pub fn allow(self, permissions: &[PermissionType]) -> Self {
        permissions
            .iter()
            .fold(self, |builder, p| builder.state(*p, PermissionState::Allowed))
    }

    pub fn deny(self, permissions: &[PermissionType]) -> Self {
        permissions
            .iter()
            .fold(self, |builder, p| builder.state(*p, PermissionState::Denied))
    }

    pub fn get_state(&self, permission: PermissionType) -> PermissionState {
        self.delegate.state(permission)
    }

    pub fn build(self) -> Permissions {
        self.delegate.build()
    }
}

pub struct RoleBuilder<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn RoleBuilderDelegate>,
}

impl<'a> RoleBuilder<'a> {
    pub fn new(ctx: &'a ApiContext, server: Arc<Server>) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_role_builder_delegate(server)?,
        })
    }

    forward! {
        name(name: impl Into<String>) => set_name(name.into());
        permissions(permissions: Permissions) => set_permissions(permissions);
        color(color: u32) => set_color(color);
        display_separately(hoist: bool) => set_display_separately(hoist);
        mentionable(mentionable: bool) => set_mentionable(mentionable);
        audit_log_reason(reason: impl Into<String>) => set_audit_log_reason(reason.into());
    }

    pub async fn create(self) -> Result<RestResponse, ClientError> {
        let request = self.delegate.create_request()?;
        tracing::debug!(server_id = %self.delegate.server().id, "Creating role");
        self.ctx.execute(request).await
    }
}

pub struct RoleUpdater<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn RoleUpdaterDelegate>,
}

impl<'a> RoleUpdater<'a> {
    pub fn new(ctx: &'a ApiContext, role: Arc<Role>) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_role_updater_delegate(role)?,
        })
    }

    forward! {
        name(name: impl Into<String>) => set_name(name.into());
        permissions(permissions: Permissions) => set_permissions(permissions);
        color(color: u32) => set_color(color);
        display_separately(hoist: bool) => set_display_separately(hoist);
        mentionable(mentionable: bool) => set_mentionable(mentionable);
        audit_log_reason(reason: impl Into<String>) => set_audit_log_reason(reason.into());
    }

    pub async fn update(self) -> Result<RestResponse, ClientError> {
        let request = self.delegate.update_request()?;
        tracing::debug!(role_id = %self.delegate.role().id, "Updating role");
        self.ctx.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::context::testing::context;
    use crate::domain::rest::MockTransport;
    use crate::domain::value_objects::Snowflake;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_permissions_builder_from_existing() {
        let ctx = context(MockTransport::new());
        let source = Permissions::allowing(&[PermissionType::SendMessages]);

        let permissions = PermissionsBuilder::from_permissions(&ctx, source)
            .unwrap()
            .deny(&[PermissionType::SendMessages])
            .allow(&[PermissionType::AddReactions])
            .build();

        assert_eq!(
            permissions.state(PermissionType::SendMessages),
            PermissionState::Denied
        );
        assert_eq!(
            permissions.state(PermissionType::AddReactions),
            PermissionState::Allowed
        );
        assert_eq!(
            source.state(PermissionType::SendMessages),
            PermissionState::Allowed
        );
    }

    #[tokio::test]
    async fn test_role_create_through_transport() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|r| {
                r.route == "/guilds/100/roles"
                    && r.audit_log_reason.as_deref() == Some("setup")
                    && r.body == Some(json!({ "name": "Mods" }))
            })
            .times(1)
            .returning(|_| Ok(RestResponse::new(200, json!({ "id": "7" }))));

        let ctx = context(transport);
        let server = Arc::new(Server {
            id: Snowflake::new(100),
            ..Default::default()
        });
        let response = RoleBuilder::new(&ctx, server)
            .unwrap()
            .name("Mods")
            .audit_log_reason("setup")
            .create()
            .await
            .unwrap();
        assert_eq!(response.body["id"], "7");
    }

    #[tokio::test]
    async fn test_role_update_maps_forbidden() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .returning(|_| Ok(RestResponse::new(403, json!({ "code": 50013 }))));

        let ctx = context(transport);
        let role = Arc::new(Role {
            id: Snowflake::new(7),
            server_id: Snowflake::new(100),
            ..Default::default()
        });
        let err = RoleUpdater::new(&ctx, role)
            .unwrap()
            .color(0xFF0000)
            .update()
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::MissingPermissions(_)));
    }
}
