//! Permission and role REST delegates.

use std::sync::Arc;

use serde::Serialize;
use validator::Validate;

use super::common::{with_changes, with_payload};
use crate::domain::delegates::{PermissionsBuilderDelegate, RoleBuilderDelegate, RoleUpdaterDelegate};
use crate::domain::entities::{Role, Server};
use crate::domain::rest::RestRequest;
use crate::domain::value_objects::{PermissionState, PermissionType, Permissions};
use crate::shared::error::DelegateError;

#[derive(Default)]
pub struct RestPermissionsBuilderDelegate {
    permissions: Permissions,
}

impl RestPermissionsBuilderDelegate {
    /// Start from a copy of existing permissions.
    pub fn from_permissions(permissions: Permissions) -> Self {
        Self { permissions }
    }
}

impl PermissionsBuilderDelegate for RestPermissionsBuilderDelegate {
    fn set_state(&mut self, permission: PermissionType, state: PermissionState) {
        self.permissions.set_state(permission, state);
    }

    fn state(&self, permission: PermissionType) -> PermissionState {
        self.permissions.state(permission)
    }

    fn build(&self) -> Permissions {
        self.permissions
    }
}

/// Role fields as sent on create and modify.
#[derive(Debug, Default, Serialize, Validate)]
struct RolePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    name: Option<String>,

    /// Roles only carry allowed bits, as a decimal string
    #[serde(skip_serializing_if = "Option::is_none")]
    permissions: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 0xFFFFFF, message = "must be an RGB value"))]
    color: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    hoist: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    mentionable: Option<bool>,
}

impl RolePayload {
    fn set_permissions(&mut self, permissions: Permissions) {
        self.permissions = Some(permissions.allowed_bits().to_string());
    }
}

pub struct RestRoleBuilderDelegate {
    server: Arc<Server>,
    payload: RolePayload,
    reason: Option<String>,
}

impl RestRoleBuilderDelegate {
    pub fn new(server: Arc<Server>) -> Self {
        Self {
            server,
            payload: RolePayload::default(),
            reason: None,
        }
    }
}

impl RoleBuilderDelegate for RestRoleBuilderDelegate {
    fn server(&self) -> &Server {
        &self.server
    }

    fn set_name(&mut self, name: String) {
        self.payload.name = Some(name);
    }

    fn set_permissions(&mut self, permissions: Permissions) {
        self.payload.set_permissions(permissions);
    }

    fn set_color(&mut self, color: u32) {
        self.payload.color = Some(color);
    }

    fn set_display_separately(&mut self, hoist: bool) {
        self.payload.hoist = Some(hoist);
    }

    fn set_mentionable(&mut self, mentionable: bool) {
        self.payload.mentionable = Some(mentionable);
    }

    fn set_audit_log_reason(&mut self, reason: String) {
        self.reason = Some(reason);
    }

    fn create_request(&self) -> Result<RestRequest, DelegateError> {
        let request = RestRequest::post(format!("/guilds/{}/roles", self.server.id))
            .with_reason(self.reason.clone());
        with_payload(request, &self.payload)
    }
}

pub struct RestRoleUpdaterDelegate {
    role: Arc<Role>,
    payload: RolePayload,
    reason: Option<String>,
}

impl RestRoleUpdaterDelegate {
    pub fn new(role: Arc<Role>) -> Self {
        Self {
            role,
            payload: RolePayload::default(),
            reason: None,
        }
    }
}

impl RoleUpdaterDelegate for RestRoleUpdaterDelegate {
    fn role(&self) -> &Role {
        &self.role
    }

    fn set_name(&mut self, name: String) {
        self.payload.name = Some(name);
    }

    fn set_permissions(&mut self, permissions: Permissions) {
        self.payload.set_permissions(permissions);
    }

    fn set_color(&mut self, color: u32) {
        self.payload.color = Some(color);
    }

    fn set_display_separately(&mut self, hoist: bool) {
        self.payload.hoist = Some(hoist);
    }

    fn set_mentionable(&mut self, mentionable: bool) {
        self.payload.mentionable = Some(mentionable);
    }

    fn set_audit_log_reason(&mut self, reason: String) {
        self.reason = Some(reason);
    }

    fn update_request(&self) -> Result<RestRequest, DelegateError> {
        let request = RestRequest::patch(format!(
            "/guilds/{}/roles/{}",
            self.role.server_id, self.role.id
        ))
        .with_reason(self.reason.clone());
        with_changes(request, &self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Snowflake;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_builder_from_copies_permissions() {
        let source = Permissions::new(PermissionType::SendMessages.bit(), 0);
        let mut builder = RestPermissionsBuilderDelegate::from_permissions(source);
        builder.set_state(PermissionType::SendMessages, PermissionState::Denied);

        assert_eq!(source.state(PermissionType::SendMessages), PermissionState::Allowed);
        assert_eq!(
            builder.build().state(PermissionType::SendMessages),
            PermissionState::Denied
        );
    }

    #[test]
    fn test_role_create_request() {
        let server = Arc::new(Server {
            id: Snowflake::new(100),
            ..Default::default()
        });
        let mut builder = RestRoleBuilderDelegate::new(server);
        builder.set_name("Moderator".into());
        builder.set_permissions(Permissions::allowing(&[PermissionType::KickMembers]));
        builder.set_mentionable(true);
        builder.set_audit_log_reason("new staff".into());

        let request = builder.create_request().unwrap();
        assert_eq!(request.route, "/guilds/100/roles");
        assert_eq!(request.audit_log_reason.as_deref(), Some("new staff"));
        assert_eq!(
            request.body,
            Some(json!({ "name": "Moderator", "permissions": "2", "mentionable": true }))
        );
    }

    #[test]
    fn test_role_color_must_be_rgb() {
        let mut builder = RestRoleBuilderDelegate::new(Arc::new(Server::default()));
        builder.set_color(0x1000000);
        assert!(matches!(
            builder.create_request(),
            Err(DelegateError::Validation(_))
        ));
    }

    #[test]
    fn test_role_update_route() {
        let role = Arc::new(Role {
            id: Snowflake::new(5),
            server_id: Snowflake::new(100),
            ..Default::default()
        });
        let mut updater = RestRoleUpdaterDelegate::new(role);
        assert!(matches!(
            updater.update_request(),
            Err(DelegateError::NothingToUpdate)
        ));

        updater.set_display_separately(true);
        let request = updater.update_request().unwrap();
        assert_eq!(request.route, "/guilds/100/roles/5");
        assert_eq!(request.body, Some(json!({ "hoist": true })));
    }
}
