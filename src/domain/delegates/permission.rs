//! Permission and role delegates.

use crate::domain::entities::{Role, Server};
use crate::domain::rest::RestRequest;
use crate::domain::value_objects::{PermissionState, PermissionType, Permissions};
use crate::shared::error::DelegateError;

/// Tri-state editor over a [`Permissions`] value.
pub trait PermissionsBuilderDelegate: Send {
    fn set_state(&mut self, permission: PermissionType, state: PermissionState);
    fn state(&self, permission: PermissionType) -> PermissionState;
    fn build(&self) -> Permissions;
}

pub trait RoleBuilderDelegate: Send {
    fn server(&self) -> &Server;
    fn set_name(&mut self, name: String);
    fn set_permissions(&mut self, permissions: Permissions);
    fn set_color(&mut self, color: u32);
    fn set_display_separately(&mut self, hoist: bool);
    fn set_mentionable(&mut self, mentionable: bool);
    fn set_audit_log_reason(&mut self, reason: String);

    /// `POST /guilds/{server}/roles`
    fn create_request(&self) -> Result<RestRequest, DelegateError>;
}

pub trait RoleUpdaterDelegate: Send {
    fn role(&self) -> &Role;
    fn set_name(&mut self, name: String);
    fn set_permissions(&mut self, permissions: Permissions);
    fn set_color(&mut self, color: u32);
    fn set_display_separately(&mut self, hoist: bool);
    fn set_mentionable(&mut self, mentionable: bool);
    fn set_audit_log_reason(&mut self, reason: String);

    /// `PATCH /guilds/{server}/roles/{role}`
    fn update_request(&self) -> Result<RestRequest, DelegateError>;
}
