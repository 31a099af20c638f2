//! Helpers shared by the REST delegates.

use serde::Serialize;
use validator::Validate;

use crate::domain::rest::RestRequest;
use crate::domain::value_objects::{OverwriteTarget, PermissionOverwrite};
use crate::shared::error::DelegateError;
use crate::shared::validation::validation_error;

/// Validate a payload and attach it as the JSON body of `request`.
pub(crate) fn with_payload<T>(request: RestRequest, payload: &T) -> Result<RestRequest, DelegateError>
where
    T: Serialize + Validate,
{
    payload.validate().map_err(validation_error)?;
    request.with_json(payload)
}

/// Like [`with_payload`], but rejects a payload that would not change
/// anything.
pub(crate) fn with_changes<T>(request: RestRequest, payload: &T) -> Result<RestRequest, DelegateError>
where
    T: Serialize + Validate,
{
    let request = with_payload(request, payload)?;
    match &request.body {
        Some(serde_json::Value::Object(fields)) if !fields.is_empty() => Ok(request),
        _ => Err(DelegateError::NothingToUpdate),
    }
}

/// Take a required value out of an optional field.
pub(crate) fn require<'a, T>(value: &'a Option<T>, field: &'static str) -> Result<&'a T, DelegateError> {
    value.as_ref().ok_or(DelegateError::MissingField(field))
}

/// Insert an overwrite, replacing the one of the same target.
pub(crate) fn upsert_overwrite(overwrites: &mut Vec<PermissionOverwrite>, overwrite: PermissionOverwrite) {
    match overwrites.iter_mut().find(|o| o.target == overwrite.target) {
        Some(existing) => *existing = overwrite,
        None => overwrites.push(overwrite),
    }
}

pub(crate) fn remove_overwrite(overwrites: &mut Vec<PermissionOverwrite>, target: OverwriteTarget) {
    overwrites.retain(|o| o.target != target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Permissions, Snowflake};

    #[derive(Serialize, Validate, Default)]
    struct Patch {
        #[serde(skip_serializing_if = "Option::is_none")]
        #[validate(length(min = 1, max = 10, message = "must be 1-10 characters"))]
        name: Option<String>,
    }

    #[test]
    fn test_with_changes_rejects_empty_patch() {
        let err = with_changes(RestRequest::patch("/x"), &Patch::default()).unwrap_err();
        assert!(matches!(err, DelegateError::NothingToUpdate));
    }

    #[test]
    fn test_with_payload_validates() {
        let patch = Patch {
            name: Some(String::new()),
        };
        let err = with_payload(RestRequest::patch("/x"), &patch).unwrap_err();
        assert!(matches!(err, DelegateError::Validation(ref m) if m.starts_with("name")));
    }

    #[test]
    fn test_upsert_replaces_same_target() {
        let target = OverwriteTarget::Role(Snowflake::new(1));
        let mut list = vec![PermissionOverwrite {
            target,
            permissions: Permissions::new(1, 0),
        }];
        upsert_overwrite(
            &mut list,
            PermissionOverwrite {
                target,
                permissions: Permissions::new(0, 1),
            },
        );
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].permissions.denied_bits(), 1);

        remove_overwrite(&mut list, target);
        assert!(list.is_empty());
    }
}
