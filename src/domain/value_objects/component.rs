//! Interactive message components.
//!
//! Components only travel from the client to the platform, so they are
//! serialize-only.

use serde::{Serialize, Serializer};
use validator::Validate;

use super::Snowflake;
use crate::domain::entities::ChannelType;

/// Component type discriminator, as sent in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    ActionRow = 1,
    Button = 2,
    StringSelect = 3,
    TextInput = 4,
    UserSelect = 5,
    RoleSelect = 6,
    MentionableSelect = 7,
    ChannelSelect = 8,
}

impl Serialize for ComponentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// A row of up to five components.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct ActionRow {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    #[validate(length(min = 1, max = 5, message = "must contain 1-5 components"))]
    pub components: Vec<Component>,
}

impl ActionRow {
    /// Create an action row from components.
    pub fn new(components: Vec<Component>) -> Self {
        Self {
            component_type: ComponentType::ActionRow,
            components,
        }
    }
}

/// A component that can be placed inside an action row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Component {
    Button(Button),
    TextInput(TextInput),
    SelectMenu(SelectMenu),
}

impl Component {
    /// The type discriminator of the wrapped component.
    pub fn component_type(&self) -> ComponentType {
        match self {
            Component::Button(b) => b.component_type,
            Component::TextInput(t) => t.component_type,
            Component::SelectMenu(s) => s.component_type,
        }
    }
}

impl From<Button> for Component {
    fn from(button: Button) -> Self {
        Component::Button(button)
    }
}

impl From<TextInput> for Component {
    fn from(input: TextInput) -> Self {
        Component::TextInput(input)
    }
}

impl From<SelectMenu> for Component {
    fn from(menu: SelectMenu) -> Self {
        Component::SelectMenu(menu)
    }
}

/// Emoji shown on a button or select option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentEmoji {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub animated: bool,
}

impl ComponentEmoji {
    /// A unicode emoji.
    pub fn unicode(emoji: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(emoji.into()),
            animated: false,
        }
    }

    /// A custom emoji.
    pub fn custom(id: Snowflake, name: impl Into<String>, animated: bool) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            animated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Primary = 1,
    Secondary = 2,
    Success = 3,
    Danger = 4,
    Link = 5,
}

impl Serialize for ButtonStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct Button {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub style: ButtonStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 80, message = "must be at most 80 characters"))]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub custom_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ComponentEmoji>,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextInputStyle {
    #[default]
    Short = 1,
    Paragraph = 2,
}

impl Serialize for TextInputStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct TextInput {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub custom_id: String,
    pub style: TextInputStyle,
    #[validate(length(min = 1, max = 45, message = "must be 1-45 characters"))]
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 4000))]
    pub min_length: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 4000))]
    pub max_length: Option<u16>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 4000, message = "must be at most 4000 characters"))]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct SelectMenu {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub custom_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[validate(length(max = 25, message = "must contain at most 25 options"), nested)]
    pub options: Vec<SelectMenuOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub channel_types: Vec<ChannelType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 150, message = "must be at most 150 characters"))]
    pub placeholder: Option<String>,
    #[validate(range(max = 25))]
    pub min_values: u8,
    #[validate(range(min = 1, max = 25))]
    pub max_values: u8,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct SelectMenuOption {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub label: String,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ComponentEmoji>,
    #[serde(rename = "default")]
    pub is_default: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_row_serializes_type_numbers() {
        let row = ActionRow::new(vec![Component::Button(Button {
            component_type: ComponentType::Button,
            style: ButtonStyle::Danger,
            label: Some("Delete".into()),
            custom_id: Some("delete".into()),
            url: None,
            emoji: None,
            disabled: false,
        })]);

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": 1,
                "components": [{
                    "type": 2,
                    "style": 4,
                    "label": "Delete",
                    "custom_id": "delete",
                    "disabled": false
                }]
            })
        );
    }

    #[test]
    fn test_unicode_emoji_omits_id() {
        let json = serde_json::to_value(ComponentEmoji::unicode("🔥")).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "🔥" }));
    }
}
