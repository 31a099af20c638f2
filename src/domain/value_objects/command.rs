//! Application command values: command types, slash command options and choices.

use serde::{Serialize, Serializer};
use validator::{Validate, ValidationError};

use crate::domain::entities::ChannelType;

/// Kind of application command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicationCommandType {
    /// Slash command
    ChatInput = 1,
    /// User context menu entry
    User = 2,
    /// Message context menu entry
    Message = 3,
}

impl Serialize for ApplicationCommandType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlashCommandOptionType {
    SubCommand = 1,
    SubCommandGroup = 2,
    #[default]
    String = 3,
    Long = 4,
    Boolean = 5,
    User = 6,
    Channel = 7,
    Role = 8,
    Mentionable = 9,
    Decimal = 10,
    Attachment = 11,
}

impl SlashCommandOptionType {
    /// Whether options of this type may offer predefined choices.
    pub fn supports_choices(self) -> bool {
        matches!(self, Self::String | Self::Long | Self::Decimal)
    }

    /// Whether options of this type nest further options.
    pub fn is_sub_command_or_group(self) -> bool {
        matches!(self, Self::SubCommand | Self::SubCommandGroup)
    }
}

impl Serialize for SlashCommandOptionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Value of a predefined option choice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    String(String),
    Long(i64),
    Decimal(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct SlashCommandOptionChoice {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: String,
    pub value: ChoiceValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[validate(schema(function = "validate_option_shape"))]
pub struct SlashCommandOption {
    #[serde(rename = "type")]
    pub option_type: SlashCommandOptionType,
    #[validate(custom(function = "validate_command_name"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub description: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[validate(length(max = 25, message = "must contain at most 25 choices"), nested)]
    pub choices: Vec<SlashCommandOptionChoice>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[validate(length(max = 25, message = "must contain at most 25 options"), nested)]
    pub options: Vec<SlashCommandOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub channel_types: Vec<ChannelType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 6000))]
    pub min_length: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 6000))]
    pub max_length: Option<u16>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub autocomplete: bool,
}

/// Command and option names: 1-32 lowercase letters, digits, `-` or `_`.
pub fn validate_command_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    let valid_chars = name
        .chars()
        .all(|c| (c.is_alphanumeric() && !c.is_uppercase()) || c == '-' || c == '_');
    if len == 0 || len > 32 || !valid_chars {
        let mut err = ValidationError::new("command_name");
        err.message =
            Some("must be 1-32 lowercase letters, digits, dashes or underscores".into());
        return Err(err);
    }
    Ok(())
}

fn validate_option_shape(option: &SlashCommandOption) -> Result<(), ValidationError> {
    let fail = |code: &'static str, message: &'static str| {
        let mut err = ValidationError::new(code);
        err.message = Some(message.into());
        Err(err)
    };

    if !option.choices.is_empty() && !option.option_type.supports_choices() {
        return fail("choices", "choices are only allowed on string, long and decimal options");
    }
    if !option.choices.is_empty() && option.autocomplete {
        return fail("autocomplete", "autocomplete cannot be combined with choices");
    }
    if !option.options.is_empty() && !option.option_type.is_sub_command_or_group() {
        return fail("options", "only sub commands and groups can nest options");
    }
    if let (Some(min), Some(max)) = (option.min_value, option.max_value) {
        if min > max {
            return fail("range", "min_value must not exceed max_value");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("ping" => true ; "simple")]
    #[test_case("set-prefix_2" => true ; "dashes underscores digits")]
    #[test_case("Ping" => false ; "uppercase")]
    #[test_case("" => false ; "empty")]
    #[test_case("with space" => false ; "whitespace")]
    #[test_case(&"a".repeat(33) => false ; "too long")]
    fn test_validate_command_name(name: &str) -> bool {
        validate_command_name(name).is_ok()
    }

    fn option(option_type: SlashCommandOptionType) -> SlashCommandOption {
        SlashCommandOption {
            option_type,
            name: "value".into(),
            description: "A value".into(),
            required: false,
            choices: Vec::new(),
            options: Vec::new(),
            channel_types: Vec::new(),
            min_value: None,
            max_value: None,
            min_length: None,
            max_length: None,
            autocomplete: false,
        }
    }

    #[test]
    fn test_choices_rejected_on_boolean_option() {
        let mut opt = option(SlashCommandOptionType::Boolean);
        opt.choices.push(SlashCommandOptionChoice {
            name: "yes".into(),
            value: ChoiceValue::Long(1),
        });
        assert!(opt.validate().is_err());
    }

    #[test]
    fn test_sub_command_may_nest_options() {
        let mut opt = option(SlashCommandOptionType::SubCommand);
        opt.options.push(option(SlashCommandOptionType::String));
        assert!(opt.validate().is_ok());
    }

    #[test]
    fn test_serialized_option_omits_defaults() {
        let json = serde_json::to_value(option(SlashCommandOptionType::Long)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": 4, "name": "value", "description": "A value" })
        );
    }
}
