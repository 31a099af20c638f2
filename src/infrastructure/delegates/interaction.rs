//! Application command REST delegates.
//!
//! Slash commands and both context menu kinds share one payload. The
//! builder and updater are generic over a marker for the command kind, so
//! description and option setters only exist on slash commands.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use serde::Serialize;
use validator::Validate;

use super::common::{require, with_changes, with_payload};
use crate::domain::delegates::{
    ApplicationCommandBuilderDelegate, ApplicationCommandUpdaterDelegate,
    MessageContextMenuBuilderDelegate, MessageContextMenuUpdaterDelegate,
    SlashCommandBuilderDelegate, SlashCommandOptionBuilderDelegate,
    SlashCommandOptionChoiceBuilderDelegate, SlashCommandUpdaterDelegate,
    UserContextMenuBuilderDelegate, UserContextMenuUpdaterDelegate,
};
use crate::domain::entities::ChannelType;
use crate::domain::rest::RestRequest;
use crate::domain::value_objects::{
    validate_command_name, ApplicationCommandType, ChoiceValue, PermissionType, Permissions,
    SlashCommandOption, SlashCommandOptionChoice, SlashCommandOptionType, Snowflake,
};
use crate::shared::error::DelegateError;
use crate::shared::validation::validated;

/// Command kind handled by a builder or updater.
pub trait CommandKind: Send + 'static {
    const TYPE: ApplicationCommandType;
}

pub enum Slash {}
pub enum UserMenu {}
pub enum MessageMenu {}

impl CommandKind for Slash {
    const TYPE: ApplicationCommandType = ApplicationCommandType::ChatInput;
}

impl CommandKind for UserMenu {
    const TYPE: ApplicationCommandType = ApplicationCommandType::User;
}

impl CommandKind for MessageMenu {
    const TYPE: ApplicationCommandType = ApplicationCommandType::Message;
}

/// Slash command names follow the strict naming rules; context menu names
/// are free text of 1-32 characters.
fn check_name(command_type: ApplicationCommandType, field: &str, name: &str) -> Result<(), DelegateError> {
    let result = match command_type {
        ApplicationCommandType::ChatInput => validate_command_name(name).map_err(|e| {
            e.message
                .map(|m| m.to_string())
                .unwrap_or_else(|| "invalid command name".into())
        }),
        _ if (1..=32).contains(&name.chars().count()) => Ok(()),
        _ => Err("must be 1-32 characters".to_string()),
    };
    result.map_err(|message| DelegateError::Validation(format!("{}: {}", field, message)))
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
struct CommandPayload {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    command_type: Option<ApplicationCommandType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    name_localizations: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description_localizations: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 25, message = "must contain at most 25 options"), nested)]
    options: Option<Vec<SlashCommandOption>>,

    /// Permission bitfield as a string; `"0"` hides the command from non-admins
    #[serde(skip_serializing_if = "Option::is_none")]
    default_member_permissions: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    dm_permission: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    nsfw: Option<bool>,
}

impl CommandPayload {
    fn add_name_localization(&mut self, locale: String, name: String) {
        self.name_localizations
            .get_or_insert_with(BTreeMap::new)
            .insert(locale, name);
    }

    fn add_description_localization(&mut self, locale: String, description: String) {
        self.description_localizations
            .get_or_insert_with(BTreeMap::new)
            .insert(locale, description);
    }

    fn set_default_member_permissions(&mut self, permissions: &[PermissionType]) {
        let bits = Permissions::allowing(permissions).allowed_bits();
        self.default_member_permissions = Some(bits.to_string());
    }

    fn check(&self, command_type: ApplicationCommandType) -> Result<(), DelegateError> {
        if let Some(name) = &self.name {
            check_name(command_type, "name", name)?;
        }
        for name in self.name_localizations.iter().flat_map(BTreeMap::values) {
            check_name(command_type, "name_localizations", name)?;
        }
        for description in self.description_localizations.iter().flat_map(BTreeMap::values) {
            if !(1..=100).contains(&description.chars().count()) {
                return Err(DelegateError::Validation(
                    "description_localizations: must be 1-100 characters".into(),
                ));
            }
        }
        if let Some(options) = &self.options {
            let required_after_optional = options
                .windows(2)
                .any(|pair| !pair[0].required && pair[1].required);
            if required_after_optional {
                return Err(DelegateError::Validation(
                    "options: required options must come before optional ones".into(),
                ));
            }
        }
        Ok(())
    }
}

fn commands_route(application_id: Snowflake, server_id: Option<Snowflake>) -> String {
    match server_id {
        Some(server_id) => format!(
            "/applications/{}/guilds/{}/commands",
            application_id, server_id
        ),
        None => format!("/applications/{}/commands", application_id),
    }
}

// =============================================================================
// Builders
// =============================================================================

pub struct RestApplicationCommandBuilderDelegate<K> {
    payload: CommandPayload,
    kind: PhantomData<K>,
}

pub type RestSlashCommandBuilderDelegate = RestApplicationCommandBuilderDelegate<Slash>;
pub type RestUserContextMenuBuilderDelegate = RestApplicationCommandBuilderDelegate<UserMenu>;
pub type RestMessageContextMenuBuilderDelegate = RestApplicationCommandBuilderDelegate<MessageMenu>;

impl<K: CommandKind> RestApplicationCommandBuilderDelegate<K> {
    pub fn new() -> Self {
        Self {
            payload: CommandPayload {
                command_type: Some(K::TYPE),
                ..Default::default()
            },
            kind: PhantomData,
        }
    }

    fn render(&self, route: String) -> Result<RestRequest, DelegateError> {
        require(&self.payload.name, "name")?;
        if K::TYPE == ApplicationCommandType::ChatInput {
            require(&self.payload.description, "description")?;
        }
        self.payload.check(K::TYPE)?;
        with_payload(RestRequest::post(route), &self.payload)
    }
}

impl<K: CommandKind> Default for RestApplicationCommandBuilderDelegate<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: CommandKind> ApplicationCommandBuilderDelegate for RestApplicationCommandBuilderDelegate<K> {
    fn command_type(&self) -> ApplicationCommandType {
        K::TYPE
    }

    fn set_name(&mut self, name: String) {
        self.payload.name = Some(name);
    }

    fn add_name_localization(&mut self, locale: String, name: String) {
        self.payload.add_name_localization(locale, name);
    }

    fn set_default_member_permissions(&mut self, permissions: &[PermissionType]) {
        self.payload.set_default_member_permissions(permissions);
    }

    fn set_default_disabled(&mut self) {
        self.payload.default_member_permissions = Some("0".into());
    }

    fn set_enabled_in_dms(&mut self, enabled: bool) {
        self.payload.dm_permission = Some(enabled);
    }

    fn set_nsfw(&mut self, nsfw: bool) {
        self.payload.nsfw = Some(nsfw);
    }

    fn create_global_request(&self, application_id: Snowflake) -> Result<RestRequest, DelegateError> {
        self.render(commands_route(application_id, None))
    }

    fn create_server_request(
        &self,
        application_id: Snowflake,
        server_id: Snowflake,
    ) -> Result<RestRequest, DelegateError> {
        self.render(commands_route(application_id, Some(server_id)))
    }
}

impl SlashCommandBuilderDelegate for RestApplicationCommandBuilderDelegate<Slash> {
    fn set_description(&mut self, description: String) {
        self.payload.description = Some(description);
    }

    fn add_description_localization(&mut self, locale: String, description: String) {
        self.payload.add_description_localization(locale, description);
    }

    fn add_option(&mut self, option: SlashCommandOption) {
        self.payload.options.get_or_insert_with(Vec::new).push(option);
    }
}

impl UserContextMenuBuilderDelegate for RestApplicationCommandBuilderDelegate<UserMenu> {}

impl MessageContextMenuBuilderDelegate for RestApplicationCommandBuilderDelegate<MessageMenu> {}

// =============================================================================
// Updaters
// =============================================================================

pub struct RestApplicationCommandUpdaterDelegate<K> {
    command_id: Snowflake,
    patch: CommandPayload,
    kind: PhantomData<K>,
}

pub type RestSlashCommandUpdaterDelegate = RestApplicationCommandUpdaterDelegate<Slash>;
pub type RestUserContextMenuUpdaterDelegate = RestApplicationCommandUpdaterDelegate<UserMenu>;
pub type RestMessageContextMenuUpdaterDelegate = RestApplicationCommandUpdaterDelegate<MessageMenu>;

impl<K: CommandKind> RestApplicationCommandUpdaterDelegate<K> {
    pub fn new(command_id: Snowflake) -> Self {
        Self {
            command_id,
            patch: CommandPayload::default(),
            kind: PhantomData,
        }
    }

    fn render(&self, route: String) -> Result<RestRequest, DelegateError> {
        self.patch.check(K::TYPE)?;
        let route = format!("{}/{}", route, self.command_id);
        with_changes(RestRequest::patch(route), &self.patch)
    }
}

impl<K: CommandKind> ApplicationCommandUpdaterDelegate for RestApplicationCommandUpdaterDelegate<K> {
    fn command_id(&self) -> Snowflake {
        self.command_id
    }

    fn set_name(&mut self, name: String) {
        self.patch.name = Some(name);
    }

    fn add_name_localization(&mut self, locale: String, name: String) {
        self.patch.add_name_localization(locale, name);
    }

    fn set_default_member_permissions(&mut self, permissions: &[PermissionType]) {
        self.patch.set_default_member_permissions(permissions);
    }

    fn set_default_disabled(&mut self) {
        self.patch.default_member_permissions = Some("0".into());
    }

    fn set_enabled_in_dms(&mut self, enabled: bool) {
        self.patch.dm_permission = Some(enabled);
    }

    fn update_global_request(&self, application_id: Snowflake) -> Result<RestRequest, DelegateError> {
        self.render(commands_route(application_id, None))
    }

    fn update_server_request(
        &self,
        application_id: Snowflake,
        server_id: Snowflake,
    ) -> Result<RestRequest, DelegateError> {
        self.render(commands_route(application_id, Some(server_id)))
    }
}

impl SlashCommandUpdaterDelegate for RestApplicationCommandUpdaterDelegate<Slash> {
    fn set_description(&mut self, description: String) {
        self.patch.description = Some(description);
    }

    fn add_description_localization(&mut self, locale: String, description: String) {
        self.patch.add_description_localization(locale, description);
    }

    fn set_options(&mut self, options: Vec<SlashCommandOption>) {
        self.patch.options = Some(options);
    }
}

impl UserContextMenuUpdaterDelegate for RestApplicationCommandUpdaterDelegate<UserMenu> {}

impl MessageContextMenuUpdaterDelegate for RestApplicationCommandUpdaterDelegate<MessageMenu> {}

// =============================================================================
// Options and choices
// =============================================================================

#[derive(Debug, Default)]
pub struct RestSlashCommandOptionBuilderDelegate {
    option_type: SlashCommandOptionType,
    name: Option<String>,
    description: Option<String>,
    required: bool,
    choices: Vec<SlashCommandOptionChoice>,
    options: Vec<SlashCommandOption>,
    channel_types: Vec<ChannelType>,
    min_value: Option<f64>,
    max_value: Option<f64>,
    min_length: Option<u16>,
    max_length: Option<u16>,
    autocomplete: bool,
}

impl RestSlashCommandOptionBuilderDelegate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlashCommandOptionBuilderDelegate for RestSlashCommandOptionBuilderDelegate {
    fn set_type(&mut self, option_type: SlashCommandOptionType) {
        self.option_type = option_type;
    }

    fn set_name(&mut self, name: String) {
        self.name = Some(name);
    }

    fn set_description(&mut self, description: String) {
        self.description = Some(description);
    }

    fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    fn add_choice(&mut self, choice: SlashCommandOptionChoice) {
        self.choices.push(choice);
    }

    fn add_option(&mut self, option: SlashCommandOption) {
        self.options.push(option);
    }

    fn add_channel_type(&mut self, channel_type: ChannelType) {
        if !self.channel_types.contains(&channel_type) {
            self.channel_types.push(channel_type);
        }
    }

    fn set_min_value(&mut self, min: f64) {
        self.min_value = Some(min);
    }

    fn set_max_value(&mut self, max: f64) {
        self.max_value = Some(max);
    }

    fn set_min_length(&mut self, min: u16) {
        self.min_length = Some(min);
    }

    fn set_max_length(&mut self, max: u16) {
        self.max_length = Some(max);
    }

    fn set_autocompletable(&mut self, autocomplete: bool) {
        self.autocomplete = autocomplete;
    }

    fn build(&self) -> Result<SlashCommandOption, DelegateError> {
        let name = require(&self.name, "name")?.clone();
        let description = require(&self.description, "description")?.clone();
        validated(SlashCommandOption {
            option_type: self.option_type,
            name,
            description,
            required: self.required,
            choices: self.choices.clone(),
            options: self.options.clone(),
            channel_types: self.channel_types.clone(),
            min_value: self.min_value,
            max_value: self.max_value,
            min_length: self.min_length,
            max_length: self.max_length,
            autocomplete: self.autocomplete,
        })
    }
}

#[derive(Debug, Default)]
pub struct RestSlashCommandOptionChoiceBuilderDelegate {
    name: Option<String>,
    value: Option<ChoiceValue>,
}

impl RestSlashCommandOptionChoiceBuilderDelegate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlashCommandOptionChoiceBuilderDelegate for RestSlashCommandOptionChoiceBuilderDelegate {
    fn set_name(&mut self, name: String) {
        self.name = Some(name);
    }

    fn set_value(&mut self, value: ChoiceValue) {
        self.value = Some(value);
    }

    fn build(&self) -> Result<SlashCommandOptionChoice, DelegateError> {
        let name = require(&self.name, "name")?.clone();
        let value = require(&self.value, "value")?.clone();
        validated(SlashCommandOptionChoice { name, value })
    }
}
