//! Application command delegates.

use crate::domain::entities::ChannelType;
use crate::domain::rest::RestRequest;
use crate::domain::value_objects::{
    ApplicationCommandType, ChoiceValue, PermissionType, SlashCommandOption,
    SlashCommandOptionChoice, SlashCommandOptionType, Snowflake,
};
use crate::shared::error::DelegateError;

/// Settings shared by slash commands and context menus.
pub trait ApplicationCommandBuilderDelegate: Send {
    fn command_type(&self) -> ApplicationCommandType;
    fn set_name(&mut self, name: String);
    fn add_name_localization(&mut self, locale: String, name: String);

    /// Members need all of these permissions to see the command.
    fn set_default_member_permissions(&mut self, permissions: &[PermissionType]);

    /// Hide the command from everyone but administrators.
    fn set_default_disabled(&mut self);
    fn set_enabled_in_dms(&mut self, enabled: bool);
    fn set_nsfw(&mut self, nsfw: bool);

    /// `POST /applications/{application}/commands`
    fn create_global_request(&self, application_id: Snowflake)
        -> Result<RestRequest, DelegateError>;

    /// `POST /applications/{application}/guilds/{server}/commands`
    fn create_server_request(
        &self,
        application_id: Snowflake,
        server_id: Snowflake,
    ) -> Result<RestRequest, DelegateError>;
}

pub trait SlashCommandBuilderDelegate: ApplicationCommandBuilderDelegate {
    fn set_description(&mut self, description: String);
    fn add_description_localization(&mut self, locale: String, description: String);
    fn add_option(&mut self, option: SlashCommandOption);
}

pub trait UserContextMenuBuilderDelegate: ApplicationCommandBuilderDelegate {}

pub trait MessageContextMenuBuilderDelegate: ApplicationCommandBuilderDelegate {}

/// Modifies an existing command, known only by its id.
pub trait ApplicationCommandUpdaterDelegate: Send {
    fn command_id(&self) -> Snowflake;
    fn set_name(&mut self, name: String);
    fn add_name_localization(&mut self, locale: String, name: String);
    fn set_default_member_permissions(&mut self, permissions: &[PermissionType]);
    fn set_default_disabled(&mut self);
    fn set_enabled_in_dms(&mut self, enabled: bool);

    /// `PATCH /applications/{application}/commands/{command}`
    fn update_global_request(&self, application_id: Snowflake)
        -> Result<RestRequest, DelegateError>;

    /// `PATCH /applications/{application}/guilds/{server}/commands/{command}`
    fn update_server_request(
        &self,
        application_id: Snowflake,
        server_id: Snowflake,
    ) -> Result<RestRequest, DelegateError>;
}

pub trait SlashCommandUpdaterDelegate: ApplicationCommandUpdaterDelegate {
    fn set_description(&mut self, description: String);
    fn add_description_localization(&mut self, locale: String, description: String);

    /// Replace all options of the command.
    fn set_options(&mut self, options: Vec<SlashCommandOption>);
}

pub trait UserContextMenuUpdaterDelegate: ApplicationCommandUpdaterDelegate {}

pub trait MessageContextMenuUpdaterDelegate: ApplicationCommandUpdaterDelegate {}

pub trait SlashCommandOptionBuilderDelegate: Send {
    fn set_type(&mut self, option_type: SlashCommandOptionType);
    fn set_name(&mut self, name: String);
    fn set_description(&mut self, description: String);
    fn set_required(&mut self, required: bool);
    fn add_choice(&mut self, choice: SlashCommandOptionChoice);
    fn add_option(&mut self, option: SlashCommandOption);
    fn add_channel_type(&mut self, channel_type: ChannelType);
    fn set_min_value(&mut self, min: f64);
    fn set_max_value(&mut self, max: f64);
    fn set_min_length(&mut self, min: u16);
    fn set_max_length(&mut self, max: u16);
    fn set_autocompletable(&mut self, autocomplete: bool);
    fn build(&self) -> Result<SlashCommandOption, DelegateError>;
}

pub trait SlashCommandOptionChoiceBuilderDelegate: Send {
    fn set_name(&mut self, name: String);
    fn set_value(&mut self, value: ChoiceValue);
    fn build(&self) -> Result<SlashCommandOptionChoice, DelegateError>;
}
