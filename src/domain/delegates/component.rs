//! Message component delegates. All of them produce plain values.

use crate::domain::entities::ChannelType;
use crate::domain::value_objects::{
    ActionRow, Button, ButtonStyle, Component, ComponentEmoji, ComponentType, SelectMenu,
    SelectMenuOption, TextInput, TextInputStyle,
};
use crate::shared::error::DelegateError;

pub trait ActionRowBuilderDelegate: Send {
    fn add_component(&mut self, component: Component);

    /// Remove every component with this custom id.
    fn remove_component(&mut self, custom_id: &str);
    fn build(&self) -> Result<ActionRow, DelegateError>;
}

pub trait ButtonBuilderDelegate: Send {
    fn set_style(&mut self, style: ButtonStyle);
    fn set_label(&mut self, label: String);
    fn set_custom_id(&mut self, custom_id: String);
    fn set_url(&mut self, url: String);
    fn set_emoji(&mut self, emoji: ComponentEmoji);
    fn set_disabled(&mut self, disabled: bool);

    /// Link buttons need a url and no custom id; all other styles the
    /// reverse.
    fn build(&self) -> Result<Button, DelegateError>;
}

pub trait TextInputBuilderDelegate: Send {
    fn set_style(&mut self, style: TextInputStyle);
    fn set_custom_id(&mut self, custom_id: String);
    fn set_label(&mut self, label: String);
    fn set_minimum_length(&mut self, min: u16);
    fn set_maximum_length(&mut self, max: u16);
    fn set_required(&mut self, required: bool);
    fn set_value(&mut self, value: String);
    fn set_placeholder(&mut self, placeholder: String);
    fn build(&self) -> Result<TextInput, DelegateError>;
}

pub trait SelectMenuBuilderDelegate: Send {
    /// One of the select component types.
    fn set_component_type(&mut self, component_type: ComponentType);
    fn set_custom_id(&mut self, custom_id: String);
    fn add_option(&mut self, option: SelectMenuOption);
    fn add_channel_type(&mut self, channel_type: ChannelType);
    fn set_placeholder(&mut self, placeholder: String);
    fn set_minimum_values(&mut self, min: u8);
    fn set_maximum_values(&mut self, max: u8);
    fn set_disabled(&mut self, disabled: bool);
    fn build(&self) -> Result<SelectMenu, DelegateError>;
}

pub trait SelectMenuOptionBuilderDelegate: Send {
    fn set_label(&mut self, label: String);
    fn set_value(&mut self, value: String);
    fn set_description(&mut self, description: String);
    fn set_emoji(&mut self, emoji: ComponentEmoji);
    fn set_default(&mut self, is_default: bool);
    fn build(&self) -> Result<SelectMenuOption, DelegateError>;
}
