//! Message component builders. They produce values, never requests.

use crate::application::context::ApiContext;
use crate::domain::delegates::{
    ActionRowBuilderDelegate, ButtonBuilderDelegate, DelegateFactoryExt,
    SelectMenuBuilderDelegate, SelectMenuOptionBuilderDelegate, TextInputBuilderDelegate,
};
use crate::domain::entities::ChannelType;
use crate::domain::value_objects::{
    ActionRow, Button, ButtonStyle, Component, ComponentEmoji, ComponentType, SelectMenu,
    SelectMenuOption, TextInput, TextInputStyle,
};
use crate::shared::error::DelegateError;

pub struct ActionRowBuilder {
    delegate: Box<dyn ActionRowBuilderDelegate>,
}

impl ActionRowBuilder {
    pub fn new(ctx: &ApiContext) -> Result<Self, DelegateError> {
        Ok(Self {
            delegate: ctx.factory().create_action_row_builder_delegate()?,
        })
    }

    pub fn component(mut self, component: impl Into<Component>) -> Self {
        self.delegate.add_component(component.into());
        self
    }

    forward! {
        remove_component(custom_id: &str) => remove_component(custom_id);
    }

    pub fn build(self) -> Result<ActionRow, DelegateError> {
        self.delegate.build()
    }
}

pub struct ButtonBuilder {
    delegate: Box<dyn ButtonBuilderDelegate>,
}

impl ButtonBuilder {
    pub fn new(ctx: &ApiContext) -> Result<Self, DelegateError> {
        Ok(Self {
            delegate: ctx.factory().create_button_builder_delegate()?,
        })
    }

    forward! {
        style(style: ButtonStyle) => set_style(style);
        label(label: impl Into<String>) => set_label(label.into());
        custom_id(custom_id: impl Into<String>) => set_custom_id(custom_id.into());
        url(url: impl Into<String>) => set_url(url.into());
        emoji(emoji: ComponentEmoji) => set_emoji(emoji);
        disabled(disabled: bool) => set_disabled(disabled);
    }

    pub fn build(self) -> Result<Button, DelegateError> {
        self.delegate.build()
    }
}

pub struct TextInputBuilder {
    delegate: Box<dyn TextInputBuilderDelegate>,
}

impl TextInputBuilder {
    pub fn new(ctx: &ApiContext) -> Result<Self, DelegateError> {
        Ok(Self {
            delegate: ctx.factory().create_text_input_builder_delegate()?,
        })
    }

    forward! {
        style(style: TextInputStyle) => set_style(style);
        custom_id(custom_id: impl Into<String>) => set_custom_id(custom_id.into());
        label(label: impl Into<String>) => set_label(label.into());
        minimum_length(min: u16) => set_minimum_length(min);
        maximum_length(max: u16) => set_maximum_length(max);
        required(required: bool) => set_required(required);
        value(value: impl Into<String>) => set_value(value.into());
        placeholder(placeholder: impl Into<String>) => set_placeholder(placeholder.into());
    }

    pub fn build(self) -> Result<TextInput, DelegateError> {
        self.delegate.build()
    }
}

pub struct SelectMenuBuilder {
    delegate: Box<dyn SelectMenuBuilderDelegate>,
}

impl SelectMenuBuilder {
    pub fn new(ctx: &ApiContext) -> Result<Self, DelegateError> {
        Ok(Self {
            delegate: ctx.factory().create_select_menu_builder_delegate()?,
        })
    }

    forward! {
        component_type(component_type: ComponentType) => set_component_type(component_type);
        custom_id(custom_id: impl Into<String>) => set_custom_id(custom_id.into());
        option(option: SelectMenuOption) => add_option(option);
        channel_type(channel_type: ChannelType) => add_channel_type(channel_type);
        placeholder(placeholder: impl Into<String>) => set_placeholder(placeholder.into());
        minimum_values(min: u8) => set_minimum_values(min);
        maximum_values(max: u8) => set_maximum_values(max);
        disabled(disabled: bool) => set_disabled(disabled);
    }

    pub fn build(self) -> Result<SelectMenu, DelegateError> {
        self.delegate.build()
    }
}

pub struct SelectMenuOptionBuilder {
    delegate: Box<dyn SelectMenuOptionBuilderDelegate>,
}

impl SelectMenuOptionBuilder {
    pub fn new(ctx: &ApiContext) -> Result<Self, DelegateError> {
        Ok(Self {
            delegate: ctx.factory().create_select_menu_option_builder_delegate()?,
        })
    }

    forward! {
        label(label: impl Into<String>) => set_label(label.into());
        value(value: impl Into<String>) => set_value(value.into());
        description(description: impl Into<String>) => set_description(description.into());
        emoji(emoji: ComponentEmoji) => set_emoji(emoji);
        default(is_default: bool) => set_default(is_default);
    }

    pub fn build(self) -> Result<SelectMenuOption, DelegateError> {
        self.delegate.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::context::testing::context;
    use crate::domain::rest::MockTransport;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_row_of_buttons() {
        let ctx = context(MockTransport::new());
        let confirm = ButtonBuilder::new(&ctx)
            .unwrap()
            .style(ButtonStyle::Success)
            .label("Confirm")
            .custom_id("confirm")
            .build()
            .unwrap();
        let docs = ButtonBuilder::new(&ctx)
            .unwrap()
            .style(ButtonStyle::Link)
            .label("Docs")
            .url("https://example.com/docs")
            .build()
            .unwrap();

        let row = ActionRowBuilder::new(&ctx)
            .unwrap()
            .component(confirm)
            .component(docs)
            .build()
            .unwrap();
        assert_eq!(row.components.len(), 2);
        assert_eq!(row.components[1].component_type(), ComponentType::Button);
    }

    #[test]
    fn test_select_menu_with_built_options() {
        let ctx = context(MockTransport::new());
        let option = SelectMenuOptionBuilder::new(&ctx)
            .unwrap()
            .label("Red")
            .value("red")
            .default(true)
            .build()
            .unwrap();

        let menu = SelectMenuBuilder::new(&ctx)
            .unwrap()
            .custom_id("color")
            .option(option)
            .build()
            .unwrap();
        assert_eq!(menu.component_type, ComponentType::StringSelect);
        assert!(menu.options[0].is_default);
    }

    #[test]
    fn test_text_input_rejects_inverted_lengths() {
        let ctx = context(MockTransport::new());
        let result = TextInputBuilder::new(&ctx)
            .unwrap()
            .custom_id("reason")
            .label("Reason")
            .minimum_length(50)
            .maximum_length(10)
            .build();
        assert!(matches!(result, Err(DelegateError::Validation(_))));
    }
}
