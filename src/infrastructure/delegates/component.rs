//! Message component delegates.

use super::common::require;
use crate::domain::delegates::{
    ActionRowBuilderDelegate, ButtonBuilderDelegate, SelectMenuBuilderDelegate,
    SelectMenuOptionBuilderDelegate, TextInputBuilderDelegate,
};
use crate::domain::entities::ChannelType;
use crate::domain::value_objects::{
    ActionRow, Button, ButtonStyle, Component, ComponentEmoji, ComponentType, SelectMenu,
    SelectMenuOption, TextInput, TextInputStyle,
};
use crate::shared::error::DelegateError;
use crate::shared::validation::validated;

fn custom_id(component: &Component) -> Option<&str> {
    match component {
        Component::Button(b) => b.custom_id.as_deref(),
        Component::TextInput(t) => Some(&t.custom_id),
        Component::SelectMenu(s) => Some(&s.custom_id),
    }
}

#[derive(Debug, Default)]
pub struct RestActionRowBuilderDelegate {
    components: Vec<Component>,
}

impl RestActionRowBuilderDelegate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ActionRowBuilderDelegate for RestActionRowBuilderDelegate {
    fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    fn remove_component(&mut self, custom_id_to_remove: &str) {
        self.components
            .retain(|c| custom_id(c) != Some(custom_id_to_remove));
    }

    fn build(&self) -> Result<ActionRow, DelegateError> {
        // Select menus and text inputs take a whole row
        let has_wide = self
            .components
            .iter()
            .any(|c| c.component_type() != ComponentType::Button);
        if has_wide && self.components.len() > 1 {
            return Err(DelegateError::Validation(
                "components: select menus and text inputs must be alone in their row".into(),
            ));
        }
        validated(ActionRow::new(self.components.clone()))
    }
}

#[derive(Debug, Default)]
pub struct RestButtonBuilderDelegate {
    style: ButtonStyle,
    label: Option<String>,
    custom_id: Option<String>,
    url: Option<String>,
    emoji: Option<ComponentEmoji>,
    disabled: bool,
}

impl RestButtonBuilderDelegate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ButtonBuilderDelegate for RestButtonBuilderDelegate {
    fn set_style(&mut self, style: ButtonStyle) {
        self.style = style;
    }

    fn set_label(&mut self, label: String) {
        self.label = Some(label);
    }

    fn set_custom_id(&mut self, custom_id: String) {
        self.custom_id = Some(custom_id);
    }

    fn set_url(&mut self, url: String) {
        self.url = Some(url);
    }

    fn set_emoji(&mut self, emoji: ComponentEmoji) {
        self.emoji = Some(emoji);
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn build(&self) -> Result<Button, DelegateError> {
        if self.style == ButtonStyle::Link {
            require(&self.url, "url")?;
            if self.custom_id.is_some() {
                return Err(DelegateError::Validation(
                    "custom_id: link buttons cannot have a custom id".into(),
                ));
            }
        } else {
            require(&self.custom_id, "custom_id")?;
            if self.url.is_some() {
                return Err(DelegateError::Validation(
                    "url: only link buttons can have a url".into(),
                ));
            }
        }
        if self.label.is_none() && self.emoji.is_none() {
            return Err(DelegateError::MissingField("label"));
        }

        validated(Button {
            component_type: ComponentType::Button,
            style: self.style,
            label: self.label.clone(),
            custom_id: self.custom_id.clone(),
            url: self.url.clone(),
            emoji: self.emoji.clone(),
            disabled: self.disabled,
        })
    }
}

#[derive(Debug)]
pub struct RestTextInputBuilderDelegate {
    style: TextInputStyle,
    custom_id: Option<String>,
    label: Option<String>,
    min_length: Option<u16>,
    max_length: Option<u16>,
    required: bool,
    value: Option<String>,
    placeholder: Option<String>,
}

impl RestTextInputBuilderDelegate {
    pub fn new() -> Self {
        Self {
            style: TextInputStyle::default(),
            custom_id: None,
            label: None,
            min_length: None,
            max_length: None,
            required: true,
            value: None,
            placeholder: None,
        }
    }
}

impl Default for RestTextInputBuilderDelegate {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInputBuilderDelegate for RestTextInputBuilderDelegate {
    fn set_style(&mut self, style: TextInputStyle) {
        self.style = style;
    }

    fn set_custom_id(&mut self, custom_id: String) {
        self.custom_id = Some(custom_id);
    }

    fn set_label(&mut self, label: String) {
        self.label = Some(label);
    }

    fn set_minimum_length(&mut self, min: u16) {
        self.min_length = Some(min);
    }

    fn set_maximum_length(&mut self, max: u16) {
        self.max_length = Some(max);
    }

    fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    fn set_value(&mut self, value: String) {
        self.value = Some(value);
    }

    fn set_placeholder(&mut self, placeholder: String) {
        self.placeholder = Some(placeholder);
    }

    fn build(&self) -> Result<TextInput, DelegateError> {
        let custom_id = require(&self.custom_id, "custom_id")?.clone();
        let label = require(&self.label, "label")?.clone();
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(DelegateError::Validation(
                    "min_length: must not exceed max_length".into(),
                ));
            }
        }

        validated(TextInput {
            component_type: ComponentType::TextInput,
            custom_id,
            style: self.style,
            label,
            min_length: self.min_length,
            max_length: self.max_length,
            required: self.required,
            value: self.value.clone(),
            placeholder: self.placeholder.clone(),
        })
    }
}

#[derive(Debug)]
pub struct RestSelectMenuBuilderDelegate {
    component_type: ComponentType,
    custom_id: Option<String>,
    options: Vec<SelectMenuOption>,
    channel_types: Vec<ChannelType>,
    placeholder: Option<String>,
    min_values: u8,
    max_values: u8,
    disabled: bool,
}

impl RestSelectMenuBuilderDelegate {
    pub fn new() -> Self {
        Self {
            component_type: ComponentType::StringSelect,
            custom_id: None,
            options: Vec::new(),
            channel_types: Vec::new(),
            placeholder: None,
            min_values: 1,
            max_values: 1,
            disabled: false,
        }
    }
}

impl Default for RestSelectMenuBuilderDelegate {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectMenuBuilderDelegate for RestSelectMenuBuilderDelegate {
    fn set_component_type(&mut self, component_type: ComponentType) {
        self.component_type = component_type;
    }

    fn set_custom_id(&mut self, custom_id: String) {
        self.custom_id = Some(custom_id);
    }

    fn add_option(&mut self, option: SelectMenuOption) {
        self.options.push(option);
    }

    fn add_channel_type(&mut self, channel_type: ChannelType) {
        if !self.channel_types.contains(&channel_type) {
            self.channel_types.push(channel_type);
        }
    }

    fn set_placeholder(&mut self, placeholder: String) {
        self.placeholder = Some(placeholder);
    }

    fn set_minimum_values(&mut self, min: u8) {
        self.min_values = min;
    }

    fn set_maximum_values(&mut self, max: u8) {
        self.max_values = max;
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn build(&self) -> Result<SelectMenu, DelegateError> {
        use ComponentType::*;

        if !matches!(
            self.component_type,
            StringSelect | UserSelect | RoleSelect | MentionableSelect | ChannelSelect
        ) {
            return Err(DelegateError::Validation(format!(
                "type: {:?} is not a select menu",
                self.component_type
            )));
        }
        let custom_id = require(&self.custom_id, "custom_id")?.clone();
        if self.component_type == StringSelect && self.options.is_empty() {
            return Err(DelegateError::MissingField("options"));
        }
        if self.component_type != StringSelect && !self.options.is_empty() {
            return Err(DelegateError::Validation(
                "options: only string selects have options".into(),
            ));
        }
        if self.component_type != ChannelSelect && !self.channel_types.is_empty() {
            return Err(DelegateError::Validation(
                "channel_types: only channel selects filter by channel type".into(),
            ));
        }
        if self.min_values > self.max_values {
            return Err(DelegateError::Validation(
                "min_values: must not exceed max_values".into(),
            ));
        }

        validated(SelectMenu {
            component_type: self.component_type,
            custom_id,
            options: self.options.clone(),
            channel_types: self.channel_types.clone(),
            placeholder: self.placeholder.clone(),
            min_values: self.min_values,
            max_values: self.max_values,
            disabled: self.disabled,
        })
    }
}

#[derive(Debug, Default)]
pub struct RestSelectMenuOptionBuilderDelegate {
    label: Option<String>,
    value: Option<String>,
    description: Option<String>,
    emoji: Option<ComponentEmoji>,
    is_default: bool,
}

impl RestSelectMenuOptionBuilderDelegate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectMenuOptionBuilderDelegate for RestSelectMenuOptionBuilderDelegate {
    fn set_label(&mut self, label: String) {
        self.label = Some(label);
    }

    fn set_value(&mut self, value: String) {
        self.value = Some(value);
    }

    fn set_description(&mut self, description: String) {
        self.description = Some(description);
    }

    fn set_emoji(&mut self, emoji: ComponentEmoji) {
        self.emoji = Some(emoji);
    }

    fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }

    fn build(&self) -> Result<SelectMenuOption, DelegateError> {
        let label = require(&self.label, "label")?.clone();
        let value = require(&self.value, "value")?.clone();
        validated(SelectMenuOption {
            label,
            value,
            description: self.description.clone(),
            emoji: self.emoji.clone(),
            is_default: self.is_default,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn button(custom_id: &str) -> Component {
        let mut builder = RestButtonBuilderDelegate::new();
        builder.set_label(custom_id.into());
        builder.set_custom_id(custom_id.into());
        builder.build().unwrap().into()
    }

    fn option(value: &str) -> SelectMenuOption {
        let mut builder = RestSelectMenuOptionBuilderDelegate::new();
        builder.set_label(value.into());
        builder.set_value(value.into());
        builder.build().unwrap()
    }

    #[test_case(ButtonStyle::Link, Some("https://example.com"), None => true ; "link with url")]
    #[test_case(ButtonStyle::Link, None, Some("go") => false ; "link with custom id")]
    #[test_case(ButtonStyle::Primary, None, Some("go") => true ; "primary with custom id")]
    #[test_case(ButtonStyle::Danger, Some("https://example.com"), Some("go") => false ; "danger with url")]
    fn test_button_shape(style: ButtonStyle, url: Option<&str>, custom_id: Option<&str>) -> bool {
        let mut builder = RestButtonBuilderDelegate::new();
        builder.set_style(style);
        builder.set_label("Go".into());
        if let Some(url) = url {
            builder.set_url(url.into());
        }
        if let Some(custom_id) = custom_id {
            builder.set_custom_id(custom_id.into());
        }
        builder.build().is_ok()
    }

    #[test]
    fn test_action_row_remove_component() {
        let mut row = RestActionRowBuilderDelegate::new();
        row.add_component(button("yes"));
        row.add_component(button("no"));
        row.remove_component("yes");

        let built = row.build().unwrap();
        assert_eq!(built.components, vec![button("no")]);
    }

    #[test]
    fn test_action_row_limits() {
        let mut row = RestActionRowBuilderDelegate::new();
        assert!(row.build().is_err());

        for i in 0..6 {
            row.add_component(button(&format!("b{}", i)));
        }
        assert!(matches!(row.build(), Err(DelegateError::Validation(_))));
    }

    #[test]
    fn test_select_menu_must_be_alone() {
        let mut menu = RestSelectMenuBuilderDelegate::new();
        menu.set_custom_id("pick".into());
        menu.add_option(option("a"));

        let mut row = RestActionRowBuilderDelegate::new();
        row.add_component(menu.build().unwrap().into());
        assert!(row.build().is_ok());

        row.add_component(button("extra"));
        assert!(matches!(row.build(), Err(DelegateError::Validation(_))));
    }

    #[test]
    fn test_select_menu_value_range() {
        let mut menu = RestSelectMenuBuilderDelegate::new();
        menu.set_custom_id("pick".into());
        menu.add_option(option("a"));
        menu.set_minimum_values(3);
        menu.set_maximum_values(2);
        assert!(matches!(menu.build(), Err(DelegateError::Validation(_))));
    }

    #[test]
    fn test_channel_select_takes_channel_types() {
        let mut menu = RestSelectMenuBuilderDelegate::new();
        menu.set_component_type(ComponentType::ChannelSelect);
        menu.set_custom_id("where".into());
        menu.add_channel_type(ChannelType::Text);
        menu.add_channel_type(ChannelType::Text);

        let built = menu.build().unwrap();
        assert_eq!(built.channel_types, vec![ChannelType::Text]);
    }

    #[test]
    fn test_text_input_requires_label() {
        let mut input = RestTextInputBuilderDelegate::new();
        input.set_custom_id("reason".into());
        assert!(matches!(input.build(), Err(DelegateError::MissingField("label"))));

        input.set_label("Reason".into());
        input.set_style(TextInputStyle::Paragraph);
        let built = input.build().unwrap();
        assert!(built.required);
        assert_eq!(built.style, TextInputStyle::Paragraph);
    }
}
