//! Slash commands, context menus and their options.
//!
//! Commands are registered either globally or for a single server. The
//! application id always comes from the context's session.

use crate::application::context::ApiContext;
use crate::domain::delegates::{
    ApplicationCommandBuilderDelegate, ApplicationCommandUpdaterDelegate, DelegateFactoryExt,
    MessageContextMenuBuilderDelegate, MessageContextMenuUpdaterDelegate,
    SlashCommandBuilderDelegate, SlashCommandOptionBuilderDelegate,
    SlashCommandOptionChoiceBuilderDelegate, SlashCommandUpdaterDelegate,
    UserContextMenuBuilderDelegate, UserContextMenuUpdaterDelegate,
};
use crate::domain::entities::ChannelType;
use crate::domain::rest::RestResponse;
use crate::domain::value_objects::{
    ChoiceValue, PermissionType, SlashCommandOption, SlashCommandOptionChoice,
    SlashCommandOptionType, Snowflake,
};
use crate::shared::error::{ClientError, DelegateError};

/// Setters and registration shared by every command builder.
macro_rules! command_builder_base {
    () => {
        forward! {
            name(name: impl Into<String>) => set_name(name.into());
            name_localization(locale: impl Into<String>, name: impl Into<String>)
                => add_name_localization(locale.into(), name.into());
            default_member_permissions(permissions: &[PermissionType])
                => set_default_member_permissions(permissions);
            default_disabled() => set_default_disabled();
            enabled_in_dms(enabled: bool) => set_enabled_in_dms(enabled);
            nsfw(nsfw: bool) => set_nsfw(nsfw);
        }

        /// Register the command for every server and DM.
        pub async fn create_global(self) -> Result<RestResponse, ClientError> {
            let application_id = self.ctx.session().application_id;
            let request = self.delegate.create_global_request(application_id)?;
            tracing::info!(
                application_id = %application_id,
                command_type = ?self.delegate.command_type(),
                "Registering global command"
            );
            self.ctx.execute(request).await
        }

        /// Register the command for a single server.
        pub async fn create_for_server(self, server_id: Snowflake) -> Result<RestResponse, ClientError> {
            let application_id = self.ctx.session().application_id;
            let request = self.delegate.create_server_request(application_id, server_id)?;
            tracing::info!(
                application_id = %application_id,
                server_id = %server_id,
                command_type = ?self.delegate.command_type(),
                "Registering server command"
            );
            self.ctx.execute(request).await
        }
    };
}

/// Setters and the update operations shared by every command updater.
macro_rules! command_updater_base {
    () => {
        forward! {
            name(name: impl Into<String>) => set_name(name.into());
            name_localization(locale: impl Into<String>, name: impl Into<String>)
                => add_name_localization(locale.into(), name.into());
            default_member_permissions(permissions: &[PermissionType])
                => set_default_member_permissions(permissions);
            default_disabled() => set_default_disabled();
            enabled_in_dms(enabled: bool) => set_enabled_in_dms(enabled);
        }

        pub fn command_id(&self) -> Snowflake {
            self.delegate.command_id()
        }

        pub async fn update_global(self) -> Result<RestResponse, ClientError> {
            let application_id = self.ctx.session().application_id;
            let request = self.delegate.update_global_request(application_id)?;
            tracing::debug!(command_id = %self.delegate.command_id(), "Updating global command");
            self.ctx.execute(request).await
        }

        pub async fn update_for_server(self, server_id: Snowflake) -> Result<RestResponse, ClientError> {
            let application_id = self.ctx.session().application_id;
            let request = self
                .delegate
                .update_server_request(application_id, server_id)?;
            tracing::debug!(
                command_id = %self.delegate.command_id(),
                server_id = %server_id,
                "Updating server command"
            );
            self.ctx.execute(request).await
        }
    };
}

pub struct SlashCommandBuilder<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn SlashCommandBuilderDelegate>,
}

impl<'a> SlashCommandBuilder<'a> {
    pub fn new(ctx: &'a ApiContext) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_slash_command_builder_delegate()?,
        })
    }

    command_builder_base!();

    forward! {
        description(description: impl Into<String>) => set_description(description.into());
        description_localization(locale: impl Into<String>, description: impl Into<String>)
            => add_description_localization(locale.into(), description.into());
        option(option: SlashCommandOption) => add_option(option);
    }
}

pub struct UserContextMenuBuilder<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn UserContextMenuBuilderDelegate>,
}

impl<'a> UserContextMenuBuilder<'a> {
    pub fn new(ctx: &'a ApiContext) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_user_context_menu_builder_delegate()?,
        })
    }

    command_builder_base!();
}

pub struct MessageContextMenuBuilder<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn MessageContextMenuBuilderDelegate>,
}

impl<'a> MessageContextMenuBuilder<'a> {
    pub fn new(ctx: &'a ApiContext) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_message_context_menu_builder_delegate()?,
        })
    }

    command_builder_base!();
}

pub struct SlashCommandUpdater<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn SlashCommandUpdaterDelegate>,
}

impl<'a> SlashCommandUpdater<'a> {
    pub fn new(ctx: &'a ApiContext, command_id: Snowflake) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_slash_command_updater_delegate(command_id)?,
        })
    }

    command_updater_base!();

    forward! {
        description(description: impl Into<String>) => set_description(description.into());
        description_localization(locale: impl Into<String>, description: impl Into<String>)
            => add_description_localization(locale.into(), description.into());
        options(options: Vec<SlashCommandOption>) => set_options(options);
    }
}

pub struct UserContextMenuUpdater<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn UserContextMenuUpdaterDelegate>,
}

impl<'a> UserContextMenuUpdater<'a> {
    pub fn new(ctx: &'a ApiContext, command_id: Snowflake) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx
                .factory()
                .create_user_context_menu_updater_delegate(command_id)?,
        })
    }

    command_updater_base!();
}

pub struct MessageContextMenuUpdater<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn MessageContextMenuUpdaterDelegate>,
}

impl<'a> MessageContextMenuUpdater<'a> {
    pub fn new(ctx: &'a ApiContext, command_id: Snowflake) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx
                .factory()
                .create_message_context_menu_updater_delegate(command_id)?,
        })
    }

    command_updater_base!();
}

pub struct SlashCommandOptionBuilder {
    delegate: Box<dyn SlashCommandOptionBuilderDelegate>,
}

impl SlashCommandOptionBuilder {
    pub fn new(ctx: &ApiContext) -> Result<Self, DelegateError> {
        Ok(Self {
            delegate: ctx.factory().create_slash_command_option_builder_delegate()?,
        })
    }

    forward! {
        option_type(option_type: SlashCommandOptionType) => set_type(option_type);
        name(name: impl Into<String>) => set_name(name.into());
        description(description: impl Into<String>) => set_description(description.into());
        required(required: bool) => set_required(required);
        choice(choice: SlashCommandOptionChoice) => add_choice(choice);
        /// Nested option of a sub-command or group.
        option(option: SlashCommandOption) => add_option(option);
        channel_type(channel_type: ChannelType) => add_channel_type(channel_type);
        min_value(min: f64) => set_min_value(min);
        max_value(max: f64) => set_max_value(max);
        min_length(min: u16) => set_min_length(min);
        max_length(max: u16) => set_max_length(max);
        autocompletable(autocomplete: bool) => set_autocompletable(autocomplete);
    }

    pub fn build(self) -> Result<SlashCommandOption, DelegateError> {
        self.delegate.build()
    }
}

pub struct SlashCommandOptionChoiceBuilder {
    delegate: Box<dyn SlashCommandOptionChoiceBuilderDelegate>,
}

impl SlashCommandOptionChoiceBuilder {
    pub fn new(ctx: &ApiContext) -> Result<Self, DelegateError> {
        Ok(Self {
            delegate: ctx
                .factory()
                .create_slash_command_option_choice_builder_delegate()?,
        })
    }

    forward! {
        name(name: impl Into<String>) => set_name(name.into());
        value(value: ChoiceValue) => set_value(value);
    }

    pub fn build(self) -> Result<SlashCommandOptionChoice, DelegateError> {
        self.delegate.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::context::testing::context;
    use crate::domain::rest::MockTransport;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_slash_command_with_built_option() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|r| {
                r.route == "/applications/42/guilds/100/commands"
                    && r.body.as_ref().map(|b| b["options"][0]["choices"][0]["value"].clone())
                        == Some(json!(5))
            })
            .times(1)
            .returning(|_| Ok(RestResponse::new(201, json!({ "id": "7" }))));

        let ctx = context(transport);
        let choice = SlashCommandOptionChoiceBuilder::new(&ctx)
            .unwrap()
            .name("Five")
            .value(ChoiceValue::Long(5))
            .build()
            .unwrap();
        let option = SlashCommandOptionBuilder::new(&ctx)
            .unwrap()
            .option_type(SlashCommandOptionType::Long)
            .name("count")
            .description("How many")
            .required(true)
            .choice(choice)
            .build()
            .unwrap();

        SlashCommandBuilder::new(&ctx)
            .unwrap()
            .name("roll")
            .description("Roll dice")
            .option(option)
            .create_for_server(Snowflake::new(100))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_context_menu_registers_globally() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|r| {
                r.route == "/applications/42/commands"
                    && r.body == Some(json!({ "type": 3, "name": "Quote message" }))
            })
            .times(1)
            .returning(|_| Ok(RestResponse::new(201, json!({}))));

        let ctx = context(transport);
        MessageContextMenuBuilder::new(&ctx)
            .unwrap()
            .name("Quote message")
            .create_global()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_updater_targets_command_id() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|r| r.route == "/applications/42/commands/7")
            .times(1)
            .returning(|_| Ok(RestResponse::new(200, json!({}))));

        let ctx = context(transport);
        let updater = UserContextMenuUpdater::new(&ctx, Snowflake::new(7))
            .unwrap()
            .enabled_in_dms(false);
        assert_eq!(updater.command_id(), Snowflake::new(7));
        updater.update_global().await.unwrap();
    }

    #[test]
    fn test_choice_without_value_fails() {
        let ctx = context(MockTransport::new());
        let result = SlashCommandOptionChoiceBuilder::new(&ctx)
            .unwrap()
            .name("Five")
            .build();
        assert!(matches!(result, Err(DelegateError::MissingField("value"))));
    }
}
