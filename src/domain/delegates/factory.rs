//! The factory contract.
//!
//! An implementation library plugs in by providing one [`DelegateFactory`].
//! Facades only ever see the typed entry points of [`DelegateFactoryExt`],
//! which are derived from `create` for every factory.

use std::sync::Arc;

use super::*;
use crate::domain::entities::{
    ApiSession, KnownCustomEmoji, Message, RegularServerChannel, Role, ScheduledEvent, Server,
    ServerChannel, ServerForumChannel, ServerTextChannel, ServerThreadChannel,
    ServerVoiceChannel, Webhook,
};
use crate::domain::value_objects::{Permissions, Snowflake};
use crate::shared::error::DelegateError;

/// Produces delegates.
///
/// Implementations must be stateless: every call returns a new instance
/// that shares no mutable state with any other, performs no I/O and never
/// blocks.
pub trait DelegateFactory: Send + Sync {
    /// Name of the implementation, for diagnostics.
    fn name(&self) -> &'static str;

    /// Create the delegate for a request.
    ///
    /// Returns [`DelegateError::UnsupportedKind`] for kinds this factory
    /// does not provide.
    fn create(&self, request: DelegateRequest) -> Result<Delegate, DelegateError>;
}

/// Create through the factory and unwrap the expected variant.
macro_rules! expect_variant {
    ($factory:expr, $request:expr, $variant:ident) => {
        match $factory.create($request)? {
            Delegate::$variant(delegate) => Ok(delegate),
            other => Err(DelegateError::KindMismatch {
                expected: DelegateKind::$variant,
                actual: other.kind(),
            }),
        }
    };
}

type Created<T> = Result<Box<T>, DelegateError>;

/// Typed entry points, one per delegate kind.
pub trait DelegateFactoryExt: DelegateFactory {
    fn create_api_builder_delegate(&self) -> Created<dyn ApiBuilderDelegate> {
        expect_variant!(self, DelegateRequest::ApiBuilder, ApiBuilder)
    }

    fn create_embed_builder_delegate(&self) -> Created<dyn EmbedBuilderDelegate> {
        expect_variant!(self, DelegateRequest::EmbedBuilder, EmbedBuilder)
    }

    fn create_allowed_mentions_builder_delegate(
        &self,
    ) -> Created<dyn AllowedMentionsBuilderDelegate> {
        expect_variant!(self, DelegateRequest::AllowedMentionsBuilder, AllowedMentionsBuilder)
    }

    fn create_message_builder_delegate(&self) -> Created<dyn MessageBuilderDelegate> {
        expect_variant!(self, DelegateRequest::MessageBuilder, MessageBuilder)
    }

    fn create_interaction_message_builder_delegate(
        &self,
    ) -> Created<dyn InteractionMessageBuilderDelegate> {
        expect_variant!(
            self,
            DelegateRequest::InteractionMessageBuilder,
            InteractionMessageBuilder
        )
    }

    fn create_webhook_message_builder_delegate(
        &self,
    ) -> Created<dyn WebhookMessageBuilderDelegate> {
        expect_variant!(self, DelegateRequest::WebhookMessageBuilder, WebhookMessageBuilder)
    }

    fn create_permissions_builder_delegate(&self) -> Created<dyn PermissionsBuilderDelegate> {
        expect_variant!(self, DelegateRequest::PermissionsBuilder, PermissionsBuilder)
    }

    /// A permissions builder starting from a copy of `permissions`.
    fn create_permissions_builder_delegate_from(
        &self,
        permissions: Permissions,
    ) -> Created<dyn PermissionsBuilderDelegate> {
        let request = DelegateRequest::PermissionsBuilderFrom(PermissionsSource { permissions });
        expect_variant!(self, request, PermissionsBuilderFrom)
    }

    fn create_channel_category_builder_delegate(
        &self,
        server: Arc<Server>,
    ) -> Created<dyn ChannelCategoryBuilderDelegate> {
        let request = DelegateRequest::ChannelCategoryBuilder(Scope::new(server));
        expect_variant!(self, request, ChannelCategoryBuilder)
    }

    fn create_server_text_channel_builder_delegate(
        &self,
        server: Arc<Server>,
    ) -> Created<dyn ServerTextChannelBuilderDelegate> {
        let request = DelegateRequest::ServerTextChannelBuilder(Scope::new(server));
        expect_variant!(self, request, ServerTextChannelBuilder)
    }

    fn create_server_forum_channel_builder_delegate(
        &self,
        server: Arc<Server>,
    ) -> Created<dyn ServerForumChannelBuilderDelegate> {
        let request = DelegateRequest::ServerForumChannelBuilder(Scope::new(server));
        expect_variant!(self, request, ServerForumChannelBuilder)
    }

    fn create_server_voice_channel_builder_delegate(
        &self,
        server: Arc<Server>,
    ) -> Created<dyn ServerVoiceChannelBuilderDelegate> {
        let request = DelegateRequest::ServerVoiceChannelBuilder(Scope::new(server));
        expect_variant!(self, request, ServerVoiceChannelBuilder)
    }

    fn create_thread_builder_delegate_from_channel(
        &self,
        channel: Arc<ServerTextChannel>,
    ) -> Created<dyn ThreadBuilderDelegate> {
        let request = DelegateRequest::ThreadBuilderFromChannel(Scope::new(channel));
        expect_variant!(self, request, ThreadBuilderFromChannel)
    }

    fn create_thread_builder_delegate_from_message(
        &self,
        message: Arc<Message>,
    ) -> Created<dyn ThreadBuilderDelegate> {
        let request = DelegateRequest::ThreadBuilderFromMessage(Scope::new(message));
        expect_variant!(self, request, ThreadBuilderFromMessage)
    }

    fn create_custom_emoji_builder_delegate(
        &self,
        server: Arc<Server>,
    ) -> Created<dyn CustomEmojiBuilderDelegate> {
        let request = DelegateRequest::CustomEmojiBuilder(Scope::new(server));
        expect_variant!(self, request, CustomEmojiBuilder)
    }

    fn create_webhook_builder_delegate(
        &self,
        channel: Arc<ServerTextChannel>,
    ) -> Created<dyn WebhookBuilderDelegate> {
        let request = DelegateRequest::WebhookBuilder(Scope::new(channel));
        expect_variant!(self, request, WebhookBuilder)
    }

    fn create_server_builder_delegate(
        &self,
        session: Arc<ApiSession>,
    ) -> Created<dyn ServerBuilderDelegate> {
        let request = DelegateRequest::ServerBuilder(Scope::new(session));
        expect_variant!(self, request, ServerBuilder)
    }

    fn create_role_builder_delegate(&self, server: Arc<Server>) -> Created<dyn RoleBuilderDelegate> {
        let request = DelegateRequest::RoleBuilder(Scope::new(server));
        expect_variant!(self, request, RoleBuilder)
    }

    fn create_invite_builder_delegate(
        &self,
        channel: Arc<ServerChannel>,
    ) -> Created<dyn InviteBuilderDelegate> {
        let request = DelegateRequest::InviteBuilder(Scope::new(channel));
        expect_variant!(self, request, InviteBuilder)
    }

    fn create_account_updater_delegate(
        &self,
        session: Arc<ApiSession>,
    ) -> Created<dyn AccountUpdaterDelegate> {
        let request = DelegateRequest::AccountUpdater(Target::new(session));
        expect_variant!(self, request, AccountUpdater)
    }

    fn create_slash_command_updater_delegate(
        &self,
        command_id: Snowflake,
    ) -> Created<dyn SlashCommandUpdaterDelegate> {
        let request = DelegateRequest::SlashCommandUpdater(CommandTarget { command_id });
        expect_variant!(self, request, SlashCommandUpdater)
    }

    fn create_user_context_menu_updater_delegate(
        &self,
        command_id: Snowflake,
    ) -> Created<dyn UserContextMenuUpdaterDelegate> {
        let request = DelegateRequest::UserContextMenuUpdater(CommandTarget { command_id });
        expect_variant!(self, request, UserContextMenuUpdater)
    }

    fn create_message_context_menu_updater_delegate(
        &self,
        command_id: Snowflake,
    ) -> Created<dyn MessageContextMenuUpdaterDelegate> {
        let request = DelegateRequest::MessageContextMenuUpdater(CommandTarget { command_id });
        expect_variant!(self, request, MessageContextMenuUpdater)
    }

    fn create_server_channel_updater_delegate(
        &self,
        channel: Arc<ServerChannel>,
    ) -> Created<dyn ServerChannelUpdaterDelegate> {
        let request = DelegateRequest::ServerChannelUpdater(Target::new(channel));
        expect_variant!(self, request, ServerChannelUpdater)
    }

    fn create_regular_server_channel_updater_delegate(
        &self,
        channel: Arc<RegularServerChannel>,
    ) -> Created<dyn RegularServerChannelUpdaterDelegate> {
        let request = DelegateRequest::RegularServerChannelUpdater(Target::new(channel));
        expect_variant!(self, request, RegularServerChannelUpdater)
    }

    fn create_server_text_channel_updater_delegate(
        &self,
        channel: Arc<ServerTextChannel>,
    ) -> Created<dyn ServerTextChannelUpdaterDelegate> {
        let request = DelegateRequest::ServerTextChannelUpdater(Target::new(channel));
        expect_variant!(self, request, ServerTextChannelUpdater)
    }

    fn create_server_forum_channel_updater_delegate(
        &self,
        channel: Arc<ServerForumChannel>,
    ) -> Created<dyn ServerForumChannelUpdaterDelegate> {
        let request = DelegateRequest::ServerForumChannelUpdater(Target::new(channel));
        expect_variant!(self, request, ServerForumChannelUpdater)
    }

    fn create_server_voice_channel_updater_delegate(
        &self,
        channel: Arc<ServerVoiceChannel>,
    ) -> Created<dyn ServerVoiceChannelUpdaterDelegate> {
        let request = DelegateRequest::ServerVoiceChannelUpdater(Target::new(channel));
        expect_variant!(self, request, ServerVoiceChannelUpdater)
    }

    fn create_server_thread_channel_updater_delegate(
        &self,
        thread: Arc<ServerThreadChannel>,
    ) -> Created<dyn ServerThreadChannelUpdaterDelegate> {
        let request = DelegateRequest::ServerThreadChannelUpdater(Target::new(thread));
        expect_variant!(self, request, ServerThreadChannelUpdater)
    }

    fn create_custom_emoji_updater_delegate(
        &self,
        emoji: Arc<KnownCustomEmoji>,
    ) -> Created<dyn CustomEmojiUpdaterDelegate> {
        let request = DelegateRequest::CustomEmojiUpdater(Target::new(emoji));
        expect_variant!(self, request, CustomEmojiUpdater)
    }

    fn create_role_updater_delegate(&self, role: Arc<Role>) -> Created<dyn RoleUpdaterDelegate> {
        let request = DelegateRequest::RoleUpdater(Target::new(role));
        expect_variant!(self, request, RoleUpdater)
    }

    fn create_server_updater_delegate(
        &self,
        server: Arc<Server>,
    ) -> Created<dyn ServerUpdaterDelegate> {
        let request = DelegateRequest::ServerUpdater(Target::new(server));
        expect_variant!(self, request, ServerUpdater)
    }

    fn create_webhook_updater_delegate(
        &self,
        webhook: Arc<Webhook>,
    ) -> Created<dyn WebhookUpdaterDelegate> {
        let request = DelegateRequest::WebhookUpdater(Target::new(webhook));
        expect_variant!(self, request, WebhookUpdater)
    }

    fn create_audio_source_delegate(
        &self,
        session: Arc<ApiSession>,
    ) -> Created<dyn AudioSourceDelegate> {
        let request = DelegateRequest::AudioSource(Scope::new(session));
        expect_variant!(self, request, AudioSource)
    }

    fn create_exception_logger_delegate(&self) -> Created<dyn ExceptionLoggerDelegate> {
        expect_variant!(self, DelegateRequest::ExceptionLogger, ExceptionLogger)
    }

    fn create_exception_validator_delegate(&self) -> Created<dyn ExceptionValidatorDelegate> {
        expect_variant!(self, DelegateRequest::ExceptionValidator, ExceptionValidator)
    }

    fn create_slash_command_builder_delegate(&self) -> Created<dyn SlashCommandBuilderDelegate> {
        expect_variant!(self, DelegateRequest::SlashCommandBuilder, SlashCommandBuilder)
    }

    fn create_user_context_menu_builder_delegate(
        &self,
    ) -> Created<dyn UserContextMenuBuilderDelegate> {
        expect_variant!(self, DelegateRequest::UserContextMenuBuilder, UserContextMenuBuilder)
    }

    fn create_message_context_menu_builder_delegate(
        &self,
    ) -> Created<dyn MessageContextMenuBuilderDelegate> {
        expect_variant!(
            self,
            DelegateRequest::MessageContextMenuBuilder,
            MessageContextMenuBuilder
        )
    }

    fn create_slash_command_option_builder_delegate(
        &self,
    ) -> Created<dyn SlashCommandOptionBuilderDelegate> {
        expect_variant!(
            self,
            DelegateRequest::SlashCommandOptionBuilder,
            SlashCommandOptionBuilder
        )
    }

    fn create_slash_command_option_choice_builder_delegate(
        &self,
    ) -> Created<dyn SlashCommandOptionChoiceBuilderDelegate> {
        expect_variant!(
            self,
            DelegateRequest::SlashCommandOptionChoiceBuilder,
            SlashCommandOptionChoiceBuilder
        )
    }

    fn create_action_row_builder_delegate(&self) -> Created<dyn ActionRowBuilderDelegate> {
        expect_variant!(self, DelegateRequest::ActionRowBuilder, ActionRowBuilder)
    }

    fn create_button_builder_delegate(&self) -> Created<dyn ButtonBuilderDelegate> {
        expect_variant!(self, DelegateRequest::ButtonBuilder, ButtonBuilder)
    }

    fn create_text_input_builder_delegate(&self) -> Created<dyn TextInputBuilderDelegate> {
        expect_variant!(self, DelegateRequest::TextInputBuilder, TextInputBuilder)
    }

    fn create_select_menu_builder_delegate(&self) -> Created<dyn SelectMenuBuilderDelegate> {
        expect_variant!(self, DelegateRequest::SelectMenuBuilder, SelectMenuBuilder)
    }

    fn create_select_menu_option_builder_delegate(
        &self,
    ) -> Created<dyn SelectMenuOptionBuilderDelegate> {
        expect_variant!(self, DelegateRequest::SelectMenuOptionBuilder, SelectMenuOptionBuilder)
    }

    fn create_sticker_builder_delegate(
        &self,
        server: Arc<Server>,
    ) -> Created<dyn StickerBuilderDelegate> {
        let request = DelegateRequest::StickerBuilder(Scope::new(server));
        expect_variant!(self, request, StickerBuilder)
    }

    fn create_sticker_updater_delegate(
        &self,
        server: Arc<Server>,
        sticker_id: Snowflake,
    ) -> Created<dyn StickerUpdaterDelegate> {
        let request = DelegateRequest::StickerUpdater(StickerTarget { server, sticker_id });
        expect_variant!(self, request, StickerUpdater)
    }

    fn create_scheduled_event_builder_delegate(
        &self,
        server: Arc<Server>,
    ) -> Created<dyn ScheduledEventBuilderDelegate> {
        let request = DelegateRequest::ScheduledEventBuilder(Scope::new(server));
        expect_variant!(self, request, ScheduledEventBuilder)
    }

    fn create_scheduled_event_updater_delegate(
        &self,
        server: Arc<Server>,
        event: Arc<ScheduledEvent>,
    ) -> Created<dyn ScheduledEventUpdaterDelegate> {
        let request = DelegateRequest::ScheduledEventUpdater(ScheduledEventTarget { server, event });
        expect_variant!(self, request, ScheduledEventUpdater)
    }
}

impl<F: DelegateFactory + ?Sized> DelegateFactoryExt for F {}
