//! Construction requests.
//!
//! One variant per [`DelegateKind`], each carrying exactly the context its
//! delegate is scoped to. Entity context is shared (`Arc`) and never
//! inspected by the factory.

use std::sync::Arc;

use super::DelegateKind;
use crate::domain::entities::{
    ApiSession, KnownCustomEmoji, Message, RegularServerChannel, Role, ScheduledEvent, Server,
    ServerChannel, ServerForumChannel, ServerTextChannel, ServerThreadChannel,
    ServerVoiceChannel, Webhook,
};
use crate::domain::value_objects::{Permissions, Snowflake};

/// The entity a builder creates something inside of.
#[derive(Debug)]
pub struct Scope<T> {
    pub parent: Arc<T>,
}

impl<T> Scope<T> {
    pub fn new(parent: Arc<T>) -> Self {
        Self { parent }
    }
}

impl<T> Clone for Scope<T> {
    fn clone(&self) -> Self {
        Self {
            parent: Arc::clone(&self.parent),
        }
    }
}

/// The existing entity an updater modifies.
#[derive(Debug)]
pub struct Target<T> {
    pub entity: Arc<T>,
}

impl<T> Target<T> {
    pub fn new(entity: Arc<T>) -> Self {
        Self { entity }
    }
}

impl<T> Clone for Target<T> {
    fn clone(&self) -> Self {
        Self {
            entity: Arc::clone(&self.entity),
        }
    }
}

/// An application command addressed by id only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandTarget {
    pub command_id: Snowflake,
}

/// Initial state of a permissions builder. The value is copied, later
/// changes to the source are not observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionsSource {
    pub permissions: Permissions,
}

/// A sticker of a server, addressed by id.
#[derive(Debug, Clone)]
pub struct StickerTarget {
    pub server: Arc<Server>,
    pub sticker_id: Snowflake,
}

#[derive(Debug, Clone)]
pub struct ScheduledEventTarget {
    pub server: Arc<Server>,
    pub event: Arc<ScheduledEvent>,
}

/// A request for one delegate.
#[derive(Debug, Clone)]
pub enum DelegateRequest {
    ApiBuilder,
    EmbedBuilder,
    AllowedMentionsBuilder,
    MessageBuilder,
    InteractionMessageBuilder,
    WebhookMessageBuilder,
    PermissionsBuilder,
    PermissionsBuilderFrom(PermissionsSource),
    ChannelCategoryBuilder(Scope<Server>),
    ServerTextChannelBuilder(Scope<Server>),
    ServerForumChannelBuilder(Scope<Server>),
    ServerVoiceChannelBuilder(Scope<Server>),
    ThreadBuilderFromChannel(Scope<ServerTextChannel>),
    ThreadBuilderFromMessage(Scope<Message>),
    CustomEmojiBuilder(Scope<Server>),
    WebhookBuilder(Scope<ServerTextChannel>),
    ServerBuilder(Scope<ApiSession>),
    RoleBuilder(Scope<Server>),
    InviteBuilder(Scope<ServerChannel>),
    AccountUpdater(Target<ApiSession>),
    SlashCommandUpdater(CommandTarget),
    UserContextMenuUpdater(CommandTarget),
    MessageContextMenuUpdater(CommandTarget),
    ServerChannelUpdater(Target<ServerChannel>),
    RegularServerChannelUpdater(Target<RegularServerChannel>),
    ServerTextChannelUpdater(Target<ServerTextChannel>),
    ServerForumChannelUpdater(Target<ServerForumChannel>),
    ServerVoiceChannelUpdater(Target<ServerVoiceChannel>),
    ServerThreadChannelUpdater(Target<ServerThreadChannel>),
    CustomEmojiUpdater(Target<KnownCustomEmoji>),
    RoleUpdater(Target<Role>),
    ServerUpdater(Target<Server>),
    WebhookUpdater(Target<Webhook>),
    AudioSource(Scope<ApiSession>),
    ExceptionLogger,
    ExceptionValidator,
    SlashCommandBuilder,
    UserContextMenuBuilder,
    MessageContextMenuBuilder,
    SlashCommandOptionBuilder,
    SlashCommandOptionChoiceBuilder,
    ActionRowBuilder,
    ButtonBuilder,
    TextInputBuilder,
    SelectMenuBuilder,
    SelectMenuOptionBuilder,
    StickerBuilder(Scope<Server>),
    StickerUpdater(StickerTarget),
    ScheduledEventBuilder(Scope<Server>),
    ScheduledEventUpdater(ScheduledEventTarget),
}

impl DelegateRequest {
    /// The kind of delegate this request asks for.
    pub fn kind(&self) -> DelegateKind {
        match self {
            Self::ApiBuilder => DelegateKind::ApiBuilder,
            Self::EmbedBuilder => DelegateKind::EmbedBuilder,
            Self::AllowedMentionsBuilder => DelegateKind::AllowedMentionsBuilder,
            Self::MessageBuilder => DelegateKind::MessageBuilder,
            Self::InteractionMessageBuilder => DelegateKind::InteractionMessageBuilder,
            Self::WebhookMessageBuilder => DelegateKind::WebhookMessageBuilder,
            Self::PermissionsBuilder => DelegateKind::PermissionsBuilder,
            Self::PermissionsBuilderFrom(_) => DelegateKind::PermissionsBuilderFrom,
            Self::ChannelCategoryBuilder(_) => DelegateKind::ChannelCategoryBuilder,
            Self::ServerTextChannelBuilder(_) => DelegateKind::ServerTextChannelBuilder,
            Self::ServerForumChannelBuilder(_) => DelegateKind::ServerForumChannelBuilder,
            Self::ServerVoiceChannelBuilder(_) => DelegateKind::ServerVoiceChannelBuilder,
            Self::ThreadBuilderFromChannel(_) => DelegateKind::ThreadBuilderFromChannel,
            Self::ThreadBuilderFromMessage(_) => DelegateKind::ThreadBuilderFromMessage,
            Self::CustomEmojiBuilder(_) => DelegateKind::CustomEmojiBuilder,
            Self::WebhookBuilder(_) => DelegateKind::WebhookBuilder,
            Self::ServerBuilder(_) => DelegateKind::ServerBuilder,
            Self::RoleBuilder(_) => DelegateKind::RoleBuilder,
            Self::InviteBuilder(_) => DelegateKind::InviteBuilder,
            Self::AccountUpdater(_) => DelegateKind::AccountUpdater,
            Self::SlashCommandUpdater(_) => DelegateKind::SlashCommandUpdater,
            Self::UserContextMenuUpdater(_) => DelegateKind::UserContextMenuUpdater,
            Self::MessageContextMenuUpdater(_) => DelegateKind::MessageContextMenuUpdater,
            Self::ServerChannelUpdater(_) => DelegateKind::ServerChannelUpdater,
            Self::RegularServerChannelUpdater(_) => DelegateKind::RegularServerChannelUpdater,
            Self::ServerTextChannelUpdater(_) => DelegateKind::ServerTextChannelUpdater,
            Self::ServerForumChannelUpdater(_) => DelegateKind::ServerForumChannelUpdater,
            Self::ServerVoiceChannelUpdater(_) => DelegateKind::ServerVoiceChannelUpdater,
            Self::ServerThreadChannelUpdater(_) => DelegateKind::ServerThreadChannelUpdater,
            Self::CustomEmojiUpdater(_) => DelegateKind::CustomEmojiUpdater,
            Self::RoleUpdater(_) => DelegateKind::RoleUpdater,
            Self::ServerUpdater(_) => DelegateKind::ServerUpdater,
            Self::WebhookUpdater(_) => DelegateKind::WebhookUpdater,
            Self::AudioSource(_) => DelegateKind::AudioSource,
            Self::ExceptionLogger => DelegateKind::ExceptionLogger,
            Self::ExceptionValidator => DelegateKind::ExceptionValidator,
            Self::SlashCommandBuilder => DelegateKind::SlashCommandBuilder,
            Self::UserContextMenuBuilder => DelegateKind::UserContextMenuBuilder,
            Self::MessageContextMenuBuilder => DelegateKind::MessageContextMenuBuilder,
            Self::SlashCommandOptionBuilder => DelegateKind::SlashCommandOptionBuilder,
            Self::SlashCommandOptionChoiceBuilder => DelegateKind::SlashCommandOptionChoiceBuilder,
            Self::ActionRowBuilder => DelegateKind::ActionRowBuilder,
            Self::ButtonBuilder => DelegateKind::ButtonBuilder,
            Self::TextInputBuilder => DelegateKind::TextInputBuilder,
            Self::SelectMenuBuilder => DelegateKind::SelectMenuBuilder,
            Self::SelectMenuOptionBuilder => DelegateKind::SelectMenuOptionBuilder,
            Self::StickerBuilder(_) => DelegateKind::StickerBuilder,
            Self::StickerUpdater(_) => DelegateKind::StickerUpdater,
            Self::ScheduledEventBuilder(_) => DelegateKind::ScheduledEventBuilder,
            Self::ScheduledEventUpdater(_) => DelegateKind::ScheduledEventUpdater,
        }
    }
}
