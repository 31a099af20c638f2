//! The closed set of delegate kinds.

use std::fmt;

/// Everything a [`DelegateFactory`](super::DelegateFactory) can produce.
///
/// Variants carry no data; see [`DelegateRequest`](super::DelegateRequest)
/// for the construction parameters of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelegateKind {
    ApiBuilder,
    EmbedBuilder,
    AllowedMentionsBuilder,
    MessageBuilder,
    InteractionMessageBuilder,
    WebhookMessageBuilder,
    PermissionsBuilder,
    PermissionsBuilderFrom,
    ChannelCategoryBuilder,
    ServerTextChannelBuilder,
    ServerForumChannelBuilder,
    ServerVoiceChannelBuilder,
    ThreadBuilderFromChannel,
    ThreadBuilderFromMessage,
    CustomEmojiBuilder,
    WebhookBuilder,
    ServerBuilder,
    RoleBuilder,
    InviteBuilder,
    AccountUpdater,
    SlashCommandUpdater,
    UserContextMenuUpdater,
    MessageContextMenuUpdater,
    ServerChannelUpdater,
    RegularServerChannelUpdater,
    ServerTextChannelUpdater,
    ServerForumChannelUpdater,
    ServerVoiceChannelUpdater,
    ServerThreadChannelUpdater,
    CustomEmojiUpdater,
    RoleUpdater,
    ServerUpdater,
    WebhookUpdater,
    AudioSource,
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
    StickerBuilder,
    StickerUpdater,
    ScheduledEventBuilder,
    ScheduledEventUpdater,
}

impl DelegateKind {
    /// Every kind, each exactly once.
    pub const ALL: [DelegateKind; 50] = [
        Self::ApiBuilder,
        Self::EmbedBuilder,
        Self::AllowedMentionsBuilder,
        Self::MessageBuilder,
        Self::InteractionMessageBuilder,
        Self::WebhookMessageBuilder,
        Self::PermissionsBuilder,
        Self::PermissionsBuilderFrom,
        Self::ChannelCategoryBuilder,
        Self::ServerTextChannelBuilder,
        Self::ServerForumChannelBuilder,
        Self::ServerVoiceChannelBuilder,
        Self::ThreadBuilderFromChannel,
        Self::ThreadBuilderFromMessage,
        Self::CustomEmojiBuilder,
        Self::WebhookBuilder,
        Self::ServerBuilder,
        Self::RoleBuilder,
        Self::InviteBuilder,
        Self::AccountUpdater,
        Self::SlashCommandUpdater,
        Self::UserContextMenuUpdater,
        Self::MessageContextMenuUpdater,
        Self::ServerChannelUpdater,
        Self::RegularServerChannelUpdater,
        Self::ServerTextChannelUpdater,
        Self::ServerForumChannelUpdater,
        Self::ServerVoiceChannelUpdater,
        Self::ServerThreadChannelUpdater,
        Self::CustomEmojiUpdater,
        Self::RoleUpdater,
        Self::ServerUpdater,
        Self::WebhookUpdater,
        Self::AudioSource,
        Self::ExceptionLogger,
        Self::ExceptionValidator,
        Self::SlashCommandBuilder,
        Self::UserContextMenuBuilder,
        Self::MessageContextMenuBuilder,
        Self::SlashCommandOptionBuilder,
        Self::SlashCommandOptionChoiceBuilder,
        Self::ActionRowBuilder,
        Self::ButtonBuilder,
        Self::TextInputBuilder,
        Self::SelectMenuBuilder,
        Self::SelectMenuOptionBuilder,
        Self::StickerBuilder,
        Self::StickerUpdater,
        Self::ScheduledEventBuilder,
        Self::ScheduledEventUpdater,
    ];

    /// Snake-case name, used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApiBuilder => "api_builder",
            Self::EmbedBuilder => "embed_builder",
            Self::AllowedMentionsBuilder => "allowed_mentions_builder",
            Self::MessageBuilder => "message_builder",
            Self::InteractionMessageBuilder => "interaction_message_builder",
            Self::WebhookMessageBuilder => "webhook_message_builder",
            Self::PermissionsBuilder => "permissions_builder",
            Self::PermissionsBuilderFrom => "permissions_builder_from",
            Self::ChannelCategoryBuilder => "channel_category_builder",
            Self::ServerTextChannelBuilder => "server_text_channel_builder",
            Self::ServerForumChannelBuilder => "server_forum_channel_builder",
            Self::ServerVoiceChannelBuilder => "server_voice_channel_builder",
            Self::ThreadBuilderFromChannel => "thread_builder_from_channel",
            Self::ThreadBuilderFromMessage => "thread_builder_from_message",
            Self::CustomEmojiBuilder => "custom_emoji_builder",
            Self::WebhookBuilder => "webhook_builder",
            Self::ServerBuilder => "server_builder",
            Self::RoleBuilder => "role_builder",
            Self::InviteBuilder => "invite_builder",
            Self::AccountUpdater => "account_updater",
            Self::SlashCommandUpdater => "slash_command_updater",
            Self::UserContextMenuUpdater => "user_context_menu_updater",
            Self::MessageContextMenuUpdater => "message_context_menu_updater",
            Self::ServerChannelUpdater => "server_channel_updater",
            Self::RegularServerChannelUpdater => "regular_server_channel_updater",
            Self::ServerTextChannelUpdater => "server_text_channel_updater",
            Self::ServerForumChannelUpdater => "server_forum_channel_updater",
            Self::ServerVoiceChannelUpdater => "server_voice_channel_updater",
            Self::ServerThreadChannelUpdater => "server_thread_channel_updater",
            Self::CustomEmojiUpdater => "custom_emoji_updater",
            Self::RoleUpdater => "role_updater",
            Self::ServerUpdater => "server_updater",
            Self::WebhookUpdater => "webhook_updater",
            Self::AudioSource => "audio_source",
            Self::ExceptionLogger => "exception_logger",
            Self::ExceptionValidator => "exception_validator",
            Self::SlashCommandBuilder => "slash_command_builder",
            Self::UserContextMenuBuilder => "user_context_menu_builder",
            Self::MessageContextMenuBuilder => "message_context_menu_builder",
            Self::SlashCommandOptionBuilder => "slash_command_option_builder",
            Self::SlashCommandOptionChoiceBuilder => "slash_command_option_choice_builder",
            Self::ActionRowBuilder => "action_row_builder",
            Self::ButtonBuilder => "button_builder",
            Self::TextInputBuilder => "text_input_builder",
            Self::SelectMenuBuilder => "select_menu_builder",
            Self::SelectMenuOptionBuilder => "select_menu_option_builder",
            Self::StickerBuilder => "sticker_builder",
            Self::StickerUpdater => "sticker_updater",
            Self::ScheduledEventBuilder => "scheduled_event_builder",
            Self::ScheduledEventUpdater => "scheduled_event_updater",
        }
    }
}

impl fmt::Display for DelegateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_lists_each_kind_once() {
        let unique: HashSet<_> = DelegateKind::ALL.iter().collect();
        assert_eq!(unique.len(), DelegateKind::ALL.len());
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = DelegateKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), DelegateKind::ALL.len());
    }
}
