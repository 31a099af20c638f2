//! The produced delegate, one variant per kind.

use std::fmt;

use super::{
    AccountUpdaterDelegate, ActionRowBuilderDelegate, AllowedMentionsBuilderDelegate,
    ApiBuilderDelegate, AudioSourceDelegate, ButtonBuilderDelegate,
    ChannelCategoryBuilderDelegate, CustomEmojiBuilderDelegate, CustomEmojiUpdaterDelegate,
    DelegateKind, EmbedBuilderDelegate, ExceptionLoggerDelegate, ExceptionValidatorDelegate,
    InteractionMessageBuilderDelegate, InviteBuilderDelegate, MessageBuilderDelegate,
    MessageContextMenuBuilderDelegate, MessageContextMenuUpdaterDelegate,
    PermissionsBuilderDelegate, RegularServerChannelUpdaterDelegate, RoleBuilderDelegate,
    RoleUpdaterDelegate, ScheduledEventBuilderDelegate, ScheduledEventUpdaterDelegate,
    SelectMenuBuilderDelegate, SelectMenuOptionBuilderDelegate, ServerBuilderDelegate,
    ServerChannelUpdaterDelegate, ServerForumChannelBuilderDelegate,
    ServerForumChannelUpdaterDelegate, ServerTextChannelBuilderDelegate,
    ServerTextChannelUpdaterDelegate, ServerThreadChannelUpdaterDelegate, ServerUpdaterDelegate,
    ServerVoiceChannelBuilderDelegate, ServerVoiceChannelUpdaterDelegate,
    SlashCommandBuilderDelegate, SlashCommandOptionBuilderDelegate,
    SlashCommandOptionChoiceBuilderDelegate, SlashCommandUpdaterDelegate, StickerBuilderDelegate,
    StickerUpdaterDelegate, TextInputBuilderDelegate, ThreadBuilderDelegate,
    UserContextMenuBuilderDelegate, UserContextMenuUpdaterDelegate, WebhookBuilderDelegate,
    WebhookMessageBuilderDelegate, WebhookUpdaterDelegate,
};

macro_rules! delegate_enum {
    ($($kind:ident => $contract:ident),+ $(,)?) => {
        /// A freshly created delegate, exclusively owned by its caller.
        pub enum Delegate {
            $($kind(Box<dyn $contract>),)+
        }

        impl Delegate {
            /// The kind of this delegate.
            pub fn kind(&self) -> DelegateKind {
                match self {
                    $(Self::$kind(_) => DelegateKind::$kind,)+
                }
            }

            /// Address of the boxed delegate.
            pub fn address(&self) -> *const () {
                match self {
                    $(Self::$kind(delegate) => &**delegate as *const dyn $contract as *const (),)+
                }
            }
        }
    };
}

delegate_enum! {
    ApiBuilder => ApiBuilderDelegate,
    EmbedBuilder => EmbedBuilderDelegate,
    AllowedMentionsBuilder => AllowedMentionsBuilderDelegate,
    MessageBuilder => MessageBuilderDelegate,
    InteractionMessageBuilder => InteractionMessageBuilderDelegate,
    WebhookMessageBuilder => WebhookMessageBuilderDelegate,
    PermissionsBuilder => PermissionsBuilderDelegate,
    PermissionsBuilderFrom => PermissionsBuilderDelegate,
    ChannelCategoryBuilder => ChannelCategoryBuilderDelegate,
    ServerTextChannelBuilder => ServerTextChannelBuilderDelegate,
    ServerForumChannelBuilder => ServerForumChannelBuilderDelegate,
    ServerVoiceChannelBuilder => ServerVoiceChannelBuilderDelegate,
    ThreadBuilderFromChannel => ThreadBuilderDelegate,
    ThreadBuilderFromMessage => ThreadBuilderDelegate,
    CustomEmojiBuilder => CustomEmojiBuilderDelegate,
    WebhookBuilder => WebhookBuilderDelegate,
    ServerBuilder => ServerBuilderDelegate,
    RoleBuilder => RoleBuilderDelegate,
    InviteBuilder => InviteBuilderDelegate,
    AccountUpdater => AccountUpdaterDelegate,
    SlashCommandUpdater => SlashCommandUpdaterDelegate,
    UserContextMenuUpdater => UserContextMenuUpdaterDelegate,
    MessageContextMenuUpdater => MessageContextMenuUpdaterDelegate,
    ServerChannelUpdater => ServerChannelUpdaterDelegate,
    RegularServerChannelUpdater => RegularServerChannelUpdaterDelegate,
    ServerTextChannelUpdater => ServerTextChannelUpdaterDelegate,
    ServerForumChannelUpdater => ServerForumChannelUpdaterDelegate,
    ServerVoiceChannelUpdater => ServerVoiceChannelUpdaterDelegate,
    ServerThreadChannelUpdater => ServerThreadChannelUpdaterDelegate,
    CustomEmojiUpdater => CustomEmojiUpdaterDelegate,
    RoleUpdater => RoleUpdaterDelegate,
    ServerUpdater => ServerUpdaterDelegate,
    WebhookUpdater => WebhookUpdaterDelegate,
    AudioSource => AudioSourceDelegate,
    ExceptionLogger => ExceptionLoggerDelegate,
    ExceptionValidator => ExceptionValidatorDelegate,
    SlashCommandBuilder => SlashCommandBuilderDelegate,
    UserContextMenuBuilder => UserContextMenuBuilderDelegate,
    MessageContextMenuBuilder => MessageContextMenuBuilderDelegate,
    SlashCommandOptionBuilder => SlashCommandOptionBuilderDelegate,
    SlashCommandOptionChoiceBuilder => SlashCommandOptionChoiceBuilderDelegate,
    ActionRowBuilder => ActionRowBuilderDelegate,
    ButtonBuilder => ButtonBuilderDelegate,
    TextInputBuilder => TextInputBuilderDelegate,
    SelectMenuBuilder => SelectMenuBuilderDelegate,
    SelectMenuOptionBuilder => SelectMenuOptionBuilderDelegate,
    StickerBuilder => StickerBuilderDelegate,
    StickerUpdater => StickerUpdaterDelegate,
    ScheduledEventBuilder => ScheduledEventBuilderDelegate,
    ScheduledEventUpdater => ScheduledEventUpdaterDelegate,
}

impl fmt::Debug for Delegate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Delegate").field(&self.kind()).finish()
    }
}
