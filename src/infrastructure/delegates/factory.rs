//! The REST delegate factory.

use crate::domain::delegates::{Delegate, DelegateFactory, DelegateRequest};
use crate::shared::error::DelegateError;

use super::*;

/// Factory producing delegates that render REST requests.
///
/// Holds no state; every call builds a fresh delegate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestDelegateFactory;

impl RestDelegateFactory {
    pub const NAME: &'static str = "rest";

    pub fn new() -> Self {
        Self
    }
}

impl DelegateFactory for RestDelegateFactory {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn create(&self, request: DelegateRequest) -> Result<Delegate, DelegateError> {
        use DelegateRequest as R;

        let delegate = match request {
            R::ApiBuilder => Delegate::ApiBuilder(Box::new(RestApiBuilderDelegate::new())),
            R::EmbedBuilder => Delegate::EmbedBuilder(Box::<RestEmbedBuilderDelegate>::default()),
            R::AllowedMentionsBuilder => Delegate::AllowedMentionsBuilder(
                Box::<RestAllowedMentionsBuilderDelegate>::default(),
            ),
            R::MessageBuilder => {
                Delegate::MessageBuilder(Box::<RestMessageBuilderDelegate>::default())
            }
            R::InteractionMessageBuilder => Delegate::InteractionMessageBuilder(
                Box::<RestInteractionMessageBuilderDelegate>::default(),
            ),
            R::WebhookMessageBuilder => Delegate::WebhookMessageBuilder(
                Box::<RestWebhookMessageBuilderDelegate>::default(),
            ),
            R::PermissionsBuilder => {
                Delegate::PermissionsBuilder(Box::<RestPermissionsBuilderDelegate>::default())
            }
            R::PermissionsBuilderFrom(source) => Delegate::PermissionsBuilderFrom(Box::new(
                RestPermissionsBuilderDelegate::from_permissions(source.permissions),
            )),
            R::ChannelCategoryBuilder(scope) => Delegate::ChannelCategoryBuilder(Box::new(
                RestChannelCategoryBuilderDelegate::new(scope.parent),
            )),
            R::ServerTextChannelBuilder(scope) => Delegate::ServerTextChannelBuilder(Box::new(
                RestServerTextChannelBuilderDelegate::new(scope.parent),
            )),
            R::ServerForumChannelBuilder(scope) => Delegate::ServerForumChannelBuilder(Box::new(
                RestServerForumChannelBuilderDelegate::new(scope.parent),
            )),
            R::ServerVoiceChannelBuilder(scope) => Delegate::ServerVoiceChannelBuilder(Box::new(
                RestServerVoiceChannelBuilderDelegate::new(scope.parent),
            )),
            R::ThreadBuilderFromChannel(scope) => Delegate::ThreadBuilderFromChannel(Box::new(
                RestThreadBuilderDelegate::from_channel(scope.parent),
            )),
            R::ThreadBuilderFromMessage(scope) => Delegate::ThreadBuilderFromMessage(Box::new(
                RestThreadBuilderDelegate::from_message(scope.parent),
            )),
            R::CustomEmojiBuilder(scope) => Delegate::CustomEmojiBuilder(Box::new(
                RestCustomEmojiBuilderDelegate::new(scope.parent),
            )),
            R::WebhookBuilder(scope) => {
                Delegate::WebhookBuilder(Box::new(RestWebhookBuilderDelegate::new(scope.parent)))
            }
            R::ServerBuilder(scope) => {
                Delegate::ServerBuilder(Box::new(RestServerBuilderDelegate::new(scope.parent)))
            }
            R::RoleBuilder(scope) => {
                Delegate::RoleBuilder(Box::new(RestRoleBuilderDelegate::new(scope.parent)))
            }
            R::InviteBuilder(scope) => {
                Delegate::InviteBuilder(Box::new(RestInviteBuilderDelegate::new(scope.parent)))
            }
            R::AccountUpdater(target) => {
                Delegate::AccountUpdater(Box::new(RestAccountUpdaterDelegate::new(target.entity)))
            }
            R::SlashCommandUpdater(target) => Delegate::SlashCommandUpdater(Box::new(
                RestSlashCommandUpdaterDelegate::new(target.command_id),
            )),
            R::UserContextMenuUpdater(target) => Delegate::UserContextMenuUpdater(Box::new(
                RestUserContextMenuUpdaterDelegate::new(target.command_id),
            )),
            R::MessageContextMenuUpdater(target) => Delegate::MessageContextMenuUpdater(
                Box::new(RestMessageContextMenuUpdaterDelegate::new(target.command_id)),
            ),
            R::ServerChannelUpdater(target) => Delegate::ServerChannelUpdater(Box::new(
                RestServerChannelUpdaterDelegate::new(target.entity),
            )),
            R::RegularServerChannelUpdater(target) => Delegate::RegularServerChannelUpdater(
                Box::new(RestRegularServerChannelUpdaterDelegate::new(target.entity)),
            ),
            R::ServerTextChannelUpdater(target) => Delegate::ServerTextChannelUpdater(Box::new(
                RestServerTextChannelUpdaterDelegate::new(target.entity),
            )),
            R::ServerForumChannelUpdater(target) => Delegate::ServerForumChannelUpdater(
                Box::new(RestServerForumChannelUpdaterDelegate::new(target.entity)),
            ),
            R::ServerVoiceChannelUpdater(target) => Delegate::ServerVoiceChannelUpdater(
                Box::new(RestServerVoiceChannelUpdaterDelegate::new(target.entity)),
            ),
            R::ServerThreadChannelUpdater(target) => Delegate::ServerThreadChannelUpdater(
                Box::new(RestServerThreadChannelUpdaterDelegate::new(target.entity)),
            ),
            R::CustomEmojiUpdater(target) => Delegate::CustomEmojiUpdater(Box::new(
                RestCustomEmojiUpdaterDelegate::new(target.entity),
            )),
            R::RoleUpdater(target) => {
                Delegate::RoleUpdater(Box::new(RestRoleUpdaterDelegate::new(target.entity)))
            }
            R::ServerUpdater(target) => {
                Delegate::ServerUpdater(Box::new(RestServerUpdaterDelegate::new(target.entity)))
            }
            R::WebhookUpdater(target) => {
                Delegate::WebhookUpdater(Box::new(RestWebhookUpdaterDelegate::new(target.entity)))
            }
            R::AudioSource(scope) => {
                Delegate::AudioSource(Box::new(RestAudioSourceDelegate::new(scope.parent)))
            }
            R::ExceptionLogger => {
                Delegate::ExceptionLogger(Box::new(RestExceptionLoggerDelegate::new()))
            }
            R::ExceptionValidator => {
                Delegate::ExceptionValidator(Box::new(RestExceptionValidatorDelegate::new()))
            }
            R::SlashCommandBuilder => {
                Delegate::SlashCommandBuilder(Box::new(RestSlashCommandBuilderDelegate::new()))
            }
            R::UserContextMenuBuilder => Delegate::UserContextMenuBuilder(Box::new(
                RestUserContextMenuBuilderDelegate::new(),
            )),
            R::MessageContextMenuBuilder => Delegate::MessageContextMenuBuilder(Box::new(
                RestMessageContextMenuBuilderDelegate::new(),
            )),
            R::SlashCommandOptionBuilder => Delegate::SlashCommandOptionBuilder(Box::new(
                RestSlashCommandOptionBuilderDelegate::new(),
            )),
            R::SlashCommandOptionChoiceBuilder => Delegate::SlashCommandOptionChoiceBuilder(
                Box::new(RestSlashCommandOptionChoiceBuilderDelegate::new()),
            ),
            R::ActionRowBuilder => {
                Delegate::ActionRowBuilder(Box::new(RestActionRowBuilderDelegate::new()))
            }
            R::ButtonBuilder => Delegate::ButtonBuilder(Box::new(RestButtonBuilderDelegate::new())),
            R::TextInputBuilder => {
                Delegate::TextInputBuilder(Box::new(RestTextInputBuilderDelegate::new()))
            }
            R::SelectMenuBuilder => {
                Delegate::SelectMenuBuilder(Box::new(RestSelectMenuBuilderDelegate::new()))
            }
            R::SelectMenuOptionBuilder => Delegate::SelectMenuOptionBuilder(Box::new(
                RestSelectMenuOptionBuilderDelegate::new(),
            )),
            R::StickerBuilder(scope) => {
                Delegate::StickerBuilder(Box::new(RestStickerBuilderDelegate::new(scope.parent)))
            }
            R::StickerUpdater(target) => Delegate::StickerUpdater(Box::new(
                RestStickerUpdaterDelegate::new(target.server, target.sticker_id),
            )),
            R::ScheduledEventBuilder(scope) => Delegate::ScheduledEventBuilder(Box::new(
                RestScheduledEventBuilderDelegate::new(scope.parent),
            )),
            R::ScheduledEventUpdater(target) => Delegate::ScheduledEventUpdater(Box::new(
                RestScheduledEventUpdaterDelegate::new(target.server, target.event),
            )),
        };

        Ok(delegate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::delegates::{DelegateFactoryExt, DelegateKind};
    use crate::domain::entities::Server;
    use crate::domain::value_objects::{PermissionState, PermissionType, Permissions, Snowflake};
    use std::sync::Arc;

    #[test]
    fn test_factory_name() {
        assert_eq!(RestDelegateFactory::new().name(), "rest");
    }

    #[test]
    fn test_created_delegate_matches_request_kind() {
        let factory = RestDelegateFactory::new();
        let server = Arc::new(Server::default());

        let delegate = factory
            .create(DelegateRequest::RoleBuilder(
                crate::domain::delegates::Scope::new(server),
            ))
            .unwrap();
        assert_eq!(delegate.kind(), DelegateKind::RoleBuilder);
    }

    #[test]
    fn test_permissions_builder_from_copies_source() {
        let factory = RestDelegateFactory::new();
        let source = Permissions::allowing(&[PermissionType::SendMessages]);

        let mut builder = factory.create_permissions_builder_delegate_from(source).unwrap();
        builder.set_state(PermissionType::SendMessages, PermissionState::Denied);

        assert_eq!(source.state(PermissionType::SendMessages), PermissionState::Allowed);
        assert_eq!(
            builder.build().state(PermissionType::SendMessages),
            PermissionState::Denied
        );
    }

    #[test]
    fn test_command_updater_keeps_id() {
        let factory = RestDelegateFactory::new();
        let updater = factory
            .create_user_context_menu_updater_delegate(Snowflake::new(55))
            .unwrap();
        assert_eq!(updater.command_id(), Snowflake::new(55));
    }
}
