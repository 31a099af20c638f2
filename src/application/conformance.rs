//! Factory conformance probe.
//!
//! Asks a factory for every [`DelegateKind`] using sample construction
//! context and records what came back. A factory is conforming when every
//! kind is produced with the matching variant.

use std::sync::Arc;

use crate::domain::delegates::{
    CommandTarget, DelegateFactory, DelegateKind, DelegateRequest, PermissionsSource,
    ScheduledEventTarget, Scope, StickerTarget, Target,
};
use crate::domain::entities::{
    intents, ApiSession, Channel, ChannelConversionError, ChannelType, KnownCustomEmoji, Message,
    RegularServerChannel, Role, ScheduledEvent, ScheduledEventEntityType, ScheduledEventStatus,
    Server, ServerChannel, ServerForumChannel, ServerTextChannel, ServerThreadChannel,
    ServerVoiceChannel, SessionConfig, Webhook,
};
use crate::domain::value_objects::{Permissions, Snowflake};
use crate::shared::error::DelegateError;

const SAMPLE_SERVER_ID: i64 = 1;

/// Construction context shared by every sample request.
struct Samples {
    session: Arc<ApiSession>,
    server: Arc<Server>,
    message: Arc<Message>,
    server_channel: Arc<ServerChannel>,
    regular_channel: Arc<RegularServerChannel>,
    text_channel: Arc<ServerTextChannel>,
    forum_channel: Arc<ServerForumChannel>,
    voice_channel: Arc<ServerVoiceChannel>,
    thread_channel: Arc<ServerThreadChannel>,
    emoji: Arc<KnownCustomEmoji>,
    role: Arc<Role>,
    webhook: Arc<Webhook>,
    event: Arc<ScheduledEvent>,
}

fn sample_channel<V>(id: i64, channel_type: ChannelType) -> Result<Arc<V>, ChannelConversionError>
where
    V: TryFrom<Channel, Error = ChannelConversionError>,
{
    let channel = Channel {
        id: Snowflake::new(id),
        server_id: Some(Snowflake::new(SAMPLE_SERVER_ID)),
        name: "sample".to_string(),
        channel_type,
        ..Default::default()
    };
    V::try_from(channel).map(Arc::new)
}

impl Samples {
    fn new() -> Result<Self, ChannelConversionError> {
        let server_id = Snowflake::new(SAMPLE_SERVER_ID);
        let session = Arc::new(ApiSession::new(
            Snowflake::new(2),
            Snowflake::new(3),
            SessionConfig {
                token: String::new(),
                intents: intents::DEFAULT,
                current_shard: 0,
                total_shards: 1,
                wait_for_servers_on_startup: false,
            },
        ));

        Ok(Self {
            session,
            server: Arc::new(Server {
                id: server_id,
                ..Default::default()
            }),
            message: Arc::new(Message {
                id: Snowflake::new(4),
                channel_id: Snowflake::new(10),
                server_id: Some(server_id),
                ..Default::default()
            }),
            server_channel: sample_channel(10, ChannelType::Text)?,
            regular_channel: sample_channel(10, ChannelType::Text)?,
            text_channel: sample_channel(10, ChannelType::Text)?,
            forum_channel: sample_channel(11, ChannelType::Forum)?,
            voice_channel: sample_channel(12, ChannelType::Voice)?,
            thread_channel: sample_channel(13, ChannelType::PublicThread)?,
            emoji: Arc::new(KnownCustomEmoji {
                id: Snowflake::new(5),
                server_id,
                name: "sample".to_string(),
                ..Default::default()
            }),
            role: Arc::new(Role {
                id: Snowflake::new(6),
                server_id,
                ..Default::default()
            }),
            webhook: Arc::new(Webhook {
                id: Snowflake::new(7),
                channel_id: Snowflake::new(10),
                ..Default::default()
            }),
            event: Arc::new(ScheduledEvent {
                id: Snowflake::new(8),
                server_id,
                channel_id: Some(Snowflake::new(12)),
                name: "sample".to_string(),
                description: None,
                scheduled_start_time: chrono::Utc::now(),
                scheduled_end_time: None,
                entity_type: ScheduledEventEntityType::Voice,
                status: ScheduledEventStatus::Scheduled,
                location: None,
            }),
        })
    }

    /// A request for `kind` carrying sample context.
    fn request(&self, kind: DelegateKind) -> DelegateRequest {
        use DelegateKind as K;
        use DelegateRequest as R;

        let command = CommandTarget {
            command_id: Snowflake::new(9),
        };

        match kind {
            K::ApiBuilder => R::ApiBuilder,
            K::EmbedBuilder => R::EmbedBuilder,
            K::AllowedMentionsBuilder => R::AllowedMentionsBuilder,
            K::MessageBuilder => R::MessageBuilder,
            K::InteractionMessageBuilder => R::InteractionMessageBuilder,
            K::WebhookMessageBuilder => R::WebhookMessageBuilder,
            K::PermissionsBuilder => R::PermissionsBuilder,
            K::PermissionsBuilderFrom => R::PermissionsBuilderFrom(PermissionsSource {
                permissions: Permissions::empty(),
            }),
            K::ChannelCategoryBuilder => R::ChannelCategoryBuilder(Scope::new(self.server.clone())),
            K::ServerTextChannelBuilder => {
                R::ServerTextChannelBuilder(Scope::new(self.server.clone()))
            }
            K::ServerForumChannelBuilder => {
                R::ServerForumChannelBuilder(Scope::new(self.server.clone()))
            }
            K::ServerVoiceChannelBuilder => {
                R::ServerVoiceChannelBuilder(Scope::new(self.server.clone()))
            }
            K::ThreadBuilderFromChannel => {
                R::ThreadBuilderFromChannel(Scope::new(self.text_channel.clone()))
            }
            K::ThreadBuilderFromMessage => {
                R::ThreadBuilderFromMessage(Scope::new(self.message.clone()))
            }
            K::CustomEmojiBuilder => R::CustomEmojiBuilder(Scope::new(self.server.clone())),
            K::WebhookBuilder => R::WebhookBuilder(Scope::new(self.text_channel.clone())),
            K::ServerBuilder => R::ServerBuilder(Scope::new(self.session.clone())),
            K::RoleBuilder => R::RoleBuilder(Scope::new(self.server.clone())),
            K::InviteBuilder => R::InviteBuilder(Scope::new(self.server_channel.clone())),
            K::AccountUpdater => R::AccountUpdater(Target::new(self.session.clone())),
            K::SlashCommandUpdater => R::SlashCommandUpdater(command),
            K::UserContextMenuUpdater => R::UserContextMenuUpdater(command),
            K::MessageContextMenuUpdater => R::MessageContextMenuUpdater(command),
            K::ServerChannelUpdater => {
                R::ServerChannelUpdater(Target::new(self.server_channel.clone()))
            }
            K::RegularServerChannelUpdater => {
                R::RegularServerChannelUpdater(Target::new(self.regular_channel.clone()))
            }
            K::ServerTextChannelUpdater => {
                R::ServerTextChannelUpdater(Target::new(self.text_channel.clone()))
            }
            K::ServerForumChannelUpdater => {
                R::ServerForumChannelUpdater(Target::new(self.forum_channel.clone()))
            }
            K::ServerVoiceChannelUpdater => {
                R::ServerVoiceChannelUpdater(Target::new(self.voice_channel.clone()))
            }
            K::ServerThreadChannelUpdater => {
                R::ServerThreadChannelUpdater(Target::new(self.thread_channel.clone()))
            }
            K::CustomEmojiUpdater => R::CustomEmojiUpdater(Target::new(self.emoji.clone())),
            K::RoleUpdater => R::RoleUpdater(Target::new(self.role.clone())),
            K::ServerUpdater => R::ServerUpdater(Target::new(self.server.clone())),
            K::WebhookUpdater => R::WebhookUpdater(Target::new(self.webhook.clone())),
            K::AudioSource => R::AudioSource(Scope::new(self.session.clone())),
            K::ExceptionLogger => R::ExceptionLogger,
            K::ExceptionValidator => R::ExceptionValidator,
            K::SlashCommandBuilder => R::SlashCommandBuilder,
            K::UserContextMenuBuilder => R::UserContextMenuBuilder,
            K::MessageContextMenuBuilder => R::MessageContextMenuBuilder,
            K::SlashCommandOptionBuilder => R::SlashCommandOptionBuilder,
            K::SlashCommandOptionChoiceBuilder => R::SlashCommandOptionChoiceBuilder,
            K::ActionRowBuilder => R::ActionRowBuilder,
            K::ButtonBuilder => R::ButtonBuilder,
            K::TextInputBuilder => R::TextInputBuilder,
            K::SelectMenuBuilder => R::SelectMenuBuilder,
            K::SelectMenuOptionBuilder => R::SelectMenuOptionBuilder,
            K::StickerBuilder => R::StickerBuilder(Scope::new(self.server.clone())),
            K::StickerUpdater => R::StickerUpdater(StickerTarget {
                server: self.server.clone(),
                sticker_id: Snowflake::new(14),
            }),
            K::ScheduledEventBuilder => R::ScheduledEventBuilder(Scope::new(self.server.clone())),
            K::ScheduledEventUpdater => R::ScheduledEventUpdater(ScheduledEventTarget {
                server: self.server.clone(),
                event: self.event.clone(),
            }),
        }
    }
}

/// Outcome of probing a factory.
#[derive(Debug)]
pub struct ConformanceReport {
    factory: &'static str,
    supported: Vec<DelegateKind>,
    failures: Vec<(DelegateKind, DelegateError)>,
}

impl ConformanceReport {
    /// Name of the probed factory.
    pub fn factory_name(&self) -> &'static str {
        self.factory
    }

    /// Kinds produced with the matching variant.
    pub fn supported(&self) -> &[DelegateKind] {
        &self.supported
    }

    /// Kinds the factory refused.
    pub fn unsupported(&self) -> Vec<DelegateKind> {
        self.failures
            .iter()
            .filter(|(_, error)| matches!(error, DelegateError::UnsupportedKind(_)))
            .map(|(kind, _)| *kind)
            .collect()
    }

    /// `(requested, returned)` pairs where the factory answered with the
    /// wrong variant.
    pub fn mismatched(&self) -> Vec<(DelegateKind, DelegateKind)> {
        self.failures
            .iter()
            .filter_map(|(_, error)| match error {
                DelegateError::KindMismatch { expected, actual } => Some((*expected, *actual)),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> &[(DelegateKind, DelegateError)] {
        &self.failures
    }

    pub fn is_conforming(&self) -> bool {
        self.failures.is_empty()
    }

    /// The first failure, if any.
    pub fn ensure_conforming(self) -> Result<(), DelegateError> {
        match self.failures.into_iter().next() {
            Some((_, error)) => Err(error),
            None => Ok(()),
        }
    }
}

/// One sample request per kind, in [`DelegateKind::ALL`] order.
pub fn sample_requests() -> Result<Vec<DelegateRequest>, ChannelConversionError> {
    let samples = Samples::new()?;
    Ok(DelegateKind::ALL
        .iter()
        .map(|&kind| samples.request(kind))
        .collect())
}

/// Request every kind from `factory`.
pub fn probe(factory: &dyn DelegateFactory) -> Result<ConformanceReport, ChannelConversionError> {
    let samples = Samples::new()?;
    let mut report = ConformanceReport {
        factory: factory.name(),
        supported: Vec::with_capacity(DelegateKind::ALL.len()),
        failures: Vec::new(),
    };

    for kind in DelegateKind::ALL {
        match factory.create(samples.request(kind)) {
            Ok(delegate) if delegate.kind() == kind => report.supported.push(kind),
            Ok(delegate) => {
                let actual = delegate.kind();
                tracing::warn!(expected = %kind, actual = %actual, "Factory returned wrong delegate kind");
                report.failures.push((
                    kind,
                    DelegateError::KindMismatch {
                        expected: kind,
                        actual,
                    },
                ));
            }
            Err(error) => {
                tracing::warn!(kind = %kind, error = %error, "Factory failed to create delegate");
                report.failures.push((kind, error));
            }
        }
    }

    tracing::info!(
        factory = report.factory,
        supported = report.supported.len(),
        failed = report.failures.len(),
        "Conformance probe finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::delegates::Delegate;
    use crate::infrastructure::delegates::{RestDelegateFactory, RestEmbedBuilderDelegate};
    use pretty_assertions::assert_eq;

    struct EmbedsOnly;

    impl DelegateFactory for EmbedsOnly {
        fn name(&self) -> &'static str {
            "embeds-only"
        }

        fn create(&self, request: DelegateRequest) -> Result<Delegate, DelegateError> {
            match request {
                // Answers message builder requests with an embed builder too.
                DelegateRequest::EmbedBuilder | DelegateRequest::MessageBuilder => Ok(
                    Delegate::EmbedBuilder(Box::<RestEmbedBuilderDelegate>::default()),
                ),
                other => Err(DelegateError::UnsupportedKind(other.kind())),
            }
        }
    }

    #[test]
    fn test_sample_requests_match_their_kind() {
        let samples = Samples::new().unwrap();
        for kind in DelegateKind::ALL {
            assert_eq!(samples.request(kind).kind(), kind);
        }
    }

    #[test]
    fn test_rest_factory_is_conforming() {
        let report = probe(&RestDelegateFactory::new()).unwrap();
        assert_eq!(report.factory_name(), "rest");
        assert_eq!(report.supported().len(), DelegateKind::ALL.len());
        assert!(report.is_conforming());
        assert!(report.ensure_conforming().is_ok());
    }

    #[test]
    fn test_partial_factory_report() {
        let report = probe(&EmbedsOnly).unwrap();

        assert_eq!(report.supported(), &[DelegateKind::EmbedBuilder]);
        assert_eq!(
            report.mismatched(),
            vec![(DelegateKind::MessageBuilder, DelegateKind::EmbedBuilder)]
        );
        assert_eq!(report.unsupported().len(), DelegateKind::ALL.len() - 2);
        assert!(!report.is_conforming());
        assert!(matches!(
            report.ensure_conforming(),
            Err(DelegateError::UnsupportedKind(DelegateKind::ApiBuilder))
        ));
    }
}
