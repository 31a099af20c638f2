//! Every kind is produced, fresh and scoped to its context.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use test_case::test_case;

use chat_client::application::conformance;
use chat_client::application::facades::{
    MessageBuilder, PermissionsBuilder, SlashCommandUpdater, ThreadBuilder, UserContextMenuUpdater,
};
use chat_client::domain::delegates::{
    ApplicationCommandUpdaterDelegate, DelegateFactory, DelegateFactoryExt, DelegateKind,
    DelegateRequest, Scope, ThreadOrigin,
};
use chat_client::domain::entities::Server;
use chat_client::domain::value_objects::{PermissionType, Permissions, Snowflake};
use chat_client::infrastructure::delegates::RestDelegateFactory;

use crate::common::{context, message, server, text_channel, MockTransport};

#[test]
fn test_rest_factory_produces_every_kind() {
    let report = conformance::probe(&RestDelegateFactory::new()).unwrap();

    assert_eq!(report.supported(), &DelegateKind::ALL[..]);
    assert!(report.unsupported().is_empty());
    assert!(report.mismatched().is_empty());
}

#[test]
fn test_created_delegate_reports_requested_kind() {
    let factory = RestDelegateFactory::new();
    let requests = [
        DelegateRequest::EmbedBuilder,
        DelegateRequest::RoleBuilder(Scope::new(server())),
        DelegateRequest::ThreadBuilderFromMessage(Scope::new(message(3, 4))),
    ];

    for request in requests {
        let kind = request.kind();
        assert_eq!(factory.create(request).unwrap().kind(), kind);
    }
}

#[test]
fn test_each_call_returns_a_fresh_delegate() {
    let ctx = context(MockTransport::new());

    let first = MessageBuilder::new(&ctx).unwrap().content("first");
    let second = MessageBuilder::new(&ctx).unwrap();

    assert_eq!(first.current_content(), "first");
    assert_eq!(second.current_content(), "");
}

#[test]
fn test_scoped_delegates_keep_their_context() {
    let factory = RestDelegateFactory::new();

    let role_builder = factory.create_role_builder_delegate(server()).unwrap();
    assert_eq!(role_builder.server().id, Snowflake::new(crate::common::SERVER_ID));

    let updater = factory
        .create_message_context_menu_updater_delegate(Snowflake::new(77))
        .unwrap();
    assert_eq!(updater.command_id(), Snowflake::new(77));
}

#[test_case(Permissions::empty() ; "empty")]
#[test_case(Permissions::allowing(&[PermissionType::SendMessages, PermissionType::AddReactions]) ; "allowed only")]
#[test_case(Permissions::new(PermissionType::ViewChannel.bit(), PermissionType::BanMembers.bit()) ; "allowed and denied")]
fn test_permissions_builder_round_trip(source: Permissions) {
    let ctx = context(MockTransport::new());
    let built = PermissionsBuilder::from_permissions(&ctx, source)
        .unwrap()
        .build();
    assert_eq!(built, source);
}

#[test]
fn test_permissions_builder_copies_source() {
    let ctx = context(MockTransport::new());
    let source = Permissions::allowing(&[PermissionType::SendMessages]);

    let built = PermissionsBuilder::from_permissions(&ctx, source)
        .unwrap()
        .deny(&[PermissionType::SendMessages])
        .build();

    assert_ne!(built, source);
    assert_eq!(source, Permissions::allowing(&[PermissionType::SendMessages]));
}

#[test]
fn test_thread_builder_origins() {
    let ctx = context(MockTransport::new());

    let from_channel = ThreadBuilder::from_channel(&ctx, text_channel(10)).unwrap();
    assert!(matches!(from_channel.origin(), ThreadOrigin::Channel(c) if c.id() == Snowflake::new(10)));

    let from_message = ThreadBuilder::from_message(&ctx, message(11, 12)).unwrap();
    assert!(matches!(from_message.origin(), ThreadOrigin::Message(m) if m.id == Snowflake::new(12)));
    assert_eq!(from_message.origin().channel_id(), Snowflake::new(11));
}

#[test]
fn test_command_updaters_are_keyed_by_id() {
    let ctx = context(MockTransport::new());

    let slash = SlashCommandUpdater::new(&ctx, Snowflake::new(5)).unwrap();
    let user = UserContextMenuUpdater::new(&ctx, Snowflake::new(6)).unwrap();

    assert_eq!(slash.command_id(), Snowflake::new(5));
    assert_eq!(user.command_id(), Snowflake::new(6));
}

#[test]
fn test_concurrent_construction_keeps_each_threads_parameters() {
    let factory: Arc<dyn DelegateFactory> = Arc::new(RestDelegateFactory::new());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8i64)
            .map(|thread| {
                let factory = Arc::clone(&factory);
                scope.spawn(move || {
                    let server = Arc::new(Server {
                        id: Snowflake::new(500 + thread),
                        ..Default::default()
                    });
                    let mut captured = Vec::new();
                    for round in 0..25i64 {
                        let command_id = Snowflake::new(thread * 1000 + round);
                        let updater = factory
                            .create_slash_command_updater_delegate(command_id)
                            .unwrap();
                        let builder = factory
                            .create_role_builder_delegate(Arc::clone(&server))
                            .unwrap();
                        captured.push((command_id, updater.command_id(), builder.server().id));
                    }
                    let conforming = conformance::probe(factory.as_ref()).unwrap().is_conforming();
                    (thread, captured, conforming)
                })
            })
            .collect();

        for handle in handles {
            let (thread, captured, conforming) = handle.join().unwrap();
            assert!(conforming);
            assert_eq!(captured.len(), 25);
            for (requested, command_id, server_id) in captured {
                assert_eq!(command_id, requested);
                assert_eq!(server_id, Snowflake::new(500 + thread));
            }
        }
    });
}
