//! Facades render requests and run them through the context.

use serde_json::json;
use test_case::test_case;

use chat_client::application::facades::{
    InteractionMessageBuilder, MessageBuilder, ServerTextChannelBuilder, SlashCommandBuilder,
    WebhookMessageBuilder,
};
use chat_client::domain::delegates::InteractionCallbackType;
use chat_client::domain::entities::Webhook;
use chat_client::domain::rest::{RestMethod, RestResponse};
use chat_client::domain::value_objects::Snowflake;
use chat_client::shared::error::{ClientError, DelegateError, ErrorKind};

use crate::common::{context, server, MockTransport};

fn responding(status: u16, body: serde_json::Value) -> MockTransport {
    let mut transport = MockTransport::new();
    transport
        .expect_execute()
        .times(1)
        .returning(move |_| Ok(RestResponse::new(status, body.clone())));
    transport
}

#[tokio::test]
async fn test_message_send_renders_channel_route() {
    let mut transport = MockTransport::new();
    transport
        .expect_execute()
        .withf(|r| {
            r.method == RestMethod::Post
                && r.route == "/channels/9/messages"
                && r.authorized
                && r.body == Some(json!({ "content": "hi there" }))
        })
        .times(1)
        .returning(|_| Ok(RestResponse::new(200, json!({ "id": "55" }))));

    let ctx = context(transport);
    let response = MessageBuilder::new(&ctx)
        .unwrap()
        .content("hi")
        .append(" there")
        .send(Snowflake::new(9))
        .await
        .unwrap();

    assert_eq!(response.body["id"], "55");
}

#[test_case(400, json!({ "code": 50035, "message": "Invalid Form Body" }) => ErrorKind::BadRequest ; "bad request")]
#[test_case(401, json!({ "message": "401: Unauthorized" }) => ErrorKind::Unauthorized ; "unauthorized")]
#[test_case(403, json!({ "code": 50013 }) => ErrorKind::MissingPermissions ; "missing permissions")]
#[test_case(404, json!({ "message": "Unknown Channel" }) => ErrorKind::NotFound ; "not found")]
#[test_case(429, json!({ "retry_after": 0.5, "global": false }) => ErrorKind::RateLimited ; "rate limited")]
#[test_case(502, json!({}) => ErrorKind::ServerError ; "server error")]
#[tokio::test]
async fn test_error_responses_are_mapped(status: u16, body: serde_json::Value) -> ErrorKind {
    let ctx = context(responding(status, body));
    MessageBuilder::new(&ctx)
        .unwrap()
        .content("hello")
        .send(Snowflake::new(9))
        .await
        .unwrap_err()
        .kind()
}

#[tokio::test]
async fn test_transport_failure_propagates() {
    let mut transport = MockTransport::new();
    transport
        .expect_execute()
        .returning(|_| Err(ClientError::Transport("connection reset".into())));

    let ctx = context(transport);
    let err = SlashCommandBuilder::new(&ctx)
        .unwrap()
        .name("ping")
        .description("Check latency")
        .create_global()
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn test_invalid_builder_never_reaches_transport() {
    let mut transport = MockTransport::new();
    transport.expect_execute().never();

    let ctx = context(transport);
    let err = ServerTextChannelBuilder::new(&ctx, server())
        .unwrap()
        .name("x".repeat(101))
        .create()
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Delegate);
}

#[tokio::test]
async fn test_interaction_response_is_unauthorized() {
    let mut transport = MockTransport::new();
    transport
        .expect_execute()
        .withf(|r| r.route == "/interactions/3/tok/callback" && !r.authorized)
        .times(1)
        .returning(|_| Ok(RestResponse::new(204, json!({}))));

    let ctx = context(transport);
    InteractionMessageBuilder::new(&ctx)
        .unwrap()
        .content("pong")
        .ephemeral(true)
        .respond(Snowflake::new(3), "tok", InteractionCallbackType::ChannelMessageWithSource)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_webhook_message_needs_token() {
    let ctx = context(MockTransport::new());
    let webhook = Webhook {
        id: Snowflake::new(8),
        ..Default::default()
    };

    let err = WebhookMessageBuilder::new(&ctx)
        .unwrap()
        .content("deploy finished")
        .send(&webhook, true)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Delegate(DelegateError::MissingField("webhook.token"))
    ));
}

#[tokio::test]
async fn test_webhook_message_waits_for_result() {
    let mut transport = MockTransport::new();
    transport
        .expect_execute()
        .withf(|r| r.path_and_query() == "/webhooks/8/secret?wait=true")
        .times(1)
        .returning(|_| Ok(RestResponse::new(200, json!({ "id": "90" }))));

    let ctx = context(transport);
    let webhook = Webhook {
        id: Snowflake::new(8),
        token: Some("secret".into()),
        ..Default::default()
    };

    let response = WebhookMessageBuilder::new(&ctx)
        .unwrap()
        .content("deploy finished")
        .display_name("CI")
        .send(&webhook, true)
        .await
        .unwrap();
    assert_eq!(response.body["id"], "90");
}

#[test]
fn test_log_failure_passes_success_through() {
    let ctx = context(MockTransport::new());
    assert_eq!(ctx.log_failure(Ok::<_, ClientError>(5)), Some(5));
    assert_eq!(
        ctx.log_failure::<u8>(Err(ClientError::NotFound("Unknown Message".into()))),
        None
    );
}
