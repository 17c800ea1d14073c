//! Integration tests for the SES and SNS channels against an in-process
//! stand-in for the AWS query API.
//!
//! Each test points an `SdkConfig` (static credentials, retries disabled) at
//! a local axum server that answers every `POST /` with a canned XML body.

use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_credential_types::Credentials;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;

use weather_alert_core::{
    AlertError, ChannelKind, Destination, NotificationChannel, NotificationRequest,
};
use weather_alert_notify::{DeliveryError, SesEmailChannel, SnsSmsChannel};

// ---------------------------------------------------------------------------
// Stand-in server
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct CannedResponse {
    status: StatusCode,
    body: &'static str,
    requests: Arc<Mutex<Vec<String>>>,
}

async fn answer(State(canned): State<CannedResponse>, body: String) -> impl IntoResponse {
    canned.requests.lock().unwrap().push(body);
    (
        canned.status,
        [(header::CONTENT_TYPE, "text/xml")],
        canned.body,
    )
}

/// Serve `body` with `status` and return the endpoint URL plus the log of
/// received request bodies.
async fn serve(status: StatusCode, body: &'static str) -> (String, Arc<Mutex<Vec<String>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().route("/", post(answer)).with_state(CannedResponse {
        status,
        body,
        requests: requests.clone(),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), requests)
}

fn sdk_config(endpoint: &str) -> aws_config::SdkConfig {
    aws_config::SdkConfig::builder()
        .region(aws_config::Region::new("us-west-1"))
        .behavior_version(aws_config::BehaviorVersion::latest())
        .credentials_provider(SharedCredentialsProvider::new(Credentials::new(
            "AKIDEXAMPLE",
            "test-secret",
            None,
            None,
            "channel-tests",
        )))
        .retry_config(aws_config::retry::RetryConfig::disabled())
        .endpoint_url(endpoint)
        .build()
}

fn email_request() -> NotificationRequest {
    Destination::Email {
        recipient: "me@example.com".to_string(),
    }
    .compose(50.0)
}

fn sms_request() -> NotificationRequest {
    Destination::Sms {
        phone_number: "+18055550100".to_string(),
    }
    .compose(50.0)
}

// ---------------------------------------------------------------------------
// Test: SES
// ---------------------------------------------------------------------------

const SES_SENT: &str = r#"<SendEmailResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <SendEmailResult>
    <MessageId>0100018f-ses-0001</MessageId>
  </SendEmailResult>
  <ResponseMetadata>
    <RequestId>5f3c1a4e-0000-0000-0000-000000000001</RequestId>
  </ResponseMetadata>
</SendEmailResponse>"#;

const SES_REJECTED: &str = r#"<ErrorResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <Error>
    <Type>Sender</Type>
    <Code>MessageRejected</Code>
    <Message>Email address is not verified.</Message>
  </Error>
  <RequestId>5f3c1a4e-0000-0000-0000-000000000002</RequestId>
</ErrorResponse>"#;

#[tokio::test]
async fn ses_send_returns_message_id() {
    let (endpoint, requests) = serve(StatusCode::OK, SES_SENT).await;
    let channel = SesEmailChannel::new(&sdk_config(&endpoint), "alerts@example.com".to_string());

    let message_id = channel.send(&email_request()).await.unwrap();

    assert_eq!(message_id, "0100018f-ses-0001");
    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].contains("Action=SendEmail"));
    assert!(requests[0].contains("Destination.ToAddresses.member.1="));
}

#[tokio::test]
async fn ses_rejection_is_provider_call_failure() {
    let (endpoint, requests) = serve(StatusCode::BAD_REQUEST, SES_REJECTED).await;
    let channel = SesEmailChannel::new(&sdk_config(&endpoint), "alerts@example.com".to_string());

    let err = channel.deliver(&email_request()).await.unwrap_err();
    assert_matches!(
        err,
        DeliveryError::Provider { provider: "SES", operation: "SendEmail", ref detail }
            if detail == "MessageRejected: Email address is not verified."
    );

    let err = channel.send(&email_request()).await.unwrap_err();
    assert_matches!(
        err,
        AlertError::ProviderCall(ref msg)
            if msg.contains("MessageRejected") && msg.contains("not verified")
    );

    // One request per call: no retries.
    assert_eq!(requests.lock().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Test: SNS
// ---------------------------------------------------------------------------

const SNS_PUBLISHED: &str = r#"<PublishResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
  <PublishResult>
    <MessageId>94f20ce6-13c5-43a0-9a9e-ca52d816e90b</MessageId>
  </PublishResult>
  <ResponseMetadata>
    <RequestId>f187a3c1-0000-0000-0000-000000000001</RequestId>
  </ResponseMetadata>
</PublishResponse>"#;

const SNS_NO_MESSAGE_ID: &str = r#"<PublishResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
  <PublishResult>
  </PublishResult>
  <ResponseMetadata>
    <RequestId>f187a3c1-0000-0000-0000-000000000002</RequestId>
  </ResponseMetadata>
</PublishResponse>"#;

#[tokio::test]
async fn sns_publish_returns_message_id() {
    let (endpoint, requests) = serve(StatusCode::OK, SNS_PUBLISHED).await;
    let channel = SnsSmsChannel::new(&sdk_config(&endpoint));

    let message_id = channel.send(&sms_request()).await.unwrap();

    assert_eq!(message_id, "94f20ce6-13c5-43a0-9a9e-ca52d816e90b");
    assert_eq!(channel.kind(), ChannelKind::Sms);
    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].contains("Action=Publish"));
    assert!(requests[0].contains("PhoneNumber="));
}

#[tokio::test]
async fn sns_response_without_message_id_is_rejected() {
    let (endpoint, _requests) = serve(StatusCode::OK, SNS_NO_MESSAGE_ID).await;
    let channel = SnsSmsChannel::new(&sdk_config(&endpoint));

    let err = channel.deliver(&sms_request()).await.unwrap_err();
    assert_matches!(err, DeliveryError::MissingMessageId { provider: "SNS" });

    let err = channel.send(&sms_request()).await.unwrap_err();
    assert_matches!(err, AlertError::ProviderCall(ref msg) if msg == "SNS returned no message id");
}
