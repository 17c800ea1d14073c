/// Every way a single alert invocation can fail.
///
/// All variants collapse into [`crate::outcome::InvocationOutcome::Error`]
/// at the pipeline boundary; the variant only shapes the message.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("Network failure: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Notification provider call failed: {0}")]
    ProviderCall(String),
}
