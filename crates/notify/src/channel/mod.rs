//! Concrete notification channels.

pub mod email;
pub mod sms;

use aws_sdk_ses::error::ProvideErrorMetadata;

/// Render an SDK error as `Code: message`, falling back to the error's
/// source chain when the service sent no metadata (dispatch or timeout
/// failures).
pub(crate) fn describe_sdk_error<E>(err: &E) -> String
where
    E: ProvideErrorMetadata + std::error::Error,
{
    match (err.code(), err.message()) {
        (Some(code), Some(message)) => format!("{code}: {message}"),
        (Some(code), None) => code.to_string(),
        _ => {
            let mut text = err.to_string();
            let mut source = err.source();
            while let Some(cause) = source {
                text.push_str(": ");
                text.push_str(&cause.to_string());
                source = cause.source();
            }
            text
        }
    }
}
