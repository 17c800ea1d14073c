//! `weather-alert` -- one temperature alert invocation per run.
//!
//! Meant to be started by an external scheduler (cron, EventBridge, ...).
//! Fetches the latest KOXR observation, and if the temperature meets
//! `TEMP_THRESHOLD_F`, sends an email (SES) or SMS (SNS) alert. The outcome
//! is printed to stdout as a single JSON object; logs go to stderr.
//!
//! The optional first argument is the trigger payload. It is accepted and
//! ignored.
//!
//! See `weather_alert_core::config` for the environment variables.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_alert_core::InvocationContext;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_alert=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let payload = std::env::args().nth(1);
    let ctx = InvocationContext::from_raw(payload.as_deref());

    tracing::info!("Starting weather alert invocation");

    let outcome = weather_alert_pipeline::run_invocation(&ctx, |key| std::env::var(key).ok()).await;

    match serde_json::to_string(&outcome) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!(error = %e, "Could not serialise invocation outcome"),
    }
}
