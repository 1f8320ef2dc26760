use std::env;

use tracing_subscriber::EnvFilter;

use dosalabs_lambda::router;
use dosalabs_lambda::state::AppState;
use dosalabs_mailer::Mailer;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("DOSALABS_BUCKET").unwrap_or_else(|_| "dosalabs".to_string());

    let s3 = dosalabs_storage::client::build_client().await;
    let mailer = Mailer::from_env()?;

    let state = AppState { s3, bucket, mailer };

    lambda_http::run(router(state)).await.map_err(|e| eyre::eyre!(e))
}
