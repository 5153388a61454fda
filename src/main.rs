use std::{env, sync::Arc};

use anyhow::Result;
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use festsite::fetch::HttpSheetSource;
use festsite::server;

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();
    info!("startup");

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    // ─── 2) wire the sheet source ────────────────────────────────────
    let client = Client::new();
    let source = Arc::new(HttpSheetSource::new(client));

    // ─── 3) serve ────────────────────────────────────────────────────
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    info!("health check: http://localhost:{}/health", port);
    info!("events endpoint: http://localhost:{}/api/events", port);

    warp::serve(server::routes(source))
        .run(([0, 0, 0, 0], port))
        .await;

    Ok(())
}
