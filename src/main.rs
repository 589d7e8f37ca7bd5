use anyhow::Result;
use resumatch::start_web_server;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("resumatch=info,rocket::server=off")),
        )
        .init();

    let port = match std::env::var("ROCKET_PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?,
        Err(_) => DEFAULT_PORT,
    };

    info!("Starting resume parsing and matching API");
    info!("Server: http://0.0.0.0:{}", port);

    start_web_server(port).await
}
