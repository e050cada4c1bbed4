use schoolapp::infrastructure;
use schoolapp::infrastructure::state::AppState;
use schoolapp::presentation;

use anyhow::Context;
use dotenvy::dotenv;
use std::env;
use std::future::Future;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loaded before APP_PORT is read; `run` relies on it too
    dotenv().ok();
    run_with_signal(app_port()).await
}

/// `APP_PORT`, falling back to 3000 when unset or invalid.
fn app_port() -> u16 {
    env::var("APP_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

async fn run_with_signal(port: u16) -> anyhow::Result<()> {
    run(port, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run<F>(port: u16, shutdown_signal: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    // Tests call this repeatedly, so a second init is not an error
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "schoolapp=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let (listener, app) = bootstrap(&database_url, port).await?;

    tracing::info!("schoolapp listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    Ok(())
}

async fn bootstrap(
    database_url: &str,
    port: u16,
) -> anyhow::Result<(tokio::net::TcpListener, axum::Router)> {
    let pool = infrastructure::db::create_pool(database_url).await?;

    sqlx::migrate!().run(&pool).await?;

    let app = presentation::router::app(AppState::new(pool))?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    Ok((listener, app))
}
