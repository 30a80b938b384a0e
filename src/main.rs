//! Demo server for the faultline framework.
//!
//! Registers a handful of routes and handlers showing the dispatch policy:
//! route handlers run first, faults go to the exception mapper, and the
//! error mapper gets the final word on the status code in play.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use faultline::{App, Fault, FaultKind, HttpServer, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "faultline", about = "Demo server for the faultline framework")]
struct Args {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "faultline=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = match args.config {
        Some(path) => faultline::config::load_config(&path)?,
        None => ServerConfig::default(),
    };

    tracing::info!(
        bind_address = %config.bind_address,
        request_timeout_secs = config.request_timeout_secs,
        "Configuration loaded"
    );

    let app = App::new()
        .route("/", |ctx| {
            ctx.set_body("Hello from faultline");
            Ok(())
        })
        .route("/teapot", |ctx| {
            ctx.set_status(418);
            Ok(())
        })
        .route("/boom", |_| Err(Fault::runtime("demo fault")))
        .exception(FaultKind::Runtime, |fault, ctx| {
            ctx.set_status(500);
            ctx.set_body(format!("Recovered from: {}", fault.message()));
            Ok(())
        })
        .error(404, |ctx| {
            ctx.set_body("Nothing here");
            Ok(())
        });

    let listener = TcpListener::bind(&config.bind_address).await?;
    let server = HttpServer::new(app, config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
