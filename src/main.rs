use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checklist::{api, store::SessionStore};

#[derive(Parser)]
#[command(name = "checklist")]
#[command(about = "Session-backed checklist server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the checklist server
    Serve {
        /// Port for the HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "checklist=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let port = match cli.command {
        Some(Commands::Serve { port }) => port,
        None => 3000,
    };

    let store = SessionStore::new();
    let app = api::create_router(store);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Checklist server listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
