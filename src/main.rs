use tracing::info;
use tracing_subscriber::EnvFilter;

use ponte::{config::Config, data::mock::MockStore, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config)
        .await
        .expect("Failed to connect to database");

    let state = AppState {
        db,
        mock: MockStore::new(),
    };

    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .expect("Failed to bind server address");

    info!("Starting server on {}", address);

    axum::serve(listener, router::routes().with_state(state))
        .await
        .expect("Server error");
}
