//! Checklist Service — standalone binary for a to-do list with a daily history view.
//!
//! Hosts both the JSON API and a dashboard UI.
//! Default: http://127.0.0.1:9104/

mod config;
mod dashboard;
mod error;
mod history;
mod items;
mod notes;
mod routes;

use config::Config;
use routes::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let state = Arc::new(AppState::new());
    let app = routes::router(state);

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    log::info!("Checklist Service listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
