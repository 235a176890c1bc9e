// Podrss - podcast search proxy and RSS link finder

pub mod client;    // HTTP client for the search proxy (used by the TUI)
pub mod config;
pub mod feed;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod search;    // Podwise upstream client and exact-match selection
pub mod tui;       // Terminal User Interface
pub mod types;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
