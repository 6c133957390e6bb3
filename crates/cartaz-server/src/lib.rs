//! cartaz server library.
//!
//! An HTTP facade in front of the TMDB API: six read-only endpoints
//! that fetch upstream data and reshape it into a simplified pt-BR
//! field set. Stateless; nothing is cached or persisted between
//! requests.

/// Application configuration (TOML + environment).
pub mod config;
/// Error types and HTTP error mapping.
pub mod error;
/// Request handlers.
pub mod handlers;
/// Simplified output records.
pub mod models;
/// Pure upstream-to-output reshaping functions.
pub mod reshape;
/// Route table.
pub mod router;
/// Localized request selectors.
pub mod selectors;
/// Shared application state.
pub mod state;

pub use config::AppConfig;
pub use error::{AppError, Reply};
pub use router::create_router;
pub use state::AppState;
