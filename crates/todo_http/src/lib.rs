//! HTTP transport for the todo list service.
//! Exposes the list and item services as a JSON REST API under `/api/todolists`.

mod error;
mod handlers;
mod middleware;
pub mod router;
pub mod server;
mod state;

pub use error::{ApiError, HttpServerError};
pub use router::build_router;
pub use server::HttpServer;
pub use state::AppState;
