//! Web layer for the route finder.
//!
//! Exposes station listings, direct connections and shortest-route search
//! over HTTP.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
