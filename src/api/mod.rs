//! HTTP API module for the sales, KPI and growth endpoints.

pub mod cors;
pub mod docs;
pub mod handlers;
pub mod routes;

pub use cors::cors_layer;
pub use docs::ApiDoc;
pub use handlers::{AppState, MonthRangeQuery};
pub use routes::create_router;
