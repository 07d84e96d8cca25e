//! OpenAPI document for the HTTP API.

use utoipa::OpenApi;

use super::handlers::{self, HealthResponse, WelcomeResponse};
use crate::sales::{GrowthRecord, KpiSummary, SalesRecord};

/// OpenAPI description served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(title = "Sales Dashboard API", description = "Read-only monthly sales, KPI and growth endpoints"),
    paths(
        handlers::root,
        handlers::health,
        handlers::sales,
        handlers::kpi,
        handlers::month_pct,
    ),
    components(schemas(SalesRecord, GrowthRecord, KpiSummary, WelcomeResponse, HealthResponse)),
    tags(
        (name = "sales", description = "Sales data queries"),
        (name = "meta", description = "Liveness endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();

        for path in ["/", "/health", "/api/sales", "/api/kpi", "/api/month_pct"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
