//! HTTP API handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use crate::error::Result;
use crate::metrics::{add_months_served, RequestTimer};
use crate::sales::{GrowthRecord, KpiSummary, SalesDataset, SalesRecord};

/// Greeting returned by the root endpoint.
pub const WELCOME_MESSAGE: &str = "欢迎来到销售数据后端！";

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only sales table.
    pub dataset: Arc<SalesDataset>,
    /// Prometheus handle, if a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state over a dataset.
    pub fn new(dataset: SalesDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// App state over the built-in dataset.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(SalesDataset::builtin()?))
    }
}

/// Optional month bounds for range queries.
///
/// Built from the raw query pairs so a repeated key takes its last value.
#[derive(Debug, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MonthRangeQuery {
    /// First month to include (e.g., "三月"). Unknown labels are ignored.
    pub start_month: Option<String>,
    /// Last month to include. Unknown labels are ignored.
    pub end_month: Option<String>,
}

impl FromIterator<(String, String)> for MonthRangeQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "start_month" => query.start_month = Some(value),
                "end_month" => query.end_month = Some(value),
                _ => {}
            }
        }
        query
    }
}

/// Root endpoint response.
#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResponse {
    /// Greeting text.
    #[schema(value_type = String)]
    pub message: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "ok".
    #[schema(value_type = String)]
    pub status: &'static str,
}

/// Root handler - welcome message.
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses((status = 200, description = "Welcome message", body = WelcomeResponse))
)]
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    tag = "meta",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Sales records within a month range.
#[utoipa::path(
    get,
    path = "/api/sales",
    tag = "sales",
    params(MonthRangeQuery),
    responses((status = 200, description = "Sales per month in catalog order", body = Vec<SalesRecord>))
)]
pub async fn sales(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<SalesRecord>> {
    let _timer = RequestTimer::new("sales");

    let query: MonthRangeQuery = pairs.into_iter().collect();
    let range = state
        .dataset
        .select_range(query.start_month.as_deref(), query.end_month.as_deref());
    let records = state.dataset.sales_in_range(range);

    add_months_served("sales", records.len());
    Json(records)
}

/// Total sales KPI over the whole dataset.
#[utoipa::path(
    get,
    path = "/api/kpi",
    tag = "sales",
    responses((status = 200, description = "Headline KPIs", body = KpiSummary))
)]
pub async fn kpi(State(state): State<AppState>) -> Json<KpiSummary> {
    let _timer = RequestTimer::new("kpi");

    let summary = state.dataset.kpi();
    debug!(total_sales = summary.total_sales, "Computed KPI summary");
    Json(summary)
}

/// Month-over-month growth within a month range.
#[utoipa::path(
    get,
    path = "/api/month_pct",
    tag = "sales",
    params(MonthRangeQuery),
    responses((status = 200, description = "Growth rate (%) per month in catalog order", body = Vec<GrowthRecord>))
)]
pub async fn month_pct(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<GrowthRecord>> {
    let _timer = RequestTimer::new("month_pct");

    let query: MonthRangeQuery = pairs.into_iter().collect();
    let range = state
        .dataset
        .select_range(query.start_month.as_deref(), query.end_month.as_deref());
    let records = state.dataset.growth_in_range(range);

    add_months_served("month_pct", records.len());
    Json(records)
}

/// Prometheus exposition - 404 when no recorder is installed.
pub async fn metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => handle.render().into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DatasetError, ServerError};
    use metrics_exporter_prometheus::PrometheusBuilder;

    fn pairs(items: &[(&str, &str)]) -> Query<Vec<(String, String)>> {
        Query(
            items
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn builtin_state_loads_checked_dataset() {
        let state = AppState::builtin().unwrap();
        assert_eq!(state.dataset.len(), 12);
        assert!(state.metrics.is_none());
    }

    #[test]
    fn dataset_errors_convert_to_server_errors() {
        let err: ServerError = DatasetError::Empty.into();
        assert!(matches!(err, ServerError::Dataset(DatasetError::Empty)));
    }

    #[test]
    fn repeated_query_keys_keep_last_value() {
        let query: MonthRangeQuery = vec![
            ("end_month".to_string(), "一月".to_string()),
            ("start_month".to_string(), "三月".to_string()),
            ("end_month".to_string(), "二月".to_string()),
            ("other".to_string(), "x".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            query,
            MonthRangeQuery {
                start_month: Some("三月".to_string()),
                end_month: Some("二月".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn kpi_handler_returns_total() {
        let Json(summary) = kpi(State(AppState::builtin().unwrap())).await;
        assert_eq!(summary.total_sales, 5210);
    }

    #[tokio::test]
    async fn sales_handler_without_bounds_returns_year() {
        let Json(records) = sales(State(AppState::builtin().unwrap()), pairs(&[])).await;
        assert_eq!(records.len(), 12);
    }

    #[tokio::test]
    async fn sales_handler_uses_last_repeated_bound() {
        let query = pairs(&[("end_month", "一月"), ("end_month", "二月")]);

        let Json(records) = sales(State(AppState::builtin().unwrap()), query).await;
        let months: Vec<_> = records.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, vec!["一月", "二月"]);
    }

    #[tokio::test]
    async fn month_pct_handler_ignores_unknown_labels() {
        let query = pairs(&[("start_month", "Smarch"), ("end_month", "二月")]);

        let Json(records) = month_pct(State(AppState::builtin().unwrap()), query).await;
        let months: Vec<_> = records.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, vec!["一月", "二月"]);
    }

    #[tokio::test]
    async fn metrics_handler_without_recorder_is_not_found() {
        let response = metrics(State(AppState::builtin().unwrap())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn metrics_handler_renders_prometheus_text() {
        let handle = PrometheusBuilder::new().build_recorder().handle();
        let state = AppState::builtin().unwrap().with_metrics(handle);

        let response = metrics(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers()[axum::http::header::CONTENT_TYPE]
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("text/plain"), "got {content_type}");
    }
}
