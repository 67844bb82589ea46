//! API request handlers
//!
//! Handlers for all REST API endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::config::EstimateConfig;
use crate::error::{EstimateError, EstimateResult};
use crate::excel::XlsxEncoder;
use crate::formula::WorkbookEvaluator;
use crate::layout::{ExportOutcome, ReportLayoutEngine};
use crate::types::{EstimationRequest, FlatExportRequest};

use super::server::AppState;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Bytes escaped in `filename*`: all but the RFC 3986 unreserved characters.
const FILENAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Root endpoint response
#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

impl EndpointInfo {
    fn new(path: &str, method: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_string(),
            description: description.to_string(),
        }
    }
}

/// GET / - Root info
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = RootResponse {
        name: "Estimate API Server".to_string(),
        version: state.version.clone(),
        description: "Cost-estimate workbook generation over HTTP".to_string(),
        endpoints: vec![
            EndpointInfo::new("/health", "GET", "Health check endpoint"),
            EndpointInfo::new("/version", "GET", "Get server version"),
            EndpointInfo::new(
                "/api/v1/export",
                "POST",
                "Flat item list to an .xlsx estimate",
            ),
            EndpointInfo::new(
                "/api/v1/layout",
                "POST",
                "Row map of the estimate without the workbook",
            ),
        ],
    };
    Json(ApiResponse::ok(response))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_message: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
        uptime_message: "Server is running".to_string(),
    }))
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub features: Vec<String>,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
        features: vec!["export".to_string(), "layout".to_string()],
    }))
}

/// Group the flat rows, validate, and run one engine for this request only.
fn run_export(
    request: FlatExportRequest,
    config: EstimateConfig,
) -> EstimateResult<(EstimationRequest, ExportOutcome)> {
    let request = request.into_hierarchy()?;
    let engine = ReportLayoutEngine::new(config);
    let mut evaluator = WorkbookEvaluator::new();
    let outcome = engine.export(&request, &mut evaluator)?;
    Ok((request, outcome))
}

async fn run_blocking<T, F>(job: F) -> EstimateResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> EstimateResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| EstimateError::Write(format!("export task failed: {}", e)))?
}

fn error_response(err: EstimateError) -> Response {
    let status = match err {
        EstimateError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        _ => {
            error!("Export failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ApiResponse::<()>::err(err.to_string()))).into_response()
}

/// Malformed or mistyped request bodies get the same envelope as other 400s.
fn rejection_response(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::err(rejection.body_text())),
    )
        .into_response()
}

/// `Content-Disposition` for `{project}_估價單.xlsx`.
///
/// The ASCII `filename` is a fallback; `filename*` carries the UTF-8 name.
pub fn content_disposition(project_name: &str) -> String {
    let file_name = format!("{}_估價單.xlsx", project_name);
    format!(
        "attachment; filename=\"estimate.xlsx\"; filename*=UTF-8''{}",
        utf8_percent_encode(&file_name, FILENAME_ENCODE_SET)
    )
}

/// POST /api/v1/export - Flat item list to an .xlsx estimate
pub async fn export(
    State(state): State<Arc<AppState>>,
    body: Result<Json<FlatExportRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };
    let config = state.config.clone();
    let font_size = config.font_size_pt;

    let result = run_blocking(move || {
        let (request, outcome) = run_export(req, config)?;
        let bytes = XlsxEncoder::new(font_size).encode(&outcome.workbook)?;
        Ok((request.project_name, bytes))
    })
    .await;

    let (project_name, bytes) = match result {
        Ok(done) => done,
        Err(e) => return error_response(e),
    };

    let disposition = match HeaderValue::from_str(&content_disposition(&project_name)) {
        Ok(value) => value,
        Err(e) => return error_response(EstimateError::Write(e.to_string())),
    };

    info!(
        "Exported estimate for '{}' ({} bytes)",
        project_name,
        bytes.len()
    );
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(XLSX_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response()
}

/// One summary category row and the detail subtotal it links to
#[derive(Serialize, Default, Debug, PartialEq)]
pub struct CategoryRow {
    pub name: String,
    pub summary_row: u32,
    pub detail_subtotal_row: u32,
}

/// Layout response (1-based row numbers)
#[derive(Serialize, Default, Debug)]
pub struct LayoutResponse {
    pub project_name: String,
    pub categories: Vec<CategoryRow>,
    pub subtotal_row: u32,
    pub other_fee_row: u32,
    pub running_total_row: u32,
    pub tax_row: u32,
    pub grand_total_row: u32,
    pub amount_in_words_row: u32,
    pub amount_in_words: Option<String>,
}

impl LayoutResponse {
    fn from_outcome(request: &EstimationRequest, outcome: &ExportOutcome) -> Self {
        let summary = &outcome.summary;
        let categories = request
            .middle_categories()
            .zip(&outcome.detail_subtotal_rows)
            .map(|((index, middle), detail_row)| CategoryRow {
                name: middle.name.clone(),
                summary_row: summary.category_row(index as u32),
                detail_subtotal_row: *detail_row,
            })
            .collect();

        Self {
            project_name: request.project_name.clone(),
            categories,
            subtotal_row: summary.subtotal_row(),
            other_fee_row: summary.other_fee_row(),
            running_total_row: summary.running_total_row(),
            tax_row: summary.tax_row(),
            grand_total_row: summary.grand_total_row(),
            amount_in_words_row: outcome.amount_in_words_row(),
            amount_in_words: outcome.amount_in_words.clone(),
        }
    }
}

/// POST /api/v1/layout - Row map without the workbook
pub async fn layout(
    State(state): State<Arc<AppState>>,
    body: Result<Json<FlatExportRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };
    let config = state.config.clone();
    let result = run_blocking(move || {
        let (request, outcome) = run_export(req, config)?;
        Ok(LayoutResponse::from_outcome(&request, &outcome))
    })
    .await;

    match result {
        Ok(layout) => Json(ApiResponse::ok(layout)).into_response(),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::extract::FromRequest;
    use axum::http::Request;

    fn state() -> Arc<AppState> {
        Arc::new(AppState {
            version: "1.0.0".to_string(),
            config: EstimateConfig::default(),
        })
    }

    fn flat_request(json: &str) -> FlatExportRequest {
        serde_json::from_str(json).unwrap()
    }

    async fn extract_body(body: &'static str) -> Result<Json<FlatExportRequest>, JsonRejection> {
        let request = Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        Json::<FlatExportRequest>::from_request(request, &()).await
    }

    const TWO_CATEGORIES: &str = r#"{
        "projectName": "Test",
        "items": [
            {"majorCategory": "A", "middleCategory": "Concrete", "name": "Slab", "unit": "m3", "quantity": "10"},
            {"majorCategory": "A", "middleCategory": "Steel", "name": "Rebar", "unit": "t", "quantity": "3"}
        ]
    }"#;

    // ==================== ApiResponse Tests ====================

    #[test]
    fn test_api_response_ok_creates_success_response() {
        let response: ApiResponse<String> = ApiResponse::ok("test data".to_string());

        assert!(response.success);
        assert_eq!(response.data, Some("test data".to_string()));
        assert!(response.error.is_none());
        // UUID format (8-4-4-4-12)
        assert_eq!(response.request_id.len(), 36);
    }

    #[test]
    fn test_api_response_err_serializes_without_data() {
        let response: ApiResponse<String> = ApiResponse::err("error message");
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("\"data\""));
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"error\":\"error message\""));
    }

    #[test]
    fn test_api_response_request_id_is_unique() {
        let response1: ApiResponse<String> = ApiResponse::ok("test1".to_string());
        let response2: ApiResponse<String> = ApiResponse::ok("test2".to_string());

        assert_ne!(response1.request_id, response2.request_id);
    }

    // ==================== Content-Disposition Tests ====================

    #[test]
    fn test_content_disposition_encodes_utf8_name() {
        let value = content_disposition("A B");
        assert_eq!(
            value,
            "attachment; filename=\"estimate.xlsx\"; \
             filename*=UTF-8''A%20B_%E4%BC%B0%E5%83%B9%E5%96%AE.xlsx"
        );
        assert!(HeaderValue::from_str(&value).is_ok());

        assert!(content_disposition("a-b.c_d~e").contains("UTF-8''a-b.c_d~e_"));
        assert!(content_disposition("x/y;z").contains("UTF-8''x%2Fy%3Bz_"));
    }

    // ==================== Handler Tests ====================

    #[tokio::test]
    async fn test_export_returns_workbook() {
        let response = export(State(state()), Ok(Json(flat_request(TWO_CATEGORIES)))).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            XLSX_CONTENT_TYPE
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn test_export_rejects_empty_request() {
        let request = flat_request(r#"{"projectName": "Test", "items": []}"#);
        let response = export(State(state()), Ok(Json(request))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("no line items"));
    }

    #[tokio::test]
    async fn test_malformed_body_gets_error_envelope() {
        let response = export(State(state()), extract_body("{ not json").await).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["request_id"].as_str().unwrap().len(), 36);
        assert!(!json["error"].as_str().unwrap().is_empty());

        let response = layout(State(state()), extract_body(r#"{"items": 3}"#).await).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_layout_reports_rows() {
        let response = layout(State(state()), Ok(Json(flat_request(TWO_CATEGORIES)))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let data = &json["data"];
        assert_eq!(data["categories"][0]["summary_row"], 4);
        assert_eq!(data["categories"][1]["summary_row"], 5);
        assert_eq!(data["grand_total_row"], 10);
        assert_eq!(data["amount_in_words_row"], 32);
        assert_eq!(data["amount_in_words"], "零元整");
    }

    // ==================== Response Struct Tests ====================

    #[test]
    fn test_version_response_serialize() {
        let response = VersionResponse {
            version: "1.0.0".to_string(),
            features: vec!["export".to_string(), "layout".to_string()],
        };
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"version\":\"1.0.0\""));
        assert!(json.contains("\"features\":[\"export\",\"layout\"]"));
    }

    #[test]
    fn test_layout_response_default() {
        let response = LayoutResponse::default();
        assert!(response.categories.is_empty());
        assert!(response.amount_in_words.is_none());
    }
}
