//! HTTP handlers for the low-stock alert report

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::alert::AlertService;
use crate::AppState;

#[derive(Deserialize)]
pub struct ReportQuery {
    pub format: Option<String>, // "json" or "csv"
}

/// Compute the low-stock alert report for a company
pub async fn get_low_stock_alerts(
    State(state): State<AppState>,
    Path(company_id): Path<i64>,
    Query(query): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let service = AlertService::new(state.db);
    let report = service.low_stock_report(company_id).await?;

    if query.format.as_deref() == Some("csv") {
        let csv = AlertService::export_to_csv(&report.alerts)?;
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"low_stock_alerts.csv\"",
                ),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(report).into_response())
    }
}
