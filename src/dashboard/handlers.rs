//! Dashboard request handlers.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use log::{error, info};

use crate::report::pdf::{generate_pdf_report, report_file_name};
use crate::scanner::{analyze_site, ScanResult};
use crate::storage::ScanRecord;

use super::templates::{render_page, PageContent};
use super::types::{DashboardState, IndexParams, ScanForm};

/// Handler failure rendered as a 500 with the error chain as text.
pub(crate) struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Dashboard request failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Dashboard error: {:#}", self.0),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(e: E) -> Self {
        AppError(e.into())
    }
}

/// `GET /`: form, history table and chart.
pub(crate) async fn index(
    State(state): State<DashboardState>,
    Query(params): Query<IndexParams>,
) -> Result<Html<String>, AppError> {
    let history = state.store.list_recent(state.history_limit).await?;
    let content = PageContent {
        notice: params.cleared.then_some("History cleared."),
        ..Default::default()
    };
    Ok(Html(render_page(&state.templates, &content, &history)?))
}

/// `POST /scan`: runs one scan and records it when it succeeds.
pub(crate) async fn scan(
    State(state): State<DashboardState>,
    Form(form): Form<ScanForm>,
) -> Result<Html<String>, AppError> {
    let input = form.url.trim();
    if input.is_empty() {
        let history = state.store.list_recent(state.history_limit).await?;
        let content = PageContent {
            notice: Some("Enter a URL to scan."),
            ..Default::default()
        };
        return Ok(Html(render_page(&state.templates, &content, &history)?));
    }

    let result = analyze_site(&state.client, input).await;
    let html = match result {
        ScanResult::Completed(report) => {
            state.store.add_report(&report).await?;
            *state.last_report.lock().await = Some(report.clone());
            let history = state.store.list_recent(state.history_limit).await?;
            let content = PageContent {
                input_url: input,
                scan: Some(&report),
                ..Default::default()
            };
            render_page(&state.templates, &content, &history)?
        }
        ScanResult::Failed(failure) => {
            let history = state.store.list_recent(state.history_limit).await?;
            let content = PageContent {
                input_url: input,
                error: Some(failure.error.as_str()),
                ..Default::default()
            };
            render_page(&state.templates, &content, &history)?
        }
    };
    Ok(Html(html))
}

/// `GET /report.pdf`: PDF of the last successful scan.
pub(crate) async fn report_pdf(State(state): State<DashboardState>) -> Result<Response, AppError> {
    let last = state.last_report.lock().await;
    let Some(report) = last.as_ref() else {
        return Ok((StatusCode::NOT_FOUND, "No scan to report yet.").into_response());
    };

    let bytes = generate_pdf_report(report)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        report_file_name(&report.url)
    );
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// `POST /clear`: empties the history.
pub(crate) async fn clear(State(state): State<DashboardState>) -> Result<Redirect, AppError> {
    let removed = state.store.clear().await?;
    info!("Dashboard cleared {removed} history rows");
    Ok(Redirect::to("/?cleared=true"))
}

/// `GET /api/history`: recent history as JSON.
pub(crate) async fn api_history(
    State(state): State<DashboardState>,
) -> Result<Json<Vec<ScanRecord>>, AppError> {
    Ok(Json(state.store.list_recent(state.history_limit).await?))
}
