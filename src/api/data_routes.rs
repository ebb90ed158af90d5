//! JSON endpoints over the same catalog the page renders

use axum::{
    extract::{rejection::JsonRejection, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use url::form_urlencoded;
use uuid::Uuid;

use crate::catalog::{AwardSummary, DistributionEntry, Metric, ProjectRecord};
use crate::filter::{filter_projects, TagSelection};
use crate::submission::{SubmissionDraft, SubmissionOutcome};

use super::error::AppError;
use super::AppState;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub ideology_distribution: Vec<DistributionEntry>,
    pub project_types: Vec<DistributionEntry>,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Serialize)]
pub struct VocabularyResponse {
    pub ideology_tags: Vec<String>,
    pub categories: Vec<String>,
    pub accepted_extensions: Vec<String>,
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Project list, filtered by repeated `tag=` parameters
pub async fn list_projects(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Json<Vec<ProjectRecord>> {
    let tags = form_urlencoded::parse(query.as_deref().unwrap_or("").as_bytes())
        .filter(|(key, _)| key == "tag")
        .map(|(_, value)| value.into_owned());
    let selection = TagSelection::from_values(tags);

    let projects = filter_projects(state.catalog.projects(), &selection)
        .into_iter()
        .cloned()
        .collect();
    Json(projects)
}

pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        ideology_distribution: state.catalog.ideology_distribution().to_vec(),
        project_types: state.catalog.project_types().to_vec(),
        metrics: state.catalog.metrics().to_vec(),
    })
}

pub async fn awards(State(state): State<AppState>) -> Json<Vec<AwardSummary>> {
    Json(state.catalog.awards().to_vec())
}

pub async fn vocabulary(State(state): State<AppState>) -> Json<VocabularyResponse> {
    Json(VocabularyResponse {
        ideology_tags: state.catalog.ideology_vocabulary().to_vec(),
        categories: state.catalog.submission_categories().to_vec(),
        accepted_extensions: state.catalog.accepted_extensions().to_vec(),
    })
}

/// Validate a JSON draft. Nothing is stored either way.
///
/// Attachment names go through the same extension check as the form.
pub async fn check_submission(
    State(state): State<AppState>,
    payload: Result<Json<SubmissionDraft>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(mut draft) = payload?;
    draft.attachments.retain(|name| {
        let accepted = state.catalog.accepts_attachment(name);
        if !accepted {
            warn!(file_name = %name, "dropping attachment with unaccepted extension");
        }
        accepted
    });
    let outcome = draft.validate();

    let draft_id = Uuid::new_v4();
    info!(
        %draft_id,
        accepted = outcome.is_accepted(),
        attachments = draft.attachments.len(),
        "submission checked"
    );

    let status = match outcome {
        SubmissionOutcome::Accepted { .. } => StatusCode::OK,
        SubmissionOutcome::Rejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };
    Ok((status, Json(outcome)))
}
