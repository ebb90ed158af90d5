//! Showcase page routes - server-rendered HTML

use axum::{
    extract::{Multipart, RawQuery, State},
    response::{Html, Redirect},
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::ui::pages::{self, SubmissionView, SHOWCASE_PATH};
use crate::view_state::{Tab, ViewState};

use super::error::AppError;
use super::intake;
use super::AppState;

pub async fn index() -> Redirect {
    Redirect::to(SHOWCASE_PATH)
}

pub async fn showcase(State(state): State<AppState>, RawQuery(query): RawQuery) -> Html<String> {
    let view = ViewState::from_query(query.as_deref(), &state.catalog);
    debug!(
        tab = view.tab.as_str(),
        tags = ?view.selection.tags(),
        "rendering showcase"
    );
    Html(pages::showcase_page(&state.catalog, &view, None))
}

/// Check a submitted form and show the result inline on the submit tab.
///
/// The viewer's filter rides along in the form's query string. The draft is
/// dropped when this returns.
pub async fn submit(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let draft = intake::read_draft(multipart, &state.catalog).await?;
    let outcome = draft.validate();

    let draft_id = Uuid::new_v4();
    info!(
        %draft_id,
        accepted = outcome.is_accepted(),
        attachments = draft.attachments.len(),
        "submission checked"
    );

    let mut view = ViewState::from_query(query.as_deref(), &state.catalog);
    view.tab = Tab::Submit;
    let submission = SubmissionView {
        draft: &draft,
        outcome: &outcome,
    };
    Ok(Html(pages::showcase_page(&state.catalog, &view, Some(submission))))
}
