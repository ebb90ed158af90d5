//! Multipart form intake
//!
//! Turns the submission form into a `SubmissionDraft`. Attachments are the
//! picker's concern: only the file name is kept, the body is never read, and
//! names outside the accepted extension list are dropped here.

use axum::extract::Multipart;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::filter::TagSelection;
use crate::submission::SubmissionDraft;

use super::error::AppError;

pub async fn read_draft(
    mut multipart: Multipart,
    catalog: &Catalog,
) -> Result<SubmissionDraft, AppError> {
    let mut draft = SubmissionDraft::default();
    let mut tags: Vec<String> = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == "attachments" {
            // Browsers send an empty part when no file was picked
            match field.file_name() {
                Some(file_name) if !file_name.is_empty() => {
                    if catalog.accepts_attachment(file_name) {
                        draft.attachments.push(file_name.to_string());
                    } else {
                        warn!(file_name, "dropping attachment with unaccepted extension");
                    }
                }
                _ => {}
            }
            continue;
        }

        let value = field.text().await?;
        match name.as_str() {
            "work_name" => draft.work_name = value,
            "author" => draft.author = value,
            "contact" => draft.contact = value,
            "category" => {
                draft.category = Some(value).filter(|v| !v.trim().is_empty());
            }
            "tag" => tags.push(value),
            "tech_stack" => draft.tech_stack = value,
            "application_field" => draft.application_field = value,
            "description" => draft.description = value,
            other => debug!(field = other, "ignoring unknown form field"),
        }
    }

    draft.tags = TagSelection::from_values(tags);
    Ok(draft)
}
