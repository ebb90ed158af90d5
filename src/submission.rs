//! Submission form validation
//!
//! A draft lives only for one request. Validation is a single pass/fail check
//! on the three required text fields; the result is rendered and the draft is
//! dropped. Nothing is stored.

use serde::{Deserialize, Serialize};

use crate::filter::TagSelection;

pub const SUCCESS_PREFIX: &str = "🎉 作品提交成功！";
pub const SUCCESS_NO_FILES: &str = "🎉 作品提交成功！我们将尽快审核您的作品。";
pub const MISSING_REQUIRED: &str = "❌ 请填写作品名称、作者姓名和作品描述等必填信息";

/// Ephemeral form contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionDraft {
    pub work_name: String,
    pub author: String,
    /// Solicited but not enforced
    pub contact: String,
    pub category: Option<String>,
    pub tags: TagSelection,
    pub tech_stack: String,
    pub application_field: String,
    pub description: String,
    /// Names of attached files, in upload order
    pub attachments: Vec<String>,
}

/// Fields that must be filled before a draft is acknowledged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    WorkName,
    /// Reported under the same key the draft uses
    #[serde(rename = "author")]
    AuthorName,
    Description,
}

impl RequiredField {
    pub const ALL: [RequiredField; 3] = [
        RequiredField::WorkName,
        RequiredField::AuthorName,
        RequiredField::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::WorkName => "作品名称",
            RequiredField::AuthorName => "作者姓名",
            RequiredField::Description => "作品描述",
        }
    }

    fn value<'a>(&self, draft: &'a SubmissionDraft) -> &'a str {
        match self {
            RequiredField::WorkName => &draft.work_name,
            RequiredField::AuthorName => &draft.author,
            RequiredField::Description => &draft.description,
        }
    }

    pub fn is_filled(&self, draft: &SubmissionDraft) -> bool {
        !self.value(draft).is_empty()
    }
}

/// Result of checking a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Accepted {
        message: String,
        attachments: Vec<String>,
    },
    Rejected {
        message: String,
        missing: Vec<RequiredField>,
    },
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            SubmissionOutcome::Accepted { message, .. } => message,
            SubmissionOutcome::Rejected { message, .. } => message,
        }
    }
}

impl SubmissionDraft {
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        RequiredField::ALL
            .into_iter()
            .filter(|field| !field.is_filled(self))
            .collect()
    }

    /// Check the required fields and build the acknowledgment.
    ///
    /// Attachment names are echoed verbatim and in order; their contents are
    /// never inspected.
    pub fn validate(&self) -> SubmissionOutcome {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return SubmissionOutcome::Rejected {
                message: MISSING_REQUIRED.to_string(),
                missing,
            };
        }

        let message = if self.attachments.is_empty() {
            SUCCESS_NO_FILES.to_string()
        } else {
            format!(
                "{}已上传文件：{}",
                SUCCESS_PREFIX,
                self.attachments.join(", ")
            )
        };

        SubmissionOutcome::Accepted {
            message,
            attachments: self.attachments.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> SubmissionDraft {
        SubmissionDraft {
            work_name: "遥感图像去云系统".to_string(),
            author: "张三".to_string(),
            description: "基于深度学习的遥感图像去云".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_draft_without_files() {
        let outcome = complete_draft().validate();
        assert_eq!(
            outcome,
            SubmissionOutcome::Accepted {
                message: SUCCESS_NO_FILES.to_string(),
                attachments: vec![],
            }
        );
    }

    #[test]
    fn test_complete_draft_lists_files_in_order() {
        let mut draft = complete_draft();
        draft.attachments = vec![
            "方案.pdf".to_string(),
            "code.zip".to_string(),
            "slides.pptx".to_string(),
        ];
        let outcome = draft.validate();
        assert!(outcome.is_accepted());
        assert_eq!(
            outcome.message(),
            "🎉 作品提交成功！已上传文件：方案.pdf, code.zip, slides.pptx"
        );
    }

    #[test]
    fn test_optional_fields_do_not_matter() {
        let mut draft = complete_draft();
        draft.contact = String::new();
        draft.category = None;
        draft.tech_stack = "Rust, OpenCV".to_string();
        draft.tags = TagSelection::from_values(["不存在的标签"]);
        assert!(draft.validate().is_accepted());
    }

    #[test]
    fn test_each_missing_field_is_rejected() {
        for field in RequiredField::ALL {
            let mut draft = complete_draft();
            match field {
                RequiredField::WorkName => draft.work_name.clear(),
                RequiredField::AuthorName => draft.author.clear(),
                RequiredField::Description => draft.description.clear(),
            }
            draft.attachments = vec!["a.pdf".to_string()];
            let outcome = draft.validate();
            assert_eq!(
                outcome,
                SubmissionOutcome::Rejected {
                    message: MISSING_REQUIRED.to_string(),
                    missing: vec![field],
                }
            );
        }
    }

    #[test]
    fn test_whitespace_only_value_is_filled() {
        let mut draft = complete_draft();
        draft.author = " ".to_string();
        assert!(draft.missing_fields().is_empty());
        assert!(draft.validate().is_accepted());
    }

    #[test]
    fn test_empty_draft_reports_all_fields() {
        let outcome = SubmissionDraft::default().validate();
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.message(), MISSING_REQUIRED);
        if let SubmissionOutcome::Rejected { missing, .. } = outcome {
            assert_eq!(missing, RequiredField::ALL.to_vec());
        }
    }

    #[test]
    fn test_outcome_json_shape() {
        let json = serde_json::to_value(SubmissionDraft::default().validate()).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["missing"], serde_json::json!(["work_name", "author", "description"]));
    }

    #[test]
    fn test_missing_keys_match_draft_keys() {
        let draft = serde_json::to_value(SubmissionDraft::default()).unwrap();
        for field in RequiredField::ALL {
            let key = serde_json::to_value(field).unwrap();
            let key = key.as_str().unwrap();
            assert!(draft.get(key).is_some(), "no draft key {key}");
        }
    }
}
