use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::faqs::models::Faq;
use crate::shared::validation::NON_BLANK_REGEX;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct FaqFormDto {
    #[validate(
        length(max = 500),
        regex(path = *NON_BLANK_REGEX, message = "Pertanyaan wajib diisi")
    )]
    pub question: String,
    #[validate(regex(path = *NON_BLANK_REGEX, message = "Jawaban wajib diisi"))]
    pub answer: String,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FaqResponseDto {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub display_order: i32,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<Faq> for FaqResponseDto {
    fn from(f: Faq) -> Self {
        Self {
            id: f.id,
            question: f.question,
            answer: f.answer,
            display_order: f.display_order,
            is_active: f.is_active,
            updated_at: f.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_question_or_answer_is_invalid() {
        let dto: FaqFormDto =
            serde_json::from_str(r#"{"question": "  ", "answer": "Ya"}"#).unwrap();
        assert!(dto.validate().is_err());

        let dto: FaqFormDto =
            serde_json::from_str(r#"{"question": "Gratis?", "answer": ""}"#).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_defaults_when_omitted() {
        let dto: FaqFormDto =
            serde_json::from_str(r#"{"question": "Gratis?", "answer": "Ya"}"#).unwrap();
        assert!(dto.validate().is_ok());
        assert!(dto.is_active);
        assert_eq!(dto.display_order, 0);
    }
}
