//! Requirement Parser — turns a free-text staffing request into a validated `Requirement`.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::{generate_json, TextGenerator};
use crate::matching::prompts::{REQUIREMENT_PARSE_PROMPT_TEMPLATE, REQUIREMENT_PARSE_SYSTEM};
use crate::matching::requirement::{Requirement, RequirementBody};

/// What the LLM is asked to return. Validated the same way as a submitted requirement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequirementDraft {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub seniority: String,
    #[serde(default)]
    pub must_have: Vec<String>,
    #[serde(default)]
    pub nice_to_have: Vec<String>,
}

impl RequirementDraft {
    /// LLMs sometimes answer "Senior" or "sr"; fold the common spellings onto the level codes.
    fn canonical_seniority(&self) -> String {
        let s = self.seniority.trim().to_uppercase();
        match s.as_str() {
            "JUNIOR" => "JR",
            "SEMI-SENIOR" | "SEMI SENIOR" | "SEMISENIOR" | "MID" => "SSR",
            "SENIOR" => "SR",
            "PRINCIPAL" => "PRINC",
            other => other,
        }
        .to_string()
    }

    pub fn into_requirement(self) -> Result<Requirement, AppError> {
        let seniority = self.canonical_seniority();
        Requirement::try_from(RequirementBody {
            role: self.role,
            seniority,
            must_have: self.must_have,
            nice_to_have: Some(self.nice_to_have),
            with_summary: None,
        })
    }
}

pub fn build_parse_prompt(text: &str) -> String {
    REQUIREMENT_PARSE_PROMPT_TEMPLATE.replace("{text}", text.trim())
}

/// Parses free text via the generator. The draft must pass requirement validation.
pub async fn parse_requirement(
    text: &str,
    generator: &dyn TextGenerator,
) -> Result<Requirement, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let draft: RequirementDraft =
        generate_json(generator, REQUIREMENT_PARSE_SYSTEM, &build_parse_prompt(text))
            .await
            .map_err(|e| AppError::Llm(format!("Requirement parsing failed: {e}")))?;

    draft.into_requirement()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;
    use crate::matching::requirement::Seniority;

    /// Returns a fixed reply and remembers the last prompt it saw.
    struct ScriptedGenerator {
        reply: Result<&'static str, ()>,
        calls: AtomicUsize,
        last_prompt: std::sync::Mutex<String>,
    }

    impl ScriptedGenerator {
        fn replying(reply: &'static str) -> Self {
            Self {
                reply: Ok(reply),
                calls: AtomicUsize::new(0),
                last_prompt: std::sync::Mutex::new(String::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(()),
                ..Self::replying("")
            }
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, _system: &str, prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = prompt.to_string();
            self.reply
                .map(str::to_string)
                .map_err(|_| LlmError::EmptyContent)
        }
    }

    #[test]
    fn test_draft_deserializes_and_validates() {
        let json = r#"{
            "role": "Frontend Engineer",
            "seniority": "SR",
            "must_have": ["React", "TypeScript"],
            "nice_to_have": ["Next.js"]
        }"#;
        let draft: RequirementDraft = serde_json::from_str(json).unwrap();
        let req = draft.into_requirement().unwrap();
        assert_eq!(req.role, "Frontend Engineer");
        assert_eq!(req.seniority, Seniority::Sr);
        assert!(req.must_have.contains("react"));
        assert!(req.nice_to_have.contains("next.js"));
        assert!(!req.want_summary);
    }

    #[test]
    fn test_spelled_out_seniority_is_folded() {
        for (raw, expected) in [
            ("Senior", Seniority::Sr),
            ("junior", Seniority::Jr),
            ("Semi-Senior", Seniority::Ssr),
            ("principal", Seniority::Princ),
            ("staff", Seniority::Staff),
        ] {
            let draft = RequirementDraft {
                role: "BE".to_string(),
                seniority: raw.to_string(),
                must_have: vec!["go".to_string()],
                nice_to_have: vec![],
            };
            assert_eq!(draft.into_requirement().unwrap().seniority, expected, "{raw}");
        }
    }

    #[test]
    fn test_draft_without_must_have_is_rejected() {
        let draft: RequirementDraft =
            serde_json::from_str(r#"{"role": "BE", "seniority": "JR"}"#).unwrap();
        assert!(matches!(
            draft.into_requirement(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_unknown_level_stays_rejected() {
        let draft = RequirementDraft {
            role: "BE".to_string(),
            seniority: "LEAD".to_string(),
            must_have: vec!["go".to_string()],
            nice_to_have: vec![],
        };
        assert!(draft.into_requirement().is_err());
    }

    #[test]
    fn test_prompt_embeds_text() {
        let prompt = build_parse_prompt("  Need a senior React dev  ");
        assert!(prompt.ends_with("STAFFING REQUEST:\nNeed a senior React dev"));
    }

    #[tokio::test]
    async fn test_empty_text_rejected_before_llm_call() {
        let generator = ScriptedGenerator::replying("{}");
        let err = parse_requirement("   ", &generator).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fenced_reply_becomes_requirement() {
        let generator = ScriptedGenerator::replying(
            "```json\n{\"role\": \"Backend Engineer\", \"seniority\": \"Senior\", \
             \"must_have\": [\"Go\", \"PostgreSQL\"], \"nice_to_have\": [\"Kafka\"]}\n```",
        );

        let req = parse_requirement("We need a senior Go dev", &generator)
            .await
            .unwrap();

        assert_eq!(req.role, "Backend Engineer");
        assert_eq!(req.seniority, Seniority::Sr);
        assert_eq!(
            req.must_have.iter().collect::<Vec<_>>(),
            vec!["go", "postgresql"]
        );
        assert!(req.nice_to_have.contains("kafka"));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
        assert!(generator
            .last_prompt
            .lock()
            .unwrap()
            .ends_with("We need a senior Go dev"));
    }

    #[tokio::test]
    async fn test_non_json_reply_is_llm_error() {
        let generator = ScriptedGenerator::replying("I could not find a role in that text.");
        let err = parse_requirement("hello", &generator).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_generator_failure_is_llm_error() {
        let generator = ScriptedGenerator::failing();
        let err = parse_requirement("need a React dev", &generator)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_reply_missing_must_have_is_validation_error() {
        let generator = ScriptedGenerator::replying(r#"{"role": "BE", "seniority": "JR"}"#);
        let err = parse_requirement("need someone", &generator)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
