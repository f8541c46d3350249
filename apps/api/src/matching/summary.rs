//! Candidate summaries — one independent generation call per ranked candidate.
//!
//! Calls run concurrently on a `JoinSet`, each bounded by a timeout. A failed or
//! timed-out call leaves that candidate's `summary` unset and logs a warning;
//! nothing here can fail the match. Dropping the future aborts in-flight calls.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tracing::{info, warn};
use uuid::Uuid;

use crate::llm_client::prompts::EVIDENCE_ONLY_INSTRUCTION;
use crate::llm_client::{LlmError, TextGenerator};
use crate::matching::prompts::{SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM};
use crate::matching::requirement::Requirement;
use crate::matching::scoring::Candidate;

/// Everything a summary prompt needs, owned so it can move into a task.
#[derive(Debug, Clone)]
pub struct SummaryContext {
    pub employee_id: Uuid,
    pub name: String,
    pub position: String,
    pub seniority: String,
    pub role: String,
    pub required_seniority: String,
    pub candidate_skills: BTreeSet<String>,
    pub must_have: BTreeSet<String>,
}

impl SummaryContext {
    pub fn new(
        candidate: &Candidate,
        candidate_skills: BTreeSet<String>,
        requirement: &Requirement,
    ) -> Self {
        Self {
            employee_id: candidate.employee_id,
            name: candidate.name.clone(),
            position: candidate.position.clone(),
            seniority: candidate.seniority.clone(),
            role: requirement.role.clone(),
            required_seniority: requirement.seniority.to_string(),
            candidate_skills,
            must_have: requirement.must_have.clone(),
        }
    }
}

pub fn build_summary_prompt(ctx: &SummaryContext) -> String {
    let matched: Vec<&str> = ctx
        .must_have
        .intersection(&ctx.candidate_skills)
        .map(String::as_str)
        .collect();

    SUMMARY_PROMPT_TEMPLATE
        .replace("{name}", &ctx.name)
        .replace("{position}", &ctx.position)
        .replace("{seniority}", &ctx.seniority)
        .replace("{role}", &ctx.role)
        .replace("{required_seniority}", &ctx.required_seniority)
        .replace("{candidate_skills}", &join_or_none(ctx.candidate_skills.iter()))
        .replace("{must_have}", &join_or_none(ctx.must_have.iter()))
        .replace("{matched_skills}", &join_or_none(matched.into_iter()))
        .replace("{evidence_instruction}", EVIDENCE_ONLY_INSTRUCTION)
}

fn join_or_none<S: AsRef<str>>(items: impl Iterator<Item = S>) -> String {
    let joined = items
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "(none)".to_string()
    } else {
        joined
    }
}

/// Generates summaries for every context concurrently and returns the successes
/// keyed by employee id. Waits for every call to finish or time out.
pub async fn generate_summaries(
    generator: Arc<dyn TextGenerator>,
    contexts: Vec<SummaryContext>,
    timeout: Duration,
) -> HashMap<Uuid, String> {
    let requested = contexts.len();
    let mut tasks = JoinSet::new();

    for ctx in contexts {
        let generator = Arc::clone(&generator);
        tasks.spawn(async move {
            let prompt = build_summary_prompt(&ctx);
            let result = match tokio::time::timeout(
                timeout,
                generator.generate(SUMMARY_SYSTEM, &prompt),
            )
            .await
            {
                Ok(result) => result,
                Err(_) => Err(LlmError::Timeout(timeout.as_secs())),
            };
            (ctx.employee_id, result)
        });
    }

    let mut summaries = HashMap::with_capacity(requested);
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((employee_id, Ok(text))) => {
                summaries.insert(employee_id, text);
            }
            Ok((employee_id, Err(e))) => {
                warn!("Summary generation failed for employee {employee_id}: {e}");
            }
            Err(e) => {
                warn!("Summary task did not complete: {e}");
            }
        }
    }

    info!(
        "Generated {}/{} candidate summaries",
        summaries.len(),
        requested
    );
    summaries
}
