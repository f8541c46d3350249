//! Match engine — load, rank, optionally summarize.
//!
//! Flow: load_active() → rank_candidates() → generate_summaries() (only when asked).
//!
//! Both collaborators are injected by the caller; the engine holds no state between
//! calls and re-reads the active population every time.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::matching::loader::EmployeeLoader;
use crate::matching::requirement::Requirement;
use crate::matching::scoring::{rank_candidates, Candidate};
use crate::matching::summary::{generate_summaries, SummaryContext};

pub struct MatchEngine {
    loader: Arc<dyn EmployeeLoader>,
    generator: Arc<dyn TextGenerator>,
    summary_timeout: Duration,
}

impl MatchEngine {
    pub fn new(
        loader: Arc<dyn EmployeeLoader>,
        generator: Arc<dyn TextGenerator>,
        summary_timeout: Duration,
    ) -> Self {
        Self {
            loader,
            generator,
            summary_timeout,
        }
    }

    /// Runs a match for an already-validated requirement.
    ///
    /// Store errors propagate. Summary errors never do: the affected candidates
    /// simply come back without a `summary`.
    pub async fn run(&self, requirement: &Requirement) -> Result<Vec<Candidate>, AppError> {
        let started = Instant::now();

        let employees = self.loader.load_active().await?;
        let mut candidates = rank_candidates(requirement, &employees);

        info!(
            "Match for '{}' ({}): {} of {} active employees ranked in {}ms",
            requirement.role,
            requirement.seniority,
            candidates.len(),
            employees.len(),
            started.elapsed().as_millis()
        );

        if requirement.want_summary && !candidates.is_empty() {
            let contexts = candidates
                .iter()
                .map(|candidate| {
                    let skills = employees
                        .iter()
                        .find(|e| e.id == candidate.employee_id)
                        .map(|e| e.skills.clone())
                        .unwrap_or_default();
                    SummaryContext::new(candidate, skills, requirement)
                })
                .collect();

            let mut summaries =
                generate_summaries(Arc::clone(&self.generator), contexts, self.summary_timeout)
                    .await;

            for candidate in &mut candidates {
                candidate.summary = summaries.remove(&candidate.employee_id);
            }
        }

        Ok(candidates)
    }
}
