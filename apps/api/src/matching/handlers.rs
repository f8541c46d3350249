//! Axum route handlers for the Match API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::matching::parser::parse_requirement;
use crate::matching::requirement::{Requirement, RequirementBody};
use crate::matching::scoring::{rank_candidates, Candidate};
use crate::models::employee::EmployeeRecord;
use crate::requests::record_match;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResponse {
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct ParseRequirementRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseRequirementResponse {
    /// Normalized and ready to be posted to `/api/v1/match`.
    pub requirement: RequirementBody,
}

#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    #[serde(flatten)]
    pub requirement: RequirementBody,
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Validates the requirement, ranks the active population and, when
/// `withSummary` is set, attaches LLM justifications to the top candidates.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(body): Json<RequirementBody>,
) -> Result<Json<MatchResponse>, AppError> {
    let requirement = Requirement::try_from(body)?;

    let candidates = state.matcher.run(&requirement).await?;

    if state.config.record_match_requests {
        if let Err(e) = record_match(&state.db, &requirement, &candidates).await {
            warn!("Failed to record match request for '{}': {e}", requirement.role);
        }
    }

    Ok(Json(MatchResponse { candidates }))
}

/// POST /api/v1/match/parse
///
/// Turns a free-text staffing request into a requirement the caller can review
/// and submit. Does not run a match.
pub async fn handle_parse_requirement(
    State(state): State<AppState>,
    Json(request): Json<ParseRequirementRequest>,
) -> Result<Json<ParseRequirementResponse>, AppError> {
    let requirement = parse_requirement(&request.text, &state.llm).await?;

    Ok(Json(ParseRequirementResponse {
        requirement: RequirementBody::from(&requirement),
    }))
}

/// POST /api/v1/match/simulate
///
/// Ranks a caller-supplied employee snapshot. No store access, no summaries,
/// nothing recorded.
pub async fn handle_simulate(
    Json(request): Json<SimulateRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let requirement = Requirement::try_from(request.requirement)?;

    let mut employees = request.employees;
    for employee in &mut employees {
        employee.normalize_skills();
    }

    Ok(Json(MatchResponse {
        candidates: rank_candidates(&requirement, &employees),
    }))
}
