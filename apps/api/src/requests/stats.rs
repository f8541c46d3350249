//! Request statistics — aggregated in Rust over a narrow projection of `match_requests`.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::matching::requirement::Seniority;

#[derive(Debug, Clone, FromRow)]
pub struct RequestStatRow {
    pub seniority: String,
    pub with_summary: bool,
    pub candidate_count: i32,
    pub top_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestStats {
    pub total: u64,
    pub with_candidates: u64,
    pub without_candidates: u64,
    pub with_summary: u64,
    /// Every level is present, zero-filled.
    pub by_seniority: BTreeMap<String, u64>,
    /// Mean of the best score over requests that returned at least one candidate.
    pub average_top_score: Option<f64>,
}

pub async fn load_request_stats(pool: &PgPool) -> Result<RequestStats> {
    let rows = sqlx::query_as::<_, RequestStatRow>(
        "SELECT seniority, with_summary, candidate_count, top_score FROM match_requests",
    )
    .fetch_all(pool)
    .await?;

    Ok(compute_request_stats(&rows))
}

pub fn compute_request_stats(rows: &[RequestStatRow]) -> RequestStats {
    let mut by_seniority: BTreeMap<String, u64> = Seniority::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), 0))
        .collect();

    let mut with_candidates = 0;
    let mut with_summary = 0;
    let mut top_score_sum = 0.0;
    let mut top_score_count = 0u64;

    for row in rows {
        *by_seniority.entry(row.seniority.clone()).or_insert(0) += 1;
        if row.candidate_count > 0 {
            with_candidates += 1;
        }
        if row.with_summary {
            with_summary += 1;
        }
        if let (true, Some(score)) = (row.candidate_count > 0, row.top_score) {
            top_score_sum += score;
            top_score_count += 1;
        }
    }

    let total = rows.len() as u64;
    let average_top_score = (top_score_count > 0)
        .then(|| ((top_score_sum / top_score_count as f64) * 100.0).round() / 100.0);

    RequestStats {
        total,
        with_candidates,
        without_candidates: total - with_candidates,
        with_summary,
        by_seniority,
        average_top_score,
    }
}
