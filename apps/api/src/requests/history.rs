use anyhow::Result;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::matching::requirement::Requirement;
use crate::matching::scoring::Candidate;
use crate::models::request::MatchRequestRow;

pub const DEFAULT_LIST_LIMIT: i64 = 50;
pub const MAX_LIST_LIMIT: i64 = 200;

/// Persists a finished match. Append-only.
pub async fn record_match(
    pool: &PgPool,
    requirement: &Requirement,
    candidates: &[Candidate],
) -> Result<Uuid> {
    let id = Uuid::new_v4();
    let must_have: Vec<String> = requirement.must_have.iter().cloned().collect();
    let nice_to_have: Vec<String> = requirement.nice_to_have.iter().cloned().collect();
    let top_score = candidates.first().map(|c| c.score);
    let candidates_json = serde_json::to_value(candidates)?;

    sqlx::query(
        r#"
        INSERT INTO match_requests
            (id, role, seniority, must_have, nice_to_have, with_summary,
             candidate_count, top_score, candidates)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(id)
    .bind(&requirement.role)
    .bind(requirement.seniority.as_str())
    .bind(&must_have)
    .bind(&nice_to_have)
    .bind(requirement.want_summary)
    .bind(candidates.len() as i32)
    .bind(top_score)
    .bind(&candidates_json)
    .execute(pool)
    .await?;

    info!(
        "Recorded match request {id} ('{}', {} candidates)",
        requirement.role,
        candidates.len()
    );
    Ok(id)
}

pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT)
}

/// Newest first.
pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<MatchRequestRow>> {
    Ok(sqlx::query_as::<_, MatchRequestRow>(
        "SELECT * FROM match_requests ORDER BY created_at DESC, id DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?)
}

pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<MatchRequestRow>> {
    Ok(
        sqlx::query_as::<_, MatchRequestRow>("SELECT * FROM match_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?,
    )
}
