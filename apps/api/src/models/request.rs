use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One persisted `/match` call with its ranked result.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MatchRequestRow {
    pub id: Uuid,
    pub role: String,
    pub seniority: String,
    pub must_have: Vec<String>,
    pub nice_to_have: Vec<String>,
    pub with_summary: bool,
    pub candidate_count: i32,
    pub top_score: Option<f64>,
    pub candidates: Value,
    pub created_at: DateTime<Utc>,
}
