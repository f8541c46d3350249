use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillUsageRow {
    pub id: Uuid,
    pub name: String,
    /// Number of active employees holding the skill.
    pub employee_count: i64,
}
