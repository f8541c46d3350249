use axum::{extract::State, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::skill::SkillUsageRow;
use crate::skills::categorize::{categorize_skill, SkillCategory};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SkillView {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    pub employee_count: i64,
}

impl From<SkillUsageRow> for SkillView {
    fn from(row: SkillUsageRow) -> Self {
        Self {
            category: categorize_skill(&row.name),
            id: row.id,
            name: row.name,
            employee_count: row.employee_count,
        }
    }
}

/// GET /api/v1/skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkillView>>, AppError> {
    let rows = sqlx::query_as::<_, SkillUsageRow>(
        r#"
        SELECT s.id, s.name, COUNT(e.id) AS employee_count
        FROM skills s
        LEFT JOIN employee_skills es ON es.skill_id = s.id
        LEFT JOIN employees e ON e.id = es.employee_id AND e.active = TRUE
        GROUP BY s.id, s.name
        ORDER BY s.name ASC
        "#,
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows.into_iter().map(SkillView::from).collect()))
}
