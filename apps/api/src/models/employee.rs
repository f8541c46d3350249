use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One row of the employees ⟕ skills ⟕ latest-CV join.
/// An employee with N skills yields N rows; with no skills, one row with `skill_name = NULL`.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeJoinRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub seniority: String,
    pub location: Option<String>,
    pub active: bool,
    pub skill_name: Option<String>,
    pub cv_link: Option<String>,
}

/// An employee with its skills folded into a set. Rebuilt on every match call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub seniority: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    /// Lowercased, deduplicated.
    #[serde(default)]
    pub skills: BTreeSet<String>,
    #[serde(default, alias = "cvLink")]
    pub cv_link: Option<String>,
}

fn default_active() -> bool {
    true
}

impl EmployeeRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Re-applies the skill normalization for records that did not come from the store.
    pub fn normalize_skills(&mut self) {
        self.skills = std::mem::take(&mut self.skills)
            .into_iter()
            .filter_map(|s| normalize_skill(&s))
            .collect();
    }
}

/// Trims and lowercases a skill name. Blank names yield `None`.
pub fn normalize_skill(raw: &str) -> Option<String> {
    let skill = raw.trim().to_lowercase();
    (!skill.is_empty()).then_some(skill)
}
