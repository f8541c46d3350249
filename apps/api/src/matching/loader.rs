//! Employee snapshot loading.
//!
//! `EmployeeLoader` is the store-side collaborator of the match engine.
//! `PgEmployeeLoader` reads the whole active population in one query;
//! `aggregate_rows` folds the one-to-many join into one record per employee.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::employee::{normalize_skill, EmployeeJoinRow, EmployeeRecord};

#[async_trait]
pub trait EmployeeLoader: Send + Sync {
    /// Returns every active employee with skills and CV link, in scan order.
    /// A store failure aborts the load; there is no partial result.
    async fn load_active(&self) -> Result<Vec<EmployeeRecord>, AppError>;
}

/// Scan order: `created_at, id`. CV tie-break: most recently updated CV, then lowest id.
const ACTIVE_EMPLOYEES_QUERY: &str = r#"
    SELECT e.id, e.first_name, e.last_name, e.email, e.position, e.seniority,
           e.location, e.active,
           s.name AS skill_name,
           cv.link AS cv_link
    FROM employees e
    LEFT JOIN employee_skills es ON es.employee_id = e.id
    LEFT JOIN skills s ON s.id = es.skill_id
    LEFT JOIN LATERAL (
        SELECT c.link
        FROM cvs c
        WHERE c.employee_id = e.id
        ORDER BY c.updated_at DESC, c.id ASC
        LIMIT 1
    ) cv ON TRUE
    WHERE e.active = TRUE
    ORDER BY e.created_at ASC, e.id ASC, s.name ASC
"#;

pub struct PgEmployeeLoader {
    pool: PgPool,
}

impl PgEmployeeLoader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeLoader for PgEmployeeLoader {
    async fn load_active(&self) -> Result<Vec<EmployeeRecord>, AppError> {
        let rows = sqlx::query_as::<_, EmployeeJoinRow>(ACTIVE_EMPLOYEES_QUERY)
            .fetch_all(&self.pool)
            .await?;

        let employees = aggregate_rows(rows);
        debug!("Loaded {} active employees", employees.len());
        Ok(employees)
    }
}

/// Folds join rows into one record per employee id.
///
/// - employees keep the order in which their first row appears;
/// - skill names are trimmed, lowercased and deduplicated;
/// - the first non-null CV link seen for an employee wins;
/// - rows flagged inactive are skipped.
pub fn aggregate_rows(rows: Vec<EmployeeJoinRow>) -> Vec<EmployeeRecord> {
    let mut index: HashMap<Uuid, usize> = HashMap::new();
    let mut employees: Vec<EmployeeRecord> = Vec::new();

    for row in rows.into_iter().filter(|r| r.active) {
        let slot = match index.get(&row.id) {
            Some(&i) => i,
            None => {
                index.insert(row.id, employees.len());
                employees.push(EmployeeRecord {
                    id: row.id,
                    first_name: row.first_name,
                    last_name: row.last_name,
                    email: row.email,
                    position: row.position,
                    seniority: row.seniority.trim().to_string(),
                    location: row.location,
                    active: true,
                    skills: Default::default(),
                    cv_link: None,
                });
                employees.len() - 1
            }
        };

        let employee = &mut employees[slot];
        if let Some(skill) = row.skill_name.as_deref().and_then(normalize_skill) {
            employee.skills.insert(skill);
        }
        if employee.cv_link.is_none() {
            employee.cv_link = row.cv_link;
        }
    }

    employees
}
