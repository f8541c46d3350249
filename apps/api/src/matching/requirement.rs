//! Requirement — the validated, normalized input of a match.
//!
//! The wire body is deserialized leniently (`RequirementBody`, every field optional)
//! and then converted with `Requirement::try_from`, so a missing field or an unknown
//! seniority surfaces as `AppError::Validation` (400) instead of an extractor rejection.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::employee::normalize_skill;

/// Seniority bands, ordered JR < SSR < SR < STAFF < PRINC.
/// Matching uses exact equality only; the ordering is for display and sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Seniority {
    Jr,
    Ssr,
    Sr,
    Staff,
    Princ,
}

impl Seniority {
    pub const ALL: [Seniority; 5] = [
        Seniority::Jr,
        Seniority::Ssr,
        Seniority::Sr,
        Seniority::Staff,
        Seniority::Princ,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Jr => "JR",
            Seniority::Ssr => "SSR",
            Seniority::Sr => "SR",
            Seniority::Staff => "STAFF",
            Seniority::Princ => "PRINC",
        }
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Seniority {
    type Err = AppError;

    /// Exact, case-sensitive match against the five level codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Seniority::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "seniority must be one of JR, SSR, SR, STAFF, PRINC (got '{s}')"
                ))
            })
    }
}

/// Requirement as it arrives over the wire. Nothing is enforced here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequirementBody {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub seniority: String,
    #[serde(default)]
    pub must_have: Vec<String>,
    #[serde(default)]
    pub nice_to_have: Option<Vec<String>>,
    #[serde(default, rename = "withSummary", alias = "with_summary")]
    pub with_summary: Option<bool>,
}

/// A validated requirement. Skill sets are lowercased and deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct Requirement {
    pub role: String,
    pub seniority: Seniority,
    pub must_have: BTreeSet<String>,
    pub nice_to_have: BTreeSet<String>,
    pub want_summary: bool,
}

impl TryFrom<RequirementBody> for Requirement {
    type Error = AppError;

    fn try_from(body: RequirementBody) -> Result<Self, Self::Error> {
        let role = body.role.trim().to_string();
        if role.is_empty() {
            return Err(AppError::Validation("role cannot be empty".to_string()));
        }

        let seniority = body.seniority.trim().parse::<Seniority>()?;

        let must_have = normalize_skill_set(&body.must_have);
        if must_have.is_empty() {
            return Err(AppError::Validation(
                "must_have must contain at least one skill".to_string(),
            ));
        }

        let nice_to_have = normalize_skill_set(body.nice_to_have.as_deref().unwrap_or_default());

        Ok(Requirement {
            role,
            seniority,
            must_have,
            nice_to_have,
            want_summary: body.with_summary.unwrap_or(false),
        })
    }
}

impl From<&Requirement> for RequirementBody {
    fn from(req: &Requirement) -> Self {
        RequirementBody {
            role: req.role.clone(),
            seniority: req.seniority.as_str().to_string(),
            must_have: req.must_have.iter().cloned().collect(),
            nice_to_have: Some(req.nice_to_have.iter().cloned().collect()),
            with_summary: Some(req.want_summary),
        }
    }
}

fn normalize_skill_set(raw: &[String]) -> BTreeSet<String> {
    raw.iter().filter_map(|s| normalize_skill(s)).collect()
}
