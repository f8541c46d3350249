//! Candidate scoring — a pure function of a requirement and an employee snapshot.
//!
//! score = 0.7 * must_ratio + 0.2 * nice_ratio + 0.1 * seniority_match
//!
//! Computed in hundredths and rounded half-up, so the published score is exact to
//! two decimals. Employees with no must-have overlap are never candidates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::requirement::Requirement;
use crate::models::employee::EmployeeRecord;

/// Maximum number of candidates returned by a match.
pub const TOP_N: usize = 5;

/// Weights in hundredths of the score; they sum to 100.
#[derive(Debug, Clone, Copy)]
pub struct MatchWeights {
    pub must_have: u64,
    pub nice_to_have: u64,
    pub seniority: u64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            must_have: 70,
            nice_to_have: 20,
            seniority: 10,
        }
    }
}

/// Per-employee overlap with a requirement, before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillOverlap {
    pub must_matched: usize,
    pub nice_matched: usize,
    pub seniority_match: bool,
}

/// A ranked employee. `summary` is filled in later, and only on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(rename = "id")]
    pub employee_id: Uuid,
    pub name: String,
    pub email: String,
    pub position: String,
    pub seniority: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_link: Option<String>,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

pub fn compute_overlap(requirement: &Requirement, employee: &EmployeeRecord) -> SkillOverlap {
    SkillOverlap {
        must_matched: requirement
            .must_have
            .iter()
            .filter(|s| employee.skills.contains(*s))
            .count(),
        nice_matched: requirement
            .nice_to_have
            .iter()
            .filter(|s| employee.skills.contains(*s))
            .count(),
        seniority_match: employee.seniority == requirement.seniority.as_str(),
    }
}

/// Weighted score rounded half-up to two decimals. Always within [0, 1].
///
/// Evaluated as the exact fraction
/// `(wm·k·m + wn·j·n + ws·s·n·m) / (n·m)` hundredths, where `k/n` and `j/m` are
/// the must-have and nice-to-have ratios, then rounded with integer arithmetic.
pub fn compute_score(
    overlap: SkillOverlap,
    must_total: usize,
    nice_total: usize,
    weights: &MatchWeights,
) -> f64 {
    if must_total == 0 {
        return 0.0;
    }
    let n = must_total as u64;
    let k = (overlap.must_matched as u64).min(n);
    // An empty nice-to-have set contributes nothing: treat it as 0/1.
    let (j, m) = match nice_total {
        0 => (0, 1),
        total => ((overlap.nice_matched as u64).min(total as u64), total as u64),
    };
    let s = u64::from(overlap.seniority_match);

    let numerator = weights.must_have * k * m
        + weights.nice_to_have * j * n
        + weights.seniority * s * n * m;
    let denominator = n * m;
    let hundredths = (2 * numerator + denominator) / (2 * denominator);

    (hundredths as f64 / 100.0).clamp(0.0, 1.0)
}

/// Scores every active employee, drops those with zero must-have overlap,
/// sorts by score descending (stable: ties keep scan order) and keeps the top N.
pub fn rank_candidates(requirement: &Requirement, employees: &[EmployeeRecord]) -> Vec<Candidate> {
    rank_candidates_with(requirement, employees, &MatchWeights::default(), TOP_N)
}

fn rank_candidates_with(
    requirement: &Requirement,
    employees: &[EmployeeRecord],
    weights: &MatchWeights,
    limit: usize,
) -> Vec<Candidate> {
    let must_total = requirement.must_have.len();
    let nice_total = requirement.nice_to_have.len();

    let mut candidates: Vec<Candidate> = employees
        .iter()
        .filter(|e| e.active)
        .filter_map(|employee| {
            let overlap = compute_overlap(requirement, employee);
            if overlap.must_matched == 0 {
                return None;
            }
            Some(Candidate {
                employee_id: employee.id,
                name: employee.full_name(),
                email: employee.email.clone(),
                position: employee.position.clone(),
                seniority: employee.seniority.clone(),
                location: employee.location.clone(),
                cv_link: employee.cv_link.clone(),
                score: compute_score(overlap, must_total, nice_total, weights),
                summary: None,
            })
        })
        .collect();

    // sort_by is stable; scores are finite so partial_cmp never fails.
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates.truncate(limit);
    candidates
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::matching::requirement::{RequirementBody, Seniority};

    fn requirement(seniority: &str, must: &[&str], nice: &[&str]) -> Requirement {
        Requirement::try_from(RequirementBody {
            role: "FE".to_string(),
            seniority: seniority.to_string(),
            must_have: must.iter().map(|s| s.to_string()).collect(),
            nice_to_have: Some(nice.iter().map(|s| s.to_string()).collect()),
            with_summary: None,
        })
        .unwrap()
    }

    fn employee(n: u128, seniority: &str, skills: &[&str]) -> EmployeeRecord {
        EmployeeRecord {
            id: Uuid::from_u128(n),
            first_name: format!("Emp{n}"),
            last_name: "Test".to_string(),
            email: format!("emp{n}@example.com"),
            position: "Engineer".to_string(),
            seniority: seniority.to_string(),
            location: None,
            active: true,
            skills: skills.iter().map(|s| s.to_lowercase()).collect::<BTreeSet<_>>(),
            cv_link: None,
        }
    }

    #[test]
    fn test_worked_example_a_and_b() {
        let req = requirement("SR", &["react", "typescript"], &["next.js"]);
        let a = employee(1, "SR", &["react", "typescript", "next.js"]);
        let b = employee(2, "JR", &["react"]);

        let ranked = rank_candidates(&req, &[b.clone(), a.clone()]);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].employee_id, a.id);
        assert_eq!(ranked[0].score, 1.0);
        assert_eq!(ranked[1].employee_id, b.id);
        assert_eq!(ranked[1].score, 0.35);
    }

    #[test]
    fn test_k_of_n_must_have_only() {
        let must = ["a", "b", "c", "d", "e", "f", "g"];
        for n in 1..=must.len() {
            for k in 1..=n {
                let req = requirement("PRINC", &must[..n], &[]);
                let emp = employee(1, "JR", &must[..k]);
                let ranked = rank_candidates(&req, &[emp]);
                let expected = ((140 * k + n) / (2 * n)) as f64 / 100.0;
                assert!(
                    (ranked[0].score - expected).abs() < 1e-9,
                    "k={k} n={n}: got {} expected {expected}",
                    ranked[0].score
                );
            }
        }
    }

    #[test]
    fn test_half_up_rounding_on_exact_half() {
        // 1/4 * 70 = 17.5 hundredths → 0.18
        let req = requirement("PRINC", &["a", "b", "c", "d"], &[]);
        let ranked = rank_candidates(&req, &[employee(1, "JR", &["a"])]);
        assert_eq!(ranked[0].score, 0.18);
    }

    #[test]
    fn test_zero_must_match_excluded_even_with_nice_and_seniority() {
        let req = requirement("SR", &["rust"], &["go", "python"]);
        let emp = employee(1, "SR", &["go", "python"]);
        assert!(rank_candidates(&req, &[emp]).is_empty());
    }

    #[test]
    fn test_case_insensitive_skill_match() {
        let req = requirement("SR", &["react"], &[]);
        let emp = employee(1, "JR", &["React"]);
        let ranked = rank_candidates(&req, &[emp]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 0.7);
    }

    #[test]
    fn test_truncates_to_top_five_sorted() {
        let req = requirement("SR", &["a", "b", "c"], &["x"]);
        let employees: Vec<EmployeeRecord> = (0..9)
            .map(|i| match i % 3 {
                0 => employee(i, "SR", &["a", "b", "c", "x"]),
                1 => employee(i, "JR", &["a"]),
                _ => employee(i, "JR", &["a", "b"]),
            })
            .collect();

        let ranked = rank_candidates(&req, &employees);
        assert_eq!(ranked.len(), TOP_N);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(ranked[0].score, 1.0);
    }

    #[test]
    fn test_ties_keep_scan_order() {
        let req = requirement("SR", &["a"], &[]);
        let employees: Vec<EmployeeRecord> =
            (10..17).map(|i| employee(i, "JR", &["a"])).collect();

        let ranked = rank_candidates(&req, &employees);
        let ids: Vec<Uuid> = ranked.iter().map(|c| c.employee_id).collect();
        let expected: Vec<Uuid> = (10..15).map(Uuid::from_u128).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_seniority_is_exact_match_only() {
        let req = requirement("SR", &["a"], &[]);
        let ssr = rank_candidates(&req, &[employee(1, "SSR", &["a"])]);
        let sr = rank_candidates(&req, &[employee(2, "SR", &["a"])]);
        assert_eq!(ssr[0].score, 0.7);
        assert_eq!(sr[0].score, 0.8);
        assert_eq!(req.seniority, Seniority::Sr);
    }

    #[test]
    fn test_inactive_employees_are_ignored() {
        let req = requirement("SR", &["a"], &[]);
        let mut emp = employee(1, "SR", &["a"]);
        emp.active = false;
        assert!(rank_candidates(&req, &[emp]).is_empty());
    }

    #[test]
    fn test_mixed_terms_landing_on_half_round_up() {
        let weights = MatchWeights::default();
        let overlap = |must, nice, seniority| SkillOverlap {
            must_matched: must,
            nice_matched: nice,
            seniority_match: seniority,
        };

        // 11/12 * 70 + 2/3 * 20 = 77.5 hundredths
        assert_eq!(compute_score(overlap(11, 2, false), 12, 3, &weights), 0.78);
        assert_eq!(compute_score(overlap(11, 2, true), 12, 3, &weights), 0.88);
        // 11/12 * 70 + 1/6 * 20 = 67.5 hundredths
        assert_eq!(compute_score(overlap(11, 1, false), 12, 6, &weights), 0.68);
        // 1/3 * 70 + 1/3 * 20 = 30 hundredths exactly
        assert_eq!(compute_score(overlap(1, 1, false), 3, 3, &weights), 0.3);
    }

    #[test]
    fn test_score_bounds() {
        let weights = MatchWeights::default();
        let full = SkillOverlap {
            must_matched: 3,
            nice_matched: 2,
            seniority_match: true,
        };
        assert_eq!(compute_score(full, 3, 2, &weights), 1.0);

        let none = SkillOverlap {
            must_matched: 0,
            nice_matched: 0,
            seniority_match: false,
        };
        assert_eq!(compute_score(none, 3, 0, &weights), 0.0);
    }

    #[test]
    fn test_candidate_wire_shape() {
        let mut emp = employee(1, "SR", &["a"]);
        emp.cv_link = Some("https://cv.example.com/1".to_string());
        let req = requirement("SR", &["a"], &[]);
        let candidate = rank_candidates(&req, &[emp]).remove(0);

        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["id"], serde_json::json!(Uuid::from_u128(1)));
        assert_eq!(json["cvLink"], "https://cv.example.com/1");
        assert_eq!(json["name"], "Emp1 Test");
        assert!(json.get("location").is_none());
        assert!(json.get("summary").is_none());
    }
}
