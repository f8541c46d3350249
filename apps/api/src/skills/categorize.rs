use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Data,
    Devops,
    Mobile,
    Qa,
    Design,
    Other,
}

/// Checked in order; the first list containing a keyword found in the skill wins.
const CATEGORY_KEYWORDS: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Mobile,
        &["android", "ios", "swift", "kotlin", "flutter", "react native", "xamarin"],
    ),
    (
        SkillCategory::Frontend,
        &[
            "react", "angular", "vue", "svelte", "next.js", "nuxt", "html", "css", "sass",
            "tailwind", "javascript", "typescript", "redux", "webpack", "vite",
        ],
    ),
    (
        SkillCategory::Data,
        &[
            "sql", "postgres", "mysql", "mongo", "redis", "spark", "hadoop", "pandas",
            "machine learning", "ml", "tensorflow", "pytorch", "airflow", "dbt", "tableau",
            "power bi", "snowflake", "bigquery",
        ],
    ),
    (
        SkillCategory::Devops,
        &[
            "docker", "kubernetes", "k8s", "terraform", "ansible", "aws", "azure", "gcp",
            "jenkins", "ci/cd", "github actions", "linux", "helm", "prometheus",
        ],
    ),
    (
        SkillCategory::Qa,
        &["selenium", "cypress", "playwright", "jest", "testing", "qa", "junit"],
    ),
    (
        SkillCategory::Design,
        &["figma", "sketch", "ux", "ui design", "photoshop", "illustrator"],
    ),
    (
        SkillCategory::Backend,
        &[
            "java", "spring", "node", "express", "nestjs", "python", "django", "flask",
            "fastapi", "go", "golang", "rust", "c#", ".net", "php", "laravel", "ruby",
            "rails", "graphql", "grpc", "kafka", "rabbitmq",
        ],
    ),
];

/// Case-insensitive. Short keywords (≤ 3 chars) must match a whole token so that
/// "go" does not claim "django" and "ml" does not claim "html".
pub fn categorize_skill(name: &str) -> SkillCategory {
    let skill = name.trim().to_lowercase();
    // Version suffixes are dropped so "CSS3" yields the token "css".
    let tokens: Vec<&str> = skill
        .split(|c: char| c.is_whitespace() || matches!(c, '/' | ',' | '-' | '.'))
        .map(|t| t.trim_end_matches(|c: char| c.is_ascii_digit()))
        .filter(|t| !t.is_empty())
        .collect();

    for (category, keywords) in CATEGORY_KEYWORDS {
        let hit = keywords.iter().any(|kw| {
            if kw.len() <= 3 {
                tokens.iter().any(|t| t == kw) || skill == *kw
            } else {
                skill.contains(kw)
            }
        });
        if hit {
            return *category;
        }
    }
    SkillCategory::Other
}
