// All LLM prompt constants for the matching module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for candidate justifications.
pub const SUMMARY_SYSTEM: &str = "You are a technical recruiter writing short, factual \
    justifications for why an internal employee fits an open role. \
    Respond with plain prose only: 2 to 3 sentences, no lists, no headings, no markdown.";

/// Candidate summary prompt template.
/// Replace: {name}, {position}, {seniority}, {role}, {required_seniority},
///          {candidate_skills}, {must_have}, {matched_skills}, {evidence_instruction}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Candidate: {name}
Current position: {position}
Candidate seniority: {seniority}

Open role: {role}
Required seniority: {required_seniority}

Candidate's known skills: {candidate_skills}
Role's required skills: {must_have}
Required skills the candidate has: {matched_skills}

Write a 2-3 sentence justification of why this candidate fits the role, based only on the matched skills above.

{evidence_instruction}"#;

/// System prompt for free-text requirement parsing — enforces JSON-only output.
pub const REQUIREMENT_PARSE_SYSTEM: &str = "You are an expert technical recruiter. \
    Turn a free-text staffing request into a structured requirement. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Requirement parsing prompt template. Replace `{text}` before sending.
pub const REQUIREMENT_PARSE_PROMPT_TEMPLATE: &str = r#"Parse the following staffing request.

Return a JSON object with this EXACT schema (no extra fields):
{
  "role": "Frontend Engineer",
  "seniority": "SR",
  "must_have": ["react", "typescript"],
  "nice_to_have": ["next.js"]
}

Rules:
- "seniority" MUST be exactly one of: "JR", "SSR", "SR", "STAFF", "PRINC".
  junior → JR, semi-senior / mid → SSR, senior → SR, staff → STAFF, principal → PRINC.
- "must_have": skills the request says are required. At least one.
- "nice_to_have": skills described as preferred, a plus, or bonus. May be empty.
- Skills are short lowercase names of technologies or practices ("react", "aws", "sql").
- Do NOT add skills the request does not mention.

STAFFING REQUEST:
{text}"#;
