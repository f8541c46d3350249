// Shared prompt fragments.
// Each module that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to every prompt that describes a real person.
pub const EVIDENCE_ONLY_INSTRUCTION: &str = "\
    CRITICAL: Use ONLY the skills and facts listed above. \
    Do NOT infer, interpolate, or invent experience, employers, projects or years. \
    If a required skill is not listed for the candidate, do not claim it.";
