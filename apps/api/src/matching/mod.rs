// Candidate matching: requirement validation, scoring, snapshot loading,
// summary fan-out and the HTTP surface over them.
// All LLM calls go through llm_client — matching code only sees `TextGenerator`.

pub mod engine;
pub mod handlers;
pub mod loader;
pub mod parser;
pub mod prompts;
pub mod requirement;
pub mod scoring;
pub mod summary;
