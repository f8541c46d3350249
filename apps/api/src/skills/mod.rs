// Skill catalogue with keyword-list categorisation.

pub mod categorize;
pub mod handlers;
