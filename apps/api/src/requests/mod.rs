// Match request history: one row per `/match` call, plus statistics over them.

pub mod handlers;
pub mod history;
pub mod stats;

pub use history::record_match;
