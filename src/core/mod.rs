// Core algorithm exports
pub mod builder;
pub mod dashboard;
pub mod filters;
pub mod format;
pub mod sampling;

pub use builder::{FilterBuilder, normalize, active_filter_count};
pub use dashboard::{received_interests, recent_conversations};
pub use filters::{evaluate, matches_criteria, education_keyword, EDUCATION_OPTIONS};
pub use format::format_height;
pub use sampling::{Suggestions, sample_featured, shuffled, suggest_for};
