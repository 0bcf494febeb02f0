// Core algorithm exports
pub mod catalog;
pub mod engine;
pub mod filters;
pub mod matcher;
pub mod profiler;

pub use catalog::ProductCatalog;
pub use engine::RecommendationEngine;
pub use filters::{covers_features, covers_skin_type, matches_audience};
pub use matcher::{recommend, MatchResult, Matcher, DEFAULT_TOP_N};
pub use profiler::{create_profile, AudienceProfiler, TOP_FEATURE_COUNT};
