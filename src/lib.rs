//! SynchroCosmetics - audience profiling and cosmetic product recommendations
//!
//! This library reduces an audience survey to a representative profile and
//! ranks the catalog products that suit it. It runs as a single-pass batch
//! pipeline: profile, filter, sort, truncate.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod report;
pub mod services;

// Re-export commonly used types
pub use crate::core::{recommend, AudienceProfiler, MatchResult, Matcher, ProductCatalog, RecommendationEngine};
pub use error::{Result, SynchroError};
pub use models::{AudienceProfile, AudienceRecord, CosmeticProduct, Feature, RecommendationReport, SkinType};
pub use services::TabularDataset;
