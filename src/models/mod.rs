// Model exports
pub mod domain;
pub mod report;

pub use domain::{AudienceProfile, AudienceRecord, CosmeticProduct, Feature, SkinType};
pub use report::{RecommendationReport, RecommendedProduct};
