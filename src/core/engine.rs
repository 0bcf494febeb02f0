use crate::core::{
    catalog::ProductCatalog,
    matcher::{recommend, MatchResult},
    profiler::AudienceProfiler,
};
use crate::error::Result;
use crate::models::{AudienceProfile, RecommendationReport};
use crate::services::TabularDataset;

/// Builds the audience profile and product catalog once and answers
/// recommendation queries against them
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    profile: AudienceProfile,
    catalog: ProductCatalog,
}

impl RecommendationEngine {
    /// Profile the audience survey and load the product catalog
    pub fn new(audience: &TabularDataset, catalog: &TabularDataset) -> Result<Self> {
        let profile = AudienceProfiler::from_dataset(audience)?.create_profile()?;
        let catalog = ProductCatalog::from_dataset(catalog)?;

        Ok(Self::from_parts(profile, catalog))
    }

    pub fn from_parts(profile: AudienceProfile, catalog: ProductCatalog) -> Self {
        Self { profile, catalog }
    }

    pub fn profile(&self) -> &AudienceProfile {
        &self.profile
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn recommendations(&self, top_n: usize) -> MatchResult {
        recommend(&self.profile, self.catalog.products(), top_n)
    }

    pub fn report(&self, top_n: usize) -> RecommendationReport {
        let result = self.recommendations(top_n);
        RecommendationReport::new(
            self.profile.clone(),
            &result.recommendations,
            result.total_matching,
        )
    }
}
