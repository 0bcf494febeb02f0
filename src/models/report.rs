use serde::{Deserialize, Serialize};
use crate::models::domain::{AudienceProfile, CosmeticProduct, Feature, SkinType};

/// Recommended product as it appears in a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedProduct {
    pub position: usize,
    pub name: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub rank: f64,
    pub price: f64,
    #[serde(rename = "suitableFor")]
    pub suitable_for: Vec<SkinType>,
    pub features: Vec<Feature>,
}

impl RecommendedProduct {
    pub fn from_product(position: usize, product: &CosmeticProduct) -> Self {
        Self {
            position,
            name: product.name.clone(),
            brand: product.brand.clone(),
            product_type: product.label_or_unknown().to_string(),
            rank: product.rank,
            price: product.price,
            suitable_for: product.skin_types.clone(),
            features: product.features.clone(),
        }
    }
}

/// Full recommendation report for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub profile: AudienceProfile,
    #[serde(rename = "totalMatching")]
    pub total_matching: usize,
    pub recommendations: Vec<RecommendedProduct>,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

impl RecommendationReport {
    pub fn new(
        profile: AudienceProfile,
        recommendations: &[CosmeticProduct],
        total_matching: usize,
    ) -> Self {
        let recommendations = recommendations
            .iter()
            .enumerate()
            .map(|(i, product)| RecommendedProduct::from_product(i + 1, product))
            .collect();

        Self {
            profile,
            total_matching,
            recommendations,
            generated_at: chrono::Utc::now(),
        }
    }

    /// Helper to tell an empty result apart from a populated one
    pub fn has_recommendations(&self) -> bool {
        !self.recommendations.is_empty()
    }
}
