use crate::core::filters::matches_audience;
use crate::models::{AudienceProfile, CosmeticProduct};

/// Default number of recommendations per report
pub const DEFAULT_TOP_N: usize = 5;

/// Result of the matching process
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub recommendations: Vec<CosmeticProduct>,
    /// Number of matching products before truncation
    pub total_matching: usize,
}

/// Ranking pipeline: filter, sort by rank, truncate
///
/// # Pipeline Stages
/// 1. Skin type and feature filtering
/// 2. Stable sort by rank, most popular first
/// 3. Truncation to `top_n`
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    top_n: usize,
}

impl Matcher {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    pub fn with_default_top_n() -> Self {
        Self::new(DEFAULT_TOP_N)
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Find the best ranked products for the audience
    pub fn find_matches(&self, profile: &AudienceProfile, products: &[CosmeticProduct]) -> MatchResult {
        recommend(profile, products, self.top_n)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_top_n()
    }
}

/// Rank the products matching `profile` and keep the first `top_n`
///
/// Products with equal rank keep their catalog order.
pub fn recommend(profile: &AudienceProfile, products: &[CosmeticProduct], top_n: usize) -> MatchResult {
    let mut matching: Vec<CosmeticProduct> = products
        .iter()
        .filter(|product| matches_audience(product, profile))
        .cloned()
        .collect();

    let total_matching = matching.len();

    matching.sort_by(|a, b| b.rank.total_cmp(&a.rank));
    matching.truncate(top_n);

    tracing::debug!(
        "Matched {} of {} products, returning {}",
        total_matching,
        products.len(),
        matching.len()
    );

    MatchResult {
        recommendations: matching,
        total_matching,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Feature, SkinType};

    fn create_product(name: &str, rank: f64, skin_type: SkinType, features: &[Feature]) -> CosmeticProduct {
        CosmeticProduct {
            name: name.to_string(),
            brand: "Brand".to_string(),
            label: None,
            price: 30.0,
            rank,
            skin_types: vec![skin_type],
            features: features.to_vec(),
        }
    }

    fn create_profile() -> AudienceProfile {
        AudienceProfile {
            age: 25,
            gender: "F".to_string(),
            skin_type: SkinType::Dry,
            cosmetic_features: vec![Feature::Hydrating, Feature::AntiAcne, Feature::AntiAging],
        }
    }

    const WANTED: [Feature; 3] = [Feature::Hydrating, Feature::AntiAcne, Feature::AntiAging];

    #[test]
    fn test_find_matches_basic() {
        let products = vec![
            create_product("1", 4.0, SkinType::Dry, &WANTED),
            create_product("2", 4.5, SkinType::Oily, &WANTED),
            create_product("3", 4.8, SkinType::Dry, &[Feature::Hydrating, Feature::AntiAcne]),
        ];

        let result = recommend(&create_profile(), &products, 10);

        assert_eq!(result.total_matching, 1);
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].name, "1");
    }

    #[test]
    fn test_sorted_by_rank_descending() {
        let products = vec![
            create_product("low", 3.1, SkinType::Dry, &WANTED),
            create_product("high", 4.9, SkinType::Dry, &WANTED),
            create_product("mid", 4.0, SkinType::Dry, &WANTED),
        ];

        let result = recommend(&create_profile(), &products, 10);
        let names: Vec<&str> = result.recommendations.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_equal_ranks_keep_catalog_order() {
        let products = vec![
            create_product("b", 4.0, SkinType::Dry, &WANTED),
            create_product("a", 4.0, SkinType::Dry, &WANTED),
            create_product("c", 4.0, SkinType::Dry, &WANTED),
        ];

        let result = recommend(&create_profile(), &products, 10);
        let names: Vec<&str> = result.recommendations.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_respects_limit() {
        let products: Vec<CosmeticProduct> = (0..20)
            .map(|i| create_product(&i.to_string(), i as f64, SkinType::Dry, &WANTED))
            .collect();

        let result = Matcher::with_default_top_n().find_matches(&create_profile(), &products);

        assert_eq!(result.recommendations.len(), DEFAULT_TOP_N);
        assert_eq!(result.total_matching, 20);
        assert_eq!(result.recommendations[0].name, "19");
    }

    #[test]
    fn test_zero_top_n_keeps_count() {
        let products: Vec<CosmeticProduct> = (0..5)
            .map(|i| create_product(&i.to_string(), 1.0, SkinType::Dry, &WANTED))
            .collect();

        let result = recommend(&create_profile(), &products, 0);

        assert!(result.recommendations.is_empty());
        assert_eq!(result.total_matching, 5);
    }

    #[test]
    fn test_nan_ranks_do_not_break_sort() {
        let products: Vec<CosmeticProduct> = (0..40)
            .map(|i| {
                let rank = if i % 3 == 0 { f64::NAN } else { i as f64 };
                create_product(&i.to_string(), rank, SkinType::Dry, &WANTED)
            })
            .collect();

        let result = recommend(&create_profile(), &products, 40);

        assert_eq!(result.total_matching, 40);
        assert_eq!(result.recommendations.len(), 40);
        let finite: Vec<f64> = result
            .recommendations
            .iter()
            .map(|p| p.rank)
            .filter(|rank| !rank.is_nan())
            .collect();
        assert!(finite.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_empty_catalog() {
        let result = recommend(&create_profile(), &[], 5);

        assert!(result.recommendations.is_empty());
        assert_eq!(result.total_matching, 0);
    }
}
