use crate::models::{AudienceProfile, CosmeticProduct, Feature, SkinType};

/// Check if a product is eligible for the audience
///
/// A product matches when it suits the audience's dominant skin type and
/// offers every one of the audience's top features.
#[inline]
pub fn matches_audience(product: &CosmeticProduct, profile: &AudienceProfile) -> bool {
    covers_skin_type(product, profile.skin_type)
        && covers_features(product, &profile.cosmetic_features)
}

#[inline]
pub fn covers_skin_type(product: &CosmeticProduct, skin_type: SkinType) -> bool {
    product.suits(skin_type)
}

/// Subset test: a single missing feature excludes the product
#[inline]
pub fn covers_features(product: &CosmeticProduct, features: &[Feature]) -> bool {
    features.iter().all(|&feature| product.has_feature(feature))
}
