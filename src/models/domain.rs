use serde::{Deserialize, Serialize};
use std::fmt;

/// Skin type suitability category
///
/// Declaration order is significant: it breaks ties when picking the
/// dominant skin type of an audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkinType {
    Combination,
    Dry,
    Normal,
    Oily,
    Sensitive,
}

impl SkinType {
    pub const ALL: [SkinType; 5] = [
        SkinType::Combination,
        SkinType::Dry,
        SkinType::Normal,
        SkinType::Oily,
        SkinType::Sensitive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SkinType::Combination => "Combination",
            SkinType::Dry => "Dry",
            SkinType::Normal => "Normal",
            SkinType::Oily => "Oily",
            SkinType::Sensitive => "Sensitive",
        }
    }

    /// Column holding this skin type's one-hot indicator in the audience survey
    pub fn audience_column(self) -> String {
        format!("Skin Type_{}", self.name())
    }

    /// Column holding this skin type's suitability flag in the product catalog
    pub fn catalog_column(self) -> &'static str {
        self.name()
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cosmetic benefit tag requested by the audience or offered by a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Feature {
    #[serde(rename = "Anti-acne")]
    AntiAcne,
    #[serde(rename = "Anti-aging")]
    AntiAging,
    #[serde(rename = "Hydrating")]
    Hydrating,
    #[serde(rename = "Anti-dark spots")]
    AntiDarkSpots,
    #[serde(rename = "Day Care")]
    DayCare,
    #[serde(rename = "Night Care")]
    NightCare,
    #[serde(rename = "Sun Protect")]
    SunProtect,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::AntiAcne,
        Feature::AntiAging,
        Feature::Hydrating,
        Feature::AntiDarkSpots,
        Feature::DayCare,
        Feature::NightCare,
        Feature::SunProtect,
    ];

    /// Column name, shared by the audience survey and the product catalog
    pub fn name(self) -> &'static str {
        match self {
            Feature::AntiAcne => "Anti-acne",
            Feature::AntiAging => "Anti-aging",
            Feature::Hydrating => "Hydrating",
            Feature::AntiDarkSpots => "Anti-dark spots",
            Feature::DayCare => "Day Care",
            Feature::NightCare => "Night Care",
            Feature::SunProtect => "Sun Protect",
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One survey respondent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceRecord {
    pub age: u32,
    pub gender: String,
    /// Indicator weights indexed by `SkinType` declaration order
    pub skin_types: [f64; 5],
    /// Indicator weights indexed by `Feature` declaration order
    pub features: [f64; 7],
}

impl AudienceRecord {
    /// Build a record with one-hot skin type and the given requested features
    pub fn new(age: u32, gender: impl Into<String>, skin_type: SkinType, features: &[Feature]) -> Self {
        let mut skin_types = [0.0; 5];
        skin_types[skin_type.index()] = 1.0;

        let mut feature_weights = [0.0; 7];
        for feature in features {
            feature_weights[feature.index()] = 1.0;
        }

        Self {
            age,
            gender: gender.into(),
            skin_types,
            features: feature_weights,
        }
    }

    #[inline]
    pub fn skin_type_weight(&self, skin_type: SkinType) -> f64 {
        self.skin_types[skin_type.index()]
    }

    #[inline]
    pub fn feature_weight(&self, feature: Feature) -> f64 {
        self.features[feature.index()]
    }
}

/// Representative summary of an audience
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceProfile {
    pub age: u32,
    pub gender: String,
    #[serde(rename = "skinType")]
    pub skin_type: SkinType,
    /// The three most requested features, most requested first
    #[serde(rename = "cosmeticFeatures")]
    pub cosmetic_features: Vec<Feature>,
}

/// Catalog product with its suitability and feature sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosmeticProduct {
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub label: Option<String>,
    pub price: f64,
    /// Popularity score, higher is more popular
    pub rank: f64,
    #[serde(rename = "skinTypes")]
    pub skin_types: Vec<SkinType>,
    pub features: Vec<Feature>,
}

impl CosmeticProduct {
    #[inline]
    pub fn suits(&self, skin_type: SkinType) -> bool {
        self.skin_types.contains(&skin_type)
    }

    #[inline]
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// Helper to get the product type, defaulting to "Unknown"
    pub fn label_or_unknown(&self) -> &str {
        self.label.as_deref().unwrap_or("Unknown")
    }

    /// Check whether this product covers the audience's skin type and top features
    pub fn matches_audience(&self, profile: &AudienceProfile) -> bool {
        crate::core::filters::matches_audience(self, profile)
    }
}
