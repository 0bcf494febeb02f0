use crate::error::{Result, SynchroError};
use crate::models::{AudienceProfile, AudienceRecord, Feature, SkinType};
use crate::services::{Row, TabularDataset};

/// Number of requested features carried into the profile
pub const TOP_FEATURE_COUNT: usize = 3;

pub const AGE_COLUMN: &str = "Age";
pub const GENDER_COLUMN: &str = "Gender";

/// Reduces an audience survey to a single representative profile
#[derive(Debug, Clone, Default)]
pub struct AudienceProfiler {
    records: Vec<AudienceRecord>,
}

impl AudienceProfiler {
    pub fn new(records: Vec<AudienceRecord>) -> Self {
        Self { records }
    }

    /// Parse every survey row of the dataset
    pub fn from_dataset(dataset: &TabularDataset) -> Result<Self> {
        let records = dataset
            .rows()
            .iter()
            .map(parse_audience_record)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[AudienceRecord] {
        &self.records
    }

    pub fn create_profile(&self) -> Result<AudienceProfile> {
        create_profile(&self.records)
    }
}

/// Build the audience profile
///
/// # Rules
/// - age and gender are the most frequent values, ties going to the value
///   seen first
/// - the skin type with the highest indicator sum wins, ties going to the
///   earlier declared skin type
/// - features are ordered by indicator sum (stable, so ties keep declaration
///   order) and cut to the first `TOP_FEATURE_COUNT`
pub fn create_profile(records: &[AudienceRecord]) -> Result<AudienceProfile> {
    let empty = || SynchroError::EmptyInput("audience has no records".to_string());

    let age = most_frequent(records.iter().map(|r| r.age)).ok_or_else(empty)?;
    let gender = most_frequent(records.iter().map(|r| r.gender.as_str()))
        .ok_or_else(empty)?
        .to_string();
    let skin_type = dominant_skin_type(records).ok_or_else(empty)?;
    let cosmetic_features = top_features(records, TOP_FEATURE_COUNT);

    tracing::info!(
        "Audience profile built from {} records: age={}, gender={}, skin_type={}, features={:?}",
        records.len(),
        age,
        gender,
        skin_type,
        cosmetic_features
    );

    Ok(AudienceProfile {
        age,
        gender,
        skin_type,
        cosmetic_features,
    })
}

/// Parse a survey row into an audience record
pub fn parse_audience_record(row: &Row) -> Result<AudienceRecord> {
    let age = row.integer(AGE_COLUMN)?;
    let gender = row.text(GENDER_COLUMN)?;

    let mut skin_types = [0.0; 5];
    for skin_type in SkinType::ALL {
        skin_types[skin_type.index()] = row.indicator(&skin_type.audience_column())?;
    }

    let mut features = [0.0; 7];
    for feature in Feature::ALL {
        features[feature.index()] = row.indicator(feature.name())?;
    }

    Ok(AudienceRecord {
        age,
        gender,
        skin_types,
        features,
    })
}

/// Indicator sum per skin type, in declaration order
pub fn skin_type_totals(records: &[AudienceRecord]) -> Vec<(SkinType, f64)> {
    SkinType::ALL
        .iter()
        .map(|&skin_type| {
            let total = records.iter().map(|r| r.skin_type_weight(skin_type)).sum();
            (skin_type, total)
        })
        .collect()
}

/// Indicator sum per feature, in declaration order
pub fn feature_totals(records: &[AudienceRecord]) -> Vec<(Feature, f64)> {
    Feature::ALL
        .iter()
        .map(|&feature| {
            let total = records.iter().map(|r| r.feature_weight(feature)).sum();
            (feature, total)
        })
        .collect()
}

fn dominant_skin_type(records: &[AudienceRecord]) -> Option<SkinType> {
    if records.is_empty() {
        return None;
    }

    skin_type_totals(records)
        .into_iter()
        .fold(None, |best: Option<(SkinType, f64)>, (skin_type, total)| match best {
            Some((_, best_total)) if best_total.total_cmp(&total).is_ge() => best,
            _ => Some((skin_type, total)),
        })
        .map(|(skin_type, _)| skin_type)
}

fn top_features(records: &[AudienceRecord], count: usize) -> Vec<Feature> {
    let mut totals = feature_totals(records);

    // sort_by is stable
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));

    totals.into_iter().take(count).map(|(feature, _)| feature).collect()
}

/// Most frequent value, ties resolved by first occurrence
fn most_frequent<T: PartialEq>(values: impl IntoIterator<Item = T>) -> Option<T> {
    let counts = values
        .into_iter()
        .fold(Vec::<(T, usize)>::new(), |mut counts, value| {
            match counts.iter_mut().find(|(seen, _)| *seen == value) {
                Some((_, count)) => *count += 1,
                None => counts.push((value, 1)),
            }
            counts
        });

    counts
        .into_iter()
        .fold(None, |best: Option<(T, usize)>, (value, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((value, count)),
        })
        .map(|(value, _)| value)
}
