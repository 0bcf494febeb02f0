// Integration tests for SynchroCosmetics

use std::io::Write;
use synchro_cosmetics::models::{Feature, SkinType};
use synchro_cosmetics::report::{render, OutputFormat};
use synchro_cosmetics::{RecommendationEngine, SynchroError, TabularDataset};
use tempfile::NamedTempFile;

const AUDIENCE_HEADER: &str = "Age,Gender,Skin Type_Combination,Skin Type_Dry,Skin Type_Normal,Skin Type_Oily,Skin Type_Sensitive,Anti-acne,Anti-aging,Hydrating,Anti-dark spots,Day Care,Night Care,Sun Protect";

const CATALOG_HEADER: &str = "Label,Brand,Name,Price,Rank,Combination,Dry,Normal,Oily,Sensitive,Anti-acne,Anti-aging,Hydrating,Anti-dark spots,Day Care,Night Care,Sun Protect";

fn write_csv(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", header).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file.flush().unwrap();
    file
}

fn audience_file() -> NamedTempFile {
    write_csv(
        AUDIENCE_HEADER,
        &[
            // Dry skin, hydrating + anti-aging + night care dominate
            "28,F,0,1,0,0,0,0,1,1,0,0,1,0",
            "28,F,0,1,0,0,0,0,1,1,0,0,1,0",
            "34,M,0,0,0,1,0,1,0,1,0,0,0,0",
            "41,F,0,1,0,0,0,0,1,0,0,0,1,1",
            "28,M,1,0,0,0,0,0,0,1,0,1,0,0",
        ],
    )
}

fn catalog_file() -> NamedTempFile {
    write_csv(
        CATALOG_HEADER,
        &[
            "Moisturizer,Acme,Rich Cream,45,4.1,0,1,1,0,0,0,1,1,0,0,1,0",
            "Moisturizer,Glow,Night Repair,60,4.6,1,1,1,1,1,0,1,1,1,0,1,0",
            "Cleanser,Acme,Foam Wash,12,4.9,0,0,0,1,0,1,0,0,0,1,0,0",
            "Face Mask,Bloom,Overnight Mask,30,4.1,0,1,0,0,0,0,1,1,0,0,1,1",
            "Eye cream,Glow,Eye Lift,55,3.8,0,1,0,0,1,0,1,1,0,0,0,0",
            "Moisturizer,Pure,Hydra Gel,25,4.3,0,1,0,0,0,0,0,1,0,1,0,0",
        ],
    )
}

#[test]
fn test_integration_end_to_end_recommendations() {
    let audience = TabularDataset::from_path(audience_file().path()).unwrap();
    let catalog = TabularDataset::from_path(catalog_file().path()).unwrap();

    let engine = RecommendationEngine::new(&audience, &catalog).unwrap();
    let profile = engine.profile();

    assert_eq!(profile.age, 28);
    assert_eq!(profile.gender, "F");
    assert_eq!(profile.skin_type, SkinType::Dry);
    assert_eq!(
        profile.cosmetic_features,
        vec![Feature::Hydrating, Feature::AntiAging, Feature::NightCare]
    );

    let result = engine.recommendations(5);

    assert_eq!(result.total_matching, 3);
    let names: Vec<&str> = result.recommendations.iter().map(|p| p.name.as_str()).collect();
    // Rich Cream and Overnight Mask share rank 4.1 and keep catalog order
    assert_eq!(names, vec!["Night Repair", "Rich Cream", "Overnight Mask"]);

    for pair in result.recommendations.windows(2) {
        assert!(pair[0].rank >= pair[1].rank, "Recommendations not sorted by rank");
    }
}

#[test]
fn test_integration_truncation() {
    let audience = TabularDataset::from_path(audience_file().path()).unwrap();
    let catalog = TabularDataset::from_path(catalog_file().path()).unwrap();
    let engine = RecommendationEngine::new(&audience, &catalog).unwrap();

    for top_n in 0..6 {
        let result = engine.recommendations(top_n);
        assert_eq!(result.recommendations.len(), top_n.min(result.total_matching));
        assert_eq!(result.total_matching, 3);
    }
}

#[test]
fn test_integration_text_report() {
    let audience = TabularDataset::from_path(audience_file().path()).unwrap();
    let catalog = TabularDataset::from_path(catalog_file().path()).unwrap();
    let engine = RecommendationEngine::new(&audience, &catalog).unwrap();

    let text = render(&engine.report(2), OutputFormat::Text).unwrap();

    assert!(text.contains("Total Fit Products: 3"));
    assert!(text.contains("1. Night Repair by Glow"));
    assert!(text.contains("2. Rich Cream by Acme"));
    assert!(!text.contains("Overnight Mask"));
}

#[test]
fn test_integration_no_matches_is_not_an_error() {
    let audience = TabularDataset::from_path(
        write_csv(AUDIENCE_HEADER, &["50,M,0,0,0,0,1,1,1,1,0,0,0,0"]).path(),
    )
    .unwrap();
    let catalog = TabularDataset::from_path(catalog_file().path()).unwrap();

    let engine = RecommendationEngine::new(&audience, &catalog).unwrap();
    let report = engine.report(5);

    assert_eq!(report.total_matching, 0);
    assert!(render(&report, OutputFormat::Text)
        .unwrap()
        .contains("No matching products found."));
}

#[test]
fn test_integration_empty_audience() {
    let audience = TabularDataset::from_path(write_csv(AUDIENCE_HEADER, &[]).path()).unwrap();
    let catalog = TabularDataset::from_path(catalog_file().path()).unwrap();

    let err = RecommendationEngine::new(&audience, &catalog).unwrap_err();

    assert!(matches!(err, SynchroError::EmptyInput(_)));
}

#[test]
fn test_integration_missing_catalog_column() {
    let audience = TabularDataset::from_path(audience_file().path()).unwrap();
    let catalog = TabularDataset::from_path(
        write_csv("Name,Brand,Price", &["Rich Cream,Acme,45"]).path(),
    )
    .unwrap();

    let err = RecommendationEngine::new(&audience, &catalog).unwrap_err();

    assert!(matches!(err, SynchroError::MissingField { ref column, row: 1 } if column == "Rank"));
}

#[test]
fn test_integration_missing_file() {
    let err = TabularDataset::from_path("does/not/exist.csv").unwrap_err();
    assert!(matches!(err, SynchroError::Io(_)));
}
