//! Rendering and persistence of recommendation reports

use crate::error::Result;
use crate::models::RecommendationReport;
use serde::Deserialize;
use std::fmt::Display;
use std::path::Path;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(report: &RecommendationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// Plain-text report: profile block, fit count, then the numbered recommendations
pub fn render_text(report: &RecommendationReport) -> String {
    let profile = &report.profile;
    let mut lines = vec![
        "Audience Profile".to_string(),
        format!("  - Age: {}", profile.age),
        format!("  - Gender: {}", profile.gender),
        format!("  - Skin Type: {}", profile.skin_type),
        format!("  - Cosmetic Features: {}", join(&profile.cosmetic_features)),
        String::new(),
        format!("Total Fit Products: {}", report.total_matching),
        String::new(),
    ];

    if !report.has_recommendations() {
        lines.push("No matching products found.".to_string());
        return lines.join("\n");
    }

    lines.push("Top Cosmetic Recommendations".to_string());
    lines.extend(report.recommendations.iter().map(|product| {
        format!(
            "{}. {} by {}\n   - Type: {}\n   - Rank: {}, Price: ${}\n   - Suitable for: {} skin\n   - Features: {}",
            product.position,
            product.name,
            product.brand,
            product.product_type,
            product.rank,
            product.price,
            join(&product.suitable_for),
            join(&product.features),
        )
    }));

    lines.join("\n")
}

pub fn render_json(report: &RecommendationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Persist rendered output, replacing any previous report
pub fn write_report<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, contents)?;
    tracing::info!("Report written to {}", path.display());
    Ok(())
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
