use escalas_core::models::category::ScaleCategory;
use escalas_core::models::severity::Severity;

use super::{band, scored};
use crate::definition::{ScaleDefinition, ScoringRule};

/// Ramsay Sedation Scale. A single level, interpreted directly.
pub fn definition() -> ScaleDefinition {
    ScaleDefinition {
        id: "ramsay".to_string(),
        name: "Ramsay Sedation Scale".to_string(),
        category: ScaleCategory::Adult,
        description: "Depth of sedation".to_string(),
        max_score: Some(6),
        parameters: vec![scored(
            "sedation_level",
            "Sedation level",
            2,
            &[
                (1, "Anxious, agitated, restless"),
                (2, "Cooperative, oriented, tranquil"),
                (3, "Responds to commands only"),
                (4, "Brisk response to glabellar tap or loud noise"),
                (5, "Sluggish response to glabellar tap or loud noise"),
                (6, "No response"),
            ],
        )],
        rule: ScoringRule::Sum,
        bands: vec![
            band(Some(1), Some(1), "Insufficiently sedated", Severity::High),
            band(Some(2), Some(3), "Adequately sedated (target)", Severity::Low),
            band(Some(4), Some(6), "Oversedated", Severity::Moderate),
        ],
    }
}
