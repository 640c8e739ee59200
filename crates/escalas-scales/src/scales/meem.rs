use escalas_core::models::category::ScaleCategory;
use escalas_core::models::severity::Severity;

use super::{band, context, counted};
use crate::definition::{CovariateOffset, ScaleDefinition, ScoringRule};

pub const EDUCATION: &str = "education";

/// Cutoff for 1-4 years of schooling. Other levels shift it.
pub const BASE_CUTOFF: i32 = 27;

/// Mini-Mental State Examination (MEEM), with an education-adjusted cutoff.
///
/// Bands are relative to the cutoff: `>= cutoff+2` normal, `>= cutoff-1`
/// mild, `>= cutoff-6` moderate, below that severe.
pub fn definition() -> ScaleDefinition {
    ScaleDefinition {
        id: "meem".to_string(),
        name: "Mini-Mental State Examination".to_string(),
        category: ScaleCategory::Adult,
        description: "Cognitive screening adjusted for education".to_string(),
        max_score: Some(30),
        parameters: vec![
            context(
                EDUCATION,
                "Education",
                2,
                &[(1, "Illiterate"), (2, "1-4 years"), (3, "5-8 years"), (4, "9+ years")],
            ),
            counted("temporal_orientation", "Temporal orientation", 5),
            counted("spatial_orientation", "Spatial orientation", 5),
            counted("registration", "Immediate recall", 3),
            counted("attention_calculation", "Attention and calculation", 5),
            counted("recall", "Delayed recall", 3),
            counted("language", "Language", 9),
        ],
        rule: ScoringRule::CovariateAdjustedCutoff {
            covariate: EDUCATION.to_string(),
            base_cutoff: BASE_CUTOFF,
            offsets: vec![
                CovariateOffset { value: 1, offset: -1 },
                CovariateOffset { value: 2, offset: 0 },
                CovariateOffset { value: 3, offset: 1 },
                CovariateOffset { value: 4, offset: 2 },
            ],
        },
        bands: vec![
            band(Some(2), None, "Normal", Severity::Low),
            band(Some(-1), Some(1), "Mild impairment", Severity::Moderate),
            band(Some(-6), Some(-2), "Moderate impairment", Severity::Moderate),
            band(None, Some(-7), "Severe impairment", Severity::High),
        ],
    }
}
