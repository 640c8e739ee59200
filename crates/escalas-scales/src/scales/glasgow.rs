use escalas_core::models::category::ScaleCategory;
use escalas_core::models::severity::Severity;

use super::{band, scored};
use crate::definition::{ScaleDefinition, ScoringRule};

/// Glasgow Coma Scale: eye, verbal and motor response. Total 3–15.
pub fn definition() -> ScaleDefinition {
    ScaleDefinition {
        id: "glasgow".to_string(),
        name: "Glasgow Coma Scale".to_string(),
        category: ScaleCategory::Adult,
        description: "Level of consciousness".to_string(),
        max_score: Some(15),
        parameters: vec![
            scored(
                "eye",
                "Eye opening",
                4,
                &[(4, "Spontaneous"), (3, "To verbal command"), (2, "To pain"), (1, "None")],
            ),
            scored(
                "verbal",
                "Verbal response",
                5,
                &[
                    (5, "Oriented, conversing"),
                    (4, "Disoriented, conversing"),
                    (3, "Inappropriate words"),
                    (2, "Incomprehensible sounds"),
                    (1, "None"),
                ],
            ),
            scored(
                "motor",
                "Motor response",
                6,
                &[
                    (6, "Obeys commands"),
                    (5, "Localises pain"),
                    (4, "Normal withdrawal"),
                    (3, "Abnormal flexion"),
                    (2, "Abnormal extension"),
                    (1, "None"),
                ],
            ),
        ],
        rule: ScoringRule::Sum,
        bands: vec![
            band(Some(13), Some(15), "Mild injury", Severity::Low),
            band(Some(9), Some(12), "Moderate injury", Severity::Moderate),
            band(Some(3), Some(8), "Severe injury", Severity::High),
        ],
    }
}
