use escalas_core::models::category::ScaleCategory;
use escalas_core::models::severity::Severity;

use super::{band, scored};
use crate::definition::{ScaleDefinition, ScoringRule};

/// Braden Scale for pressure injury risk. Lower totals mean higher risk.
pub fn definition() -> ScaleDefinition {
    ScaleDefinition {
        id: "braden".to_string(),
        name: "Braden Scale".to_string(),
        category: ScaleCategory::Adult,
        description: "Pressure injury risk".to_string(),
        max_score: Some(23),
        parameters: vec![
            scored(
                "sensory_perception",
                "Sensory perception",
                4,
                &[
                    (1, "Completely limited"),
                    (2, "Very limited"),
                    (3, "Slightly limited"),
                    (4, "No impairment"),
                ],
            ),
            scored(
                "moisture",
                "Moisture",
                4,
                &[
                    (1, "Constantly moist"),
                    (2, "Often moist"),
                    (3, "Occasionally moist"),
                    (4, "Rarely moist"),
                ],
            ),
            scored(
                "activity",
                "Activity",
                4,
                &[
                    (1, "Bedfast"),
                    (2, "Chairfast"),
                    (3, "Walks occasionally"),
                    (4, "Walks frequently"),
                ],
            ),
            scored(
                "mobility",
                "Mobility",
                4,
                &[
                    (1, "Completely immobile"),
                    (2, "Very limited"),
                    (3, "Slightly limited"),
                    (4, "No limitation"),
                ],
            ),
            scored(
                "nutrition",
                "Nutrition",
                4,
                &[
                    (1, "Very poor"),
                    (2, "Probably inadequate"),
                    (3, "Adequate"),
                    (4, "Excellent"),
                ],
            ),
            scored(
                "friction_shear",
                "Friction and shear",
                3,
                &[(1, "Problem"), (2, "Potential problem"), (3, "No apparent problem")],
            ),
        ],
        rule: ScoringRule::Sum,
        bands: vec![
            band(Some(19), None, "Low risk", Severity::Low),
            band(Some(15), Some(18), "Moderate risk", Severity::Moderate),
            band(Some(13), Some(14), "High risk", Severity::High),
            band(None, Some(12), "Very high risk", Severity::Critical),
        ],
    }
}
