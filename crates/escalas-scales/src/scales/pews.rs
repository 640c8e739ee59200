use escalas_core::models::category::ScaleCategory;
use escalas_core::models::severity::Severity;

use super::{band, scored};
use crate::definition::{ScaleDefinition, ScoringRule};

/// Paediatric Early Warning Score.
pub fn definition() -> ScaleDefinition {
    ScaleDefinition {
        id: "pews".to_string(),
        name: "PEWS".to_string(),
        category: ScaleCategory::Pediatric,
        description: "Paediatric Early Warning Score for clinical deterioration".to_string(),
        max_score: Some(12),
        parameters: vec![
            scored(
                "behaviour",
                "Behaviour",
                0,
                &[
                    (0, "Playing, appropriate"),
                    (1, "Sleeping"),
                    (2, "Irritable, consolable"),
                    (3, "Lethargic, confused or reduced response to pain"),
                ],
            ),
            scored(
                "cardiovascular",
                "Cardiovascular",
                0,
                &[
                    (0, "Pink, capillary refill 1-2 s"),
                    (1, "Pale, or capillary refill 3 s"),
                    (2, "Grey, or capillary refill 4 s, or tachycardia 20 above normal"),
                    (3, "Grey and mottled, or capillary refill ≥5 s, or tachycardia 30 above normal"),
                ],
            ),
            scored(
                "respiratory",
                "Respiratory",
                0,
                &[
                    (0, "Within normal parameters, no retractions"),
                    (1, "Rate >10 above normal, accessory muscles, or FiO2 30%"),
                    (2, "Rate >20 above normal, retractions, or FiO2 40%"),
                    (3, "Rate 5 below normal with retractions or grunting, or FiO2 50%"),
                ],
            ),
            scored(
                "nebulisation",
                "Nebulisation",
                0,
                &[(0, "None"), (1, "Intermittent"), (2, "Continuous or every 15 minutes")],
            ),
            scored(
                "post_op_vomiting",
                "Persistent post-operative vomiting",
                0,
                &[(0, "No"), (1, "Yes")],
            ),
        ],
        rule: ScoringRule::Sum,
        bands: vec![
            band(Some(0), Some(2), "Low risk, continue routine care", Severity::Low),
            band(Some(3), Some(4), "Intermediate risk, increase assessment frequency", Severity::Moderate),
            band(Some(5), None, "High risk, consider ICU transfer", Severity::High),
        ],
    }
}
