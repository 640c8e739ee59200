use escalas_core::models::category::ScaleCategory;
use escalas_core::models::severity::Severity;

use super::{band, scored};
use crate::definition::{ScaleDefinition, ScoringRule};

/// Apgar score for newborn vitality. Five signs rated 0–2.
pub fn definition() -> ScaleDefinition {
    ScaleDefinition {
        id: "apgar".to_string(),
        name: "Apgar Score".to_string(),
        category: ScaleCategory::Pediatric,
        description: "Newborn vitality".to_string(),
        max_score: Some(10),
        parameters: vec![
            scored("heart_rate", "Heart rate", 2, &[(0, "Absent"), (1, "< 100 bpm"), (2, "> 100 bpm")]),
            scored(
                "respiration",
                "Respiratory effort",
                2,
                &[(0, "Absent"), (1, "Weak or irregular cry"), (2, "Strong cry")],
            ),
            scored(
                "muscle_tone",
                "Muscle tone",
                2,
                &[(0, "Limp"), (1, "Some flexion of limbs"), (2, "Active motion")],
            ),
            scored(
                "reflex_irritability",
                "Reflex irritability",
                2,
                &[(0, "No response"), (1, "Grimace"), (2, "Cry")],
            ),
            scored(
                "skin_color",
                "Skin colour",
                2,
                &[(0, "Blue or pale"), (1, "Blue extremities"), (2, "Pink")],
            ),
        ],
        rule: ScoringRule::Sum,
        bands: vec![
            band(Some(8), Some(10), "Good condition", Severity::Low),
            band(Some(4), Some(7), "Moderate difficulty", Severity::Moderate),
            band(Some(0), Some(3), "Severe difficulty", Severity::High),
        ],
    }
}
