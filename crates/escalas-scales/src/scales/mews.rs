use escalas_core::models::category::ScaleCategory;
use escalas_core::models::severity::Severity;

use super::{band, scored};
use crate::definition::{ScaleDefinition, ScoringRule};

/// Modified Early Warning Score. Sum only: a single 3 does not escalate on
/// its own, unlike NEWS2.
pub fn definition() -> ScaleDefinition {
    ScaleDefinition {
        id: "mews".to_string(),
        name: "MEWS".to_string(),
        category: ScaleCategory::Adult,
        description: "Modified Early Warning Score for clinical deterioration".to_string(),
        max_score: Some(14),
        parameters: vec![
            scored(
                "systolic_bp",
                "Systolic blood pressure",
                0,
                &[
                    (0, "101-160 mmHg"),
                    (1, "81-100 or 161-180 mmHg"),
                    (2, "71-80 or 181-199 mmHg"),
                    (3, "≤70 or ≥200 mmHg"),
                ],
            ),
            scored(
                "heart_rate",
                "Heart rate",
                0,
                &[
                    (0, "51-100 bpm"),
                    (1, "41-50 or 101-110 bpm"),
                    (2, "≤40 or 111-129 bpm"),
                    (3, "≥130 bpm"),
                ],
            ),
            scored(
                "respiratory_rate",
                "Respiratory rate",
                0,
                &[
                    (0, "9-14 rpm"),
                    (1, "15-20 rpm"),
                    (2, "≤8 or 21-29 rpm"),
                    (3, "≥30 rpm"),
                ],
            ),
            scored(
                "temperature",
                "Temperature",
                0,
                &[
                    (0, "36.1-37.9°C"),
                    (1, "35.1-36.0 or 38.0-38.4°C"),
                    (2, "≤35.0 or ≥38.5°C"),
                ],
            ),
            scored(
                "consciousness",
                "Level of consciousness (AVPU)",
                0,
                &[
                    (0, "Alert"),
                    (1, "Reacts to voice"),
                    (2, "Reacts to pain"),
                    (3, "Unresponsive"),
                ],
            ),
        ],
        rule: ScoringRule::Sum,
        bands: vec![
            band(Some(0), Some(2), "Low risk, routine observation", Severity::Low),
            band(Some(3), Some(4), "Moderate risk, reassess every 4 hours", Severity::Moderate),
            band(Some(5), None, "High risk, urgent medical review", Severity::High),
        ],
    }
}
