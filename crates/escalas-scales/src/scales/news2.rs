use escalas_core::models::category::ScaleCategory;
use escalas_core::models::severity::Severity;

use super::{band, context, options, scored};
use crate::definition::{Condition, OptionVariant, ScaleDefinition, ScoringRule};

/// Key of the SpO2 scale toggle. Scale 2 is for confirmed hypercapnic
/// respiratory failure.
pub const OXYGEN_SCALE: &str = "oxygen_scale";

/// National Early Warning Score 2.
///
/// Any single scored parameter at 3 escalates to the hourly-review band even
/// when the aggregate is lower.
pub fn definition() -> ScaleDefinition {
    let spo2_scale_1 = [(0, "≥96%"), (1, "94-95%"), (2, "92-93%"), (3, "≤91%")];
    let spo2_scale_2 = [(0, "≥88%"), (1, "86-87%"), (2, "84-85%"), (3, "≤83%")];

    let mut spo2 = scored("spo2", "Oxygen saturation", 0, &spo2_scale_1);
    spo2.variants.push(OptionVariant {
        when: Condition {
            parameter: OXYGEN_SCALE.to_string(),
            equals: 2,
        },
        options: options(&spo2_scale_2),
    });

    ScaleDefinition {
        id: "news2".to_string(),
        name: "NEWS2".to_string(),
        category: ScaleCategory::Adult,
        description: "National Early Warning Score 2 for clinical deterioration".to_string(),
        max_score: Some(20),
        parameters: vec![
            context(
                OXYGEN_SCALE,
                "SpO2 scale",
                1,
                &[(1, "Scale 1 (most patients)"), (2, "Scale 2 (hypercapnic respiratory failure)")],
            ),
            scored(
                "respiratory_rate",
                "Respiratory rate",
                0,
                &[(0, "12-20 rpm"), (1, "9-11 rpm"), (2, "21-24 rpm"), (3, "≤8 or ≥25 rpm")],
            ),
            spo2,
            scored(
                "supplemental_oxygen",
                "Air or oxygen",
                0,
                &[(0, "Air"), (2, "Supplemental oxygen")],
            ),
            scored(
                "systolic_bp",
                "Systolic blood pressure",
                0,
                &[
                    (0, "111-219 mmHg"),
                    (1, "101-110 mmHg"),
                    (2, "91-100 mmHg"),
                    (3, "≤90 or ≥220 mmHg"),
                ],
            ),
            scored(
                "heart_rate",
                "Heart rate",
                0,
                &[
                    (0, "51-90 bpm"),
                    (1, "41-50 or 91-110 bpm"),
                    (2, "111-130 bpm"),
                    (3, "≤40 or ≥131 bpm"),
                ],
            ),
            scored(
                "consciousness",
                "Consciousness",
                0,
                &[(0, "Alert"), (3, "New confusion, voice, pain or unresponsive")],
            ),
            scored(
                "temperature",
                "Temperature",
                0,
                &[
                    (0, "36.1-38.0°C"),
                    (1, "35.1-36.0 or 38.1-39.0°C"),
                    (2, "≥39.1°C"),
                    (3, "≤35.0°C"),
                ],
            ),
        ],
        rule: ScoringRule::SumWithOverride {
            threshold: 3,
            label: "Hourly observation, consider level 2 care".to_string(),
            severity: Severity::High,
        },
        bands: vec![
            band(Some(0), Some(0), "Minimum every 12 hours", Severity::Low),
            band(Some(1), Some(4), "Every 4-6 hours", Severity::Moderate),
            band(Some(5), Some(6), "Hourly observation, consider level 2 care", Severity::High),
            band(Some(7), None, "Continuous monitoring, emergency level 3 care", Severity::Critical),
        ],
    }
}
