use escalas_core::models::category::ScaleCategory;
use escalas_core::models::severity::Severity;

use super::{band, scored};
use crate::definition::{ScaleDefinition, ScoringRule};

/// Morse Fall Scale. Weighted yes/no items, total 0–125.
pub fn definition() -> ScaleDefinition {
    ScaleDefinition {
        id: "morse".to_string(),
        name: "Morse Fall Scale".to_string(),
        category: ScaleCategory::Adult,
        description: "Fall risk in adults".to_string(),
        max_score: Some(125),
        parameters: vec![
            scored("fall_history", "History of falling", 0, &[(0, "No"), (25, "Yes")]),
            scored("secondary_diagnosis", "Secondary diagnosis", 0, &[(0, "No"), (15, "Yes")]),
            scored(
                "ambulatory_aid",
                "Ambulatory aid",
                0,
                &[(0, "None"), (15, "Crutches/cane"), (30, "Furniture")],
            ),
            scored("iv_therapy", "IV therapy", 0, &[(0, "No"), (20, "Yes")]),
            scored("gait", "Gait/transferring", 0, &[(0, "Normal"), (10, "Weak"), (20, "Impaired")]),
            scored(
                "mental_status",
                "Mental status",
                0,
                &[(0, "Oriented to own ability"), (15, "Forgets limitations")],
            ),
        ],
        rule: ScoringRule::Sum,
        bands: vec![
            band(Some(0), Some(24), "Low fall risk", Severity::Low),
            band(Some(25), Some(50), "Moderate fall risk", Severity::Moderate),
            band(Some(51), None, "High fall risk", Severity::High),
        ],
    }
}
