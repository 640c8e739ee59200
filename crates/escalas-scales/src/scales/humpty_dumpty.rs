use escalas_core::models::category::ScaleCategory;
use escalas_core::models::severity::Severity;

use super::{band, scored};
use crate::definition::{ScaleDefinition, ScoringRule};

/// Humpty Dumpty Falls Scale for paediatric inpatients. Total 7–24.
pub fn definition() -> ScaleDefinition {
    ScaleDefinition {
        id: "humpty_dumpty".to_string(),
        name: "Humpty Dumpty Falls Scale".to_string(),
        category: ScaleCategory::Pediatric,
        description: "Fall risk in children".to_string(),
        max_score: Some(24),
        parameters: vec![
            scored(
                "age",
                "Age",
                2,
                &[(1, "13 years or older"), (2, "7-12 years"), (3, "3-6 years"), (4, "Under 3 years")],
            ),
            scored("gender", "Gender", 1, &[(1, "Female"), (2, "Male")]),
            scored(
                "diagnosis",
                "Diagnosis",
                1,
                &[
                    (1, "Other diagnoses"),
                    (2, "Psychological or behavioural disorders"),
                    (3, "Altered oxygenation"),
                    (4, "Neurological diagnosis"),
                ],
            ),
            scored(
                "cognitive_impairment",
                "Cognitive impairment",
                1,
                &[
                    (1, "Fully oriented"),
                    (2, "Oriented to own ability"),
                    (3, "Forgets limitations"),
                    (4, "Not aware of limitations"),
                ],
            ),
            scored(
                "environment",
                "Environmental factors",
                1,
                &[
                    (1, "Outpatient area"),
                    (2, "Patient placed in bed"),
                    (3, "Uses assistive devices or furniture"),
                    (4, "History of falls or infant in bed"),
                ],
            ),
            scored(
                "surgery_sedation",
                "Response to surgery, sedation or anaesthesia",
                1,
                &[(1, "More than 48 hours or none"), (2, "Within 48 hours"), (3, "Within 24 hours")],
            ),
            scored(
                "medication",
                "Medication use",
                1,
                &[
                    (1, "Other medications or none"),
                    (2, "One high-risk medication"),
                    (3, "Two or more high-risk medications"),
                ],
            ),
        ],
        rule: ScoringRule::Sum,
        bands: vec![
            band(Some(7), Some(11), "Low fall risk", Severity::Low),
            band(Some(12), None, "High fall risk", Severity::High),
        ],
    }
}
