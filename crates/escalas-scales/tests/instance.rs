use escalas_core::models::category::ScaleCategory;
use escalas_core::models::severity::Severity;
use escalas_scales::definition::{
    Condition, OptionVariant, ParameterRole, ParameterSpec, ScaleDefinition, ScaleOption,
    ScoreBand, ScoringRule,
};
use escalas_scales::error::SelectionError;
use escalas_scales::instance::parse_selection;
use escalas_scales::{evaluate, Catalog, ScaleInstance};

fn scale(id: &str) -> ScaleDefinition {
    Catalog::builtin().unwrap().get(id).unwrap().clone()
}

fn options(values: &[i32]) -> Vec<ScaleOption> {
    values
        .iter()
        .map(|v| ScaleOption {
            value: *v,
            label: format!("option {v}"),
        })
        .collect()
}

/// `level` offers 0..=2 in mode 1 and 0..=4 in mode 2, with a default of 0.
fn mode_dependent_scale() -> ScaleDefinition {
    ScaleDefinition {
        id: "modes".to_string(),
        name: "Modes".to_string(),
        category: ScaleCategory::Adult,
        description: "context dependent options".to_string(),
        max_score: None,
        parameters: vec![
            ParameterSpec {
                key: "mode".to_string(),
                label: "Mode".to_string(),
                role: ParameterRole::Context,
                default: 1,
                options: options(&[1, 2]),
                variants: Vec::new(),
            },
            ParameterSpec {
                key: "level".to_string(),
                label: "Level".to_string(),
                role: ParameterRole::Scored,
                default: 0,
                options: options(&[0, 1, 2]),
                variants: vec![OptionVariant {
                    when: Condition {
                        parameter: "mode".to_string(),
                        equals: 2,
                    },
                    options: options(&[0, 3, 4]),
                }],
            },
        ],
        rule: ScoringRule::Sum,
        bands: vec![ScoreBand {
            min: None,
            max: None,
            label: "any".to_string(),
            severity: Severity::Low,
        }],
    }
}

#[test]
fn new_instance_holds_every_default() {
    let def = scale("braden");
    let inst = ScaleInstance::new(&def);
    assert_eq!(inst.scale_id(), "braden");
    assert_eq!(inst.values().len(), def.parameters.len());
    assert_eq!(inst.get("friction_shear"), Some(3));
    assert_eq!(inst.get("nutrition"), Some(4));
}

#[test]
fn select_rejects_values_outside_the_options() {
    let def = scale("glasgow");
    let mut inst = ScaleInstance::new(&def);
    let err = inst.select(&def, "motor", 7).unwrap_err();
    assert_eq!(
        err,
        SelectionError::InvalidOption {
            parameter: "motor".to_string(),
            value: 7,
            allowed: vec![6, 5, 4, 3, 2, 1],
        }
    );
    assert_eq!(inst.get("motor"), Some(6), "instance unchanged");
}

#[test]
fn select_rejects_unknown_parameters() {
    let def = scale("glasgow");
    let mut inst = ScaleInstance::new(&def);
    assert!(matches!(
        inst.select(&def, "pupils", 1),
        Err(SelectionError::UnknownParameter { parameter, .. }) if parameter == "pupils"
    ));
}

#[test]
fn select_rejects_another_scales_definition() {
    let glasgow = scale("glasgow");
    let apgar = scale("apgar");
    let mut inst = ScaleInstance::new(&glasgow);
    assert!(matches!(
        inst.select(&apgar, "heart_rate", 1),
        Err(SelectionError::ScaleMismatch { .. })
    ));
}

#[test]
fn news2_toggle_swaps_saturation_labels() {
    let def = scale("news2");
    let mut inst = ScaleInstance::new(&def);

    let scale_1 = inst.visible_options(&def, "spo2").unwrap();
    assert_eq!(scale_1[0].label, "≥96%");

    inst.select(&def, "spo2", 2).unwrap();
    inst.select(&def, "oxygen_scale", 2).unwrap();
    let scale_2 = inst.visible_options(&def, "spo2").unwrap();
    assert_eq!(scale_2[0].label, "≥88%");

    // same values on both scales, so the selection survives the toggle
    assert_eq!(inst.get("spo2"), Some(2));
}

#[test]
fn hidden_selection_falls_back_to_default() {
    let def = mode_dependent_scale();
    Catalog::from_definitions(vec![def.clone()]).unwrap();

    let mut inst = ScaleInstance::new(&def);
    inst.select(&def, "mode", 2).unwrap();
    inst.select(&def, "level", 4).unwrap();
    assert_eq!(evaluate(&def, &inst).total_score, 4);

    inst.select(&def, "mode", 1).unwrap();
    assert_eq!(inst.get("level"), Some(0));
    assert_eq!(evaluate(&def, &inst).total_score, 0);
}

#[test]
fn option_only_in_variant_needs_the_toggle_first() {
    let def = mode_dependent_scale();
    let mut inst = ScaleInstance::new(&def);
    assert!(matches!(
        inst.select(&def, "level", 4),
        Err(SelectionError::InvalidOption { value: 4, .. })
    ));
}

#[test]
fn from_selections_applies_context_first() {
    let def = mode_dependent_scale();
    let inst = ScaleInstance::from_selections(&def, [("level", 3), ("mode", 2)]).unwrap();
    assert_eq!(inst.get("mode"), Some(2));
    assert_eq!(inst.get("level"), Some(3));
}

#[test]
fn reset_restores_defaults() {
    let def = scale("apgar");
    let mut inst = ScaleInstance::from_selections(&def, [("heart_rate", 0), ("skin_color", 1)]).unwrap();
    inst.reset(&def);
    assert_eq!(inst, ScaleInstance::new(&def));
}

#[test]
fn parse_selection_splits_key_and_value() {
    assert_eq!(parse_selection("eye=4").unwrap(), ("eye", 4));
    assert_eq!(parse_selection(" motor = 6 ").unwrap(), ("motor", 6));
    assert!(matches!(parse_selection("eye"), Err(SelectionError::Malformed(_))));
    assert!(matches!(parse_selection("eye=four"), Err(SelectionError::Malformed(_))));
}
