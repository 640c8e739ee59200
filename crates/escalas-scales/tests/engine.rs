use escalas_core::models::severity::Severity;
use escalas_scales::definition::{ScaleDefinition, ScoringRule};
use escalas_scales::engine::{effective_cutoff, save_context, snapshot};
use escalas_scales::error::EvaluationError;
use escalas_scales::scales::{builtin_definitions, meem};
use escalas_scales::{evaluate, try_evaluate, Catalog, ScaleInstance};

fn scale(id: &str) -> ScaleDefinition {
    Catalog::builtin().unwrap().get(id).unwrap().clone()
}

fn instance(def: &ScaleDefinition, selections: &[(&str, i32)]) -> ScaleInstance {
    ScaleInstance::from_selections(def, selections.iter().copied()).unwrap()
}

#[test]
fn glasgow_best_response_is_mild() {
    let def = scale("glasgow");
    let result = evaluate(&def, &instance(&def, &[("eye", 4), ("verbal", 5), ("motor", 6)]));
    assert_eq!(result.total_score, 15);
    assert_eq!(result.interpretation, "Mild injury");
    assert_eq!(result.severity, Severity::Low);
    assert!(!result.overridden);
}

#[test]
fn glasgow_no_response_is_severe() {
    let def = scale("glasgow");
    let result = evaluate(&def, &instance(&def, &[("eye", 1), ("verbal", 1), ("motor", 1)]));
    assert_eq!(result.total_score, 3);
    assert_eq!(result.interpretation, "Severe injury");
    assert_eq!(result.severity, Severity::High);
}

#[test]
fn glasgow_band_edges() {
    let def = scale("glasgow");
    let twelve = evaluate(&def, &instance(&def, &[("eye", 3), ("verbal", 4), ("motor", 5)]));
    assert_eq!(twelve.total_score, 12);
    assert_eq!(twelve.interpretation, "Moderate injury");

    let eight = evaluate(&def, &instance(&def, &[("eye", 2), ("verbal", 2), ("motor", 4)]));
    assert_eq!(eight.total_score, 8);
    assert_eq!(eight.interpretation, "Severe injury");
}

#[test]
fn defaults_evaluate_for_every_builtin_scale() {
    for def in builtin_definitions() {
        let result = try_evaluate(&def, &ScaleInstance::new(&def));
        assert!(result.is_ok(), "{}: {result:?}", def.id);
    }
}

#[test]
fn sum_scales_total_the_selected_values() {
    for def in builtin_definitions()
        .into_iter()
        .filter(|d| d.rule == ScoringRule::Sum)
    {
        let base = ScaleInstance::new(&def);
        let base_total = evaluate(&def, &base).total_score;
        let defaults: i32 = def.scored_parameters().map(|p| p.default).sum();
        assert_eq!(base_total, defaults, "{}", def.id);

        // changing one selection changes only that addend
        for param in def.scored_parameters() {
            for option in &param.options {
                let mut changed = base.clone();
                changed.select(&def, &param.key, option.value).unwrap();
                let total = evaluate(&def, &changed).total_score;
                assert_eq!(
                    total,
                    base_total - param.default + option.value,
                    "{} {}={}",
                    def.id,
                    param.key,
                    option.value
                );
            }
        }
    }
}

#[test]
fn bands_partition_the_attainable_range() {
    for def in builtin_definitions() {
        let (lo, hi) = def.score_range().unwrap();
        let shifts: Vec<i32> = match &def.rule {
            ScoringRule::CovariateAdjustedCutoff {
                base_cutoff,
                offsets,
                ..
            } => offsets.iter().map(|o| base_cutoff + o.offset).collect(),
            _ => vec![0],
        };
        for shift in shifts {
            for score in lo..=hi {
                let matching = def
                    .bands
                    .iter()
                    .filter(|b| b.contains_shifted(score, shift))
                    .count();
                assert_eq!(matching, 1, "{} score {score} shift {shift}", def.id);
            }
        }
    }
}

#[test]
fn ramsay_interprets_the_single_level() {
    let def = scale("ramsay");
    let expected = [
        (1, "Insufficiently sedated"),
        (2, "Adequately sedated (target)"),
        (3, "Adequately sedated (target)"),
        (4, "Oversedated"),
        (6, "Oversedated"),
    ];
    for (level, label) in expected {
        let result = evaluate(&def, &instance(&def, &[("sedation_level", level)]));
        assert_eq!(result.total_score, level);
        assert_eq!(result.interpretation, label);
    }
}

#[test]
fn braden_low_totals_are_highest_risk() {
    let def = scale("braden");
    let defaults = evaluate(&def, &ScaleInstance::new(&def));
    assert_eq!(defaults.total_score, 23);
    assert_eq!(defaults.interpretation, "Low risk");

    let worst = instance(
        &def,
        &[
            ("sensory_perception", 1),
            ("moisture", 1),
            ("activity", 1),
            ("mobility", 1),
            ("nutrition", 1),
            ("friction_shear", 1),
        ],
    );
    let result = evaluate(&def, &worst);
    assert_eq!(result.total_score, 6);
    assert_eq!(result.interpretation, "Very high risk");
    assert_eq!(result.severity, Severity::Critical);
}

#[test]
fn morse_uses_weighted_items() {
    let def = scale("morse");
    let result = evaluate(
        &def,
        &instance(&def, &[("fall_history", 25), ("ambulatory_aid", 30)]),
    );
    assert_eq!(result.total_score, 55);
    assert_eq!(result.interpretation, "High fall risk");

    let edge = evaluate(&def, &instance(&def, &[("fall_history", 25)]));
    assert_eq!(edge.interpretation, "Moderate fall risk");
}

#[test]
fn news2_single_three_forces_override_band() {
    let def = scale("news2");
    let result = evaluate(&def, &instance(&def, &[("consciousness", 3)]));

    assert_eq!(result.total_score, 3);
    assert!(result.overridden);
    assert_eq!(result.interpretation, "Hourly observation, consider level 2 care");
    assert_eq!(result.severity, Severity::High);

    // the same total without a 3 stays in the low band
    let spread = evaluate(
        &def,
        &instance(&def, &[("respiratory_rate", 1), ("heart_rate", 1), ("temperature", 1)]),
    );
    assert_eq!(spread.total_score, 3);
    assert!(!spread.overridden);
    assert_eq!(spread.interpretation, "Every 4-6 hours");
}

#[test]
fn news2_override_holds_whatever_the_total() {
    let def = scale("news2");
    for key in ["respiratory_rate", "spo2", "systolic_bp", "heart_rate", "temperature"] {
        let result = evaluate(&def, &instance(&def, &[(key, 3)]));
        assert!(result.overridden, "{key}");
        assert_eq!(result.total_score, 3);
    }

    let high = instance(
        &def,
        &[("respiratory_rate", 3), ("systolic_bp", 3), ("heart_rate", 2)],
    );
    let result = evaluate(&def, &high);
    assert_eq!(result.total_score, 8);
    assert!(result.overridden);
    assert_eq!(result.interpretation, "Hourly observation, consider level 2 care");
}

#[test]
fn news2_without_override_uses_the_total() {
    let def = scale("news2");
    assert_eq!(
        evaluate(&def, &ScaleInstance::new(&def)).interpretation,
        "Minimum every 12 hours"
    );

    let seven = instance(
        &def,
        &[
            ("respiratory_rate", 2),
            ("spo2", 2),
            ("supplemental_oxygen", 2),
            ("heart_rate", 1),
        ],
    );
    let result = evaluate(&def, &seven);
    assert_eq!(result.total_score, 7);
    assert!(!result.overridden);
    assert_eq!(result.severity, Severity::Critical);
}

#[test]
fn news2_oxygen_scale_toggle_is_not_scored() {
    let def = scale("news2");
    let result = evaluate(&def, &instance(&def, &[("oxygen_scale", 2)]));
    assert_eq!(result.total_score, 0);
}

#[test]
fn mews_has_no_single_parameter_override() {
    let def = scale("mews");
    let result = evaluate(&def, &instance(&def, &[("consciousness", 3)]));
    assert_eq!(result.total_score, 3);
    assert!(!result.overridden);
    assert_eq!(result.interpretation, "Moderate risk, reassess every 4 hours");
}

/// MEEM instance with the given raw total, spread over the items.
fn meem_with_total(def: &ScaleDefinition, education: i32, total: i32) -> ScaleInstance {
    let mut remaining = total;
    let mut selections = vec![(meem::EDUCATION, education)];
    for param in def.scored_parameters() {
        let max = param.options.iter().map(|o| o.value).max().unwrap();
        let take = remaining.min(max);
        selections.push((param.key.as_str(), take));
        remaining -= take;
    }
    assert_eq!(remaining, 0);
    let inst = ScaleInstance::from_selections(def, selections).unwrap();
    assert_eq!(evaluate(def, &inst).total_score, total);
    inst
}

#[test]
fn meem_education_shifts_the_cutoff() {
    let def = scale("meem");
    let expected = [(1, 26), (2, 27), (3, 28), (4, 29)];
    for (education, cutoff) in expected {
        let inst = meem_with_total(&def, education, 20);
        assert_eq!(effective_cutoff(&def, &inst), Some(cutoff));
    }
    assert_eq!(meem::BASE_CUTOFF, 27);
}

#[test]
fn meem_boundary_between_normal_and_mild() {
    let def = scale("meem");
    for education in 1..=4 {
        let cutoff = def.cutoff_for(education).unwrap();

        // 9+ years puts the normal band above the maximum of 30
        if cutoff + 2 <= 30 {
            let normal = evaluate(&def, &meem_with_total(&def, education, cutoff + 2));
            assert_eq!(normal.interpretation, "Normal", "education {education}");
        }

        let mild = evaluate(&def, &meem_with_total(&def, education, cutoff + 1));
        assert_eq!(mild.interpretation, "Mild impairment", "education {education}");
    }
}

#[test]
fn meem_same_total_reads_differently_by_education() {
    let def = scale("meem");

    // cutoff 26: 25 >= 26 - 1
    let illiterate = evaluate(&def, &meem_with_total(&def, 1, 25));
    assert_eq!(illiterate.interpretation, "Mild impairment");

    // cutoff 29: 25 < 29 - 1 but >= 29 - 6
    let schooled = evaluate(&def, &meem_with_total(&def, 4, 25));
    assert_eq!(schooled.interpretation, "Moderate impairment");

    // cutoff 29: 22 < 29 - 6
    let severe = evaluate(&def, &meem_with_total(&def, 4, 22));
    assert_eq!(severe.interpretation, "Severe impairment");
    assert_eq!(severe.severity, Severity::High);
}

#[test]
fn meem_defaults_are_a_full_score() {
    let def = scale("meem");
    let result = evaluate(&def, &ScaleInstance::new(&def));
    assert_eq!(result.total_score, 30);
    assert_eq!(result.interpretation, "Normal");
}

#[test]
fn evaluation_is_repeatable() {
    let def = scale("pews");
    let inst = instance(&def, &[("behaviour", 2), ("respiratory", 1)]);
    let first = evaluate(&def, &inst);
    for _ in 0..5 {
        assert_eq!(evaluate(&def, &inst), first);
    }
    assert_eq!(first.interpretation, "Intermediate risk, increase assessment frequency");
}

#[test]
fn instance_of_another_scale_is_rejected() {
    let glasgow = scale("glasgow");
    let apgar = scale("apgar");
    let err = try_evaluate(&glasgow, &ScaleInstance::new(&apgar)).unwrap_err();
    assert!(matches!(err, EvaluationError::ScaleMismatch { .. }));
}

#[test]
fn missing_parameter_is_a_precondition_violation() {
    let def = scale("glasgow");
    let partial: ScaleInstance =
        serde_json::from_str(r#"{"scale_id":"glasgow","values":{"eye":4,"verbal":5}}"#).unwrap();
    let err = try_evaluate(&def, &partial).unwrap_err();
    assert_eq!(
        err,
        EvaluationError::MissingParameter {
            scale: "glasgow".to_string(),
            parameter: "motor".to_string(),
        }
    );
}

#[test]
fn value_outside_options_is_a_precondition_violation() {
    let def = scale("glasgow");
    let bad: ScaleInstance = serde_json::from_str(
        r#"{"scale_id":"glasgow","values":{"eye":4,"verbal":5,"motor":7}}"#,
    )
    .unwrap();
    assert!(matches!(
        try_evaluate(&def, &bad),
        Err(EvaluationError::ValueNotVisible { value: 7, .. })
    ));
}

#[test]
fn unknown_parameter_is_a_precondition_violation() {
    let def = scale("glasgow");
    let bad: ScaleInstance = serde_json::from_str(
        r#"{"scale_id":"glasgow","values":{"eye":4,"verbal":5,"motor":6,"pupils":2}}"#,
    )
    .unwrap();
    assert!(matches!(
        try_evaluate(&def, &bad),
        Err(EvaluationError::UnknownParameter { parameter, .. }) if parameter == "pupils"
    ));
}

#[test]
#[should_panic(expected = "precondition violated")]
fn evaluate_panics_on_precondition_violation() {
    let def = scale("apgar");
    let partial: ScaleInstance =
        serde_json::from_str(r#"{"scale_id":"apgar","values":{}}"#).unwrap();
    evaluate(&def, &partial);
}

#[test]
fn snapshot_lists_selections_in_declaration_order() {
    let def = scale("glasgow");
    let inst = instance(&def, &[("motor", 5), ("eye", 3)]);
    assert_eq!(
        snapshot(&def, &inst),
        "Eye opening: 3, Verbal response: 5, Motor response: 5"
    );
}

#[test]
fn save_context_carries_scale_identity() {
    let def = scale("news2");
    let inst = instance(&def, &[("oxygen_scale", 2), ("spo2", 1)]);
    let ctx = save_context(&def, &inst);
    assert_eq!(ctx.scale_id, "news2");
    assert_eq!(ctx.scale_name, "NEWS2");
    assert_eq!(ctx.category, def.category);
    assert_eq!(ctx.description, def.description);
    assert!(ctx.parameters.starts_with("SpO2 scale: 2, Respiratory rate: 0, Oxygen saturation: 1"));
}

#[test]
fn overflowing_total_is_reported() {
    let mut def = scale("apgar");
    // top answer of every sign rescored to i32::MAX, and selected by default
    for param in &mut def.parameters {
        for option in &mut param.options {
            if option.value == 2 {
                option.value = i32::MAX;
            }
        }
        param.default = i32::MAX;
    }
    let inst = ScaleInstance::new(&def);
    assert!(matches!(
        try_evaluate(&def, &inst),
        Err(EvaluationError::ScoreOverflow { scale }) if scale == "apgar"
    ));
}
