//! The scoring engine: one evaluation routine for every scale.
//!
//! Evaluation is a pure function of the definition and the instance. The rule
//! variant on the definition decides how the total becomes an interpretation.

use escalas_core::models::result::{SaveContext, ScoreResult};

use crate::definition::{ScaleDefinition, ScoringRule};
use crate::error::EvaluationError;
use crate::instance::ScaleInstance;

/// Evaluate an instance, reporting precondition violations as errors.
pub fn try_evaluate(
    def: &ScaleDefinition,
    instance: &ScaleInstance,
) -> Result<ScoreResult, EvaluationError> {
    check_preconditions(def, instance)?;

    let total = def
        .scored_parameters()
        .filter_map(|p| instance.get(&p.key))
        .try_fold(0i32, i32::checked_add)
        .ok_or_else(|| EvaluationError::ScoreOverflow {
            scale: def.id.clone(),
        })?;

    let shift = match &def.rule {
        ScoringRule::Sum => 0,
        ScoringRule::SumWithOverride {
            threshold,
            label,
            severity,
        } => {
            let triggered = def
                .scored_parameters()
                .any(|p| instance.get(&p.key).is_some_and(|v| v >= *threshold));
            if triggered {
                return Ok(ScoreResult {
                    total_score: total,
                    interpretation: label.clone(),
                    severity: *severity,
                    overridden: true,
                });
            }
            0
        }
        ScoringRule::CovariateAdjustedCutoff { .. } => effective_cutoff(def, instance)
            .ok_or_else(|| EvaluationError::NoMatchingBand {
                scale: def.id.clone(),
                score: total,
            })?,
    };

    let band = def
        .bands
        .iter()
        .find(|b| b.contains_shifted(total, shift))
        .ok_or_else(|| EvaluationError::NoMatchingBand {
            scale: def.id.clone(),
            score: total,
        })?;

    Ok(ScoreResult {
        total_score: total,
        interpretation: band.label.clone(),
        severity: band.severity,
        overridden: false,
    })
}

/// Evaluate an instance of a validated definition.
///
/// # Panics
///
/// Panics when the instance does not satisfy the definition (missing or
/// unknown parameter, a value outside its visible options, or an instance of
/// another scale). Instances built through [`ScaleInstance`] never do.
pub fn evaluate(def: &ScaleDefinition, instance: &ScaleInstance) -> ScoreResult {
    match try_evaluate(def, instance) {
        Ok(result) => result,
        Err(e) => panic!("scale evaluation precondition violated: {e}"),
    }
}

/// Cutoff in force for a covariate-adjusted scale, `None` for other rules.
pub fn effective_cutoff(def: &ScaleDefinition, instance: &ScaleInstance) -> Option<i32> {
    match &def.rule {
        ScoringRule::CovariateAdjustedCutoff { covariate, .. } => {
            instance.get(covariate).and_then(|v| def.cutoff_for(v))
        }
        _ => None,
    }
}

/// Human-readable record of every selection, in declaration order.
pub fn snapshot(def: &ScaleDefinition, instance: &ScaleInstance) -> String {
    def.parameters
        .iter()
        .filter_map(|p| instance.get(&p.key).map(|v| format!("{}: {}", p.label, v)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Context a result store needs to persist this instance's score.
pub fn save_context(def: &ScaleDefinition, instance: &ScaleInstance) -> SaveContext {
    SaveContext {
        scale_id: def.id.clone(),
        scale_name: def.name.clone(),
        category: def.category,
        description: def.description.clone(),
        parameters: snapshot(def, instance),
    }
}

fn check_preconditions(
    def: &ScaleDefinition,
    instance: &ScaleInstance,
) -> Result<(), EvaluationError> {
    if instance.scale_id() != def.id {
        return Err(EvaluationError::ScaleMismatch {
            definition: def.id.clone(),
            instance: instance.scale_id().to_string(),
        });
    }

    if let Some(unknown) = instance.values().keys().find(|k| def.parameter(k).is_none()) {
        return Err(EvaluationError::UnknownParameter {
            scale: def.id.clone(),
            parameter: unknown.clone(),
        });
    }

    for param in &def.parameters {
        let value = instance
            .get(&param.key)
            .ok_or_else(|| EvaluationError::MissingParameter {
                scale: def.id.clone(),
                parameter: param.key.clone(),
            })?;
        let visible = param.visible_options(|k| instance.get(k));
        if !visible.iter().any(|o| o.value == value) {
            return Err(EvaluationError::ValueNotVisible {
                scale: def.id.clone(),
                parameter: param.key.clone(),
                value,
            });
        }
    }

    Ok(())
}
