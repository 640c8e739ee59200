//! Load-time checks on scale definitions.
//!
//! A definition that passes [`validate`] can be evaluated from any instance
//! built through [`crate::instance::ScaleInstance`] without hitting a gap in
//! its bands.

use std::collections::HashSet;

use crate::definition::{ParameterRole, ScaleDefinition, ScoreBand, ScoringRule};
use crate::error::DefinitionError;
use crate::instance::ScaleInstance;

pub fn validate(def: &ScaleDefinition) -> Result<(), DefinitionError> {
    let scale = def.id.clone();
    if scale.trim().is_empty() {
        return Err(DefinitionError::EmptyId);
    }
    if def.parameters.is_empty() {
        return Err(DefinitionError::NoParameters { scale });
    }
    if def.scored_parameters().next().is_none() {
        return Err(DefinitionError::NoScoredParameters { scale });
    }

    let mut keys = HashSet::new();
    for param in &def.parameters {
        if !keys.insert(param.key.as_str()) {
            return Err(DefinitionError::DuplicateParameter {
                scale,
                parameter: param.key.clone(),
            });
        }

        for set in param.option_sets() {
            if set.is_empty() {
                return Err(DefinitionError::EmptyOptions {
                    scale,
                    parameter: param.key.clone(),
                });
            }
            let mut values = HashSet::new();
            if let Some(dup) = set.iter().find(|o| !values.insert(o.value)) {
                return Err(DefinitionError::DuplicateOptionValue {
                    scale,
                    parameter: param.key.clone(),
                    value: dup.value,
                });
            }
        }

        if let Some(variant) = param.variants.iter().find(|v| {
            v.when.parameter == param.key || def.parameter(&v.when.parameter).is_none()
        }) {
            return Err(DefinitionError::UnknownConditionParameter {
                scale,
                parameter: param.key.clone(),
                condition: variant.when.parameter.clone(),
            });
        }
    }

    // Defaults have to be selectable from the initial state.
    let initial = ScaleInstance::new(def);
    for param in &def.parameters {
        let visible = param.visible_options(|k| initial.get(k));
        if !visible.iter().any(|o| o.value == param.default) {
            return Err(DefinitionError::InvalidDefault {
                scale,
                parameter: param.key.clone(),
                value: param.default,
            });
        }
    }

    if def.bands.is_empty() {
        return Err(DefinitionError::NoBands { scale });
    }

    let (lo, hi) = def
        .score_range()
        .ok_or_else(|| DefinitionError::ScoreOutOfRange {
            scale: scale.clone(),
        })?;
    match &def.rule {
        ScoringRule::Sum | ScoringRule::SumWithOverride { .. } => {
            check_coverage(&scale, &def.bands, lo, hi, 0)?;
        }
        ScoringRule::CovariateAdjustedCutoff {
            covariate,
            base_cutoff,
            offsets,
        } => {
            let param = def
                .parameter(covariate)
                .filter(|p| p.role == ParameterRole::Context)
                .ok_or_else(|| DefinitionError::InvalidCovariate {
                    scale: scale.clone(),
                    covariate: covariate.clone(),
                })?;
            for value in param.option_sets().flatten().map(|o| o.value) {
                let offset = offsets
                    .iter()
                    .find(|o| o.value == value)
                    .ok_or_else(|| DefinitionError::MissingCovariateOffset {
                        scale: scale.clone(),
                        value,
                    })?;
                let cutoff = base_cutoff.checked_add(offset.offset).ok_or_else(|| {
                    DefinitionError::CutoffOutOfRange {
                        scale: scale.clone(),
                        value,
                    }
                })?;
                check_coverage(&scale, &def.bands, lo, hi, cutoff)?;
            }
        }
    }

    Ok(())
}

/// Every integer total in `lo..=hi` must fall in at least one band once the
/// bands are moved by `shift`. Overlaps are allowed; order resolves them.
///
/// Sweeps the sorted band intervals, so the cost depends on the number of
/// bands rather than the width of the score range.
fn check_coverage(
    scale: &str,
    bands: &[ScoreBand],
    lo: i32,
    hi: i32,
    shift: i32,
) -> Result<(), DefinitionError> {
    let mut intervals: Vec<(i64, i64)> = bands
        .iter()
        .map(|b| b.shifted_bounds(shift))
        .filter(|(min, max)| min <= max)
        .collect();
    intervals.sort_unstable();

    // first total not yet known to be covered
    let mut next = i64::from(lo);
    let hi = i64::from(hi);
    for (min, max) in intervals {
        if next > hi || min > next {
            break;
        }
        next = next.max(max.saturating_add(1));
    }

    if next > hi {
        return Ok(());
    }
    Err(DefinitionError::UncoveredScore {
        scale: scale.to_string(),
        score: i32::try_from(next).unwrap_or(i32::MAX),
    })
}
