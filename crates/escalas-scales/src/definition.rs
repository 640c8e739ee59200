use serde::{Deserialize, Serialize};
use ts_rs::TS;

use escalas_core::models::category::ScaleCategory;
use escalas_core::models::severity::Severity;

/// One selectable answer for a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleOption {
    pub value: i32,
    pub label: String,
}

/// Whether a parameter's value is part of the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ParameterRole {
    /// Added to the total and checked by override rules.
    #[default]
    Scored,
    /// Toggle or covariate. Never summed.
    Context,
}

/// Holds when another parameter currently has the given value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Condition {
    pub parameter: String,
    pub equals: i32,
}

/// An alternative option set, visible while `when` holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OptionVariant {
    pub when: Condition,
    pub options: Vec<ScaleOption>,
}

/// One observation axis within a scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParameterSpec {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub role: ParameterRole,
    /// Initial selection. Must be one of `options`.
    pub default: i32,
    pub options: Vec<ScaleOption>,
    /// Checked in order; the first variant whose condition holds replaces
    /// `options`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<OptionVariant>,
}

impl ParameterSpec {
    pub fn is_scored(&self) -> bool {
        self.role == ParameterRole::Scored
    }

    /// The base set followed by every variant set.
    pub fn option_sets(&self) -> impl Iterator<Item = &[ScaleOption]> {
        std::iter::once(self.options.as_slice())
            .chain(self.variants.iter().map(|v| v.options.as_slice()))
    }

    /// Option set visible given the current value lookup for other parameters.
    pub fn visible_options<F>(&self, current: F) -> &[ScaleOption]
    where
        F: Fn(&str) -> Option<i32>,
    {
        self.variants
            .iter()
            .find(|v| current(&v.when.parameter) == Some(v.when.equals))
            .map(|v| v.options.as_slice())
            .unwrap_or(&self.options)
    }

    /// Smallest value across every option set.
    pub fn min_value(&self) -> i32 {
        self.option_sets()
            .flat_map(|set| set.iter().map(|o| o.value))
            .min()
            .unwrap_or(0)
    }

    /// Largest value across every option set.
    pub fn max_value(&self) -> i32 {
        self.option_sets()
            .flat_map(|set| set.iter().map(|o| o.value))
            .max()
            .unwrap_or(0)
    }
}

/// Inclusive score range mapped to one interpretation. `None` bounds are open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBand {
    #[serde(default)]
    pub min: Option<i32>,
    #[serde(default)]
    pub max: Option<i32>,
    pub label: String,
    pub severity: Severity,
}

impl ScoreBand {
    pub fn contains(&self, score: i32) -> bool {
        self.contains_shifted(score, 0)
    }

    /// Whether `score` falls in this band once both bounds are moved by `by`.
    pub fn contains_shifted(&self, score: i32, by: i32) -> bool {
        let (min, max) = self.shifted_bounds(by);
        (min..=max).contains(&i64::from(score))
    }

    /// Inclusive bounds moved by `by`, widened to `i64` so the shift cannot
    /// overflow. Open bounds become `i64::MIN` / `i64::MAX`.
    pub fn shifted_bounds(&self, by: i32) -> (i64, i64) {
        let by = i64::from(by);
        (
            self.min.map_or(i64::MIN, |m| i64::from(m) + by),
            self.max.map_or(i64::MAX, |m| i64::from(m) + by),
        )
    }
}

/// Cutoff adjustment for one covariate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CovariateOffset {
    pub value: i32,
    pub offset: i32,
}

/// How the total is turned into an interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringRule {
    /// Total of scored parameters, looked up in the bands.
    Sum,
    /// As `Sum`, but any single scored value at or above `threshold`
    /// forces the given interpretation whatever the total.
    SumWithOverride {
        threshold: i32,
        label: String,
        severity: Severity,
    },
    /// Bands are relative to a cutoff of `base_cutoff` plus the offset
    /// declared for the covariate parameter's current value.
    CovariateAdjustedCutoff {
        covariate: String,
        base_cutoff: i32,
        offsets: Vec<CovariateOffset>,
    },
}

/// A clinical scale: parameters, scoring rule and interpretation bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleDefinition {
    pub id: String,
    pub name: String,
    pub category: ScaleCategory,
    pub description: String,
    #[serde(default)]
    pub max_score: Option<i32>,
    pub parameters: Vec<ParameterSpec>,
    pub rule: ScoringRule,
    /// Evaluated top-down; first match wins.
    pub bands: Vec<ScoreBand>,
}

impl ScaleDefinition {
    pub fn parameter(&self, key: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.key == key)
    }

    pub fn scored_parameters(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters.iter().filter(|p| p.is_scored())
    }

    /// Lowest and highest totals reachable from the declared options, or
    /// `None` when a total does not fit in an `i32`.
    pub fn score_range(&self) -> Option<(i32, i32)> {
        self.scored_parameters().try_fold((0i32, 0i32), |(lo, hi), p| {
            Some((lo.checked_add(p.min_value())?, hi.checked_add(p.max_value())?))
        })
    }

    /// Cutoff in effect for a covariate value, if the rule is covariate-adjusted.
    pub fn cutoff_for(&self, covariate_value: i32) -> Option<i32> {
        match &self.rule {
            ScoringRule::CovariateAdjustedCutoff {
                base_cutoff,
                offsets,
                ..
            } => offsets
                .iter()
                .find(|o| o.value == covariate_value)
                .and_then(|o| base_cutoff.checked_add(o.offset)),
            _ => None,
        }
    }
}
