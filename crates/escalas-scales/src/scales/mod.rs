//! Built-in scale definitions.

pub mod apgar;
pub mod braden;
pub mod glasgow;
pub mod humpty_dumpty;
pub mod meem;
pub mod mews;
pub mod morse;
pub mod news2;
pub mod pews;
pub mod ramsay;

use escalas_core::models::severity::Severity;

use crate::definition::{ParameterRole, ParameterSpec, ScaleDefinition, ScaleOption, ScoreBand};

/// Every built-in scale, adult scales first.
pub fn builtin_definitions() -> Vec<ScaleDefinition> {
    vec![
        glasgow::definition(),
        morse::definition(),
        braden::definition(),
        ramsay::definition(),
        mews::definition(),
        news2::definition(),
        meem::definition(),
        apgar::definition(),
        humpty_dumpty::definition(),
        pews::definition(),
    ]
}

pub(crate) fn options(items: &[(i32, &str)]) -> Vec<ScaleOption> {
    items
        .iter()
        .map(|(value, label)| ScaleOption {
            value: *value,
            label: label.to_string(),
        })
        .collect()
}

pub(crate) fn scored(key: &str, label: &str, default: i32, items: &[(i32, &str)]) -> ParameterSpec {
    ParameterSpec {
        key: key.to_string(),
        label: label.to_string(),
        role: ParameterRole::Scored,
        default,
        options: options(items),
        variants: Vec::new(),
    }
}

pub(crate) fn context(key: &str, label: &str, default: i32, items: &[(i32, &str)]) -> ParameterSpec {
    ParameterSpec {
        role: ParameterRole::Context,
        ..scored(key, label, default, items)
    }
}

/// `0..=max` counted items, labelled "n/max".
pub(crate) fn counted(key: &str, label: &str, max: i32) -> ParameterSpec {
    ParameterSpec {
        key: key.to_string(),
        label: label.to_string(),
        role: ParameterRole::Scored,
        default: max,
        options: (0..=max)
            .map(|value| ScaleOption {
                value,
                label: format!("{value}/{max}"),
            })
            .collect(),
        variants: Vec::new(),
    }
}

pub(crate) fn band(min: Option<i32>, max: Option<i32>, label: &str, severity: Severity) -> ScoreBand {
    ScoreBand {
        min,
        max,
        label: label.to_string(),
        severity,
    }
}
