use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::definition::{ScaleDefinition, ScaleOption};
use crate::error::SelectionError;

/// The selections of one open form: one value per parameter.
///
/// Only changed through [`ScaleInstance::select`], which keeps every value
/// inside its currently visible option set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleInstance {
    scale_id: String,
    values: BTreeMap<String, i32>,
}

impl ScaleInstance {
    /// Every parameter at its declared default.
    pub fn new(def: &ScaleDefinition) -> Self {
        Self {
            scale_id: def.id.clone(),
            values: def
                .parameters
                .iter()
                .map(|p| (p.key.clone(), p.default))
                .collect(),
        }
    }

    /// Start from defaults and apply `selections`. Context parameters are
    /// applied first so dependent option sets are resolved against them.
    pub fn from_selections<'a, I>(def: &ScaleDefinition, selections: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = (&'a str, i32)>,
    {
        let mut instance = Self::new(def);
        let mut selections: Vec<_> = selections.into_iter().collect();
        selections.sort_by_key(|(key, _)| def.parameter(key).is_none_or(|p| p.is_scored()));
        for (key, value) in selections {
            instance.select(def, key, value)?;
        }
        Ok(instance)
    }

    pub fn scale_id(&self) -> &str {
        &self.scale_id
    }

    pub fn get(&self, key: &str) -> Option<i32> {
        self.values.get(key).copied()
    }

    pub fn values(&self) -> &BTreeMap<String, i32> {
        &self.values
    }

    /// Options the form should offer for `key` right now.
    pub fn visible_options<'d>(&self, def: &'d ScaleDefinition, key: &str) -> Option<&'d [ScaleOption]> {
        def.parameter(key)
            .map(|p| p.visible_options(|k| self.get(k)))
    }

    /// Record the user's choice for one parameter.
    pub fn select(&mut self, def: &ScaleDefinition, key: &str, value: i32) -> Result<(), SelectionError> {
        if def.id != self.scale_id {
            return Err(SelectionError::ScaleMismatch {
                definition: def.id.clone(),
                instance: self.scale_id.clone(),
            });
        }
        let param = def
            .parameter(key)
            .ok_or_else(|| SelectionError::UnknownParameter {
                scale: def.id.clone(),
                parameter: key.to_string(),
            })?;

        let visible = param.visible_options(|k| self.get(k));
        if !visible.iter().any(|o| o.value == value) {
            return Err(SelectionError::InvalidOption {
                parameter: key.to_string(),
                value,
                allowed: visible.iter().map(|o| o.value).collect(),
            });
        }

        self.values.insert(key.to_string(), value);
        self.reconcile(def);
        Ok(())
    }

    /// Back to every default.
    pub fn reset(&mut self, def: &ScaleDefinition) {
        *self = Self::new(def);
    }

    /// Pull any value that fell out of its visible set back to the default,
    /// or the first visible option when the default is hidden too.
    fn reconcile(&mut self, def: &ScaleDefinition) {
        // Each pass fixes at least one parameter or stops.
        for _ in 0..def.parameters.len() {
            let stale = def.parameters.iter().find_map(|p| {
                let visible = p.visible_options(|k| self.get(k));
                let current = self.get(&p.key);
                if visible.iter().any(|o| Some(o.value) == current) {
                    return None;
                }
                let fallback = visible
                    .iter()
                    .find(|o| o.value == p.default)
                    .or_else(|| visible.first())
                    .map(|o| o.value)?;
                Some((p.key.clone(), fallback))
            });

            match stale {
                Some((key, value)) => {
                    tracing::debug!(scale = %def.id, parameter = %key, value, "selection no longer visible, reset");
                    self.values.insert(key, value);
                }
                None => break,
            }
        }
    }
}

/// Split a `key=value` argument.
pub fn parse_selection(raw: &str) -> Result<(&str, i32), SelectionError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| SelectionError::Malformed(raw.to_string()))?;
    let value = value
        .trim()
        .parse()
        .map_err(|_| SelectionError::Malformed(raw.to_string()))?;
    Ok((key.trim(), value))
}
