use std::collections::HashSet;
use std::path::Path;

use escalas_core::models::category::ScaleCategory;

use crate::definition::ScaleDefinition;
use crate::error::CatalogError;
use crate::scales;
use crate::validate::validate;

/// Immutable registry of validated scale definitions, kept grouped by
/// category (adult first) and in declaration order within a category.
#[derive(Debug, Clone)]
pub struct Catalog {
    scales: Vec<ScaleDefinition>,
}

impl Catalog {
    /// The scales shipped with the application.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_definitions(scales::builtin_definitions())
    }

    /// Validate and register `defs`. Any invalid definition fails the whole load.
    pub fn from_definitions(defs: Vec<ScaleDefinition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for def in &defs {
            validate(def)?;
            if !seen.insert(def.id.clone()) {
                return Err(CatalogError::DuplicateScale(def.id.clone()));
            }
        }

        let mut scales = defs;
        scales.sort_by_key(|d| d.category);
        tracing::debug!(count = scales.len(), "scale catalog loaded");
        Ok(Self { scales })
    }

    /// Built-in scales plus every `*.json` definition found in `dir`,
    /// read in file name order.
    pub fn with_dir(dir: &Path) -> Result<Self, CatalogError> {
        let mut defs = scales::builtin_definitions();
        defs.extend(load_dir(dir)?);
        Self::from_definitions(defs)
    }

    pub fn get(&self, id: &str) -> Result<&ScaleDefinition, CatalogError> {
        self.scales
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub fn all(&self) -> &[ScaleDefinition] {
        &self.scales
    }

    /// Non-empty categories with their scales, for menu rendering.
    pub fn grouped(&self) -> Vec<(ScaleCategory, Vec<&ScaleDefinition>)> {
        ScaleCategory::ALL
            .iter()
            .map(|&cat| (cat, self.scales.iter().filter(|d| d.category == cat).collect::<Vec<_>>()))
            .filter(|(_, defs)| !defs.is_empty())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

fn load_dir(dir: &Path) -> Result<Vec<ScaleDefinition>, CatalogError> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut defs = Vec::with_capacity(paths.len());
    for path in paths {
        let contents = std::fs::read_to_string(&path)?;
        let def: ScaleDefinition =
            serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        tracing::info!(scale = %def.id, path = %path.display(), "loaded scale definition");
        defs.push(def);
    }
    Ok(defs)
}
