use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Patient population a scale is meant for. Also the menu grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScaleCategory {
    Adult,
    Pediatric,
}

impl ScaleCategory {
    /// All categories in menu order.
    pub const ALL: [ScaleCategory; 2] = [ScaleCategory::Adult, ScaleCategory::Pediatric];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleCategory::Adult => "adult",
            ScaleCategory::Pediatric => "pediatric",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScaleCategory::Adult => "Adult",
            ScaleCategory::Pediatric => "Pediatric",
        }
    }
}

impl fmt::Display for ScaleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScaleCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adult" | "adulto" => Ok(ScaleCategory::Adult),
            "pediatric" | "pediatria" | "paediatric" => Ok(ScaleCategory::Pediatric),
            other => Err(CoreError::InvalidCategory(other.to_string())),
        }
    }
}
