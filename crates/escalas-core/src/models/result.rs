use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::category::ScaleCategory;
use crate::models::severity::Severity;

/// Outcome of evaluating one filled-in scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub total_score: i32,
    pub interpretation: String,
    pub severity: Severity,
    /// True when an individual-parameter override replaced the band chosen
    /// from the total.
    #[serde(default)]
    pub overridden: bool,
}

/// Everything about a save that is not the score itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaveContext {
    pub scale_id: String,
    pub scale_name: String,
    pub category: ScaleCategory,
    pub description: String,
    pub parameters: String,
}

/// A persisted score. Immutable once written; only ever deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoredResult {
    pub id: Uuid,
    pub scale_id: String,
    pub scale_name: String,
    pub category: ScaleCategory,
    pub description: String,
    pub score: i32,
    pub total_points: i32,
    pub interpretation: String,
    pub severity: Severity,
    /// Display snapshot of the selections at save time. Never re-parsed.
    pub parameters: String,
    pub created_at: jiff::Timestamp,
}

impl StoredResult {
    pub fn new(
        id: Uuid,
        result: &ScoreResult,
        context: SaveContext,
        created_at: jiff::Timestamp,
    ) -> Self {
        Self {
            id,
            scale_id: context.scale_id,
            scale_name: context.scale_name,
            category: context.category,
            description: context.description,
            score: result.total_score,
            total_points: result.total_score,
            interpretation: result.interpretation.clone(),
            severity: result.severity,
            parameters: context.parameters,
            created_at,
        }
    }

    /// Points shown in history rows. Older entries may carry a zero
    /// `total_points`, in which case the raw score is shown.
    pub fn display_points(&self) -> i32 {
        if self.total_points > 0 {
            self.total_points
        } else {
            self.score
        }
    }
}

/// Parse a result id typed by a user.
pub fn parse_result_id(raw: &str) -> Result<Uuid, CoreError> {
    Ok(Uuid::parse_str(raw.trim())?)
}
