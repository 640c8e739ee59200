use thiserror::Error;

/// A scale definition that cannot be loaded. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("scale has an empty id")]
    EmptyId,

    #[error("{scale}: no parameters defined")]
    NoParameters { scale: String },

    #[error("{scale}: no scored parameters defined")]
    NoScoredParameters { scale: String },

    #[error("{scale}: duplicate parameter key '{parameter}'")]
    DuplicateParameter { scale: String, parameter: String },

    #[error("{scale}: parameter '{parameter}' has an empty option set")]
    EmptyOptions { scale: String, parameter: String },

    #[error("{scale}: parameter '{parameter}' repeats option value {value}")]
    DuplicateOptionValue {
        scale: String,
        parameter: String,
        value: i32,
    },

    #[error("{scale}: default {value} of '{parameter}' is not a visible option")]
    InvalidDefault {
        scale: String,
        parameter: String,
        value: i32,
    },

    #[error("{scale}: parameter '{parameter}' depends on unknown parameter '{condition}'")]
    UnknownConditionParameter {
        scale: String,
        parameter: String,
        condition: String,
    },

    #[error("{scale}: covariate '{covariate}' must be an existing context parameter")]
    InvalidCovariate { scale: String, covariate: String },

    #[error("{scale}: covariate value {value} has no cutoff offset")]
    MissingCovariateOffset { scale: String, value: i32 },

    #[error("{scale}: no interpretation bands defined")]
    NoBands { scale: String },

    #[error("{scale}: no interpretation band matches score {score}")]
    UncoveredScore { scale: String, score: i32 },

    #[error("{scale}: attainable totals do not fit in a 32-bit score")]
    ScoreOutOfRange { scale: String },

    #[error("{scale}: cutoff for covariate value {value} does not fit in a 32-bit score")]
    CutoffOutOfRange { scale: String, value: i32 },
}

/// `evaluate` was handed an instance that breaks its preconditions.
/// Always a caller bug, never a user error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("instance belongs to scale '{instance}', not '{definition}'")]
    ScaleMismatch { definition: String, instance: String },

    #[error("{scale}: no value for parameter '{parameter}'")]
    MissingParameter { scale: String, parameter: String },

    #[error("{scale}: instance holds unknown parameter '{parameter}'")]
    UnknownParameter { scale: String, parameter: String },

    #[error("{scale}: value {value} is not a visible option of '{parameter}'")]
    ValueNotVisible {
        scale: String,
        parameter: String,
        value: i32,
    },

    #[error("{scale}: no interpretation band matches score {score}")]
    NoMatchingBand { scale: String, score: i32 },

    #[error("{scale}: total does not fit in a 32-bit score")]
    ScoreOverflow { scale: String },
}

/// A rejected user selection. The instance is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("instance belongs to scale '{instance}', not '{definition}'")]
    ScaleMismatch { definition: String, instance: String },

    #[error("{scale} has no parameter '{parameter}'")]
    UnknownParameter { scale: String, parameter: String },

    #[error("{value} is not an option for '{parameter}' (allowed: {allowed:?})")]
    InvalidOption {
        parameter: String,
        value: i32,
        allowed: Vec<i32>,
    },

    #[error("malformed selection '{0}', expected key=value")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown scale: {0}")]
    NotFound(String),

    #[error("duplicate scale id: {0}")]
    DuplicateScale(String),

    #[error("invalid scale definition: {0}")]
    Definition(#[from] DefinitionError),

    #[error("failed to read scale definitions: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
