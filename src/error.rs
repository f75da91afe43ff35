use thiserror::Error;

/// Failure taxonomy shared by all extractors. Every variant is raised at the
/// point of detection; no extractor produces partial output.
#[derive(Debug, Error)]
pub enum VizError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The event log does not have the shape the extractor needs, e.g. a
    /// qualifying pass row without an end location.
    #[error("schema mismatch at event index {index}: {detail}")]
    SchemaMismatch { index: u32, detail: String },

    #[error("no substitution event recorded for team {team}")]
    SubstitutionNotFound { team: String },

    /// All candidate counts were zero, so proportional marker/line scaling
    /// is undefined.
    #[error("degenerate aggregate: {0}")]
    DegenerateAggregate(String),
}

pub type Result<T> = std::result::Result<T, VizError>;
