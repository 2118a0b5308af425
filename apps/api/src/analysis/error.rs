use thiserror::Error;

/// Internal faults of the scoring pipeline.
///
/// None of these reach the caller of [`crate::analysis::analyze`]: the engine
/// converts every one of them into the fallback report.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to compile pattern {name}: {source}")]
    Pattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("{section} score {score} is outside 0..=100")]
    ScoreOutOfRange { section: &'static str, score: u32 },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("analysis panicked: {0}")]
    Panicked(String),
}
