// Local résumé scorer.
// Text is normalized once, scored by six independent section analyzers and
// reduced into a Report. Pure and deterministic; no network, no persistence.

pub mod aggregate;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod patterns;
pub mod sections;
pub mod tables;

pub use engine::{analyze, ResumeAnalyzer};
pub use error::AnalysisError;
pub use models::{RawInput, Report, Tip, TipKind};
pub use tables::{KeywordTables, DEFAULT_TABLES};
