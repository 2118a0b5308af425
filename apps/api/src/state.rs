use std::sync::Arc;

use crate::analysis::ResumeAnalyzer;
use crate::config::Config;
use crate::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup; immutable, so shared without locking.
    pub analyzer: Arc<ResumeAnalyzer>,
    /// Pluggable document-to-text backend. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
