use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use once_cell::sync::Lazy;
use tracing::{debug, error, info};

use crate::analysis::aggregate::build_report;
use crate::analysis::error::AnalysisError;
use crate::analysis::fallback::{fallback_json, fallback_report};
use crate::analysis::models::{AnalyzedSections, RawInput, Report};
use crate::analysis::normalize::NormalizedText;
use crate::analysis::patterns::SignalPatterns;
use crate::analysis::sections::{
    analyze_contact, analyze_education, analyze_experience, analyze_formatting, analyze_skills,
    analyze_summary,
};
use crate::analysis::tables::{KeywordTables, DEFAULT_TABLES};

static DEFAULT_ANALYZER: Lazy<Result<ResumeAnalyzer, AnalysisError>> =
    Lazy::new(|| ResumeAnalyzer::new(DEFAULT_TABLES));

/// Scores résumé text against a keyword table.
///
/// Holds only immutable data, so a single instance can be shared across
/// threads (`Arc<ResumeAnalyzer>`) and called concurrently.
#[derive(Debug, Clone)]
pub struct ResumeAnalyzer {
    tables: KeywordTables,
    patterns: SignalPatterns,
}

impl ResumeAnalyzer {
    pub fn new(tables: KeywordTables) -> Result<Self, AnalysisError> {
        let patterns = SignalPatterns::compile(&tables)?;
        Ok(Self { tables, patterns })
    }

    pub fn tables(&self) -> &KeywordTables {
        &self.tables
    }

    /// Runs the six section analyzers. Each sees the same normalized text
    /// and none reads another's result.
    pub fn analyze_sections(
        &self,
        text: &NormalizedText<'_>,
        input: &RawInput<'_>,
    ) -> AnalyzedSections {
        AnalyzedSections {
            contact: analyze_contact(text, &self.patterns),
            summary: analyze_summary(text, &self.tables, &self.patterns),
            experience: analyze_experience(text, &self.tables, &self.patterns),
            education: analyze_education(text, &self.tables),
            skills: analyze_skills(
                text,
                &self.tables,
                &self.patterns,
                input.job_description(),
            ),
            formatting: analyze_formatting(text, &self.patterns),
        }
    }

    /// Full pipeline without the fallback safety net.
    pub fn try_report(&self, input: &RawInput<'_>) -> Result<Report, AnalysisError> {
        let text = NormalizedText::new(input.text);
        debug!(
            lines = text.lines.len(),
            words = text.words.len(),
            has_job_description = input.job_description().is_some(),
            "Starting resume analysis"
        );

        let sections = self.analyze_sections(&text, input);
        let report = build_report(&text, &sections, input, &self.tables, &self.patterns)?;

        info!(
            overall_score = report.overall_score,
            ats_score = report.ats.score,
            "Resume analysis complete"
        );
        Ok(report)
    }

    /// Always returns a report: the fallback replaces any error or panic.
    pub fn report(&self, input: &RawInput<'_>) -> Report {
        report_or_fallback(|| self.try_report(input))
    }

    /// Report serialized as pretty JSON.
    pub fn analyze(&self, input: &RawInput<'_>) -> String {
        match self.report(input).to_json() {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "Report serialization failed, returning fallback report");
                fallback_json()
            }
        }
    }
}

/// Scores `text` with the built-in keyword tables and returns the report as JSON.
pub fn analyze(text: &str, job_title: Option<&str>, job_description: Option<&str>) -> String {
    match &*DEFAULT_ANALYZER {
        Ok(analyzer) => analyzer.analyze(&RawInput::new(text, job_title, job_description)),
        Err(e) => {
            error!(error = %e, "Default analyzer unavailable, returning fallback report");
            fallback_json()
        }
    }
}

/// Runs `pipeline`, converting an error or a panic into the fallback report.
/// Failure is all-or-nothing: no partially scored report escapes.
pub(crate) fn report_or_fallback<F>(pipeline: F) -> Report
where
    F: FnOnce() -> Result<Report, AnalysisError>,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(pipeline))
        .unwrap_or_else(|payload| Err(AnalysisError::Panicked(panic_message(payload.as_ref()))));

    match outcome {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Resume analysis failed, returning fallback report");
            fallback_report()
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
