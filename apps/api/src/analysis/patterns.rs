use regex::Regex;

use crate::analysis::error::AnalysisError;
use crate::analysis::tables::KeywordTables;

/// Word boundaries in these patterns are ASCII-only (`(?-u:\b)`), so an
/// accented letter does not glue onto the ASCII token that follows it.
const EMAIL: &str = r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}(?-u:\b)";

/// Optional country code, optional parenthesized area code, `-` `.` or space separators.
const PHONE: &str = r"(\+?[0-9]{1,3}[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}";

const LINKEDIN: &str = r"(?i)linkedin\.com/in/|linkedin\.com/pub/";

const GITHUB: &str = r"(?i)github\.com/|github\.io";

/// `N%`, `$N`, `N+`, `increased by N`, `reduced by N`.
const QUANTIFIED: &str = r"(?-u:\b)[0-9]+%|\$[0-9]+|[0-9]+\+|increased by [0-9]+|reduced by [0-9]+";

const BULLET_GLYPHS: &str = r"[•·▪▫◦‣⁃]";

/// Separator for job-description tokens. Splitting keeps the empty pieces
/// produced by leading or trailing whitespace.
const WHITESPACE_RUN: &str = r"\s+";

/// Anything outside ASCII word characters, whitespace and plain punctuation.
const NON_ATS_CHAR: &str = r#"[^A-Za-z0-9_\s.,;:!?@#$%&*()\[\]{}|\\/"'\-]"#;

/// Pre-compiled signal patterns shared by the analyzers.
#[derive(Debug, Clone)]
pub struct SignalPatterns {
    pub email: Regex,
    pub phone: Regex,
    pub linkedin: Regex,
    pub github: Regex,
    pub quantified: Regex,
    pub bullet_glyphs: Regex,
    pub non_ats_char: Regex,
    pub whitespace_run: Regex,
    /// Whole-word match of any descriptive adjective from the keyword table.
    pub descriptive: Regex,
}

impl SignalPatterns {
    pub fn compile(tables: &KeywordTables) -> Result<Self, AnalysisError> {
        let adjectives = tables
            .descriptive_adjectives
            .iter()
            .map(|a| regex::escape(a))
            .collect::<Vec<_>>()
            .join("|");

        Ok(Self {
            email: compile("email", EMAIL)?,
            phone: compile("phone", PHONE)?,
            linkedin: compile("linkedin", LINKEDIN)?,
            github: compile("github", GITHUB)?,
            quantified: compile("quantified", QUANTIFIED)?,
            bullet_glyphs: compile("bullet_glyphs", BULLET_GLYPHS)?,
            non_ats_char: compile("non_ats_char", NON_ATS_CHAR)?,
            whitespace_run: compile("whitespace_run", WHITESPACE_RUN)?,
            descriptive: compile(
                "descriptive",
                &format!(r"(?-u:\b)(?:{adjectives})(?-u:\b)"),
            )?,
        })
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex, AnalysisError> {
    Regex::new(pattern).map_err(|source| AnalysisError::Pattern { name, source })
}
