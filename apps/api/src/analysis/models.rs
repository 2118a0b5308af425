use serde::{Deserialize, Serialize};

use crate::analysis::error::AnalysisError;

/// One analysis request: extracted résumé text plus optional job context.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawInput<'a> {
    pub text: &'a str,
    pub job_title: Option<&'a str>,
    pub job_description: Option<&'a str>,
}

impl<'a> RawInput<'a> {
    pub fn new(text: &'a str, job_title: Option<&'a str>, job_description: Option<&'a str>) -> Self {
        Self {
            text,
            job_title,
            job_description,
        }
    }

    /// Job title, with an empty string treated as absent.
    pub fn job_title(&self) -> Option<&'a str> {
        self.job_title.filter(|t| !t.is_empty())
    }

    /// Job description, with an empty string treated as absent.
    pub fn job_description(&self) -> Option<&'a str> {
        self.job_description.filter(|d| !d.is_empty())
    }
}

/// Output of a single section analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionResult {
    /// 0 – 100
    pub score: u32,
    pub feedback: String,
    /// Human-readable signal lines. `✓` marks a found signal, `✗` a missing
    /// one and `•` an optional suggestion.
    pub details: Option<Vec<String>>,
}

impl SectionResult {
    pub fn new(score: u32, feedback: impl Into<String>) -> Self {
        Self {
            score: score.min(100),
            feedback: feedback.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = Some(details);
        self
    }
}

/// The six analyzer results, one named field per section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedSections {
    pub contact: SectionResult,
    pub summary: SectionResult,
    pub experience: SectionResult,
    pub education: SectionResult,
    pub skills: SectionResult,
    pub formatting: SectionResult,
}

impl AnalyzedSections {
    /// Section scores in a fixed order, labelled for diagnostics.
    pub fn scores(&self) -> [(&'static str, u32); 6] {
        [
            ("contact", self.contact.score),
            ("summary", self.summary.score),
            ("experience", self.experience.score),
            ("education", self.education.score),
            ("skills", self.skills.score),
            ("formatting", self.formatting.score),
        ]
    }

    /// Fails on the first score outside 0..=100.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        match self.scores().into_iter().find(|(_, score)| *score > 100) {
            Some((section, score)) => Err(AnalysisError::ScoreOutOfRange { section, score }),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipKind {
    Good,
    Improve,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub kind: TipKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Tip {
    pub fn good(message: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            kind: TipKind::Good,
            message: message.into(),
            explanation: Some(explanation.into()),
        }
    }

    pub fn improve(message: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            kind: TipKind::Improve,
            message: message.into(),
            explanation: Some(explanation.into()),
        }
    }

    /// An `improve` tip without explanation, as used for ATS recommendations.
    pub fn recommendation(message: impl Into<String>) -> Self {
        Self {
            kind: TipKind::Improve,
            message: message.into(),
            explanation: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredTips {
    pub score: u32,
    pub tips: Vec<Tip>,
}

/// Feedback report handed back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub overall_score: u32,
    pub ats: ScoredTips,
    pub tone_and_style: ScoredTips,
    pub content: ScoredTips,
    pub structure: ScoredTips,
    pub skills: ScoredTips,
}

impl Report {
    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, AnalysisError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(score: u32) -> SectionResult {
        SectionResult {
            score,
            feedback: "ok".to_string(),
            details: None,
        }
    }

    #[test]
    fn test_section_result_new_caps_score() {
        assert_eq!(SectionResult::new(130, "x").score, 100);
    }

    #[test]
    fn test_validate_rejects_out_of_range_score() {
        let sections = AnalyzedSections {
            contact: section(55),
            summary: section(0),
            experience: section(40),
            education: section(101),
            skills: section(70),
            formatting: section(50),
        };
        match sections.validate() {
            Err(AnalysisError::ScoreOutOfRange { section, score }) => {
                assert_eq!(section, "education");
                assert_eq!(score, 101);
            }
            other => panic!("expected ScoreOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_strings_treated_as_absent() {
        let input = RawInput::new("text", Some(""), Some(""));
        assert!(input.job_title().is_none());
        assert!(input.job_description().is_none());
    }

    #[test]
    fn test_report_field_names() {
        let scored = ScoredTips {
            score: 50,
            tips: vec![Tip::recommendation("Proofread")],
        };
        let report = Report {
            overall_score: 50,
            ats: scored.clone(),
            tone_and_style: scored.clone(),
            content: scored.clone(),
            structure: scored.clone(),
            skills: scored,
        };
        let value = serde_json::to_value(&report).unwrap();
        for key in ["overallScore", "ats", "toneAndStyle", "content", "structure", "skills"] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        let tip = &value["ats"]["tips"][0];
        assert_eq!(tip["kind"], "improve");
        assert_eq!(tip["message"], "Proofread");
        assert!(tip.get("explanation").is_none());
    }

    #[test]
    fn test_tip_kind_serde() {
        assert_eq!(serde_json::to_string(&TipKind::Good).unwrap(), r#""good""#);
        let kind: TipKind = serde_json::from_str(r#""improve""#).unwrap();
        assert_eq!(kind, TipKind::Improve);
    }
}
