//! Reduces the six section results into the final report.
//!
//! Recommendations and section tips are two independent derivations over the
//! same [`AnalyzedSections`]; neither depends on report construction.

use crate::analysis::error::AnalysisError;
use crate::analysis::models::{AnalyzedSections, RawInput, Report, ScoredTips, SectionResult, Tip};
use crate::analysis::normalize::NormalizedText;
use crate::analysis::patterns::SignalPatterns;
use crate::analysis::tables::KeywordTables;

/// Number of recommendations surfaced as ATS tips.
pub const ATS_TIP_LIMIT: usize = 5;

const DETAIL_EXPLANATION: &str =
    "This is important for professional presentation and ATS compatibility";

const POSITIVE_MARKER: char = '✓';
const NEUTRAL_MARKER: char = '•';
const MISSING_PREFIX: &str = "✗ ";

/// Rounded arithmetic mean of the six section scores; halves round up.
pub fn overall_score(sections: &AnalyzedSections) -> Result<u32, AnalysisError> {
    sections.validate()?;
    let scores = sections.scores();
    let sum: u32 = scores.iter().map(|(_, s)| s).sum();
    Ok((f64::from(sum) / scores.len() as f64).round() as u32)
}

/// Overall score plus 5 when all standard sections are named and 5 when the
/// text uses only plain characters, capped at 100.
pub fn ats_score(
    text: &NormalizedText<'_>,
    tables: &KeywordTables,
    patterns: &SignalPatterns,
    overall: u32,
) -> u32 {
    let mut score = overall;
    if text.contains_all(tables.standard_sections) {
        score += 5;
    }
    if !patterns.non_ats_char.is_match(text.original) {
        score += 5;
    }
    score.min(100)
}

/// Ordered recommendation list: section-triggered advice first, then the
/// job-tailoring hint, then three generic tips that are always included.
pub fn generate_recommendations(
    sections: &AnalyzedSections,
    job_title: Option<&str>,
    job_description: Option<&str>,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if sections.contact.score < 80 {
        recommendations.push(
            "Add complete contact information including email, phone, and LinkedIn profile"
                .to_string(),
        );
    }
    if sections.experience.score < 70 {
        recommendations.push(
            "Use more action verbs and quantify your achievements with specific numbers and percentages"
                .to_string(),
        );
    }
    if sections.skills.score < 70 {
        recommendations.push(
            "Expand your skills section with both technical and soft skills relevant to your field"
                .to_string(),
        );
    }
    if job_description.is_some() {
        recommendations.push(format!(
            "Tailor your resume to match keywords from the {} position",
            job_title.unwrap_or("target")
        ));
    }

    recommendations.extend(
        [
            "Use consistent formatting and bullet points for easy readability",
            "Keep your resume to 1-2 pages maximum",
            "Proofread carefully for grammar and spelling errors",
        ]
        .map(String::from),
    );

    recommendations
}

/// Converts one section into tips: a headline tip from the feedback, then one
/// `improve` tip per detail that is neither positive (`✓`) nor neutral (`•`).
pub fn section_to_tips(section: &SectionResult) -> Vec<Tip> {
    let headline = if section.score >= 80 {
        Tip::good(&section.feedback, &section.feedback)
    } else {
        Tip::improve(&section.feedback, &section.feedback)
    };

    let mut tips = vec![headline];
    if let Some(details) = &section.details {
        tips.extend(
            details
                .iter()
                .filter(|d| !d.starts_with(POSITIVE_MARKER) && !d.starts_with(NEUTRAL_MARKER))
                .map(|d| Tip::improve(d.replacen(MISSING_PREFIX, "", 1), DETAIL_EXPLANATION)),
        );
    }
    tips
}

fn scored(section: &SectionResult) -> ScoredTips {
    ScoredTips {
        score: section.score,
        tips: section_to_tips(section),
    }
}

/// Assembles the report. Fails only on internally inconsistent section results.
pub fn build_report(
    text: &NormalizedText<'_>,
    sections: &AnalyzedSections,
    input: &RawInput<'_>,
    tables: &KeywordTables,
    patterns: &SignalPatterns,
) -> Result<Report, AnalysisError> {
    let overall = overall_score(sections)?;
    let ats = ats_score(text, tables, patterns, overall);

    let ats_tips = generate_recommendations(sections, input.job_title(), input.job_description())
        .into_iter()
        .take(ATS_TIP_LIMIT)
        .map(Tip::recommendation)
        .collect();

    Ok(Report {
        overall_score: overall,
        ats: ScoredTips {
            score: ats,
            tips: ats_tips,
        },
        tone_and_style: scored(&sections.summary),
        content: scored(&sections.experience),
        structure: scored(&sections.formatting),
        skills: scored(&sections.skills),
    })
}
