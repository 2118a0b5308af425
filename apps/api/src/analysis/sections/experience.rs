use crate::analysis::models::SectionResult;
use crate::analysis::normalize::NormalizedText;
use crate::analysis::patterns::SignalPatterns;
use crate::analysis::sections::tiered;
use crate::analysis::tables::KeywordTables;

/// Scores the experience section: heading presence, distinct action verbs
/// and quantified achievements.
///
/// Action verbs count once each regardless of repetition. Quantified
/// achievements count every match in the original text.
pub fn analyze_experience(
    text: &NormalizedText<'_>,
    tables: &KeywordTables,
    patterns: &SignalPatterns,
) -> SectionResult {
    let has_heading = text.contains_any(tables.experience_headings);
    let verb_count = text.count_present(tables.action_verbs) as u32;
    let quantified_count = patterns.quantified.find_iter(text.original).count() as u32;

    let mut score = 0;
    if has_heading {
        score += 40;
    }
    score += (verb_count * 5).min(30);
    score += quantified_count.saturating_mul(10).min(30);

    let mut details = Vec::new();
    if verb_count > 3 {
        details.push(format!("✓ Uses {verb_count} strong action verbs"));
    }
    if quantified_count > 0 {
        details.push(format!("✓ Includes {quantified_count} quantified achievements"));
    }

    let score = score.min(100);
    let feedback = tiered(
        score,
        (80, "Excellent experience section"),
        (60, "Good experience details"),
        "Enhance experience with achievements",
    );

    SectionResult::new(score, feedback).with_details(details)
}
