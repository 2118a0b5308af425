use crate::analysis::models::SectionResult;
use crate::analysis::normalize::NormalizedText;
use crate::analysis::patterns::SignalPatterns;
use crate::analysis::sections::tiered;
use crate::analysis::tables::KeywordTables;

const WINDOW_LINES: usize = 5;
const WINDOW_MIN_CHARS: usize = 100;

pub fn analyze_summary(
    text: &NormalizedText<'_>,
    tables: &KeywordTables,
    patterns: &SignalPatterns,
) -> SectionResult {
    let has_heading = text.contains_any(tables.summary_headings);

    // Summaries sit at the top, so only the opening lines are inspected.
    let window = text.leading_window(WINDOW_LINES);
    let has_descriptive = patterns.descriptive.is_match(&window);

    let mut score = 0;
    if has_heading {
        score += 50;
    }
    if has_descriptive {
        score += 30;
    }
    if window.chars().count() > WINDOW_MIN_CHARS {
        score += 20;
    }

    let score = score.min(100);
    let feedback = tiered(
        score,
        (70, "Good professional summary"),
        (40, "Basic summary present"),
        "Add compelling professional summary",
    );

    SectionResult::new(score, feedback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tables::DEFAULT_TABLES;

    fn run(text: &str) -> SectionResult {
        let patterns = SignalPatterns::compile(&DEFAULT_TABLES).unwrap();
        analyze_summary(&NormalizedText::new(text), &DEFAULT_TABLES, &patterns)
    }

    #[test]
    fn test_full_summary_scores_100() {
        let text = "Professional Summary\n\
                    Passionate backend engineer with eight years building payment systems, \
                    distributed queues and observability tooling for high traffic products.";
        let result = run(text);
        assert_eq!(result.score, 100);
        assert_eq!(result.feedback, "Good professional summary");
    }

    #[test]
    fn test_heading_only_is_basic() {
        let result = run("Summary\nRust");
        assert_eq!(result.score, 50);
        assert_eq!(result.feedback, "Basic summary present");
    }

    #[test]
    fn test_score_of_exactly_70_falls_to_basic() {
        let text = "Summary\n\
                    Backend engineer with eight years building payment systems, \
                    distributed queues and observability tooling for large products.";
        let result = run(text);
        assert_eq!(result.score, 70);
        assert_eq!(result.feedback, "Basic summary present");
    }

    #[test]
    fn test_descriptive_only_is_lowest_tier() {
        let result = run("Dedicated engineer");
        assert_eq!(result.score, 30);
        assert_eq!(result.feedback, "Add compelling professional summary");
    }

    #[test]
    fn test_descriptive_word_after_window_ignored() {
        let result = run("a\nb\nc\nd\ne\nexperienced");
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_no_details() {
        assert!(run("Summary").details.is_none());
    }
}
