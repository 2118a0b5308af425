use crate::analysis::models::SectionResult;
use crate::analysis::normalize::NormalizedText;
use crate::analysis::patterns::SignalPatterns;
use crate::analysis::sections::tiered;

const BASE_SCORE: u32 = 50;

pub fn analyze_formatting(text: &NormalizedText<'_>, patterns: &SignalPatterns) -> SectionResult {
    let bullets = patterns.bullet_glyphs.find_iter(text.original).count();
    let line_count = text.lines.len();
    let regular_length = text
        .mean_line_length()
        .is_some_and(|mean| mean > 20.0 && mean < 80.0);

    let mut score = BASE_SCORE;
    if bullets > 3 {
        score += 20;
    }
    if line_count > 10 && line_count < 100 {
        score += 20;
    }
    if regular_length {
        score += 10;
    }

    let score = score.min(100);
    let feedback = tiered(
        score,
        (80, "Well-formatted resume"),
        (60, "Good structure"),
        "Improve formatting and organization",
    );

    SectionResult::new(score, feedback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tables::DEFAULT_TABLES;

    fn run(text: &str) -> SectionResult {
        let patterns = SignalPatterns::compile(&DEFAULT_TABLES).unwrap();
        analyze_formatting(&NormalizedText::new(text), &patterns)
    }

    #[test]
    fn test_empty_text_gets_base_score() {
        let result = run("");
        assert_eq!(result.score, 50);
        assert_eq!(result.feedback, "Improve formatting and organization");
    }

    #[test]
    fn test_whitespace_only_text_gets_base_score() {
        assert_eq!(run("\n   \n\t\n").score, 50);
    }

    #[test]
    fn test_well_formatted_resume_scores_100() {
        let text = (0..12)
            .map(|i| format!("• Delivered project number {i} on schedule"))
            .collect::<Vec<_>>()
            .join("\n");
        let result = run(&text);
        assert_eq!(result.score, 100);
        assert_eq!(result.feedback, "Well-formatted resume");
    }

    #[test]
    fn test_ten_lines_is_not_enough() {
        let text = vec!["a line that is long enough to count"; 10].join("\n");
        // only the mean-length bonus applies
        assert_eq!(run(&text).score, 60);
        assert_eq!(run(&text).feedback, "Improve formatting and organization");
    }

    #[test]
    fn test_three_bullets_is_not_enough() {
        assert_eq!(run("• a\n• b\n• c").score, 50);
        assert_eq!(run("• a\n• b\n• c\n◦ d").score, 70);
    }
}
