use crate::analysis::models::SectionResult;
use crate::analysis::normalize::NormalizedText;
use crate::analysis::patterns::SignalPatterns;
use crate::analysis::sections::tiered;
use crate::analysis::tables::KeywordTables;

/// Scores the skills section. With a job description, every whitespace token
/// of the description found in the résumé adds 2 points (up to 20); tokens
/// are neither de-duplicated nor filtered.
pub fn analyze_skills(
    text: &NormalizedText<'_>,
    tables: &KeywordTables,
    patterns: &SignalPatterns,
    job_description: Option<&str>,
) -> SectionResult {
    let has_heading = text.contains_any(tables.skills_headings);
    let technical = text.count_present(tables.technical_skills) as u32;
    let soft = text.count_present(tables.soft_skills) as u32;

    let mut score = 0;
    if has_heading {
        score += 40;
    }
    score += (technical * 10).min(30);
    score += (soft * 6).min(30);

    if let Some(description) = job_description {
        score += (job_keyword_matches(text, patterns, description).saturating_mul(2)).min(20);
    }

    let score = score.min(100);
    let feedback = tiered(
        score,
        (80, "Comprehensive skills section"),
        (60, "Good skills coverage"),
        "Expand and organize skills section",
    );

    SectionResult::new(score, feedback)
}

/// Counts description tokens (per occurrence) that appear in the résumé.
/// Leading or trailing whitespace yields an empty token, which always matches.
fn job_keyword_matches(
    text: &NormalizedText<'_>,
    patterns: &SignalPatterns,
    description: &str,
) -> u32 {
    let description = description.to_lowercase();
    patterns
        .whitespace_run
        .split(&description)
        .filter(|token| text.lower.contains(token))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tables::DEFAULT_TABLES;

    fn run(text: &str, jd: Option<&str>) -> SectionResult {
        let patterns = SignalPatterns::compile(&DEFAULT_TABLES).unwrap();
        analyze_skills(&NormalizedText::new(text), &DEFAULT_TABLES, &patterns, jd)
    }

    #[test]
    fn test_heading_and_skills() {
        let result = run("Skills: Python, SQL, Docker, Git, Leadership", None);
        // 40 + min(40, 30) + 6
        assert_eq!(result.score, 76);
        assert_eq!(result.feedback, "Good skills coverage");
    }

    #[test]
    fn test_repeated_job_token_counts_per_occurrence() {
        let without = run("python", None).score;
        let with = run("python", Some("python python")).score;
        assert_eq!(with - without, 4);
    }

    #[test]
    fn test_job_match_capped_at_20() {
        let jd = "rust rust rust rust rust rust rust rust rust rust rust rust";
        let result = run("rust", Some(jd));
        assert_eq!(result.score, 20);
    }

    #[test]
    fn test_padded_description_counts_edge_tokens() {
        // "", "python", "" all match: 10 + 3 * 2
        assert_eq!(run("python", Some(" python ")).score, 16);
    }

    #[test]
    fn test_whitespace_only_description_still_matches() {
        // two empty tokens: 10 + 2 * 2
        assert_eq!(run("python", Some("   ")).score, 14);
    }

    #[test]
    fn test_job_match_uses_lowercased_description() {
        let result = run("kubernetes", Some("KUBERNETES"));
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_no_description_no_bonus() {
        assert_eq!(run("kubernetes", None).score, 0);
    }

    #[test]
    fn test_comprehensive_tier() {
        let text = "Technical Skills: python javascript react\n\
                    leadership communication teamwork analytical";
        let result = run(text, None);
        // "java" also matches inside "javascript": 4 technical → 30; 4 soft → 24
        assert_eq!(result.score, 94);
        assert_eq!(result.feedback, "Comprehensive skills section");
    }
}
