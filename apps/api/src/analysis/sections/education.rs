use crate::analysis::models::SectionResult;
use crate::analysis::normalize::NormalizedText;
use crate::analysis::tables::KeywordTables;

/// Scores education: base 80 when any education keyword is present (30
/// otherwise), +20 for any degree type.
///
/// `degree_types` shares bachelor/master/phd with `education_keywords`, so
/// those degrees always land on the 80 base.
pub fn analyze_education(text: &NormalizedText<'_>, tables: &KeywordTables) -> SectionResult {
    let has_education = text.contains_any(tables.education_keywords);
    let has_degree = text.contains_any(tables.degree_types);

    let mut score = if has_education { 80 } else { 30 };
    if has_degree {
        score += 20;
    }

    let feedback = if has_education {
        "Education information present"
    } else {
        "Add educational background"
    };

    SectionResult::new(score.min(100), feedback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tables::DEFAULT_TABLES;

    fn run(text: &str) -> SectionResult {
        analyze_education(&NormalizedText::new(text), &DEFAULT_TABLES)
    }

    #[test]
    fn test_education_and_bachelor_scores_100() {
        assert_eq!(run("Education\nBachelor of Science").score, 100);
    }

    #[test]
    fn test_bachelor_alone_scores_100() {
        // "bachelor" is in both lists, so it supplies the 80 base and the +20.
        let result = run("Bachelor of Arts, 2019");
        assert_eq!(result.score, 100);
        assert_eq!(result.feedback, "Education information present");
    }

    #[test]
    fn test_keyword_without_degree_scores_80() {
        assert_eq!(run("State University").score, 80);
    }

    #[test]
    fn test_doctorate_alone_stays_on_low_base() {
        let result = run("Doctorate");
        assert_eq!(result.score, 50);
        assert_eq!(result.feedback, "Add educational background");
    }

    #[test]
    fn test_nothing_scores_30() {
        assert_eq!(run("").score, 30);
    }
}
