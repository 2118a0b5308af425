use crate::analysis::models::SectionResult;
use crate::analysis::normalize::NormalizedText;
use crate::analysis::patterns::SignalPatterns;

const EMAIL_POINTS: u32 = 30;
const PHONE_POINTS: u32 = 25;
const LINKEDIN_POINTS: u32 = 25;
const GITHUB_POINTS: u32 = 20;

/// Scores contact signals found in the original (case-preserved) text.
///
/// GitHub is optional: its absence is reported with a neutral `•` line
/// rather than a `✗` defect.
pub fn analyze_contact(text: &NormalizedText<'_>, patterns: &SignalPatterns) -> SectionResult {
    let has_email = patterns.email.is_match(text.original);
    let has_phone = patterns.phone.is_match(text.original);
    let has_linkedin = patterns.linkedin.is_match(text.original);
    let has_github = patterns.github.is_match(text.original);

    let mut score = 0;
    let mut details = Vec::with_capacity(4);

    if has_email {
        score += EMAIL_POINTS;
        details.push("✓ Email address found");
    } else {
        details.push("✗ Add professional email address");
    }

    if has_phone {
        score += PHONE_POINTS;
        details.push("✓ Phone number found");
    } else {
        details.push("✗ Add phone number");
    }

    if has_linkedin {
        score += LINKEDIN_POINTS;
        details.push("✓ LinkedIn profile found");
    } else {
        details.push("✗ Add LinkedIn profile URL");
    }

    if has_github {
        score += GITHUB_POINTS;
        details.push("✓ GitHub profile found");
    } else {
        details.push("• Consider adding GitHub profile (if relevant)");
    }

    let feedback = if has_email && has_phone {
        "Strong contact information"
    } else {
        "Missing essential contact details"
    };

    SectionResult::new(score, feedback)
        .with_details(details.into_iter().map(String::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tables::DEFAULT_TABLES;

    fn run(text: &str) -> SectionResult {
        let patterns = SignalPatterns::compile(&DEFAULT_TABLES).unwrap();
        analyze_contact(&NormalizedText::new(text), &patterns)
    }

    #[test]
    fn test_email_and_phone_score_55() {
        let result = run("Jane Doe\njane@example.com\n(555) 123-4567");
        assert_eq!(result.score, 55);
        assert_eq!(result.feedback, "Strong contact information");
    }

    #[test]
    fn test_all_signals_score_100() {
        let result = run(
            "jane@example.com | 555-123-4567 | linkedin.com/in/jane | github.com/jane",
        );
        assert_eq!(result.score, 100);
        let details = result.details.unwrap();
        assert!(details.iter().all(|d| d.starts_with('✓')));
    }

    #[test]
    fn test_empty_input_reports_everything_missing() {
        let result = run("");
        assert_eq!(result.score, 0);
        assert_eq!(result.feedback, "Missing essential contact details");
        assert_eq!(
            result.details.unwrap(),
            vec![
                "✗ Add professional email address",
                "✗ Add phone number",
                "✗ Add LinkedIn profile URL",
                "• Consider adding GitHub profile (if relevant)",
            ]
        );
    }

    #[test]
    fn test_email_after_accented_letter_is_found() {
        let result = run("Müllerjane@example.com");
        assert_eq!(result.score, 30);
        assert_eq!(result.details.unwrap()[0], "✓ Email address found");
    }

    #[test]
    fn test_email_without_phone_is_missing_essentials() {
        let result = run("jane@example.com\nlinkedin.com/in/jane");
        assert_eq!(result.score, 55);
        assert_eq!(result.feedback, "Missing essential contact details");
    }
}
