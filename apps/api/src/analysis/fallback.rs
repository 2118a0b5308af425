use crate::analysis::models::{Report, ScoredTips, Tip};

/// Serialized form used when even the fallback report cannot be serialized.
pub const MINIMAL_REPORT_JSON: &str = r#"{
  "overallScore": 0,
  "ats": { "score": 0, "tips": [] },
  "toneAndStyle": { "score": 0, "tips": [] },
  "content": { "score": 0, "tips": [] },
  "structure": { "score": 0, "tips": [] },
  "skills": { "score": 0, "tips": [] }
}"#;

/// Fixed, input-independent report returned when analysis fails.
pub fn fallback_report() -> Report {
    Report {
        overall_score: 65,
        ats: ScoredTips {
            score: 60,
            tips: vec![
                Tip::recommendation("Add more relevant keywords for better ATS compatibility"),
                Tip::recommendation(
                    "Use standard section headings like 'Experience' and 'Education'",
                ),
            ],
        },
        tone_and_style: ScoredTips {
            score: 70,
            tips: vec![Tip::improve(
                "Add a professional summary section",
                "A compelling summary helps recruiters quickly understand your value proposition",
            )],
        },
        content: ScoredTips {
            score: 60,
            tips: vec![Tip::improve(
                "Add quantified achievements to your experience section",
                "Numbers and metrics make your accomplishments more impactful",
            )],
        },
        structure: ScoredTips {
            score: 65,
            tips: vec![Tip::improve(
                "Ensure consistent formatting throughout",
                "Consistent formatting improves readability and professionalism",
            )],
        },
        skills: ScoredTips {
            score: 65,
            tips: vec![Tip::improve(
                "Expand your skills section with relevant technologies",
                "Include both technical and soft skills relevant to your target role",
            )],
        },
    }
}

/// The fallback report as JSON, degrading to [`MINIMAL_REPORT_JSON`].
pub fn fallback_json() -> String {
    fallback_report()
        .to_json()
        .unwrap_or_else(|_| MINIMAL_REPORT_JSON.to_string())
}
