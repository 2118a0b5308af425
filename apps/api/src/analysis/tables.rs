//! Keyword tables consulted by the section analyzers.
//!
//! Every list is matched as a plain substring of the lower-cased résumé text,
//! except `descriptive_adjectives`, which is compiled into a whole-word pattern
//! (see [`crate::analysis::patterns::SignalPatterns`]).

/// Immutable keyword configuration. The analyzers never read globals; they
/// receive a table explicitly so alternative tables can be tested in isolation.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTables {
    pub summary_headings: &'static [&'static str],
    pub descriptive_adjectives: &'static [&'static str],
    pub experience_headings: &'static [&'static str],
    pub action_verbs: &'static [&'static str],
    pub education_keywords: &'static [&'static str],
    pub degree_types: &'static [&'static str],
    pub skills_headings: &'static [&'static str],
    pub technical_skills: &'static [&'static str],
    pub soft_skills: &'static [&'static str],
    /// Headings an ATS expects to find; all must be present for the ATS bonus.
    pub standard_sections: &'static [&'static str],
}

impl Default for KeywordTables {
    fn default() -> Self {
        DEFAULT_TABLES
    }
}

pub const DEFAULT_TABLES: KeywordTables = KeywordTables {
    summary_headings: SUMMARY_HEADINGS,
    descriptive_adjectives: DESCRIPTIVE_ADJECTIVES,
    experience_headings: EXPERIENCE_HEADINGS,
    action_verbs: ACTION_VERBS,
    education_keywords: EDUCATION_KEYWORDS,
    degree_types: DEGREE_TYPES,
    skills_headings: SKILLS_HEADINGS,
    technical_skills: TECHNICAL_SKILLS,
    soft_skills: SOFT_SKILLS,
    standard_sections: STANDARD_SECTIONS,
};

const SUMMARY_HEADINGS: &[&str] = &["summary", "profile", "objective", "about", "overview"];

const DESCRIPTIVE_ADJECTIVES: &[&str] = &[
    "experienced",
    "skilled",
    "professional",
    "dedicated",
    "passionate",
    "results-driven",
];

const EXPERIENCE_HEADINGS: &[&str] = &[
    "experience",
    "employment",
    "work history",
    "professional experience",
];

const ACTION_VERBS: &[&str] = &[
    "achieved",
    "managed",
    "led",
    "developed",
    "implemented",
    "created",
    "improved",
    "increased",
    "reduced",
    "designed",
];

const EDUCATION_KEYWORDS: &[&str] = &[
    "education",
    "degree",
    "university",
    "college",
    "bachelor",
    "master",
    "phd",
    "certification",
];

// Overlaps EDUCATION_KEYWORDS on bachelor/master/phd.
const DEGREE_TYPES: &[&str] = &["bachelor", "master", "phd", "doctorate", "associate"];

const SKILLS_HEADINGS: &[&str] = &["skills", "technologies", "competencies", "proficiencies"];

const TECHNICAL_SKILLS: &[&str] = &[
    "python",
    "javascript",
    "java",
    "react",
    "node",
    "sql",
    "aws",
    "docker",
    "git",
];

const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "analytical",
];

const STANDARD_SECTIONS: &[&str] = &["experience", "education", "skills"];
