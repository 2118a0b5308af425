//! Section analyzers. Each one reads the normalized text independently and
//! returns a fresh [`SectionResult`](crate::analysis::models::SectionResult).

pub mod contact;
pub mod education;
pub mod experience;
pub mod formatting;
pub mod skills;
pub mod summary;

pub use contact::analyze_contact;
pub use education::analyze_education;
pub use experience::analyze_experience;
pub use formatting::analyze_formatting;
pub use skills::analyze_skills;
pub use summary::analyze_summary;

/// Picks feedback by strict thresholds: `score > high`, then `score > mid`.
/// A score equal to a threshold falls to the lower tier.
pub(crate) fn tiered(
    score: u32,
    (high, top): (u32, &'static str),
    (mid, middle): (u32, &'static str),
    bottom: &'static str,
) -> &'static str {
    match score {
        s if s > high => top,
        s if s > mid => middle,
        _ => bottom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiered_boundaries_fall_to_lower_tier() {
        let pick = |s| tiered(s, (80, "top"), (60, "mid"), "low");
        assert_eq!(pick(81), "top");
        assert_eq!(pick(80), "mid");
        assert_eq!(pick(61), "mid");
        assert_eq!(pick(60), "low");
        assert_eq!(pick(0), "low");
    }
}
