//! # Primitives
//!
//! Answer markers, thresholds and scores shared by the rule cascade.
//!
//! Answers are matched byte-for-byte: case, accents and punctuation in the
//! questionnaire data are significant.

// =============================================================================
// SCORES
// =============================================================================

/// Score attached to a high criticality verdict.
pub const SCORE_HIGH: u8 = 100;

/// Score attached to a moderate criticality verdict.
pub const SCORE_MODERATE: u8 = 60;

/// Score attached to a low criticality verdict.
pub const SCORE_LOW: u8 = 20;

/// Score attached to a verdict that needs manual review.
pub const SCORE_NEEDS_REVIEW: u8 = 50;

// =============================================================================
// ANSWER MARKERS
// =============================================================================

/// Substrings that flag serious management problems.
pub const PROBLEM_MARKERS: [&str; 2] = ["Desafios Significativos", "Alta Criticidade"];

/// Substrings that flag an intermediate (moderate) situation.
pub const MODERATE_MARKERS: [&str; 3] = ["Regular", "Razoável", "Moderada"];

/// Substrings that flag infrequent use of the collection.
pub const LOW_USAGE_MARKERS: [&str; 2] = ["Ocasional", "Baixa"];

/// Exact answer for poor state or conditions.
pub const ANSWER_POOR: &str = "Ruim";

/// Exact answer for inadequate site conditions.
pub const ANSWER_INADEQUATE: &str = "Inadequado";

/// Exact answer for good state or conditions.
pub const ANSWER_GOOD: &str = "Bom";

/// Exact answer for fair state or conditions.
pub const ANSWER_FAIR: &str = "Razoável";

/// Exact affirmative answer.
pub const ANSWER_YES: &str = "Sim";

/// Question fragment asking whether the sector still produces documents.
pub const STILL_PRODUCES_MARKER: &str = "ainda produz";

// =============================================================================
// THRESHOLDS
// =============================================================================

/// Volume above which a sector is high criticality on volume alone.
pub const HIGH_VOLUME_THRESHOLD: u32 = 2000;

/// Volume above which management problems make a sector high criticality.
pub const PROBLEM_VOLUME_THRESHOLD: u32 = 1000;

/// Inclusive volume range for a moderate verdict.
pub const MODERATE_VOLUME_RANGE: std::ops::RangeInclusive<u32> = 201..=1000;

/// Largest volume that still counts as a small collection.
pub const LOW_VOLUME_MAX: u32 = 200;

/// Minimum number of serious-issue answers for the accumulated-issues rule.
pub const ACCUMULATED_ISSUES_MIN: usize = 3;

/// Minimum number of intermediate signals for the moderate rule.
pub const MODERATE_SIGNALS_MIN: usize = 2;

/// Minimum number of stability criteria for a low verdict.
pub const LOW_CRITERIA_MIN: usize = 3;

/// Returns true if `haystack` contains any of `needles`.
#[must_use]
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_any_matches_substrings() {
        assert!(contains_any("Sim, Desafios Significativos", &PROBLEM_MARKERS));
        assert!(contains_any("Uso Baixa", &LOW_USAGE_MARKERS));
        assert!(!contains_any("desafios significativos", &PROBLEM_MARKERS));
    }

    #[test]
    fn contains_any_is_false_for_empty_haystack() {
        assert!(!contains_any("", &MODERATE_MARKERS));
    }

    #[test]
    fn moderate_range_is_inclusive() {
        assert!(MODERATE_VOLUME_RANGE.contains(&201));
        assert!(MODERATE_VOLUME_RANGE.contains(&1000));
        assert!(!MODERATE_VOLUME_RANGE.contains(&200));
        assert!(!MODERATE_VOLUME_RANGE.contains(&1001));
    }
}
