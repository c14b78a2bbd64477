//! # Evidence
//!
//! Everything the rule cascade looks at, gathered in a single pass over
//! the responses. Rules never see the raw responses.

use crate::primitives::{
    ANSWER_INADEQUATE, ANSWER_POOR, ANSWER_YES, MODERATE_MARKERS, PROBLEM_MARKERS,
    STILL_PRODUCES_MARKER, contains_any,
};
use crate::survey::{SectorResponse, SurveyFields};
use crate::volume::{VolumeBucket, volume_midpoint};
use serde::{Deserialize, Serialize};

/// Precomputed inputs of the rule cascade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// Answers read by slot.
    pub fields: SurveyFields,
    /// Detected volume bucket, if any.
    pub bucket: Option<VolumeBucket>,
    /// Representative volume (0 when no bucket matched).
    pub volume: u32,
    /// Responses, across the whole survey, that report a serious issue.
    pub serious_issues: usize,
    /// Responses, across the whole survey, that signal an intermediate situation.
    pub moderate_signals: usize,
}

impl Evidence {
    /// Gather evidence from a response sequence.
    #[must_use]
    pub fn gather(responses: &[SectorResponse]) -> Self {
        let fields = SurveyFields::extract(responses);
        let bucket = VolumeBucket::detect(&fields.document_volume);
        let volume = volume_midpoint(&fields.document_volume);

        Self {
            fields,
            bucket,
            volume,
            serious_issues: responses.iter().filter(|r| is_serious_issue(r)).count(),
            moderate_signals: responses.iter().filter(|r| is_moderate_signal(r)).count(),
        }
    }

    /// Whether the management-problems answer reports serious problems.
    #[must_use]
    pub fn reports_management_problems(&self) -> bool {
        contains_any(&self.fields.management_problems, &PROBLEM_MARKERS)
    }
}

/// An answer exactly "Ruim" or "Inadequado", or mentioning a problem marker.
#[must_use]
pub fn is_serious_issue(response: &SectorResponse) -> bool {
    let answer = response.answer.as_str();
    answer == ANSWER_POOR || answer == ANSWER_INADEQUATE || contains_any(answer, &PROBLEM_MARKERS)
}

/// An answer mentioning a moderate marker, or a "Sim" to a question about
/// ongoing document production.
#[must_use]
pub fn is_moderate_signal(response: &SectorResponse) -> bool {
    contains_any(&response.answer, &MODERATE_MARKERS)
        || (response.answer == ANSWER_YES && response.question.contains(STILL_PRODUCES_MARKER))
}

// =============================================================================
// TESTS
// =============================================================================
