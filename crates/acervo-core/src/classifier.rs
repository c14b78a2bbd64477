//! # Classifier
//!
//! Entry point of the crate: runs the rule cascade over a response
//! sequence and assembles the verdict.
//!
//! Classification is total. Input that no rule recognizes, including an
//! empty survey, produces the `needs-review` verdict.

use crate::evidence::Evidence;
use crate::rules::{RuleId, rules};
use crate::survey::SectorResponse;
use crate::verdict::CriticalityVerdict;
use serde::{Deserialize, Serialize};

/// Classify one sector from its questionnaire responses.
#[must_use]
pub fn classify(responses: &[SectorResponse]) -> CriticalityVerdict {
    Classifier::classify(responses)
}

/// Evaluate every rule against the responses, for auditing.
///
/// Unlike [`classify`] this does not stop at the first match, so it shows
/// which lower-priority rules were shadowed.
#[must_use]
pub fn explain(responses: &[SectorResponse]) -> Vec<RuleOutcome> {
    Classifier::explain(&Evidence::gather(responses))
}

/// Outcome of one rule in an [`explain`] trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// Rule identifier.
    pub rule: RuleId,
    /// Whether the rule's condition holds.
    pub fired: bool,
    /// Whether this rule produced the verdict (first rule that fired).
    pub selected: bool,
    /// Reasons the rule gave, empty when it did not fire.
    pub reasons: Vec<String>,
}

/// Runs the rule cascade.
pub struct Classifier;

impl Classifier {
    /// Classify from raw responses.
    #[must_use]
    pub fn classify(responses: &[SectorResponse]) -> CriticalityVerdict {
        Self::classify_evidence(&Evidence::gather(responses))
    }

    /// Classify from already gathered evidence.
    ///
    /// First rule that fires wins; no match yields `needs-review`.
    #[must_use]
    pub fn classify_evidence(evidence: &Evidence) -> CriticalityVerdict {
        rules()
            .iter()
            .find_map(|rule| {
                rule.evaluate(evidence)
                    .map(|reasons| CriticalityVerdict::new(rule.level, reasons, Some(rule.id)))
            })
            .unwrap_or_else(CriticalityVerdict::needs_review)
    }

    /// Evaluate all rules against the evidence.
    #[must_use]
    pub fn explain(evidence: &Evidence) -> Vec<RuleOutcome> {
        let mut selected_seen = false;
        rules()
            .iter()
            .map(|rule| {
                let reasons = rule.evaluate(evidence);
                let fired = reasons.is_some();
                let selected = fired && !selected_seen;
                selected_seen |= fired;
                RuleOutcome {
                    rule: rule.id,
                    fired,
                    selected,
                    reasons: reasons.unwrap_or_default(),
                }
            })
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
