//! # Rule Cascade
//!
//! The classifier is an ordered table of rules evaluated first-match-wins.
//! Each rule is a pure function of [`Evidence`] returning the reasons for
//! its verdict when it fires.
//!
//! Priority order:
//!
//! | # | rule                      | level    |
//! |---|---------------------------|----------|
//! | 1 | `high-problems-with-volume` | high   |
//! | 2 | `high-volume`             | high     |
//! | 3 | `high-poor-conditions`    | high     |
//! | 4 | `high-accumulated-issues` | high     |
//! | 5 | `moderate`                | moderate |
//! | 6 | `low-stable`              | low      |
//!
//! When nothing fires the caller falls back to `needs-review`.

use crate::evidence::Evidence;
use crate::primitives::{
    ACCUMULATED_ISSUES_MIN, ANSWER_FAIR, ANSWER_GOOD, ANSWER_INADEQUATE, ANSWER_POOR,
    HIGH_VOLUME_THRESHOLD, LOW_CRITERIA_MIN, LOW_USAGE_MARKERS, LOW_VOLUME_MAX,
    MODERATE_SIGNALS_MIN, MODERATE_VOLUME_RANGE, PROBLEM_VOLUME_THRESHOLD, contains_any,
};
use crate::verdict::CriticalityLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// RULE IDENTIFIERS
// =============================================================================

/// Identifier of a rule in the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    /// Serious management problems combined with a volume above 1000.
    HighProblemsWithVolume,
    /// Volume above 2000.
    HighVolume,
    /// Poor conservation state or poor/inadequate site.
    HighPoorConditions,
    /// Three or more serious-issue answers anywhere in the survey.
    HighAccumulatedIssues,
    /// Intermediate signals on a mid-sized collection.
    Moderate,
    /// Most stability criteria hold.
    LowStable,
}

impl RuleId {
    /// Stable identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::HighProblemsWithVolume => "high-problems-with-volume",
            Self::HighVolume => "high-volume",
            Self::HighPoorConditions => "high-poor-conditions",
            Self::HighAccumulatedIssues => "high-accumulated-issues",
            Self::Moderate => "moderate",
            Self::LowStable => "low-stable",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// =============================================================================
// RULE TABLE
// =============================================================================

/// Signature of a rule body: reasons when it fires, `None` otherwise.
pub type RuleFn = fn(&Evidence) -> Option<Vec<String>>;

/// One entry of the cascade.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Rule identifier.
    pub id: RuleId,
    /// Level produced when the rule fires.
    pub level: CriticalityLevel,
    /// What the rule checks.
    pub description: &'static str,
    evaluate: RuleFn,
}

impl Rule {
    /// Evaluate this rule alone.
    #[must_use]
    pub fn evaluate(&self, evidence: &Evidence) -> Option<Vec<String>> {
        (self.evaluate)(evidence)
    }

    /// Serializable description of the rule at a 1-based priority.
    #[must_use]
    pub fn descriptor(&self, priority: usize) -> RuleDescriptor {
        RuleDescriptor {
            priority,
            id: self.id,
            level: self.level,
            score: self.level.score(),
            description: self.description.to_string(),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

/// A rule as listed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDescriptor {
    /// 1-based position in the cascade.
    pub priority: usize,
    /// Rule identifier.
    pub id: RuleId,
    /// Level produced when the rule fires.
    pub level: CriticalityLevel,
    /// Score produced when the rule fires.
    pub score: u8,
    /// What the rule checks.
    pub description: String,
}

static RULES: [Rule; 6] = [
    Rule {
        id: RuleId::HighProblemsWithVolume,
        level: CriticalityLevel::High,
        description: "management problems reported and volume above 1000",
        evaluate: high_problems_with_volume,
    },
    Rule {
        id: RuleId::HighVolume,
        level: CriticalityLevel::High,
        description: "volume above 2000",
        evaluate: high_volume,
    },
    Rule {
        id: RuleId::HighPoorConditions,
        level: CriticalityLevel::High,
        description: "conservation state poor, or site poor or inadequate",
        evaluate: high_poor_conditions,
    },
    Rule {
        id: RuleId::HighAccumulatedIssues,
        level: CriticalityLevel::High,
        description: "three or more answers reporting serious issues",
        evaluate: high_accumulated_issues,
    },
    Rule {
        id: RuleId::Moderate,
        level: CriticalityLevel::Moderate,
        description: "two or more intermediate signals and volume between 201 and 1000",
        evaluate: moderate,
    },
    Rule {
        id: RuleId::LowStable,
        level: CriticalityLevel::Low,
        description: "at least three of four stability criteria hold",
        evaluate: low_stable,
    },
];

/// The cascade in priority order.
#[must_use]
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Look up a rule by identifier.
#[must_use]
pub fn rule(id: RuleId) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.id == id)
}

// =============================================================================
// RULE BODIES
// =============================================================================

fn high_problems_with_volume(evidence: &Evidence) -> Option<Vec<String>> {
    (evidence.reports_management_problems() && evidence.volume > PROBLEM_VOLUME_THRESHOLD).then(
        || {
            vec![
                "Problemas significativos na gestão documental".to_string(),
                format!(
                    "Volume documental acima de {} (estimado em {})",
                    PROBLEM_VOLUME_THRESHOLD, evidence.volume
                ),
            ]
        },
    )
}

fn high_volume(evidence: &Evidence) -> Option<Vec<String>> {
    (evidence.volume > HIGH_VOLUME_THRESHOLD).then(|| {
        vec![format!(
            "Volume documental acima de {} (estimado em {})",
            HIGH_VOLUME_THRESHOLD, evidence.volume
        )]
    })
}

fn high_poor_conditions(evidence: &Evidence) -> Option<Vec<String>> {
    let fields = &evidence.fields;
    let mut reasons = Vec::new();

    if fields.conservation_state == ANSWER_POOR {
        reasons.push("Estado de conservação ruim".to_string());
    }
    if fields.site_conditions == ANSWER_POOR {
        reasons.push("Condições do local ruins".to_string());
    } else if fields.site_conditions == ANSWER_INADEQUATE {
        reasons.push("Condições do local inadequadas".to_string());
    }

    (!reasons.is_empty()).then_some(reasons)
}

fn high_accumulated_issues(evidence: &Evidence) -> Option<Vec<String>> {
    (evidence.serious_issues >= ACCUMULATED_ISSUES_MIN).then(|| {
        vec![format!(
            "{} respostas indicam problemas graves",
            evidence.serious_issues
        )]
    })
}

fn moderate(evidence: &Evidence) -> Option<Vec<String>> {
    (evidence.moderate_signals >= MODERATE_SIGNALS_MIN
        && MODERATE_VOLUME_RANGE.contains(&evidence.volume))
    .then(|| {
        vec![
            format!(
                "{} respostas indicam situação intermediária",
                evidence.moderate_signals
            ),
            format!("Volume documental moderado (estimado em {})", evidence.volume),
        ]
    })
}

fn low_stable(evidence: &Evidence) -> Option<Vec<String>> {
    let criteria = LowStabilityCriteria::assess(evidence);
    (criteria.met() >= LOW_CRITERIA_MIN).then(|| criteria.labels())
}

// =============================================================================
// LOW STABILITY CRITERIA
// =============================================================================

/// The four independent criteria of the low-criticality rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStabilityCriteria {
    /// Volume at most 200.
    pub small_volume: bool,
    /// Conservation state or site is "Bom" or "Razoável".
    pub adequate_conditions: bool,
    /// Usage frequency mentions "Ocasional" or "Baixa".
    pub infrequent_use: bool,
    /// Management problems answer carries no problem marker.
    pub no_management_problems: bool,
}

impl LowStabilityCriteria {
    /// Evaluate the criteria.
    #[must_use]
    pub fn assess(evidence: &Evidence) -> Self {
        let fields = &evidence.fields;
        let adequate = |answer: &str| answer == ANSWER_GOOD || answer == ANSWER_FAIR;

        Self {
            small_volume: evidence.volume <= LOW_VOLUME_MAX,
            adequate_conditions: adequate(&fields.conservation_state)
                || adequate(&fields.site_conditions),
            infrequent_use: contains_any(&fields.usage_frequency, &LOW_USAGE_MARKERS),
            no_management_problems: !evidence.reports_management_problems(),
        }
    }

    /// Number of criteria that hold.
    #[must_use]
    pub fn met(&self) -> usize {
        [
            self.small_volume,
            self.adequate_conditions,
            self.infrequent_use,
            self.no_management_problems,
        ]
        .into_iter()
        .filter(|held| *held)
        .count()
    }

    /// Labels of the criteria that hold, in criterion order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        if self.small_volume {
            labels.push(format!("Volume documental reduzido (até {})", LOW_VOLUME_MAX));
        }
        if self.adequate_conditions {
            labels.push("Conservação ou local em condições adequadas".to_string());
        }
        if self.infrequent_use {
            labels.push("Frequência de uso baixa ou ocasional".to_string());
        }
        if self.no_management_problems {
            labels.push("Sem problemas significativos de gestão relatados".to_string());
        }
        labels
    }
}

// =============================================================================
// TESTS
// =============================================================================
