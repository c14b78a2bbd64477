//! # Verdict Module
//!
//! The classifier's output: a criticality level with its fixed score,
//! the reasons that produced it and the presentation hints the dashboard
//! renders.
//!
//! A verdict always carries at least one reason.

use crate::error::CoreError;
use crate::primitives::{SCORE_HIGH, SCORE_LOW, SCORE_MODERATE, SCORE_NEEDS_REVIEW};
use crate::rules::RuleId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reason attached to the fallback verdict.
pub const NEEDS_REVIEW_REASON: &str =
    "Critérios automáticos inconclusivos; requer revisão manual";

// =============================================================================
// CRITICALITY LEVEL
// =============================================================================

/// Categorical outcome of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CriticalityLevel {
    /// Urgent intervention needed.
    High,
    /// Follow-up and planned improvements needed.
    Moderate,
    /// Stable sector.
    Low,
    /// No rule matched; a person must look at the answers.
    NeedsReview,
}

impl CriticalityLevel {
    /// All levels, most severe first.
    pub const ALL: [CriticalityLevel; 4] = [
        CriticalityLevel::High,
        CriticalityLevel::Moderate,
        CriticalityLevel::Low,
        CriticalityLevel::NeedsReview,
    ];

    /// Stable identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
            Self::NeedsReview => "needs-review",
        }
    }

    /// Fixed score of the level.
    #[must_use]
    pub fn score(self) -> u8 {
        match self {
            Self::High => SCORE_HIGH,
            Self::Moderate => SCORE_MODERATE,
            Self::Low => SCORE_LOW,
            Self::NeedsReview => SCORE_NEEDS_REVIEW,
        }
    }

    /// Display label shown to users.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "Alta",
            Self::Moderate => "Moderada",
            Self::Low => "Baixa",
            Self::NeedsReview => "Em análise",
        }
    }

    /// Color hint.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::High => "red",
            Self::Moderate => "yellow",
            Self::Low => "green",
            Self::NeedsReview => "gray",
        }
    }

    /// Icon hint.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::High => "alert-triangle",
            Self::Moderate => "alert-circle",
            Self::Low => "check-circle",
            Self::NeedsReview => "help-circle",
        }
    }

    /// Tooltip explaining the level.
    #[must_use]
    pub fn tooltip(self) -> &'static str {
        match self {
            Self::High => {
                "Setor com risco elevado para o acervo; requer intervenção prioritária."
            }
            Self::Moderate => {
                "Setor com fragilidades pontuais; requer acompanhamento e melhorias planejadas."
            }
            Self::Low => "Setor estável; manter as práticas atuais de gestão documental.",
            Self::NeedsReview => {
                "Não foi possível classificar automaticamente; os dados devem ser revisados manualmente."
            }
        }
    }
}

impl fmt::Display for CriticalityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CriticalityLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.id() == s)
            .ok_or_else(|| CoreError::UnknownLevel(s.to_string()))
    }
}

// =============================================================================
// CRITICALITY VERDICT
// =============================================================================

/// The result of classifying one sector.
///
/// `score`, `color`, `icon` and `tooltip` are derived from `level`; they
/// are stored so the serialized verdict is self-contained for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalityVerdict {
    /// Criticality level.
    pub level: CriticalityLevel,
    /// Fixed score of the level.
    pub score: u8,
    /// Human-readable reasons, never empty.
    pub reasons: Vec<String>,
    /// Color hint.
    pub color: String,
    /// Icon hint.
    pub icon: String,
    /// Level-specific explanation.
    pub tooltip: String,
    /// Rule of the cascade that produced the verdict (`None` for the fallback).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<RuleId>,
}

impl CriticalityVerdict {
    /// Build a verdict for a level.
    ///
    /// Empty `reasons` fall back to the level's tooltip so the verdict
    /// always explains itself.
    #[must_use]
    pub fn new(level: CriticalityLevel, reasons: Vec<String>, rule: Option<RuleId>) -> Self {
        let reasons = if reasons.is_empty() {
            vec![level.tooltip().to_string()]
        } else {
            reasons
        };

        Self {
            level,
            score: level.score(),
            reasons,
            color: level.color().to_string(),
            icon: level.icon().to_string(),
            tooltip: level.tooltip().to_string(),
            rule,
        }
    }

    /// The fallback verdict when no rule matched.
    #[must_use]
    pub fn needs_review() -> Self {
        Self::new(
            CriticalityLevel::NeedsReview,
            vec![NEEDS_REVIEW_REASON.to_string()],
            None,
        )
    }

    /// Format as a plain-text report.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str("┌─────────────────────────────────────┐\n");
        output.push_str(&format!(
            "│ CRITICIDADE: {} ({})\n",
            self.level.label(),
            self.score
        ));
        if let Some(rule) = self.rule {
            output.push_str(&format!("│ regra: {}\n", rule));
        }
        output.push_str("├─────────────────────────────────────┤\n");
        output.push_str("│ MOTIVOS                             │\n");
        for reason in &self.reasons {
            output.push_str(&format!("│ - {}\n", reason));
        }
        output.push_str("├─────────────────────────────────────┤\n");
        output.push_str(&format!("│ {}\n", self.tooltip));
        output.push_str("└─────────────────────────────────────┘\n");

        output
    }
}

// =============================================================================
// TESTS
// =============================================================================
