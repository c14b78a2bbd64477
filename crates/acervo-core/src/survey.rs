//! # Survey Module
//!
//! Questionnaire responses and the extraction of the semantic fields the
//! classifier reads.
//!
//! Two layouts are supported:
//! - **Tagged**: responses carry a [`QuestionSlot`] naming the field they
//!   answer. Order does not matter.
//! - **Positional** (legacy): responses carry no tag and the field is
//!   inferred from the 1-based position in the questionnaire.
//!
//! A survey mixing both is read tag first; slots nobody tagged fall back to
//! the untagged response at their legacy position.
//!
//! Positional input is fragile (inserting a question shifts every field),
//! so new callers should tag their responses.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// QUESTION SLOT
// =============================================================================

/// A semantic field of the diagnostic questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionSlot {
    /// Problems reported in document management.
    ManagementProblems,
    /// Document volume bucket.
    DocumentVolume,
    /// Conservation state of the collection.
    ConservationState,
    /// Conditions of the storage site.
    SiteConditions,
    /// How often the collection is consulted.
    UsageFrequency,
}

impl QuestionSlot {
    /// All slots in questionnaire order.
    pub const ALL: [QuestionSlot; 5] = [
        QuestionSlot::ManagementProblems,
        QuestionSlot::DocumentVolume,
        QuestionSlot::ConservationState,
        QuestionSlot::SiteConditions,
        QuestionSlot::UsageFrequency,
    ];

    /// Stable identifier used in tagged input.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::ManagementProblems => "management-problems",
            Self::DocumentVolume => "document-volume",
            Self::ConservationState => "conservation-state",
            Self::SiteConditions => "site-conditions",
            Self::UsageFrequency => "usage-frequency",
        }
    }

    /// 1-based position of this slot in the legacy questionnaire.
    #[must_use]
    pub fn legacy_position(self) -> usize {
        match self {
            Self::ManagementProblems => 1,
            Self::DocumentVolume => 4,
            Self::ConservationState => 5,
            Self::SiteConditions => 6,
            Self::UsageFrequency => 8,
        }
    }

    /// Slot stored at the given 1-based legacy position, if any.
    #[must_use]
    pub fn from_legacy_position(position: usize) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.legacy_position() == position)
    }
}

impl fmt::Display for QuestionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for QuestionSlot {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.id() == s)
            .ok_or_else(|| CoreError::UnknownSlot(s.to_string()))
    }
}

// =============================================================================
// SECTOR RESPONSE
// =============================================================================

/// One answered question of a sector's questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorResponse {
    /// The question prompt.
    pub question: String,
    /// The answer as entered.
    pub answer: String,
    /// Semantic field this response answers, when the caller tags it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<QuestionSlot>,
}

impl SectorResponse {
    /// Create an untagged (positional) response.
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            slot: None,
        }
    }

    /// Create a response tagged with its semantic slot.
    #[must_use]
    pub fn tagged(
        slot: QuestionSlot,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            slot: Some(slot),
        }
    }
}

// =============================================================================
// FIELD EXTRACTION
// =============================================================================

/// How semantic fields were located in a response sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotLayout {
    /// Fields read from fixed legacy positions.
    #[default]
    Positional,
    /// Fields read from slot tags.
    Tagged,
    /// Tagged fields first, missing slots filled from untagged responses
    /// at their legacy position.
    Mixed,
}

impl SlotLayout {
    /// Classify a response sequence by how many responses carry a slot.
    #[must_use]
    pub fn detect(responses: &[SectorResponse]) -> Self {
        let tagged = responses.iter().filter(|r| r.slot.is_some()).count();
        match tagged {
            0 => Self::Positional,
            n if n == responses.len() => Self::Tagged,
            _ => Self::Mixed,
        }
    }
}

/// The answers the classifier reads by slot.
///
/// Missing answers are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyFields {
    /// Answer to the management-problems question.
    pub management_problems: String,
    /// Answer to the document-volume question.
    pub document_volume: String,
    /// Answer to the conservation-state question.
    pub conservation_state: String,
    /// Answer to the site-conditions question.
    pub site_conditions: String,
    /// Answer to the usage-frequency question.
    pub usage_frequency: String,
    /// Layout the fields were extracted with.
    pub layout: SlotLayout,
}

impl SurveyFields {
    /// Extract the fields from a response sequence.
    ///
    /// The first response tagged with a slot wins. A slot nobody tagged is
    /// read from its legacy position, provided the response there is
    /// itself untagged.
    #[must_use]
    pub fn extract(responses: &[SectorResponse]) -> Self {
        let mut fields = Self {
            layout: SlotLayout::detect(responses),
            ..Self::default()
        };

        for slot in QuestionSlot::ALL {
            let response = responses
                .iter()
                .find(|r| r.slot == Some(slot))
                .or_else(|| {
                    responses
                        .get(slot.legacy_position().saturating_sub(1))
                        .filter(|r| r.slot.is_none())
                });
            if let Some(response) = response {
                fields.slot_mut(slot).clone_from(&response.answer);
            }
        }

        fields
    }

    /// Answer stored for a slot.
    #[must_use]
    pub fn get(&self, slot: QuestionSlot) -> &str {
        match slot {
            QuestionSlot::ManagementProblems => &self.management_problems,
            QuestionSlot::DocumentVolume => &self.document_volume,
            QuestionSlot::ConservationState => &self.conservation_state,
            QuestionSlot::SiteConditions => &self.site_conditions,
            QuestionSlot::UsageFrequency => &self.usage_frequency,
        }
    }

    fn slot_mut(&mut self, slot: QuestionSlot) -> &mut String {
        match slot {
            QuestionSlot::ManagementProblems => &mut self.management_problems,
            QuestionSlot::DocumentVolume => &mut self.document_volume,
            QuestionSlot::ConservationState => &mut self.conservation_state,
            QuestionSlot::SiteConditions => &mut self.site_conditions,
            QuestionSlot::UsageFrequency => &mut self.usage_frequency,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
