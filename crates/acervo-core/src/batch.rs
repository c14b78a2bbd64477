//! # Batch Classification
//!
//! Classifies several named sectors at once and summarizes the outcome,
//! the way the dashboard's overview card aggregates them.

use crate::classifier::classify;
use crate::survey::SectorResponse;
use crate::verdict::{CriticalityLevel, CriticalityVerdict};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A sector and its questionnaire responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorSurvey {
    /// Sector name.
    pub sector: String,
    /// Ordered responses.
    pub responses: Vec<SectorResponse>,
}

impl SectorSurvey {
    /// Create a sector survey.
    #[must_use]
    pub fn new(sector: impl Into<String>, responses: Vec<SectorResponse>) -> Self {
        Self {
            sector: sector.into(),
            responses,
        }
    }
}

/// Verdict for one sector of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorAssessment {
    /// Sector name.
    pub sector: String,
    /// Verdict for the sector.
    pub verdict: CriticalityVerdict,
}

/// Aggregate counts for a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of sectors classified.
    pub total: usize,
    /// Sectors per level, every level present (possibly zero).
    pub by_level: BTreeMap<CriticalityLevel, usize>,
    /// Names of the sectors classified high, in input order.
    pub high_sectors: Vec<String>,
}

impl BatchSummary {
    /// Count of sectors at a level.
    #[must_use]
    pub fn count(&self, level: CriticalityLevel) -> usize {
        self.by_level.get(&level).copied().unwrap_or(0)
    }
}

/// Assessments in input order plus their summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// One assessment per input sector.
    pub assessments: Vec<SectorAssessment>,
    /// Aggregate counts.
    pub summary: BatchSummary,
}

/// Classify every sector and summarize.
#[must_use]
pub fn classify_batch(surveys: &[SectorSurvey]) -> BatchReport {
    let mut summary = BatchSummary {
        total: surveys.len(),
        by_level: CriticalityLevel::ALL.into_iter().map(|l| (l, 0)).collect(),
        high_sectors: Vec::new(),
    };

    let assessments = surveys
        .iter()
        .map(|survey| {
            let verdict = classify(&survey.responses);
            let count = summary.by_level.entry(verdict.level).or_insert(0);
            *count = count.saturating_add(1);
            if verdict.level == CriticalityLevel::High {
                summary.high_sectors.push(survey.sector.clone());
            }
            SectorAssessment {
                sector: survey.sector.clone(),
                verdict,
            }
        })
        .collect();

    BatchReport {
        assessments,
        summary,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::QuestionSlot;

    fn tagged(volume: &str, conservation: &str, usage: &str) -> Vec<SectorResponse> {
        vec![
            SectorResponse::tagged(QuestionSlot::ManagementProblems, "Problemas?", "Nenhum"),
            SectorResponse::tagged(QuestionSlot::DocumentVolume, "Volume?", volume),
            SectorResponse::tagged(QuestionSlot::ConservationState, "Estado?", conservation),
            SectorResponse::tagged(QuestionSlot::UsageFrequency, "Uso?", usage),
        ]
    }

    #[test]
    fn empty_batch_has_zeroed_summary() {
        let report = classify_batch(&[]);
        assert!(report.assessments.is_empty());
        assert_eq!(report.summary.total, 0);
        assert_eq!(report.summary.by_level.len(), 4);
        assert!(report.summary.by_level.values().all(|c| *c == 0));
    }

    #[test]
    fn batch_preserves_order_and_counts_levels() {
        let surveys = vec![
            SectorSurvey::new("Protocolo", tagged("Mais de 2000", "Bom", "Alta")),
            SectorSurvey::new("Financeiro", tagged("Até 200", "Bom", "Baixa")),
            SectorSurvey::new("Jurídico", tagged("Até 200", "Ruim", "Baixa")),
            SectorSurvey::new("Obras", Vec::new()),
        ];
        let report = classify_batch(&surveys);

        let names: Vec<_> = report.assessments.iter().map(|a| a.sector.as_str()).collect();
        assert_eq!(names, vec!["Protocolo", "Financeiro", "Jurídico", "Obras"]);

        assert_eq!(report.summary.total, 4);
        assert_eq!(report.summary.count(CriticalityLevel::High), 2);
        assert_eq!(report.summary.count(CriticalityLevel::Low), 1);
        assert_eq!(report.summary.count(CriticalityLevel::NeedsReview), 1);
        assert_eq!(report.summary.count(CriticalityLevel::Moderate), 0);
        assert_eq!(report.summary.high_sectors, vec!["Protocolo", "Jurídico"]);
    }

    #[test]
    fn summary_counts_sum_to_total() {
        let surveys: Vec<_> = (0..10)
            .map(|i| SectorSurvey::new(format!("Setor {i}"), tagged("201 a 500", "Regular", "Alta")))
            .collect();
        let report = classify_batch(&surveys);
        let sum: usize = report.summary.by_level.values().sum();
        assert_eq!(sum, report.summary.total);
    }

    #[test]
    fn summary_serializes_levels_as_keys() {
        let report = classify_batch(&[SectorSurvey::new("A", Vec::new())]);
        let json = serde_json::to_value(&report.summary).expect("serializable");
        assert_eq!(json["by_level"]["needs-review"], 1);
        assert_eq!(json["by_level"]["high"], 0);
    }
}
