//! # Acervo Core
//!
//! Deterministic criticality classifier for archival sectors.
//!
//! A sector answers a diagnostic questionnaire; the classifier turns the
//! answers into a [`CriticalityVerdict`] by running a fixed, ordered rule
//! cascade (first match wins) over evidence gathered once from the answers.
//!
//! ```text
//! [SectorResponse] ──► Evidence::gather ──► rules() (first match) ──► CriticalityVerdict
//!                                              │
//!                                              └── no match ──► needs-review
//! ```
//!
//! The crate performs no I/O and holds no state. Every input produces a
//! verdict; there is no error path in [`classify`].

pub mod batch;
pub mod classifier;
pub mod error;
pub mod evidence;
pub mod primitives;
pub mod rules;
pub mod survey;
pub mod verdict;
pub mod volume;

pub use batch::{BatchReport, BatchSummary, SectorAssessment, SectorSurvey, classify_batch};
pub use classifier::{Classifier, RuleOutcome, classify, explain};
pub use error::CoreError;
pub use evidence::Evidence;
pub use rules::{LowStabilityCriteria, Rule, RuleDescriptor, RuleId, rule, rules};
pub use survey::{QuestionSlot, SectorResponse, SlotLayout, SurveyFields};
pub use verdict::{CriticalityLevel, CriticalityVerdict};
pub use volume::{VolumeBucket, volume_midpoint};
