//! # Volume Buckets
//!
//! The document-volume question is answered with a bucket label. The
//! classifier works on a representative midpoint per bucket.

use serde::{Deserialize, Serialize};

/// A document-volume answer bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VolumeBucket {
    /// "Até 200"
    UpTo200,
    /// "201 a 500"
    From201To500,
    /// "501 a 1000"
    From501To1000,
    /// "1001 a 2000"
    From1001To2000,
    /// "Mais de 2000"
    Over2000,
}

impl VolumeBucket {
    /// Buckets in detection order.
    pub const ALL: [VolumeBucket; 5] = [
        VolumeBucket::UpTo200,
        VolumeBucket::From201To500,
        VolumeBucket::From501To1000,
        VolumeBucket::From1001To2000,
        VolumeBucket::Over2000,
    ];

    /// Label fragment searched for in the answer.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::UpTo200 => "Até 200",
            Self::From201To500 => "201 a 500",
            Self::From501To1000 => "501 a 1000",
            Self::From1001To2000 => "1001 a 2000",
            Self::Over2000 => "Mais de 2000",
        }
    }

    /// Representative volume for the bucket.
    #[must_use]
    pub fn midpoint(self) -> u32 {
        match self {
            Self::UpTo200 => 100,
            Self::From201To500 => 350,
            Self::From501To1000 => 750,
            Self::From1001To2000 => 1500,
            Self::Over2000 => 2500,
        }
    }

    /// Detect the bucket of an answer.
    ///
    /// Substring containment, tested in [`VolumeBucket::ALL`] order; the
    /// first label found wins when an answer mentions several.
    #[must_use]
    pub fn detect(answer: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|bucket| answer.contains(bucket.label()))
    }
}

/// Representative volume of an answer, 0 when no bucket matches.
#[must_use]
pub fn volume_midpoint(answer: &str) -> u32 {
    VolumeBucket::detect(answer)
        .map(VolumeBucket::midpoint)
        .unwrap_or(0)
}

// =============================================================================
// TESTS
// =============================================================================
