use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::GenomicRegion;

///
/// Region struct, a half-open genomic interval `[start, end)` on one contig
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    pub chr: String,
    pub start: u64,
    pub end: u64,
}

impl Region {
    pub fn new(chr: impl Into<String>, start: u64, end: u64) -> Self {
        Region {
            chr: chr.into(),
            start,
            end,
        }
    }

    ///
    /// Get length of the region
    ///
    pub fn width(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    ///
    /// Get BED line of the Region
    ///
    pub fn as_string(&self) -> String {
        format!("{}\t{}\t{}", self.chr, self.start, self.end)
    }
}

impl GenomicRegion for Region {
    fn contig(&self) -> &str {
        &self.chr
    }

    fn start(&self) -> u64 {
        self.start
    }

    fn end(&self) -> u64 {
        self.end
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
