use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::consts::NON_REF_SYMBOL;

/// The alternate allele of a variant site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AltAllele {
    /// A concrete substituted sequence.
    Known(String),
    /// Symbolic allele: something varies here, but no sequence is committed to.
    NonRef,
}

impl AltAllele {
    pub fn as_known(&self) -> Option<&str> {
        match self {
            AltAllele::Known(allele) => Some(allele),
            AltAllele::NonRef => None,
        }
    }

    pub fn into_known(self) -> Option<String> {
        match self {
            AltAllele::Known(allele) => Some(allele),
            AltAllele::NonRef => None,
        }
    }

    pub fn is_non_ref(&self) -> bool {
        matches!(self, AltAllele::NonRef)
    }
}

impl Display for AltAllele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AltAllele::Known(allele) => write!(f, "{}", allele),
            AltAllele::NonRef => write!(f, "{}", NON_REF_SYMBOL),
        }
    }
}
