//! The canonical variant interchange record.
//!
//! This is the shape handed to (and received from) the genotyping and
//! serialization stages. It carries its own `end`, but nothing here
//! checks it against the reference allele; [`VariantSite`](super::VariantSite)
//! ignores it on input and always derives it on output.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::GenomicRegion;

/// A variant record: contig, 0-based half-open coordinates and alleles.
///
/// `alternate_allele` is unset for symbolic (non-ref) sites.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Variant {
    pub contig_name: String,
    pub start: u64,
    pub end: u64,
    pub reference_allele: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub alternate_allele: Option<String>,
}

impl GenomicRegion for Variant {
    fn contig(&self) -> &str {
        &self.contig_name
    }

    fn start(&self) -> u64 {
        self.start
    }

    fn end(&self) -> u64 {
        self.end
    }
}
