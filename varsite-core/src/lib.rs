//! Core models for discovered variant sites.
//!
//! A [`VariantSite`](models::VariantSite) is the unit passed from a variant
//! discovery stage to genotyping and serialization: a contig, a 0-based start,
//! a reference allele and, when known, an alternate allele. The end coordinate
//! is always derived from the reference allele, so every site covers the
//! half-open interval `[start, start + len(ref))`.
//!
//! ```rust
//! use varsite_core::models::{Region, VariantSite};
//!
//! let snv = VariantSite::new("chr1", 837214, "G", "C").unwrap();
//! assert_eq!(snv.end(), 837215);
//!
//! // a reference block treated as a symbolic site
//! let block = VariantSite::from_region(&Region::new("chr1", 837214, 838000)).unwrap();
//! assert!(block.is_non_ref_model());
//! assert!(snv.overlaps(&block));
//!
//! // hand off to the interchange record
//! let record = snv.to_variant();
//! assert_eq!(record.alternate_allele.as_deref(), Some("C"));
//! ```

pub mod errors;
pub mod models;
pub mod traits;

// re-exports
pub use self::errors::VariantSiteError;
pub use self::models::{AltAllele, Region, Variant, VariantSite};
pub use self::traits::GenomicRegion;

/// Constants used throughout the crate.
pub mod consts {
    /// Reference allele placeholder carried by symbolic sites.
    pub const UNKNOWN_BASE: &str = "N";
    /// Text used when rendering a non-ref alternate allele.
    pub const NON_REF_SYMBOL: &str = "<NON_REF>";
}
