//! Overlap joins for discovered variant sites.
//!
//! Candidate sites from a discovery pass are usually joined against reference
//! regions (targets, reference-confidence blocks) or against each other. This
//! crate indexes sites per contig so those joins don't have to compare every
//! pair. Every hit is decided by the same half-open predicate as
//! [`VariantSite::overlaps_region`](varsite_core::VariantSite::overlaps_region).
//!
//! ## Quick Start
//!
//! ```rust
//! use varsite_core::{Region, VariantSite};
//! use varsite_overlaprs::{IntoSiteIndex, SiteIndex};
//!
//! let sites = vec![
//!     VariantSite::new("chr1", 100, "A", "T").unwrap(),
//!     VariantSite::new("chr1", 150, "GAT", "G").unwrap(),
//!     VariantSite::new("chr2", 100, "C", "A").unwrap(),
//! ];
//!
//! let index: SiteIndex = sites.into_site_index();
//!
//! let hits = index.find(&Region::new("chr1", 120, 152));
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].start(), 150);
//! ```

/// Per-contig sorted site index.
///
/// See [`SiteIndex`] for details.
pub mod site_index;

// re-exports
pub use self::site_index::{IntoSiteIndex, IterFindOverlaps, SiteIndex};
