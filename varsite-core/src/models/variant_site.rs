//! Discovered variant sites.
//!
//! A [`VariantSite`] is the hand-off value between variant discovery and the
//! genotyping/serialization stages. It can be built three ways:
//!
//! - from a [`Variant`] record that carries an alternate allele ([`VariantSite::from_variant`])
//! - from explicit fields ([`VariantSite::new`])
//! - from a bare region, as a symbolic non-ref site ([`VariantSite::from_region`])
//!
//! The end coordinate is never stored. It is always `start + len(reference_allele)`,
//! which makes the site the half-open interval `[start, end)`.

use std::fmt::{self, Display};

use log::debug;

use crate::consts::UNKNOWN_BASE;
use crate::errors::VariantSiteError;
use crate::models::{AltAllele, Region, Variant};
use crate::traits::GenomicRegion;

/// An immutable variant site: contig, 0-based start, reference allele and alternate allele.
///
/// Equality, hashing and ordering are structural. Ordering is by contig, then start,
/// then alleles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariantSite {
    contig: String,
    start: u64,
    reference_allele: String,
    alternate: AltAllele,
}

impl VariantSite {
    ///
    /// Create a site with a known alternate allele.
    ///
    /// # Arguments:
    /// - contig: name of the reference sequence
    /// - start: 0-based start of the reference allele
    /// - reference_allele: reference bases, must be non-empty
    /// - alternate_allele: substituted bases, must be non-empty
    pub fn new(
        contig: impl Into<String>,
        start: u64,
        reference_allele: impl Into<String>,
        alternate_allele: impl Into<String>,
    ) -> Result<Self, VariantSiteError> {
        Self::with_known_alleles(
            contig.into(),
            start,
            reference_allele.into(),
            alternate_allele.into(),
        )
    }

    ///
    /// Create a site from a variant record. The record's `end` is ignored.
    ///
    /// The record must carry an alternate allele; there is no symbolic
    /// counterpart of this path, use [`VariantSite::from_region`] for that.
    pub fn from_variant(variant: &Variant) -> Result<Self, VariantSiteError> {
        Self::from_record_fields(
            variant.contig_name.clone(),
            variant.start,
            variant.reference_allele.clone(),
            variant.alternate_allele.clone(),
        )
    }

    ///
    /// Create a symbolic (non-ref) site at the start of a region.
    ///
    /// Only the region's contig and start are used. The reference allele is the
    /// single unknown-base placeholder, so the site always ends at `start + 1`
    /// whatever the region's own end is. A region starting at `u64::MAX` leaves
    /// no room for that base and is rejected.
    pub fn from_region<R: GenomicRegion + ?Sized>(region: &R) -> Result<Self, VariantSiteError> {
        let contig = region.contig().to_string();
        let start = region.start();
        check_span(&contig, start, UNKNOWN_BASE)?;

        Ok(VariantSite {
            contig,
            start,
            reference_allele: UNKNOWN_BASE.to_string(),
            alternate: AltAllele::NonRef,
        })
    }

    fn from_record_fields(
        contig: String,
        start: u64,
        reference_allele: String,
        alternate_allele: Option<String>,
    ) -> Result<Self, VariantSiteError> {
        match alternate_allele {
            Some(alternate) => Self::with_known_alleles(contig, start, reference_allele, alternate),
            None => {
                debug!(
                    "Rejecting variant record at {}:{} without an alternate allele",
                    contig, start
                );
                Err(VariantSiteError::MissingAlternateAllele { contig, start })
            }
        }
    }

    fn with_known_alleles(
        contig: String,
        start: u64,
        reference_allele: String,
        alternate_allele: String,
    ) -> Result<Self, VariantSiteError> {
        if reference_allele.is_empty() {
            return Err(VariantSiteError::EmptyReferenceAllele { contig, start });
        }
        if alternate_allele.is_empty() {
            return Err(VariantSiteError::EmptyAlternateAllele { contig, start });
        }
        if !reference_allele.is_ascii() || !alternate_allele.is_ascii() {
            return Err(VariantSiteError::NonAsciiAllele { contig, start });
        }
        check_span(&contig, start, &reference_allele)?;

        Ok(VariantSite {
            contig,
            start,
            reference_allele,
            alternate: AltAllele::Known(alternate_allele),
        })
    }

    pub fn contig(&self) -> &str {
        &self.contig
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    /// Exclusive end, `start + len(reference_allele)`.
    ///
    /// Every constructor checks that this fits in a `u64`.
    #[inline]
    pub fn end(&self) -> u64 {
        self.start + self.reference_length()
    }

    pub fn reference_allele(&self) -> &str {
        &self.reference_allele
    }

    /// Number of reference bases. Alleles are ASCII, so this is also the byte length.
    pub fn reference_length(&self) -> u64 {
        self.reference_allele.len() as u64
    }

    pub fn alternate(&self) -> &AltAllele {
        &self.alternate
    }

    /// The alternate allele sequence, `None` for symbolic sites.
    pub fn alternate_allele(&self) -> Option<&str> {
        self.alternate.as_known()
    }

    /// True when no alternate allele is known, i.e. the site is symbolic.
    pub fn is_non_ref_model(&self) -> bool {
        self.alternate.is_non_ref()
    }

    /// Coordinate-only overlap with another site; alleles are not compared.
    #[inline]
    pub fn overlaps(&self, other: &VariantSite) -> bool {
        self.overlaps_with(other)
    }

    /// Half-open overlap with any genomic region.
    #[inline]
    pub fn overlaps_region<R: GenomicRegion + ?Sized>(&self, region: &R) -> bool {
        self.overlaps_with(region)
    }

    ///
    /// Build the interchange record for this site.
    ///
    /// Contig, start, derived end and reference allele are always set. The
    /// alternate allele is set only when the site has one.
    pub fn to_variant(&self) -> Variant {
        Variant {
            contig_name: self.contig.clone(),
            start: self.start,
            end: self.end(),
            reference_allele: self.reference_allele.clone(),
            alternate_allele: self.alternate.as_known().map(str::to_string),
        }
    }

    pub fn to_region(&self) -> Region {
        Region::new(self.contig.clone(), self.start, self.end())
    }
}

/// The half-open interval `[start, start + len(reference))` must be representable.
fn check_span(contig: &str, start: u64, reference_allele: &str) -> Result<(), VariantSiteError> {
    match start.checked_add(reference_allele.len() as u64) {
        Some(_) => Ok(()),
        None => Err(VariantSiteError::CoordinateOverflow {
            contig: contig.to_string(),
            start,
        }),
    }
}

impl GenomicRegion for VariantSite {
    fn contig(&self) -> &str {
        &self.contig
    }

    fn start(&self) -> u64 {
        self.start
    }

    fn end(&self) -> u64 {
        VariantSite::end(self)
    }
}

impl TryFrom<&Variant> for VariantSite {
    type Error = VariantSiteError;

    fn try_from(value: &Variant) -> Result<Self, Self::Error> {
        VariantSite::from_variant(value)
    }
}

impl TryFrom<Variant> for VariantSite {
    type Error = VariantSiteError;

    fn try_from(value: Variant) -> Result<Self, Self::Error> {
        let Variant {
            contig_name,
            start,
            reference_allele,
            alternate_allele,
            ..
        } = value;

        VariantSite::from_record_fields(contig_name, start, reference_allele, alternate_allele)
    }
}

impl From<&VariantSite> for Variant {
    fn from(value: &VariantSite) -> Self {
        value.to_variant()
    }
}

impl From<VariantSite> for Variant {
    fn from(value: VariantSite) -> Self {
        value.to_variant()
    }
}

impl From<&VariantSite> for Region {
    fn from(value: &VariantSite) -> Self {
        value.to_region()
    }
}

impl Display for VariantSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {}>{}",
            self.contig, self.start, self.reference_allele, self.alternate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn site(contig: &str, start: u64, reference: &str, alternate: &str) -> VariantSite {
        VariantSite::new(contig, start, reference, alternate).unwrap()
    }

    #[fixture]
    fn snv() -> VariantSite {
        site("chr1", 837214, "G", "C")
    }

    #[fixture]
    fn symbolic() -> VariantSite {
        VariantSite::from_region(&Region::new("chr1", 100, 500)).unwrap()
    }

    #[rstest]
    fn test_explicit_fields(snv: VariantSite) {
        assert_eq!(snv.contig(), "chr1");
        assert_eq!(snv.start(), 837214);
        assert_eq!(snv.reference_allele(), "G");
        assert_eq!(snv.alternate_allele(), Some("C"));
        assert_eq!(snv.is_non_ref_model(), false);
    }

    #[rstest]
    #[case("G", 837214, 837215)]
    #[case("GATTACA", 100, 107)]
    #[case("AC", 0, 2)]
    fn test_end_is_start_plus_reference_length(
        #[case] reference: &str,
        #[case] start: u64,
        #[case] expected: u64,
    ) {
        let s = site("chr1", start, reference, "T");
        assert_eq!(s.end(), expected);
        assert_eq!(GenomicRegion::end(&s), expected);
    }

    #[rstest]
    fn test_symbolic_site_shape(symbolic: VariantSite) {
        assert_eq!(symbolic.contig(), "chr1");
        assert_eq!(symbolic.start(), 100);
        assert_eq!(symbolic.reference_allele(), UNKNOWN_BASE);
        assert_eq!(symbolic.alternate(), &AltAllele::NonRef);
        assert_eq!(symbolic.alternate_allele(), None);
        assert!(symbolic.is_non_ref_model());
        assert_eq!(symbolic.end(), 101);
    }

    #[rstest]
    fn test_empty_reference_allele_rejected() {
        let err = VariantSite::new("chr1", 10, "", "A").unwrap_err();
        assert_eq!(
            err,
            VariantSiteError::EmptyReferenceAllele {
                contig: "chr1".to_string(),
                start: 10
            }
        );
    }

    #[rstest]
    fn test_empty_alternate_allele_rejected() {
        let err = VariantSite::new("chr1", 10, "A", "").unwrap_err();
        assert_eq!(
            err,
            VariantSiteError::EmptyAlternateAllele {
                contig: "chr1".to_string(),
                start: 10
            }
        );
    }

    fn record(reference: &str, alternate: Option<&str>) -> Variant {
        Variant {
            contig_name: "chr5".to_string(),
            start: 42,
            end: 43,
            reference_allele: reference.to_string(),
            alternate_allele: alternate.map(str::to_string),
        }
    }

    #[rstest]
    #[case(record("", Some("A")), VariantSiteError::EmptyReferenceAllele { contig: "chr5".to_string(), start: 42 })]
    #[case(record("A", Some("")), VariantSiteError::EmptyAlternateAllele { contig: "chr5".to_string(), start: 42 })]
    #[case(record("", Some("")), VariantSiteError::EmptyReferenceAllele { contig: "chr5".to_string(), start: 42 })]
    #[case(record("A", None), VariantSiteError::MissingAlternateAllele { contig: "chr5".to_string(), start: 42 })]
    #[case(record("A", Some("Ä")), VariantSiteError::NonAsciiAllele { contig: "chr5".to_string(), start: 42 })]
    fn test_invalid_record_rejected_by_both_conversions(
        #[case] variant: Variant,
        #[case] expected: VariantSiteError,
    ) {
        assert_eq!(VariantSite::try_from(&variant).unwrap_err(), expected);
        assert_eq!(VariantSite::try_from(variant).unwrap_err(), expected);
    }

    #[rstest]
    #[case("É", "A")]
    #[case("A", "ΔT")]
    fn test_non_ascii_allele_rejected(#[case] reference: &str, #[case] alternate: &str) {
        let err = VariantSite::new("chr1", 10, reference, alternate).unwrap_err();
        assert_eq!(
            err,
            VariantSiteError::NonAsciiAllele {
                contig: "chr1".to_string(),
                start: 10
            }
        );
    }

    #[rstest]
    fn test_site_ending_at_last_coordinate() {
        let s = site("chr1", u64::MAX - 4, "ACGT", "A");
        assert_eq!(s.end(), u64::MAX);
        assert_eq!(s.end() - s.start(), s.reference_length());
        assert!(s.overlaps(&s));
    }

    #[rstest]
    #[case(u64::MAX - 3)]
    #[case(u64::MAX - 1)]
    #[case(u64::MAX)]
    fn test_site_past_last_coordinate_rejected(#[case] start: u64) {
        let err = VariantSite::new("chr1", start, "ACGTA", "A").unwrap_err();
        assert_eq!(
            err,
            VariantSiteError::CoordinateOverflow {
                contig: "chr1".to_string(),
                start
            }
        );
    }

    #[rstest]
    fn test_symbolic_site_at_last_coordinate() {
        let last = VariantSite::from_region(&Region::new("chr1", u64::MAX - 1, u64::MAX)).unwrap();
        assert_eq!(last.end(), u64::MAX);
        assert!(last.overlaps(&last));

        let err = VariantSite::from_region(&Region::new("chr1", u64::MAX, u64::MAX)).unwrap_err();
        assert_eq!(
            err,
            VariantSiteError::CoordinateOverflow {
                contig: "chr1".to_string(),
                start: u64::MAX
            }
        );
    }

    #[rstest]
    #[case(site("chr1", 100, "A", "T"), site("chr1", 100, "A", "G"), true)]
    #[case(site("chr1", 100, "ACGT", "A"), site("chr1", 103, "T", "G"), true)]
    #[case(site("chr1", 100, "ACGT", "A"), site("chr1", 104, "T", "G"), false)]
    #[case(site("chr1", 100, "A", "T"), site("chr1", 101, "A", "T"), false)]
    #[case(site("chr1", 100, "A", "T"), site("chr2", 100, "A", "T"), false)]
    #[case(site("chr1", 100, "A", "T"), site("CHR1", 100, "A", "T"), false)]
    #[case(site("chr1", 99, "AAA", "T"), VariantSite::from_region(&Region::new("chr1", 100, 500)).unwrap(), true)]
    #[case(site("chr1", 101, "A", "T"), VariantSite::from_region(&Region::new("chr1", 100, 500)).unwrap(), false)]
    fn test_overlaps_is_symmetric(
        #[case] a: VariantSite,
        #[case] b: VariantSite,
        #[case] expected: bool,
    ) {
        assert_eq!(a.overlaps(&b), expected);
        assert_eq!(b.overlaps(&a), expected);
    }

    #[rstest]
    fn test_overlap_ignores_alleles() {
        let a = site("chr1", 837214, "G", "C");
        let b = site("chr1", 837214, "G", "T");
        assert_ne!(a, b);
        assert!(a.overlaps(&b));
    }

    #[rstest]
    #[case(Region::new("chr1", 837000, 837300), true)]
    #[case(Region::new("chr1", 837214, 837215), true)]
    #[case(Region::new("chr1", 837215, 837300), false)]
    #[case(Region::new("chr1", 837000, 837214), false)]
    #[case(Region::new("chr1", 837214, 837214), false)]
    #[case(Region::new("chr2", 837000, 837300), false)]
    fn test_overlaps_region(snv: VariantSite, #[case] region: Region, #[case] expected: bool) {
        assert_eq!(snv.overlaps_region(&region), expected);
    }

    #[rstest]
    fn test_to_variant_sets_alternate_when_known(snv: VariantSite) {
        let variant = snv.to_variant();
        assert_eq!(
            variant,
            Variant {
                contig_name: "chr1".to_string(),
                start: 837214,
                end: 837215,
                reference_allele: "G".to_string(),
                alternate_allele: Some("C".to_string()),
            }
        );
    }

    #[rstest]
    fn test_to_variant_leaves_alternate_unset_for_symbolic(symbolic: VariantSite) {
        let variant = Variant::from(&symbolic);
        assert_eq!(variant.alternate_allele, None);
        assert_eq!(variant.reference_allele, UNKNOWN_BASE);
        assert_eq!(variant.start, 100);
        assert_eq!(variant.end, 101);
    }

    #[rstest]
    fn test_from_variant_ignores_record_end() {
        let variant = Variant {
            contig_name: "chr3".to_string(),
            start: 50,
            end: 9999,
            reference_allele: "CA".to_string(),
            alternate_allele: Some("C".to_string()),
        };
        let s = VariantSite::from_variant(&variant).unwrap();
        assert_eq!(s.end(), 52);
    }

    #[rstest]
    fn test_from_variant_without_alternate_fails(symbolic: VariantSite) {
        let variant = symbolic.to_variant();
        let err = VariantSite::try_from(variant).unwrap_err();
        assert_eq!(
            err,
            VariantSiteError::MissingAlternateAllele {
                contig: "chr1".to_string(),
                start: 100
            }
        );
    }

    #[rstest]
    fn test_to_region(snv: VariantSite) {
        assert_eq!(snv.to_region(), Region::new("chr1", 837214, 837215));
    }

    #[rstest]
    fn test_display(snv: VariantSite, symbolic: VariantSite) {
        assert_eq!(snv.to_string(), "chr1:837214 G>C");
        assert_eq!(symbolic.to_string(), "chr1:100 N><NON_REF>");
    }

    #[rstest]
    fn test_ordering_is_by_contig_then_start() {
        let mut sites = vec![
            site("chr2", 5, "A", "T"),
            site("chr1", 10, "A", "T"),
            site("chr1", 5, "C", "T"),
            site("chr1", 5, "A", "T"),
        ];
        sites.sort();
        let keys: Vec<(&str, u64, &str)> = sites
            .iter()
            .map(|s| (s.contig(), s.start(), s.reference_allele()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("chr1", 5, "A"),
                ("chr1", 5, "C"),
                ("chr1", 10, "A"),
                ("chr2", 5, "A")
            ]
        );
    }
}
