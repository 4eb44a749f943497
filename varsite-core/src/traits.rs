/// Anything that occupies a half-open interval `[start, end)` on a named contig.
///
/// Coordinates are 0-based; `end` is exclusive.
pub trait GenomicRegion {
    fn contig(&self) -> &str;

    fn start(&self) -> u64;

    fn end(&self) -> u64;

    /// True when the region covers no bases.
    #[inline]
    fn is_empty(&self) -> bool {
        self.end() <= self.start()
    }

    /// Half-open overlap test against another region.
    ///
    /// Regions on different contigs never overlap, touching regions
    /// (`self.end() == other.start()`) do not overlap, and an empty region
    /// overlaps nothing.
    #[inline]
    fn overlaps_with<R: GenomicRegion + ?Sized>(&self, other: &R) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.contig() == other.contig()
            && self.start() < other.end()
            && self.end() > other.start()
    }
}

impl<T: GenomicRegion + ?Sized> GenomicRegion for &T {
    fn contig(&self) -> &str {
        (**self).contig()
    }
    fn start(&self) -> u64 {
        (**self).start()
    }
    fn end(&self) -> u64 {
        (**self).end()
    }
}
