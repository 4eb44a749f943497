//! Genome-wide index of variant sites for overlap queries and joins.
//!
//! Sites are grouped by contig and sorted by start. Alongside each contig the
//! index keeps the longest reference span seen on it, which bounds how far
//! left of a query a still-overlapping site can start.
//!
//! # Examples
//!
//! ```
//! use varsite_core::{Region, VariantSite};
//! use varsite_overlaprs::SiteIndex;
//!
//! let index = SiteIndex::build(vec![
//!     VariantSite::new("chr1", 837214, "G", "C").unwrap(),
//!     VariantSite::new("chr1", 900000, "T", "A").unwrap(),
//! ]);
//!
//! let targets = vec![
//!     Region::new("chr1", 837000, 838000),
//!     Region::new("chr2", 0, 1000),
//! ];
//!
//! for (target, site) in index.find_overlaps_iter(&targets) {
//!     println!("{} overlaps {}", site, target);
//! }
//! ```

use std::collections::HashMap;

use log::debug;
use varsite_core::{GenomicRegion, VariantSite};

/// Sites on a single contig, sorted by start.
#[derive(Debug, Clone, Default)]
struct ContigSites {
    sites: Vec<VariantSite>,
    max_span: u64,
}

impl ContigSites {
    /// Sites that may overlap `region`; callers still apply the overlap test.
    fn candidates<R>(&self, region: &R) -> std::slice::Iter<'_, VariantSite>
    where
        R: GenomicRegion + ?Sized,
    {
        // sites starting at or before region.start - max_span end before the region
        let lo = self
            .sites
            .partition_point(|s| s.start().saturating_add(self.max_span) <= region.start());
        let hi = self.sites.partition_point(|s| s.start() < region.end());

        self.sites[lo..hi.max(lo)].iter()
    }
}

/// An immutable, genome-wide index over variant sites.
#[derive(Debug, Clone, Default)]
pub struct SiteIndex {
    contigs: HashMap<String, ContigSites>,
    len: usize,
}

impl SiteIndex {
    /// Build an index from any collection of sites.
    pub fn build<I>(sites: I) -> Self
    where
        I: IntoIterator<Item = VariantSite>,
    {
        let mut contigs: HashMap<String, ContigSites> = HashMap::new();
        let mut len = 0;

        for site in sites {
            let entry = contigs.entry(site.contig().to_string()).or_default();
            entry.max_span = entry.max_span.max(site.reference_length());
            entry.sites.push(site);
            len += 1;
        }

        for entry in contigs.values_mut() {
            entry.sites.sort();
        }

        debug!(
            "Indexed {} variant sites across {} contigs",
            len,
            contigs.len()
        );

        SiteIndex { contigs, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Contig names present in the index, in no particular order.
    pub fn contigs(&self) -> impl Iterator<Item = &str> {
        self.contigs.keys().map(String::as_str)
    }

    /// Iterate over the sites overlapping `region`, in start order.
    ///
    /// `region` may be any [`GenomicRegion`], including another [`VariantSite`].
    pub fn find_iter<'a, 'r, R>(
        &'a self,
        region: &'r R,
    ) -> Box<dyn Iterator<Item = &'a VariantSite> + 'r>
    where
        R: GenomicRegion + ?Sized,
        'a: 'r,
    {
        match self.contigs.get(region.contig()) {
            Some(contig_sites) => Box::new(
                contig_sites
                    .candidates(region)
                    .filter(move |s| s.overlaps_region(region)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Collect all sites overlapping `region`. Prefer [`SiteIndex::find_iter`]
    /// when the hits are consumed once.
    pub fn find<R>(&self, region: &R) -> Vec<&VariantSite>
    where
        R: GenomicRegion + ?Sized,
    {
        self.find_iter(region).collect()
    }

    /// Join a slice of query regions against the index.
    ///
    /// Yields `(query, site)` pairs, queries in input order and sites in start
    /// order within each query.
    pub fn find_overlaps_iter<'a, 'b, R>(&'a self, queries: &'b [R]) -> IterFindOverlaps<'a, 'b, R>
    where
        R: GenomicRegion,
    {
        IterFindOverlaps {
            index: self,
            queries,
            query_idx: 0,
            current: None,
        }
    }

    /// Collect the join into a Vec. You're almost always better off using
    /// the iterator form `find_overlaps_iter`.
    pub fn find_overlaps<'a, 'b, R>(&'a self, queries: &'b [R]) -> Vec<(&'b R, &'a VariantSite)>
    where
        R: GenomicRegion,
    {
        self.find_overlaps_iter(queries).collect()
    }
}

/// An iterator over `(query, site)` overlap pairs.
///
/// Created by [`SiteIndex::find_overlaps_iter`].
pub struct IterFindOverlaps<'a, 'b, R>
where
    R: GenomicRegion,
{
    index: &'a SiteIndex,
    queries: &'b [R],
    query_idx: usize,
    current: Option<(&'b R, std::slice::Iter<'a, VariantSite>)>,
}

impl<'a, 'b, R> Iterator for IterFindOverlaps<'a, 'b, R>
where
    R: GenomicRegion,
{
    type Item = (&'b R, &'a VariantSite);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((query, candidates)) = self.current.as_mut() {
                let query: &'b R = *query;
                if let Some(site) = candidates.find(|s| s.overlaps_region(query)) {
                    return Some((query, site));
                }
            }

            // current query exhausted, move to the next one
            let query = self.queries.get(self.query_idx)?;
            self.query_idx += 1;

            let index: &'a SiteIndex = self.index;
            self.current = index
                .contigs
                .get(query.contig())
                .map(|contig_sites| (query, contig_sites.candidates(query)));
        }
    }
}

/// Convert a collection of sites into a [`SiteIndex`].
pub trait IntoSiteIndex {
    fn into_site_index(self) -> SiteIndex;
}

impl IntoSiteIndex for Vec<VariantSite> {
    fn into_site_index(self) -> SiteIndex {
        SiteIndex::build(self)
    }
}
