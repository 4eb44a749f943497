use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantSiteError {
    #[error("Variant record at {contig}:{start} has no alternate allele")]
    MissingAlternateAllele { contig: String, start: u64 },

    #[error("Empty reference allele at {contig}:{start}")]
    EmptyReferenceAllele { contig: String, start: u64 },

    #[error("Empty alternate allele at {contig}:{start}")]
    EmptyAlternateAllele { contig: String, start: u64 },

    #[error("Non-ASCII allele at {contig}:{start}")]
    NonAsciiAllele { contig: String, start: u64 },

    #[error("Site at {contig}:{start} ends past the last representable coordinate")]
    CoordinateOverflow { contig: String, start: u64 },
}
