pub mod allele;
pub mod region;
pub mod variant;
pub mod variant_site;

// re-export for cleaner imports
pub use self::allele::AltAllele;
pub use self::region::Region;
pub use self::variant::Variant;
pub use self::variant_site::VariantSite;
