//! snptrack: exon-aware coordinate mapping and variant track classification
//!
//! Core transformation logic for sequence-analysis and genome-browser track
//! rendering: mapping amino-acid residues to the genomic nucleotide positions
//! that encode them, classifying annotated variants into display color
//! buckets with toggleable impact-tier visibility, and the gradient color
//! math backing the buckets.
//!
//! All operations are pure, synchronous, and allocation-per-call; the crate
//! owns no shared mutable state and is safe for concurrent read-only use.
//!
//! # Example
//!
//! ```
//! use snptrack::{classify, map_aa_to_nt, AaPos, ColorBucket, ExonMap, FeatureAnnotation};
//!
//! // Map residue 4 across an exon junction
//! let exons = ExonMap::from_pairs(&[(1, 10), (11, 20)]).unwrap();
//! let codon = map_aa_to_nt(&exons, AaPos::new(4).unwrap());
//! assert_eq!(codon.nt_positions, vec![10, 11, 12]);
//! assert_eq!(codon.exon_indices, vec![0, 1]);
//!
//! // Classify an annotated variant
//! let feature = FeatureAnnotation::new().with_effect("G|missense_variant|HIGH|BRCA1");
//! assert_eq!(classify(&feature).color_bucket, ColorBucket::High);
//! ```

pub mod annotation;
pub mod classify;
pub mod coords;
pub mod error;
pub mod gradient;
pub mod track;
pub mod transcript;

// Re-export commonly used types
pub use annotation::{FeatureAnnotation, FilterState, Impact, RawValue};
pub use classify::{
    classify, glyph_for, is_hidden_by_impact, is_visible, Classification, ColorBucket, Glyph,
    ImpactFilter, TrackFilterConfig,
};
pub use coords::{map_aa_segment, map_aa_to_nt, AaPos, CodonMapping, SegmentMapping};
pub use error::SnptrackError;
pub use gradient::{interpolate, step_position, ColorStop, GradientScale, Rgb};
pub use track::{RenderStyle, TrackStyle};
pub use transcript::{Exon, ExonMap};

/// Result type alias for snptrack operations
pub type Result<T> = std::result::Result<T, SnptrackError>;
