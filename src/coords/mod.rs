//! Amino-acid to nucleotide coordinate mapping
//!
//! # Coordinate System
//!
//! | Position Type | Basis | Notes |
//! |---------------|-------|-------|
//! | [`AaPos`] | 1-based | Amino acid residue index |
//! | Transcript NT | 1-based | Residue 1 covers transcript NT 1-3 |
//! | Genomic NT | 1-based | Rebased per exon via the exon map |
//!
//! The central operation is [`map_aa_to_nt`], which walks an [`ExonMap`] and
//! returns the genomic positions of the codon encoding a residue, together
//! with the indices of the exon(s) it spans. A codon that straddles an
//! exon junction yields two exon indices; a codon that falls outside the
//! map's coverage yields fewer than three positions. The short result is a
//! valid outcome, not an error - callers check [`CodonMapping::is_complete`].

use serde::{Deserialize, Serialize};

use crate::error::SnptrackError;
use crate::transcript::ExonMap;

/// A 1-based amino-acid residue position
///
/// # Invariant
///
/// Position must be >= 1. Position 0 is rejected at construction.
///
/// # Examples
///
/// ```
/// use snptrack::coords::AaPos;
///
/// let pos = AaPos::new(4).unwrap();
/// assert_eq!(pos.value(), 4);
/// assert!(AaPos::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AaPos(u64);

impl AaPos {
    /// Create a new residue position, rejecting 0
    pub fn new(pos: u64) -> Result<Self, SnptrackError> {
        if pos == 0 {
            return Err(SnptrackError::InvalidCoordinates {
                msg: "amino-acid position must be >= 1".to_string(),
            });
        }
        Ok(Self(pos))
    }

    /// Get the raw value
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for AaPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transcript-relative position of the first NT of a residue's codon
///
/// Residue 1 covers transcript NT 1-3, residue 2 covers NT 4-6, etc.
#[inline]
pub const fn codon_start(aa: AaPos) -> u64 {
    3 * aa.value() - 2
}

/// Get the codon frame (1, 2, or 3) for a transcript NT position
pub const fn codon_frame(nt_pos: u64) -> u8 {
    match (nt_pos - 1) % 3 {
        0 => 1,
        1 => 2,
        _ => 3,
    }
}

/// Genomic positions of the codon encoding one residue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodonMapping {
    /// Genomic NT positions of the codon, in transcript order
    ///
    /// Length 3 when the exon map fully covers the codon; shorter when the
    /// codon lies partly or wholly outside the map's coverage.
    pub nt_positions: Vec<u64>,
    /// Indices of the exons spanned by the codon, deduplicated, in order of
    /// first appearance
    pub exon_indices: Vec<usize>,
}

impl CodonMapping {
    /// Whether all three codon positions were resolved
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.nt_positions.len() == 3
    }

    /// Whether the codon straddles an exon junction
    #[inline]
    pub fn spans_junction(&self) -> bool {
        self.exon_indices.len() > 1
    }
}

/// Map an amino-acid residue to the genomic NT positions encoding it
///
/// Walks the exon list in transcript order, maintaining the transcript-space
/// start of each exon, and rebases every matching transcript position into
/// genomic space (`genomic = tx_pos - exon_tx_start + exon.start`).
/// Accumulation stops once three positions have been collected.
///
/// The exon map is not modified. Residues whose codon starts beyond the
/// transcript's coverage yield a short (possibly empty) mapping.
///
/// # Examples
///
/// ```
/// use snptrack::coords::{map_aa_to_nt, AaPos};
/// use snptrack::transcript::ExonMap;
///
/// // Codon for residue 4 (transcript NT 10-12) straddles the exon junction.
/// let map = ExonMap::from_pairs(&[(1, 10), (11, 20)]).unwrap();
/// let mapping = map_aa_to_nt(&map, AaPos::new(4).unwrap());
/// assert_eq!(mapping.nt_positions, vec![10, 11, 12]);
/// assert_eq!(mapping.exon_indices, vec![0, 1]);
/// ```
pub fn map_aa_to_nt(exon_map: &ExonMap, aa: AaPos) -> CodonMapping {
    let mut nt_positions = Vec::with_capacity(3);
    let mut exon_indices: Vec<usize> = Vec::new();

    // Transcript-relative position of the first NT in this codon
    let mut nt_position = codon_start(aa);

    // Transcript-space start of the current exon
    let mut start_nt: u64 = 1;

    for (index, exon) in exon_map.exons().iter().enumerate() {
        let end_nt = start_nt + exon.len() - 1;

        while nt_position >= start_nt && nt_position <= end_nt {
            // Rebase the transcript position into this exon's genomic range
            nt_positions.push(nt_position - start_nt + exon.start);
            if !exon_indices.contains(&index) {
                exon_indices.push(index);
            }
            if nt_positions.len() == 3 {
                break;
            }
            nt_position += 1;
        }

        if nt_positions.len() == 3 {
            break;
        }
        start_nt += exon.len();
    }

    CodonMapping {
        nt_positions,
        exon_indices,
    }
}

/// Genomic mapping of a contiguous amino-acid segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentMapping {
    /// First residue of the segment (1-based)
    pub aa_start: u64,
    /// Last residue of the segment (1-based, inclusive)
    pub aa_stop: u64,
    /// Genomic position of the first NT of the first codon
    pub nt_start: u64,
    /// Genomic position of the last NT of the last codon
    pub nt_stop: u64,
    /// Genomic sub-ranges of the segment, one per spanned exon
    pub borders: Vec<(u64, u64)>,
    /// Indices of the exons spanned by the segment, in order of first appearance
    pub exons: Vec<usize>,
    /// Per-residue codon mappings, in residue order
    pub codons: Vec<CodonMapping>,
}

/// Map a contiguous residue range to its genomic span and per-exon borders
///
/// Returns `None` when `aa_stop <= aa_start` or when either boundary codon is
/// not fully covered by the exon map. Interior residues with partial coverage
/// are carried through unchanged in `codons`.
pub fn map_aa_segment(
    exon_map: &ExonMap,
    aa_start: AaPos,
    aa_stop: AaPos,
) -> Option<SegmentMapping> {
    if aa_stop <= aa_start {
        return None;
    }

    let mut codons = Vec::with_capacity((aa_stop.value() - aa_start.value() + 1) as usize);
    let mut exons: Vec<usize> = Vec::new();
    for pos in aa_start.value()..=aa_stop.value() {
        // pos >= aa_start.value() >= 1, so the constructor cannot fail
        let aa = AaPos::new(pos).ok()?;
        let codon = map_aa_to_nt(exon_map, aa);
        for &index in &codon.exon_indices {
            if !exons.contains(&index) {
                exons.push(index);
            }
        }
        codons.push(codon);
    }

    let first = codons.first()?;
    let last = codons.last()?;
    if !first.is_complete() || !last.is_complete() {
        return None;
    }
    let nt_start = first.nt_positions[0];
    let nt_stop = last.nt_positions[2];

    let mut borders = Vec::with_capacity(exons.len());
    if exons.len() == 1 {
        borders.push((nt_start, nt_stop));
    } else {
        for (i, &exon_index) in exons.iter().enumerate() {
            let exon = exon_map.get(exon_index)?;
            if i == 0 {
                borders.push((nt_start, exon.end));
            } else if i == exons.len() - 1 {
                borders.push((exon.start, nt_stop));
            } else {
                borders.push((exon.start, exon.end));
            }
        }
    }

    Some(SegmentMapping {
        aa_start: aa_start.value(),
        aa_stop: aa_stop.value(),
        nt_start,
        nt_stop,
        borders,
        exons,
        codons,
    })
}
