//! Exon and exon-map models
//!
//! # Coordinate System
//!
//! All coordinates in this module are **1-based inclusive**:
//!
//! | Field | Basis | Notes |
//! |-------|-------|-------|
//! | `Exon.start`, `Exon.end` | 1-based | Genomic coordinates (inclusive) |
//!
//! An [`ExonMap`] lists the coding exons of a transcript in transcript order.
//! Exon ranges must be well-formed (`start <= end`); that the total length is
//! a codon multiple is the caller's responsibility and is not enforced here.

use serde::{Deserialize, Serialize};

use crate::error::SnptrackError;

/// A coding exon range in genomic coordinates (1-based, inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exon {
    /// Start position (1-based, inclusive)
    pub start: u64,
    /// End position (1-based, inclusive)
    pub end: u64,
}

impl Exon {
    /// Create a new exon range
    #[inline]
    pub const fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Length of the exon in nucleotides
    ///
    /// Only meaningful for well-formed exons (`start <= end`), which
    /// [`ExonMap::new`] guarantees.
    #[inline]
    pub const fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Check whether a genomic position falls inside this exon
    #[inline]
    pub const fn contains(&self, pos: u64) -> bool {
        pos >= self.start && pos <= self.end
    }
}

/// Ordered list of coding exons for a transcript
///
/// The map is immutable after construction; the mapping functions in
/// [`crate::coords`] never modify it.
///
/// # Examples
///
/// ```
/// use snptrack::transcript::{Exon, ExonMap};
///
/// let map = ExonMap::new(vec![Exon::new(1, 10), Exon::new(11, 20)]).unwrap();
/// assert_eq!(map.transcript_length(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExonMap(Vec<Exon>);

impl ExonMap {
    /// Create a new exon map
    ///
    /// Rejects empty maps and exons with `start > end`.
    pub fn new(exons: Vec<Exon>) -> Result<Self, SnptrackError> {
        if exons.is_empty() {
            return Err(SnptrackError::EmptyExonMap);
        }
        for exon in &exons {
            if exon.start > exon.end {
                return Err(SnptrackError::InvalidCoordinates {
                    msg: format!("exon {}-{} has start > end", exon.start, exon.end),
                });
            }
        }
        Ok(Self(exons))
    }

    /// Create an exon map from `(start, end)` pairs
    pub fn from_pairs(pairs: &[(u64, u64)]) -> Result<Self, SnptrackError> {
        Self::new(pairs.iter().map(|&(s, e)| Exon::new(s, e)).collect())
    }

    /// The exons in transcript order
    #[inline]
    pub fn exons(&self) -> &[Exon] {
        &self.0
    }

    /// Number of exons
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no exons (never true for a constructed map)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get an exon by index
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Exon> {
        self.0.get(index)
    }

    /// Total transcript length in nucleotides (sum of exon lengths)
    pub fn transcript_length(&self) -> u64 {
        self.0.iter().map(Exon::len).sum()
    }
}

impl<'a> IntoIterator for &'a ExonMap {
    type Item = &'a Exon;
    type IntoIter = std::slice::Iter<'a, Exon>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exon_len() {
        assert_eq!(Exon::new(1, 10).len(), 10);
        assert_eq!(Exon::new(5, 5).len(), 1);
    }

    #[test]
    fn test_exon_contains() {
        let exon = Exon::new(11, 20);
        assert!(exon.contains(11));
        assert!(exon.contains(20));
        assert!(!exon.contains(10));
        assert!(!exon.contains(21));
    }

    #[test]
    fn test_exon_map_rejects_empty() {
        assert_eq!(ExonMap::new(vec![]), Err(SnptrackError::EmptyExonMap));
    }

    #[test]
    fn test_exon_map_rejects_inverted_range() {
        let result = ExonMap::new(vec![Exon::new(10, 1)]);
        assert!(matches!(
            result,
            Err(SnptrackError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn test_exon_map_transcript_length() {
        let map = ExonMap::from_pairs(&[(1, 10), (21, 30), (41, 45)]).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.transcript_length(), 25);
    }

    #[test]
    fn test_exon_map_single_base_exon() {
        let map = ExonMap::from_pairs(&[(7, 7)]).unwrap();
        assert_eq!(map.transcript_length(), 1);
    }
}
