//! Decoded mapping from transcript coordinates to chromosome coordinates.

use crate::cigar::{self, Operation};

use std::ops::{Index, Range};

#[cfg(test)]
mod tests;

//-----------------------------------------------------------------------------

/// A dense map from transcript coordinates to chromosome coordinates.
///
/// Value `i` is the chromosome coordinate corresponding to transcript coordinate `i`.
/// The map is built from a CIGAR string and the chromosome coordinate aligned to transcript coordinate 0.
/// Each unit of an operation that consumes the transcript adds an entry, and each unit of an operation that consumes the chromosome advances the chromosome coordinate after that.
/// As a result:
///
/// * Insertions and soft clips repeat the current chromosome coordinate.
/// * Deletions and skips advance the chromosome coordinate without adding entries.
/// * Hard clips and padding have no effect.
///
/// # Examples
///
/// ```
/// use tx_coords::IndexMap;
///
/// let map = IndexMap::build(5, "3M1I3M1D5M").unwrap();
/// assert_eq!(map.as_slice(), &[5, 6, 7, 8, 8, 9, 10, 12, 13, 14, 15, 16]);
/// assert_eq!(map.get(4), Some(8));
/// assert_eq!(map.get(12), None);
/// assert_eq!(map.chromosome_interval(), 5..17);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexMap {
    values: Vec<usize>,
    // Chromosome interval from the start offset to the final cursor position.
    interval: Range<usize>,
}

impl IndexMap {
    /// Decodes a CIGAR string starting from chromosome coordinate `start_offset`.
    ///
    /// The string should be validated with [`cigar::is_valid`] first.
    /// Returns an error if the string cannot be decoded.
    pub fn build(start_offset: usize, encoding: &str) -> Result<Self, String> {
        let ops = cigar::parse(encoding)?;
        Self::from_operations(start_offset, &ops)
    }

    /// Decodes a sequence of operations starting from chromosome coordinate `start_offset`.
    ///
    /// Returns an error if a chromosome coordinate does not fit in [`usize`] or the map cannot be allocated.
    pub fn from_operations(start_offset: usize, ops: &[Operation]) -> Result<Self, String> {
        let len = cigar::transcript_len(ops).ok_or(
            String::from("Transcript length does not fit in usize")
        )?;
        let mut values: Vec<usize> = Vec::new();
        values.try_reserve_exact(len).map_err(|x| {
            format!("Cannot allocate an index map of length {}: {}", len, x)
        })?;

        let mut cursor = start_offset;
        for op in ops.iter() {
            // The cursor must be able to advance past the last chromosome base of the run.
            let end = cursor.checked_add(op.chromosome_len()).ok_or(
                format!("Chromosome coordinate overflow at {} after position {}", op, cursor)
            )?;
            if op.kind.consumes_transcript() {
                if op.kind.consumes_chromosome() {
                    values.extend(cursor..end);
                } else {
                    values.resize(values.len() + op.count, cursor);
                }
            }
            cursor = end;
        }

        Ok(IndexMap {
            values,
            interval: start_offset..cursor,
        })
    }

    /// Returns the number of transcript coordinates in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the chromosome coordinate for the given transcript coordinate.
    ///
    /// Returns [`None`] if the coordinate is negative or past the end of the transcript.
    #[inline]
    pub fn get(&self, transcript_coordinate: isize) -> Option<usize> {
        let offset = usize::try_from(transcript_coordinate).ok()?;
        self.values.get(offset).copied()
    }

    /// Returns the map as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.values
    }

    /// Returns the half-open chromosome interval covered by the alignment.
    ///
    /// The interval starts at the start offset and ends after the last chromosome coordinate consumed by the alignment.
    #[inline]
    pub fn chromosome_interval(&self) -> Range<usize> {
        self.interval.clone()
    }
}

impl Index<usize> for IndexMap {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

//-----------------------------------------------------------------------------
