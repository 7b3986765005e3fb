//! CIGAR strings describing the alignment of a transcript to a chromosome.
//!
//! A CIGAR string is a concatenation of tokens, each of which is a count followed by an operation symbol.
//! The count is a positive decimal integer without leading zeros.
//! The supported operations are the nine SAM operations `MIDNSHP=X`; see [`OpKind`].
//!
//! Use [`is_valid`] to check the syntax of a CIGAR string and [`parse`] to tokenize it into [`Operation`] objects.
//! Both functions work on bytes rather than characters, as the grammar is pure ASCII.
//!
//! # Examples
//!
//! ```
//! use tx_coords::cigar::{self, OpKind, Operation};
//!
//! let encoding = "8M7D6M";
//! assert!(cigar::is_valid(encoding));
//! let ops = cigar::parse(encoding).unwrap();
//! assert_eq!(ops, vec![
//!     Operation::new(8, OpKind::AlignmentMatch),
//!     Operation::new(7, OpKind::Deletion),
//!     Operation::new(6, OpKind::AlignmentMatch),
//! ]);
//! assert_eq!(cigar::transcript_len(&ops), Some(14));
//! assert_eq!(cigar::chromosome_len(&ops), Some(21));
//! assert_eq!(cigar::to_string(&ops), encoding);
//! ```

use std::fmt::Display;


//-----------------------------------------------------------------------------

/// Operation types in a CIGAR string.
///
/// Each operation may consume transcript coordinates, chromosome coordinates, both, or neither.
/// See [`OpKind::consumes_transcript`] and [`OpKind::consumes_chromosome`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// `M`: Aligned base that may be a match or a mismatch.
    AlignmentMatch,
    /// `I`: Base present in the transcript but not in the chromosome.
    Insertion,
    /// `D`: Base present in the chromosome but not in the transcript.
    Deletion,
    /// `N`: Skipped chromosome region, such as an intron.
    Skip,
    /// `S`: Transcript base that is present in the sequence but not aligned.
    SoftClip,
    /// `H`: Transcript base that has been removed from the sequence.
    HardClip,
    /// `P`: Silent deletion from a padded reference.
    Padding,
    /// `=`: Aligned base that matches the chromosome.
    SequenceMatch,
    /// `X`: Aligned base that does not match the chromosome.
    SequenceMismatch,
}

impl OpKind {
    /// Number of supported operation types.
    pub const NUM_TYPES: usize = 9;

    /// Operation symbols in the order of [`OpKind::ALL`].
    pub const SYMBOLS: &'static [u8] = b"MIDNSHP=X";

    /// All operation types in the order of [`OpKind::SYMBOLS`].
    pub const ALL: [OpKind; Self::NUM_TYPES] = [
        OpKind::AlignmentMatch, OpKind::Insertion, OpKind::Deletion,
        OpKind::Skip, OpKind::SoftClip, OpKind::HardClip,
        OpKind::Padding, OpKind::SequenceMatch, OpKind::SequenceMismatch,
    ];

    /// Returns the operation type corresponding to the symbol, or [`None`] if the symbol is not supported.
    pub fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            b'M' => Some(Self::AlignmentMatch),
            b'I' => Some(Self::Insertion),
            b'D' => Some(Self::Deletion),
            b'N' => Some(Self::Skip),
            b'S' => Some(Self::SoftClip),
            b'H' => Some(Self::HardClip),
            b'P' => Some(Self::Padding),
            b'=' => Some(Self::SequenceMatch),
            b'X' => Some(Self::SequenceMismatch),
            _ => None,
        }
    }

    /// Returns the symbol used for the operation type in CIGAR strings.
    pub fn symbol(&self) -> u8 {
        match self {
            Self::AlignmentMatch => b'M',
            Self::Insertion => b'I',
            Self::Deletion => b'D',
            Self::Skip => b'N',
            Self::SoftClip => b'S',
            Self::HardClip => b'H',
            Self::Padding => b'P',
            Self::SequenceMatch => b'=',
            Self::SequenceMismatch => b'X',
        }
    }

    /// Returns `true` if each unit of the operation corresponds to a transcript coordinate.
    #[inline]
    pub fn consumes_transcript(&self) -> bool {
        matches!(
            self,
            Self::AlignmentMatch | Self::Insertion | Self::SoftClip | Self::SequenceMatch | Self::SequenceMismatch
        )
    }

    /// Returns `true` if each unit of the operation advances the chromosome coordinate.
    #[inline]
    pub fn consumes_chromosome(&self) -> bool {
        matches!(
            self,
            Self::AlignmentMatch | Self::Deletion | Self::Skip | Self::SequenceMatch | Self::SequenceMismatch
        )
    }
}

impl Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol() as char)
    }
}

//-----------------------------------------------------------------------------

/// A single token in a CIGAR string: an operation type repeated `count` times.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operation {
    /// Number of repetitions; always at least 1 in a parsed CIGAR string.
    pub count: usize,
    /// Operation type.
    pub kind: OpKind,
}

impl Operation {
    /// Creates a new operation.
    pub fn new(count: usize, kind: OpKind) -> Self {
        Operation { count, kind }
    }

    /// Returns the number of transcript coordinates covered by the operation.
    #[inline]
    pub fn transcript_len(&self) -> usize {
        if self.kind.consumes_transcript() { self.count } else { 0 }
    }

    /// Returns the number of chromosome coordinates covered by the operation.
    #[inline]
    pub fn chromosome_len(&self) -> usize {
        if self.kind.consumes_chromosome() { self.count } else { 0 }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.kind)
    }
}

//-----------------------------------------------------------------------------

/// Returns `true` if the string is a syntactically valid CIGAR string.
///
/// A valid string consists of one or more tokens, each of which is a decimal count with no leading zeros followed by a symbol in `MIDNSHP=X`.
/// Empty strings, zero counts, missing counts or symbols, lowercase symbols, and separators are all invalid.
/// Validity does not depend on the magnitude of the counts.
///
/// # Examples
///
/// ```
/// use tx_coords::cigar;
///
/// assert!(cigar::is_valid("3M1I3M1D5M"));
/// assert!(!cigar::is_valid("0M"));
/// assert!(!cigar::is_valid("10"));
/// assert!(!cigar::is_valid("3m"));
/// ```
pub fn is_valid(cigar: &str) -> bool {
    let bytes = cigar.as_bytes();
    if bytes.is_empty() {
        return false;
    }

    let mut offset = 0;
    while offset < bytes.len() {
        // Count: a nonzero digit followed by any digits.
        if !matches!(bytes[offset], b'1'..=b'9') {
            return false;
        }
        offset += 1;
        while offset < bytes.len() && bytes[offset].is_ascii_digit() {
            offset += 1;
        }
        // Exactly one operation symbol.
        if offset >= bytes.len() || OpKind::from_symbol(bytes[offset]).is_none() {
            return false;
        }
        offset += 1;
    }

    true
}

/// Parses a CIGAR string into a vector of operations in left-to-right order.
///
/// Returns an error if the string is not valid (see [`is_valid`]) or if a count does not fit in [`usize`].
pub fn parse(cigar: &str) -> Result<Vec<Operation>, String> {
    let bytes = cigar.as_bytes();
    if bytes.is_empty() {
        return Err(String::from("Empty CIGAR string"));
    }

    let mut result: Vec<Operation> = Vec::new();
    let mut count: usize = 0;
    let mut has_count = false;
    for (offset, &byte) in bytes.iter().enumerate() {
        if byte.is_ascii_digit() {
            if byte == b'0' && !has_count {
                return Err(format!("Invalid count at offset {} in CIGAR string {}", offset, cigar));
            }
            let digit = (byte - b'0') as usize;
            count = count.checked_mul(10).and_then(|x| x.checked_add(digit)).ok_or(
                format!("Count too large at offset {} in CIGAR string {}", offset, cigar)
            )?;
            has_count = true;
            continue;
        }
        let kind = OpKind::from_symbol(byte).ok_or(
            format!("Invalid operation {} at offset {} in CIGAR string {}", byte as char, offset, cigar)
        )?;
        if !has_count {
            return Err(format!("Missing count before {} at offset {} in CIGAR string {}", byte as char, offset, cigar));
        }
        result.push(Operation::new(count, kind));
        count = 0;
        has_count = false;
    }
    if has_count {
        return Err(format!("Missing operation at the end of CIGAR string {}", cigar));
    }

    Ok(result)
}

/// Returns the total number of transcript coordinates covered by the operations.
///
/// Returns [`None`] if the total does not fit in [`usize`].
pub fn transcript_len(ops: &[Operation]) -> Option<usize> {
    ops.iter().try_fold(0usize, |total, op| total.checked_add(op.transcript_len()))
}

/// Returns the total number of chromosome coordinates covered by the operations.
///
/// Returns [`None`] if the total does not fit in [`usize`].
pub fn chromosome_len(ops: &[Operation]) -> Option<usize> {
    ops.iter().try_fold(0usize, |total, op| total.checked_add(op.chromosome_len()))
}

/// Writes the operations as a CIGAR string.
pub fn to_string(ops: &[Operation]) -> String {
    ops.iter().map(|op| op.to_string()).collect()
}

//-----------------------------------------------------------------------------
