//! Queries and resolved chromosome coordinates.
//!
//! A [`Query`] asks for the chromosome coordinate corresponding to a transcript coordinate.
//! It is resolved against a [`crate::TranscriptTable`] into a [`ResolvedCoordinate`], which records one of three outcomes:
//!
//! * [`Resolution::Found`]: the transcript is known and the coordinate is within it.
//! * [`Resolution::OutOfRange`]: the transcript is known but the coordinate is negative or past its end.
//! * [`Resolution::UnknownTranscript`]: the transcript is not in the table.
//!
//! In text output, a missing chromosome name is written as [`MISSING_CHROMOSOME`] and a missing coordinate as [`MISSING_COORDINATE`].

use std::fmt::Display;

//-----------------------------------------------------------------------------

/// Chromosome name written for unknown transcripts.
pub const MISSING_CHROMOSOME: &str = "NA";

/// Chromosome coordinate written when the coordinate cannot be resolved.
pub const MISSING_COORDINATE: isize = -1;

//-----------------------------------------------------------------------------

/// A transcript coordinate to be translated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    /// Transcript identifier.
    pub transcript_id: String,
    /// 0-based transcript coordinate. Negative values are always out of range.
    pub transcript_coordinate: isize,
}

impl Query {
    /// Creates a new query.
    pub fn new(transcript_id: &str, transcript_coordinate: isize) -> Self {
        Query {
            transcript_id: transcript_id.to_string(),
            transcript_coordinate,
        }
    }
}

//-----------------------------------------------------------------------------

/// Outcome of resolving a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Chromosome name and coordinate.
    Found(String, usize),
    /// The transcript is aligned to this chromosome, but the coordinate is out of range.
    OutOfRange(String),
    /// The transcript is not in the table.
    UnknownTranscript,
}

/// A query together with its resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedCoordinate {
    /// Transcript identifier from the query.
    pub transcript_id: String,
    /// Transcript coordinate from the query.
    pub transcript_coordinate: isize,
    /// The outcome.
    pub resolution: Resolution,
}

impl ResolvedCoordinate {
    /// Returns the chromosome name, or [`MISSING_CHROMOSOME`] if the transcript is unknown.
    pub fn chromosome_name(&self) -> &str {
        match &self.resolution {
            Resolution::Found(name, _) => name,
            Resolution::OutOfRange(name) => name,
            Resolution::UnknownTranscript => MISSING_CHROMOSOME,
        }
    }

    /// Returns the chromosome coordinate, or [`MISSING_COORDINATE`] if it cannot be resolved.
    pub fn chromosome_coordinate(&self) -> isize {
        match &self.resolution {
            // Chromosome coordinates come from non-negative offsets, so this only fails for absurd inputs.
            Resolution::Found(_, coordinate) => isize::try_from(*coordinate).unwrap_or(MISSING_COORDINATE),
            _ => MISSING_COORDINATE,
        }
    }

    /// Returns `true` if the query was resolved to a chromosome coordinate.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self.resolution, Resolution::Found(_, _))
    }
}

impl Display for ResolvedCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f, "{}\t{}\t{}\t{}",
            self.transcript_id, self.transcript_coordinate,
            self.chromosome_name(), self.chromosome_coordinate()
        )
    }
}

//-----------------------------------------------------------------------------

/// Counts of the outcomes for a batch of queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolutionStats {
    /// Queries resolved to a chromosome coordinate.
    pub found: usize,
    /// Queries with a known transcript but an out-of-range coordinate.
    pub out_of_range: usize,
    /// Queries with an unknown transcript.
    pub unknown: usize,
}

impl ResolutionStats {
    /// Counts the outcomes in the given results.
    pub fn new(results: &[ResolvedCoordinate]) -> Self {
        let mut stats = ResolutionStats::default();
        for result in results.iter() {
            match result.resolution {
                Resolution::Found(_, _) => stats.found += 1,
                Resolution::OutOfRange(_) => stats.out_of_range += 1,
                Resolution::UnknownTranscript => stats.unknown += 1,
            }
        }
        stats
    }

    /// Returns the total number of queries.
    pub fn queries(&self) -> usize {
        self.found + self.out_of_range + self.unknown
    }
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
