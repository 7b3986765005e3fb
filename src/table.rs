//! Transcript table: alignments of transcripts to chromosomes.
//!
//! The table is built from [`AlignmentRecord`] objects in a single batch.
//! All CIGAR strings are validated before any of them is decoded, and a single invalid string rejects the entire batch.
//! After that, the table is immutable and can be shared between threads.
//! Queries are resolved with [`TranscriptTable::resolve`]; see [`crate::resolver`] for the result types.

use crate::cigar;
use crate::index_map::IndexMap;
use crate::resolver::{Query, Resolution, ResolvedCoordinate};

use indexmap::map::Entry;
use indexmap::IndexMap as OrderedMap;

use log::{info, warn};


//-----------------------------------------------------------------------------

/// An alignment of a transcript to a chromosome, as given in the transcript table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignmentRecord {
    /// Transcript identifier.
    pub transcript_id: String,
    /// Name of the chromosome the transcript is aligned to.
    pub chromosome_name: String,
    /// 0-based chromosome coordinate aligned to transcript coordinate 0.
    pub start_offset: usize,
    /// CIGAR string describing the alignment.
    pub encoding: String,
}

impl AlignmentRecord {
    /// Creates a new record.
    pub fn new(transcript_id: &str, chromosome_name: &str, start_offset: usize, encoding: &str) -> Self {
        AlignmentRecord {
            transcript_id: transcript_id.to_string(),
            chromosome_name: chromosome_name.to_string(),
            start_offset,
            encoding: encoding.to_string(),
        }
    }

    /// Returns `true` if the CIGAR string is syntactically valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        cigar::is_valid(&self.encoding)
    }
}

//-----------------------------------------------------------------------------

/// A decoded transcript: the chromosome name and the coordinate map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript {
    /// Name of the chromosome the transcript is aligned to.
    pub chromosome_name: String,
    /// Map from transcript coordinates to chromosome coordinates.
    pub index_map: IndexMap,
}

/// A table of decoded transcripts indexed by transcript identifier.
///
/// If the same identifier occurs multiple times in the input, the first occurrence is used.
/// The later ones are counted in [`TranscriptTable::shadowed`] but never consulted.
///
/// # Examples
///
/// ```
/// use tx_coords::{AlignmentRecord, Query, TranscriptTable};
///
/// let records = vec![AlignmentRecord::new("T", "chr1", 3, "8M7D6M2I2M11D7M")];
/// let table = TranscriptTable::build(&records).unwrap();
/// let result = table.resolve(&Query::new("T", 8));
/// assert_eq!(result.chromosome_name(), "chr1");
/// assert_eq!(result.chromosome_coordinate(), 18);
/// assert_eq!(result.to_string(), "T\t8\tchr1\t18");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TranscriptTable {
    transcripts: OrderedMap<String, Transcript>,
    shadowed: usize,
}

impl TranscriptTable {
    /// Validates the CIGAR strings in the records and returns the indexes of invalid records.
    pub fn invalid_records(records: &[AlignmentRecord]) -> Vec<usize> {
        records.iter().enumerate().filter(|(_, record)| !record.is_valid()).map(|(i, _)| i).collect()
    }

    /// Builds a table from the given records.
    ///
    /// All CIGAR strings are validated before decoding any of them.
    ///
    /// # Errors
    ///
    /// Returns an error listing the invalid records if any of the CIGAR strings is invalid.
    /// Passes through decoding errors.
    pub fn build(records: &[AlignmentRecord]) -> Result<Self, String> {
        let invalid = Self::invalid_records(records);
        if !invalid.is_empty() {
            let listing: Vec<String> = invalid.iter().map(|&i| {
                format!("{} (record {}: {})", records[i].transcript_id, i + 1, records[i].encoding)
            }).collect();
            return Err(format!("Invalid CIGAR strings for transcripts: {}", listing.join(", ")));
        }

        let mut result = TranscriptTable::default();
        for record in records.iter() {
            match result.transcripts.entry(record.transcript_id.clone()) {
                Entry::Occupied(_) => {
                    warn!("Ignoring duplicate record for transcript {}", record.transcript_id);
                    result.shadowed += 1;
                },
                Entry::Vacant(entry) => {
                    let index_map = IndexMap::build(record.start_offset, &record.encoding).map_err(|x| {
                        format!("Failed to decode the alignment of transcript {}: {}", record.transcript_id, x)
                    })?;
                    entry.insert(Transcript {
                        chromosome_name: record.chromosome_name.clone(),
                        index_map,
                    });
                },
            }
        }
        info!(
            "Built a table of {} transcripts with {} transcript bases",
            result.len(), result.total_bases()
        );

        Ok(result)
    }

    /// Returns the number of distinct transcripts.
    #[inline]
    pub fn len(&self) -> usize {
        self.transcripts.len()
    }

    /// Returns `true` if the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transcripts.is_empty()
    }

    /// Returns the number of duplicate records that were ignored.
    #[inline]
    pub fn shadowed(&self) -> usize {
        self.shadowed
    }

    /// Returns the total length of the index maps.
    pub fn total_bases(&self) -> usize {
        self.transcripts.values().map(|transcript| transcript.index_map.len()).sum()
    }

    /// Returns the transcript with the given identifier, or [`None`] if there is no such transcript.
    #[inline]
    pub fn get(&self, transcript_id: &str) -> Option<&Transcript> {
        self.transcripts.get(transcript_id)
    }

    /// Returns an iterator over (identifier, transcript) pairs in the order they were first seen.
    pub fn transcripts(&self) -> impl Iterator<Item = (&str, &Transcript)> {
        self.transcripts.iter().map(|(id, transcript)| (id.as_str(), transcript))
    }

    /// Resolves the query to a chromosome coordinate.
    ///
    /// Unknown transcripts and out-of-range coordinates are reported as warnings.
    /// They do not cause errors.
    pub fn resolve(&self, query: &Query) -> ResolvedCoordinate {
        let resolution = match self.get(&query.transcript_id) {
            None => {
                warn!("Transcript {} not found", query.transcript_id);
                Resolution::UnknownTranscript
            },
            Some(transcript) => match transcript.index_map.get(query.transcript_coordinate) {
                Some(coordinate) => Resolution::Found(transcript.chromosome_name.clone(), coordinate),
                None => {
                    warn!("Transcript {} index {} out of range", query.transcript_id, query.transcript_coordinate);
                    Resolution::OutOfRange(transcript.chromosome_name.clone())
                },
            },
        };
        ResolvedCoordinate {
            transcript_id: query.transcript_id.clone(),
            transcript_coordinate: query.transcript_coordinate,
            resolution,
        }
    }

    /// Resolves all queries and returns the results in the same order.
    pub fn resolve_all(&self, queries: &[Query]) -> Vec<ResolvedCoordinate> {
        queries.iter().map(|query| self.resolve(query)).collect()
    }
}

//-----------------------------------------------------------------------------
