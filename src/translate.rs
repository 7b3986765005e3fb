//! File-to-file coordinate translation.

use crate::{formats, utils};
use crate::TranscriptTable;
use crate::resolver::ResolutionStats;

use std::io::Write;
use std::path::Path;

use log::info;

//-----------------------------------------------------------------------------

/// Statistics from [`translate_files`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TranslationStats {
    /// Number of records in the transcript table.
    pub records: usize,
    /// Number of distinct transcripts.
    pub transcripts: usize,
    /// Outcomes of the queries.
    pub queries: ResolutionStats,
}

/// Reads and builds a transcript table from a file, which may be gzip-compressed.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if any CIGAR string is invalid.
pub fn load_transcript_table(filename: &Path) -> Result<(TranscriptTable, usize), String> {
    let mut reader = utils::open_file(filename)?;
    let records = formats::read_alignment_records(&mut reader).map_err(|x| {
        format!("Failed to read transcript table {}: {}", filename.display(), x)
    })?;
    info!("Read {} records from {}", records.len(), filename.display());
    let table = TranscriptTable::build(&records).map_err(|x| {
        format!("Invalid transcript table {}: {}", filename.display(), x)
    })?;
    Ok((table, records.len()))
}

/// Translates the queries in `query_file` using the transcript table in `transcript_file` and writes the results to `output_file`.
///
/// The input files may be gzip-compressed.
/// The transcript table is read and validated before the queries are read.
/// The output file is created only after all queries have been resolved, so it is not created if the run fails.
/// An existing output file is replaced.
///
/// # Errors
///
/// Returns an error if any of the files cannot be read or written, or if the transcript table contains an invalid CIGAR string.
/// Unknown transcripts and out-of-range coordinates are not errors.
pub fn translate_files(transcript_file: &Path, query_file: &Path, output_file: &Path) -> Result<TranslationStats, String> {
    let (table, records) = load_transcript_table(transcript_file)?;

    let mut reader = utils::open_file(query_file)?;
    let queries = formats::read_queries(&mut reader).map_err(|x| {
        format!("Failed to read queries {}: {}", query_file.display(), x)
    })?;
    info!("Read {} queries from {}", queries.len(), query_file.display());

    let results = table.resolve_all(&queries);
    let stats = ResolutionStats::new(&results);

    let mut writer = utils::create_file(output_file)?;
    formats::write_resolved(&mut writer, &results).and_then(|_| writer.flush()).map_err(|x| {
        format!("Failed to write {}: {}", output_file.display(), x)
    })?;
    info!("Wrote {} results to {}", results.len(), output_file.display());

    Ok(TranslationStats {
        records,
        transcripts: table.len(),
        queries: stats,
    })
}

//-----------------------------------------------------------------------------
