//! Support for reading and writing the tab-separated text formats.
//!
//! All formats are line-oriented with tab-separated fields and no header.
//! Empty lines are skipped, and a trailing carriage return is ignored.
//!
//! ### Transcript table (reading)
//!
//! Four fields: transcript identifier, chromosome name, 0-based starting position on the chromosome, and CIGAR string.
//! See [`read_alignment_records`] and [`parse_alignment_record`].
//!
//! ### Queries (reading)
//!
//! Two fields: transcript identifier and 0-based transcript coordinate.
//! See [`read_queries`] and [`parse_query`].
//!
//! ### Resolved coordinates (writing)
//!
//! Four fields: transcript identifier, transcript coordinate, chromosome name, and chromosome coordinate.
//! Unresolved values are written as [`crate::resolver::MISSING_CHROMOSOME`] and [`crate::resolver::MISSING_COORDINATE`].
//! See [`write_resolved`].

use crate::{AlignmentRecord, Query, ResolvedCoordinate};

use std::io::{BufRead, Write};
use std::str;


//-----------------------------------------------------------------------------

/// Number of fields in a transcript table line.
pub const ALIGNMENT_FIELDS: usize = 4;

/// Number of fields in a query line.
pub const QUERY_FIELDS: usize = 2;

// Splits the line into exactly `expected` tab-separated fields.
fn split_fields<'a>(line: &'a str, expected: usize, what: &str) -> Result<Vec<&'a str>, String> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != expected {
        return Err(format!("Expected {} fields in a {} line, found {}", expected, what, fields.len()));
    }
    Ok(fields)
}

/// Parses a transcript table line.
///
/// The CIGAR string is not validated here.
/// Returns an error if the number of fields is wrong or the starting position is not a non-negative integer.
pub fn parse_alignment_record(line: &str) -> Result<AlignmentRecord, String> {
    let fields = split_fields(line, ALIGNMENT_FIELDS, "transcript")?;
    let start_offset = fields[2].parse::<usize>().map_err(|err| {
        format!("Invalid starting position {}: {}", fields[2], err)
    })?;
    Ok(AlignmentRecord::new(fields[0], fields[1], start_offset, fields[3]))
}

/// Parses a query line.
///
/// Negative coordinates are accepted; they are out of range for every transcript.
/// Returns an error if the number of fields is wrong or the coordinate is not an integer.
pub fn parse_query(line: &str) -> Result<Query, String> {
    let fields = split_fields(line, QUERY_FIELDS, "query")?;
    let coordinate = fields[1].parse::<isize>().map_err(|err| {
        format!("Invalid transcript coordinate {}: {}", fields[1], err)
    })?;
    Ok(Query::new(fields[0], coordinate))
}

// Reads all non-empty lines and parses them with the given function.
// Errors are reported with 1-based line numbers.
fn read_lines<R: BufRead, T, F: Fn(&str) -> Result<T, String>>(reader: &mut R, parse: F) -> Result<Vec<T>, String> {
    let mut result = Vec::new();
    let mut line_num = 0;
    let mut buf: Vec<u8> = Vec::new();
    loop {
        buf.clear();
        line_num += 1;
        let len = reader.read_until(b'\n', &mut buf).map_err(|x| {
            format!("Failed to read line {}: {}", line_num, x)
        })?;
        if len == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        if buf.is_empty() {
            continue;
        }
        let line = str::from_utf8(&buf).map_err(|x| format!("Line {}: {}", line_num, x))?;
        let value = parse(line).map_err(|x| format!("Line {}: {}", line_num, x))?;
        result.push(value);
    }
    Ok(result)
}

/// Reads a transcript table.
///
/// The CIGAR strings are not validated here.
/// Returns an error with the line number if a line cannot be read or parsed.
pub fn read_alignment_records<R: BufRead>(reader: &mut R) -> Result<Vec<AlignmentRecord>, String> {
    read_lines(reader, parse_alignment_record)
}

/// Reads a list of queries.
///
/// Returns an error with the line number if a line cannot be read or parsed.
pub fn read_queries<R: BufRead>(reader: &mut R) -> Result<Vec<Query>, String> {
    read_lines(reader, parse_query)
}

/// Writes the resolved coordinates, one per line.
pub fn write_resolved<W: Write>(writer: &mut W, results: &[ResolvedCoordinate]) -> std::io::Result<()> {
    for result in results.iter() {
        writeln!(writer, "{}", result)?;
    }
    Ok(())
}

//-----------------------------------------------------------------------------
