//! # Transcript to chromosome coordinate translation
//!
//! This crate translates 0-based transcript coordinates into 0-based chromosome coordinates.
//! The alignment of each transcript to a chromosome is given as a starting position on the chromosome and a CIGAR string.
//!
//! The translation proceeds in three steps:
//!
//! 1. CIGAR strings are validated with [`cigar::is_valid`].
//! 2. Each alignment is decoded into an [`IndexMap`] that stores the chromosome coordinate for every transcript coordinate.
//! 3. Queries are resolved against a [`TranscriptTable`] of decoded alignments.
//!    See [`resolver`] for the possible outcomes.
//!
//! The table is built in a single batch, and an invalid CIGAR string in any record rejects the entire batch.
//! After that, the table is immutable and queries are resolved independently.
//!
//! See [`formats`] for the tab-separated file formats and [`translate::translate_files`] for file-to-file translation.
//!
//! # Examples
//!
//! ```
//! use tx_coords::{AlignmentRecord, Query, TranscriptTable};
//!
//! let records = vec![
//!     AlignmentRecord::new("TR1", "CHR1", 3, "8M7D6M2I2M11D7M"),
//!     AlignmentRecord::new("TR2", "CHR2", 10, "20M"),
//! ];
//! let table = TranscriptTable::build(&records).unwrap();
//!
//! let queries = vec![Query::new("TR1", 0), Query::new("TR2", 25), Query::new("TR3", 0)];
//! let output: Vec<String> = table.resolve_all(&queries).iter().map(|x| x.to_string()).collect();
//! assert_eq!(output, vec!["TR1\t0\tCHR1\t3", "TR2\t25\tCHR2\t-1", "TR3\t0\tNA\t-1"]);
//! ```

pub mod cigar;
pub mod formats;
pub mod index_map;
pub mod resolver;
pub mod table;
pub mod translate;
pub mod utils;

pub use cigar::{OpKind, Operation};
pub use index_map::IndexMap;
pub use resolver::{Query, Resolution, ResolvedCoordinate};
pub use table::{AlignmentRecord, Transcript, TranscriptTable};

#[cfg(test)]
mod internal;
