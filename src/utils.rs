//! Utility functions for working with files.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};

use flate2::read::MultiGzDecoder;

//-----------------------------------------------------------------------------

/// Returns the full file name for a specific test file.
pub fn get_test_data(filename: &'static str) -> PathBuf {
    let mut buf = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    buf.push("test-data");
    buf.push(filename);
    buf
}

//-----------------------------------------------------------------------------

/// Returns `true` if the file exists.
pub fn file_exists<P: AsRef<Path>>(filename: P) -> bool {
    fs::metadata(filename).is_ok()
}

/// Returns `true` if the file appears to be gzip-compressed.
pub fn is_gzipped<P: AsRef<Path>>(filename: P) -> bool {
    let Ok(file) = File::open(filename) else {
        return false;
    };
    let mut reader = BufReader::new(file);
    let mut magic = [0; 2];
    let len = reader.read(&mut magic).ok();
    len == Some(2) && magic == [0x1F, 0x8B]
}

/// Returns a buffered reader for the file, which may be gzip-compressed.
pub fn open_file<P: AsRef<Path>>(filename: P) -> Result<Box<dyn BufRead>, String> {
    let file = File::open(&filename).map_err(|x| format!("{}: {}", filename.as_ref().display(), x))?;
    let inner = BufReader::new(file);
    if is_gzipped(&filename) {
        let inner = MultiGzDecoder::new(inner);
        Ok(Box::new(BufReader::new(inner)))
    } else {
        Ok(Box::new(inner))
    }
}

/// Creates the file and returns a buffered writer for it.
///
/// An existing file is truncated.
pub fn create_file<P: AsRef<Path>>(filename: P) -> Result<Box<dyn Write>, String> {
    let file = File::create(&filename).map_err(|x| format!("{}: {}", filename.as_ref().display(), x))?;
    Ok(Box::new(BufWriter::new(file)))
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
