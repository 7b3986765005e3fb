use crate::{formats, utils};
use crate::{AlignmentRecord, Query, TranscriptTable};

use simple_sds::serialize;

use log::{Level, LevelFilter, Log, Metadata, Record};

use std::cell::RefCell;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Once;

//-----------------------------------------------------------------------------

// Test input files.

pub(crate) fn load_records(filename: &'static str) -> Vec<AlignmentRecord> {
    let input = utils::get_test_data(filename);
    let reader = utils::open_file(&input);
    assert!(reader.is_ok(), "Failed to open {}: {}", input.display(), reader.err().unwrap());
    let mut reader = reader.unwrap();
    let records = formats::read_alignment_records(&mut reader);
    assert!(records.is_ok(), "Failed to read {}: {}", input.display(), records.unwrap_err());
    records.unwrap()
}

pub(crate) fn load_table(filename: &'static str) -> TranscriptTable {
    let records = load_records(filename);
    let table = TranscriptTable::build(&records);
    assert!(table.is_ok(), "Failed to build the table from {}: {}", filename, table.unwrap_err());
    table.unwrap()
}

pub(crate) fn load_queries(filename: &'static str) -> Vec<Query> {
    let input = utils::get_test_data(filename);
    let reader = utils::open_file(&input);
    assert!(reader.is_ok(), "Failed to open {}: {}", input.display(), reader.err().unwrap());
    let mut reader = reader.unwrap();
    let queries = formats::read_queries(&mut reader);
    assert!(queries.is_ok(), "Failed to read {}: {}", input.display(), queries.unwrap_err());
    queries.unwrap()
}

//-----------------------------------------------------------------------------

// Output files.

pub(crate) fn temp_output(name_part: &str) -> PathBuf {
    let filename = serialize::temp_file_name(name_part);
    assert!(!utils::file_exists(&filename), "Output file {} already exists", filename.display());
    filename
}

// Returns the lines of the file without line terminators.
pub(crate) fn read_lines(filename: &PathBuf) -> Vec<String> {
    let reader = utils::open_file(filename);
    assert!(reader.is_ok(), "Failed to open {}: {}", filename.display(), reader.err().unwrap());
    let lines: Result<Vec<String>, _> = reader.unwrap().lines().collect();
    assert!(lines.is_ok(), "Failed to read {}: {}", filename.display(), lines.unwrap_err());
    lines.unwrap()
}

//-----------------------------------------------------------------------------

// Log capture.

// Messages are stored per thread, as tests run in parallel.
thread_local! {
    static MESSAGES: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        MESSAGES.with(|messages| messages.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;
static INIT_LOGGER: Once = Once::new();

// Runs the function and returns its result with the log messages it emitted on this thread.
pub(crate) fn capture_log<T, F: FnOnce() -> T>(f: F) -> (T, Vec<(Level, String)>) {
    INIT_LOGGER.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    MESSAGES.with(|messages| messages.borrow_mut().clear());
    let result = f();
    let messages = MESSAGES.with(|messages| messages.borrow_mut().drain(..).collect());
    (result, messages)
}

// Returns the messages at the given level.
pub(crate) fn messages_at(messages: &[(Level, String)], level: Level) -> Vec<&str> {
    messages.iter().filter(|(l, _)| *l == level).map(|(_, message)| message.as_str()).collect()
}

//-----------------------------------------------------------------------------
