use std::path::PathBuf;
use std::time::Instant;
use std::{env, process};

use tx_coords::{translate, utils};

use getopts::Options;

use log::{info, LevelFilter};

//-----------------------------------------------------------------------------

fn main() -> Result<(), String> {
    let start_time = Instant::now();

    // Parse arguments.
    let config = Config::new();
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    // Check if the output file already exists.
    if utils::file_exists(&config.output_file) {
        if config.overwrite {
            info!("Overwriting output file {}", config.output_file.display());
        } else {
            return Err(format!("Output file {} already exists", config.output_file.display()));
        }
    }

    // Translate the coordinates.
    let stats = translate::translate_files(&config.transcript_file, &config.query_file, &config.output_file)?;

    // Statistics.
    info!(
        "Translated {} queries using {} transcripts ({} records)",
        stats.queries.queries(), stats.transcripts, stats.records
    );
    info!(
        "{} resolved, {} out of range, {} unknown transcripts",
        stats.queries.found, stats.queries.out_of_range, stats.queries.unknown
    );

    let end_time = Instant::now();
    let seconds = end_time.duration_since(start_time).as_secs_f64();
    info!("Used {:.3} seconds", seconds);

    Ok(())
}

//-----------------------------------------------------------------------------

struct Config {
    pub transcript_file: PathBuf,
    pub query_file: PathBuf,
    pub output_file: PathBuf,
    pub overwrite: bool,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn new() -> Config {
        let args: Vec<String> = env::args().collect();
        let program = args[0].clone();
        let header = format!("Usage: {} [options] transcripts.tsv[.gz] queries.tsv[.gz] output.tsv", program);

        let mut opts = Options::new();
        opts.optflag("h", "help", "print this help");
        opts.optflag("q", "quiet", "report only warnings and errors");
        opts.optflag("", "overwrite", "overwrite the output file if it exists");
        let matches = match opts.parse(&args[1..]) {
            Ok(m) => m,
            Err(f) => {
                eprintln!("{}", f);
                process::exit(1);
            }
        };

        if matches.opt_present("h") {
            eprint!("{}", opts.usage(&header));
            process::exit(0);
        }
        if matches.free.len() != 3 {
            eprint!("{}", opts.usage(&header));
            process::exit(1);
        }
        let transcript_file = PathBuf::from(&matches.free[0]);
        let query_file = PathBuf::from(&matches.free[1]);
        let output_file = PathBuf::from(&matches.free[2]);

        let overwrite = matches.opt_present("overwrite");
        let log_level = if matches.opt_present("q") { LevelFilter::Warn } else { LevelFilter::Info };

        Config {
            transcript_file, query_file, output_file,
            overwrite,
            log_level,
        }
    }
}

//-----------------------------------------------------------------------------
