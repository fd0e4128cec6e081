// alncig: Conversion between pairwise alignments, edit operation sequences,
// and CIGAR strings.
//
// Copyrights in this project are retained by contributors. No copyright assignment
// is required to contribute to this project.
//
// Except as otherwise noted (below and/or in individual files), this
// project is licensed under the Apache License, Version 2.0
// <LICENSE-APACHE> or <http://www.apache.org/licenses/LICENSE-2.0> or
// the MIT license, <LICENSE-MIT> or <http://opensource.org/licenses/MIT>,
// at your option.
//
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;

use clap::CommandFactory;
use clap::Parser;

mod cli;

type E = Box<dyn std::error::Error>;

/// Initializes the logger with verbosity given in `log_max_level`.
fn init_log(log_max_level: usize) {
    stderrlog::new()
    .module(module_path!())
    .quiet(false)
    .verbosity(log_max_level)
    .timestamp(stderrlog::Timestamp::Off)
    .init()
    .unwrap();
}

/// Opens `input_file` for buffered reading, or stdin if no path was given.
fn open_input(input_file: &Option<PathBuf>) -> Result<Box<dyn BufRead>, E> {
    match input_file {
        Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        None => Ok(Box::new(BufReader::new(std::io::stdin()))),
    }
}

/// Opens `out_file` for buffered writing, or stdout if no path was given.
fn open_output(out_file: &Option<PathBuf>) -> Result<Box<dyn Write>, E> {
    match out_file {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(BufWriter::new(std::io::stdout()))),
    }
}

fn run(cli: &cli::Cli) -> Result<(), E> {
    match &cli.command {
        // Aligned rows to sequences + CIGAR
        Some(cli::Commands::ToCig {
            input_file,
            out_file,
            verbose,
        }) => {
            init_log(if *verbose { 2 } else { 1 });

            let mut conn_in = open_input(input_file)?;
            let mut conn_out = open_output(out_file)?;
            let n_records = alncig::to_cig(&mut conn_in, &mut conn_out)?;
            log::info!("Wrote {} record(s).", n_records);
        },

        // Sequences + CIGAR to aligned rows
        Some(cli::Commands::FromCig {
            input_file,
            out_file,
            verbose,
        }) => {
            init_log(if *verbose { 2 } else { 1 });

            let mut conn_in = open_input(input_file)?;
            let mut conn_out = open_output(out_file)?;
            let n_records = alncig::from_cig(&mut conn_in, &mut conn_out)?;
            log::info!("Wrote {} alignment(s).", n_records);
        },

        None => {
            cli::Cli::command().print_help()?;
        },
    }
    Ok(())
}

fn main() {
    let cli = cli::Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
