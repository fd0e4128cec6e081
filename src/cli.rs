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
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    // Convert aligned rows to raw sequences and a CIGAR string
    ToCig {
        // Input file, defaults to stdin
        #[arg(group = "input", required = false, help = "Input file (stdin if not given)")]
        input_file: Option<PathBuf>,

        // Output file path, defaults to stdout
        #[arg(short = 'o', long = "output", required = false, help = "Output file (stdout if not given)")]
        out_file: Option<PathBuf>,

        // Verbosity
        #[arg(long = "verbose", default_value_t = false)]
        verbose: bool,
    },

    // Reconstruct aligned rows from raw sequences and a CIGAR string
    FromCig {
        // Input file, defaults to stdin
        #[arg(group = "input", required = false, help = "Input file (stdin if not given)")]
        input_file: Option<PathBuf>,

        // Output file path, defaults to stdout
        #[arg(short = 'o', long = "output", required = false, help = "Output file (stdout if not given)")]
        out_file: Option<PathBuf>,

        // Verbosity
        #[arg(long = "verbose", default_value_t = false)]
        verbose: bool,
    },
}
