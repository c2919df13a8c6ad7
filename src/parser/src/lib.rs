//! The command-line surface: [`Cli`], its [`Command`] subcommands, and the
//! flattened argument groups shared between them. Outside "the core" per
//! `SPEC_FULL.md` §2 — this crate only parses and (de)serializes arguments,
//! it never touches a FASTQ record or a construct.

use std::fs::File;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::debug;
use serde::{Deserialize, Serialize};

mod error;
pub use error::ParserError;

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(name = "plexcall", author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// plexcall: classify paired-end reads against a multiplexed CRISPR construct library.
pub struct Cli {
    /// Set the verbosity level (-v -vv -vvv)
    ///
    /// -v: Info  |  -vv: Debug  |  -vvv: Trace {n}
    ///
    /// The program still emits warnings by default, even when this flag is off.
    /// Use --quiet/-q to disable them.
    #[clap(short = 'v', long, parse(from_occurrences), global = true)]
    pub verbose: u8,

    /// Disable warnings. Only errors will be displayed.
    #[clap(short = 'q', long, global = true)]
    pub quiet: bool,

    #[clap(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Serialize the parsed arguments to a yaml string, logging it at
    /// `debug` so a run's exact invocation is always recoverable from logs.
    ///
    /// # Errors
    /// Returns [`ParserError::Serialize`] if `serde_yaml` fails.
    pub fn serialize(&self) -> Result<String, ParserError> {
        let serialized = serde_yaml::to_string(self)?;
        debug!("\n---- Command line args ----\n{serialized}\n---");
        Ok(serialized)
    }

    /// Deserialize a previously-dumped yaml configuration back into a [`Cli`],
    /// for the `from-yaml` replay subcommand.
    ///
    /// # Errors
    /// Returns [`ParserError::Read`] if `path` cannot be opened, or
    /// [`ParserError::Serialize`] if its contents are not a valid `Cli`.
    pub fn deserialize(path: &std::path::Path) -> Result<Self, ParserError> {
        let file = File::open(path).map_err(|source| ParserError::Read { path: path.display().to_string(), source })?;
        Ok(serde_yaml::from_reader(file)?)
    }
}

#[derive(Subcommand, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Classify record pairs by probe substring match, emitting per-construct counts.
    Constructs {
        #[clap(flatten)]
        library: LibraryArgs,
        #[clap(flatten)]
        reads: PairedReadArgs,
        #[clap(flatten)]
        output: OutputArg,
        #[clap(flatten)]
        concurrency: ConcurrencyArgs,
    },

    /// Classify record pairs by spacer tuple, emitting per-construct counts.
    Tuples {
        #[clap(flatten)]
        library: LibraryArgs,
        #[clap(flatten)]
        reads: PairedReadArgs,
        #[clap(flatten)]
        output: OutputArg,
        #[clap(flatten)]
        concurrency: ConcurrencyArgs,
    },

    /// Report every spacer sequence found in each record pair, without classifying.
    Spacers {
        #[clap(flatten)]
        library: LibraryArgs,
        #[clap(flatten)]
        reads: PairedReadArgs,
        #[clap(flatten)]
        output: OutputArg,
    },

    /// Locate constants and spacers within individual reads, per §6's Describe TSV.
    Describe {
        #[clap(flatten)]
        library: LibraryArgs,
        #[clap(flatten)]
        reads: PairedReadArgs,
        #[clap(flatten)]
        output: OutputArg,
    },

    /// Build and validate a library from its spacer/constant tables, emitting a construct FASTA.
    Build {
        #[clap(flatten)]
        library: LibraryArgs,
        #[clap(flatten)]
        output: OutputArg,
    },

    /// Re-run a previously `--dump-args`-serialized yaml configuration.
    FromYaml { yaml: PathBuf },
}

/// The two library table paths shared by every command that builds a [`library::Library`].
#[derive(Parser, Debug, Serialize, Deserialize)]
pub struct LibraryArgs {
    /// TSV of spacer sequences: `construct_id<TAB>variant_id<TAB>sequence`.
    #[clap(short = 's', long)]
    pub spacers: PathBuf,

    /// TSV of constant sequences: `position_id<TAB>sequence`.
    #[clap(short = 'c', long)]
    pub constants: PathBuf,
}

/// The paired FASTQ input paths shared by every read-consuming command.
#[derive(Parser, Debug, Serialize, Deserialize)]
pub struct PairedReadArgs {
    /// R1 FASTQ file, plain or gzip-compressed (`.gz`).
    #[clap(short = 'i', long = "r1")]
    pub r1: PathBuf,

    /// R2 FASTQ file, plain or gzip-compressed (`.gz`).
    #[clap(short = 'I', long = "r2")]
    pub r2: PathBuf,
}

/// The output path shared by every command; `None` (omitted) writes to stdout.
#[derive(Parser, Debug, Serialize, Deserialize)]
pub struct OutputArg {
    /// Output file. Omit to write to standard output.
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Optional parallel sharding, per `SPEC_FULL.md` §4.5. Default is fully sequential.
#[derive(Parser, Debug, Serialize, Deserialize)]
pub struct ConcurrencyArgs {
    /// Number of worker threads to classify record-pair batches with.
    #[clap(long, default_value = "1")]
    pub threads: usize,
}
