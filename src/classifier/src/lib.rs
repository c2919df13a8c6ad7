//! The streaming engine: library loading, index construction, the five
//! command implementations (`constructs`, `tuples`, `spacers`, `describe`,
//! `build`), and the `run` dispatcher wired to the [`parser::Command`] enum.

mod diagnostics;
mod engine;
mod error;
mod report;

pub use diagnostics::Diagnostics;
pub use error::ClassifierError;

use std::fs;

use indicatif::{ProgressBar, ProgressStyle};
use library::Library;
use located_error::LocatedError;
use log::info;
use parser::{Command, LibraryArgs, OutputArg, PairedReadArgs};
use plex_io::PairedFastqReader;
use probe_index::{ProbeIndex, SpacerIndex, TupleIndex};

/// Parse and validate a [`Library`] from a command's spacer/constant tables.
///
/// # Errors
/// Propagates [`library::LibraryError`] or [`plex_io::PlexIoError`] wrapped
/// with call-site context.
pub fn load_library(args: &LibraryArgs) -> anyhow::Result<Library> {
    let spacers = plex_io::read_spacer_table(&args.spacers).with_loc(|| format!("reading {}", args.spacers.display()))?;
    let constants =
        plex_io::read_constant_table(&args.constants).with_loc(|| format!("reading {}", args.constants.display()))?;
    Library::build(spacers, constants).with_loc(|| "assembling library from parsed tables".to_string())
}

fn open_reads(
    reads: &PairedReadArgs,
) -> anyhow::Result<PairedFastqReader<plex_io::FastqFileReader, plex_io::FastqFileReader>> {
    let r1 = plex_io::open_fastq(&reads.r1).with_loc(|| format!("opening R1 {}", reads.r1.display()))?;
    let r2 = plex_io::open_fastq(&reads.r2).with_loc(|| format!("opening R2 {}", reads.r2.display()))?;
    Ok(PairedFastqReader::new(r1, r2))
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {pos} pairs processed ({per_sec})").unwrap());
    logger::Logger::multi().add(pb.clone());
    pb
}

/// Run the command parsed by [`parser::Cli`].
///
/// # Errors
/// Returns an error if any table, FASTQ stream, or output path fails to
/// load, parse, or write; prepare-phase errors are fatal per §7.
pub fn run(command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Constructs { library, reads, output, concurrency } => {
            let lib = load_library(library)?;
            let index = ProbeIndex::build(&lib);
            let mut pairs = open_reads(reads)?;
            let pb = spinner();
            let (counts, diagnostics) = engine::classify_constructs(&mut pairs, &index, concurrency.threads, Some(&pb))
                .with_loc(|| "streaming constructs classification".to_string())?;
            pb.finish_and_clear();
            diagnostics.log_summary();
            plex_io::write_counts(output.output.as_deref(), &counts).with_loc(|| "writing counts".to_string())?;
        }
        Command::Tuples { library, reads, output, concurrency } => {
            let lib = load_library(library)?;
            if lib.plexity != 4 && lib.plexity != 6 {
                return Err(ClassifierError::UnsupportedPlexity { command: "tuples", actual: lib.plexity }.into());
            }
            let tuple_index = TupleIndex::build(&lib)?;
            let spacer_index = SpacerIndex::build(&lib);
            let mut pairs = open_reads(reads)?;
            let pb = spinner();
            let (counts, diagnostics) =
                engine::classify_tuples(&mut pairs, &tuple_index, &spacer_index, concurrency.threads, Some(&pb))
                    .with_loc(|| "streaming tuple classification".to_string())?;
            pb.finish_and_clear();
            diagnostics.log_summary();
            plex_io::write_counts(output.output.as_deref(), &counts).with_loc(|| "writing counts".to_string())?;
        }
        Command::Spacers { library, reads, output } => {
            let lib = load_library(library)?;
            let spacer_index = SpacerIndex::build(&lib);
            let mut pairs = open_reads(reads)?;
            let rows = report::spacer_report(&mut pairs, &spacer_index).with_loc(|| "streaming spacer report".to_string())?;
            info!("reported {} spacer hits", rows.len());
            plex_io::write_spacer_report(output.output.as_deref(), rows).with_loc(|| "writing spacer report".to_string())?;
        }
        Command::Describe { library, reads, output } => {
            let lib = load_library(library)?;
            let spacer_index = SpacerIndex::build(&lib);
            let constant_index = report::build_constant_set(&lib);
            let mut pairs = open_reads(reads)?;
            let rows = report::describe_report(&mut pairs, &constant_index, &spacer_index)
                .with_loc(|| "streaming describe report".to_string())?;
            info!("described {} record pairs", rows.len());
            plex_io::write_describe(output.output.as_deref(), rows).with_loc(|| "writing describe report".to_string())?;
        }
        Command::Build { library, output } => {
            let lib = load_library(library)?;
            plex_io::write_fasta(output.output.as_deref(), &lib).with_loc(|| "writing construct fasta".to_string())?;
        }
        Command::FromYaml { yaml } => {
            let contents = fs::read_to_string(yaml).with_loc(|| format!("reading {}", yaml.display()))?;
            let cli: parser::Cli = serde_yaml::from_str(&contents).with_loc(|| "parsing replayed yaml".to_string())?;
            return run(&cli.command);
        }
    }
    Ok(())
}
