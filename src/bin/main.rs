use clap::Parser;
use std::process;

#[macro_use]
extern crate log;

/// Parse command line arguments and run `classifier::run()`.
fn main() {
    let cli = parser::Cli::parse();

    let verbosity = cli.verbose + u8::from(!cli.quiet);
    logger::Logger::init(verbosity);

    if let Ok(serialized) = cli.serialize() {
        trace!("{serialized}");
    }

    match classifier::run(&cli.command) {
        Ok(()) => (),
        Err(e) => {
            error!("{e:#}");
            process::exit(1);
        }
    }
}
