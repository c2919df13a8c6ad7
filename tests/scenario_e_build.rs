mod common;

use parser::{Command, LibraryArgs, OutputArg};
use pretty_assertions::assert_eq;

#[test]
fn scenario_e_build_emits_fasta_of_full_construct_sequences() {
    let dir = tempfile::tempdir().unwrap();
    let spacers = common::write_table(dir.path(), "spacers.tsv", common::SCENARIO_A_SPACERS);
    let constants = common::write_table(dir.path(), "constants.tsv", common::SCENARIO_A_CONSTANTS);
    let output = dir.path().join("library.fasta");

    let command = Command::Build {
        library: LibraryArgs { spacers, constants },
        output: OutputArg { output: Some(output.clone()) },
    };
    classifier::run(&command).unwrap();

    assert_eq!(
        common::read_to_string(&output),
        ">cid_0\nACACAAAAAACAGTCCCCCCGTGTGGGGGGTGTGTTTTTT\n"
    );
}
