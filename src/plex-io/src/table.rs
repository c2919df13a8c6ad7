use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use located_error::LocatedError;
use library::{Constant, Spacer};

use crate::error::PlexIoError;

fn open_lines(path: &Path) -> Result<impl Iterator<Item = std::io::Result<String>>, PlexIoError> {
    let file = File::open(path).map_err(|source| PlexIoError::FileNotFound { path: path.to_path_buf(), source })?;
    Ok(BufReader::new(file).lines())
}

/// Parse a headerless spacer TSV: `sequence<TAB>construct_id<TAB>variant_id`.
///
/// # Errors
/// [`PlexIoError::FileNotFound`] if `path` cannot be opened,
/// [`PlexIoError::MalformedRow`] if a row has the wrong column count or an
/// unparsable integer field.
pub fn read_spacer_table(path: &Path) -> Result<Vec<Spacer>, PlexIoError> {
    let mut spacers = Vec::new();
    for line in open_lines(path)? {
        let line = line.map_err(PlexIoError::Io).with_loc(|| format!("reading {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let cols: Vec<&str> = line.split('\t').collect();
        let malformed = |reason: &str| PlexIoError::MalformedRow { path: path.to_path_buf(), line: line.clone(), reason: reason.to_string() };
        if cols.len() != 3 {
            return Err(malformed("expected 3 tab-separated columns"));
        }
        let construct_id: u32 = cols[1].parse().map_err(|_| malformed("construct_id is not a valid integer"))?;
        let variant_id: u32 = cols[2].parse().map_err(|_| malformed("variant_id is not a valid integer"))?;
        spacers.push(Spacer::new(cols[0], construct_id, variant_id));
    }
    Ok(spacers)
}

/// Parse a headerless constant TSV: `sequence<TAB>position_id`.
///
/// # Errors
/// Same error modes as [`read_spacer_table`].
pub fn read_constant_table(path: &Path) -> Result<Vec<Constant>, PlexIoError> {
    let mut constants = Vec::new();
    for line in open_lines(path)? {
        let line = line.map_err(PlexIoError::Io).with_loc(|| format!("reading {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let cols: Vec<&str> = line.split('\t').collect();
        let malformed = |reason: &str| PlexIoError::MalformedRow { path: path.to_path_buf(), line: line.clone(), reason: reason.to_string() };
        if cols.len() != 2 {
            return Err(malformed("expected 2 tab-separated columns"));
        }
        let position_id: u32 = cols[1].parse().map_err(|_| malformed("position_id is not a valid integer"))?;
        constants.push(Constant::new(cols[0], position_id));
    }
    Ok(constants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_scenario_a_spacer_table() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "AAAAAA\t0\t0").unwrap();
        writeln!(f, "CCCCCC\t0\t1").unwrap();
        let spacers = read_spacer_table(f.path()).unwrap();
        assert_eq!(spacers.len(), 2);
        assert_eq!(spacers[0].sequence, "AAAAAA");
        assert_eq!(spacers[1].variant_id, 1);
    }

    #[test]
    fn rejects_malformed_row() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "AAAAAA\t0").unwrap();
        assert!(matches!(read_spacer_table(f.path()), Err(PlexIoError::MalformedRow { .. })));
    }

    #[test]
    fn missing_file_is_reported() {
        let result = read_spacer_table(Path::new("/nonexistent/spacers.tsv"));
        assert!(matches!(result, Err(PlexIoError::FileNotFound { .. })));
    }
}
