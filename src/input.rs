use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::Error;

/// Path read when no input is given on the command line.
pub const DEFAULT_INPUT: &str = "./script.sql";

/// Path that stands for standard input.
pub const STDIN: &str = "-";

/// Expand the command-line inputs into the list of files to read.
///
/// No inputs means [`DEFAULT_INPUT`]. Directories are walked recursively for
/// `.sql` files, in file name order; other paths are kept as given.
pub fn collect_inputs(paths: &[PathBuf]) -> Vec<PathBuf> {
    if paths.is_empty() {
        return vec![PathBuf::from(DEFAULT_INPUT)];
    }

    paths
        .iter()
        .flat_map(|path| -> Vec<PathBuf> {
            if !path.is_dir() {
                return vec![path.clone()];
            }
            WalkDir::new(path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .filter(|e| {
                    e.file_name()
                        .to_str()
                        .map(|e| e.ends_with(".sql"))
                        .unwrap_or(false)
                })
                .map(|e| e.into_path())
                .collect()
        })
        .inspect(|p| debug!("input: {}", p.display()))
        .collect()
}

/// Read a whole source into memory.
pub fn read_sql<F: Read>(f: &mut F, path: &Path) -> Result<String, Error> {
    let mut sql = String::new();
    f.read_to_string(&mut sql).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(sql)
}

/// Read `path`, or standard input when it is [`STDIN`].
pub fn read_input(path: &Path) -> Result<String, Error> {
    if path.as_os_str() == STDIN {
        return read_sql(&mut std::io::stdin().lock(), path);
    }
    let mut file = fs::File::open(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    read_sql(&mut file, path)
}
