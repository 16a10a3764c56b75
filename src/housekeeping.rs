//! Listing and cleaning of files already sitting in `<root>/testcase/`.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use regex::Regex;

use crate::{console::print_error, session::Session};

const CASE_FILE_PATTERN: &str = r"^(?P<prefix>.+)_(?P<index>\d{2,})\.in$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFile {
    pub prefix: String,
    pub index: u64,
    pub path: PathBuf,
}

fn read_testcase_dir(session: &Session) -> Result<Vec<PathBuf>> {
    let dir = session.testcase_dir();
    let entries =
        fs::read_dir(&dir).with_context(|| format!("failed to read {}", dir.display()))?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Case files ordered by prefix, then numerically by index.
pub fn list_cases(session: &Session) -> Result<Vec<CaseFile>> {
    let pattern = Regex::new(CASE_FILE_PATTERN)?;
    let mut cases = Vec::new();
    for path in read_testcase_dir(session)? {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(caps) = pattern.captures(name) else {
            continue;
        };
        // Indices too wide for u64 are not ours.
        let Ok(index) = caps["index"].parse::<u64>() else {
            continue;
        };
        cases.push(CaseFile {
            prefix: caps["prefix"].to_string(),
            index,
            path: path.clone(),
        });
    }
    cases.sort_by(|x, y| (&x.prefix, x.index).cmp(&(&y.prefix, y.index)));
    Ok(cases)
}

/// Removes every `.in`/`.out` file. If anything else is present nothing is
/// removed and an error is returned.
pub fn clean_cases(session: &Session) -> Result<usize> {
    let paths = read_testcase_dir(session)?;
    let foreign: Vec<&PathBuf> = paths
        .iter()
        .filter(|path| {
            !matches!(
                path.extension().and_then(|ext| ext.to_str()),
                Some("in") | Some("out")
            )
        })
        .collect();

    if !foreign.is_empty() {
        for path in &foreign {
            print_error(format!(
                "{} could not be deleted because it is not an .in/.out file",
                path.display()
            ));
        }
        bail!(
            "refusing to clean {}: {} unexpected file(s)",
            session.testcase_dir().display(),
            foreign.len()
        );
    }

    for path in &paths {
        fs::remove_file(path).with_context(|| format!("failed to remove {}", path.display()))?;
    }
    Ok(paths.len())
}
