use std::{
    fs::File,
    io::Write,
    path::PathBuf,
};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    pub a: i64,
    pub b: i64,
    pub prefix: String,
    pub index: u32,
}

impl TestCase {
    pub fn new(a: i64, b: i64, prefix: impl Into<String>, index: u32) -> Self {
        Self {
            a,
            b,
            prefix: prefix.into(),
            index,
        }
    }
}

/// `<prefix>_<index>.in` with the index padded to at least two digits.
pub fn case_file_name(prefix: &str, index: u32) -> String {
    format!("{prefix}_{index:02}.in")
}

/// Writes `"<a> <b>\n"` to the case file, truncating any previous content.
/// The `testcase/` directory has to exist already.
pub fn emit(session: &Session, case: &TestCase) -> Result<PathBuf> {
    let path = session.case_path(&case.prefix, case.index);
    let mut file = File::create(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    writeln!(file, "{} {}", case.a, case.b)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
