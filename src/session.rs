use std::{
    ffi::{OsStr, OsString},
    path::PathBuf,
};

use chrono::Utc;

use crate::emit::case_file_name;

/// Process-scoped state built once at startup: the root prefix and the seed
/// taken for the pseudo-random source.
#[derive(Debug, Clone)]
pub struct Session {
    root: OsString,
    seed: u64,
}

impl Session {
    /// Concatenates `fragments` with no separator into the root prefix and
    /// seeds from the wall clock unless `seed` is given. Fragments are raw OS
    /// strings, so non-UTF-8 arguments pass through untouched.
    pub fn init<I, S>(fragments: I, seed: Option<u64>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let root = fragments
            .into_iter()
            .fold(OsString::new(), |mut root, fragment| {
                root.push(fragment);
                root
            });
        Self {
            root,
            seed: seed.unwrap_or_else(wall_clock_seed),
        }
    }

    pub fn root(&self) -> &OsStr {
        &self.root
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn testcase_dir(&self) -> PathBuf {
        let mut dir = self.root.clone();
        dir.push("/testcase");
        PathBuf::from(dir)
    }

    pub fn case_path(&self, prefix: &str, index: u32) -> PathBuf {
        let mut path = self.root.clone();
        path.push("/testcase/");
        path.push(case_file_name(prefix, index));
        PathBuf::from(path)
    }
}

fn wall_clock_seed() -> u64 {
    Utc::now().timestamp().max(0) as u64
}
