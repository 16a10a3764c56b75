use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use colored::Colorize;
use serde::Serialize;

use crate::{
    console::print_warning,
    emit::{TestCase, emit},
    plan::Plan,
    session::Session,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct RunOptions {
    /// Abort on the first case that cannot be written.
    pub strict: bool,
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Written,
    Failed,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Written => "written",
            CaseStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CaseDetail {
    #[serde(flatten)]
    pub case: TestCase,
    pub file: PathBuf,
    pub status: CaseStatus,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub root: String,
    pub plan: String,
    pub seed: u64,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub total: usize,
    pub written: usize,
    pub failed: usize,
    pub cases: Vec<CaseDetail>,
}

impl RunSummary {
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("failed to write summary {}", path.display()))
    }
}

/// Emits every case of `plan` in order. Unless `options.strict` is set a
/// failed case is only recorded and the run carries on.
pub fn run_plan(session: &Session, plan: &Plan, options: RunOptions) -> Result<RunSummary> {
    let started_at = Local::now();
    let mut cases = Vec::with_capacity(plan.cases.len());
    let mut written = 0usize;
    let mut failed = 0usize;

    for case in &plan.cases {
        let file = session.case_path(&case.prefix, case.index);
        let (status, error) = match emit(session, case) {
            Ok(_) => {
                written += 1;
                if options.verbose {
                    println!(
                        "{} {}",
                        format!("[{}]", CaseStatus::Written.as_str()).green().bold(),
                        file.display()
                    );
                }
                (CaseStatus::Written, None)
            }
            Err(err) if options.strict => {
                return Err(err.context(format!(
                    "plan {} stopped at case {}_{:02}",
                    plan.name, case.prefix, case.index
                )));
            }
            Err(err) => {
                failed += 1;
                if options.verbose {
                    print_warning(format!("{err:#}"));
                }
                (CaseStatus::Failed, Some(format!("{err:#}")))
            }
        };
        cases.push(CaseDetail {
            case: case.clone(),
            file,
            status,
            error,
        });
    }

    let summary = RunSummary {
        root: session.root().to_string_lossy().into_owned(),
        plan: plan.name.clone(),
        seed: session.seed(),
        started_at,
        finished_at: Local::now(),
        total: plan.cases.len(),
        written,
        failed,
        cases,
    };

    if options.verbose {
        println!(
            "plan {} completed: {}/{} written (seed {})",
            summary.plan, summary.written, summary.total, summary.seed
        );
    }

    Ok(summary)
}
