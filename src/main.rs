use std::{ffi::OsString, path::PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use testcase_gen::{
    Plan, RunOptions, Session, Variant,
    housekeeping::{clean_cases, list_cases},
    run_plan,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let session = Session::init(&cli.root, cli.seed);

    match cli.action {
        Action::Run => generate(&cli, &session),
        Action::List => {
            for case in list_cases(&session)? {
                println!("{}", case.path.display());
            }
            Ok(())
        }
        Action::Clean => {
            let removed = clean_cases(&session)?;
            if cli.verbose {
                println!(
                    "removed {} file(s) from {}",
                    removed,
                    session.testcase_dir().display()
                );
            }
            Ok(())
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "testcase-gen",
    version,
    about = "Writes integer-pair test cases into <root>/testcase/",
    override_usage = "testcase-gen [OPTIONS] [--] [FRAGMENT]..."
)]
struct Cli {
    #[arg(long, value_enum, default_value = "run")]
    action: Action,
    /// Built-in case list, ignored when --plan is given
    #[arg(long, value_enum, default_value = "sample")]
    variant: Variant,
    /// TOML plan file describing the cases to write
    #[arg(long)]
    plan: Option<PathBuf>,
    /// Seed for the random source, defaults to the wall clock
    #[arg(long)]
    seed: Option<u64>,
    /// Fail on the first case that cannot be written
    #[arg(long)]
    strict: bool,
    #[arg(short, long)]
    verbose: bool,
    /// Write a JSON run summary to this path
    #[arg(long)]
    summary: Option<PathBuf>,
    /// Concatenated with no separator to form the root directory. Put `--`
    /// before the first fragment if it starts with `-`
    #[arg(value_name = "FRAGMENT", trailing_var_arg = true, allow_hyphen_values = true)]
    root: Vec<OsString>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Action {
    Run,
    List,
    Clean,
}

fn generate(cli: &Cli, session: &Session) -> Result<()> {
    let plan = match &cli.plan {
        Some(path) => Plan::load(path)?,
        None => Plan::builtin(cli.variant),
    };
    let options = RunOptions {
        strict: cli.strict,
        verbose: cli.verbose,
    };
    let summary = run_plan(session, &plan, options)?;
    if let Some(path) = &cli.summary {
        summary.write(path)?;
    }
    Ok(())
}
