use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use serde::Deserialize;

use crate::emit::TestCase;

pub const DEFAULT_PREFIX: &str = "0_sample";

/// Built-in case lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// (0,0) (0,1) (1,0) (1,1)
    #[value(name = "sample")]
    Sample,
    /// (0,1) only
    #[value(name = "single")]
    Single,
}

impl Variant {
    fn name(&self) -> &'static str {
        match self {
            Variant::Sample => "sample",
            Variant::Single => "single",
        }
    }

    fn pairs(&self) -> &'static [(i64, i64)] {
        match self {
            Variant::Sample => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            Variant::Single => &[(0, 1)],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Plan {
    pub name: String,
    pub cases: Vec<TestCase>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlanFile {
    name: Option<String>,
    #[serde(default = "default_prefix")]
    prefix: String,
    #[serde(default)]
    cases: Vec<PlanEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlanEntry {
    a: i64,
    b: i64,
    prefix: Option<String>,
    index: Option<u32>,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl Plan {
    pub fn builtin(variant: Variant) -> Self {
        let cases = variant
            .pairs()
            .iter()
            .zip(0u32..)
            .map(|(&(a, b), index)| TestCase::new(a, b, DEFAULT_PREFIX, index))
            .collect();
        Self {
            name: variant.name().to_string(),
            cases,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read plan {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("failed to parse plan {}", path.display()))
    }

    /// Parses a TOML plan. Cases without an explicit index continue from the
    /// last index used for the same prefix.
    pub fn parse(content: &str) -> Result<Self> {
        let file: PlanFile = toml::from_str(content)?;
        if file.cases.is_empty() {
            bail!("plan has no cases - add [[cases]] entries");
        }

        let mut next_index: HashMap<String, u32> = HashMap::new();
        let mut cases = Vec::with_capacity(file.cases.len());
        for entry in file.cases {
            let prefix = entry.prefix.unwrap_or_else(|| file.prefix.clone());
            let slot = next_index.entry(prefix.clone()).or_insert(0);
            let index = entry.index.unwrap_or(*slot);
            *slot = index.saturating_add(1);
            cases.push(TestCase::new(entry.a, entry.b, prefix, index));
        }

        Ok(Self {
            name: file.name.unwrap_or_else(|| "custom".into()),
            cases,
        })
    }
}
