//! Test fixture loader for argex golden debates and corpus files.
//!
//! Golden files under `golden/debates/` hold a debate record, its target, and
//! the expected propagation, branch, ranking, and explanation results.
//! Files under `golden/corpus/` are raw debates (votes only) used by the
//! pipeline tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Absolute path of a file under this crate, e.g. `"golden/corpus/100.json"`.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative_path)
}

fn read_golden(path: &Path) -> GoldenCase {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&content).unwrap_or_else(|e| panic!("bad golden case {}: {e}", path.display()))
}

/// A golden debate case. The debate itself stays untyped so the fixture
/// crate does not depend on the crates it tests.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenCase {
    pub description: String,
    pub target: String,
    pub debate: serde_json::Value,
    pub expected: GoldenExpected,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpected {
    pub direction: String,
    pub final_weights: BTreeMap<String, f64>,
    /// Category label -> branches in discovery order.
    pub branches: BTreeMap<String, Vec<GoldenBranch>>,
    /// Heuristic -> category label -> ranked branch ids (non-empty categories only).
    pub rankings: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    pub constructive: BTreeMap<String, GoldenExplanation>,
    #[serde(default)]
    pub destructive: BTreeMap<String, GoldenExplanation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenBranch {
    pub id: String,
    pub nodes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExplanation {
    pub success: bool,
    pub branch_ids: Vec<Vec<String>>,
    pub node_ids: Vec<Vec<String>>,
    pub steps: usize,
}

/// Load one golden debate case by file stem, e.g. `"mixed_tree"`.
pub fn load_golden_case(name: &str) -> GoldenCase {
    read_golden(&fixture_path(&format!("golden/debates/{name}.json")))
}

/// Names of every golden debate case.
pub const GOLDEN_CASES: [&str; 5] = [
    "chain",
    "declaration_order",
    "fallback",
    "mixed_tree",
    "weakening",
];
