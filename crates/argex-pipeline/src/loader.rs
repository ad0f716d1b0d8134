//! Debate JSON files in and out.

use std::fs;
use std::path::{Path, PathBuf};

use argex_core::errors::{ArgexResult, LoadError};
use argex_core::models::Debate;

use crate::targets::{debate_id_from_name, infer_target_by_in_degree, target_from_name};
use crate::unit::DebateUnit;

pub fn parse_debate(json: &str, origin: &str) -> Result<Debate, LoadError> {
    serde_json::from_str(json).map_err(|e| LoadError::Parse {
        path: origin.to_string(),
        message: e.to_string(),
    })
}

pub fn load_debate(path: &Path) -> Result<Debate, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_debate(&content, &path.display().to_string())
}

pub fn save_debate(path: &Path, debate: &Debate) -> Result<(), LoadError> {
    let json = serde_json::to_string_pretty(debate).map_err(|e| LoadError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    fs::write(path, json).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// `.json` files directly inside `dir`, sorted by name.
pub fn list_debate_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.display().to_string(),
        source,
    })?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Ok(files)
}

/// Load a sub-debate file as a unit. The target comes from the file name;
/// when the name carries none, or names an argument the file lacks, and
/// `infer_missing_targets` is set, the in-degree guess is used instead.
pub fn load_unit(path: &Path, infer_missing_targets: bool) -> ArgexResult<DebateUnit> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let debate = load_debate(path)?;

    let named = target_from_name(&name);
    let target_id = match named {
        Some(target) if debate.contains(&target) || !infer_missing_targets => target,
        _ if infer_missing_targets => infer_target_by_in_degree(&debate)
            .ok_or_else(|| LoadError::TargetUnresolved { unit: name.clone() })?,
        _ => return Err(LoadError::TargetUnresolved { unit: name }.into()),
    };

    let unit_name = name.strip_suffix(".json").unwrap_or(&name).to_string();
    Ok(DebateUnit {
        debate_id: debate_id_from_name(&name),
        name: unit_name,
        target_id,
        debate,
    })
}
