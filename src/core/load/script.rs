//! Script source collection.
//!
//! The root set builder searches the raw, uncompiled gameplay script for
//! object ids. This module gathers that text: walk the configured script
//! root, keep files matching the include patterns, drop ignored paths, and
//! read everything into one blob. Reads run in parallel; files that cannot
//! be read are reported as warnings, not errors.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::core::load::map_data::LoadWarning;

/// The concatenated script text plus scan bookkeeping.
#[derive(Debug, Default)]
pub struct ScriptBlob {
    pub text: String,
    pub file_count: usize,
    pub warnings: Vec<LoadWarning>,
}

/// Collect script text under `script_root`.
///
/// `includes` and `ignores` are glob patterns matched against the path
/// relative to `script_root`. An empty `includes` list matches nothing,
/// which disables script rooting entirely.
pub fn collect_script(script_root: &Path, includes: &[String], ignores: &[String]) -> Result<ScriptBlob> {
    if includes.is_empty() {
        return Ok(ScriptBlob::default());
    }
    if !script_root.exists() {
        anyhow::bail!("Script root does not exist: {:?}", script_root);
    }

    let include_patterns = compile_patterns(includes, "scriptIncludes")?;
    let ignore_patterns = compile_patterns(ignores, "ignores")?;

    let mut files: Vec<_> = WalkDir::new(script_root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let relative = entry
                .path()
                .strip_prefix(script_root)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .replace('\\', "/");
            let included = include_patterns.iter().any(|p| p.matches(&relative));
            let ignored = ignore_patterns.iter().any(|p| p.matches(&relative));
            (included && !ignored).then(|| entry.into_path())
        })
        .collect();

    // Deterministic read order so the blob (and any warning order) is stable
    files.sort();

    let results: Vec<std::result::Result<String, LoadWarning>> = files
        .par_iter()
        .map(|path| {
            fs::read_to_string(path).map_err(|err| LoadWarning {
                file_path: path.to_string_lossy().to_string(),
                message: format!("Failed to read script file: {}", err),
            })
        })
        .collect();

    let mut blob = ScriptBlob::default();
    for result in results {
        match result {
            Ok(text) => {
                blob.file_count += 1;
                blob.text.push_str(&text);
                blob.text.push('\n');
            }
            Err(warning) => blob.warnings.push(warning),
        }
    }

    Ok(blob)
}

fn compile_patterns(patterns: &[String], what: &str) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in '{}': \"{}\"", what, pattern))
        })
        .collect()
}
