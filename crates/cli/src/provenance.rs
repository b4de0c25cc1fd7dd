use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Write `<artifact stem>.provenance.json` next to `artifact`, recording the
/// git commit, callsite, `params`, and the artifact path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>, T: Serialize>(artifact: P, params: &T) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": peripheral::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": serde_json::to_value(params)?,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash from `GIT_COMMIT` (build time, then runtime), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    commit_override(option_env!("GIT_COMMIT"), std::env::var("GIT_COMMIT").ok())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

/// First non-empty of the build-time and runtime `GIT_COMMIT` values.
fn commit_override(build: Option<&str>, runtime: Option<String>) -> Option<String> {
    build
        .filter(|rev| !rev.is_empty())
        .map(str::to_string)
        .or_else(|| runtime.filter(|rev| !rev.is_empty()))
}

fn git_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
