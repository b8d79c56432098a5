//! Provenance sidecars: `pair.json` gets a `pair.provenance.json` neighbour.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to a result file.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self { params, tag: None }
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// Sidecar document. Also printed by `cli report` with no params or outputs.
#[derive(Serialize)]
pub struct Record {
    code_rev: String,
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    callsite: Option<Callsite>,
    tag: Option<String>,
    params: Value,
    outputs: Vec<String>,
}

impl Record {
    /// Record for the current build with empty params and no outputs.
    pub fn bare(tag: Option<String>) -> Self {
        Self {
            code_rev: current_git_rev(),
            version: closest::VERSION,
            callsite: None,
            tag,
            params: Value::Object(Default::default()),
            outputs: Vec::new(),
        }
    }
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let caller = Location::caller();
    let record = Record {
        callsite: Some(Callsite {
            file: caller.file(),
            line: caller.line(),
        }),
        params: payload.params,
        outputs: vec![artifact.display().to_string()],
        ..Record::bare(payload.tag)
    };

    let path = sidecar_path(artifact);
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .with_context(|| format!("creating provenance dir {}", dir.display()))?,
        _ => {}
    }
    fs::write(&path, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "artifact".into(), |s| s.to_string_lossy());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (compile time, then runtime), else `git rev-parse HEAD`, else `unknown`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .into_iter()
        .chain(std::env::var("GIT_COMMIT").ok())
        .find(|rev| !rev.is_empty());
    from_env
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_owned())
}
