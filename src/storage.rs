//! Persistence of samples as JSON documents.
//!
//! Layout on disk:
//!
//! ```text
//! <root>/                         root, `~/gpr20_data` by default
//!   <survey_dir>/                 one directory per survey
//!     X001.50_Y002.25_Z000.00.json
//!     ...
//! ```
//!
//! Directories are created on first use and never removed. File names are
//! derived from the coordinates alone, so two samples that agree to two
//! decimals on every axis share a file and the later write wins.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use log::{debug, info};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::data::model::Sample;
use crate::error::{PipelineError, Result};

/// Name of the data root inside the user's home directory.
pub const DATA_DIR_NAME: &str = "gpr20_data";

/// Where samples are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub root: PathBuf,
}

impl StorageConfig {
    /// `<home>/gpr20_data`.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(PipelineError::NoHomeDir)?;
        Ok(Self::with_root(home.join(DATA_DIR_NAME)))
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Create `path` unless it already exists as a directory.
///
/// Another writer creating the same directory between our check and our
/// `mkdir` shows up as `AlreadyExists` and counts as success.
pub fn ensure_dir(path: &Path) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => {
            debug!("created directory {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(PipelineError::filesystem(path, e)),
    }
}

/// Validate `survey_dir` and split it into plain path components.
fn survey_components(survey_dir: &str) -> Result<Vec<&std::ffi::OsStr>> {
    let invalid = || PipelineError::InvalidSurveyDir(survey_dir.to_string());

    let components = Path::new(survey_dir)
        .components()
        .map(|c| match c {
            Component::Normal(name) => Ok(name),
            _ => Err(invalid()),
        })
        .collect::<Result<Vec<_>>>()?;

    if components.is_empty() {
        return Err(invalid());
    }
    Ok(components)
}

/// Ensure `<root>/<survey_dir>` exists and return it.
pub fn ensure_survey_dir(config: &StorageConfig, survey_dir: &str) -> Result<PathBuf> {
    let components = survey_components(survey_dir)?;

    ensure_dir(&config.root)?;
    let mut path = config.root.clone();
    for name in components {
        path.push(name);
        ensure_dir(&path)?;
    }
    Ok(path)
}

/// `X<x>_Y<y>_Z<z>.json`, each coordinate zero-padded to width 6 with two
/// decimals: `3.1` → `003.10`, `-12.345` → `-12.35`.
pub fn sample_file_name(x: f64, y: f64, z: f64) -> String {
    format!("X{x:06.2}_Y{y:06.2}_Z{z:06.2}.json")
}

/// Serialize `sample` with four-space indentation.
pub fn to_json(sample: &Sample) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    sample.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `sample` under `<root>/<survey_dir>/`, returning the file path.
///
/// The document is serialized before anything touches the disk. An
/// existing file with the same name is truncated and replaced.
pub fn store_sample(config: &StorageConfig, survey_dir: &str, sample: &Sample) -> Result<PathBuf> {
    let body = to_json(sample)?;
    let dir = ensure_survey_dir(config, survey_dir)?;

    let path = dir.join(sample_file_name(
        sample.x_coord,
        sample.y_coord,
        sample.z_coord,
    ));
    if path.exists() {
        debug!("overwriting {}", path.display());
    }
    fs::write(&path, &body).map_err(|e| PipelineError::filesystem(&path, e))?;

    info!(
        "stored sample {} ({} points) at {}",
        sample.sample_id,
        sample.data.len(),
        path.display()
    );
    Ok(path)
}
