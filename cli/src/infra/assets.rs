//! Embedded sample apps: compiled into the binary from `sample-apps/`.
//!
//! Each sample app lives in `sample-apps/<kind>/` and is extracted into a
//! temporary directory on demand.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use include_dir::{Dir, include_dir};

use crate::application::ports::AssetProvider;
use crate::domain::SampleAppKind;

static SAMPLE_APPS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/sample-apps");

/// A sample app extracted to disk.
///
/// The directory is deleted when this value is dropped.
pub struct ExtractedApp {
    path: PathBuf,
    _guard: tempfile::TempDir,
}

impl AsRef<Path> for ExtractedApp {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// `AssetProvider` backed by the sample apps embedded at build time.
pub struct EmbeddedAssets;

impl AssetProvider for EmbeddedAssets {
    type Payload = ExtractedApp;

    fn provide(&self, kind: SampleAppKind) -> Result<ExtractedApp> {
        let name = kind.asset_dir();
        let dir = SAMPLE_APPS_DIR
            .get_dir(name)
            .ok_or_else(|| anyhow::anyhow!("embedded sample app not found: {name}"))?;

        let guard = tempfile::Builder::new()
            .prefix("gonut-")
            .tempdir()
            .context("creating temp dir for sample app")?;
        // Entry paths are relative to `sample-apps/`, so files land in `<tmp>/<name>/`.
        dir.extract(guard.path())
            .with_context(|| format!("extracting {name} sample app"))?;

        Ok(ExtractedApp {
            path: guard.path().join(name),
            _guard: guard,
        })
    }
}

/// List the files of an embedded sample app, relative to its root.
///
/// # Errors
///
/// Returns an error if no sample app is embedded for `kind`.
pub fn list_files(kind: SampleAppKind) -> Result<Vec<PathBuf>> {
    let name = kind.asset_dir();
    let dir = SAMPLE_APPS_DIR
        .get_dir(name)
        .ok_or_else(|| anyhow::anyhow!("embedded sample app not found: {name}"))?;
    let mut files = Vec::new();
    collect_files(dir, Path::new(name), &mut files);
    files.sort();
    Ok(files)
}

fn collect_files(dir: &Dir<'_>, root: &Path, out: &mut Vec<PathBuf>) {
    for file in dir.files() {
        if let Ok(rel) = file.path().strip_prefix(root) {
            out.push(rel.to_path_buf());
        }
    }
    for sub in dir.dirs() {
        collect_files(sub, root, out);
    }
}
