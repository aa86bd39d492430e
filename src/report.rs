// src/report.rs
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use tracing::warn;
use uuid::Uuid;

use crate::config::{report_file_name, RecordId};

/// A download in progress. The partial file is removed on drop unless committed.
struct PartialDownload {
    path: PathBuf,
    committed: bool,
}

impl PartialDownload {
    fn create(dir: &Path, target_name: &str) -> Result<(Self, File)> {
        let path = dir.join(format!(".{}.{}.part", target_name, Uuid::new_v4()));
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        Ok((Self { path, committed: false }, file))
    }

    fn commit(mut self, target: &Path) -> Result<()> {
        fs::rename(&self.path, target)
            .with_context(|| format!("Failed to move report to {}", target.display()))?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for PartialDownload {
    fn drop(&mut self) {
        if !self.committed {
            if let Err(e) = fs::remove_file(&self.path) {
                warn!("Failed to clean up {}: {}", self.path.display(), e);
            }
        }
    }
}

/// Writes `Report_<id>.pdf` into `dir`, replacing any earlier copy.
pub fn save_report(dir: &Path, id: RecordId, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create download directory {}", dir.display()))?;

    let target = dir.join(report_file_name(id));
    let (partial, mut file) = PartialDownload::create(dir, &report_file_name(id))?;
    write_all(&mut file, bytes)?;
    drop(file);
    partial.commit(&target)?;

    Ok(target)
}

fn write_all(file: &mut impl Write, bytes: &[u8]) -> Result<()> {
    file.write_all(bytes).context("Failed to write report")?;
    file.flush().context("Failed to write report")
}
