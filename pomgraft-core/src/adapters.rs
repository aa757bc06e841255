//! Default filesystem-backed port implementations.

use crate::ports::{BackupPort, WritePort};
use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;

/// Plain file-copy backup.
#[derive(Debug, Clone, Default)]
pub struct FsBackup;

impl BackupPort for FsBackup {
    fn backup(&self, source: &Utf8Path, target: &Utf8Path) -> anyhow::Result<()> {
        fs::copy(source, target).with_context(|| format!("copy {source} to {target}"))?;
        Ok(())
    }
}

/// Direct file writes.
#[derive(Debug, Clone, Default)]
pub struct FsWriter;

impl WritePort for FsWriter {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        fs::write(path, contents).with_context(|| format!("write {path}"))
    }
}
