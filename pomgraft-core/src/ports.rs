//! Port traits abstracting all side effects away from the pipeline.

use camino::Utf8Path;

/// Copies a POM aside before it is mutated.
pub trait BackupPort {
    fn backup(&self, source: &Utf8Path, target: &Utf8Path) -> anyhow::Result<()>;
}

/// Persists a mutated POM.
pub trait WritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
}
