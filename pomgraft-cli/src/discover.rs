//! Build-file discovery: folders + glob pattern, sorted and de-duplicated
//! so batch order is deterministic.

use anyhow::Context;
use camino::Utf8PathBuf;
use pomgraft_types::FileBackupInfo;
use tracing::warn;

pub fn discover_poms(
    folders: &[Utf8PathBuf],
    pattern: &str,
) -> anyhow::Result<Vec<FileBackupInfo>> {
    let mut sources: Vec<Utf8PathBuf> = Vec::new();
    for folder in folders {
        let full = folder.join(pattern);
        let entries =
            glob::glob(full.as_str()).with_context(|| format!("bad glob pattern {}", full))?;
        for entry in entries {
            match entry {
                Ok(path) => match Utf8PathBuf::from_path_buf(path) {
                    Ok(path) => sources.push(path),
                    Err(path) => warn!("skipping non-UTF-8 path {}", path.display()),
                },
                Err(err) => warn!("unreadable path while searching {}: {err}", full),
            }
        }
    }
    sources.sort();
    sources.dedup();
    Ok(sources.into_iter().map(FileBackupInfo::new).collect())
}
