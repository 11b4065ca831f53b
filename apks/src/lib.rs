use std::path::{Path, PathBuf};
use walkdir::WalkDir;

mod error;
mod priority;
mod unpack;

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::priority::{is_apk, select, Priority};
pub use crate::unpack::unpack;

/// Unpacks the `.apks` bundle at `archive` into `dir` and returns the path
/// of the most suitable apk among the extracted files.
///
/// `dir` is left in place afterwards.
pub fn extract(archive: &Path, dir: &Path) -> Result<PathBuf> {
    let _span = tracing::info_span!("extract", archive = %archive.display()).entered();
    let count = unpack(archive, dir)?;
    tracing::debug!("unpacked {} files into {}", count, dir.display());
    let candidates = find_candidates(dir)?;
    let apk = select(candidates).ok_or(Error::NoApk)?;
    tracing::info!(
        "selected {} (rank {})",
        apk.display(),
        Priority::of(&apk).rank()
    );
    Ok(apk)
}

/// Recursively collects every `.apk` file below `dir`.
///
/// Files of a directory are listed before the contents of its
/// subdirectories, each group ordered by file name. Unreadable entries
/// below `dir` are skipped, only a failure to read `dir` itself is an error.
pub fn find_candidates(dir: &Path) -> Result<Vec<PathBuf>> {
    let walk = WalkDir::new(dir).sort_by(|a, b| {
        a.file_type()
            .is_dir()
            .cmp(&b.file_type().is_dir())
            .then_with(|| a.file_name().cmp(b.file_name()))
    });
    let mut candidates = vec![];
    for entry in walk {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(Error::walk(dir, err)),
            Err(err) => {
                tracing::warn!("skipping {}", err);
                continue;
            }
        };
        if entry.file_type().is_file() && is_apk(entry.path()) {
            tracing::debug!("candidate {}", entry.path().display());
            candidates.push(entry.into_path());
        }
    }
    Ok(candidates)
}
