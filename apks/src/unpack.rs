use crate::{Error, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use zip::ZipArchive;

/// Extracts every entry of the zip at `archive` into `dir`, keeping the
/// directory layout of the archive. Existing files are overwritten.
///
/// Returns the number of files written.
pub fn unpack(archive: &Path, dir: &Path) -> Result<usize> {
    if !archive.is_file() {
        return Err(Error::NotFound(archive.to_path_buf()));
    }
    std::fs::create_dir_all(dir).map_err(Error::io(dir))?;
    let file = File::open(archive).map_err(Error::io(archive))?;
    let mut zip =
        ZipArchive::new(BufReader::new(file)).map_err(|err| Error::zip(archive, err))?;
    let mut count = 0;
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i).map_err(|err| Error::zip(archive, err))?;
        // `..`, `.` and root components are dropped, so `../a.apk` lands in `dir/a.apk`
        let name = entry.mangled_name();
        let path = dir.join(&name);
        if entry.is_dir() {
            std::fs::create_dir_all(&path).map_err(Error::io(&path))?;
            continue;
        }
        if name.as_os_str().is_empty() {
            tracing::warn!("skipping entry without a file name: {}", entry.name());
            continue;
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(Error::io(parent))?;
        }
        tracing::debug!("extracting {} ({} bytes)", entry.name(), entry.size());
        let mut out = BufWriter::new(File::create(&path).map_err(Error::io(&path))?);
        std::io::copy(&mut entry, &mut out)
            .and_then(|_| out.flush())
            .map_err(Error::io(&path))?;
        count += 1;
    }
    Ok(count)
}
