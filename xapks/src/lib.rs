use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const DEFAULT_TEMP_DIR: &str = "./.apks_extract_tmp";

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the .apks file
    pub apks_file: PathBuf,
    /// Destination apk path, defaults to `<apks name>.apk` in the current directory
    #[clap(short, long = "output", num_args = 0..=1, value_name = "OUTPUT_APK")]
    pub output: Option<Option<OsString>>,
    /// Directory the bundle is extracted into
    #[clap(long, default_value = DEFAULT_TEMP_DIR, value_name = "TEMP_DIR")]
    pub temp_dir: PathBuf,
}

impl Args {
    /// Destination requested on the command line. A bare `-o` or an empty
    /// value counts as no destination.
    pub fn output(&self) -> Option<PathBuf> {
        self.output
            .clone()
            .flatten()
            .filter(|output| !output.is_empty())
            .map(PathBuf::from)
    }

    pub fn run(&self) -> Result<PathBuf> {
        let output = match self.output() {
            Some(output) => output,
            None => default_output(&self.apks_file, &std::env::current_dir()?)?,
        };
        let apk = apks::extract(&self.apks_file, &self.temp_dir)?;
        copy_apk(&apk, &output)
    }
}

/// `<dir>/<archive stem>.apk`
pub fn default_output(archive: &Path, dir: &Path) -> Result<PathBuf> {
    let stem = archive
        .file_stem()
        .ok_or_else(|| anyhow::anyhow!("invalid apks path {}", archive.display()))?;
    let mut name = stem.to_os_string();
    name.push(".apk");
    Ok(dir.join(name))
}

/// Copies `apk` to `dest`, replacing an existing file. When `dest` is a
/// directory the apk keeps its file name inside it.
pub fn copy_apk(apk: &Path, dest: &Path) -> Result<PathBuf> {
    let dest = if dest.is_dir() {
        let name = apk
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("invalid apk path {}", apk.display()))?;
        dest.join(name)
    } else {
        dest.to_path_buf()
    };
    std::fs::copy(apk, &dest)
        .with_context(|| format!("failed to copy {} to {}", apk.display(), dest.display()))?;
    tracing::info!("copied {} to {}", apk.display(), dest.display());
    Ok(dest)
}
