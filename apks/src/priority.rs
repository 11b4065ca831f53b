use std::path::{Path, PathBuf};

/// Preference of an apk inside a split bundle, best first.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Priority {
    /// `*universal*`, a standalone apk containing every split.
    Universal = 0,
    /// `*base-master*`
    BaseMaster = 1,
    /// exactly `base.apk`
    Base = 2,
    Other = 3,
}

impl Priority {
    pub fn of(path: &Path) -> Self {
        let name = file_name_lowercase(path);
        if name.contains("universal") {
            Self::Universal
        } else if name.contains("base-master") {
            Self::BaseMaster
        } else if name == "base.apk" {
            Self::Base
        } else {
            Self::Other
        }
    }

    pub fn rank(self) -> u8 {
        self as u8
    }
}

/// Returns true if the file name ends with `.apk`, ignoring case.
pub fn is_apk(path: &Path) -> bool {
    file_name_lowercase(path).ends_with(".apk")
}

/// Picks the best candidate. Candidates of equal priority keep their order.
pub fn select(mut candidates: Vec<PathBuf>) -> Option<PathBuf> {
    candidates.sort_by_key(|path| Priority::of(path));
    candidates.into_iter().next()
}

fn file_name_lowercase(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
