use crate::error::{Result, RollError};

pub const DEFAULT_LABEL_WIDTH: usize = 4;
pub const ARCHIVE_EXT: &str = ".tar.gz";

/// Zero-pads `version` to `width` digits. Wider numbers keep their natural form.
pub fn padded_label(version: u64, width: usize) -> String {
    format!("{:0width$}", version, width = width)
}

/// Parses a directory name as a version number.
///
/// Only plain ASCII digits are accepted: signs, whitespace and anything that
/// overflows a `u64` are not versions.
pub fn parse_version(name: &str) -> Option<u64> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}

/// A version directory as found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDir {
    pub version: u64,
    /// The entry name, which may carry leading zeros (`0005`).
    pub name: String,
}

impl VersionDir {
    pub fn parse(name: &str) -> Option<Self> {
        parse_version(name).map(|version| Self {
            version,
            name: name.to_string(),
        })
    }

    pub fn is_padded(&self) -> bool {
        self.name.len() > self.version.to_string().len()
    }

    /// Name for `version` written in the same style as this directory.
    pub fn sibling_name(&self, version: u64) -> String {
        if self.is_padded() {
            padded_label(version, self.name.len())
        } else {
            version.to_string()
        }
    }
}

/// The ascending, duplicate-free set of version directories under a root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionSet {
    dirs: Vec<VersionDir>,
}

impl VersionSet {
    pub fn from_dirs(mut dirs: Vec<VersionDir>) -> Result<Self> {
        dirs.sort_by(|a, b| a.version.cmp(&b.version).then_with(|| a.name.cmp(&b.name)));

        if let Some(pair) = dirs.windows(2).find(|w| w[0].version == w[1].version) {
            return Err(RollError::DuplicateVersion {
                version: pair[0].version,
                first: pair[0].name.clone(),
                second: pair[1].name.clone(),
            });
        }

        Ok(Self { dirs })
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    pub fn lowest(&self) -> Option<&VersionDir> {
        self.dirs.first()
    }

    pub fn highest(&self) -> Option<&VersionDir> {
        self.dirs.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VersionDir> {
        self.dirs.iter()
    }
}

/// Everything one roll will touch, resolved before anything is mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollPlan {
    pub lowest: VersionDir,
    pub highest: VersionDir,
    pub next: u64,
    /// Directory name the copy of `highest` is created under.
    pub next_name: String,
    /// File name of the archive inside the archive store.
    pub archive_name: String,
}

impl RollPlan {
    /// Returns `None` for an empty set.
    pub fn from_set(set: &VersionSet, label_width: usize) -> Result<Option<Self>> {
        let (Some(lowest), Some(highest)) = (set.lowest(), set.highest()) else {
            return Ok(None);
        };

        let next = highest
            .version
            .checked_add(1)
            .ok_or(RollError::NoSuccessor(highest.version))?;

        let lowest_label = padded_label(lowest.version, label_width);
        Ok(Some(Self {
            lowest: lowest.clone(),
            highest: highest.clone(),
            next,
            archive_name: format!("{}{}", lowest_label, ARCHIVE_EXT),
            next_name: highest.sibling_name(next),
        }))
    }

    pub fn is_single(&self) -> bool {
        self.lowest.version == self.highest.version
    }
}
