use super::{RootEntry, VersionStore};
use crate::error::{Result, RollError};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl VersionStore for FsStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list_entries(&self) -> Result<Vec<RootEntry>> {
        let entries = fs::read_dir(&self.root).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => RollError::RootNotFound(self.root.clone()),
            _ => RollError::Io(e),
        })?;

        let mut listed = Vec::new();
        for entry in entries {
            let entry = entry.map_err(RollError::Io)?;
            let Ok(name) = entry.file_name().into_string() else {
                debug!(path = %entry.path().display(), "skipping non-UTF-8 entry");
                continue;
            };
            // Symlinks are not followed: a link named `3` is not a version.
            let is_dir = entry.file_type().map_err(RollError::Io)?.is_dir();
            listed.push(RootEntry { name, is_dir });
        }
        Ok(listed)
    }

    fn exists(&self, name: &str) -> bool {
        fs::symlink_metadata(self.path(name)).is_ok()
    }

    fn ensure_archive_store(&mut self, archive_dir: &str) -> Result<()> {
        let path = self.path(archive_dir);
        if !path.is_dir() {
            debug!(path = %path.display(), "creating archive store");
            fs::create_dir_all(&path).map_err(RollError::Io)?;
        }
        Ok(())
    }

    fn archive_version(
        &mut self,
        name: &str,
        archive_dir: &str,
        archive_name: &str,
    ) -> Result<PathBuf> {
        let src = self.path(name);
        if !src.is_dir() {
            return Err(RollError::SourceMissing(src));
        }

        let store_dir = self.path(archive_dir);
        let final_path = store_dir.join(archive_name);
        let partial = store_dir.join(format!("{}.partial", archive_name));
        let wrap = |source: io::Error| RollError::Archive {
            path: src.clone(),
            source,
        };

        if final_path.exists() {
            warn!(path = %final_path.display(), "replacing existing archive");
        }

        let file = File::create(&partial).map_err(wrap)?;
        if let Err(e) = write_archive(file, name, &src) {
            let _ = fs::remove_file(&partial);
            return Err(wrap(e));
        }
        fs::rename(&partial, &final_path).map_err(wrap)?;

        Ok(final_path)
    }

    fn remove_dir(&mut self, name: &str) -> Result<()> {
        let path = self.path(name);
        fs::remove_dir_all(&path).map_err(|source| RollError::Remove { path, source })
    }

    fn copy_dir(&mut self, from: &str, to: &str) -> Result<()> {
        let src = self.path(from);
        let dst = self.path(to);

        if !src.is_dir() {
            return Err(RollError::SourceMissing(src));
        }
        if fs::symlink_metadata(&dst).is_ok() {
            return Err(RollError::DestinationExists(dst));
        }

        copy_tree(&src, &dst).map_err(|source| RollError::Copy {
            from: src.clone(),
            to: dst.clone(),
            source,
        })
    }
}

/// Streams `dir` into `writer` as a gzipped tarball whose entries live under `entry_root/`.
pub fn write_archive<W: Write>(writer: W, entry_root: &str, dir: &Path) -> io::Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);
    tar.follow_symlinks(false);

    tar.append_dir_all(entry_root, dir)?;

    let enc = tar.into_inner()?;
    let mut writer = enc.finish()?;
    writer.flush()
}

fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir(dst)?;

    // Directory permissions are applied last so read-only dirs can still be filled.
    let mut dirs = vec![(src.to_path_buf(), dst.to_path_buf())];

    for entry in WalkDir::new(src).min_depth(1).follow_links(false) {
        let entry = entry?;
        let rel = entry.path().strip_prefix(src).map_err(io::Error::other)?;
        let target = dst.join(rel);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir(&target)?;
            dirs.push((entry.path().to_path_buf(), target));
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }

    for (from, to) in dirs.iter().rev() {
        let perms = fs::metadata(from)?.permissions();
        fs::set_permissions(to, perms)?;
    }

    Ok(())
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dst: &Path) -> io::Result<()> {
    let target = fs::read_link(src)?;
    std::os::unix::fs::symlink(target, dst)
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dst: &Path) -> io::Result<()> {
    if src.is_dir() {
        copy_tree(src, dst)
    } else {
        fs::copy(src, dst).map(|_| ())
    }
}
