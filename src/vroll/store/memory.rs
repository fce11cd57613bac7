use super::{RootEntry, VersionStore};
use crate::error::{Result, RollError};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Files of one directory, keyed by path relative to that directory.
pub type Tree = BTreeMap<String, Vec<u8>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Dir(Tree),
    File(Vec<u8>),
}

/// Operations that can be made to fail on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Archive,
    Remove,
    Copy,
}

/// In-memory root for testing the command layer.
/// Does NOT touch the filesystem.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    root: PathBuf,
    entries: BTreeMap<String, Node>,
    /// Archived snapshots keyed by `archive_dir/archive_name`.
    archives: BTreeMap<String, Tree>,
    fail_on: Option<StoreOp>,
    /// Every mutating call, in order, e.g. `archive 0001`.
    pub log: Vec<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("/mem"),
            ..Self::default()
        }
    }

    pub fn with_dir(mut self, name: &str, files: &[(&str, &str)]) -> Self {
        let tree = files
            .iter()
            .map(|(path, content)| (path.to_string(), content.as_bytes().to_vec()))
            .collect();
        self.entries.insert(name.to_string(), Node::Dir(tree));
        self
    }

    pub fn with_file(mut self, name: &str, content: &str) -> Self {
        self.entries
            .insert(name.to_string(), Node::File(content.as_bytes().to_vec()));
        self
    }

    pub fn failing_on(mut self, op: StoreOp) -> Self {
        self.fail_on = Some(op);
        self
    }

    pub fn dir(&self, name: &str) -> Option<&Tree> {
        match self.entries.get(name) {
            Some(Node::Dir(tree)) => Some(tree),
            _ => None,
        }
    }

    pub fn archive(&self, archive_dir: &str, archive_name: &str) -> Option<&Tree> {
        self.archives.get(&format!("{}/{}", archive_dir, archive_name))
    }

    pub fn archive_count(&self) -> usize {
        self.archives.len()
    }

    fn injected(&self, op: StoreOp) -> Option<io::Error> {
        (self.fail_on == Some(op)).then(|| io::Error::other(format!("injected {:?} failure", op)))
    }
}

impl VersionStore for InMemoryStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list_entries(&self) -> Result<Vec<RootEntry>> {
        Ok(self
            .entries
            .iter()
            .map(|(name, node)| RootEntry {
                name: name.clone(),
                is_dir: matches!(node, Node::Dir(_)),
            })
            .collect())
    }

    fn exists(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn ensure_archive_store(&mut self, archive_dir: &str) -> Result<()> {
        match self.entries.get(archive_dir) {
            Some(Node::Dir(_)) => Ok(()),
            Some(Node::File(_)) => Err(RollError::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} exists and is not a directory", archive_dir),
            ))),
            None => {
                self.log.push(format!("mkdir {}", archive_dir));
                self.entries
                    .insert(archive_dir.to_string(), Node::Dir(Tree::new()));
                Ok(())
            }
        }
    }

    fn archive_version(
        &mut self,
        name: &str,
        archive_dir: &str,
        archive_name: &str,
    ) -> Result<PathBuf> {
        let src = self.root.join(name);
        let tree = self
            .dir(name)
            .cloned()
            .ok_or_else(|| RollError::SourceMissing(src.clone()))?;
        if let Some(source) = self.injected(StoreOp::Archive) {
            return Err(RollError::Archive { path: src, source });
        }

        self.log.push(format!("archive {}", name));
        self.archives
            .insert(format!("{}/{}", archive_dir, archive_name), tree);
        Ok(self.root.join(archive_dir).join(archive_name))
    }

    fn remove_dir(&mut self, name: &str) -> Result<()> {
        let path = self.root.join(name);
        if let Some(source) = self.injected(StoreOp::Remove) {
            return Err(RollError::Remove { path, source });
        }
        if self.dir(name).is_none() {
            return Err(RollError::Remove {
                path,
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }

        self.log.push(format!("remove {}", name));
        self.entries.remove(name);
        Ok(())
    }

    fn copy_dir(&mut self, from: &str, to: &str) -> Result<()> {
        let src = self.root.join(from);
        let dst = self.root.join(to);
        let tree = self
            .dir(from)
            .cloned()
            .ok_or_else(|| RollError::SourceMissing(src.clone()))?;
        if self.exists(to) {
            return Err(RollError::DestinationExists(dst));
        }
        if let Some(source) = self.injected(StoreOp::Copy) {
            return Err(RollError::Copy {
                from: src,
                to: dst,
                source,
            });
        }

        self.log.push(format!("copy {} {}", from, to));
        self.entries.insert(to.to_string(), Node::Dir(tree));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_dirs_and_files() {
        let store = InMemoryStore::new()
            .with_dir("1", &[("a", "x")])
            .with_file("notes", "hello");

        let entries = store.list_entries().unwrap();
        assert_eq!(entries, vec![RootEntry::dir("1"), RootEntry::file("notes")]);
    }

    #[test]
    fn test_archive_snapshots_tree() {
        let mut store = InMemoryStore::new().with_dir("1", &[("a", "x")]);
        store.ensure_archive_store("saveit").unwrap();
        store.archive_version("1", "saveit", "0001.tar.gz").unwrap();

        let archived = store.archive("saveit", "0001.tar.gz").unwrap();
        assert_eq!(archived["a"], b"x");
    }

    #[test]
    fn test_injected_failure() {
        let mut store = InMemoryStore::new()
            .with_dir("1", &[])
            .failing_on(StoreOp::Remove);
        assert!(matches!(
            store.remove_dir("1"),
            Err(RollError::Remove { .. })
        ));
        assert!(store.dir("1").is_some());
    }

    #[test]
    fn test_copy_refuses_existing_destination() {
        let mut store = InMemoryStore::new().with_dir("1", &[]).with_file("2", "");
        assert!(matches!(
            store.copy_dir("1", "2"),
            Err(RollError::DestinationExists(_))
        ));
    }
}
