use crate::commands::CmdResult;
use crate::config::RollConfig;
use crate::error::Result;
use crate::model::{padded_label, VersionDir, VersionSet};
use crate::store::VersionStore;
use tracing::debug;

use super::CmdMessage;

/// Collects the version directories under the store's root.
///
/// The archive store is never a candidate. Entries that are not directories or
/// whose names are not plain digits are skipped without complaint.
pub fn versions<S: VersionStore>(store: &S, config: &RollConfig) -> Result<VersionSet> {
    let mut dirs = Vec::new();

    for entry in store.list_entries()? {
        if entry.name == config.archive_dir {
            continue;
        }
        if !entry.is_dir {
            debug!(name = %entry.name, "skipping non-directory entry");
            continue;
        }
        match VersionDir::parse(&entry.name) {
            Some(dir) => dirs.push(dir),
            None => debug!(name = %entry.name, "skipping non-version entry"),
        }
    }

    VersionSet::from_dirs(dirs)
}

/// Lists the version directories, lowest first.
pub fn run<S: VersionStore>(store: &S, config: &RollConfig) -> Result<CmdResult> {
    let set = versions(store, config)?;
    if set.is_empty() {
        return Ok(CmdResult::no_versions());
    }

    let mut result = CmdResult::default().with_versions(set.iter().cloned().collect());
    for dir in set.iter() {
        result.add_message(CmdMessage::info(format!(
            "{:<8} {}",
            dir.name,
            padded_label(dir.version, config.label_width)
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::RollOutcome;
    use crate::error::RollError;
    use crate::store::memory::InMemoryStore;

    fn names(set: &VersionSet) -> Vec<&str> {
        set.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_versions_filters_non_numeric_entries() {
        let store = InMemoryStore::new()
            .with_dir("0002", &[])
            .with_dir("notes", &[])
            .with_dir("v1", &[])
            .with_dir("-3", &[])
            .with_dir("0010", &[])
            .with_dir("saveit", &[]);

        let set = versions(&store, &RollConfig::default()).unwrap();
        assert_eq!(names(&set), vec!["0002", "0010"]);
    }

    #[test]
    fn test_versions_skips_numeric_files() {
        let store = InMemoryStore::new()
            .with_dir("1", &[])
            .with_file("2", "not a dir");

        let set = versions(&store, &RollConfig::default()).unwrap();
        assert_eq!(names(&set), vec!["1"]);
    }

    #[test]
    fn test_versions_respects_configured_archive_dir() {
        let store = InMemoryStore::new().with_dir("1", &[]).with_dir("9", &[]);
        let config = RollConfig {
            archive_dir: "9".to_string(),
            ..RollConfig::default()
        };

        let set = versions(&store, &config).unwrap();
        assert_eq!(names(&set), vec!["1"]);
    }

    #[test]
    fn test_versions_reports_duplicates() {
        let store = InMemoryStore::new().with_dir("4", &[]).with_dir("0004", &[]);
        assert!(matches!(
            versions(&store, &RollConfig::default()),
            Err(RollError::DuplicateVersion { version: 4, .. })
        ));
    }

    #[test]
    fn test_run_lists_with_labels() {
        let store = InMemoryStore::new().with_dir("12", &[]).with_dir("3", &[]);
        let result = run(&store, &RollConfig::default()).unwrap();

        assert_eq!(result.versions.len(), 2);
        assert_eq!(result.messages[0].content, "3        0003");
        assert_eq!(result.messages[1].content, "12       0012");
    }

    #[test]
    fn test_run_on_empty_root() {
        let store = InMemoryStore::new().with_file("readme", "");
        let result = run(&store, &RollConfig::default()).unwrap();
        assert_eq!(result.outcome, Some(RollOutcome::Aborted));
        assert_eq!(result.messages[0].content, "Not in a valid versioning dir");
    }
}
