use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// The outcome of scanning the paths given on the command line.
#[derive(Debug, Default)]
pub(crate) struct DiscoveredFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped_entries: usize,
    pub walk_errors: Vec<walkdir::Error>,
}

/// Turns `graphql` and `.graphql` alike into `.graphql`.
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| {
            if !ext.starts_with('.') {
                format!(".{ext}")
            } else {
                ext.to_owned()
            }
        })
        .collect()
}

/// Finds every file at or under each of `paths` whose extension is in
/// `exts`.
///
/// If nothing matched and exactly one path was given and it is a file, that
/// file is returned regardless of its extension: naming a single file is
/// taken as asking for it explicitly.
pub(crate) fn discover(paths: &[PathBuf], exts: &HashSet<String>) -> DiscoveredFiles {
    log::debug!("Scanning {} input paths...", paths.len());
    let mut discovered = DiscoveredFiles::default();

    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if !entry.file_type().is_file() {
                        log::trace!("Skipping non-file: {path:#?}.");
                        continue;
                    }
                    let matches_ext = path
                        .extension()
                        .map(|ext| format!(".{}", ext.to_string_lossy()))
                        .is_some_and(|ext| exts.contains(&ext));
                    if matches_ext {
                        log::trace!("Found query file at {path:#?}.");
                        discovered.file_paths.push(path.to_path_buf());
                    } else {
                        log::trace!("Skipping file with another extension: {path:#?}.");
                        discovered.num_skipped_entries += 1;
                    }
                },

                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    discovered.walk_errors.push(e);
                },
            }
        }
    }

    if discovered.file_paths.is_empty()
        && let [only_path] = paths
        && only_path.is_file() {
        log::warn!(
            "Proceeding to check {only_path:#?} even though it doesn't match \
            any of the --graphql-file-exts ({}).",
            exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        discovered.num_skipped_entries = discovered.num_skipped_entries.saturating_sub(1);
        discovered.file_paths.push(only_path.clone());
    }

    discovered.file_paths.sort();
    discovered.file_paths.dedup();
    log::debug!("Found {} query files to check.", discovered.file_paths.len());
    discovered
}

/// Reads `path` as UTF-8, refusing files over `max_bytes` before reading
/// them.
pub(crate) fn read_source(path: &Path, max_bytes: u64) -> anyhow::Result<String> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?;
    if metadata.len() > max_bytes {
        anyhow::bail!(
            "{} is {} bytes, over the --max-source-bytes limit of {max_bytes}",
            path.display(),
            metadata.len(),
        );
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "querydoc-{name}-{}",
            std::process::id(),
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        dir
    }

    #[test]
    fn exts_are_normalized() {
        let exts = normalize_exts(&["graphql".to_string(), ".gql".to_string()]);
        assert!(exts.contains(".graphql"));
        assert!(exts.contains(".gql"));
        assert_eq!(exts.len(), 2);
    }

    #[test]
    fn discovers_matching_files_recursively() {
        let dir = scratch_dir("discover");
        std::fs::write(dir.join("a.graphql"), "{ a }").unwrap();
        std::fs::write(dir.join("nested/b.gql"), "{ b }").unwrap();
        std::fs::write(dir.join("nested/readme.md"), "docs").unwrap();

        let exts = normalize_exts(&["graphql".to_string(), "gql".to_string()]);
        let discovered = discover(std::slice::from_ref(&dir), &exts);

        assert_eq!(
            discovered.file_paths,
            vec![dir.join("a.graphql"), dir.join("nested/b.gql")],
        );
        assert_eq!(discovered.num_skipped_entries, 1);
        assert!(discovered.walk_errors.is_empty());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn single_file_is_taken_regardless_of_ext() {
        let dir = scratch_dir("single");
        let path = dir.join("query.txt");
        std::fs::write(&path, "{ a }").unwrap();

        let exts = normalize_exts(&["graphql".to_string()]);
        let discovered = discover(std::slice::from_ref(&path), &exts);

        assert_eq!(discovered.file_paths, vec![path]);
        assert_eq!(discovered.num_skipped_entries, 0);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn oversized_sources_are_refused() {
        let dir = scratch_dir("oversized");
        let path = dir.join("big.graphql");
        std::fs::write(&path, "{ field }").unwrap();

        assert_eq!(read_source(&path, 64).unwrap(), "{ field }");
        let err = read_source(&path, 4).unwrap_err();
        assert!(err.to_string().contains("over the --max-source-bytes limit of 4"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
