//! Item copying with rename-vs-directory destination semantics

use super::ScopeItem;
use crate::error::CopyError;
use crate::fs;
use std::path::{Path, PathBuf};

/// What a copy did: files written and targets left alone because they existed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub copied: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl CopyReport {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Copied(path) => self.copied.push(path),
            Outcome::Skipped(path) => self.skipped.push(path),
        }
    }
}

enum Outcome {
    Copied(PathBuf),
    Skipped(PathBuf),
}

/// Copy a catalog item to `destination`
///
/// - Items without a manifest are a single file.
/// - Manifest items resolve their `files` list; more than one file is copied under
///   `destination/<item name>/`, exactly one falls back to single-file semantics.
/// - Existing targets are never overwritten; they are recorded as skipped.
pub fn copy_item(item: &ScopeItem, destination: &Path) -> Result<CopyReport, CopyError> {
    let mut report = CopyReport::default();

    if !item.has_manifest() {
        report.record(copy_single_file(&item.path, destination)?);
        return Ok(report);
    }

    let files = list_item_files(item)?;
    match files.as_slice() {
        [] => Err(CopyError::NoFiles {
            item: item.name.clone(),
        }),
        [file] => {
            report.record(copy_single_file(&item.path.join(file), destination)?);
            Ok(report)
        }
        _ => {
            let target_root = destination.join(&item.name);
            for file in &files {
                report.record(copy_package_file(&item.path, file, &target_root)?);
            }
            Ok(report)
        }
    }
}

/// Flattened list of files declared by an item's manifest, relative to the item
///
/// Directory entries expand to the files directly inside them (one level).
pub fn list_item_files(item: &ScopeItem) -> Result<Vec<PathBuf>, CopyError> {
    let declared = item
        .package
        .as_ref()
        .and_then(|p| p.files.as_deref())
        .unwrap_or_default();

    let mut files = Vec::new();
    for entry in declared {
        let entry_path = item.path.join(entry);
        if !entry_path.is_dir() {
            files.push(PathBuf::from(entry));
            continue;
        }

        let children = fs::list_dir_all(&entry_path).map_err(|source| CopyError::ReadDir {
            path: entry_path.clone(),
            source,
        })?;
        files.extend(
            children
                .iter()
                .filter(|child| !child.path().is_dir())
                .map(|child| Path::new(entry).join(child.file_name())),
        );
    }

    Ok(files)
}

/// Where a single file lands: the destination itself when it names a file to
/// create, otherwise the destination treated as a directory
fn single_file_target(source: &Path, destination: &Path) -> PathBuf {
    let rename = fs::has_extension(destination) && !destination.is_dir();
    match source.file_name() {
        Some(file_name) if !rename => destination.join(file_name),
        _ => destination.to_path_buf(),
    }
}

fn copy_single_file(source: &Path, destination: &Path) -> Result<Outcome, CopyError> {
    if source.is_dir() {
        return Err(CopyError::NotAFile {
            path: source.to_path_buf(),
        });
    }

    let target = single_file_target(source, destination);
    if target.exists() {
        return Ok(Outcome::Skipped(target));
    }

    copy_file(source, &target)?;
    Ok(Outcome::Copied(target))
}

fn copy_package_file(
    item_root: &Path,
    relative: &Path,
    target_root: &Path,
) -> Result<Outcome, CopyError> {
    let source = item_root.join(relative);
    let target = target_root.join(relative);

    if target.exists() {
        return Ok(Outcome::Skipped(target));
    }

    copy_file(&source, &target)?;
    Ok(Outcome::Copied(target))
}

fn copy_file(source: &Path, target: &Path) -> Result<(), CopyError> {
    fs::ensure_parent_dir(target)?;
    std::fs::copy(source, target)
        .map(|_| ())
        .map_err(|source_err| CopyError::Copy {
            from: source.to_path_buf(),
            to: target.to_path_buf(),
            source: source_err,
        })
}
