//! Catalog reading from a scopes directory

use super::inflect::singular;
use super::manifest::ItemManifest;
use super::{Scope, ScopeItem};
use crate::{fs, ui, MANIFEST_FILE};
use anyhow::{Context, Result};
use std::path::Path;

/// Read every scope under `scopes_dir`
///
/// Items with a broken manifest (invalid JSON or no `name`) are dropped with an
/// error line; they never fail the whole read.
pub fn read_scopes(scopes_dir: &Path) -> Result<Vec<Scope>> {
    let entries = fs::list_dir(scopes_dir)
        .with_context(|| format!("Failed to read scopes directory {}", scopes_dir.display()))?;

    let mut scopes = Vec::new();
    for entry in entries.into_iter().filter(|e| e.path().is_dir()) {
        let scope_path = entry.into_path();
        let dir_name = scope_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let items = read_scope_items(&scope_path)?;
        scopes.push(Scope {
            name: singular(&dir_name),
            path: scope_path,
            items,
        });
    }

    Ok(scopes)
}

fn read_scope_items(scope_path: &Path) -> Result<Vec<ScopeItem>> {
    let entries = fs::list_dir(scope_path)
        .with_context(|| format!("Failed to read scope {}", scope_path.display()))?;

    let mut items = Vec::new();
    for entry in entries {
        let item_path = entry.into_path();
        let manifest_path = item_path.join(MANIFEST_FILE);

        if !manifest_path.exists() {
            let name = item_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            items.push(ScopeItem {
                name,
                path: item_path,
                package: None,
            });
            continue;
        }

        match ItemManifest::read(&manifest_path) {
            Ok(manifest) => items.push(ScopeItem {
                name: manifest.name.clone(),
                path: item_path,
                package: Some(manifest),
            }),
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn mkdir(path: &Path) {
        std::fs::create_dir_all(path).unwrap();
    }

    #[test]
    fn test_reads_empty_scope() {
        let tmp = TempDir::new().unwrap();
        mkdir(&tmp.path().join("tests"));

        let scopes = read_scopes(tmp.path()).unwrap();

        assert_eq!(scopes.len(), 1);
        assert_eq!(scopes[0].name, "test");
        assert_eq!(scopes[0].path, tmp.path().join("tests"));
        assert!(scopes[0].items.is_empty());
    }

    #[test]
    fn test_reads_file_and_directory_items() {
        let tmp = TempDir::new().unwrap();
        let scope = tmp.path().join("hooks");
        mkdir(&scope.join("useToggle"));
        std::fs::write(scope.join("useClickAway.ts"), "").unwrap();

        let scopes = read_scopes(tmp.path()).unwrap();
        let items = &scopes[0].items;

        assert_eq!(scopes[0].name, "hook");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "useClickAway.ts");
        assert_eq!(items[0].path, scope.join("useClickAway.ts"));
        assert_eq!(items[1].name, "useToggle");
        assert!(items.iter().all(|i| i.package.is_none()));
    }

    #[test]
    fn test_manifest_name_overrides_directory_name() {
        let tmp = TempDir::new().unwrap();
        let item_dir = tmp.path().join("components/button-dir");
        mkdir(&item_dir);
        std::fs::write(
            item_dir.join("package.json"),
            r#"{ "name": "Button", "files": ["Button.tsx"] }"#,
        )
        .unwrap();

        let scopes = read_scopes(tmp.path()).unwrap();
        let item = &scopes[0].items[0];

        assert_eq!(item.name, "Button");
        assert_eq!(item.path, item_dir);
        assert_eq!(item.package.as_ref().map(|p| p.name.as_str()), Some("Button"));
    }

    #[test]
    fn test_invalid_manifests_are_skipped() {
        let tmp = TempDir::new().unwrap();
        let scope = tmp.path().join("components");

        for (dir, manifest) in [
            ("A", Some(r#"{ "name": "A" }"#)),
            ("B", Some(r#"{ "files": ["b.tsx"] }"#)),
            ("C", Some("not json")),
            ("D", None),
        ] {
            mkdir(&scope.join(dir));
            if let Some(content) = manifest {
                std::fs::write(scope.join(dir).join("package.json"), content).unwrap();
            }
        }

        let scopes = read_scopes(tmp.path()).unwrap();
        let names: Vec<&str> = scopes[0].item_names();

        assert_eq!(names, vec!["A", "D"]);
    }

    #[test]
    fn test_scopes_in_name_order_and_files_ignored() {
        let tmp = TempDir::new().unwrap();
        mkdir(&tmp.path().join("hooks"));
        mkdir(&tmp.path().join("components"));
        std::fs::write(tmp.path().join("README.md"), "").unwrap();

        let scopes = read_scopes(tmp.path()).unwrap();
        let names: Vec<&str> = scopes.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names, vec!["component", "hook"]);
    }

    #[test]
    fn test_deeply_nested_root() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("deep/nested");
        mkdir(&root.join("test/dir-item"));

        let scopes = read_scopes(&root).unwrap();

        assert_eq!(scopes[0].name, "test");
        assert_eq!(scopes[0].items[0].path, root.join("test/dir-item"));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        assert!(read_scopes(&PathBuf::from("/nonexistent/kumpan/scopes")).is_err());
    }
}
