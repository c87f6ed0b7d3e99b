//! Package manager detection for a host project

use crate::scopes::PackageJson;
use crate::{fs, MANIFEST_FILE};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    /// Lockfile detection order
    pub const ALL: [PackageManager; 3] = [
        PackageManager::Pnpm,
        PackageManager::Npm,
        PackageManager::Yarn,
    ];

    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    pub fn lockfile(&self) -> &'static str {
        match self {
            PackageManager::Npm => "package-lock.json",
            PackageManager::Pnpm => "pnpm-lock.yaml",
            PackageManager::Yarn => "yarn.lock",
        }
    }

    /// Subcommand that adds packages to the project
    pub fn install_verb(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "add",
            PackageManager::Npm | PackageManager::Pnpm => "install",
        }
    }

    pub fn dev_flag(&self) -> &'static str {
        "-D"
    }

    /// Parse a `packageManager` field such as `"pnpm@9.1.0"`
    pub fn from_declaration(declaration: &str) -> Option<Self> {
        let name = declaration.split('@').next().unwrap_or(declaration);
        Self::ALL.into_iter().find(|pm| pm.command() == name.trim())
    }

    /// Manager whose lockfile sits in `dir`, first in detection order
    pub fn from_lockfile(dir: &Path) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|pm| dir.join(pm.lockfile()).is_file())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// Find the package manager and nearest manifest for a destination path
///
/// The search starts in the directory containing `destination` (the current
/// directory for `.` or a bare relative name) and walks up to
/// the nearest `package.json`. That manifest's `packageManager` field wins, then
/// a lockfile beside it. Failing both, the manager is inherited from an ancestor
/// workspace root while the dependency data still comes from the nearest manifest.
pub fn identify_package_manager(destination: &Path) -> Option<(PackageManager, PackageJson)> {
    let start = search_start(destination).ok()?;

    let manifest_path = find_manifest(&start)?;
    let manifest = PackageJson::read(&manifest_path).ok()?;
    let manifest_dir = manifest_path.parent()?;

    let manager =
        declared_manager(manifest_dir, &manifest).or_else(|| inherited_manager(manifest_dir))?;
    Some((manager, manifest))
}

/// Lexical parent of `destination`, resolved against the current directory
///
/// A trailing `.` names the directory itself, so `.` and `app/.` start there.
fn search_start(destination: &Path) -> io::Result<PathBuf> {
    let raw = destination.to_string_lossy();
    if raw == "." || raw.ends_with("/.") {
        return fs::resolve(destination);
    }
    match destination.parent() {
        Some(parent) if parent.as_os_str().is_empty() => fs::resolve(Path::new(".")),
        Some(parent) => fs::resolve(parent),
        None => fs::resolve(destination),
    }
}

/// Nearest `package.json` at or above `start`, never at the filesystem root
fn find_manifest(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .take_while(|dir| dir.parent().is_some())
        .map(|dir| dir.join(MANIFEST_FILE))
        .find(|path| path.is_file())
}

fn declared_manager(dir: &Path, manifest: &PackageJson) -> Option<PackageManager> {
    manifest
        .package_manager
        .as_deref()
        .and_then(PackageManager::from_declaration)
        .or_else(|| PackageManager::from_lockfile(dir))
}

/// Manager of the closest ancestor workspace above `member_dir` that declares one
fn inherited_manager(member_dir: &Path) -> Option<PackageManager> {
    let mut next = member_dir.parent().map(Path::to_path_buf);
    while let Some(dir) = next {
        let manifest_path = find_manifest(&dir)?;
        let workspace_dir = manifest_path.parent()?;
        if let Ok(manifest) = PackageJson::read(&manifest_path) {
            if let Some(manager) = declared_manager(workspace_dir, &manifest) {
                return Some(manager);
            }
        }
        next = workspace_dir.parent().map(Path::to_path_buf);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_from_declaration() {
        assert_eq!(
            PackageManager::from_declaration("pnpm@9.1.0"),
            Some(PackageManager::Pnpm)
        );
        assert_eq!(
            PackageManager::from_declaration("yarn@4.0.2+sha256.abc"),
            Some(PackageManager::Yarn)
        );
        assert_eq!(PackageManager::from_declaration("npm"), Some(PackageManager::Npm));
        assert_eq!(PackageManager::from_declaration("bun@1.1.0"), None);
    }

    #[test]
    fn test_verbs_and_flags() {
        assert_eq!(PackageManager::Yarn.install_verb(), "add");
        assert_eq!(PackageManager::Npm.install_verb(), "install");
        assert_eq!(PackageManager::Pnpm.install_verb(), "install");
        assert_eq!(PackageManager::Pnpm.dev_flag(), "-D");
    }

    #[test]
    fn test_explicit_declaration_beats_lockfile() {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join("app");
        write(
            &project.join("package.json"),
            r#"{ "name": "app", "packageManager": "yarn@4.0.0" }"#,
        );
        write(&project.join("package-lock.json"), "{}");

        let (manager, manifest) =
            identify_package_manager(&project.join("src/components")).unwrap();

        assert_eq!(manager, PackageManager::Yarn);
        assert_eq!(manifest.name.as_deref(), Some("app"));
    }

    #[test]
    fn test_lockfile_detection() {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join("app");
        write(
            &project.join("package.json"),
            r#"{ "name": "app", "dependencies": { "react": "^18.2.0" } }"#,
        );
        write(&project.join("pnpm-lock.yaml"), "");

        let (manager, manifest) = identify_package_manager(&project.join("src/Button.tsx")).unwrap();

        assert_eq!(manager, PackageManager::Pnpm);
        assert_eq!(manifest.dependencies.unwrap()["react"], "^18.2.0");
    }

    #[test]
    fn test_inherits_manager_from_workspace_root() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("mono");
        write(&root.join("package.json"), r#"{ "name": "mono", "private": true }"#);
        write(&root.join("yarn.lock"), "");
        let member = root.join("packages/web");
        write(
            &member.join("package.json"),
            r#"{ "name": "web", "dependencies": { "react": "^18.0.0" } }"#,
        );

        let (manager, manifest) = identify_package_manager(&member.join("src/hooks")).unwrap();

        assert_eq!(manager, PackageManager::Yarn);
        assert_eq!(manifest.name.as_deref(), Some("web"));
    }

    #[test]
    fn test_manifest_without_manager_or_ancestor() {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join("app");
        write(&project.join("package.json"), r#"{ "name": "app" }"#);

        assert!(identify_package_manager(&project.join("src")).is_none());
    }

    #[test]
    fn test_no_manifest_anywhere() {
        let tmp = TempDir::new().unwrap();

        assert!(identify_package_manager(&tmp.path().join("a/b/c")).is_none());
    }

    #[test]
    fn test_inherits_past_member_without_manager() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("mono");
        write(
            &root.join("package.json"),
            r#"{ "name": "mono", "packageManager": "pnpm@9.0.0" }"#,
        );
        write(&root.join("packages/package.json"), "not json");
        let member = root.join("packages/ui");
        write(&member.join("package.json"), r#"{ "name": "ui" }"#);

        let (manager, manifest) = identify_package_manager(&member.join("src")).unwrap();

        assert_eq!(manager, PackageManager::Pnpm);
        assert_eq!(manifest.name.as_deref(), Some("ui"));
    }

    #[test]
    fn test_trailing_dot_searches_the_directory_itself() {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join("app");
        write(&project.join("package.json"), r#"{ "name": "app" }"#);
        write(&project.join("package-lock.json"), "{}");

        let (manager, manifest) = identify_package_manager(&project.join(".")).unwrap();

        assert_eq!(manager, PackageManager::Npm);
        assert_eq!(manifest.name.as_deref(), Some("app"));
    }

    #[test]
    fn test_search_start_for_relative_destinations() {
        let cwd = fs::resolve(Path::new(".")).unwrap();

        assert_eq!(search_start(Path::new(".")).unwrap(), cwd);
        assert_eq!(search_start(Path::new("src")).unwrap(), cwd);
        assert_eq!(search_start(Path::new("./src")).unwrap(), cwd);
        assert_eq!(search_start(Path::new("src/hooks")).unwrap(), cwd.join("src"));
        assert_eq!(
            search_start(Path::new("/app/src/Button.tsx")).unwrap(),
            PathBuf::from("/app/src")
        );
    }

    #[test]
    fn test_destination_directory_itself_is_not_searched_first() {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join("app");
        write(
            &project.join("package.json"),
            r#"{ "name": "app", "packageManager": "npm@10.0.0" }"#,
        );
        write(
            &project.join("src/package.json"),
            r#"{ "name": "inner", "packageManager": "pnpm@9.0.0" }"#,
        );

        let (manager, manifest) = identify_package_manager(&project.join("src")).unwrap();

        assert_eq!(manager, PackageManager::Npm);
        assert_eq!(manifest.name.as_deref(), Some("app"));
    }
}
