use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use expose_core::Workspace;
use serde::Deserialize;

use crate::{Error, Result};

/// File name of the package descriptor.
pub const PACKAGE_JSON: &str = "package.json";

/// Prefix shared by plugin packages of the framework.
const PLUGIN_PREFIX: &str = "grimoirejs-";

/// The parsed `package.json` of the library being indexed.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageJson {
    pub name: String,
    pub version: String,
    /// Remaining descriptor fields, untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PackageJson {
    /// Read and parse `package.json` from the given directory.
    pub fn load(workspace: &dyn Workspace, dir: &Path) -> Result<Self> {
        let path = dir.join(PACKAGE_JSON);
        Self::open(workspace, &path)
    }

    /// Read and parse a descriptor at an explicit path.
    pub fn open(workspace: &dyn Workspace, path: &Path) -> Result<Self> {
        let content = workspace.read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: PathBuf::from(path),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a descriptor, naming `filename` in diagnostics.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let package: PackageJson =
            serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        if package.name.trim().is_empty() {
            return Err(Error::empty_field("name", content, filename));
        }
        if package.version.trim().is_empty() {
            return Err(Error::empty_field("version", content, filename));
        }
        Ok(package)
    }

    /// Package name without npm scope and without the plugin prefix.
    ///
    /// `@scope/grimoirejs-math` and `grimoirejs-math` both yield `math`.
    pub fn short_name(&self) -> &str {
        let unscoped = match self.name.split_once('/') {
            Some((scope, rest)) if scope.starts_with('@') => rest,
            _ => self.name.as_str(),
        };
        match unscoped.strip_prefix(PLUGIN_PREFIX) {
            Some(rest) if !rest.is_empty() => rest,
            _ => unscoped,
        }
    }
}

impl FromStr for PackageJson {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, PACKAGE_JSON)
    }
}

#[cfg(test)]
mod tests {
    use expose_core::{LocalWorkspace, testing::MemoryWorkspace};
    use tempfile::TempDir;

    use super::*;

    fn package(name: &str) -> PackageJson {
        format!(r#"{{ "name": "{name}", "version": "1.0.0" }}"#)
            .parse()
            .unwrap()
    }

    #[test]
    fn test_parse_minimal() {
        let pkg: PackageJson = r#"{ "name": "grimoirejs-math", "version": "1.2.3" }"#
            .parse()
            .unwrap();
        assert_eq!(pkg.name, "grimoirejs-math");
        assert_eq!(pkg.version, "1.2.3");
        assert!(pkg.extra.is_empty());
    }

    #[test]
    fn test_parse_keeps_extra_fields() {
        let pkg: PackageJson =
            r#"{ "name": "a", "version": "0.1.0-beta.2", "main": "./ref/index.js" }"#
                .parse()
                .unwrap();
        assert_eq!(pkg.version, "0.1.0-beta.2");
        assert_eq!(pkg.extra["main"], "./ref/index.js");
    }

    #[test]
    fn test_missing_version_is_parse_error() {
        let err = r#"{ "name": "a" }"#.parse::<PackageJson>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = r#"{ "name": " ", "version": "1.0.0" }"#
            .parse::<PackageJson>()
            .unwrap_err();
        assert!(matches!(*err, Error::EmptyField { field: "name", .. }));
    }

    #[test]
    fn test_load_missing_descriptor() {
        let workspace = MemoryWorkspace::new();
        let err = PackageJson::load(&workspace, Path::new("/project")).unwrap_err();
        match *err {
            Error::Io { path, .. } => assert_eq!(path, PathBuf::from("/project/package.json")),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_workspace() {
        let workspace = MemoryWorkspace::new().with_file(
            "/project/package.json",
            r#"{ "name": "grimoirejs-fundamental", "version": "0.9.0" }"#,
        );
        let pkg = PackageJson::load(&workspace, Path::new("/project")).unwrap();
        assert_eq!(pkg.name, "grimoirejs-fundamental");
    }

    #[test]
    fn test_load_from_disk() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(
            dir.path().join(PACKAGE_JSON),
            r#"{ "name": "@grimoirejs/math", "version": "1.0.0", "private": true }"#,
        )
        .unwrap();

        let pkg = PackageJson::load(&LocalWorkspace, dir.path()).unwrap();
        assert_eq!(pkg.short_name(), "math");
        assert_eq!(pkg.extra["private"], true);
    }

    #[test]
    fn test_load_malformed_from_disk() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let content = "{\n  \"name\": \"a\",\n  \"version\": 1\n}";
        std::fs::write(dir.path().join(PACKAGE_JSON), content).unwrap();

        let err = PackageJson::load(&LocalWorkspace, dir.path()).unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_short_name() {
        assert_eq!(package("grimoirejs-math").short_name(), "math");
        assert_eq!(package("@grimoirejs/grimoirejs-math").short_name(), "math");
        assert_eq!(package("@grimoirejs/forward-shading").short_name(), "forward-shading");
        assert_eq!(package("grimoirejs").short_name(), "grimoirejs");
        assert_eq!(package("grimoirejs-").short_name(), "grimoirejs-");
    }
}
