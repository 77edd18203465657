use std::path::{Component, Path, PathBuf};

use crate::naming;

/// Placeholder directory segment of a file directly under the source root.
pub const NO_DIRECTORY: &str = "";

/// Ordered namespace segments of one module: its directories, outermost
/// first, followed by the file name without extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespaceSegments(Vec<String>);

impl NamespaceSegments {
    /// Classify a relative path.
    ///
    /// Both `/` and `\` are accepted as separators. A path without a
    /// directory yields the [`NO_DIRECTORY`] placeholder before its name.
    ///
    /// ```
    /// use expose_codegen::namespace::NamespaceSegments;
    ///
    /// let segments = NamespaceSegments::classify("foo/bar.ts");
    /// assert_eq!(segments.as_slice(), ["foo", "bar"]);
    ///
    /// let top = NamespaceSegments::classify("main.ts");
    /// assert_eq!(top.as_slice(), ["", "main"]);
    /// ```
    pub fn classify(relative: &str) -> Self {
        let normalized = relative.replace('\\', "/");
        let (dir, file) = match normalized.rsplit_once('/') {
            Some((dir, file)) => (dir, file),
            None => (NO_DIRECTORY, normalized.as_str()),
        };
        let mut segments: Vec<String> = dir.split('/').map(str::to_string).collect();
        segments.push(strip_extension(file).to_string());
        Self(segments)
    }

    /// Build segments directly, without classification.
    pub fn from_segments(segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All segments joined without separator.
    pub fn concatenated(&self) -> String {
        self.0.concat()
    }

    /// The binding name of this module, shared by its import and its leaf.
    pub fn identifier(&self) -> String {
        naming::identifier(&self.concatenated())
    }

    /// Dotted namespace path, skipping the placeholder (e.g. `foo.bar`).
    pub fn dotted(&self) -> String {
        self.0
            .iter()
            .filter(|s| s.as_str() != NO_DIRECTORY)
            .cloned()
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// A discovered module file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePath {
    /// Path relative to the source root, always `/`-separated.
    pub relative: String,
    /// Absolute path of the file.
    pub absolute: PathBuf,
    /// Namespace segments derived from `relative`.
    pub segments: NamespaceSegments,
}

impl ModulePath {
    /// Classify an absolute path found below `root`.
    ///
    /// Returns `None` when `absolute` is not inside `root`.
    pub fn new(root: &Path, absolute: impl Into<PathBuf>) -> Option<Self> {
        let absolute = absolute.into();
        let relative = relative_slash_path(absolute.strip_prefix(root).ok()?);
        let segments = NamespaceSegments::classify(&relative);
        Some(Self {
            relative,
            absolute,
            segments,
        })
    }

    /// Import specifier of this module: `./` plus the relative path without
    /// its extension.
    pub fn import_path(&self) -> String {
        let (dir, file) = match self.relative.rsplit_once('/') {
            Some((dir, file)) => (Some(dir), file),
            None => (None, self.relative.as_str()),
        };
        match dir {
            Some(dir) => format!("./{}/{}", dir, strip_extension(file)),
            None => format!("./{}", strip_extension(file)),
        }
    }

    /// Whether this is a TypeScript declaration file.
    pub fn is_declaration(&self) -> bool {
        self.relative.ends_with(".d.ts")
    }
}

/// Strip the last extension of a file name; dotfiles keep their name.
fn strip_extension(file: &str) -> &str {
    match file.rfind('.') {
        Some(i) if i > 0 => &file[..i],
        _ => file,
    }
}

fn relative_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_nested() {
        let segments = NamespaceSegments::classify("components/light/PointLight.ts");
        assert_eq!(segments.as_slice(), ["components", "light", "PointLight"]);
        assert_eq!(segments.concatenated(), "componentslightPointLight");
        assert_eq!(segments.dotted(), "components.light.PointLight");
    }

    #[test]
    fn test_classify_top_level() {
        let segments = NamespaceSegments::classify("main.js");
        assert_eq!(segments.as_slice(), ["", "main"]);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments.dotted(), "main");
    }

    #[test]
    fn test_classify_backslash_separator() {
        let segments = NamespaceSegments::classify("foo\\bar\\baz.ts");
        assert_eq!(segments.as_slice(), ["foo", "bar", "baz"]);
    }

    #[test]
    fn test_classify_strips_last_extension_only() {
        let segments = NamespaceSegments::classify("foo/bar.spec.ts");
        assert_eq!(segments.as_slice(), ["foo", "bar.spec"]);
    }

    #[test]
    fn test_classify_dotfile() {
        let segments = NamespaceSegments::classify("foo/.hidden");
        assert_eq!(segments.as_slice(), ["foo", ".hidden"]);
    }

    #[test]
    fn test_identifier_of_segments() {
        assert_eq!(NamespaceSegments::classify("foo/bar.js").identifier(), "foobar");
        assert_eq!(NamespaceSegments::classify("default.js").identifier(), "_default");
        assert_eq!(NamespaceSegments::classify("2d/my-shape.ts").identifier(), "_2dmy_shape");
    }

    #[test]
    fn test_module_path_relative() {
        let module = ModulePath::new(Path::new("/p/src"), "/p/src/foo/bar.ts").unwrap();
        assert_eq!(module.relative, "foo/bar.ts");
        assert_eq!(module.segments.as_slice(), ["foo", "bar"]);
        assert_eq!(module.import_path(), "./foo/bar");
    }

    #[test]
    fn test_module_path_outside_root() {
        assert!(ModulePath::new(Path::new("/p/src"), "/p/other/bar.ts").is_none());
    }

    #[test]
    fn test_import_path_top_level() {
        let module = ModulePath::new(Path::new("/p/src"), "/p/src/main.ts").unwrap();
        assert_eq!(module.import_path(), "./main");
    }

    #[test]
    fn test_import_path_keeps_inner_dots() {
        let module = ModulePath::new(Path::new("/p/src"), "/p/src/a.js/b.ts.ts").unwrap();
        assert_eq!(module.import_path(), "./a.js/b.ts");
    }

    #[test]
    fn test_is_declaration() {
        let decl = ModulePath::new(Path::new("/p"), "/p/types/index.d.ts").unwrap();
        let module = ModulePath::new(Path::new("/p"), "/p/types/index.ts").unwrap();
        assert!(decl.is_declaration());
        assert!(!module.is_declaration());
    }
}
