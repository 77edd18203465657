use std::path::{Component, Path, PathBuf};

/// Default index file, relative to the working directory.
pub const DEFAULT_DEST: &str = "src/index.ts";
/// Default main entry module, relative to the working directory.
pub const DEFAULT_MAIN: &str = "src/main.ts";
/// Default source root, relative to the working directory.
pub const DEFAULT_SRC: &str = "src";
/// File name of the metadata file, in either mode.
pub const META_FILE: &str = "metaInfo.ts";

/// Options of one generation run.
///
/// Relative paths are resolved against `cwd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposeConfig {
    pub cwd: PathBuf,
    /// Index file to generate.
    pub dest: PathBuf,
    /// Main entry module, imported as `__MAIN__`.
    pub main: PathBuf,
    /// Source root to scan.
    pub src: PathBuf,
    /// Generate the core library index instead of a plugin index.
    pub core: bool,
    /// Scan `.ts` files instead of `.js` files.
    pub ts: bool,
    pub debug: bool,
    /// Template file replacing the embedded index template.
    pub index_template: Option<PathBuf>,
    /// Template file replacing the embedded metadata template.
    pub meta_template: Option<PathBuf>,
    /// Write files even when their content is unchanged.
    pub force: bool,
}

impl ExposeConfig {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            dest: PathBuf::from(DEFAULT_DEST),
            main: PathBuf::from(DEFAULT_MAIN),
            src: PathBuf::from(DEFAULT_SRC),
            core: false,
            ts: false,
            debug: false,
            index_template: None,
            meta_template: None,
            force: false,
        }
    }

    /// Extension of scanned modules.
    pub fn extension(&self) -> &'static str {
        if self.ts { "ts" } else { "js" }
    }

    pub fn dest_path(&self) -> PathBuf {
        self.resolve(&self.dest)
    }

    pub fn main_path(&self) -> PathBuf {
        self.resolve(&self.main)
    }

    pub fn src_root(&self) -> PathBuf {
        self.resolve(&self.src)
    }

    /// The metadata file, next to the index file.
    pub fn meta_path(&self) -> PathBuf {
        let dest = self.dest_path();
        let dir = dest.parent().unwrap_or(&self.cwd);
        dir.join(META_FILE)
    }

    pub fn index_template_path(&self) -> Option<PathBuf> {
        self.index_template.as_deref().map(|p| self.resolve(p))
    }

    pub fn meta_template_path(&self) -> Option<PathBuf> {
        self.meta_template.as_deref().map(|p| self.resolve(p))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        normalize(&self.cwd.join(path))
    }
}

/// Lexically normalize a path, dropping `.` and folding `..` components.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// `/`-separated path of `target` relative to `base`, both normalized.
pub fn relative_to(base: &Path, target: &Path) -> String {
    let base: Vec<_> = base.components().collect();
    let target: Vec<_> = target.components().collect();
    let common = base
        .iter()
        .zip(&target)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    parts.extend(std::iter::repeat_n("..".to_string(), base.len() - common));
    parts.extend(
        target[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );
    parts.join("/")
}
