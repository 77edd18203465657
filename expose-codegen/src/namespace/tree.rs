use indexmap::IndexMap;

use super::{NO_DIRECTORY, NamespaceSegments};
use crate::{Diagnostic, ast::JsObject, naming};

const PHASE: &str = "namespace";

/// A node of the namespace tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A directory level.
    Branch(NamespaceTree),
    /// A module, holding the identifier its import is bound to.
    Leaf(String),
}

/// Nested mapping from path-derived keys to sub-namespaces or modules.
///
/// Keys keep their first-insertion order on every level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceTree {
    entries: IndexMap<String, Node>,
}

impl NamespaceTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    /// Follow a path of keys from this level.
    pub fn lookup<S: AsRef<str>>(&self, path: &[S]) -> Option<&Node> {
        let (first, rest) = path.split_first()?;
        let node = self.entries.get(first.as_ref())?;
        match (node, rest.is_empty()) {
            (node, true) => Some(node),
            (Node::Branch(tree), false) => tree.lookup(rest),
            (Node::Leaf(_), false) => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every leaf as `(key path, identifier)`, depth first in key order.
    pub fn leaves(&self) -> Vec<(Vec<String>, String)> {
        let mut out = Vec::new();
        self.collect_leaves(&mut Vec::new(), &mut out);
        out
    }

    fn collect_leaves(&self, path: &mut Vec<String>, out: &mut Vec<(Vec<String>, String)>) {
        for (key, node) in &self.entries {
            path.push(key.clone());
            match node {
                Node::Leaf(ident) => out.push((path.clone(), ident.clone())),
                Node::Branch(tree) => tree.collect_leaves(path, out),
            }
            path.pop();
        }
    }

    /// The code representation: leaves become unquoted identifier references.
    pub fn to_js_object(&self) -> JsObject {
        self.entries
            .iter()
            .fold(JsObject::new(), |obj, (key, node)| match node {
                Node::Leaf(ident) => obj.raw(key, ident),
                Node::Branch(tree) => obj.object(key, tree.to_js_object()),
            })
    }

    /// The data representation: leaves become identifier strings.
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .entries
            .iter()
            .map(|(key, node)| {
                let value = match node {
                    Node::Leaf(ident) => serde_json::Value::String(ident.clone()),
                    Node::Branch(tree) => tree.to_json(),
                };
                (key.clone(), value)
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

/// Folds segment sequences into one [`NamespaceTree`].
///
/// Conflicting paths are resolved by last write and reported as warnings.
#[derive(Debug, Default)]
pub struct NamespaceBuilder {
    root: NamespaceTree,
    diagnostics: Vec<Diagnostic>,
}

impl NamespaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one module's segments into the tree.
    ///
    /// Sequences shorter than two segments contribute nothing.
    pub fn add(&mut self, segments: &NamespaceSegments) {
        fold(
            &mut self.root,
            segments.as_slice(),
            String::new(),
            &mut Vec::new(),
            &mut self.diagnostics,
        );
    }

    pub fn finish(self) -> (NamespaceTree, Vec<Diagnostic>) {
        (self.root, self.diagnostics)
    }
}

/// `prefix` accumulates the consumed folder names for the leaf identifier;
/// `keys` tracks the same path for diagnostics.
fn fold(
    level: &mut NamespaceTree,
    segments: &[String],
    prefix: String,
    keys: &mut Vec<String>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let [folder, rest @ ..] = segments else {
        return;
    };
    let Some(next) = rest.first() else {
        return;
    };

    if folder == NO_DIRECTORY {
        let ident = naming::identifier(&format!("{prefix}{next}"));
        set_leaf(level, next, ident, keys, diagnostics);
        return;
    }

    let prefix = format!("{prefix}{folder}");
    keys.push(folder.clone());
    let mut branch = take_branch(level, folder, keys, diagnostics);
    if rest.len() > 1 {
        fold(&mut branch, rest, prefix, keys, diagnostics);
    } else {
        let ident = naming::identifier(&format!("{prefix}{next}"));
        set_leaf(&mut branch, next, ident, keys, diagnostics);
    }
    // an existing key keeps its position
    level.entries.insert(folder.clone(), Node::Branch(branch));
    keys.pop();
}

/// Detach the sub-namespace at `key`, starting a fresh one when the key is
/// missing or holds a module.
fn take_branch(
    level: &mut NamespaceTree,
    key: &str,
    keys: &[String],
    diagnostics: &mut Vec<Diagnostic>,
) -> NamespaceTree {
    match level.entries.get_mut(key) {
        Some(Node::Branch(tree)) => std::mem::take(tree),
        Some(Node::Leaf(ident)) => {
            diagnostics.push(
                Diagnostic::warning(
                    PHASE,
                    format!("namespace '{}' replaces module '{}'", keys.join("."), ident),
                )
                .at(keys.join(".")),
            );
            NamespaceTree::new()
        }
        None => NamespaceTree::new(),
    }
}

fn set_leaf(
    level: &mut NamespaceTree,
    key: &str,
    ident: String,
    keys: &[String],
    diagnostics: &mut Vec<Diagnostic>,
) {
    let location = keys
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(key))
        .collect::<Vec<_>>()
        .join(".");
    match level.entries.insert(key.to_string(), Node::Leaf(ident)) {
        Some(Node::Leaf(previous)) => diagnostics.push(
            Diagnostic::warning(
                PHASE,
                format!("duplicate module '{location}'; '{previous}' is replaced by the later one"),
            )
            .at(location),
        ),
        Some(Node::Branch(_)) => diagnostics.push(
            Diagnostic::warning(
                PHASE,
                format!("module '{location}' replaces the namespace of the same name"),
            )
            .at(location),
        ),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(paths: &[&str]) -> (NamespaceTree, Vec<Diagnostic>) {
        let mut builder = NamespaceBuilder::new();
        for path in paths {
            builder.add(&NamespaceSegments::classify(path));
        }
        builder.finish()
    }

    fn leaf(ident: &str) -> Node {
        Node::Leaf(ident.to_string())
    }

    #[test]
    fn test_nested_leaves() {
        let (tree, diagnostics) = build(&["foo/bar.js", "foo/baz.js"]);

        assert!(diagnostics.is_empty());
        assert_eq!(tree.keys().collect::<Vec<_>>(), ["foo"]);
        assert_eq!(tree.lookup(&["foo", "bar"]), Some(&leaf("foobar")));
        assert_eq!(tree.lookup(&["foo", "baz"]), Some(&leaf("foobaz")));
    }

    #[test]
    fn test_deep_paths_create_levels_on_demand() {
        let (tree, _) = build(&["a/b/c/d.ts", "a/b/e.ts", "a/f.ts"]);

        assert_eq!(tree.lookup(&["a", "b", "c", "d"]), Some(&leaf("abcd")));
        assert_eq!(tree.lookup(&["a", "b", "e"]), Some(&leaf("abe")));
        assert_eq!(tree.lookup(&["a", "f"]), Some(&leaf("af")));
        match tree.get("a") {
            Some(Node::Branch(a)) => assert_eq!(a.keys().collect::<Vec<_>>(), ["b", "f"]),
            other => panic!("expected branch, got {other:?}"),
        }
    }

    #[test]
    fn test_top_level_file_is_root_leaf() {
        let (tree, _) = build(&["util.ts", "foo/bar.ts"]);

        assert_eq!(tree.get("util"), Some(&leaf("util")));
        assert_eq!(tree.keys().collect::<Vec<_>>(), ["util", "foo"]);
    }

    #[test]
    fn test_short_sequences_contribute_nothing() {
        let mut builder = NamespaceBuilder::new();
        builder.add(&NamespaceSegments::from_segments(["lonely"]));
        builder.add(&NamespaceSegments::from_segments(Vec::<String>::new()));
        let (tree, diagnostics) = builder.finish();

        assert!(tree.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_leaf_depth_matches_segments() {
        let paths = ["x/y/z.ts", "x/w.ts", "v.ts", "p/q/r/s/t.ts"];
        let (tree, _) = build(&paths);

        for path in paths {
            let segments = NamespaceSegments::classify(path);
            let keys: Vec<&String> = segments
                .as_slice()
                .iter()
                .filter(|s| s.as_str() != NO_DIRECTORY)
                .collect();
            let found = tree.leaves().into_iter().find(|(p, _)| {
                p.iter().collect::<Vec<_>>() == keys
            });
            let (key_path, ident) = found.expect("leaf for every path");
            assert_eq!(key_path.len(), keys.len());
            assert_eq!(ident, segments.identifier());
        }
    }

    #[test]
    fn test_existing_branch_is_not_replaced() {
        let (tree, _) = build(&["foo/a.ts", "foo/b.ts", "foo/c/d.ts"]);

        match tree.get("foo") {
            Some(Node::Branch(foo)) => {
                assert_eq!(foo.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
            }
            other => panic!("expected branch, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_segments_last_write_wins() {
        let mut builder = NamespaceBuilder::new();
        builder.add(&NamespaceSegments::from_segments(["foo", "bar"]));
        builder.add(&NamespaceSegments::from_segments(["foo", "bar"]));
        let (tree, diagnostics) = builder.finish();

        assert_eq!(tree.lookup(&["foo", "bar"]), Some(&leaf("foobar")));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("foo.bar"));
    }

    #[test]
    fn test_leaf_over_branch_warns() {
        let mut builder = NamespaceBuilder::new();
        builder.add(&NamespaceSegments::classify("foo/bar.ts"));
        builder.add(&NamespaceSegments::from_segments(["", "foo"]));
        let (tree, diagnostics) = builder.finish();

        assert_eq!(tree.get("foo"), Some(&leaf("foo")));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].phase, "namespace");
    }

    #[test]
    fn test_branch_over_leaf_warns() {
        let (tree, diagnostics) = build(&["foo.ts", "foo/bar.ts"]);

        assert_eq!(tree.lookup(&["foo", "bar"]), Some(&leaf("foobar")));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("foo"));
    }

    #[test]
    fn test_branch_over_leaf_keeps_position() {
        let (tree, _) = build(&["a.ts", "foo.ts", "b.ts", "foo/bar.ts"]);

        assert_eq!(tree.keys().collect::<Vec<_>>(), ["a", "foo", "b"]);
        match tree.get("foo") {
            Some(Node::Branch(foo)) => assert_eq!(foo.keys().collect::<Vec<_>>(), ["bar"]),
            other => panic!("expected branch, got {other:?}"),
        }
    }

    #[test]
    fn test_order_independent_shape() {
        let (forward, _) = build(&["a/x.ts", "b/y.ts", "a/z.ts"]);
        let (backward, _) = build(&["a/z.ts", "b/y.ts", "a/x.ts"]);

        let mut f = forward.leaves();
        let mut b = backward.leaves();
        f.sort();
        b.sort();
        assert_eq!(f, b);
    }

    #[test]
    fn test_reserved_leaf_identifier() {
        let (tree, _) = build(&["class.ts"]);
        assert_eq!(tree.get("class"), Some(&leaf("_class")));
    }

    #[test]
    fn test_to_json_keeps_order() {
        let (tree, _) = build(&["foo/bar.js", "foo/baz.js", "qux.js"]);
        assert_eq!(
            tree.to_json().to_string(),
            r#"{"foo":{"bar":"foobar","baz":"foobaz"},"qux":"qux"}"#
        );
    }

    #[test]
    fn test_to_js_object() {
        let (tree, _) = build(&["foo/bar.js", "foo/baz.js"]);
        insta::assert_snapshot!(tree.to_js_object().build(), @r#"
        {
          "foo": {
            "bar": foobar,
            "baz": foobaz,
          },
        }
        "#);
    }
}
