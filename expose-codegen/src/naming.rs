//! Identifier naming for generated TypeScript/JavaScript.

/// Language-specific naming conventions.
///
/// Defines which words cannot be used as bindings and how to escape them.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "_class")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Turn an arbitrary string into a legal, non-reserved identifier.
    ///
    /// Characters outside `[A-Za-z0-9_$]` become `_`, an empty result becomes
    /// `_`, a leading digit is prefixed with `_` and reserved words are
    /// escaped. The mapping is pure: equal inputs give equal outputs.
    pub fn identifier(&self, raw: &str) -> String {
        let mut ident: String = raw
            .chars()
            .map(|c| if is_identifier_char(c) { c } else { '_' })
            .collect();
        if ident.is_empty() {
            return "_".to_string();
        }
        if ident.starts_with(|c: char| c.is_ascii_digit()) {
            ident.insert(0, '_');
        }
        self.safe_name(&ident)
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

fn escape_ts_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// TypeScript naming conventions.
///
/// Besides the language keywords this also reserves the bindings the
/// generated index file declares itself and the globals it refers to, so a
/// module named after one of them cannot shadow it.
pub const TS_NAMING: NamingConvention = NamingConvention {
    reserved_words: &[
        // JavaScript reserved words
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "let",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        // TypeScript reserved words
        "any",
        "as",
        "async",
        "await",
        "boolean",
        "constructor",
        "declare",
        "get",
        "implements",
        "interface",
        "module",
        "namespace",
        "never",
        "number",
        "object",
        "package",
        "private",
        "protected",
        "public",
        "readonly",
        "require",
        "set",
        "static",
        "string",
        "symbol",
        "type",
        "undefined",
        "unknown",
        // Globals and bindings of the generated index
        "arguments",
        "eval",
        "Object",
        "window",
        "gr",
        "__BASE__",
        "__EXPOSE__",
        "__MAIN__",
        "__META__",
    ],
    escape_reserved: escape_ts_reserved,
};

/// Sanitize a string into an identifier using [`TS_NAMING`].
pub fn identifier(raw: &str) -> String {
    TS_NAMING.identifier(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_reserved_words() {
        assert!(TS_NAMING.is_reserved("class"));
        assert!(TS_NAMING.is_reserved("async"));
        assert!(TS_NAMING.is_reserved("__EXPOSE__"));
        assert!(!TS_NAMING.is_reserved("hello"));
    }

    #[test]
    fn test_ts_escape_reserved() {
        assert_eq!(TS_NAMING.safe_name("class"), "_class");
        assert_eq!(TS_NAMING.safe_name("hello"), "hello");
    }

    #[test]
    fn test_identifier_keeps_legal_names() {
        assert_eq!(identifier("foobar"), "foobar");
        assert_eq!(identifier("Foo_Bar$1"), "Foo_Bar$1");
    }

    #[test]
    fn test_identifier_replaces_illegal_chars() {
        assert_eq!(identifier("my-module"), "my_module");
        assert_eq!(identifier("a.b/c\\d"), "a_b_c_d");
        assert_eq!(identifier("über"), "_ber");
        assert_eq!(identifier("with space"), "with_space");
    }

    #[test]
    fn test_identifier_leading_digit() {
        assert_eq!(identifier("3d"), "_3d");
        assert_eq!(identifier("2"), "_2");
    }

    #[test]
    fn test_identifier_empty() {
        assert_eq!(identifier(""), "_");
    }

    #[test]
    fn test_identifier_reserved_words() {
        assert_eq!(identifier("default"), "_default");
        assert_eq!(identifier("class"), "_class");
        assert_eq!(identifier("gr"), "_gr");
        assert_ne!(identifier("import"), "import");
    }

    #[test]
    fn test_identifier_is_pure() {
        for raw in ["foo/bar", "class", "1x", "", "a-b.c"] {
            assert_eq!(identifier(raw), identifier(raw));
        }
    }
}
