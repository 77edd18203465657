//! TypeScript import builder.

/// A default import, `import <name> from "<from>";`.
#[derive(Debug, Clone)]
pub struct Import {
    name: String,
    from: String,
}

impl Import {
    pub fn new(name: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            from: from.into(),
        }
    }

    /// Build the import statement without a trailing newline.
    pub fn build(&self) -> String {
        format!("import {} from \"{}\";", self.name, self.from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_import() {
        let i = Import::new("gr", "grimoirejs").build();
        assert_eq!(i, "import gr from \"grimoirejs\";");
    }
}
