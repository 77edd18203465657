//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Renderable};

/// One level of indentation in generated TypeScript and JavaScript.
pub const TYPESCRIPT_INDENT: &str = "  ";

/// Builds code with proper indentation.
///
/// # Example
///
/// ```
/// use expose_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("const __EXPOSE__ = {")
///     .push_indent()
///     .push_line("\"math\": math,")
///     .push_dedent()
///     .push_line("};");
///
/// assert_eq!(builder.build(), "const __EXPOSE__ = {\n  \"math\": math,\n};\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: &'static str,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder using `indent` for each level.
    pub fn new(indent: &'static str) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (JS/TS default).
    pub fn typescript() -> Self {
        Self::new(TYPESCRIPT_INDENT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Raw(s) => {
                self.push_raw(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}
