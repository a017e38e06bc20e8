//! Indentation-aware rendering of build scripts.

/// Indentation unit for a rendered script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// Two spaces, the prevailing CMake convention.
    pub const CMAKE: Indent = Indent("  ");
    /// Four spaces, the Meson style-guide default.
    pub const MESON: Indent = Indent("    ");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Fluent line buffer for rendering build scripts.
///
/// # Example
///
/// ```
/// use mortar_gen::{Indent, ScriptBuilder};
///
/// let script = ScriptBuilder::new(Indent::CMAKE)
///     .line("set( SOURCES")
///     .indent()
///     .line("src/main.cpp")
///     .dedent()
///     .line(")")
///     .build();
///
/// assert_eq!(script, "set( SOURCES\n  src/main.cpp\n)\n");
/// ```
#[derive(Debug, Clone)]
pub struct ScriptBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl ScriptBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Add a line at the current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a `#` comment line.
    pub fn comment(mut self, text: &str) -> Self {
        self.write_indent();
        self.buffer.push_str("# ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the rendered script.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}
