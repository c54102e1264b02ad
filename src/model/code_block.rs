//! Code block representation.

/// A fenced code block extracted from a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// The language tag, the first token of the info string.
    pub language: String,

    /// The name assigned by the user, the second token of the info string.
    /// Empty for anonymous blocks.
    pub name: String,

    /// The code content, including its trailing newline.
    pub code: String,
}

impl CodeBlock {
    /// Creates a new CodeBlock.
    pub fn new(
        language: impl Into<String>,
        name: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            name: name.into(),
            code: code.into(),
        }
    }

    /// Builds a block from a fence info string and its code.
    ///
    /// The info string is split on whitespace: the first token is the
    /// language, the second the name. Anything after that is ignored.
    pub fn from_info(info: &str, code: impl Into<String>) -> Self {
        let mut parts = info.split_whitespace();
        let language = parts.next().unwrap_or_default();
        let name = parts.next().unwrap_or_default();
        Self::new(language, name, code)
    }

    /// Returns the block's name, if it has one.
    pub fn name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }
}
