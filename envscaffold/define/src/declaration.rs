//! Environment variable declarations.
//!
//! These are the building blocks of the generated `.env.example` file. The
//! scheme mapper produces an ordered list of [`EnvEntry`] values, and the
//! template assembler renders them line by line.

use std::fmt;

/// A single `NAME=placeholder` assignment, optionally preceded by comments.
///
/// ## Examples
///
/// ```
/// use envscaffold_define::VariableDeclaration;
///
/// let decl = VariableDeclaration::new("API_KEY_PETSTORE", "your_api_key_here")
///     .with_comment("Petstore API key");
///
/// assert_eq!(decl.to_string(), "# Petstore API key\nAPI_KEY_PETSTORE=your_api_key_here");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    /// Environment variable name.
    pub name: String,
    /// Example value written after the `=`.
    pub placeholder: String,
    /// Comment lines rendered above the assignment, without the `# ` prefix.
    pub comment_lines: Vec<String>,
}

impl VariableDeclaration {
    /// Creates a declaration with no comments.
    pub fn new(name: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            placeholder: placeholder.into(),
            comment_lines: Vec::new(),
        }
    }

    /// Appends a comment line.
    pub fn with_comment(mut self, line: impl Into<String>) -> Self {
        self.comment_lines.push(line.into());
        self
    }

    /// Returns the `NAME=placeholder` line.
    pub fn assignment(&self) -> String {
        format!("{}={}", self.name, self.placeholder)
    }
}

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.comment_lines {
            writeln!(f, "# {line}")?;
        }
        write!(f, "{}={}", self.name, self.placeholder)
    }
}

/// One item of the authentication block: a free-standing comment or a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvEntry {
    /// A comment line, stored without the `# ` prefix.
    Comment(String),
    /// A variable declaration.
    Variable(VariableDeclaration),
}

impl EnvEntry {
    /// Creates a comment entry.
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }

    /// Returns the declaration if this entry is a variable.
    pub fn as_variable(&self) -> Option<&VariableDeclaration> {
        match self {
            Self::Variable(decl) => Some(decl),
            Self::Comment(_) => None,
        }
    }

    /// Returns `true` for variable entries.
    pub fn is_variable(&self) -> bool {
        self.as_variable().is_some()
    }
}

impl From<VariableDeclaration> for EnvEntry {
    fn from(decl: VariableDeclaration) -> Self {
        Self::Variable(decl)
    }
}

impl fmt::Display for EnvEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comment(text) => write!(f, "# {text}"),
            Self::Variable(decl) => write!(f, "{decl}"),
        }
    }
}
