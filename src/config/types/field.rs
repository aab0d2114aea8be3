//! Dotted, index-aware config field paths.

use owo_colors::OwoColorize;
use std::fmt;

/// A config field path used to locate diagnostics in the tree.
///
/// Navigation positions are only known at runtime, so paths are built up
/// segment by segment while walking the structure:
///
/// ```ignore
/// let nav = FieldPath::new("themeConfig.sidebar.nav");
/// let node = nav.index(0).field("children").index(4);
/// assert_eq!(node.as_str(), "themeConfig.sidebar.nav[0].children[4]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Append a field segment (`.name`).
    #[inline]
    pub fn field(&self, name: &str) -> Self {
        Self(format!("{}.{name}", self.0))
    }

    /// Append an index segment (`[i]`).
    #[inline]
    pub fn index(&self, i: usize) -> Self {
        Self(format!("{}[{i}]", self.0))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_building() {
        let nav = FieldPath::new("themeConfig.sidebar.nav");
        let node = nav.index(0).field("children").index(4);
        assert_eq!(node.as_str(), "themeConfig.sidebar.nav[0].children[4]");
        assert_eq!(node.field("path").as_str(), "themeConfig.sidebar.nav[0].children[4].path");
    }
}
